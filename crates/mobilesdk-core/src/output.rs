//! Console output collaborator
//!
//! Commands never print directly; they go through [`Output`] so tests can
//! capture everything the user would see.

use colored::Colorize;

/// Colors the commands are allowed to print in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Plain,
    Cyan,
    Magenta,
    Green,
    Yellow,
}

/// Output channel for command results and validation errors
pub trait Output {
    /// Informational line on stdout
    fn info(&self, message: &str, color: Color);

    /// Error line on stderr
    fn error(&self, message: &str);
}

/// Production output: colored stdout/stderr
#[derive(Debug, Default)]
pub struct ConsoleOutput;

impl Output for ConsoleOutput {
    fn info(&self, message: &str, color: Color) {
        match color {
            Color::Plain => println!("{}", message),
            Color::Cyan => println!("{}", message.cyan()),
            Color::Magenta => println!("{}", message.magenta()),
            Color::Green => println!("{}", message.green()),
            Color::Yellow => println!("{}", message.yellow()),
        }
    }

    fn error(&self, message: &str) {
        eprintln!("{}", message.red());
    }
}

#[cfg(test)]
pub(crate) mod recording {
    use super::{Color, Output};
    use std::cell::RefCell;

    /// Test double that records every line instead of printing
    #[derive(Debug, Default)]
    pub struct RecordingOutput {
        pub infos: RefCell<Vec<(String, Color)>>,
        pub errors: RefCell<Vec<String>>,
    }

    impl RecordingOutput {
        pub fn info_lines(&self) -> Vec<String> {
            self.infos
                .borrow()
                .iter()
                .map(|(line, _)| line.clone())
                .collect()
        }
    }

    impl Output for RecordingOutput {
        fn info(&self, message: &str, color: Color) {
            self.infos.borrow_mut().push((message.to_string(), color));
        }

        fn error(&self, message: &str) {
            self.errors.borrow_mut().push(message.to_string());
        }
    }
}
