//! Declarative command/argument catalog and its lookups
//!
//! The catalog is static data built once at compile time; this module adds
//! the expansion logic that resolves a (tool, command) pair into the full
//! flag list the command takes. Lookup failures are programming errors in
//! the catalog or the caller, so they surface as [`CatalogError`] and are
//! never recovered.

pub mod args;
pub mod tools;

pub use args::{ArgDescriptor, ArgValidation, ARGS};
pub use tools::{commands, tool_by_topic, CommandDescriptor, Tool, TOOLS};

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("tool '{tool}' does not declare command '{command}'")]
    UnknownCommand { tool: String, command: String },
    #[error("no descriptor for command '{0}'")]
    MissingCommandDescriptor(String),
    #[error("no descriptor for argument '{0}'")]
    MissingArgDescriptor(String),
}

/// Resolve the full, ordered flag list for a tool's command.
///
/// The command's base list comes first, in declaration order; per-tool
/// additions follow. An addition whose name collides with a base entry
/// replaces it in place, so the result never holds two flags with the
/// same name.
pub fn expand(
    tool: &Tool,
    command: &str,
) -> Result<Vec<&'static ArgDescriptor>, CatalogError> {
    if !tool.has_command(command) {
        return Err(CatalogError::UnknownCommand {
            tool: tool.name.to_string(),
            command: command.to_string(),
        });
    }
    let descriptor = tools::command_descriptor(command)
        .ok_or_else(|| CatalogError::MissingCommandDescriptor(command.to_string()))?;

    let mut names: Vec<&'static str> = descriptor.args.to_vec();
    for (cmd, additions) in tool.arg_additions {
        if *cmd != command {
            continue;
        }
        for addition in *additions {
            if !names.contains(addition) {
                names.push(addition);
            }
        }
    }

    names
        .into_iter()
        .map(|name| {
            args::arg_descriptor(name)
                .ok_or_else(|| CatalogError::MissingArgDescriptor(name.to_string()))
        })
        .collect()
}

/// A command descriptor together with its expanded flag list
#[derive(Debug)]
pub struct ExpandedCommand {
    pub descriptor: &'static CommandDescriptor,
    pub flags: Vec<&'static ArgDescriptor>,
}

/// Resolve a tool's command descriptor with its flags expanded
pub fn command_expanded(tool: &Tool, command: &str) -> Result<ExpandedCommand, CatalogError> {
    let flags = expand(tool, command)?;
    let descriptor = tools::command_descriptor(command)
        .ok_or_else(|| CatalogError::MissingCommandDescriptor(command.to_string()))?;
    Ok(ExpandedCommand { descriptor, flags })
}
