//! Mobile SDK tools - host binary for the `mobilesdk` command namespace
//!
//! Plays the host-framework role: builds the registry once, surfaces each
//! command record as a `<topic>:<command>` subcommand, parses the flags the
//! record declares, and routes the invocation through the record's `run`.

use anyhow::{Context, Result};
use clap::{Arg, ArgAction, Command};
use mobilesdk_core::catalog::commands;
use mobilesdk_core::version::SDK_VERSION;
use mobilesdk_core::{
    ConsoleOutput, InvocationContext, Registry, RunOutcome, SdkProjectCreator, SdkTemplates,
    Session,
};

const USER_AGENT: &str = concat!("mobilesdk-tools/", env!("CARGO_PKG_VERSION"));

/// Materialize one clap subcommand per registry command record
fn build_cli(registry: &Registry) -> Command {
    let mut cli = Command::new("mobilesdk-tools")
        .about(registry.namespace.description)
        .version(SDK_VERSION)
        .arg_required_else_help(true);

    for record in &registry.commands {
        let mut subcommand = Command::new(format!("{}:{}", record.topic, record.command))
            .about(record.description)
            .long_about(record.long_description)
            .after_help(record.help);
        for flag in &record.flags {
            let mut arg = Arg::new(flag.name)
                .long(flag.name)
                .help(flag.description)
                .long_help(flag.long_description)
                .action(ArgAction::Set)
                .value_name(flag.name.to_uppercase());
            if let Some(default) = flag.default {
                arg = arg.default_value(default);
            }
            subcommand = subcommand.arg(arg);
        }
        cli = cli.subcommand(subcommand);
    }

    cli
}

#[tokio::main]
async fn main() -> Result<()> {
    // Handle Ctrl+C gracefully
    ctrlc::set_handler(|| std::process::exit(130)).ok();

    let registry = mobilesdk_core::build_registry()?;
    let matches = build_cli(&registry).get_matches();

    let Some((name, sub_matches)) = matches.subcommand() else {
        return Ok(());
    };
    let (topic, command) = name
        .split_once(':')
        .context("Subcommand names are always <topic>:<command>")?;
    let record = registry
        .find_command(topic, command)
        .context("Unknown command")?;

    let mut context = InvocationContext::default();
    for flag in &record.flags {
        if let Some(value) = sub_matches.get_one::<String>(flag.name) {
            context.flags.insert(flag.name.to_string(), value.clone());
        }
    }

    // Only the listing path needs the template catalog; skip the registry
    // fetch everywhere else.
    let templates = if record.command == commands::LIST_TEMPLATES {
        SdkTemplates::load(USER_AGENT, &ConsoleOutput).await
    } else {
        SdkTemplates::builtin()
    };

    let session = Session {
        creator: SdkProjectCreator::new(ConsoleOutput, USER_AGENT),
        templates,
        out: ConsoleOutput,
    };

    match record.run(&context, &session).await? {
        RunOutcome::Completed | RunOutcome::Unhandled => Ok(()),
        RunOutcome::Rejected => std::process::exit(1),
        RunOutcome::Exit(code) => std::process::exit(code),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_surfaces_every_registry_command() {
        let registry = mobilesdk_core::build_registry().unwrap();
        let cli = build_cli(&registry);
        let names: Vec<_> = cli
            .get_subcommands()
            .map(|c| c.get_name().to_string())
            .collect();
        assert_eq!(names.len(), registry.commands.len());
        assert!(names.contains(&"android:create".to_string()));
        assert!(names.contains(&"hybrid:listtemplates".to_string()));
    }

    #[test]
    fn flags_carry_catalog_defaults() {
        let registry = mobilesdk_core::build_registry().unwrap();
        let cli = build_cli(&registry);
        let matches = cli
            .try_get_matches_from([
                "mobilesdk-tools",
                "android:create",
                "--apptype=native_kotlin",
                "--appname=MyApp",
                "--packagename=com.acme.myapp",
                "--organization=Acme",
            ])
            .unwrap();
        let (_, sub) = matches.subcommand().unwrap();
        assert_eq!(sub.get_one::<String>("outputdir").map(String::as_str), Some("."));
        assert_eq!(sub.get_one::<String>("appname").map(String::as_str), Some("MyApp"));
    }
}
