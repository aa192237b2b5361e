//! Exported command registry
//!
//! Built once at startup from the catalog: one topic per tool, one command
//! record per (tool, command). Each record carries its own bound tool and
//! command name, so `run` needs no hidden captured state.

use anyhow::Result;

use crate::catalog::{self, ArgDescriptor, CatalogError, Tool, TOOLS};
use crate::create::ProjectCreator;
use crate::dispatch::{self, RunOutcome, Session};
use crate::output::Output;
use crate::templates::TemplateProvider;
use crate::validate::{self, FlagValues};
use crate::{NAMESPACE, NAMESPACE_DESCRIPTION};

/// Plugin identity presented to the host
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Namespace {
    pub name: &'static str,
    pub description: &'static str,
}

/// Named grouping a tool's commands are surfaced under
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Topic {
    pub name: &'static str,
    pub description: String,
}

/// Per-invocation state handed in by the host
#[derive(Debug, Clone, Default)]
pub struct InvocationContext {
    /// User-supplied flag values, keyed by argument name
    pub flags: FlagValues,
}

/// One invokable command, bound to its owning tool
#[derive(Debug)]
pub struct CommandSpec {
    pub tool: &'static Tool,
    pub topic: &'static str,
    pub command: &'static str,
    pub description: &'static str,
    pub long_description: &'static str,
    pub help: &'static str,
    pub flags: Vec<&'static ArgDescriptor>,
}

impl CommandSpec {
    /// Validate the context's flags, then dispatch. Invalid values reject
    /// the invocation with the errors already reported.
    pub async fn run<P, T, O>(
        &self,
        context: &InvocationContext,
        session: &Session<P, T, O>,
    ) -> Result<RunOutcome>
    where
        P: ProjectCreator,
        T: TemplateProvider,
        O: Output,
    {
        if !validate::validate(self.tool, self.command, &context.flags, &session.out)? {
            return Ok(RunOutcome::Rejected);
        }
        dispatch::dispatch(self.tool, self.command, &context.flags, session).await
    }
}

/// The full exported registry
#[derive(Debug)]
pub struct Registry {
    pub namespace: Namespace,
    pub topics: Vec<Topic>,
    pub commands: Vec<CommandSpec>,
}

impl Registry {
    pub fn find_command(&self, topic: &str, command: &str) -> Option<&CommandSpec> {
        self.commands
            .iter()
            .find(|c| c.topic == topic && c.command == command)
    }
}

/// Materialize the registry from the static catalog. The catalog is static,
/// so an error here means a descriptor table defect.
pub fn build() -> Result<Registry, CatalogError> {
    let topics = TOOLS
        .iter()
        .map(|tool| Topic {
            name: tool.topic,
            description: format!(
                "Command for building {} using Salesforce Mobile SDK",
                tool.purpose
            ),
        })
        .collect();

    let mut commands = Vec::new();
    for tool in TOOLS {
        for &command in tool.commands {
            let expanded = catalog::command_expanded(tool, command)?;
            commands.push(CommandSpec {
                tool,
                topic: tool.topic,
                command,
                description: expanded.descriptor.description,
                long_description: expanded.descriptor.long_description,
                help: expanded.descriptor.help,
                flags: expanded.flags,
            });
        }
    }

    Ok(Registry {
        namespace: Namespace {
            name: NAMESPACE,
            description: NAMESPACE_DESCRIPTION,
        },
        topics,
        commands,
    })
}
