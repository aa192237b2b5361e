//! Mobile SDK Core - Salesforce Mobile SDK app scaffolding commands
//!
//! This library backs the `mobilesdk` command namespace: a declarative
//! catalog of tools (iOS, Android, hybrid, React Native builders), their
//! commands and flags, plus the validation and dispatch machinery that turns
//! a parsed invocation into a scaffolded project.
//!
//! # Architecture
//!
//! - **Catalog** - static tool/command/argument tables and their expansion
//! - **Registry** - the exported namespace/topics/commands view, built once
//!   at startup; each command record binds its tool and command name and
//!   exposes `run(context, session)`
//! - **Collaborators** - project creation, template listing, and console
//!   output sit behind traits (`ProjectCreator`, `TemplateProvider`,
//!   `Output`) bundled in a `Session`, so dispatch is testable in isolation
//!
//! A `run` is validate-then-dispatch: every flag is checked against its
//! argument's predicate (all violations reported in one pass), and only a
//! fully valid invocation reaches a collaborator.

pub mod catalog;
pub mod create;
pub mod dispatch;
pub mod output;
pub mod registry;
pub mod templates;
pub mod validate;
pub mod version;

pub use catalog::{expand, ArgDescriptor, ArgValidation, CatalogError, Tool, TOOLS};
pub use create::{ProjectCreator, SdkProjectCreator};
pub use dispatch::{dispatch, RunOutcome, Session};
pub use output::{Color, ConsoleOutput, Output};
pub use registry::{build as build_registry, CommandSpec, InvocationContext, Registry};
pub use templates::{list_templates, SdkTemplates, Template, TemplateProvider};
pub use validate::{validate, FlagValues};

/// Namespace this plugin registers its topics under
pub const NAMESPACE: &str = "mobilesdk";

/// Namespace description presented to the host
pub const NAMESPACE_DESCRIPTION: &str =
    "Create mobile apps based on the Salesforce Mobile SDK";
