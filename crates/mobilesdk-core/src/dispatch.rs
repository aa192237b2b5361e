//! Command dispatch
//!
//! Routing only: the dispatcher is called after validation has passed and
//! hands the work to the session's collaborators. It never touches the
//! process lifecycle itself: the `listtemplates` branch reports the exit
//! through [`RunOutcome::Exit`] and the top-level caller performs it.

use anyhow::Result;

use crate::catalog::{commands, Tool};
use crate::create::ProjectCreator;
use crate::output::Output;
use crate::templates::{self, TemplateProvider};
use crate::validate::FlagValues;
use crate::version;

/// Collaborators a command invocation runs against
pub struct Session<P: ProjectCreator, T: TemplateProvider, O: Output> {
    pub creator: P,
    pub templates: T,
    pub out: O,
}

/// What a command run asks of the caller
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// Command finished; control returns to the host normally
    Completed,
    /// Validation failed; errors were already reported, nothing dispatched
    Rejected,
    /// Command finished and the process should exit with this status
    Exit(i32),
    /// Command name not recognized by the dispatcher; nothing was invoked
    Unhandled,
}

/// Route a validated invocation to exactly one collaborator.
pub async fn dispatch<P, T, O>(
    tool: &Tool,
    command: &str,
    values: &FlagValues,
    session: &Session<P, T, O>,
) -> Result<RunOutcome>
where
    P: ProjectCreator,
    T: TemplateProvider,
    O: Output,
{
    match command {
        commands::CREATE | commands::CREATE_WITH_TEMPLATE => {
            session.creator.create_app(tool, values).await?;
            Ok(RunOutcome::Completed)
        }
        commands::VERSION => {
            version::print_version(tool, &session.out);
            Ok(RunOutcome::Completed)
        }
        commands::LIST_TEMPLATES => {
            templates::list_templates(tool, &session.templates, &session.out);
            Ok(RunOutcome::Exit(0))
        }
        _ => Ok(RunOutcome::Unhandled),
    }
}
