//! Moving a task to the note that is currently open
//!
//! The original task is marked as done, with a link to its new location, and a copy of it is appended to the active
//! note.
//! These are two separate writes: if the second one fails, the original task stays completed, and no copy is made.

use crate::config;
use crate::control::InteractionGuard;
use crate::error::PostponeError;
use crate::task::{Status, Task};
use crate::traits::{Control, DocumentRef, Host};

/// What happened when moving a task
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RelocationOutcome {
    /// The task has been moved to this note
    Moved { destination: String },
    /// There was no note to move the task to. Nothing has been written
    NoActiveDocument,
    /// The control is disabled, another action is pending
    Busy,
    /// Something went wrong. Some writes may have happened already
    Failed { message: String },
}

/// The variant of `task` that stays at its original location: completed, and linking to `destination`
pub fn completed_and_linked(task: &Task, destination: &DocumentRef) -> Task {
    task.with_status(Status::done())
        .with_description(format!("{} [[{}]]", task.description(), destination.basename()))
}

/// Move `task` to the active note.
///
/// Failures are not returned: they are reported to the user through the notifier, and summed up in the outcome.
/// The control is disabled while this runs, and enabled again afterwards in every case.
pub async fn move_task_here(task: &Task, control: &dyn Control, host: &Host<'_>) -> RelocationOutcome {
    let _guard = match InteractionGuard::acquire(control) {
        Some(guard) => guard,
        None => return RelocationOutcome::Busy,
    };

    match run_relocation(task, host).await {
        Ok(destination) => {
            let basename = destination.basename().to_string();
            log::info!("Moved {:?} to {}", task.description(), basename);
            host.notifier.notify(&format!("✅ Task moved to \"{}\"", basename), config::get(&config::SUCCESS_NOTICE_MS));
            RelocationOutcome::Moved { destination: basename }
        },
        Err(PostponeError::NoActiveDestination) => {
            log::warn!("Unable to move {:?}: no active note", task.description());
            let message = format!("⚠️ {}", PostponeError::NoActiveDestination);
            host.notifier.notify(&message, config::get(&config::ERROR_NOTICE_MS));
            RelocationOutcome::NoActiveDocument
        },
        Err(err) => {
            log::error!("Error moving task: {}", err);
            host.notifier.notify(&format!("⚠️ Error moving task: {}", err), config::get(&config::ERROR_NOTICE_MS));
            RelocationOutcome::Failed { message: err.to_string() }
        },
    }
}

async fn run_relocation(task: &Task, host: &Host<'_>) -> Result<DocumentRef, PostponeError> {
    let destination = host.workspace.active_document()
        .ok_or(PostponeError::NoActiveDestination)?;

    let completed = completed_and_linked(task, &destination);
    host.saver.save(task, &completed).await?;

    let content = host.workspace.read(&destination).await?;
    let updated_content = format!("{}\n{}", content, host.formatter.to_line_text(task));
    host.workspace.write(&destination, updated_content).await?;

    Ok(destination)
}
