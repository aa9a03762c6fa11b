//! Errors that can happen when postponing or moving tasks

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PostponeError {
    /// The task has no due, scheduled nor start date
    #[error("Postponement requires a date: due, scheduled or start.")]
    NotPostponable,

    /// Moving a task requires a destination note
    #[error("No active file found. Please open a note first.")]
    NoActiveDestination,

    /// A collaborator failed to save a task, or to read or write a note
    #[error("{0}")]
    Persistence(String),

    /// The task to replace does not exist in the given note(s)
    #[error("Task not found in {note}")]
    TaskNotFound { note: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<crate::traits::CollaboratorError> for PostponeError {
    fn from(err: crate::traits::CollaboratorError) -> Self {
        PostponeError::Persistence(err.to_string())
    }
}
