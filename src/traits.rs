//! The collaborators the postponement engine relies on.
//!
//! The engine never reaches for a host application by itself: every side effect goes through one of these traits,
//! bundled together in a [`Host`].

use std::error::Error;

use async_trait::async_trait;

use crate::task::Task;

/// The error type returned by collaborators
pub type CollaboratorError = Box<dyn Error + Send + Sync>;

/// Something that is able to persist a modified task
#[async_trait]
pub trait TaskSaver {
    /// Replace `original` by `updated`, wherever `original` is stored.
    /// Failures must be returned, not swallowed
    async fn save(&self, original: &Task, updated: &Task) -> Result<(), CollaboratorError>;
}

/// A reference to a note
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct DocumentRef {
    basename: String,
}

impl DocumentRef {
    pub fn new(basename: String) -> Self {
        Self { basename }
    }

    /// The name of the note, without its folder nor its extension
    pub fn basename(&self) -> &str {
        &self.basename
    }
}

/// Access to the notes of the user
#[async_trait]
pub trait Workspace {
    /// Returns the note that is currently open, if any
    fn active_document(&self) -> Option<DocumentRef>;
    /// Returns the current content of a note
    async fn read(&self, doc: &DocumentRef) -> Result<String, CollaboratorError>;
    /// Overwrite the content of a note
    async fn write(&self, doc: &DocumentRef, content: String) -> Result<(), CollaboratorError>;
}

/// Displays short-lived messages to the user
pub trait Notifier {
    /// Fire and forget
    fn notify(&self, message: &str, duration_ms: u64);
}

/// Turns a task into the line that represents it in a note
pub trait TaskFormatter {
    fn to_line_text(&self, task: &Task) -> String;
}

/// The UI control (usually a button) that triggered an action
pub trait Control {
    fn is_enabled(&self) -> bool;
    fn set_enabled(&self, enabled: bool);
}


/// Every collaborator needed by the postponement and relocation workflows
pub struct Host<'a> {
    pub saver: &'a (dyn TaskSaver + Send + Sync),
    pub workspace: &'a (dyn Workspace + Send + Sync),
    pub notifier: &'a (dyn Notifier + Send + Sync),
    pub formatter: &'a (dyn TaskFormatter + Send + Sync),
}

impl<'a> Host<'a> {
    pub fn new(
        saver: &'a (dyn TaskSaver + Send + Sync),
        workspace: &'a (dyn Workspace + Send + Sync),
        notifier: &'a (dyn Notifier + Send + Sync),
        formatter: &'a (dyn TaskFormatter + Send + Sync),
    ) -> Self {
        Self { saver, workspace, notifier, formatter }
    }
}
