//! This crate postpones and relocates to-do items written in Markdown notes.
//!
//! A task has up to three dates (due, scheduled and start). Postponing it moves one of them:
//! [`HappensDate::resolve`] decides which one, and the [`postpone`] module computes the new date.
//!
//! The [`menu`] module describes the postponement options that can be offered for a task, and which one is the current value. \
//! [`applier::postpone`] saves a postponed task, and [`relocation::move_task_here`] moves a task to the note that is currently open.
//!
//! Side effects (saving tasks, reading and writing notes, notifying the user) go through the [`traits`] collaborators.
//! A [`Vault`] implements them over a folder of Markdown files.

pub mod traits;

mod task;
pub use task::{Status, StatusType, Task};
mod happens;
pub use happens::HappensDate;
pub mod postpone;
pub use postpone::{Postponement, PostponementKind, PostponementResult, TimeUnit};
pub mod menu;
pub use menu::PostponeMenu;
pub mod applier;
pub mod relocation;

pub mod control;
pub mod markdown;
pub mod notice;
pub mod error;
pub use error::PostponeError;
pub mod vault;
pub use vault::Vault;
pub mod mock_behaviour;

pub mod config;
pub mod utils;
