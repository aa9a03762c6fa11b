//! This module handles conversion between Markdown task lines and [`Task`]s
//!
//! A task line looks like `- [ ] Water the plants 🛫 2024-01-01 ⏳ 2024-01-05 📅 2024-01-10`

mod parser;
pub use parser::{parse_task_line, ParsedLine};
mod builder;
pub use builder::build_line;

use crate::task::Task;
use crate::traits::TaskFormatter;

pub const START_SIGNIFIER: &str = "🛫";
pub const SCHEDULED_SIGNIFIER: &str = "⏳";
pub const DUE_SIGNIFIER: &str = "📅";

pub(crate) const DATE_FORMAT: &str = "%Y-%m-%d";

/// Formats tasks as Markdown list items
#[derive(Clone, Copy, Debug, Default)]
pub struct MarkdownFormat;

impl TaskFormatter for MarkdownFormat {
    fn to_line_text(&self, task: &Task) -> String {
        build_line(task)
    }
}
