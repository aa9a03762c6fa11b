//! A module to build Markdown task lines

use chrono::NaiveDate;

use crate::task::Task;
use super::{DATE_FORMAT, DUE_SIGNIFIER, SCHEDULED_SIGNIFIER, START_SIGNIFIER};

/// Create the Markdown line of a task, without any indentation
pub fn build_line(task: &Task) -> String {
    let mut line = format!("- [{}] {}", task.status().symbol(), task.description());

    let dates = [
        (START_SIGNIFIER, task.start()),
        (SCHEDULED_SIGNIFIER, task.scheduled()),
        (DUE_SIGNIFIER, task.due()),
    ];
    for (signifier, date) in dates.iter() {
        if let Some(date) = date {
            line.push_str(&format!(" {} {}", signifier, format_date(date)));
        }
    }
    line
}

fn format_date(date: &NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}
