///! Some utility functions

use chrono::{Datelike, Local, NaiveDate};

use crate::happens::HappensDate;
use crate::task::Task;

/// The current local date
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Format a date the way menus and notices display it, e.g. `Fri 12th Jan`
pub fn format_date(date: NaiveDate) -> String {
    let day = date.day();
    let suffix = match (day % 10, day % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{} {}{} {}", date.format("%a"), day, suffix, date.format("%b"))
}

/// A debug utility that pretty-prints a task
pub fn print_task(task: &Task) {
    let completion = if task.status().is_done() { "✓" } else { " " };
    let dates: Vec<String> = HappensDate::PRIORITY.iter()
        .filter_map(|field| task.date(*field).map(|date| format!("{}: {}", field, date)))
        .collect();
    println!("    {} {} ({})\t{}", completion, task.description(), task.status().name(), dates.join(", "));
}
