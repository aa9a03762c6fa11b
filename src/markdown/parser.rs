//! A module to parse Markdown task lines

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::task::{Status, Task};
use super::{DATE_FORMAT, DUE_SIGNIFIER, SCHEDULED_SIGNIFIER, START_SIGNIFIER};

static TASK_LINE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\s*)([-*+]) \[(.)\] ?(.*)$").expect("valid task line regex"));
static TRAILING_DATE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s*(🛫|⏳|📅)\s*(\d{4}-\d{2}-\d{2})\s*$").expect("valid date regex"));
static TRAILING_TAG_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+(#[^\s#]+)\s*$").expect("valid tag regex"));
static BLOCK_ID_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+\^([A-Za-z0-9-]+)\s*$").expect("valid block id regex"));

/// A task, along with the way its line was written
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParsedLine {
    /// The leading whitespace of the line
    pub indentation: String,
    /// `-`, `*` or `+`
    pub bullet: char,
    pub task: Task,
    /// The `^block-id` that ends the line, without its caret
    pub block_id: Option<String>,
}

impl ParsedLine {
    /// Build the line back, with its original indentation, bullet and block id
    pub fn rebuild_with(&self, task: &Task) -> String {
        let line = super::build_line(task);
        let mut rebuilt = format!("{}{}{}", self.indentation, self.bullet, &line[1..]);
        if let Some(block_id) = &self.block_id {
            rebuilt.push_str(" ^");
            rebuilt.push_str(block_id);
        }
        rebuilt
    }
}

/// Parse a Markdown line into a [`Task`].
///
/// Returns `None` if this line is not a task (e.g. a heading or a regular list item).
/// Dates are read from the end of the line, in any order, possibly mixed with `#tags` and followed by a `^block-id`.
/// Tags found among the dates are appended to the description, in their original order.
/// Anything else stays in the description.
pub fn parse_task_line(line: &str) -> Option<ParsedLine> {
    let captures = TASK_LINE_RE.captures(line)?;
    let indentation = captures.get(1)?.as_str().to_string();
    let bullet = captures.get(2)?.as_str().chars().next()?;
    let symbol = captures.get(3)?.as_str().chars().next()?;
    let mut body = captures.get(4)?.as_str().trim_end().to_string();

    let mut block_id = None;
    if let Some(c) = BLOCK_ID_RE.captures(&body) {
        block_id = Some(c[1].to_string());
        let matched_at = c.get(0).map(|m| m.start()).unwrap_or(body.len());
        body.truncate(matched_at);
    }

    let mut due = None;
    let mut scheduled = None;
    let mut start = None;
    let mut trailing_tags = Vec::new();
    loop {
        if let Some(c) = TRAILING_TAG_RE.captures(&body) {
            trailing_tags.push(c[1].to_string());
            let matched_at = c.get(0).map(|m| m.start()).unwrap_or(body.len());
            body.truncate(matched_at);
            continue;
        }

        let (signifier, date, matched_at) = match TRAILING_DATE_RE.captures(&body) {
            None => break,
            Some(c) => {
                let date = match NaiveDate::parse_from_str(&c[2], DATE_FORMAT) {
                    Ok(date) => date,
                    Err(err) => {
                        log::debug!("Ignoring invalid date {:?} in {:?}: {}", &c[2], line, err);
                        break;
                    },
                };
                (c[1].to_string(), date, c.get(0).map(|m| m.start()).unwrap_or(0))
            },
        };

        let slot = match signifier.as_str() {
            DUE_SIGNIFIER => &mut due,
            SCHEDULED_SIGNIFIER => &mut scheduled,
            START_SIGNIFIER => &mut start,
            _ => break,
        };
        // When a date appears twice, the last one wins
        if slot.is_none() {
            *slot = Some(date);
        }
        body.truncate(matched_at);
    }

    let mut description = body.trim().to_string();
    for tag in trailing_tags.iter().rev() {
        if !description.is_empty() {
            description.push(' ');
        }
        description.push_str(tag);
    }

    let task = Task::new_with_parameters(description, Status::by_symbol(symbol), due, scheduled, start);
    Some(ParsedLine { indentation, bullet, task, block_id })
}
