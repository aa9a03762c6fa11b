//! To-do tasks, as they are written in Markdown notes

use serde::{Deserialize, Serialize};
use chrono::NaiveDate;

use crate::happens::HappensDate;

/// The broad category of a status. Several symbols can share the same type
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum StatusType {
    Todo,
    InProgress,
    Done,
    Cancelled,
}

/// The status of a task, identified by the symbol between the brackets of `- [ ]`
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Status {
    symbol: char,
    name: String,
    kind: StatusType,
}

/// The statuses that are known out of the box
const KNOWN_STATUSES: &[(char, &str, StatusType)] = &[
    (' ', "Todo", StatusType::Todo),
    ('/', "In Progress", StatusType::InProgress),
    ('x', "Done", StatusType::Done),
    ('X', "Done", StatusType::Done),
    ('-', "Cancelled", StatusType::Cancelled),
];

impl Status {
    pub fn new(symbol: char, name: String, kind: StatusType) -> Self {
        Self { symbol, name, kind }
    }

    /// Look a status up by its symbol.
    /// Unknown symbols are kept as-is, and are considered as "to do"
    pub fn by_symbol(symbol: char) -> Self {
        match KNOWN_STATUSES.iter().find(|(s, _, _)| *s == symbol) {
            Some((s, name, kind)) => Self::new(*s, name.to_string(), *kind),
            None => {
                log::debug!("Unknown status symbol {:?}, treating it as a to-do", symbol);
                Self::new(symbol, String::from("Unknown"), StatusType::Todo)
            },
        }
    }

    pub fn todo() -> Self {
        Self::by_symbol(' ')
    }

    /// The status given to tasks that have been completed. See [`crate::config::DONE_SYMBOL`]
    pub fn done() -> Self {
        Self::by_symbol(crate::config::get(&crate::config::DONE_SYMBOL))
    }

    pub fn symbol(&self) -> char       { self.symbol }
    pub fn name(&self) -> &str         { &self.name  }
    pub fn kind(&self) -> StatusType   { self.kind   }
    pub fn is_done(&self) -> bool      { self.kind == StatusType::Done }
}

impl Default for Status {
    fn default() -> Self {
        Self::todo()
    }
}


/// A to-do task.
///
/// This is an immutable value: every `with_*` method returns a new task and leaves `self` untouched.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// The text of the task, without its status nor its dates
    description: String,
    status: Status,

    due: Option<NaiveDate>,
    scheduled: Option<NaiveDate>,
    start: Option<NaiveDate>,
}

impl Task {
    /// Create an open task without any date
    pub fn new(description: String) -> Self {
        Self::new_with_parameters(description, Status::todo(), None, None, None)
    }

    pub fn new_with_parameters(description: String, status: Status,
                               due: Option<NaiveDate>, scheduled: Option<NaiveDate>, start: Option<NaiveDate>,
                            ) -> Self
    {
        Self { description, status, due, scheduled, start }
    }

    pub fn description(&self) -> &str          { &self.description }
    pub fn status(&self) -> &Status            { &self.status      }
    pub fn due(&self) -> Option<NaiveDate>       { self.due       }
    pub fn scheduled(&self) -> Option<NaiveDate> { self.scheduled }
    pub fn start(&self) -> Option<NaiveDate>     { self.start     }

    /// Returns the value of one of the three date fields
    pub fn date(&self, field: HappensDate) -> Option<NaiveDate> {
        match field {
            HappensDate::Due => self.due,
            HappensDate::Scheduled => self.scheduled,
            HappensDate::Start => self.start,
        }
    }

    /// Returns a copy of this task, with one date field replaced (or removed if `date` is `None`)
    pub fn with_date(&self, field: HappensDate, date: Option<NaiveDate>) -> Self {
        let mut new_task = self.clone();
        match field {
            HappensDate::Due => new_task.due = date,
            HappensDate::Scheduled => new_task.scheduled = date,
            HappensDate::Start => new_task.start = date,
        }
        new_task
    }

    pub fn with_status(&self, status: Status) -> Self {
        Self { status, ..self.clone() }
    }

    pub fn with_description(&self, description: String) -> Self {
        Self { description, ..self.clone() }
    }
}
