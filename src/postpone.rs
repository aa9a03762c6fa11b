//! Computation of postponed dates
//!
//! Every function in this module is pure: it receives the task and the current date, and returns a new task.

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};
use chrono::{Days, Months, NaiveDate};

use crate::happens::HappensDate;
use crate::task::Task;

/// The calendar unit of a postponement
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimeUnit {
    Days,
    Weeks,
    Months,
}

impl TimeUnit {
    /// Returns "day", "week", "month", or their plural form
    pub fn name(&self, amount: u32) -> &'static str {
        match (self, amount == 1) {
            (TimeUnit::Days, true) => "day",
            (TimeUnit::Days, false) => "days",
            (TimeUnit::Weeks, true) => "week",
            (TimeUnit::Weeks, false) => "weeks",
            (TimeUnit::Months, true) => "month",
            (TimeUnit::Months, false) => "months",
        }
    }

    /// Move `date` forward by `amount` units.
    /// Months are calendar months (Jan 31st + 1 month is the last day of February).
    /// This saturates instead of overflowing past the last representable date.
    pub fn add_to(&self, date: NaiveDate, amount: u32) -> NaiveDate {
        let shifted = match self {
            TimeUnit::Days => date.checked_add_days(Days::new(amount as u64)),
            TimeUnit::Weeks => date.checked_add_days(Days::new(amount as u64 * 7)),
            TimeUnit::Months => date.checked_add_months(Months::new(amount)),
        };
        shifted.unwrap_or(NaiveDate::MAX)
    }
}

/// How the new date is derived
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PostponementKind {
    /// `today + amount`, whatever the current date of the task is
    Fixed,
    /// `max(today, current date) + amount`
    Relative,
    /// The date is removed
    Clear,
}

/// One postponement option, e.g. "in 2 days" or "tomorrow"
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Postponement {
    pub kind: PostponementKind,
    pub unit: TimeUnit,
    pub amount: u32,
}

impl Postponement {
    pub fn fixed(unit: TimeUnit, amount: u32) -> Self {
        Self { kind: PostponementKind::Fixed, unit, amount }
    }

    pub fn relative(unit: TimeUnit, amount: u32) -> Self {
        Self { kind: PostponementKind::Relative, unit, amount }
    }

    /// Unit and amount do not matter when clearing a date
    pub fn clear() -> Self {
        Self { kind: PostponementKind::Clear, unit: TimeUnit::Days, amount: 0 }
    }

    pub fn today() -> Self {
        Self::fixed(TimeUnit::Days, 0)
    }

    pub fn tomorrow() -> Self {
        Self::fixed(TimeUnit::Days, 1)
    }
}

impl Display for Postponement {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            PostponementKind::Fixed => write!(f, "today + {} {}", self.amount, self.unit.name(self.amount)),
            PostponementKind::Relative => write!(f, "+{} {}", self.amount, self.unit.name(self.amount)),
            PostponementKind::Clear => write!(f, "remove date"),
        }
    }
}


/// The outcome of a postponement computation
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PostponementResult {
    /// `None` only when the date has been cleared
    pub new_date: Option<NaiveDate>,
    pub new_task: Task,
}


/// Compute the result of any kind of postponement
pub fn compute(task: &Task, field: HappensDate, postponement: &Postponement, today: NaiveDate) -> PostponementResult {
    let Postponement { kind, unit, amount } = *postponement;
    match kind {
        PostponementKind::Fixed => compute_fixed(task, field, unit, amount, today),
        PostponementKind::Relative => compute_relative(task, field, unit, amount, today),
        PostponementKind::Clear => compute_cleared(task, field),
    }
}

/// Set `field` to `today + amount`, ignoring its current value
pub fn compute_fixed(task: &Task, field: HappensDate, unit: TimeUnit, amount: u32, today: NaiveDate) -> PostponementResult {
    let new_date = unit.add_to(today, amount);
    PostponementResult {
        new_date: Some(new_date),
        new_task: task.with_date(field, Some(new_date)),
    }
}

/// Set `field` to `amount` units after its current value, or after today if the current value is in the past.
///
/// This never moves a date backwards relative to today.
pub fn compute_relative(task: &Task, field: HappensDate, unit: TimeUnit, amount: u32, today: NaiveDate) -> PostponementResult {
    let base = match task.date(field) {
        Some(current) if current > today => current,
        _ => today,
    };
    let new_date = unit.add_to(base, amount);
    PostponementResult {
        new_date: Some(new_date),
        new_task: task.with_date(field, Some(new_date)),
    }
}

/// Remove `field` from the task
pub fn compute_cleared(task: &Task, field: HappensDate) -> PostponementResult {
    PostponementResult {
        new_date: None,
        new_task: task.with_date(field, None),
    }
}
