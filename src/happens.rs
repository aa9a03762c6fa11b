//! The date fields a postponement can act upon

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::task::Task;

/// Which one of the dates of a task is being postponed
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HappensDate {
    Due,
    Scheduled,
    Start,
}

impl HappensDate {
    /// Every field, in the order they are considered for postponement
    pub const PRIORITY: [HappensDate; 3] = [HappensDate::Due, HappensDate::Scheduled, HappensDate::Start];

    /// Decide which date of `task` should be postponed.
    ///
    /// Due dates win over scheduled dates, which win over start dates.
    /// Returns `None` when the task has none of them, i.e. when it cannot be postponed.
    pub fn resolve(task: &Task) -> Option<HappensDate> {
        Self::PRIORITY.iter()
            .copied()
            .find(|field| task.date(*field).is_some())
    }

    /// "Due", "Scheduled" or "Start"
    pub fn capitalized(&self) -> &'static str {
        match self {
            HappensDate::Due => "Due",
            HappensDate::Scheduled => "Scheduled",
            HappensDate::Start => "Start",
        }
    }
}

impl Display for HappensDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            HappensDate::Due => write!(f, "due"),
            HappensDate::Scheduled => write!(f, "scheduled"),
            HappensDate::Start => write!(f, "start"),
        }
    }
}


#[cfg(test)]
mod test {
    use super::*;
    use chrono::NaiveDate;
    use crate::task::Status;

    fn task(due: Option<u32>, scheduled: Option<u32>, start: Option<u32>) -> Task {
        let d = |day: Option<u32>| day.map(|day| NaiveDate::from_ymd_opt(2024, 1, day).unwrap());
        Task::new_with_parameters("Some task".into(), Status::todo(), d(due), d(scheduled), d(start))
    }

    #[test]
    fn test_resolve_priority() {
        assert_eq!(HappensDate::resolve(&task(Some(1), Some(2), Some(3))), Some(HappensDate::Due));
        assert_eq!(HappensDate::resolve(&task(Some(1), None, Some(3))), Some(HappensDate::Due));
        assert_eq!(HappensDate::resolve(&task(None, Some(2), Some(3))), Some(HappensDate::Scheduled));
        assert_eq!(HappensDate::resolve(&task(None, None, Some(3))), Some(HappensDate::Start));
        assert_eq!(HappensDate::resolve(&task(None, None, None)), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(HappensDate::Scheduled.to_string(), "scheduled");
        assert_eq!(HappensDate::Start.capitalized(), "Start");
    }
}
