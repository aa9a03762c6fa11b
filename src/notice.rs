//! Notifications displayed to the user

use std::fmt::{Display, Error, Formatter};
use std::sync::Mutex;

use crate::traits::Notifier;

/// A message that has been displayed to the user
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub message: String,
    pub duration_ms: u64,
}

impl Display for Notice {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        write!(f, "{} ({} ms)", self.message, self.duration_ms)
    }
}


/// A [`Notifier`] that logs every notice and keeps track of them, so that they can be displayed (or checked) later
#[derive(Debug, Default)]
pub struct NoticeLog {
    notices: Mutex<Vec<Notice>>,
}

impl NoticeLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns every notice received so far
    pub fn notices(&self) -> Vec<Notice> {
        match self.notices.lock() {
            Ok(notices) => notices.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

impl Notifier for NoticeLog {
    fn notify(&self, message: &str, duration_ms: u64) {
        let notice = Notice { message: message.to_string(), duration_ms };
        log::info!("Notice: {}", notice);
        match self.notices.lock() {
            Ok(mut notices) => notices.push(notice),
            Err(poisoned) => poisoned.into_inner().push(notice),
        }
    }
}
