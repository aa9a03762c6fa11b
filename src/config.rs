//! Support for library configuration options

use std::sync::{Arc, Mutex};
use once_cell::sync::Lazy;

/// The status symbol given to a task once it has been moved to another note.
/// Feel free to override it when initing this library, e.g. if your vault uses a custom "done" status.
pub static DONE_SYMBOL: Lazy<Arc<Mutex<char>>> = Lazy::new(|| Arc::new(Mutex::new('x')));

/// How long (in milliseconds) warnings are displayed, e.g. when a task has no date to postpone
pub static WARNING_NOTICE_MS: Lazy<Arc<Mutex<u64>>> = Lazy::new(|| Arc::new(Mutex::new(10_000)));

/// How long (in milliseconds) confirmations are displayed
pub static SUCCESS_NOTICE_MS: Lazy<Arc<Mutex<u64>>> = Lazy::new(|| Arc::new(Mutex::new(2_000)));

/// How long (in milliseconds) relocation errors and relocation warnings are displayed
pub static ERROR_NOTICE_MS: Lazy<Arc<Mutex<u64>>> = Lazy::new(|| Arc::new(Mutex::new(5_000)));


/// Returns the current value of a setting.
///
/// A poisoned lock still holds a valid value, so it is read anyway.
pub fn get<T: Copy>(setting: &Lazy<Arc<Mutex<T>>>) -> T {
    match setting.lock() {
        Ok(guard) => *guard,
        Err(poisoned) => *poisoned.into_inner(),
    }
}

/// Overrides a setting
pub fn set<T>(setting: &Lazy<Arc<Mutex<T>>>, value: T) {
    match setting.lock() {
        Ok(mut guard) => *guard = value,
        Err(poisoned) => *poisoned.into_inner() = value,
    }
}


#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_defaults() {
        assert_eq!(get(&WARNING_NOTICE_MS), 10_000);
        assert_eq!(get(&SUCCESS_NOTICE_MS), 2_000);
        assert_eq!(get(&ERROR_NOTICE_MS), 5_000);
    }
}
