//! Preventing a control from triggering the same action twice while it is running

use std::sync::atomic::{AtomicBool, Ordering};

use crate::traits::Control;

/// A basic control, whose only state is whether it accepts interactions
#[derive(Debug)]
pub struct Button {
    enabled: AtomicBool,
}

impl Button {
    pub fn new() -> Self {
        Self { enabled: AtomicBool::new(true) }
    }
}

impl Default for Button {
    fn default() -> Self {
        Self::new()
    }
}

impl Control for Button {
    fn is_enabled(&self) -> bool {
        self.enabled.load(Ordering::SeqCst)
    }

    fn set_enabled(&self, enabled: bool) {
        self.enabled.store(enabled, Ordering::SeqCst)
    }
}


/// Disables a control for as long as it lives.
///
/// The control is enabled again when the guard is dropped, whatever happened meanwhile (including early returns
/// and errors), unless [`InteractionGuard::keep_disabled`] is called.
#[must_use]
pub struct InteractionGuard<'a> {
    control: &'a dyn Control,
    release: bool,
}

impl<'a> InteractionGuard<'a> {
    /// Disable `control`.
    /// Returns `None` if it is already disabled, i.e. if another action is in progress
    pub fn acquire(control: &'a dyn Control) -> Option<Self> {
        if control.is_enabled() == false {
            log::debug!("Control is disabled, ignoring this interaction");
            return None;
        }
        control.set_enabled(false);
        Some(Self { control, release: true })
    }

    /// Leave the control disabled after the guard is gone (e.g. until the view that displays it is refreshed)
    pub fn keep_disabled(mut self) {
        self.release = false;
    }
}

impl<'a> Drop for InteractionGuard<'a> {
    fn drop(&mut self) {
        if self.release {
            self.control.set_enabled(true);
        }
    }
}
