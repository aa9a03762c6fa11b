//! Applying a postponement to a task

use chrono::NaiveDate;

use crate::config;
use crate::control::InteractionGuard;
use crate::error::PostponeError;
use crate::happens::HappensDate;
use crate::menu::success_message;
use crate::postpone::{self, Postponement};
use crate::task::Task;
use crate::traits::{Control, Host};

/// What happened when a postponement was requested
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PostponeOutcome {
    /// The task has no date to postpone. The user has been warned
    Blocked,
    /// The task already has the requested date. Nothing has been saved
    Unchanged,
    /// The control is disabled, another action is pending
    Busy,
    /// The task has been saved with its new date
    Postponed { field: HappensDate, new_date: Option<NaiveDate> },
}

/// Postpone `task` and save it.
///
/// Saving errors are returned to the caller, and the control is enabled again in that case.
/// On success, the control stays disabled: `task` is stale until the view that displays it has been refreshed.
pub async fn postpone(task: &Task, postponement: &Postponement, today: NaiveDate,
                      control: &dyn Control, host: &Host<'_>) -> Result<PostponeOutcome, PostponeError>
{
    let field = match HappensDate::resolve(task) {
        Some(field) => field,
        None => {
            log::warn!("Unable to postpone {:?}: it has no date", task.description());
            let message = format!("⚠️ {}", PostponeError::NotPostponable);
            host.notifier.notify(&message, config::get(&config::WARNING_NOTICE_MS));
            return Ok(PostponeOutcome::Blocked);
        },
    };

    let result = postpone::compute(task, field, postponement, today);
    if task.date(field) == result.new_date {
        log::debug!("{} date of {:?} is already {:?}, not saving it", field, task.description(), result.new_date);
        return Ok(PostponeOutcome::Unchanged);
    }

    let guard = match InteractionGuard::acquire(control) {
        Some(guard) => guard,
        None => return Ok(PostponeOutcome::Busy),
    };

    log::info!("Postponing {:?} ({}): {} date set to {:?}", task.description(), postponement, field, result.new_date);
    host.saver.save(task, &result.new_task).await?;

    host.notifier.notify(&success_message(field, result.new_date), config::get(&config::SUCCESS_NOTICE_MS));
    guard.keep_disabled();

    Ok(PostponeOutcome::Postponed { field, new_date: result.new_date })
}
