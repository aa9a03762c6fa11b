//! Postponing tasks stored in a vault

use chrono::NaiveDate;

use tasks_postponer::applier::{postpone, PostponeOutcome};
use tasks_postponer::control::Button;
use tasks_postponer::markdown::MarkdownFormat;
use tasks_postponer::menu::derive_state;
use tasks_postponer::mock_behaviour::MockBehaviour;
use tasks_postponer::notice::NoticeLog;
use tasks_postponer::traits::{Control, Host};
use tasks_postponer::{HappensDate, PostponeError, Postponement, TimeUnit, Vault};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

const TODAY: (i32, u32, u32) = (2024, 1, 10);

fn today() -> NaiveDate {
    date(TODAY.0, TODAY.1, TODAY.2)
}

fn sample_vault() -> Vault {
    let vault = Vault::new();
    vault.add_note("Projects", "\
# Projects
- [ ] Write report 📅 2024-01-10
- [ ] Read a book
- [ ] Plan holidays ⏳ 2024-02-01 🛫 2024-01-20
");
    vault
}

#[tokio::test]
async fn test_postpone_by_two_days() {
    let _ = env_logger::builder().is_test(true).try_init();

    let vault = sample_vault();
    let notices = NoticeLog::new();
    let host = Host::new(&vault, &vault, &notices, &MarkdownFormat);
    let button = Button::new();

    let task = vault.task_at("Projects", 2).unwrap();
    let in_two_days = Postponement::relative(TimeUnit::Days, 2);

    let before = derive_state(&task, HappensDate::resolve(&task), &in_two_days, today()).unwrap();
    assert_eq!(before.checked, false);

    let outcome = postpone(&task, &in_two_days, today(), &button, &host).await.unwrap();
    assert_eq!(outcome, PostponeOutcome::Postponed { field: HappensDate::Due, new_date: Some(date(2024, 1, 12)) });

    let updated = vault.task_at("Projects", 2).unwrap();
    assert_eq!(updated.due(), Some(date(2024, 1, 12)));
    assert_eq!(updated.description(), "Write report");
    assert!(vault.note("Projects").unwrap().contains("- [ ] Write report 📅 2024-01-12\n"));

    // The date that was offered by the menu entry is now the current value of the task
    let applied = derive_state(&updated, Some(HappensDate::Due), &Postponement::fixed(TimeUnit::Days, 2), today()).unwrap();
    assert_eq!(applied.checked, true);

    assert_eq!(button.is_enabled(), false);
    assert_eq!(notices.notices().len(), 1);
    assert_eq!(notices.notices()[0].message, "Task's due date changed to Fri 12th Jan");
}

#[tokio::test]
async fn test_scheduled_then_start() {
    let vault = sample_vault();
    let notices = NoticeLog::new();
    let host = Host::new(&vault, &vault, &notices, &MarkdownFormat);

    let task = vault.task_at("Projects", 4).unwrap();
    let outcome = postpone(&task, &Postponement::relative(TimeUnit::Weeks, 1), today(), &Button::new(), &host).await.unwrap();
    // The scheduled date is in the future: it is postponed from its own value
    assert_eq!(outcome, PostponeOutcome::Postponed { field: HappensDate::Scheduled, new_date: Some(date(2024, 2, 8)) });

    let task = vault.task_at("Projects", 4).unwrap();
    assert_eq!(task.start(), Some(date(2024, 1, 20)));
    let outcome = postpone(&task, &Postponement::clear(), today(), &Button::new(), &host).await.unwrap();
    assert_eq!(outcome, PostponeOutcome::Postponed { field: HappensDate::Scheduled, new_date: None });
    assert_eq!(notices.notices()[1].message, "Task's scheduled date removed");

    let task = vault.task_at("Projects", 4).unwrap();
    assert_eq!(task.scheduled(), None);
    assert_eq!(HappensDate::resolve(&task), Some(HappensDate::Start));
}

#[tokio::test]
async fn test_task_without_date() {
    let vault = sample_vault();
    let notices = NoticeLog::new();
    let host = Host::new(&vault, &vault, &notices, &MarkdownFormat);
    // Every save would fail: this makes sure none is attempted
    vault.set_mock_behaviour(MockBehaviour::fail_now(10));

    let task = vault.task_at("Projects", 3).unwrap();
    let button = Button::new();
    for postponement in &[Postponement::today(), Postponement::relative(TimeUnit::Months, 1), Postponement::clear()] {
        let outcome = postpone(&task, postponement, today(), &button, &host).await.unwrap();
        assert_eq!(outcome, PostponeOutcome::Blocked);
    }

    let notices = notices.notices();
    assert_eq!(notices.len(), 3);
    assert_eq!(notices[0].message, "⚠️ Postponement requires a date: due, scheduled or start.");
    assert_eq!(notices[0].duration_ms, 10_000);
    assert!(button.is_enabled());
}

#[tokio::test]
async fn test_single_save_for_repeated_clicks() {
    let vault = sample_vault();
    let notices = NoticeLog::new();
    let host = Host::new(&vault, &vault, &notices, &MarkdownFormat);
    // A second save would fail
    vault.set_mock_behaviour(MockBehaviour { save_task_behaviour: (1, 1), ..MockBehaviour::default() });

    let task = vault.task_at("Projects", 2).unwrap();
    let button = Button::new();
    let first = postpone(&task, &Postponement::tomorrow(), today(), &button, &host).await.unwrap();
    let second = postpone(&task, &Postponement::tomorrow(), today(), &button, &host).await.unwrap();
    assert_eq!(first, PostponeOutcome::Postponed { field: HappensDate::Due, new_date: Some(date(2024, 1, 11)) });
    assert_eq!(second, PostponeOutcome::Busy);

    // Once the view is refreshed, the same option is a no-op
    let refreshed = vault.task_at("Projects", 2).unwrap();
    let third = postpone(&refreshed, &Postponement::tomorrow(), today(), &Button::new(), &host).await.unwrap();
    assert_eq!(third, PostponeOutcome::Unchanged);

    assert_eq!(notices.notices().len(), 1);
}

#[tokio::test]
async fn test_save_failure() {
    let vault = sample_vault();
    let notices = NoticeLog::new();
    let host = Host::new(&vault, &vault, &notices, &MarkdownFormat);
    vault.set_mock_behaviour(MockBehaviour::fail_now(1));

    let task = vault.task_at("Projects", 2).unwrap();
    let button = Button::new();
    let res = postpone(&task, &Postponement::tomorrow(), today(), &button, &host).await;
    assert!(matches!(res, Err(PostponeError::Persistence(_))));
    assert!(button.is_enabled());
    assert!(notices.notices().is_empty());
    assert_eq!(vault.task_at("Projects", 2).unwrap(), task);

    // The user may click again
    let res = postpone(&task, &Postponement::tomorrow(), today(), &button, &host).await;
    assert!(res.is_ok());
}
