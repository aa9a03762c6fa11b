//! The postponement menu: which options it offers, their titles, and which one matches the current date of a task.
//!
//! This module only describes the menu. Drawing it is up to the UI.

use serde::Serialize;
use chrono::NaiveDate;

use crate::happens::HappensDate;
use crate::postpone::{self, Postponement, PostponementKind, TimeUnit};
use crate::task::Task;
use crate::utils::format_date;

/// What a menu entry displays
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MenuItemState {
    /// Whether this option is the current value of the task
    pub checked: bool,
    pub title: String,
}

/// Compute the state of a postponement option.
///
/// Returns `None` when there is no field to postpone. Such options should be disabled by the caller.
pub fn derive_state(task: &Task, field: Option<HappensDate>, postponement: &Postponement, today: NaiveDate) -> Option<MenuItemState> {
    let field = field?;
    let result = postpone::compute(task, field, postponement, today);
    let checked = match (task.date(field), result.new_date) {
        (Some(current), Some(new_date)) => current == new_date,
        _ => false,
    };
    let title = item_title(task, field, postponement, today);
    Some(MenuItemState { checked, title })
}

/// The label of a postponement option, e.g. `Due tomorrow, on Thu 11th Jan`
pub fn item_title(task: &Task, field: HappensDate, postponement: &Postponement, today: NaiveDate) -> String {
    match postponement.kind {
        PostponementKind::Fixed => fixed_date_title(field, postponement.unit, postponement.amount, today),
        PostponementKind::Relative => postpone_title(task, field, postponement.unit, postponement.amount, today),
        PostponementKind::Clear => format!("Remove {} date", field),
    }
}

fn fixed_date_title(field: HappensDate, unit: TimeUnit, amount: u32, today: NaiveDate) -> String {
    let new_date = format_date(unit.add_to(today, amount));
    match (unit, amount) {
        (_, 0) => format!("{} today, on {}", field.capitalized(), new_date),
        (TimeUnit::Days, 1) => format!("{} tomorrow, on {}", field.capitalized(), new_date),
        _ => format!("{} in {} {}, on {}", field.capitalized(), amount_or_article(amount), unit.name(amount), new_date),
    }
}

fn amount_or_article(amount: u32) -> String {
    if amount == 1 { String::from("a") } else { amount.to_string() }
}

fn postpone_title(task: &Task, field: HappensDate, unit: TimeUnit, amount: u32, today: NaiveDate) -> String {
    let result = postpone::compute_relative(task, field, unit, amount, today);
    let new_date = result.new_date.map(format_date).unwrap_or_default();

    match task.date(field) {
        Some(current) if current > today => {
            format!("Postpone {} date by {} {}, to {}", field, amount_or_article(amount), unit.name(amount), new_date)
        },
        _ => format!("{} in {} {}, on {}", field.capitalized(), amount_or_article(amount), unit.name(amount), new_date),
    }
}

/// The message displayed once a postponement has been saved
pub fn success_message(field: HappensDate, new_date: Option<NaiveDate>) -> String {
    match new_date {
        Some(date) => format!("Task's {} date changed to {}", field, format_date(date)),
        None => format!("Task's {} date removed", field),
    }
}


/// One line of the menu
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub enum MenuEntry {
    /// `state` is `None` when the task cannot be postponed
    Postpone { postponement: Postponement, state: Option<MenuItemState> },
    MoveHere,
    Separator,
}

/// The options offered for every task, separators included
pub fn default_layout() -> Vec<Option<Postponement>> {
    use TimeUnit::*;
    vec![
        Some(Postponement::today()),
        Some(Postponement::tomorrow()),
        None,
        Some(Postponement::relative(Days, 2)),
        Some(Postponement::relative(Days, 3)),
        Some(Postponement::relative(Days, 4)),
        Some(Postponement::relative(Days, 5)),
        Some(Postponement::relative(Days, 6)),
        None,
        Some(Postponement::relative(Weeks, 1)),
        Some(Postponement::relative(Weeks, 2)),
        Some(Postponement::relative(Weeks, 3)),
        Some(Postponement::relative(Months, 1)),
        None,
        Some(Postponement::clear()),
        None,
    ]
}

/// The full postponement menu of a task
#[derive(Clone, Debug, Serialize)]
pub struct PostponeMenu {
    field: Option<HappensDate>,
    entries: Vec<MenuEntry>,
}

impl PostponeMenu {
    pub fn new(task: &Task, today: NaiveDate) -> Self {
        let field = HappensDate::resolve(task);
        let mut entries: Vec<MenuEntry> = default_layout().into_iter()
            .map(|option| match option {
                Some(postponement) => MenuEntry::Postpone {
                    state: derive_state(task, field, &postponement, today),
                    postponement,
                },
                None => MenuEntry::Separator,
            })
            .collect();
        entries.push(MenuEntry::MoveHere);

        Self { field, entries }
    }

    /// The field the postponement options act upon, if any
    pub fn field(&self) -> Option<HappensDate> { self.field }
    pub fn entries(&self) -> &[MenuEntry] { &self.entries }
}


#[cfg(test)]
mod test {
    use super::*;
    use crate::task::Status;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn task_due(due: Option<NaiveDate>) -> Task {
        Task::new_with_parameters("Pay rent".into(), Status::todo(), due, None, None)
    }

    #[test]
    fn test_checked_state_follows_the_task() {
        let today = date(2024, 1, 10);
        let in_two_days = Postponement::relative(TimeUnit::Days, 2);
        let task = task_due(Some(today));

        let state = derive_state(&task, HappensDate::resolve(&task), &in_two_days, today).unwrap();
        assert_eq!(state.checked, false);
        assert_eq!(state.title, "Due in 2 days, on Fri 12th Jan");

        let today_state = derive_state(&task, HappensDate::resolve(&task), &Postponement::today(), today).unwrap();
        assert_eq!(today_state.checked, true);
        assert_eq!(today_state.title, "Due today, on Wed 10th Jan");

        // Once due on the 12th, "+2 days" means the 14th
        let postponed = task.with_date(HappensDate::Due, Some(date(2024, 1, 12)));
        let state = derive_state(&postponed, Some(HappensDate::Due), &in_two_days, today).unwrap();
        assert_eq!(state.checked, false);
        assert_eq!(state.title, "Postpone due date by 2 days, to Sun 14th Jan");
    }

    #[test]
    fn test_titles() {
        let today = date(2024, 1, 10);
        let task = Task::new_with_parameters("Pay rent".into(), Status::todo(), None, Some(date(2024, 1, 3)), None);
        let field = Some(HappensDate::Scheduled);

        let title = |p: Postponement| derive_state(&task, field, &p, today).unwrap().title;
        assert_eq!(title(Postponement::tomorrow()), "Scheduled tomorrow, on Thu 11th Jan");
        assert_eq!(title(Postponement::relative(TimeUnit::Weeks, 1)), "Scheduled in a week, on Wed 17th Jan");
        assert_eq!(title(Postponement::relative(TimeUnit::Months, 1)), "Scheduled in a month, on Sat 10th Feb");
        assert_eq!(title(Postponement::clear()), "Remove scheduled date");
    }

    #[test]
    fn test_fixed_date_titles() {
        let today = date(2024, 1, 10);
        let task = task_due(Some(today));
        let field = Some(HappensDate::Due);

        let state = |p: Postponement| derive_state(&task, field, &p, today).unwrap();
        assert_eq!(state(Postponement::tomorrow()).title, "Due tomorrow, on Thu 11th Jan");
        assert_eq!(state(Postponement::fixed(TimeUnit::Days, 2)).title, "Due in 2 days, on Fri 12th Jan");
        assert_eq!(state(Postponement::fixed(TimeUnit::Weeks, 1)).title, "Due in a week, on Wed 17th Jan");
        assert_eq!(state(Postponement::fixed(TimeUnit::Months, 2)).title, "Due in 2 months, on Sun 10th Mar");
        assert_eq!(state(Postponement::fixed(TimeUnit::Weeks, 1)).checked, false);

        // Fixed titles do not depend on the current date of the task
        let later = task_due(Some(date(2024, 1, 17)));
        let later_state = derive_state(&later, field, &Postponement::fixed(TimeUnit::Weeks, 1), today).unwrap();
        assert_eq!(later_state.title, "Due in a week, on Wed 17th Jan");
        assert_eq!(later_state.checked, true);
    }

    #[test]
    fn test_clear_is_never_checked() {
        let today = date(2024, 1, 10);
        let task = task_due(Some(today));
        let state = derive_state(&task, Some(HappensDate::Due), &Postponement::clear(), today).unwrap();
        assert_eq!(state.checked, false);
    }

    #[test]
    fn test_no_field_no_state() {
        let today = date(2024, 1, 10);
        let task = task_due(None);
        assert_eq!(derive_state(&task, None, &Postponement::tomorrow(), today), None);

        let menu = PostponeMenu::new(&task, today);
        assert_eq!(menu.field(), None);
        assert!(menu.entries().iter().all(|entry| match entry {
            MenuEntry::Postpone { state, .. } => state.is_none(),
            _ => true,
        }));
        assert_eq!(menu.entries().last(), Some(&MenuEntry::MoveHere));
    }

    #[test]
    fn test_default_menu() {
        let today = date(2024, 1, 10);
        let menu = PostponeMenu::new(&task_due(Some(date(2024, 1, 11))), today);
        assert_eq!(menu.field(), Some(HappensDate::Due));

        let postponements = menu.entries().iter()
            .filter(|entry| matches!(entry, MenuEntry::Postpone { .. }))
            .count();
        assert_eq!(postponements, 12);

        let checked: Vec<&str> = menu.entries().iter()
            .filter_map(|entry| match entry {
                MenuEntry::Postpone { state: Some(state), .. } if state.checked => Some(state.title.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(checked, vec!["Due tomorrow, on Thu 11th Jan"]);
    }

    #[test]
    fn test_success_message() {
        assert_eq!(success_message(HappensDate::Start, Some(date(2024, 1, 12))), "Task's start date changed to Fri 12th Jan");
        assert_eq!(success_message(HappensDate::Due, None), "Task's due date removed");
    }
}
