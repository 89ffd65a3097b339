//! Store integration tests
//!
//! Each test runs against a fresh ephemeral store.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};

use super::Store;
use crate::error::Error;
use crate::models::{
    ApplicationStatus, ExpenseCategory, GoalCategory, Mood, NewApplication, NewTask, Priority,
};

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 5, 9, 30, 0).unwrap()
}

fn d(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

fn new_task(description: &str) -> NewTask {
    NewTask {
        description: description.to_string(),
        priority: Priority::Medium,
        due_date: None,
    }
}

#[test]
fn task_lifecycle() {
    let store = Store::in_memory().unwrap();

    let task = store.add_task(&new_task("Write cover letter"), now()).unwrap();
    assert!(!task.completed);
    assert!(task.completed_at.is_none());

    let done = store.complete_task(task.id, now()).unwrap();
    assert!(done.completed);
    assert!(done.completed_at.is_some());

    // Completing again is a no-op, not an error
    let again = store.complete_task(task.id, now()).unwrap();
    assert_eq!(again.completed_at, done.completed_at);

    let (pending, completed) = store.task_counts().unwrap();
    assert_eq!((pending, completed), (0, 1));

    store.delete_task(task.id).unwrap();
    assert!(matches!(store.get_task(task.id), Err(Error::NotFound(_))));
}

#[test]
fn empty_task_description_is_rejected() {
    let store = Store::in_memory().unwrap();
    let err = store.add_task(&new_task("   "), now()).unwrap_err();
    assert!(matches!(err, Error::Validation(_)));
}

#[test]
fn ids_are_never_reused_after_deletion() {
    let store = Store::in_memory().unwrap();

    let a = store.add_task(&new_task("first"), now()).unwrap();
    let b = store.add_task(&new_task("second"), now()).unwrap();
    store.delete_task(b.id).unwrap();

    let c = store.add_task(&new_task("third"), now()).unwrap();
    assert!(c.id > b.id);
    assert!(b.id > a.id);
}

#[test]
fn habit_streak_increments_on_consecutive_days() {
    let store = Store::in_memory().unwrap();

    let habit = store.track_habit("meditate", d(2025, 3, 1), now()).unwrap();
    assert_eq!(habit.streak, 1);

    let habit = store.track_habit("meditate", d(2025, 3, 2), now()).unwrap();
    assert_eq!(habit.streak, 2);

    // Same day again: no change
    let habit = store.track_habit("meditate", d(2025, 3, 2), now()).unwrap();
    assert_eq!(habit.streak, 2);

    // Gap resets to 1
    let habit = store.track_habit("meditate", d(2025, 3, 5), now()).unwrap();
    assert_eq!(habit.streak, 1);

    // Log history keeps every distinct day
    let dates = store.habit_log_dates(habit.id).unwrap();
    assert_eq!(dates.len(), 3);
}

#[test]
fn habit_names_are_shared_not_duplicated() {
    let store = Store::in_memory().unwrap();

    store.track_habit("read", d(2025, 3, 1), now()).unwrap();
    store.track_habit("read", d(2025, 3, 2), now()).unwrap();
    assert_eq!(store.list_habits().unwrap().len(), 1);
}

#[test]
fn goal_progress_auto_completes_at_target() {
    let store = Store::in_memory().unwrap();
    let week = d(2025, 3, 3);

    let goal = store
        .set_weekly_goal(GoalCategory::Learning, "Solve practice problems", 10.0, week, now())
        .unwrap();
    assert!(goal.completed_at.is_none());

    let goal = store.add_goal_progress(goal.id, 4.0, now()).unwrap();
    assert_eq!(goal.progress, 4.0);
    assert!(goal.completed_at.is_none());

    let goal = store.add_goal_progress(goal.id, 6.0, now()).unwrap();
    assert!(goal.completed_at.is_some());
    assert!((goal.completion() - 1.0).abs() < 1e-9);

    // Negative progress is rejected
    assert!(store.add_goal_progress(goal.id, -1.0, now()).is_err());
}

#[test]
fn goals_filter_by_week() {
    let store = Store::in_memory().unwrap();

    store
        .set_weekly_goal(GoalCategory::Health, "Run 3 times", 3.0, d(2025, 3, 3), now())
        .unwrap();
    store
        .set_weekly_goal(GoalCategory::Health, "Run 4 times", 4.0, d(2025, 3, 10), now())
        .unwrap();

    assert_eq!(store.list_goals(Some(d(2025, 3, 3))).unwrap().len(), 1);
    assert_eq!(store.list_goals(None).unwrap().len(), 2);
}

#[test]
fn expense_amount_must_be_positive() {
    let store = Store::in_memory().unwrap();

    for bad in [0.0, -5.0, f64::NAN] {
        let err = store
            .add_expense(bad, ExpenseCategory::Food, None, d(2025, 3, 5), now())
            .unwrap_err();
        assert!(matches!(err, Error::Validation(_)), "amount {}", bad);
    }
}

#[test]
fn savings_contribution_clamps_at_target() {
    let store = Store::in_memory().unwrap();

    let goal = store
        .create_savings_goal("Laptop", 100.0, None, now())
        .unwrap();

    let c = store.contribute_to_savings(goal.id, 150.0).unwrap();
    assert_eq!(c.applied, 100.0);
    assert_eq!(c.excess, 50.0);
    assert_eq!(c.goal.saved, 100.0);
    assert!(c.goal.reached());

    // Already at target: everything is excess
    let c = store.contribute_to_savings(goal.id, 25.0).unwrap();
    assert_eq!(c.applied, 0.0);
    assert_eq!(c.excess, 25.0);
}

#[test]
fn budget_limit_upserts_per_category() {
    let store = Store::in_memory().unwrap();

    store.set_budget_limit(ExpenseCategory::Food, 500.0).unwrap();
    store.set_budget_limit(ExpenseCategory::Food, 800.0).unwrap();

    let limits = store.budget_limits().unwrap();
    assert_eq!(limits.len(), 1);
    assert_eq!(limits[0].monthly_limit, 800.0);

    store.clear_budget_limit(ExpenseCategory::Food).unwrap();
    assert!(store.budget_limits().unwrap().is_empty());
}

#[test]
fn budget_status_reports_overspend_as_negative_remaining() {
    let store = Store::in_memory().unwrap();
    let today = d(2025, 3, 15);

    store.set_budget_limit(ExpenseCategory::Food, 1000.0).unwrap();
    store
        .add_expense(700.0, ExpenseCategory::Food, None, d(2025, 3, 2), now())
        .unwrap();
    store
        .add_expense(500.0, ExpenseCategory::Food, None, d(2025, 3, 10), now())
        .unwrap();
    // Previous month must not count
    store
        .add_expense(900.0, ExpenseCategory::Food, None, d(2025, 2, 20), now())
        .unwrap();

    let status = store.budget_status(today).unwrap();
    let line = &status.lines[0];
    assert_eq!(line.spent, 1200.0);
    assert_eq!(line.remaining, -200.0);
    assert!(line.overspend);
}

#[test]
fn financial_summary_computes_net_and_rate() {
    let store = Store::in_memory().unwrap();

    store
        .add_income(1000.0, "salary", None, d(2025, 3, 1), now())
        .unwrap();
    store
        .add_expense(600.0, ExpenseCategory::Rent, None, d(2025, 3, 2), now())
        .unwrap();
    store
        .add_expense(200.0, ExpenseCategory::Food, None, d(2025, 3, 3), now())
        .unwrap();

    let summary = store.financial_summary(d(2025, 3, 1), d(2025, 3, 31)).unwrap();
    assert_eq!(summary.total_income, 1000.0);
    assert_eq!(summary.total_expense, 800.0);
    assert_eq!(summary.net, 200.0);
    assert!((summary.savings_rate - 0.2).abs() < 1e-9);

    // Largest category first
    assert_eq!(summary.expenses_by_category[0].category, ExpenseCategory::Rent);
    assert!((summary.expenses_by_category[0].percentage - 75.0).abs() < 1e-9);
}

#[test]
fn application_pipeline_enforces_transitions() {
    let store = Store::in_memory().unwrap();

    let app = store
        .add_application(
            &NewApplication {
                company: "Acme".into(),
                role: "Backend Developer".into(),
                notes: None,
            },
            d(2025, 3, 1),
            now(),
        )
        .unwrap();
    assert_eq!(app.status, ApplicationStatus::Applied);

    // Applied cannot jump straight to offered
    let err = store
        .advance_application(app.id, ApplicationStatus::Offered, None, now())
        .unwrap_err();
    assert!(matches!(err, Error::InvalidTransition { .. }));

    let app = store
        .advance_application(app.id, ApplicationStatus::Interviewing, None, now())
        .unwrap();
    let app = store
        .advance_application(app.id, ApplicationStatus::Offered, Some("Verbal offer"), now())
        .unwrap();
    assert_eq!(app.notes.as_deref(), Some("Verbal offer"));

    // Terminal state: no way out
    let err = store
        .advance_application(app.id, ApplicationStatus::Rejected, None, now())
        .unwrap_err();
    assert!(matches!(err, Error::InvalidTransition { .. }));
}

#[test]
fn applications_filter_by_status() {
    let store = Store::in_memory().unwrap();

    for company in ["Acme", "Globex"] {
        store
            .add_application(
                &NewApplication {
                    company: company.into(),
                    role: "Engineer".into(),
                    notes: None,
                },
                d(2025, 3, 1),
                now(),
            )
            .unwrap();
    }
    store
        .advance_application(1, ApplicationStatus::Interviewing, None, now())
        .unwrap();

    let interviewing = store
        .list_applications(Some(ApplicationStatus::Interviewing))
        .unwrap();
    assert_eq!(interviewing.len(), 1);
    assert_eq!(interviewing[0].company, "Acme");

    assert_eq!(store.list_applications(None).unwrap().len(), 2);
}

#[test]
fn journal_entries_count_words() {
    let store = Store::in_memory().unwrap();

    let entry = store
        .write_journal("Three words here", None, d(2025, 3, 5), now())
        .unwrap();
    assert_eq!(entry.word_count, 3);

    assert!(store.write_journal("   ", None, d(2025, 3, 5), now()).is_err());
}

#[test]
fn mood_history_counts_and_balance() {
    let store = Store::in_memory().unwrap();

    store.log_mood(Mood::Good, None, d(2025, 3, 1), now()).unwrap();
    store.log_mood(Mood::Good, None, d(2025, 3, 2), now()).unwrap();
    store
        .log_mood(Mood::Stressed, Some("deadline"), d(2025, 3, 3), now())
        .unwrap();

    let history = store.mood_history(d(2025, 3, 1), d(2025, 3, 7)).unwrap();
    assert_eq!(history.entries.len(), 3);
    assert_eq!(history.counts[0], (Mood::Good, 2));
    assert_eq!(history.positive, 2);
    assert_eq!(history.negative, 1);
}

#[test]
fn progress_report_spans_the_week() {
    let store = Store::in_memory().unwrap();
    // 2025-03-05 is a Wednesday; the week starts Monday 03-03
    let today = d(2025, 3, 5);

    let task = store.add_task(&new_task("Refresh resume"), now()).unwrap();
    store.complete_task(task.id, now()).unwrap();
    store.add_task(&new_task("Prepare portfolio"), now()).unwrap();

    store.track_habit("meditate", d(2025, 3, 4), now()).unwrap();
    store.track_habit("meditate", d(2025, 3, 5), now()).unwrap();

    store
        .set_weekly_goal(GoalCategory::Career, "Apply to 5 roles", 5.0, d(2025, 3, 3), now())
        .unwrap();

    let report = store.progress_report(today).unwrap();
    assert_eq!(report.period.from, d(2025, 3, 3));
    assert_eq!(report.tasks_created, 2);
    assert_eq!(report.tasks_completed, 1);
    assert_eq!(report.habits.len(), 1);
    assert_eq!(report.habits[0].streak, 2);
    assert_eq!(report.habits[0].days_logged, 2);
    assert_eq!(report.goals.len(), 1);
    assert_eq!(report.goals_completed, 0);
}

#[test]
fn records_survive_reopening_the_store() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("stride.db");
    let path = path.to_string_lossy();

    {
        let store = Store::open(&path).unwrap();
        store.add_task(&new_task("Persisted"), now()).unwrap();
        store.track_habit("read", d(2025, 3, 1), now()).unwrap();
    }

    let store = Store::open(&path).unwrap();
    assert_eq!(store.list_tasks(true).unwrap().len(), 1);
    assert_eq!(store.get_habit_by_name("read").unwrap().streak, 1);
}

#[test]
fn clear_all_preserves_id_sequences() {
    let store = Store::in_memory().unwrap();

    let before = store.add_task(&new_task("one"), now()).unwrap();
    store.clear_all().unwrap();
    assert!(store.list_tasks(true).unwrap().is_empty());

    let after = store.add_task(&new_task("two"), now()).unwrap();
    assert!(after.id > before.id);
}
