//! CLI command tests
//!
//! This module contains all tests for the CLI commands.

use chrono::{NaiveDate, TimeZone, Utc};
use stride_core::Store;

use crate::commands::{self, resolve_date, truncate};

fn setup_test_store() -> Store {
    Store::in_memory().unwrap()
}

fn now() -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 5, 9, 0, 0).unwrap()
}

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, 5).unwrap()
}

// ========== Task Command Tests ==========

#[test]
fn test_cmd_task_add_and_list() {
    let store = setup_test_store();
    commands::cmd_task_add(&store, "Refresh resume", "high", None, now()).unwrap();

    let tasks = store.list_tasks(true).unwrap();
    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0].description, "Refresh resume");

    assert!(commands::cmd_task_list(&store, true).is_ok());
}

#[test]
fn test_cmd_task_add_rejects_bad_priority() {
    let store = setup_test_store();
    let result = commands::cmd_task_add(&store, "Something", "urgent", None, now());
    assert!(result.is_err());
}

#[test]
fn test_cmd_task_done() {
    let store = setup_test_store();
    commands::cmd_task_add(&store, "Prep interview", "medium", None, now()).unwrap();
    commands::cmd_task_done(&store, 1, now()).unwrap();

    assert!(store.get_task(1).unwrap().completed);
}

// ========== Habit Command Tests ==========

#[test]
fn test_cmd_habit_track_creates_and_logs() {
    let store = setup_test_store();
    commands::cmd_habit_track(&store, "meditate", None, today(), now()).unwrap();
    commands::cmd_habit_track(&store, "meditate", Some("2025-03-06"), today(), now()).unwrap();

    let habit = store.get_habit_by_name("meditate").unwrap();
    assert_eq!(habit.streak, 2);

    assert!(commands::cmd_habit_streak(&store, "meditate", today()).is_ok());
    assert!(commands::cmd_habit_streak(&store, "missing", today()).is_err());
}

// ========== Goal Command Tests ==========

#[test]
fn test_cmd_goal_set_and_progress() {
    let store = setup_test_store();
    commands::cmd_goal_set(&store, "Apply to 5 roles", 5.0, "career", today(), now()).unwrap();
    commands::cmd_goal_progress(&store, 1, 5.0, now()).unwrap();

    assert!(store.get_goal(1).unwrap().completed_at.is_some());
}

// ========== Finance Command Tests ==========

#[test]
fn test_cmd_expense_add_rejects_bad_category() {
    let store = setup_test_store();
    let result =
        commands::cmd_expense_add(&store, 10.0, "yachts", None, None, today(), now());
    assert!(result.is_err());
}

#[test]
fn test_cmd_budget_roundtrip() {
    let store = setup_test_store();
    commands::cmd_budget_set(&store, "food", 500.0).unwrap();
    commands::cmd_expense_add(&store, 100.0, "food", None, None, today(), now()).unwrap();
    assert!(commands::cmd_budget_status(&store, today(), false).is_ok());
    assert!(commands::cmd_budget_status(&store, today(), true).is_ok());
    commands::cmd_budget_clear(&store, "food").unwrap();

    assert!(store.budget_limits().unwrap().is_empty());
}

#[test]
fn test_cmd_savings_flow() {
    let store = setup_test_store();
    commands::cmd_savings_new(&store, "Laptop", 100.0, None, now()).unwrap();
    commands::cmd_savings_add(&store, 1, 150.0).unwrap();

    let goal = store.get_savings_goal(1).unwrap();
    assert_eq!(goal.saved, 100.0);
}

// ========== Wellness Command Tests ==========

#[test]
fn test_cmd_mood_log_and_history() {
    let store = setup_test_store();
    commands::cmd_mood_log(&store, "stressed", Some("deadline"), None, today(), now()).unwrap();
    assert!(commands::cmd_mood_history(&store, 7, today(), false).is_ok());
    assert!(commands::cmd_mood_history(&store, 7, today(), true).is_ok());

    assert!(commands::cmd_mood_log(&store, "ecstatic", None, None, today(), now()).is_err());
}

#[test]
fn test_cmd_journal_write() {
    let store = setup_test_store();
    commands::cmd_journal_write(&store, "Some reflections on today", None, today(), now())
        .unwrap();
    assert_eq!(store.get_journal_entry(1).unwrap().word_count, 4);
}

// ========== Application Command Tests ==========

#[test]
fn test_cmd_app_pipeline() {
    let store = setup_test_store();
    commands::cmd_app_add(&store, "Acme", "Engineer", None, None, today(), now()).unwrap();
    commands::cmd_app_advance(&store, 1, "interviewing", None, now()).unwrap();

    // Interviewing cannot go back to applied
    assert!(commands::cmd_app_advance(&store, 1, "applied", None, now()).is_err());

    assert!(commands::cmd_app_list(&store, Some("interviewing")).is_ok());
    assert!(commands::cmd_app_list(&store, Some("ghosted")).is_err());
}

// ========== Career Command Tests ==========

#[test]
fn test_cmd_skills_analyze() {
    assert!(commands::cmd_skills_analyze("Python, SQL, Git", "backend developer", false).is_ok());
    assert!(commands::cmd_skills_analyze("Python, SQL, Git", "backend developer", true).is_ok());
    assert!(commands::cmd_skills_analyze("  , ,", "backend developer", false).is_err());
}

#[test]
fn test_cmd_jobs_search() {
    assert!(commands::cmd_jobs_search("Rust Developer", "Berlin", false).is_ok());
    assert!(commands::cmd_jobs_search("Rust Developer", "Berlin", true).is_ok());
    assert!(commands::cmd_jobs_search("", "Berlin", false).is_err());
}

#[test]
fn test_cmd_advice() {
    assert!(commands::cmd_advice_dsa(4).is_ok());
    assert!(commands::cmd_advice_resume().is_ok());
    assert!(commands::cmd_advice_portfolio("python").is_ok());
    assert!(commands::cmd_advice_breathe("calm").is_ok());
    assert!(commands::cmd_advice_breathe("upside-down").is_err());
    assert!(commands::cmd_advice_motivate().is_ok());
}

// ========== Report Command Tests ==========

#[test]
fn test_cmd_reports_run_on_populated_store() {
    let store = setup_test_store();
    commands::cmd_task_add(&store, "One", "low", None, now()).unwrap();
    commands::cmd_habit_track(&store, "read", None, today(), now()).unwrap();
    commands::cmd_income_add(&store, 1000.0, "salary", None, None, today(), now()).unwrap();
    commands::cmd_expense_add(&store, 200.0, "food", None, None, today(), now()).unwrap();

    assert!(commands::cmd_report_progress(&store, today(), false).is_ok());
    assert!(commands::cmd_report_progress(&store, today(), true).is_ok());
    assert!(commands::cmd_report_finance(&store, "month", today(), false).is_ok());
    assert!(commands::cmd_report_finance(&store, "month", today(), true).is_ok());
    assert!(commands::cmd_report_finance(&store, "fortnight", today(), false).is_err());
}

// ========== Init and Reset Tests ==========

#[test]
fn test_cmd_init_and_reset_on_disk() {
    let dir = tempfile::tempdir().unwrap();
    let db = dir.path().join("stride.db");

    commands::cmd_init(&db).unwrap();
    let store = commands::open_store(&db).unwrap();
    commands::cmd_task_add(&store, "Persisted", "low", None, now()).unwrap();
    drop(store);

    // Without --yes nothing is deleted
    commands::cmd_reset(&db, false).unwrap();
    let store = commands::open_store(&db).unwrap();
    assert_eq!(store.list_tasks(true).unwrap().len(), 1);
    drop(store);

    commands::cmd_reset(&db, true).unwrap();
    let store = commands::open_store(&db).unwrap();
    assert!(store.list_tasks(true).unwrap().is_empty());
}

// ========== Utility Tests ==========

#[test]
fn test_resolve_date() {
    assert_eq!(resolve_date(None, today()).unwrap(), today());
    assert_eq!(
        resolve_date(Some("2025-01-15"), today()).unwrap(),
        NaiveDate::from_ymd_opt(2025, 1, 15).unwrap()
    );
    assert!(resolve_date(Some("15/01/2025"), today()).is_err());
}

#[test]
fn test_truncate() {
    assert_eq!(truncate("short", 10), "short");
    assert_eq!(truncate("a very long description", 10), "a very ...");
}

#[test]
fn test_truncate_multibyte() {
    // Must cut on a char boundary, not a byte index
    let s = "ééééééééééééé";
    assert_eq!(truncate(s, 10), "ééé...");

    let mixed = "café au lait, s'il vous plaît";
    let cut = truncate(mixed, 12);
    assert!(cut.ends_with("..."));
    assert!(cut.len() <= 12);
}
