//! Stride Core Library
//!
//! Shared functionality for the Stride personal tracker:
//! - Record store over SQLite (tasks, habits, goals, money, wellness,
//!   job applications)
//! - Derived metrics (streaks, savings rate, budget status, reports)
//! - Skill-gap scoring against role requirement tables
//! - Job board search URL generation
//! - Static career and wellness content

pub mod advice;
pub mod db;
pub mod error;
pub mod jobsearch;
pub mod metrics;
pub mod models;
pub mod period;
pub mod skills;

pub use db::Store;
pub use error::{Error, Result};
pub use models::{
    ApplicationStatus, BudgetLimit, BudgetStatus, Contribution, Expense, ExpenseCategory,
    FinancialSummary, GoalCategory, Habit, Income, JobApplication, JournalEntry, Mood, MoodEntry,
    MoodHistory, NewApplication, NewTask, Priority, ProgressReport, SavingsGoal, Task, WeeklyGoal,
};
pub use period::Period;
pub use skills::SkillGapReport;
