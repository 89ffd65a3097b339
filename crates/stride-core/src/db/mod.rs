//! Storage layer with connection pooling and migrations
//!
//! This module is organized by record kind:
//! - `tasks` - Todo CRUD and completion
//! - `habits` - Habit registration and daily logging
//! - `goals` - Weekly goals and progress updates
//! - `finance` - Expenses, income, budget limits, savings goals
//! - `wellness` - Mood and journal entries
//! - `applications` - Job application pipeline
//! - `reports` - Derived summaries (budget status, financials, progress)
//!
//! Every table uses AUTOINCREMENT primary keys so identifiers within a
//! record kind are strictly increasing and never reused after deletion.

use chrono::{DateTime, Utc};
use r2d2::{Pool, PooledConnection};
use r2d2_sqlite::SqliteConnectionManager;
use tracing::info;

use crate::error::Result;

mod applications;
mod finance;
mod goals;
mod habits;
mod reports;
mod tasks;
mod wellness;

pub type DbPool = Pool<SqliteConnectionManager>;
pub type DbConn = PooledConnection<SqliteConnectionManager>;

/// Parse a SQLite datetime string into a DateTime<Utc>
///
/// Stored as "YYYY-MM-DD HH:MM:SS"; a value we didn't write falls back
/// to the epoch rather than an ambient clock read.
pub(crate) fn parse_datetime(s: &str) -> DateTime<Utc> {
    chrono::NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S")
        .map(|dt| dt.and_utc())
        .unwrap_or(DateTime::UNIX_EPOCH)
}

/// Format a DateTime<Utc> the way the schema stores it
pub(crate) fn format_datetime(dt: DateTime<Utc>) -> String {
    dt.format("%Y-%m-%d %H:%M:%S").to_string()
}

/// Parse a SQLite DATE column ("YYYY-MM-DD")
pub(crate) fn parse_date(s: &str) -> chrono::NaiveDate {
    chrono::NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap_or_default()
}

/// Record store wrapper with connection pooling
#[derive(Clone)]
pub struct Store {
    pool: DbPool,
    /// Path to the database file
    db_path: String,
}

impl Store {
    /// Open (creating if needed) a store at the given path and run migrations
    pub fn open(path: &str) -> Result<Self> {
        let manager = SqliteConnectionManager::file(path);
        let pool = Pool::builder().max_size(10).build(manager)?;

        let store = Self {
            pool,
            db_path: path.to_string(),
        };
        store.run_migrations()?;

        Ok(store)
    }

    /// Get the path to the database file
    pub fn path(&self) -> &str {
        &self.db_path
    }

    /// Create a process-lifetime store (for testing and ephemeral use)
    ///
    /// Uses a temporary file rather than `:memory:` because each pooled
    /// connection to `:memory:` would see its own separate database.
    pub fn in_memory() -> Result<Self> {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);

        let id = COUNTER.fetch_add(1, Ordering::SeqCst);
        let path = std::env::temp_dir().join(format!("stride_test_{}_{}.db", std::process::id(), id));

        // Remove any existing file
        let _ = std::fs::remove_file(&path);

        Self::open(&path.to_string_lossy())
    }

    /// Get a connection from the pool
    pub fn conn(&self) -> Result<DbConn> {
        Ok(self.pool.get()?)
    }

    /// Delete every record of every kind
    ///
    /// Identifier sequences are intentionally preserved: ids are never
    /// reused, even across a reset.
    pub fn clear_all(&self) -> Result<()> {
        let conn = self.conn()?;

        // Delete in order respecting foreign key constraints
        conn.execute_batch(
            r#"
            DELETE FROM habit_logs;
            DELETE FROM habits;
            DELETE FROM tasks;
            DELETE FROM weekly_goals;
            DELETE FROM expenses;
            DELETE FROM income;
            DELETE FROM budget_limits;
            DELETE FROM savings_goals;
            DELETE FROM mood_entries;
            DELETE FROM journal_entries;
            DELETE FROM applications;
            "#,
        )?;

        info!("Store cleared");
        Ok(())
    }

    /// Run database migrations
    fn run_migrations(&self) -> Result<()> {
        let conn = self.conn()?;

        conn.execute_batch(
            r#"
            -- Enable foreign keys
            PRAGMA foreign_keys = ON;

            -- WAL mode: better concurrency, readers don't block writers
            PRAGMA journal_mode = WAL;

            -- Synchronous NORMAL: good balance of safety and performance
            PRAGMA synchronous = NORMAL;

            -- Todos
            CREATE TABLE IF NOT EXISTS tasks (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                description TEXT NOT NULL,
                priority TEXT NOT NULL DEFAULT 'medium',
                due_date DATE,
                completed BOOLEAN NOT NULL DEFAULT 0,
                created_at DATETIME NOT NULL,
                completed_at DATETIME
            );

            CREATE INDEX IF NOT EXISTS idx_tasks_completed ON tasks(completed);
            CREATE INDEX IF NOT EXISTS idx_tasks_priority ON tasks(priority);

            -- Habits (streak and last_logged maintained on every log)
            CREATE TABLE IF NOT EXISTS habits (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL UNIQUE,
                streak INTEGER NOT NULL DEFAULT 0,
                last_logged DATE,
                created_at DATETIME NOT NULL
            );

            -- One row per habit per calendar day
            CREATE TABLE IF NOT EXISTS habit_logs (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                habit_id INTEGER NOT NULL REFERENCES habits(id) ON DELETE CASCADE,
                date DATE NOT NULL,
                UNIQUE(habit_id, date)
            );

            CREATE INDEX IF NOT EXISTS idx_habit_logs_habit ON habit_logs(habit_id);
            CREATE INDEX IF NOT EXISTS idx_habit_logs_date ON habit_logs(date);

            -- Weekly goals
            CREATE TABLE IF NOT EXISTS weekly_goals (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                category TEXT NOT NULL DEFAULT 'general',
                description TEXT NOT NULL,
                target REAL NOT NULL DEFAULT 1,
                progress REAL NOT NULL DEFAULT 0,
                week_start DATE NOT NULL,
                created_at DATETIME NOT NULL,
                completed_at DATETIME
            );

            CREATE INDEX IF NOT EXISTS idx_weekly_goals_week ON weekly_goals(week_start);

            -- Expenses
            CREATE TABLE IF NOT EXISTS expenses (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                amount REAL NOT NULL,
                category TEXT NOT NULL,
                description TEXT,
                date DATE NOT NULL,
                created_at DATETIME NOT NULL
            );

            CREATE INDEX IF NOT EXISTS idx_expenses_date ON expenses(date);
            CREATE INDEX IF NOT EXISTS idx_expenses_category ON expenses(category);

            -- Income
            CREATE TABLE IF NOT EXISTS income (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                amount REAL NOT NULL,
                source TEXT NOT NULL,
                description TEXT,
                date DATE NOT NULL,
                created_at DATETIME NOT NULL
            );

            CREATE INDEX IF NOT EXISTS idx_income_date ON income(date);

            -- Budget limits (one row per category, upserted)
            CREATE TABLE IF NOT EXISTS budget_limits (
                category TEXT PRIMARY KEY,
                monthly_limit REAL NOT NULL
            );

            -- Savings goals
            CREATE TABLE IF NOT EXISTS savings_goals (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                target REAL NOT NULL,
                saved REAL NOT NULL DEFAULT 0,
                deadline DATE,
                created_at DATETIME NOT NULL
            );

            -- Mood entries
            CREATE TABLE IF NOT EXISTS mood_entries (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                mood TEXT NOT NULL,
                note TEXT,
                date DATE NOT NULL,
                logged_at DATETIME NOT NULL
            );

            CREATE INDEX IF NOT EXISTS idx_mood_entries_date ON mood_entries(date);

            -- Journal entries
            CREATE TABLE IF NOT EXISTS journal_entries (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                prompt TEXT,
                content TEXT NOT NULL,
                word_count INTEGER NOT NULL,
                date DATE NOT NULL,
                written_at DATETIME NOT NULL
            );

            CREATE INDEX IF NOT EXISTS idx_journal_entries_date ON journal_entries(date);

            -- Job applications
            CREATE TABLE IF NOT EXISTS applications (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                company TEXT NOT NULL,
                role TEXT NOT NULL,
                status TEXT NOT NULL DEFAULT 'applied',
                applied_date DATE NOT NULL,
                notes TEXT,
                updated_at DATETIME NOT NULL
            );

            CREATE INDEX IF NOT EXISTS idx_applications_status ON applications(status);
            "#,
        )?;

        info!("Store schema initialized");
        Ok(())
    }
}

#[cfg(test)]
mod tests;
