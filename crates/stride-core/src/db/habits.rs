//! Habit operations
//!
//! Streak maintenance lives here so every log keeps the stored streak in
//! line with the consecutive-day rule: a log on the day right after the
//! previous one extends the streak, anything later resets it to 1, and
//! re-logging the same day changes nothing.

use chrono::{DateTime, Days, NaiveDate, Utc};
use rusqlite::{params, OptionalExtension, Row};
use tracing::debug;

use super::{format_datetime, parse_date, parse_datetime, Store};
use crate::error::{Error, Result};
use crate::models::Habit;

fn habit_from_row(row: &Row<'_>) -> rusqlite::Result<Habit> {
    Ok(Habit {
        id: row.get(0)?,
        name: row.get(1)?,
        streak: row.get(2)?,
        last_logged: row.get::<_, Option<String>>(3)?.map(|d| parse_date(&d)),
        created_at: parse_datetime(&row.get::<_, String>(4)?),
    })
}

const HABIT_COLS: &str = "id, name, streak, last_logged, created_at";

impl Store {
    /// Log a habit for a calendar day, creating the habit on first use
    ///
    /// Returns the habit with its streak already updated. Logging a day
    /// earlier than `last_logged` backfills the log history without
    /// touching the streak.
    pub fn track_habit(&self, name: &str, date: NaiveDate, now: DateTime<Utc>) -> Result<Habit> {
        let name = name.trim().to_lowercase();
        if name.is_empty() {
            return Err(Error::Validation("Habit name is required".into()));
        }

        let conn = self.conn()?;

        let habit = conn
            .query_row(
                &format!("SELECT {} FROM habits WHERE name = ?", HABIT_COLS),
                params![name],
                habit_from_row,
            )
            .optional()?;

        let habit = match habit {
            Some(h) => h,
            None => {
                conn.execute(
                    "INSERT INTO habits (name, created_at) VALUES (?, ?)",
                    params![name, format_datetime(now)],
                )?;
                debug!(name, "Habit registered");
                conn.query_row(
                    &format!("SELECT {} FROM habits WHERE id = ?", HABIT_COLS),
                    params![conn.last_insert_rowid()],
                    habit_from_row,
                )?
            }
        };

        conn.execute(
            "INSERT OR IGNORE INTO habit_logs (habit_id, date) VALUES (?, ?)",
            params![habit.id, date.to_string()],
        )?;

        let (streak, last_logged) = match habit.last_logged {
            Some(prev) if date == prev => (habit.streak, prev),
            Some(prev) if date < prev => (habit.streak, prev),
            Some(prev) if Some(date) == prev.checked_add_days(Days::new(1)) => {
                (habit.streak + 1, date)
            }
            Some(_) => (1, date),
            None => (1, date),
        };

        conn.execute(
            "UPDATE habits SET streak = ?, last_logged = ? WHERE id = ?",
            params![streak, last_logged.to_string(), habit.id],
        )?;

        debug!(name = %habit.name, streak, "Habit logged");
        self.get_habit(habit.id)
    }

    /// Fetch one habit by id
    pub fn get_habit(&self, id: i64) -> Result<Habit> {
        let conn = self.conn()?;
        conn.query_row(
            &format!("SELECT {} FROM habits WHERE id = ?", HABIT_COLS),
            params![id],
            habit_from_row,
        )
        .optional()?
        .ok_or_else(|| Error::NotFound(format!("Habit #{}", id)))
    }

    /// Fetch one habit by name
    pub fn get_habit_by_name(&self, name: &str) -> Result<Habit> {
        let conn = self.conn()?;
        conn.query_row(
            &format!("SELECT {} FROM habits WHERE name = ?", HABIT_COLS),
            params![name.trim().to_lowercase()],
            habit_from_row,
        )
        .optional()?
        .ok_or_else(|| Error::NotFound(format!("Habit '{}'", name)))
    }

    /// List habits in insertion order
    pub fn list_habits(&self) -> Result<Vec<Habit>> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare(&format!("SELECT {} FROM habits ORDER BY id", HABIT_COLS))?;
        let habits = stmt
            .query_map([], habit_from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(habits)
    }

    /// All log dates for a habit, ascending
    pub fn habit_log_dates(&self, habit_id: i64) -> Result<Vec<NaiveDate>> {
        // Verify the habit exists so a bad id is NotFound, not an empty list
        self.get_habit(habit_id)?;

        let conn = self.conn()?;
        let mut stmt =
            conn.prepare("SELECT date FROM habit_logs WHERE habit_id = ? ORDER BY date")?;
        let dates = stmt
            .query_map(params![habit_id], |row| {
                Ok(parse_date(&row.get::<_, String>(0)?))
            })?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(dates)
    }

    /// Count of days a habit was logged within [from, to]
    pub fn habit_days_logged(&self, habit_id: i64, from: NaiveDate, to: NaiveDate) -> Result<u32> {
        let conn = self.conn()?;
        conn.query_row(
            "SELECT COUNT(*) FROM habit_logs WHERE habit_id = ? AND date BETWEEN ? AND ?",
            params![habit_id, from.to_string(), to.to_string()],
            |row| row.get(0),
        )
        .map_err(Into::into)
    }
}
