//! Mood and journal operations

use chrono::{DateTime, NaiveDate, Utc};
use rusqlite::{params, OptionalExtension, Row};
use tracing::debug;

use super::{format_datetime, parse_date, parse_datetime, Store};
use crate::error::{Error, Result};
use crate::models::{JournalEntry, Mood, MoodEntry};

fn mood_from_row(row: &Row<'_>) -> rusqlite::Result<MoodEntry> {
    Ok(MoodEntry {
        id: row.get(0)?,
        mood: row.get::<_, String>(1)?.parse::<Mood>().unwrap_or(Mood::Okay),
        note: row.get(2)?,
        date: parse_date(&row.get::<_, String>(3)?),
        logged_at: parse_datetime(&row.get::<_, String>(4)?),
    })
}

fn journal_from_row(row: &Row<'_>) -> rusqlite::Result<JournalEntry> {
    Ok(JournalEntry {
        id: row.get(0)?,
        prompt: row.get(1)?,
        content: row.get(2)?,
        word_count: row.get(3)?,
        date: parse_date(&row.get::<_, String>(4)?),
        written_at: parse_datetime(&row.get::<_, String>(5)?),
    })
}

const MOOD_COLS: &str = "id, mood, note, date, logged_at";
const JOURNAL_COLS: &str = "id, prompt, content, word_count, date, written_at";

impl Store {
    /// Log a mood entry
    pub fn log_mood(
        &self,
        mood: Mood,
        note: Option<&str>,
        date: NaiveDate,
        now: DateTime<Utc>,
    ) -> Result<MoodEntry> {
        let conn = self.conn()?;
        conn.execute(
            "INSERT INTO mood_entries (mood, note, date, logged_at) VALUES (?, ?, ?, ?)",
            params![
                mood.as_str(),
                note.map(str::trim).filter(|n| !n.is_empty()),
                date.to_string(),
                format_datetime(now),
            ],
        )?;

        let id = conn.last_insert_rowid();
        debug!(id, mood = %mood, "Mood logged");

        conn.query_row(
            &format!("SELECT {} FROM mood_entries WHERE id = ?", MOOD_COLS),
            params![id],
            mood_from_row,
        )
        .map_err(Into::into)
    }

    /// List mood entries in insertion order, optionally date-filtered
    pub fn list_moods(
        &self,
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
    ) -> Result<Vec<MoodEntry>> {
        let conn = self.conn()?;

        let mut conditions = Vec::new();
        let mut args: Vec<Box<dyn rusqlite::ToSql>> = Vec::new();

        if let Some(from) = from {
            conditions.push("date >= ?");
            args.push(Box::new(from.to_string()));
        }
        if let Some(to) = to {
            conditions.push("date <= ?");
            args.push(Box::new(to.to_string()));
        }

        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", conditions.join(" AND "))
        };

        let sql = format!(
            "SELECT {} FROM mood_entries {} ORDER BY id",
            MOOD_COLS, where_clause
        );
        let arg_refs: Vec<&dyn rusqlite::ToSql> = args.iter().map(|a| a.as_ref()).collect();

        let mut stmt = conn.prepare(&sql)?;
        let entries = stmt
            .query_map(arg_refs.as_slice(), mood_from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(entries)
    }

    /// Save a journal entry; word count is derived at creation
    pub fn write_journal(
        &self,
        content: &str,
        prompt: Option<&str>,
        date: NaiveDate,
        now: DateTime<Utc>,
    ) -> Result<JournalEntry> {
        let content = content.trim();
        if content.is_empty() {
            return Err(Error::Validation("Journal entry is empty".into()));
        }

        let word_count = content.split_whitespace().count() as u32;

        let conn = self.conn()?;
        conn.execute(
            "INSERT INTO journal_entries (prompt, content, word_count, date, written_at)
             VALUES (?, ?, ?, ?, ?)",
            params![
                prompt,
                content,
                word_count,
                date.to_string(),
                format_datetime(now),
            ],
        )?;

        let id = conn.last_insert_rowid();
        debug!(id, word_count, "Journal entry saved");
        self.get_journal_entry(id)
    }

    /// Fetch one journal entry by id
    pub fn get_journal_entry(&self, id: i64) -> Result<JournalEntry> {
        let conn = self.conn()?;
        conn.query_row(
            &format!("SELECT {} FROM journal_entries WHERE id = ?", JOURNAL_COLS),
            params![id],
            journal_from_row,
        )
        .optional()?
        .ok_or_else(|| Error::NotFound(format!("Journal entry #{}", id)))
    }

    /// List journal entries in insertion order, optionally date-filtered
    pub fn list_journal(
        &self,
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
    ) -> Result<Vec<JournalEntry>> {
        let conn = self.conn()?;

        let mut conditions = Vec::new();
        let mut args: Vec<Box<dyn rusqlite::ToSql>> = Vec::new();

        if let Some(from) = from {
            conditions.push("date >= ?");
            args.push(Box::new(from.to_string()));
        }
        if let Some(to) = to {
            conditions.push("date <= ?");
            args.push(Box::new(to.to_string()));
        }

        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", conditions.join(" AND "))
        };

        let sql = format!(
            "SELECT {} FROM journal_entries {} ORDER BY id",
            JOURNAL_COLS, where_clause
        );
        let arg_refs: Vec<&dyn rusqlite::ToSql> = args.iter().map(|a| a.as_ref()).collect();

        let mut stmt = conn.prepare(&sql)?;
        let entries = stmt
            .query_map(arg_refs.as_slice(), journal_from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(entries)
    }
}
