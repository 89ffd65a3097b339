//! Task operations

use chrono::{DateTime, Utc};
use rusqlite::{params, OptionalExtension, Row};
use tracing::debug;

use super::{format_datetime, parse_date, parse_datetime, Store};
use crate::error::{Error, Result};
use crate::models::{NewTask, Priority, Task};

fn task_from_row(row: &Row<'_>) -> rusqlite::Result<Task> {
    Ok(Task {
        id: row.get(0)?,
        description: row.get(1)?,
        priority: row
            .get::<_, String>(2)?
            .parse::<Priority>()
            .unwrap_or_default(),
        due_date: row.get::<_, Option<String>>(3)?.map(|d| parse_date(&d)),
        completed: row.get(4)?,
        created_at: parse_datetime(&row.get::<_, String>(5)?),
        completed_at: row
            .get::<_, Option<String>>(6)?
            .map(|d| parse_datetime(&d)),
    })
}

const TASK_COLS: &str = "id, description, priority, due_date, completed, created_at, completed_at";

impl Store {
    /// Add a task; fails with `Validation` on an empty description
    pub fn add_task(&self, task: &NewTask, now: DateTime<Utc>) -> Result<Task> {
        let description = task.description.trim();
        if description.is_empty() {
            return Err(Error::Validation("Task description is required".into()));
        }

        let conn = self.conn()?;
        conn.execute(
            "INSERT INTO tasks (description, priority, due_date, created_at) VALUES (?, ?, ?, ?)",
            params![
                description,
                task.priority.as_str(),
                task.due_date.map(|d| d.to_string()),
                format_datetime(now),
            ],
        )?;

        let id = conn.last_insert_rowid();
        debug!(id, priority = %task.priority, "Task added");
        self.get_task(id)
    }

    /// Fetch one task by id
    pub fn get_task(&self, id: i64) -> Result<Task> {
        let conn = self.conn()?;
        conn.query_row(
            &format!("SELECT {} FROM tasks WHERE id = ?", TASK_COLS),
            params![id],
            task_from_row,
        )
        .optional()?
        .ok_or_else(|| Error::NotFound(format!("Task #{}", id)))
    }

    /// List tasks in insertion order, optionally including completed ones
    pub fn list_tasks(&self, include_completed: bool) -> Result<Vec<Task>> {
        let conn = self.conn()?;
        let sql = if include_completed {
            format!("SELECT {} FROM tasks ORDER BY id", TASK_COLS)
        } else {
            format!("SELECT {} FROM tasks WHERE completed = 0 ORDER BY id", TASK_COLS)
        };

        let mut stmt = conn.prepare(&sql)?;
        let tasks = stmt
            .query_map([], task_from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(tasks)
    }

    /// Mark a task completed
    ///
    /// Completion is the only mutation tasks support. Re-completing an
    /// already-completed task is a no-op that returns the task unchanged.
    pub fn complete_task(&self, id: i64, now: DateTime<Utc>) -> Result<Task> {
        let task = self.get_task(id)?;
        if task.completed {
            return Ok(task);
        }

        let conn = self.conn()?;
        conn.execute(
            "UPDATE tasks SET completed = 1, completed_at = ? WHERE id = ?",
            params![format_datetime(now), id],
        )?;

        debug!(id, "Task completed");
        self.get_task(id)
    }

    /// Permanently remove a task
    pub fn delete_task(&self, id: i64) -> Result<()> {
        let conn = self.conn()?;
        let affected = conn.execute("DELETE FROM tasks WHERE id = ?", params![id])?;
        if affected == 0 {
            return Err(Error::NotFound(format!("Task #{}", id)));
        }
        Ok(())
    }

    /// Pending / completed counts, for progress lines after a completion
    pub fn task_counts(&self) -> Result<(u32, u32)> {
        let conn = self.conn()?;
        conn.query_row(
            "SELECT
                COALESCE(SUM(CASE WHEN completed = 0 THEN 1 ELSE 0 END), 0),
                COALESCE(SUM(CASE WHEN completed = 1 THEN 1 ELSE 0 END), 0)
             FROM tasks",
            [],
            |row| Ok((row.get(0)?, row.get(1)?)),
        )
        .map_err(Into::into)
    }
}
