//! Weekly goal operations

use chrono::{DateTime, NaiveDate, Utc};
use rusqlite::{params, OptionalExtension, Row};
use tracing::debug;

use super::{format_datetime, parse_date, parse_datetime, Store};
use crate::error::{Error, Result};
use crate::models::{GoalCategory, WeeklyGoal};

fn goal_from_row(row: &Row<'_>) -> rusqlite::Result<WeeklyGoal> {
    Ok(WeeklyGoal {
        id: row.get(0)?,
        category: row
            .get::<_, String>(1)?
            .parse::<GoalCategory>()
            .unwrap_or_default(),
        description: row.get(2)?,
        target: row.get(3)?,
        progress: row.get(4)?,
        week_start: parse_date(&row.get::<_, String>(5)?),
        created_at: parse_datetime(&row.get::<_, String>(6)?),
        completed_at: row
            .get::<_, Option<String>>(7)?
            .map(|d| parse_datetime(&d)),
    })
}

const GOAL_COLS: &str =
    "id, category, description, target, progress, week_start, created_at, completed_at";

impl Store {
    /// Set a goal for the week starting at `week_start`
    pub fn set_weekly_goal(
        &self,
        category: GoalCategory,
        description: &str,
        target: f64,
        week_start: NaiveDate,
        now: DateTime<Utc>,
    ) -> Result<WeeklyGoal> {
        let description = description.trim();
        if description.is_empty() {
            return Err(Error::Validation("Goal description is required".into()));
        }
        if target <= 0.0 {
            return Err(Error::Validation(
                "Goal target must be a positive number".into(),
            ));
        }

        let conn = self.conn()?;
        conn.execute(
            "INSERT INTO weekly_goals (category, description, target, week_start, created_at)
             VALUES (?, ?, ?, ?, ?)",
            params![
                category.as_str(),
                description,
                target,
                week_start.to_string(),
                format_datetime(now),
            ],
        )?;

        let id = conn.last_insert_rowid();
        debug!(id, category = %category, "Weekly goal set");
        self.get_goal(id)
    }

    /// Fetch one goal by id
    pub fn get_goal(&self, id: i64) -> Result<WeeklyGoal> {
        let conn = self.conn()?;
        conn.query_row(
            &format!("SELECT {} FROM weekly_goals WHERE id = ?", GOAL_COLS),
            params![id],
            goal_from_row,
        )
        .optional()?
        .ok_or_else(|| Error::NotFound(format!("Goal #{}", id)))
    }

    /// List goals in insertion order, optionally scoped to one week
    pub fn list_goals(&self, week_start: Option<NaiveDate>) -> Result<Vec<WeeklyGoal>> {
        let conn = self.conn()?;
        let goals = match week_start {
            Some(week) => {
                let mut stmt = conn.prepare(&format!(
                    "SELECT {} FROM weekly_goals WHERE week_start = ? ORDER BY id",
                    GOAL_COLS
                ))?;
                let goals = stmt
                    .query_map(params![week.to_string()], goal_from_row)?
                    .collect::<rusqlite::Result<Vec<_>>>()?;
                goals
            }
            None => {
                let mut stmt = conn.prepare(&format!(
                    "SELECT {} FROM weekly_goals ORDER BY id",
                    GOAL_COLS
                ))?;
                let goals = stmt
                    .query_map([], goal_from_row)?
                    .collect::<rusqlite::Result<Vec<_>>>()?;
                goals
            }
        };
        Ok(goals)
    }

    /// Add progress towards a goal
    ///
    /// Progress is the only mutable field besides completion. Reaching the
    /// target marks the goal completed automatically.
    pub fn add_goal_progress(&self, id: i64, amount: f64, now: DateTime<Utc>) -> Result<WeeklyGoal> {
        if amount <= 0.0 {
            return Err(Error::Validation(
                "Progress amount must be a positive number".into(),
            ));
        }

        let goal = self.get_goal(id)?;
        let progress = goal.progress + amount;

        let conn = self.conn()?;
        if progress >= goal.target && goal.completed_at.is_none() {
            conn.execute(
                "UPDATE weekly_goals SET progress = ?, completed_at = ? WHERE id = ?",
                params![progress, format_datetime(now), id],
            )?;
        } else {
            conn.execute(
                "UPDATE weekly_goals SET progress = ? WHERE id = ?",
                params![progress, id],
            )?;
        }

        debug!(id, progress, "Goal progress updated");
        self.get_goal(id)
    }

    /// Mark a goal completed regardless of recorded progress
    pub fn complete_goal(&self, id: i64, now: DateTime<Utc>) -> Result<WeeklyGoal> {
        let goal = self.get_goal(id)?;
        if goal.completed_at.is_some() {
            return Ok(goal);
        }

        let conn = self.conn()?;
        conn.execute(
            "UPDATE weekly_goals SET progress = target, completed_at = ? WHERE id = ?",
            params![format_datetime(now), id],
        )?;

        debug!(id, "Goal completed");
        self.get_goal(id)
    }
}
