//! Job application operations
//!
//! Status changes go through `advance_application`, which enforces the
//! pipeline: applied -> interviewing -> {offered, rejected}, applied ->
//! rejected, no way out of a terminal state.

use chrono::{DateTime, NaiveDate, Utc};
use rusqlite::{params, OptionalExtension, Row};
use tracing::debug;

use super::{format_datetime, parse_date, parse_datetime, Store};
use crate::error::{Error, Result};
use crate::models::{ApplicationStatus, JobApplication, NewApplication};

fn application_from_row(row: &Row<'_>) -> rusqlite::Result<JobApplication> {
    Ok(JobApplication {
        id: row.get(0)?,
        company: row.get(1)?,
        role: row.get(2)?,
        status: row
            .get::<_, String>(3)?
            .parse::<ApplicationStatus>()
            .unwrap_or_default(),
        applied_date: parse_date(&row.get::<_, String>(4)?),
        notes: row.get(5)?,
        updated_at: parse_datetime(&row.get::<_, String>(6)?),
    })
}

const APP_COLS: &str = "id, company, role, status, applied_date, notes, updated_at";

impl Store {
    /// Track a new application, starting in `applied`
    pub fn add_application(
        &self,
        app: &NewApplication,
        applied_date: NaiveDate,
        now: DateTime<Utc>,
    ) -> Result<JobApplication> {
        let company = app.company.trim();
        let role = app.role.trim();
        if company.is_empty() {
            return Err(Error::Validation("Company name is required".into()));
        }
        if role.is_empty() {
            return Err(Error::Validation("Role is required".into()));
        }

        let conn = self.conn()?;
        conn.execute(
            "INSERT INTO applications (company, role, status, applied_date, notes, updated_at)
             VALUES (?, ?, ?, ?, ?, ?)",
            params![
                company,
                role,
                ApplicationStatus::Applied.as_str(),
                applied_date.to_string(),
                app.notes.as_deref().map(str::trim).filter(|n| !n.is_empty()),
                format_datetime(now),
            ],
        )?;

        let id = conn.last_insert_rowid();
        debug!(id, company, role, "Application tracked");
        self.get_application(id)
    }

    /// Fetch one application by id
    pub fn get_application(&self, id: i64) -> Result<JobApplication> {
        let conn = self.conn()?;
        conn.query_row(
            &format!("SELECT {} FROM applications WHERE id = ?", APP_COLS),
            params![id],
            application_from_row,
        )
        .optional()?
        .ok_or_else(|| Error::NotFound(format!("Application #{}", id)))
    }

    /// List applications in insertion order, optionally filtered by status
    pub fn list_applications(
        &self,
        status: Option<ApplicationStatus>,
    ) -> Result<Vec<JobApplication>> {
        let conn = self.conn()?;
        let apps = match status {
            Some(status) => {
                let mut stmt = conn.prepare(&format!(
                    "SELECT {} FROM applications WHERE status = ? ORDER BY id",
                    APP_COLS
                ))?;
                let apps = stmt
                    .query_map(params![status.as_str()], application_from_row)?
                    .collect::<rusqlite::Result<Vec<_>>>()?;
                apps
            }
            None => {
                let mut stmt = conn.prepare(&format!(
                    "SELECT {} FROM applications ORDER BY id",
                    APP_COLS
                ))?;
                let apps = stmt
                    .query_map([], application_from_row)?
                    .collect::<rusqlite::Result<Vec<_>>>()?;
                apps
            }
        };
        Ok(apps)
    }

    /// Move an application to a new pipeline stage
    ///
    /// Fails with `InvalidTransition` when the pipeline does not allow the
    /// move (terminal states have no outgoing edges). Notes, when given,
    /// replace the stored notes.
    pub fn advance_application(
        &self,
        id: i64,
        next: ApplicationStatus,
        notes: Option<&str>,
        now: DateTime<Utc>,
    ) -> Result<JobApplication> {
        let app = self.get_application(id)?;

        if !app.status.can_transition_to(next) {
            return Err(Error::InvalidTransition {
                from: app.status.to_string(),
                to: next.to_string(),
            });
        }

        let conn = self.conn()?;
        match notes.map(str::trim).filter(|n| !n.is_empty()) {
            Some(notes) => conn.execute(
                "UPDATE applications SET status = ?, notes = ?, updated_at = ? WHERE id = ?",
                params![next.as_str(), notes, format_datetime(now), id],
            )?,
            None => conn.execute(
                "UPDATE applications SET status = ?, updated_at = ? WHERE id = ?",
                params![next.as_str(), format_datetime(now), id],
            )?,
        };

        debug!(id, from = %app.status, to = %next, "Application advanced");
        self.get_application(id)
    }

    /// Permanently remove an application
    pub fn delete_application(&self, id: i64) -> Result<()> {
        let conn = self.conn()?;
        let affected = conn.execute("DELETE FROM applications WHERE id = ?", params![id])?;
        if affected == 0 {
            return Err(Error::NotFound(format!("Application #{}", id)));
        }
        Ok(())
    }
}
