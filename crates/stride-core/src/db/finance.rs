//! Expense, income, budget, and savings goal operations

use chrono::{DateTime, NaiveDate, Utc};
use rusqlite::{params, OptionalExtension, Row};
use tracing::debug;

use super::{format_datetime, parse_date, parse_datetime, Store};
use crate::error::{Error, Result};
use crate::models::{
    BudgetLimit, Contribution, Expense, ExpenseCategory, Income, SavingsGoal,
};

fn expense_from_row(row: &Row<'_>) -> rusqlite::Result<Expense> {
    Ok(Expense {
        id: row.get(0)?,
        amount: row.get(1)?,
        category: row
            .get::<_, String>(2)?
            .parse::<ExpenseCategory>()
            .unwrap_or(ExpenseCategory::Other),
        description: row.get(3)?,
        date: parse_date(&row.get::<_, String>(4)?),
        created_at: parse_datetime(&row.get::<_, String>(5)?),
    })
}

fn income_from_row(row: &Row<'_>) -> rusqlite::Result<Income> {
    Ok(Income {
        id: row.get(0)?,
        amount: row.get(1)?,
        source: row.get(2)?,
        description: row.get(3)?,
        date: parse_date(&row.get::<_, String>(4)?),
        created_at: parse_datetime(&row.get::<_, String>(5)?),
    })
}

fn savings_goal_from_row(row: &Row<'_>) -> rusqlite::Result<SavingsGoal> {
    Ok(SavingsGoal {
        id: row.get(0)?,
        name: row.get(1)?,
        target: row.get(2)?,
        saved: row.get(3)?,
        deadline: row.get::<_, Option<String>>(4)?.map(|d| parse_date(&d)),
        created_at: parse_datetime(&row.get::<_, String>(5)?),
    })
}

const EXPENSE_COLS: &str = "id, amount, category, description, date, created_at";
const INCOME_COLS: &str = "id, amount, source, description, date, created_at";
const SAVINGS_COLS: &str = "id, name, target, saved, deadline, created_at";

/// Reject non-positive or non-finite money amounts
fn validate_amount(amount: f64, what: &str) -> Result<()> {
    if !amount.is_finite() || amount <= 0.0 {
        return Err(Error::Validation(format!(
            "{} must be a positive number",
            what
        )));
    }
    Ok(())
}

impl Store {
    // -------------------------------------------------------------------------
    // Expenses
    // -------------------------------------------------------------------------

    /// Log an expense; zero and negative amounts are rejected
    pub fn add_expense(
        &self,
        amount: f64,
        category: ExpenseCategory,
        description: Option<&str>,
        date: NaiveDate,
        now: DateTime<Utc>,
    ) -> Result<Expense> {
        validate_amount(amount, "Expense amount")?;

        let conn = self.conn()?;
        conn.execute(
            "INSERT INTO expenses (amount, category, description, date, created_at)
             VALUES (?, ?, ?, ?, ?)",
            params![
                amount,
                category.as_str(),
                description.map(str::trim).filter(|d| !d.is_empty()),
                date.to_string(),
                format_datetime(now),
            ],
        )?;

        let id = conn.last_insert_rowid();
        debug!(id, amount, category = %category, "Expense logged");
        self.get_expense(id)
    }

    /// Fetch one expense by id
    pub fn get_expense(&self, id: i64) -> Result<Expense> {
        let conn = self.conn()?;
        conn.query_row(
            &format!("SELECT {} FROM expenses WHERE id = ?", EXPENSE_COLS),
            params![id],
            expense_from_row,
        )
        .optional()?
        .ok_or_else(|| Error::NotFound(format!("Expense #{}", id)))
    }

    /// List expenses in insertion order, optionally filtered by date range
    /// and category
    pub fn list_expenses(
        &self,
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
        category: Option<ExpenseCategory>,
    ) -> Result<Vec<Expense>> {
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
        if let Some(cat) = category {
            conditions.push("category = ?");
            args.push(Box::new(cat.as_str()));
        }

        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", conditions.join(" AND "))
        };

        let sql = format!(
            "SELECT {} FROM expenses {} ORDER BY id",
            EXPENSE_COLS, where_clause
        );
        let arg_refs: Vec<&dyn rusqlite::ToSql> = args.iter().map(|a| a.as_ref()).collect();

        let mut stmt = conn.prepare(&sql)?;
        let expenses = stmt
            .query_map(arg_refs.as_slice(), expense_from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(expenses)
    }

    /// Permanently remove an expense
    pub fn delete_expense(&self, id: i64) -> Result<()> {
        let conn = self.conn()?;
        let affected = conn.execute("DELETE FROM expenses WHERE id = ?", params![id])?;
        if affected == 0 {
            return Err(Error::NotFound(format!("Expense #{}", id)));
        }
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Income
    // -------------------------------------------------------------------------

    /// Log an income entry; source is free-form
    pub fn add_income(
        &self,
        amount: f64,
        source: &str,
        description: Option<&str>,
        date: NaiveDate,
        now: DateTime<Utc>,
    ) -> Result<Income> {
        validate_amount(amount, "Income amount")?;

        let source = source.trim().to_lowercase();
        if source.is_empty() {
            return Err(Error::Validation("Income source is required".into()));
        }

        let conn = self.conn()?;
        conn.execute(
            "INSERT INTO income (amount, source, description, date, created_at)
             VALUES (?, ?, ?, ?, ?)",
            params![
                amount,
                source,
                description.map(str::trim).filter(|d| !d.is_empty()),
                date.to_string(),
                format_datetime(now),
            ],
        )?;

        let id = conn.last_insert_rowid();
        debug!(id, amount, source, "Income logged");

        conn.query_row(
            &format!("SELECT {} FROM income WHERE id = ?", INCOME_COLS),
            params![id],
            income_from_row,
        )
        .map_err(Into::into)
    }

    /// List income entries in insertion order, optionally date-filtered
    pub fn list_income(
        &self,
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
    ) -> Result<Vec<Income>> {
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
            "SELECT {} FROM income {} ORDER BY id",
            INCOME_COLS, where_clause
        );
        let arg_refs: Vec<&dyn rusqlite::ToSql> = args.iter().map(|a| a.as_ref()).collect();

        let mut stmt = conn.prepare(&sql)?;
        let income = stmt
            .query_map(arg_refs.as_slice(), income_from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(income)
    }

    // -------------------------------------------------------------------------
    // Budget limits
    // -------------------------------------------------------------------------

    /// Set (or replace) the monthly limit for a category
    pub fn set_budget_limit(&self, category: ExpenseCategory, limit: f64) -> Result<BudgetLimit> {
        validate_amount(limit, "Budget limit")?;

        let conn = self.conn()?;
        conn.execute(
            "INSERT INTO budget_limits (category, monthly_limit) VALUES (?, ?)
             ON CONFLICT(category) DO UPDATE SET monthly_limit = excluded.monthly_limit",
            params![category.as_str(), limit],
        )?;

        debug!(category = %category, limit, "Budget limit set");
        Ok(BudgetLimit {
            category,
            monthly_limit: limit,
        })
    }

    /// All configured budget limits
    pub fn budget_limits(&self) -> Result<Vec<BudgetLimit>> {
        let conn = self.conn()?;
        let mut stmt =
            conn.prepare("SELECT category, monthly_limit FROM budget_limits ORDER BY category")?;
        let limits = stmt
            .query_map([], |row| {
                Ok(BudgetLimit {
                    category: row
                        .get::<_, String>(0)?
                        .parse::<ExpenseCategory>()
                        .unwrap_or(ExpenseCategory::Other),
                    monthly_limit: row.get(1)?,
                })
            })?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(limits)
    }

    /// Remove the limit for a category
    pub fn clear_budget_limit(&self, category: ExpenseCategory) -> Result<()> {
        let conn = self.conn()?;
        let affected = conn.execute(
            "DELETE FROM budget_limits WHERE category = ?",
            params![category.as_str()],
        )?;
        if affected == 0 {
            return Err(Error::NotFound(format!(
                "Budget limit for '{}'",
                category
            )));
        }
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Savings goals
    // -------------------------------------------------------------------------

    /// Create a savings goal
    pub fn create_savings_goal(
        &self,
        name: &str,
        target: f64,
        deadline: Option<NaiveDate>,
        now: DateTime<Utc>,
    ) -> Result<SavingsGoal> {
        let name = name.trim();
        if name.is_empty() {
            return Err(Error::Validation("Savings goal name is required".into()));
        }
        validate_amount(target, "Savings target")?;

        let conn = self.conn()?;
        conn.execute(
            "INSERT INTO savings_goals (name, target, deadline, created_at) VALUES (?, ?, ?, ?)",
            params![
                name,
                target,
                deadline.map(|d| d.to_string()),
                format_datetime(now),
            ],
        )?;

        let id = conn.last_insert_rowid();
        debug!(id, name, target, "Savings goal created");
        self.get_savings_goal(id)
    }

    /// Fetch one savings goal by id
    pub fn get_savings_goal(&self, id: i64) -> Result<SavingsGoal> {
        let conn = self.conn()?;
        conn.query_row(
            &format!("SELECT {} FROM savings_goals WHERE id = ?", SAVINGS_COLS),
            params![id],
            savings_goal_from_row,
        )
        .optional()?
        .ok_or_else(|| Error::NotFound(format!("Savings goal #{}", id)))
    }

    /// List savings goals in insertion order
    pub fn list_savings_goals(&self) -> Result<Vec<SavingsGoal>> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare(&format!(
            "SELECT {} FROM savings_goals ORDER BY id",
            SAVINGS_COLS
        ))?;
        let goals = stmt
            .query_map([], savings_goal_from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(goals)
    }

    /// Contribute to a savings goal
    ///
    /// The running total never exceeds the target: a contribution that
    /// would overshoot is clamped, and the clamped-off excess is reported
    /// back to the caller rather than silently dropped.
    pub fn contribute_to_savings(&self, id: i64, amount: f64) -> Result<Contribution> {
        validate_amount(amount, "Contribution amount")?;

        let goal = self.get_savings_goal(id)?;
        let headroom = (goal.target - goal.saved).max(0.0);
        let applied = amount.min(headroom);
        let excess = amount - applied;

        let conn = self.conn()?;
        conn.execute(
            "UPDATE savings_goals SET saved = saved + ? WHERE id = ?",
            params![applied, id],
        )?;

        debug!(id, applied, excess, "Savings contribution");
        Ok(Contribution {
            goal: self.get_savings_goal(id)?,
            applied,
            excess,
        })
    }

    /// Permanently remove a savings goal
    pub fn delete_savings_goal(&self, id: i64) -> Result<()> {
        let conn = self.conn()?;
        let affected = conn.execute("DELETE FROM savings_goals WHERE id = ?", params![id])?;
        if affected == 0 {
            return Err(Error::NotFound(format!("Savings goal #{}", id)));
        }
        Ok(())
    }
}
