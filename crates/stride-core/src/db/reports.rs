//! Derived summaries: budget status, financials, mood history, progress
//!
//! Everything here is read-only over the record tables. Reference dates
//! are parameters throughout; nothing reads a clock.

use chrono::NaiveDate;
use rusqlite::params;

use super::Store;
use crate::error::Result;
use crate::metrics;
use crate::models::{
    BudgetLineStatus, BudgetStatus, CategoryTotal, ExpenseCategory, FinancialSummary,
    GoalProgress, HabitProgress, MoodHistory, ProgressReport, ReportPeriod,
};
use crate::period::{month_end, month_start, week_start};

impl Store {
    /// Sum of expense amounts within [from, to], optionally per category
    fn expense_total(
        &self,
        from: NaiveDate,
        to: NaiveDate,
        category: Option<ExpenseCategory>,
    ) -> Result<f64> {
        let conn = self.conn()?;
        let total = match category {
            Some(cat) => conn.query_row(
                "SELECT COALESCE(SUM(amount), 0) FROM expenses
                 WHERE category = ? AND date BETWEEN ? AND ?",
                params![cat.as_str(), from.to_string(), to.to_string()],
                |row| row.get(0),
            )?,
            None => conn.query_row(
                "SELECT COALESCE(SUM(amount), 0) FROM expenses WHERE date BETWEEN ? AND ?",
                params![from.to_string(), to.to_string()],
                |row| row.get(0),
            )?,
        };
        Ok(total)
    }

    /// Budget standing for the month containing `reference`
    ///
    /// Remaining is limit - spent and goes negative on overspend; the
    /// caller always sees the true deficit.
    pub fn budget_status(&self, reference: NaiveDate) -> Result<BudgetStatus> {
        let from = month_start(reference);
        let to = month_end(reference);

        let mut lines = Vec::new();
        for limit in self.budget_limits()? {
            let spent = self.expense_total(from, to, Some(limit.category))?;
            let remaining = limit.monthly_limit - spent;
            lines.push(BudgetLineStatus {
                category: limit.category,
                limit: limit.monthly_limit,
                spent,
                remaining,
                overspend: remaining < 0.0,
            });
        }

        Ok(BudgetStatus { month: from, lines })
    }

    /// Income/expense/savings overview for [from, to]
    pub fn financial_summary(&self, from: NaiveDate, to: NaiveDate) -> Result<FinancialSummary> {
        let conn = self.conn()?;

        let total_expense = self.expense_total(from, to, None)?;
        let total_income: f64 = conn.query_row(
            "SELECT COALESCE(SUM(amount), 0) FROM income WHERE date BETWEEN ? AND ?",
            params![from.to_string(), to.to_string()],
            |row| row.get(0),
        )?;

        // Per-category expense breakdown, largest first
        let mut stmt = conn.prepare(
            "SELECT category, SUM(amount) FROM expenses
             WHERE date BETWEEN ? AND ?
             GROUP BY category ORDER BY SUM(amount) DESC",
        )?;
        let expenses_by_category = stmt
            .query_map(params![from.to_string(), to.to_string()], |row| {
                let category = row
                    .get::<_, String>(0)?
                    .parse::<ExpenseCategory>()
                    .unwrap_or(ExpenseCategory::Other);
                let amount: f64 = row.get(1)?;
                Ok((category, amount))
            })?
            .collect::<rusqlite::Result<Vec<_>>>()?
            .into_iter()
            .map(|(category, amount)| CategoryTotal {
                category,
                amount,
                percentage: if total_expense > 0.0 {
                    amount / total_expense * 100.0
                } else {
                    0.0
                },
            })
            .collect();

        // Per-source income breakdown, largest first
        let mut stmt = conn.prepare(
            "SELECT source, SUM(amount) FROM income
             WHERE date BETWEEN ? AND ?
             GROUP BY source ORDER BY SUM(amount) DESC",
        )?;
        let income_by_source = stmt
            .query_map(params![from.to_string(), to.to_string()], |row| {
                Ok(crate::models::SourceTotal {
                    source: row.get(0)?,
                    amount: row.get(1)?,
                })
            })?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        let (total_saved, total_savings_target): (f64, f64) = conn.query_row(
            "SELECT COALESCE(SUM(saved), 0), COALESCE(SUM(target), 0) FROM savings_goals",
            [],
            |row| Ok((row.get(0)?, row.get(1)?)),
        )?;

        Ok(FinancialSummary {
            period: ReportPeriod { from, to },
            total_income,
            total_expense,
            net: total_income - total_expense,
            savings_rate: metrics::savings_rate(total_income, total_expense),
            expenses_by_category,
            income_by_source,
            total_saved,
            total_savings_target,
        })
    }

    /// Mood entries and frequency counts for [from, to]
    pub fn mood_history(&self, from: NaiveDate, to: NaiveDate) -> Result<MoodHistory> {
        let entries = self.list_moods(Some(from), Some(to))?;

        let mut counts: Vec<(crate::models::Mood, u32)> = Vec::new();
        for entry in &entries {
            match counts.iter_mut().find(|(m, _)| *m == entry.mood) {
                Some((_, n)) => *n += 1,
                None => counts.push((entry.mood, 1)),
            }
        }
        counts.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.as_str().cmp(b.0.as_str())));

        let positive = entries.iter().filter(|e| e.mood.is_positive()).count() as u32;
        let negative = entries.iter().filter(|e| e.mood.is_negative()).count() as u32;

        Ok(MoodHistory {
            period: ReportPeriod { from, to },
            entries,
            counts,
            positive,
            negative,
        })
    }

    /// Composite weekly progress report for the week containing `today`
    ///
    /// Covers tasks created/completed this week, every habit's streak and
    /// days logged, this week's goals, and the week's financials.
    pub fn progress_report(&self, today: NaiveDate) -> Result<ProgressReport> {
        let from = week_start(today);
        let to = today;
        let conn = self.conn()?;

        let tasks_created: u32 = conn.query_row(
            "SELECT COUNT(*) FROM tasks WHERE date(created_at) BETWEEN ? AND ?",
            params![from.to_string(), to.to_string()],
            |row| row.get(0),
        )?;
        let tasks_completed: u32 = conn.query_row(
            "SELECT COUNT(*) FROM tasks
             WHERE completed = 1 AND date(completed_at) BETWEEN ? AND ?",
            params![from.to_string(), to.to_string()],
            |row| row.get(0),
        )?;

        let mut habits = Vec::new();
        for habit in self.list_habits()? {
            let log_dates = self.habit_log_dates(habit.id)?;
            habits.push(HabitProgress {
                name: habit.name,
                streak: metrics::current_streak(&log_dates, today),
                days_logged: self.habit_days_logged(habit.id, from, to)?,
            });
        }

        let goals: Vec<GoalProgress> = self
            .list_goals(Some(from))?
            .into_iter()
            .map(|g| GoalProgress {
                id: g.id,
                category: g.category,
                completion: g.completion(),
                completed: g.completed_at.is_some(),
                description: g.description,
            })
            .collect();
        let goals_completed = goals.iter().filter(|g| g.completed).count() as u32;

        Ok(ProgressReport {
            period: ReportPeriod { from, to },
            tasks_created,
            tasks_completed,
            task_completion_rate: metrics::completion_rate(tasks_completed, tasks_created),
            habits,
            goals,
            goals_completed,
            finance: self.financial_summary(from, to)?,
        })
    }
}
