//! CLI command implementations
//!
//! Commands are organized by domain:
//! - `core` - Core commands (init, status, reset) and shared utilities
//! - `tasks` - Todo commands
//! - `habits` - Habit tracking commands
//! - `goals` - Weekly goal commands
//! - `finance` - Expense, income, budget, and savings commands
//! - `wellness` - Mood and journal commands
//! - `applications` - Job application pipeline commands
//! - `career` - Skill analysis, job search, and advice commands
//! - `reports` - Derived report commands

pub mod applications;
pub mod career;
pub mod core;
pub mod finance;
pub mod goals;
pub mod habits;
pub mod reports;
pub mod tasks;
pub mod wellness;

// Re-export command functions for main.rs
pub use applications::*;
pub use career::*;
pub use core::*;
pub use finance::*;
pub use goals::*;
pub use habits::*;
pub use reports::*;
pub use tasks::*;
pub use wellness::*;

use anyhow::{Context, Result};
use chrono::NaiveDate;

/// Parse an optional YYYY-MM-DD argument, defaulting to `today`
pub fn resolve_date(arg: Option<&str>, today: NaiveDate) -> Result<NaiveDate> {
    match arg {
        Some(s) => NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .context("Invalid date format (use YYYY-MM-DD)"),
        None => Ok(today),
    }
}

/// Truncate a string to a maximum length, adding "..." if truncated
///
/// Cuts on a char boundary so multi-byte content can't split a character.
pub fn truncate(s: &str, max: usize) -> String {
    if s.len() <= max {
        return s.to_string();
    }
    let budget = max.saturating_sub(3);
    let cut = s
        .char_indices()
        .map(|(i, _)| i)
        .take_while(|&i| i <= budget)
        .last()
        .unwrap_or(0);
    format!("{}...", &s[..cut])
}
