//! Core command implementations and shared utilities
//!
//! This module contains:
//! - `open_store` - Shared utility to open the record store
//! - `cmd_init` - Initialize the database
//! - `cmd_status` - Record counts and today's snapshot
//! - `cmd_reset` - Delete every record

use std::path::Path;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use stride_core::Store;
use tracing::debug;

/// Open the record store at the given path
pub fn open_store(db_path: &Path) -> Result<Store> {
    debug!("Opening store at {}", db_path.display());
    Store::open(&db_path.to_string_lossy()).context("Failed to open database")
}

pub fn cmd_init(db_path: &Path) -> Result<()> {
    println!("🔧 Initializing database at {}...", db_path.display());

    open_store(db_path)?;

    println!("✅ Database initialized successfully!");
    println!();
    println!("Next steps:");
    println!("  1. Add a todo: stride task add \"Refresh resume\"");
    println!("  2. Log a habit: stride habit track meditate");
    println!("  3. Track an application: stride app add \"Acme\" \"Backend Developer\"");

    Ok(())
}

pub fn cmd_status(store: &Store, today: NaiveDate) -> Result<()> {
    let (pending, completed) = store.task_counts()?;
    let habits = store.list_habits()?;
    let applications = store.list_applications(None)?;
    let savings = store.list_savings_goals()?;

    println!();
    println!("📋 Stride Status — {}", today);
    println!("   ─────────────────────────────");
    println!("   Todos: {} pending, {} completed", pending, completed);
    println!("   Habits tracked: {}", habits.len());
    println!("   Applications: {}", applications.len());
    if !savings.is_empty() {
        let saved: f64 = savings.iter().map(|g| g.saved).sum();
        let target: f64 = savings.iter().map(|g| g.target).sum();
        println!("   Savings: {:.2} of {:.2}", saved, target);
    }
    println!();
    println!("   Run 'stride report progress' for this week's details.");

    Ok(())
}

pub fn cmd_reset(db_path: &Path, yes: bool) -> Result<()> {
    if !yes {
        println!("⚠️  This deletes every record in {}.", db_path.display());
        println!("   Re-run with --yes to confirm.");
        return Ok(());
    }

    let store = open_store(db_path)?;
    store.clear_all()?;
    println!("✅ All records deleted.");

    Ok(())
}
