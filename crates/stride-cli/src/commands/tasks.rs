//! Todo command implementations

use anyhow::Result;
use chrono::{DateTime, Utc};
use stride_core::models::{NewTask, Priority, Task};
use stride_core::Store;

use super::{resolve_date, truncate};

fn priority_icon(p: Priority) -> &'static str {
    match p {
        Priority::High => "🔴",
        Priority::Medium => "🟡",
        Priority::Low => "🟢",
    }
}

fn print_task(task: &Task) {
    let check = if task.completed { "✔" } else { " " };
    let due = task
        .due_date
        .map(|d| format!("  due {}", d))
        .unwrap_or_default();
    println!(
        "   [{}] #{:<4} {} {}{}",
        check,
        task.id,
        priority_icon(task.priority),
        truncate(&task.description, 50),
        due
    );
}

pub fn cmd_task_add(
    store: &Store,
    description: &str,
    priority: &str,
    due: Option<&str>,
    now: DateTime<Utc>,
) -> Result<()> {
    let priority: Priority = priority.parse()?;
    let due_date = due
        .map(|s| resolve_date(Some(s), now.date_naive()))
        .transpose()?;

    let task = store.add_task(
        &NewTask {
            description: description.to_string(),
            priority,
            due_date,
        },
        now,
    )?;

    println!("✅ Added todo #{}", task.id);
    print_task(&task);
    Ok(())
}

pub fn cmd_task_list(store: &Store, all: bool) -> Result<()> {
    let tasks = store.list_tasks(all)?;

    if tasks.is_empty() {
        println!("No todos. Add one: stride task add \"...\"");
        return Ok(());
    }

    println!();
    println!("📋 Todos");
    for task in &tasks {
        print_task(task);
    }

    let (pending, completed) = store.task_counts()?;
    println!();
    println!("   {} pending, {} completed", pending, completed);
    Ok(())
}

pub fn cmd_task_done(store: &Store, id: i64, now: DateTime<Utc>) -> Result<()> {
    let task = store.complete_task(id, now)?;
    println!("✅ Done: {}", task.description);
    Ok(())
}

pub fn cmd_task_delete(store: &Store, id: i64) -> Result<()> {
    store.delete_task(id)?;
    println!("🗑  Deleted todo #{}", id);
    Ok(())
}
