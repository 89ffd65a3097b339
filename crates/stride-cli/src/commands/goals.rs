//! Weekly goal command implementations

use anyhow::Result;
use chrono::{DateTime, NaiveDate, Utc};
use stride_core::models::{GoalCategory, WeeklyGoal};
use stride_core::period::week_start;
use stride_core::Store;

use super::truncate;

fn print_goal(goal: &WeeklyGoal) {
    let check = if goal.completed_at.is_some() { "✔" } else { " " };
    println!(
        "   [{}] #{:<4} [{}] {}  ({:.0}/{:.0}, {:.0}%)",
        check,
        goal.id,
        goal.category,
        truncate(&goal.description, 40),
        goal.progress,
        goal.target,
        goal.completion() * 100.0
    );
}

pub fn cmd_goal_set(
    store: &Store,
    description: &str,
    target: f64,
    category: &str,
    today: NaiveDate,
    now: DateTime<Utc>,
) -> Result<()> {
    let category: GoalCategory = category.parse()?;
    let goal = store.set_weekly_goal(category, description, target, week_start(today), now)?;

    println!("✅ Goal set for the week of {}", goal.week_start);
    print_goal(&goal);
    Ok(())
}

pub fn cmd_goal_list(store: &Store, all: bool, today: NaiveDate) -> Result<()> {
    let week = week_start(today);
    let goals = if all {
        store.list_goals(None)?
    } else {
        store.list_goals(Some(week))?
    };

    if goals.is_empty() {
        println!("No goals this week. Set one: stride goal set \"...\"");
        return Ok(());
    }

    println!();
    if all {
        println!("🎯 All goals");
    } else {
        println!("🎯 Goals for the week of {}", week);
    }
    for goal in &goals {
        print_goal(goal);
    }
    Ok(())
}

pub fn cmd_goal_progress(store: &Store, id: i64, amount: f64, now: DateTime<Utc>) -> Result<()> {
    let goal = store.add_goal_progress(id, amount, now)?;

    print_goal(&goal);
    if goal.completed_at.is_some() {
        println!("🎉 Goal complete!");
    }
    Ok(())
}

pub fn cmd_goal_done(store: &Store, id: i64, now: DateTime<Utc>) -> Result<()> {
    let goal = store.complete_goal(id, now)?;
    println!("🎉 Completed: {}", goal.description);
    Ok(())
}
