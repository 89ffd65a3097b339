//! Habit tracking command implementations

use anyhow::Result;
use chrono::{DateTime, NaiveDate, Utc};
use stride_core::{metrics, Store};

use super::resolve_date;

pub fn cmd_habit_track(
    store: &Store,
    name: &str,
    date: Option<&str>,
    today: NaiveDate,
    now: DateTime<Utc>,
) -> Result<()> {
    let date = resolve_date(date, today)?;
    let habit = store.track_habit(name, date, now)?;

    println!("✅ Logged '{}' for {}", habit.name, date);
    if habit.streak > 1 {
        println!("   🔥 {} day streak", habit.streak);
    }
    Ok(())
}

pub fn cmd_habit_list(store: &Store, today: NaiveDate) -> Result<()> {
    let habits = store.list_habits()?;

    if habits.is_empty() {
        println!("No habits yet. Start one: stride habit track meditate");
        return Ok(());
    }

    println!();
    println!("🔁 Habits");
    for habit in &habits {
        // Streak recomputed from the log so a lapsed streak shows as 0
        let log_dates = store.habit_log_dates(habit.id)?;
        let streak = metrics::current_streak(&log_dates, today);
        let last = habit
            .last_logged
            .map(|d| d.to_string())
            .unwrap_or_else(|| "never".to_string());
        println!(
            "   {:20} 🔥 {:>3}   last logged {}",
            habit.name, streak, last
        );
    }
    Ok(())
}

pub fn cmd_habit_streak(store: &Store, name: &str, today: NaiveDate) -> Result<()> {
    let habit = store.get_habit_by_name(name)?;
    let log_dates = store.habit_log_dates(habit.id)?;
    let streak = metrics::current_streak(&log_dates, today);

    println!();
    println!("🔁 {}", habit.name);
    println!("   Current streak: {} days", streak);
    println!("   Total days logged: {}", log_dates.len());
    if let Some(last) = habit.last_logged {
        println!("   Last logged: {}", last);
    }
    Ok(())
}
