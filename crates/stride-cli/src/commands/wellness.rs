//! Mood and journal command implementations

use anyhow::Result;
use chrono::{DateTime, Days, NaiveDate, Utc};
use stride_core::models::Mood;
use stride_core::{advice, Store};

use super::{resolve_date, truncate};

pub fn cmd_mood_log(
    store: &Store,
    mood: &str,
    note: Option<&str>,
    date: Option<&str>,
    today: NaiveDate,
    now: DateTime<Utc>,
) -> Result<()> {
    let mood: Mood = mood.parse()?;
    let date = resolve_date(date, today)?;

    let entry = store.log_mood(mood, note, date, now)?;
    println!("📝 Mood logged: {} ({})", entry.mood, entry.date);

    // Difficult moods come with something to try; good ones with a boost
    let tips = advice::stress_tips(mood);
    if !tips.is_empty() {
        println!();
        println!("   Things that might help:");
        for tip in tips.iter().take(3) {
            println!("   • {}", tip);
        }
    } else if mood.is_positive() {
        println!("   {}", advice::affirmation());
    }
    Ok(())
}

pub fn cmd_mood_history(store: &Store, days: u32, today: NaiveDate, json: bool) -> Result<()> {
    let from = today
        .checked_sub_days(Days::new(u64::from(days.saturating_sub(1))))
        .unwrap_or(today);
    let history = store.mood_history(from, today)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&history)?);
        return Ok(());
    }

    if history.entries.is_empty() {
        println!("No moods logged in the last {} days.", days);
        return Ok(());
    }

    println!();
    println!("📈 Mood history ({} to {})", from, today);
    for entry in &history.entries {
        let note = entry
            .note
            .as_deref()
            .map(|n| format!("  — {}", truncate(n, 40)))
            .unwrap_or_default();
        println!("   {}  {}{}", entry.date, entry.mood, note);
    }

    println!();
    for (mood, count) in &history.counts {
        println!("   {:10} ×{}", mood.to_string(), count);
    }
    println!(
        "   {} positive, {} negative of {} entries",
        history.positive,
        history.negative,
        history.entries.len()
    );
    Ok(())
}

pub fn cmd_journal_write(
    store: &Store,
    content: &str,
    prompt: Option<&str>,
    today: NaiveDate,
    now: DateTime<Utc>,
) -> Result<()> {
    let entry = store.write_journal(content, prompt, today, now)?;
    println!(
        "📓 Journal entry #{} saved ({} words)",
        entry.id, entry.word_count
    );
    Ok(())
}

pub fn cmd_journal_list(store: &Store, days: u32, today: NaiveDate) -> Result<()> {
    let from = today
        .checked_sub_days(Days::new(u64::from(days.saturating_sub(1))))
        .unwrap_or(today);
    let entries = store.list_journal(Some(from), Some(today))?;

    if entries.is_empty() {
        println!("No journal entries in the last {} days.", days);
        return Ok(());
    }

    println!();
    println!("📓 Journal ({} to {})", from, today);
    for entry in &entries {
        println!();
        println!("   #{} — {} ({} words)", entry.id, entry.date, entry.word_count);
        if let Some(prompt) = &entry.prompt {
            println!("   Prompt: {}", prompt);
        }
        println!("   {}", truncate(&entry.content, 200));
    }
    Ok(())
}

pub fn cmd_journal_prompt() -> Result<()> {
    println!("✍️  {}", advice::journal_prompt());
    Ok(())
}
