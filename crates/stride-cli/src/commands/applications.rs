//! Job application command implementations

use anyhow::Result;
use chrono::{DateTime, NaiveDate, Utc};
use stride_core::models::{ApplicationStatus, JobApplication, NewApplication};
use stride_core::Store;

use super::{resolve_date, truncate};

fn status_icon(status: ApplicationStatus) -> &'static str {
    match status {
        ApplicationStatus::Applied => "📨",
        ApplicationStatus::Interviewing => "🗣",
        ApplicationStatus::Offered => "🎉",
        ApplicationStatus::Rejected => "❌",
    }
}

fn print_application(app: &JobApplication) {
    let notes = app
        .notes
        .as_deref()
        .map(|n| format!("  — {}", truncate(n, 40)))
        .unwrap_or_default();
    println!(
        "   #{:<4} {} {:12} {:20} {}  applied {}{}",
        app.id,
        status_icon(app.status),
        app.status.to_string(),
        truncate(&app.company, 20),
        truncate(&app.role, 25),
        app.applied_date,
        notes
    );
}

pub fn cmd_app_add(
    store: &Store,
    company: &str,
    role: &str,
    notes: Option<String>,
    date: Option<&str>,
    today: NaiveDate,
    now: DateTime<Utc>,
) -> Result<()> {
    let applied_date = resolve_date(date, today)?;
    let app = store.add_application(
        &NewApplication {
            company: company.to_string(),
            role: role.to_string(),
            notes,
        },
        applied_date,
        now,
    )?;

    println!("✅ Tracking application #{}", app.id);
    print_application(&app);
    Ok(())
}

pub fn cmd_app_list(store: &Store, status: Option<&str>) -> Result<()> {
    let status = status.map(str::parse::<ApplicationStatus>).transpose()?;
    let apps = store.list_applications(status)?;

    if apps.is_empty() {
        println!("No applications tracked. Add one: stride app add \"Acme\" \"Engineer\"");
        return Ok(());
    }

    println!();
    println!("💼 Applications");
    for app in &apps {
        print_application(app);
    }

    let active = apps.iter().filter(|a| !a.status.is_terminal()).count();
    println!();
    println!("   {} of {} still in play", active, apps.len());
    Ok(())
}

pub fn cmd_app_advance(
    store: &Store,
    id: i64,
    status: &str,
    notes: Option<&str>,
    now: DateTime<Utc>,
) -> Result<()> {
    let next: ApplicationStatus = status.parse()?;
    let app = store.advance_application(id, next, notes, now)?;

    println!("✅ #{} {} → {}", app.id, app.company, app.status);
    if app.status == ApplicationStatus::Offered {
        println!("🎉 Congratulations!");
    }
    Ok(())
}

pub fn cmd_app_delete(store: &Store, id: i64) -> Result<()> {
    store.delete_application(id)?;
    println!("🗑  Deleted application #{}", id);
    Ok(())
}
