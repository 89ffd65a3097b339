//! Stride CLI - Personal tracker
//!
//! Usage:
//!   stride init                       Initialize database
//!   stride task add "Ship resume"     Add a todo
//!   stride habit track meditate       Log a habit for today
//!   stride report progress            Weekly progress report

mod cli;
mod commands;

#[cfg(test)]
mod tests;

use anyhow::Result;
use chrono::Utc;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::*;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    // Priority: RUST_LOG env var > --verbose flag > default (info)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).compact())
        .init();

    // Every store operation gets its reference time from here; nothing
    // deeper reads the clock.
    let now = Utc::now();
    let today = now.date_naive();

    match cli.command {
        Commands::Init => commands::cmd_init(&cli.db),
        Commands::Status => {
            let store = commands::open_store(&cli.db)?;
            commands::cmd_status(&store, today)
        }
        Commands::Task { action } => {
            let store = commands::open_store(&cli.db)?;
            match action {
                TaskAction::Add {
                    description,
                    priority,
                    due,
                } => commands::cmd_task_add(&store, &description, &priority, due.as_deref(), now),
                TaskAction::List { all } => commands::cmd_task_list(&store, all),
                TaskAction::Done { id } => commands::cmd_task_done(&store, id, now),
                TaskAction::Delete { id } => commands::cmd_task_delete(&store, id),
            }
        }
        Commands::Habit { action } => {
            let store = commands::open_store(&cli.db)?;
            match action {
                HabitAction::Track { name, date } => {
                    commands::cmd_habit_track(&store, &name, date.as_deref(), today, now)
                }
                HabitAction::List => commands::cmd_habit_list(&store, today),
                HabitAction::Streak { name } => commands::cmd_habit_streak(&store, &name, today),
            }
        }
        Commands::Goal { action } => {
            let store = commands::open_store(&cli.db)?;
            match action {
                GoalAction::Set {
                    description,
                    target,
                    category,
                } => commands::cmd_goal_set(&store, &description, target, &category, today, now),
                GoalAction::List { all } => commands::cmd_goal_list(&store, all, today),
                GoalAction::Progress { id, amount } => {
                    commands::cmd_goal_progress(&store, id, amount, now)
                }
                GoalAction::Done { id } => commands::cmd_goal_done(&store, id, now),
            }
        }
        Commands::Expense { action } => {
            let store = commands::open_store(&cli.db)?;
            match action {
                ExpenseAction::Add {
                    amount,
                    category,
                    description,
                    date,
                } => commands::cmd_expense_add(
                    &store,
                    amount,
                    &category,
                    description.as_deref(),
                    date.as_deref(),
                    today,
                    now,
                ),
                ExpenseAction::List { period, category } => {
                    commands::cmd_expense_list(&store, &period, category.as_deref(), today)
                }
                ExpenseAction::Delete { id } => commands::cmd_expense_delete(&store, id),
            }
        }
        Commands::Income { action } => {
            let store = commands::open_store(&cli.db)?;
            match action {
                IncomeAction::Add {
                    amount,
                    source,
                    description,
                    date,
                } => commands::cmd_income_add(
                    &store,
                    amount,
                    &source,
                    description.as_deref(),
                    date.as_deref(),
                    today,
                    now,
                ),
                IncomeAction::List { period } => {
                    commands::cmd_income_list(&store, &period, today)
                }
            }
        }
        Commands::Budget { action } => {
            let store = commands::open_store(&cli.db)?;
            match action {
                None => commands::cmd_budget_status(&store, today, cli.json),
                Some(BudgetAction::Set { category, limit }) => {
                    commands::cmd_budget_set(&store, &category, limit)
                }
                Some(BudgetAction::Clear { category }) => {
                    commands::cmd_budget_clear(&store, &category)
                }
            }
        }
        Commands::Savings { action } => {
            let store = commands::open_store(&cli.db)?;
            match action {
                SavingsAction::New {
                    name,
                    target,
                    deadline,
                } => commands::cmd_savings_new(&store, &name, target, deadline.as_deref(), now),
                SavingsAction::Add { id, amount } => {
                    commands::cmd_savings_add(&store, id, amount)
                }
                SavingsAction::List => commands::cmd_savings_list(&store),
                SavingsAction::Delete { id } => commands::cmd_savings_delete(&store, id),
            }
        }
        Commands::Mood { action } => {
            let store = commands::open_store(&cli.db)?;
            match action {
                MoodAction::Log { mood, note, date } => {
                    commands::cmd_mood_log(&store, &mood, note.as_deref(), date.as_deref(), today, now)
                }
                MoodAction::History { days } => {
                    commands::cmd_mood_history(&store, days, today, cli.json)
                }
            }
        }
        Commands::Journal { action } => match action {
            JournalAction::Write { content, prompt } => {
                let store = commands::open_store(&cli.db)?;
                commands::cmd_journal_write(&store, &content, prompt.as_deref(), today, now)
            }
            JournalAction::List { days } => {
                let store = commands::open_store(&cli.db)?;
                commands::cmd_journal_list(&store, days, today)
            }
            JournalAction::Prompt => commands::cmd_journal_prompt(),
        },
        Commands::App { action } => {
            let store = commands::open_store(&cli.db)?;
            match action {
                AppAction::Add {
                    company,
                    role,
                    notes,
                    date,
                } => commands::cmd_app_add(&store, &company, &role, notes, date.as_deref(), today, now),
                AppAction::List { status } => {
                    commands::cmd_app_list(&store, status.as_deref())
                }
                AppAction::Advance { id, status, notes } => {
                    commands::cmd_app_advance(&store, id, &status, notes.as_deref(), now)
                }
                AppAction::Delete { id } => commands::cmd_app_delete(&store, id),
            }
        }
        Commands::Skills { action } => match action {
            SkillsAction::Analyze { skills, role } => {
                commands::cmd_skills_analyze(&skills, &role, cli.json)
            }
            SkillsAction::Roles => commands::cmd_skills_roles(),
        },
        Commands::Jobs { title, location } => {
            commands::cmd_jobs_search(&title, &location, cli.json)
        }
        Commands::Advice { action } => match action {
            AdviceAction::Dsa { weeks } => commands::cmd_advice_dsa(weeks),
            AdviceAction::Resume => commands::cmd_advice_resume(),
            AdviceAction::Portfolio { tech } => commands::cmd_advice_portfolio(&tech),
            AdviceAction::Breathe { need } => commands::cmd_advice_breathe(&need),
            AdviceAction::Motivate => commands::cmd_advice_motivate(),
        },
        Commands::Report { report_type } => {
            let store = commands::open_store(&cli.db)?;
            match report_type {
                ReportType::Progress => commands::cmd_report_progress(&store, today, cli.json),
                ReportType::Finance { period } => {
                    commands::cmd_report_finance(&store, &period, today, cli.json)
                }
                ReportType::Budget => commands::cmd_budget_status(&store, today, cli.json),
                ReportType::Mood { days } => {
                    commands::cmd_mood_history(&store, days, today, cli.json)
                }
            }
        }
        Commands::Reset { yes } => commands::cmd_reset(&cli.db, yes),
    }
}
