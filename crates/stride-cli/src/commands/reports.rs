//! Report command implementations

use anyhow::Result;
use chrono::NaiveDate;
use stride_core::models::FinancialSummary;
use stride_core::{Period, Store};

use super::truncate;

fn print_financials(summary: &FinancialSummary) {
    println!("   Income:  {:>10.2}", summary.total_income);
    println!("   Expense: {:>10.2}", summary.total_expense);
    println!("   Net:     {:>10.2}", summary.net);
    if summary.total_income > 0.0 {
        println!("   Savings rate: {:.0}%", summary.savings_rate * 100.0);
    }

    if !summary.expenses_by_category.is_empty() {
        println!();
        println!(
            "   {:12} │ {:>10} │ {:>6}",
            "Category", "Amount", "%"
        );
        println!("   ─────────────┼────────────┼────────");
        for line in &summary.expenses_by_category {
            println!(
                "   {:12} │ {:>10.2} │ {:>5.1}%",
                line.category.to_string(),
                line.amount,
                line.percentage
            );
        }
    }

    if !summary.income_by_source.is_empty() {
        println!();
        println!("   Income by source:");
        for line in &summary.income_by_source {
            println!("     {:20} {:>10.2}", truncate(&line.source, 20), line.amount);
        }
    }

    if summary.total_savings_target > 0.0 {
        println!();
        println!(
            "   Savings goals: {:.2} of {:.2}",
            summary.total_saved, summary.total_savings_target
        );
    }
}

pub fn cmd_report_finance(store: &Store, period: &str, today: NaiveDate, json: bool) -> Result<()> {
    let period: Period = period.parse()?;
    let (from, to) = period.resolve(today);
    let summary = store.financial_summary(from, to)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    println!();
    println!("📊 Financial Summary");
    println!("   Period: {} to {}", summary.period.from, summary.period.to);
    println!("   ─────────────────────────────");
    print_financials(&summary);
    Ok(())
}

pub fn cmd_report_progress(store: &Store, today: NaiveDate, json: bool) -> Result<()> {
    let report = store.progress_report(today)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!();
    println!("📈 Weekly Progress");
    println!("   Week of {} (through {})", report.period.from, report.period.to);
    println!("   ─────────────────────────────");

    println!(
        "   Todos: {} created, {} completed ({:.0}%)",
        report.tasks_created,
        report.tasks_completed,
        report.task_completion_rate * 100.0
    );

    if !report.habits.is_empty() {
        println!();
        println!("   Habits:");
        for habit in &report.habits {
            println!(
                "     {:20} 🔥 {:>3}   {} days this week",
                truncate(&habit.name, 20),
                habit.streak,
                habit.days_logged
            );
        }
    }

    if !report.goals.is_empty() {
        println!();
        println!(
            "   Goals: {} of {} complete",
            report.goals_completed,
            report.goals.len()
        );
        for goal in &report.goals {
            let check = if goal.completed { "✔" } else { " " };
            println!(
                "     [{}] [{}] {} ({:.0}%)",
                check,
                goal.category,
                truncate(&goal.description, 40),
                goal.completion * 100.0
            );
        }
    }

    println!();
    println!("   Money this week:");
    print_financials(&report.finance);
    Ok(())
}
