//! Expense, income, budget, and savings command implementations

use anyhow::Result;
use chrono::{DateTime, NaiveDate, Utc};
use stride_core::models::ExpenseCategory;
use stride_core::{Period, Store};

use super::{resolve_date, truncate};

pub fn cmd_expense_add(
    store: &Store,
    amount: f64,
    category: &str,
    description: Option<&str>,
    date: Option<&str>,
    today: NaiveDate,
    now: DateTime<Utc>,
) -> Result<()> {
    let category: ExpenseCategory = category.parse()?;
    let date = resolve_date(date, today)?;

    let expense = store.add_expense(amount, category, description, date, now)?;
    println!(
        "💸 Logged {:.2} on {} ({})",
        expense.amount, expense.category, expense.date
    );
    Ok(())
}

pub fn cmd_expense_list(
    store: &Store,
    period: &str,
    category: Option<&str>,
    today: NaiveDate,
) -> Result<()> {
    let period: Period = period.parse()?;
    let (from, to) = period.resolve(today);
    let category = category.map(str::parse::<ExpenseCategory>).transpose()?;

    let expenses = store.list_expenses(Some(from), Some(to), category)?;
    if expenses.is_empty() {
        println!("No expenses in this period.");
        return Ok(());
    }

    println!();
    println!("💸 Expenses ({} to {})", from, to);
    let mut total = 0.0;
    for e in &expenses {
        total += e.amount;
        println!(
            "   #{:<4} {}  {:>10.2}  {:12} {}",
            e.id,
            e.date,
            e.amount,
            e.category.to_string(),
            truncate(e.description.as_deref().unwrap_or(""), 30)
        );
    }
    println!("   Total: {:.2}", total);
    Ok(())
}

pub fn cmd_expense_delete(store: &Store, id: i64) -> Result<()> {
    store.delete_expense(id)?;
    println!("🗑  Deleted expense #{}", id);
    Ok(())
}

pub fn cmd_income_add(
    store: &Store,
    amount: f64,
    source: &str,
    description: Option<&str>,
    date: Option<&str>,
    today: NaiveDate,
    now: DateTime<Utc>,
) -> Result<()> {
    let date = resolve_date(date, today)?;

    let income = store.add_income(amount, source, description, date, now)?;
    println!(
        "💰 Logged {:.2} from {} ({})",
        income.amount, income.source, income.date
    );
    Ok(())
}

pub fn cmd_income_list(store: &Store, period: &str, today: NaiveDate) -> Result<()> {
    let period: Period = period.parse()?;
    let (from, to) = period.resolve(today);

    let entries = store.list_income(Some(from), Some(to))?;
    if entries.is_empty() {
        println!("No income in this period.");
        return Ok(());
    }

    println!();
    println!("💰 Income ({} to {})", from, to);
    let mut total = 0.0;
    for i in &entries {
        total += i.amount;
        println!(
            "   #{:<4} {}  {:>10.2}  {}",
            i.id,
            i.date,
            i.amount,
            truncate(&i.source, 20)
        );
    }
    println!("   Total: {:.2}", total);
    Ok(())
}

pub fn cmd_budget_set(store: &Store, category: &str, limit: f64) -> Result<()> {
    let category: ExpenseCategory = category.parse()?;
    let budget = store.set_budget_limit(category, limit)?;
    println!(
        "✅ Monthly limit for {}: {:.2}",
        budget.category, budget.monthly_limit
    );
    Ok(())
}

pub fn cmd_budget_clear(store: &Store, category: &str) -> Result<()> {
    let category: ExpenseCategory = category.parse()?;
    store.clear_budget_limit(category)?;
    println!("🗑  Cleared limit for {}", category);
    Ok(())
}

pub fn cmd_budget_status(store: &Store, today: NaiveDate, json: bool) -> Result<()> {
    let status = store.budget_status(today)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&status)?);
        return Ok(());
    }

    if status.lines.is_empty() {
        println!("No budget limits set. Set one: stride budget set food 500");
        return Ok(());
    }

    println!();
    println!("📊 Budget — month of {}", status.month);
    println!(
        "   {:12} │ {:>10} │ {:>10} │ {:>10}",
        "Category", "Limit", "Spent", "Remaining"
    );
    println!("   ─────────────┼────────────┼────────────┼────────────");
    for line in &status.lines {
        let flag = if line.overspend { " ⚠️" } else { "" };
        println!(
            "   {:12} │ {:>10.2} │ {:>10.2} │ {:>10.2}{}",
            line.category.to_string(),
            line.limit,
            line.spent,
            line.remaining,
            flag
        );
    }

    let overspent = status.lines.iter().filter(|l| l.overspend).count();
    if overspent > 0 {
        println!();
        println!("⚠️  {} categories over budget.", overspent);
    }
    Ok(())
}

pub fn cmd_savings_new(
    store: &Store,
    name: &str,
    target: f64,
    deadline: Option<&str>,
    now: DateTime<Utc>,
) -> Result<()> {
    let deadline = deadline
        .map(|s| resolve_date(Some(s), now.date_naive()))
        .transpose()?;

    let goal = store.create_savings_goal(name, target, deadline, now)?;
    println!("✅ Savings goal #{}: {} ({:.2})", goal.id, goal.name, goal.target);
    Ok(())
}

pub fn cmd_savings_add(store: &Store, id: i64, amount: f64) -> Result<()> {
    let c = store.contribute_to_savings(id, amount)?;

    println!(
        "💰 {} — {:.2} of {:.2} ({:.0}%)",
        c.goal.name,
        c.goal.saved,
        c.goal.target,
        c.goal.progress_pct()
    );
    if c.excess > 0.0 {
        println!(
            "   Target reached; {:.2} of this contribution was not needed.",
            c.excess
        );
    }
    if c.goal.reached() {
        println!("🎉 Goal reached!");
    }
    Ok(())
}

pub fn cmd_savings_list(store: &Store) -> Result<()> {
    let goals = store.list_savings_goals()?;

    if goals.is_empty() {
        println!("No savings goals. Create one: stride savings new \"Emergency fund\" 1000");
        return Ok(());
    }

    println!();
    println!("🏦 Savings goals");
    for g in &goals {
        let deadline = g
            .deadline
            .map(|d| format!("  by {}", d))
            .unwrap_or_default();
        let done = if g.reached() { " ✔" } else { "" };
        println!(
            "   #{:<4} {:24} {:>10.2} / {:>10.2}  ({:.0}%){}{}",
            g.id,
            truncate(&g.name, 24),
            g.saved,
            g.target,
            g.progress_pct(),
            deadline,
            done
        );
    }
    Ok(())
}

pub fn cmd_savings_delete(store: &Store, id: i64) -> Result<()> {
    store.delete_savings_goal(id)?;
    println!("🗑  Deleted savings goal #{}", id);
    Ok(())
}
