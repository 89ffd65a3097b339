//! Skill analysis, job search, and advice command implementations

use anyhow::Result;
use stride_core::advice::{self, BreathingNeed};
use stride_core::{jobsearch, skills};

pub fn cmd_skills_analyze(skill_list: &str, role: &str, json: bool) -> Result<()> {
    let skills: Vec<String> = skill_list
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect();

    let report = skills::analyze_skill_gap(&skills, role)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!();
    println!("🧭 Skill gap — {}", report.role);
    println!("   Readiness: {:.0}%", report.readiness);
    println!("   {}", report.verdict());
    println!();

    let mut last_tier = None;
    for check in &report.checks {
        if last_tier != Some(check.tier) {
            println!("   {}:", check.tier.label());
            last_tier = Some(check.tier);
        }
        let icon = if check.have { "✔" } else { "✗" };
        println!("     [{}] {}", icon, check.skill);
    }

    if !report.missing.is_empty() {
        println!();
        println!("   Learn next:");
        for check in report.missing.iter().take(3) {
            println!("     • {}", check.skill);
        }
    }
    Ok(())
}

pub fn cmd_skills_roles() -> Result<()> {
    println!("Roles with dedicated requirement tables:");
    for role in skills::known_roles() {
        println!("  • {}", role);
    }
    println!("Any other role uses a generic software table.");
    Ok(())
}

pub fn cmd_jobs_search(title: &str, location: &str, json: bool) -> Result<()> {
    let links = jobsearch::search_urls(title, location)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&links)?);
        return Ok(());
    }

    println!();
    println!("🔎 Job searches for '{}' in {}", title.trim(), location.trim());
    for link in &links {
        println!("   {:12} {}", link.board, link.url);
    }
    Ok(())
}

pub fn cmd_advice_dsa(weeks: u32) -> Result<()> {
    let plan = advice::dsa_roadmap(weeks);

    println!();
    println!("📚 DSA roadmap ({} weeks)", plan.len());
    for week in &plan {
        println!(
            "   Week {}: {} (~{} problems)",
            week.week,
            week.topics.join(", "),
            week.problems
        );
    }
    println!();
    println!("   Focus on patterns, not memorized solutions.");
    Ok(())
}

pub fn cmd_advice_resume() -> Result<()> {
    println!();
    println!("📄 Resume tips");
    for (category, tips) in advice::resume_tips() {
        println!();
        println!("   {}:", category);
        for (i, tip) in tips.iter().enumerate() {
            println!("     {}. {}", i + 1, tip);
        }
    }
    Ok(())
}

pub fn cmd_advice_portfolio(tech: &str) -> Result<()> {
    println!();
    println!("🛠  Portfolio ideas for {}", tech.trim());
    for (i, idea) in advice::portfolio_ideas(tech).iter().enumerate() {
        println!("   {}. {}", i + 1, idea);
    }
    println!();
    println!("   Pick one, build it end-to-end, deploy it, write about it.");
    Ok(())
}

pub fn cmd_advice_breathe(need: &str) -> Result<()> {
    let need: BreathingNeed = need.parse()?;
    let exercise = advice::breathing_exercise(need);

    println!();
    println!("🫁 {}", exercise.name);
    for (i, step) in exercise.steps.iter().enumerate() {
        println!("   {}. {}", i + 1, step);
    }
    println!();
    println!("   {}", exercise.purpose);
    Ok(())
}

pub fn cmd_advice_motivate() -> Result<()> {
    println!();
    println!("💬 {}", advice::motivational_quote());
    println!("   {}", advice::affirmation());
    Ok(())
}
