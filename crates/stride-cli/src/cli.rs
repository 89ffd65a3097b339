//! CLI argument definitions using clap
//!
//! This module contains all the clap structs and enums for parsing CLI
//! arguments. The actual command implementations are in the `commands`
//! module.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Stride - Track tasks, habits, money, mood, and job applications
#[derive(Parser)]
#[command(name = "stride")]
#[command(about = "Personal tracker for daily planning, finances, and the job hunt", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Database path
    #[arg(long, default_value = "stride.db", global = true)]
    pub db: PathBuf,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output structured results as JSON (reports, skill analysis, job search)
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database
    Init,

    /// Show record counts and today's snapshot
    Status,

    /// Manage todos
    Task {
        #[command(subcommand)]
        action: TaskAction,
    },

    /// Track daily habits
    Habit {
        #[command(subcommand)]
        action: HabitAction,
    },

    /// Manage weekly goals
    Goal {
        #[command(subcommand)]
        action: GoalAction,
    },

    /// Log and review expenses
    Expense {
        #[command(subcommand)]
        action: ExpenseAction,
    },

    /// Log and review income
    Income {
        #[command(subcommand)]
        action: IncomeAction,
    },

    /// Manage monthly budget limits
    Budget {
        #[command(subcommand)]
        action: Option<BudgetAction>,
    },

    /// Manage savings goals
    Savings {
        #[command(subcommand)]
        action: SavingsAction,
    },

    /// Log moods and review mood history
    Mood {
        #[command(subcommand)]
        action: MoodAction,
    },

    /// Write and browse journal entries
    Journal {
        #[command(subcommand)]
        action: JournalAction,
    },

    /// Track job applications through the pipeline
    App {
        #[command(subcommand)]
        action: AppAction,
    },

    /// Skill-gap analysis against a target role
    Skills {
        #[command(subcommand)]
        action: SkillsAction,
    },

    /// Generate job board search links
    Jobs {
        /// Job title to search for
        #[arg(short, long)]
        title: String,

        /// Location (defaults to India)
        #[arg(short, long, default_value = "India")]
        location: String,
    },

    /// Career and wellness guidance
    Advice {
        #[command(subcommand)]
        action: AdviceAction,
    },

    /// Derived reports
    Report {
        #[command(subcommand)]
        report_type: ReportType,
    },

    /// Delete every record (requires --yes)
    Reset {
        /// Skip confirmation
        #[arg(long)]
        yes: bool,
    },
}

#[derive(Subcommand)]
pub enum TaskAction {
    /// Add a todo
    Add {
        /// What needs doing
        description: String,

        /// Priority: low, medium, high
        #[arg(short, long, default_value = "medium")]
        priority: String,

        /// Due date (YYYY-MM-DD)
        #[arg(long)]
        due: Option<String>,
    },

    /// List todos
    List {
        /// Include completed todos
        #[arg(short, long)]
        all: bool,
    },

    /// Mark a todo complete
    Done { id: i64 },

    /// Delete a todo
    Delete { id: i64 },
}

#[derive(Subcommand)]
pub enum HabitAction {
    /// Log a habit for a day (creates the habit on first log)
    Track {
        /// Habit name
        name: String,

        /// Day to log (YYYY-MM-DD, defaults to today)
        #[arg(long)]
        date: Option<String>,
    },

    /// List habits with their streaks
    List,

    /// Show one habit's streak and log history
    Streak { name: String },
}

#[derive(Subcommand)]
pub enum GoalAction {
    /// Set a goal for the current week
    Set {
        /// Goal description
        description: String,

        /// Target count/amount
        #[arg(short, long, default_value = "1")]
        target: f64,

        /// Category: career, health, learning, personal, general
        #[arg(short, long, default_value = "general")]
        category: String,
    },

    /// List goals for the current week
    List {
        /// Show goals from every week
        #[arg(long)]
        all: bool,
    },

    /// Add progress toward a goal
    Progress {
        id: i64,

        /// Amount of progress to add
        #[arg(short, long, default_value = "1")]
        amount: f64,
    },

    /// Mark a goal complete
    Done { id: i64 },
}

#[derive(Subcommand)]
pub enum ExpenseAction {
    /// Log an expense
    Add {
        /// Amount spent
        amount: f64,

        /// Category (food, transport, rent, ...)
        #[arg(short, long, default_value = "other")]
        category: String,

        /// What it was for
        #[arg(short, long)]
        description: Option<String>,

        /// Date (YYYY-MM-DD, defaults to today)
        #[arg(long)]
        date: Option<String>,
    },

    /// List expenses
    List {
        /// Period: today, week, month, all
        #[arg(short, long, default_value = "month")]
        period: String,

        /// Filter by category
        #[arg(short, long)]
        category: Option<String>,
    },

    /// Delete an expense
    Delete { id: i64 },
}

#[derive(Subcommand)]
pub enum IncomeAction {
    /// Log income
    Add {
        /// Amount received
        amount: f64,

        /// Where it came from (salary, freelance, ...)
        #[arg(short, long, default_value = "other")]
        source: String,

        /// Details
        #[arg(short, long)]
        description: Option<String>,

        /// Date (YYYY-MM-DD, defaults to today)
        #[arg(long)]
        date: Option<String>,
    },

    /// List income entries
    List {
        /// Period: today, week, month, all
        #[arg(short, long, default_value = "month")]
        period: String,
    },
}

#[derive(Subcommand)]
pub enum BudgetAction {
    /// Set a monthly limit for a category
    Set {
        /// Category (food, transport, rent, ...)
        category: String,

        /// Monthly limit
        limit: f64,
    },

    /// Remove a category's limit
    Clear { category: String },
}

#[derive(Subcommand)]
pub enum SavingsAction {
    /// Create a savings goal
    New {
        /// Goal name
        name: String,

        /// Target amount
        target: f64,

        /// Deadline (YYYY-MM-DD)
        #[arg(long)]
        deadline: Option<String>,
    },

    /// Contribute toward a goal
    Add {
        id: i64,

        /// Amount to contribute
        amount: f64,
    },

    /// List savings goals
    List,

    /// Delete a savings goal
    Delete { id: i64 },
}

#[derive(Subcommand)]
pub enum MoodAction {
    /// Log how you're feeling
    Log {
        /// Mood: great, good, okay, low, stressed, anxious, sad, angry, tired
        mood: String,

        /// Optional note
        #[arg(short, long)]
        note: Option<String>,

        /// Date (YYYY-MM-DD, defaults to today)
        #[arg(long)]
        date: Option<String>,
    },

    /// Show recent mood history
    History {
        /// Days to look back
        #[arg(short, long, default_value = "7")]
        days: u32,
    },
}

#[derive(Subcommand)]
pub enum JournalAction {
    /// Write a journal entry
    Write {
        /// Entry text
        content: String,

        /// Prompt the entry answers
        #[arg(short, long)]
        prompt: Option<String>,
    },

    /// List recent journal entries
    List {
        /// Days to look back
        #[arg(short, long, default_value = "7")]
        days: u32,
    },

    /// Get a writing prompt
    Prompt,
}

#[derive(Subcommand)]
pub enum AppAction {
    /// Track a new application
    Add {
        /// Company name
        company: String,

        /// Role applied for
        role: String,

        /// Notes
        #[arg(short, long)]
        notes: Option<String>,

        /// Application date (YYYY-MM-DD, defaults to today)
        #[arg(long)]
        date: Option<String>,
    },

    /// List applications
    List {
        /// Filter by status: applied, interviewing, offered, rejected
        #[arg(short, long)]
        status: Option<String>,
    },

    /// Move an application to a new stage
    Advance {
        id: i64,

        /// New status: interviewing, offered, rejected
        status: String,

        /// Notes about the change
        #[arg(short, long)]
        notes: Option<String>,
    },

    /// Delete an application
    Delete { id: i64 },
}

#[derive(Subcommand)]
pub enum SkillsAction {
    /// Compare your skills against a role's requirements
    Analyze {
        /// Comma-separated skill list, e.g. "Python, SQL, Git"
        #[arg(short, long)]
        skills: String,

        /// Target role, e.g. "backend developer"
        #[arg(short, long, default_value = "full stack developer")]
        role: String,
    },

    /// List roles with dedicated requirement tables
    Roles,
}

#[derive(Subcommand)]
pub enum AdviceAction {
    /// Weekly DSA study roadmap
    Dsa {
        /// Weeks available (1-16)
        #[arg(short, long, default_value = "4")]
        weeks: u32,
    },

    /// Resume tips by category
    Resume,

    /// Portfolio project ideas for a tech stack
    Portfolio {
        /// Technology, e.g. python, javascript, java
        #[arg(short, long, default_value = "python")]
        tech: String,
    },

    /// Guided breathing exercise
    Breathe {
        /// What you need: calm, focus, ground
        #[arg(short, long, default_value = "calm")]
        need: String,
    },

    /// A motivational quote and affirmation
    Motivate,
}

#[derive(Subcommand)]
pub enum ReportType {
    /// Weekly progress across tasks, habits, goals, and money
    Progress,

    /// Income, expenses, and savings for a period
    Finance {
        /// Period: today, week, month, all
        #[arg(short, long, default_value = "month")]
        period: String,
    },

    /// Budget usage for the current month
    Budget,

    /// Mood history and balance
    Mood {
        /// Days to look back
        #[arg(short, long, default_value = "7")]
        days: u32,
    },
}
