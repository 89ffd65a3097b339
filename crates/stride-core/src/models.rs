//! Domain models for Stride
//!
//! One explicit record shape per kind, each with its own identifier space.
//! Enums cover every fixed vocabulary (priority, expense category, mood,
//! application status) so invalid values are rejected at the edge.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Task priority levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl std::str::FromStr for Priority {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "low" => Ok(Self::Low),
            "medium" | "med" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            _ => Err(Error::Validation(format!(
                "Unknown priority: {} (use low, medium, high)",
                s
            ))),
        }
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A todo item
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    pub id: i64,
    pub description: String,
    pub priority: Priority,
    /// Optional due date
    pub due_date: Option<NaiveDate>,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
    /// Set when the task is completed, cleared never (completion is one-way)
    pub completed_at: Option<DateTime<Utc>>,
}

/// A new task before insertion
#[derive(Debug, Clone)]
pub struct NewTask {
    pub description: String,
    pub priority: Priority,
    pub due_date: Option<NaiveDate>,
}

/// A tracked habit
///
/// `streak` and `last_logged` are maintained by the store on every log:
/// a log on the day immediately after `last_logged` increments the streak,
/// a later day resets it to 1, and the same day leaves it unchanged.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Habit {
    pub id: i64,
    pub name: String,
    pub streak: u32,
    pub last_logged: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
}

/// Categories for weekly goals
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum GoalCategory {
    Career,
    Health,
    Learning,
    Personal,
    #[default]
    General,
}

impl GoalCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Career => "career",
            Self::Health => "health",
            Self::Learning => "learning",
            Self::Personal => "personal",
            Self::General => "general",
        }
    }
}

impl std::str::FromStr for GoalCategory {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "career" => Ok(Self::Career),
            "health" => Ok(Self::Health),
            "learning" => Ok(Self::Learning),
            "personal" => Ok(Self::Personal),
            "general" => Ok(Self::General),
            _ => Err(Error::Validation(format!(
                "Unknown goal category: {} (use career, health, learning, personal, general)",
                s
            ))),
        }
    }
}

impl std::fmt::Display for GoalCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A goal scoped to one calendar week
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeeklyGoal {
    pub id: i64,
    pub category: GoalCategory,
    pub description: String,
    /// Target value (e.g., 5 applications, 3 workouts)
    pub target: f64,
    /// Current progress towards the target
    pub progress: f64,
    /// Monday of the week this goal belongs to
    pub week_start: NaiveDate,
    pub created_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
}

impl WeeklyGoal {
    /// Completion ratio in [0, 1]
    pub fn completion(&self) -> f64 {
        if self.target <= 0.0 {
            return 0.0;
        }
        (self.progress / self.target).min(1.0)
    }
}

/// Expense categories (fixed vocabulary)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExpenseCategory {
    Food,
    Transport,
    Rent,
    Utilities,
    Entertainment,
    Shopping,
    Health,
    Education,
    Subscriptions,
    Other,
}

impl ExpenseCategory {
    pub const ALL: [ExpenseCategory; 10] = [
        Self::Food,
        Self::Transport,
        Self::Rent,
        Self::Utilities,
        Self::Entertainment,
        Self::Shopping,
        Self::Health,
        Self::Education,
        Self::Subscriptions,
        Self::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Food => "food",
            Self::Transport => "transport",
            Self::Rent => "rent",
            Self::Utilities => "utilities",
            Self::Entertainment => "entertainment",
            Self::Shopping => "shopping",
            Self::Health => "health",
            Self::Education => "education",
            Self::Subscriptions => "subscriptions",
            Self::Other => "other",
        }
    }
}

impl std::str::FromStr for ExpenseCategory {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "food" => Ok(Self::Food),
            "transport" => Ok(Self::Transport),
            "rent" => Ok(Self::Rent),
            "utilities" => Ok(Self::Utilities),
            "entertainment" => Ok(Self::Entertainment),
            "shopping" => Ok(Self::Shopping),
            "health" => Ok(Self::Health),
            "education" => Ok(Self::Education),
            "subscriptions" => Ok(Self::Subscriptions),
            "other" => Ok(Self::Other),
            _ => Err(Error::Validation(format!(
                "Unknown expense category: {} (use one of: {})",
                s,
                Self::ALL
                    .iter()
                    .map(|c| c.as_str())
                    .collect::<Vec<_>>()
                    .join(", ")
            ))),
        }
    }
}

impl std::fmt::Display for ExpenseCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A logged expense
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Expense {
    pub id: i64,
    /// Always positive; zero/negative amounts are rejected at creation
    pub amount: f64,
    pub category: ExpenseCategory,
    pub description: Option<String>,
    pub date: NaiveDate,
    pub created_at: DateTime<Utc>,
}

/// A logged income entry
///
/// Source is free-form ("salary", "freelance", ...) unlike expense
/// categories, which are a fixed vocabulary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Income {
    pub id: i64,
    /// Always positive; zero/negative amounts are rejected at creation
    pub amount: f64,
    pub source: String,
    pub description: Option<String>,
    pub date: NaiveDate,
    pub created_at: DateTime<Utc>,
}

/// A monthly spending limit for one expense category
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BudgetLimit {
    pub category: ExpenseCategory,
    pub monthly_limit: f64,
}

/// A savings goal with a clamped running total
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavingsGoal {
    pub id: i64,
    pub name: String,
    pub target: f64,
    /// Never exceeds `target`; excess contributions are clamped
    pub saved: f64,
    pub deadline: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
}

impl SavingsGoal {
    /// Progress percentage in [0, 100]
    pub fn progress_pct(&self) -> f64 {
        if self.target <= 0.0 {
            return 0.0;
        }
        (self.saved / self.target * 100.0).min(100.0)
    }

    pub fn reached(&self) -> bool {
        self.saved >= self.target
    }
}

/// Result of contributing to a savings goal
///
/// `applied` is what actually landed in the goal; `excess` is the part
/// of the contribution that was clamped off at the target.
#[derive(Debug, Clone, Serialize)]
pub struct Contribution {
    pub goal: SavingsGoal,
    pub applied: f64,
    pub excess: f64,
}

/// Mood vocabulary (fixed)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Great,
    Good,
    Okay,
    Low,
    Stressed,
    Anxious,
    Sad,
    Angry,
    Tired,
}

impl Mood {
    pub const ALL: [Mood; 9] = [
        Self::Great,
        Self::Good,
        Self::Okay,
        Self::Low,
        Self::Stressed,
        Self::Anxious,
        Self::Sad,
        Self::Angry,
        Self::Tired,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Great => "great",
            Self::Good => "good",
            Self::Okay => "okay",
            Self::Low => "low",
            Self::Stressed => "stressed",
            Self::Anxious => "anxious",
            Self::Sad => "sad",
            Self::Angry => "angry",
            Self::Tired => "tired",
        }
    }

    /// Whether this mood counts towards the "positive" side of a trend
    pub fn is_positive(&self) -> bool {
        matches!(self, Self::Great | Self::Good)
    }

    /// Whether this mood counts towards the "negative" side of a trend
    pub fn is_negative(&self) -> bool {
        matches!(self, Self::Stressed | Self::Anxious | Self::Sad | Self::Angry)
    }
}

impl std::str::FromStr for Mood {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "great" => Ok(Self::Great),
            "good" => Ok(Self::Good),
            "okay" | "ok" => Ok(Self::Okay),
            "low" => Ok(Self::Low),
            "stressed" => Ok(Self::Stressed),
            "anxious" => Ok(Self::Anxious),
            "sad" => Ok(Self::Sad),
            "angry" => Ok(Self::Angry),
            "tired" => Ok(Self::Tired),
            _ => Err(Error::Validation(format!(
                "Unknown mood: {} (use one of: {})",
                s,
                Self::ALL
                    .iter()
                    .map(|m| m.as_str())
                    .collect::<Vec<_>>()
                    .join(", ")
            ))),
        }
    }
}

impl std::fmt::Display for Mood {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One mood log entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoodEntry {
    pub id: i64,
    pub mood: Mood,
    pub note: Option<String>,
    pub date: NaiveDate,
    pub logged_at: DateTime<Utc>,
}

/// One journal entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JournalEntry {
    pub id: i64,
    /// The writing prompt used, if any
    pub prompt: Option<String>,
    pub content: String,
    pub word_count: u32,
    pub date: NaiveDate,
    pub written_at: DateTime<Utc>,
}

/// Job application pipeline stages
///
/// Applications progress `applied -> interviewing -> {offered, rejected}`,
/// with a straight `applied -> rejected` also allowed. `Offered` and
/// `Rejected` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ApplicationStatus {
    #[default]
    Applied,
    Interviewing,
    Offered,
    Rejected,
}

impl ApplicationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Applied => "applied",
            Self::Interviewing => "interviewing",
            Self::Offered => "offered",
            Self::Rejected => "rejected",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Offered | Self::Rejected)
    }

    /// Whether the pipeline allows moving from `self` to `next`
    pub fn can_transition_to(&self, next: ApplicationStatus) -> bool {
        matches!(
            (self, next),
            (Self::Applied, Self::Interviewing)
                | (Self::Applied, Self::Rejected)
                | (Self::Interviewing, Self::Offered)
                | (Self::Interviewing, Self::Rejected)
        )
    }
}

impl std::str::FromStr for ApplicationStatus {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "applied" => Ok(Self::Applied),
            "interviewing" | "interview" => Ok(Self::Interviewing),
            "offered" | "offer" => Ok(Self::Offered),
            "rejected" => Ok(Self::Rejected),
            _ => Err(Error::Validation(format!(
                "Unknown application status: {} (use applied, interviewing, offered, rejected)",
                s
            ))),
        }
    }
}

impl std::fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A tracked job application
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobApplication {
    pub id: i64,
    pub company: String,
    pub role: String,
    pub status: ApplicationStatus,
    pub applied_date: NaiveDate,
    pub notes: Option<String>,
    pub updated_at: DateTime<Utc>,
}

/// A new application before insertion
#[derive(Debug, Clone)]
pub struct NewApplication {
    pub company: String,
    pub role: String,
    pub notes: Option<String>,
}

// =============================================================================
// Report structures (derived, never stored)
// =============================================================================

/// The date window a report covers
#[derive(Debug, Clone, Serialize)]
pub struct ReportPeriod {
    pub from: NaiveDate,
    pub to: NaiveDate,
}

/// Budget standing for one category in one month
#[derive(Debug, Clone, Serialize)]
pub struct BudgetLineStatus {
    pub category: ExpenseCategory,
    pub limit: f64,
    pub spent: f64,
    /// limit - spent; negative means overspent and is reported as-is
    pub remaining: f64,
    pub overspend: bool,
}

/// Budget standing for every category with a limit set
#[derive(Debug, Clone, Serialize)]
pub struct BudgetStatus {
    /// First day of the month the status covers
    pub month: NaiveDate,
    pub lines: Vec<BudgetLineStatus>,
}

/// Per-category expense total within a period
#[derive(Debug, Clone, Serialize)]
pub struct CategoryTotal {
    pub category: ExpenseCategory,
    pub amount: f64,
    pub percentage: f64,
}

/// Per-source income total within a period
#[derive(Debug, Clone, Serialize)]
pub struct SourceTotal {
    pub source: String,
    pub amount: f64,
}

/// Income/expense/savings overview for a period
#[derive(Debug, Clone, Serialize)]
pub struct FinancialSummary {
    pub period: ReportPeriod,
    pub total_income: f64,
    pub total_expense: f64,
    /// Positive = surplus, negative = deficit
    pub net: f64,
    /// (income - expense) / income, 0 when income is 0
    pub savings_rate: f64,
    pub expenses_by_category: Vec<CategoryTotal>,
    pub income_by_source: Vec<SourceTotal>,
    pub total_saved: f64,
    pub total_savings_target: f64,
}

/// One habit's standing inside a progress report
#[derive(Debug, Clone, Serialize)]
pub struct HabitProgress {
    pub name: String,
    pub streak: u32,
    /// Days logged within the report window
    pub days_logged: u32,
}

/// One weekly goal's standing inside a progress report
#[derive(Debug, Clone, Serialize)]
pub struct GoalProgress {
    pub id: i64,
    pub category: GoalCategory,
    pub description: String,
    /// progress / target, clamped to [0, 1]
    pub completion: f64,
    pub completed: bool,
}

/// Composite weekly progress report
#[derive(Debug, Clone, Serialize)]
pub struct ProgressReport {
    pub period: ReportPeriod,
    pub tasks_created: u32,
    pub tasks_completed: u32,
    /// completed / created within the window, 0 when none were created
    pub task_completion_rate: f64,
    pub habits: Vec<HabitProgress>,
    pub goals: Vec<GoalProgress>,
    pub goals_completed: u32,
    pub finance: FinancialSummary,
}

/// Mood counts and trend over a window of days
#[derive(Debug, Clone, Serialize)]
pub struct MoodHistory {
    pub period: ReportPeriod,
    pub entries: Vec<MoodEntry>,
    /// Mood -> occurrence count, most frequent first
    pub counts: Vec<(Mood, u32)>,
    pub positive: u32,
    pub negative: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn priority_round_trip() {
        for p in ["low", "medium", "high"] {
            let parsed: Priority = p.parse().unwrap();
            assert_eq!(parsed.as_str(), p);
        }
        assert!("urgent".parse::<Priority>().is_err());
    }

    #[test]
    fn expense_category_rejects_unknown() {
        assert!("gambling".parse::<ExpenseCategory>().is_err());
        assert_eq!(
            "food".parse::<ExpenseCategory>().unwrap(),
            ExpenseCategory::Food
        );
    }

    #[test]
    fn vocabulary_parse_failures_are_validation_errors() {
        assert!(matches!(
            "urgent".parse::<Priority>(),
            Err(Error::Validation(_))
        ));
        assert!(matches!(
            "hobby".parse::<GoalCategory>(),
            Err(Error::Validation(_))
        ));
        assert!(matches!(
            "ecstatic".parse::<Mood>(),
            Err(Error::Validation(_))
        ));
        assert!(matches!(
            "ghosted".parse::<ApplicationStatus>(),
            Err(Error::Validation(_))
        ));
    }

    #[test]
    fn application_status_transitions() {
        use ApplicationStatus::*;

        assert!(Applied.can_transition_to(Interviewing));
        assert!(Applied.can_transition_to(Rejected));
        assert!(Interviewing.can_transition_to(Offered));
        assert!(Interviewing.can_transition_to(Rejected));

        // Terminal states have no outgoing edges
        assert!(!Offered.can_transition_to(Interviewing));
        assert!(!Offered.can_transition_to(Rejected));
        assert!(!Rejected.can_transition_to(Applied));

        // No skipping straight to an offer
        assert!(!Applied.can_transition_to(Offered));
    }

    #[test]
    fn savings_goal_progress_clamps_at_100() {
        let goal = SavingsGoal {
            id: 1,
            name: "Emergency Fund".into(),
            target: 100.0,
            saved: 100.0,
            deadline: None,
            created_at: Utc::now(),
        };
        assert_eq!(goal.progress_pct(), 100.0);
        assert!(goal.reached());
    }

    #[test]
    fn goal_completion_handles_zero_target() {
        let goal = WeeklyGoal {
            id: 1,
            category: GoalCategory::Career,
            description: "Apply to roles".into(),
            target: 0.0,
            progress: 3.0,
            week_start: NaiveDate::from_ymd_opt(2025, 1, 6).unwrap(),
            created_at: Utc::now(),
            completed_at: None,
        };
        assert_eq!(goal.completion(), 0.0);
    }
}
