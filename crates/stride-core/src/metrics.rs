//! Pure derived-metric computations
//!
//! Every function here is deterministic over its inputs: the reference
//! date is always a parameter, never an ambient clock read.

use chrono::{Days, NaiveDate};

/// Length of the consecutive-day run ending at `today`
///
/// A habit logged every day through yesterday (but not yet today) still
/// counts as an active streak; any older gap breaks the run. Duplicate
/// or unsorted dates are tolerated.
pub fn current_streak(log_dates: &[NaiveDate], today: NaiveDate) -> u32 {
    let mut cursor = if log_dates.contains(&today) {
        today
    } else {
        match today.checked_sub_days(Days::new(1)) {
            Some(yesterday) if log_dates.contains(&yesterday) => yesterday,
            _ => return 0,
        }
    };

    let mut streak = 1;
    while let Some(prev) = cursor.checked_sub_days(Days::new(1)) {
        if !log_dates.contains(&prev) {
            break;
        }
        streak += 1;
        cursor = prev;
    }
    streak
}

/// (income - expense) / income as a fraction; 0 when income is 0
///
/// Negative when spending exceeds income.
pub fn savings_rate(total_income: f64, total_expense: f64) -> f64 {
    if total_income <= 0.0 {
        return 0.0;
    }
    (total_income - total_expense) / total_income
}

/// completed / total in [0, 1]; 0 when total is 0
pub fn completion_rate(completed: u32, total: u32) -> f64 {
    if total == 0 {
        return 0.0;
    }
    f64::from(completed) / f64::from(total)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, day).unwrap()
    }

    #[test]
    fn streak_counts_consecutive_days() {
        let logs = vec![d(1), d(2), d(3)];
        assert_eq!(current_streak(&logs, d(3)), 3);
    }

    #[test]
    fn streak_resets_after_gap() {
        let logs = vec![d(1), d(3)];
        assert_eq!(current_streak(&logs, d(3)), 1);
    }

    #[test]
    fn streak_survives_unlogged_today() {
        // Logged through yesterday: the run is still alive
        let logs = vec![d(1), d(2), d(3)];
        assert_eq!(current_streak(&logs, d(4)), 3);
    }

    #[test]
    fn streak_zero_when_stale() {
        let logs = vec![d(1), d(2)];
        assert_eq!(current_streak(&logs, d(10)), 0);
        assert_eq!(current_streak(&[], d(10)), 0);
    }

    #[test]
    fn streak_ignores_duplicates_and_order() {
        let logs = vec![d(3), d(1), d(2), d(2)];
        assert_eq!(current_streak(&logs, d(3)), 3);
    }

    #[test]
    fn savings_rate_zero_income_is_zero() {
        assert_eq!(savings_rate(0.0, 500.0), 0.0);
    }

    #[test]
    fn savings_rate_basic() {
        assert!((savings_rate(1000.0, 800.0) - 0.2).abs() < 1e-9);
        // Deficit months go negative rather than clamping
        assert!(savings_rate(1000.0, 1200.0) < 0.0);
    }

    #[test]
    fn completion_rate_handles_zero_total() {
        assert_eq!(completion_rate(0, 0), 0.0);
        assert_eq!(completion_rate(3, 4), 0.75);
    }
}
