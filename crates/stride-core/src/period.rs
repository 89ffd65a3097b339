//! Reporting period presets
//!
//! Presets resolve against a caller-supplied reference date so reports
//! stay deterministic and testable.

use chrono::{Datelike, Days, NaiveDate};
use serde::Serialize;

use crate::error::{Error, Result};

/// A named reporting window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Period {
    Today,
    /// Monday through the reference date
    Week,
    /// First of the month through the reference date
    #[default]
    Month,
    All,
}

impl Period {
    /// Resolve to an inclusive [from, to] window ending at `today`
    pub fn resolve(&self, today: NaiveDate) -> (NaiveDate, NaiveDate) {
        match self {
            Self::Today => (today, today),
            Self::Week => (week_start(today), today),
            Self::Month => (month_start(today), today),
            // Wide-open lower bound; nothing predates the tracker by much
            Self::All => (NaiveDate::from_ymd_opt(2000, 1, 1).unwrap_or_default(), today),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Today => "today",
            Self::Week => "week",
            Self::Month => "month",
            Self::All => "all",
        }
    }
}

impl std::str::FromStr for Period {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "today" => Ok(Self::Today),
            "week" | "this-week" => Ok(Self::Week),
            "month" | "this-month" => Ok(Self::Month),
            "all" | "" => Ok(Self::All),
            _ => Err(Error::Validation(format!(
                "Invalid period: {}. Use: today, week, month, all",
                s
            ))),
        }
    }
}

impl std::fmt::Display for Period {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Monday of the week containing `date`
pub fn week_start(date: NaiveDate) -> NaiveDate {
    let weekday = date.weekday().num_days_from_monday();
    date.checked_sub_days(Days::new(u64::from(weekday)))
        .unwrap_or(date)
}

/// First day of the month containing `date`
pub fn month_start(date: NaiveDate) -> NaiveDate {
    NaiveDate::from_ymd_opt(date.year(), date.month(), 1).unwrap_or(date)
}

/// Last day of the month containing `date`
pub fn month_end(date: NaiveDate) -> NaiveDate {
    let next_month = if date.month() == 12 {
        NaiveDate::from_ymd_opt(date.year() + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(date.year(), date.month() + 1, 1)
    };
    next_month
        .and_then(|d| d.pred_opt())
        .unwrap_or(date)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn week_starts_on_monday() {
        // 2025-03-05 is a Wednesday
        let wed = NaiveDate::from_ymd_opt(2025, 3, 5).unwrap();
        assert_eq!(week_start(wed), NaiveDate::from_ymd_opt(2025, 3, 3).unwrap());

        // A Monday is its own week start
        let mon = NaiveDate::from_ymd_opt(2025, 3, 3).unwrap();
        assert_eq!(week_start(mon), mon);
    }

    #[test]
    fn month_bounds() {
        let date = NaiveDate::from_ymd_opt(2025, 2, 14).unwrap();
        assert_eq!(month_start(date), NaiveDate::from_ymd_opt(2025, 2, 1).unwrap());
        assert_eq!(month_end(date), NaiveDate::from_ymd_opt(2025, 2, 28).unwrap());

        let december = NaiveDate::from_ymd_opt(2024, 12, 5).unwrap();
        assert_eq!(month_end(december), NaiveDate::from_ymd_opt(2024, 12, 31).unwrap());
    }

    #[test]
    fn period_resolution_is_deterministic() {
        let today = NaiveDate::from_ymd_opt(2025, 3, 5).unwrap();
        let (from, to) = Period::Week.resolve(today);
        assert_eq!(from, NaiveDate::from_ymd_opt(2025, 3, 3).unwrap());
        assert_eq!(to, today);

        assert!("quarter".parse::<Period>().is_err());
    }
}
