//! Date Difference

use chrono::NaiveDate;

use crate::error::Result;
use crate::events::parse_date;

/// Signed whole-day distance between two dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateSpan {
    pub days: i64,
}

impl DateSpan {
    pub fn between(from: NaiveDate, to: NaiveDate) -> Self {
        Self {
            days: (to - from).num_days(),
        }
    }

    /// Absolute (weeks, days) split for display.
    pub fn weeks_and_days(&self) -> (i64, i64) {
        let abs = self.days.abs();
        (abs / 7, abs % 7)
    }

    pub fn describe(&self) -> String {
        let (weeks, days) = self.weeks_and_days();
        let direction = if self.days < 0 { " (in the past)" } else { "" };
        match weeks {
            0 => format!("{} day(s){}", self.days.abs(), direction),
            _ => format!(
                "{} day(s) = {} week(s) {} day(s){}",
                self.days.abs(),
                weeks,
                days,
                direction
            ),
        }
    }
}

/// Parse both ISO dates and measure `to - from`.
pub fn days_between(from: &str, to: &str) -> Result<DateSpan> {
    Ok(DateSpan::between(parse_date(from)?, parse_date(to)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leap_year_span() {
        let span = days_between("2024-02-01", "2024-03-01").unwrap();
        assert_eq!(span.days, 29);
        assert_eq!(span.weeks_and_days(), (4, 1));
    }

    #[test]
    fn test_negative_span() {
        let span = days_between("2024-01-10", "2024-01-07").unwrap();
        assert_eq!(span.days, -3);
        assert_eq!(span.describe(), "3 day(s) (in the past)");
    }

    #[test]
    fn test_invalid_date() {
        assert!(days_between("yesterday", "2024-01-01").is_err());
    }
}
