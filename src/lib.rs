//! Statutory deadline calculation.
//!
//! A start date typed by a user is turned into a deadline: 24 months under the
//! rule in force before the cutoff (1 January 2026), 18 months on or after it,
//! with the transition handled by pinning to the cutoff. Non-reckonable
//! periods push the deadline back by their inclusive length in days.
//!
//! ```
//! use reckon::{CalendarDate, DeadlineCalculator, DeadlineRequest, Locale};
//!
//! let calculator = DeadlineCalculator::new(Locale::English);
//! let today: CalendarDate = "15/03/2026".parse().unwrap();
//! let result = calculator
//!     .calculate(&DeadlineRequest::new("01/01/2026"), today)
//!     .unwrap();
//! assert_eq!(result.deadline.to_string(), "01/07/2027");
//! ```

mod calculator;
mod config;
mod consts;
mod diff;
mod locale;
mod period;
mod prelude;
mod rules;
mod types;

pub use calculator::{CalculationError, DeadlineCalculator, DeadlineRequest, DeadlineResult, ResultView};
pub use crate::config::{Config, ConfigError};
pub use consts::*;
pub use diff::DateDiff;
pub use locale::Locale;
pub use period::{Bound, ExclusionPeriod, ExclusionSummary, PeriodError, RawPeriod, aggregate};
pub use rules::{BaseDeadline, DeadlineRule, compute_base_deadline};
pub use types::{Day, Month, Year, days_in_month, is_leap_year};

use crate::prelude::*;
use chrono::{Datelike, Days, Local, Months, NaiveDate};
use std::str::FromStr;

/// A real Gregorian calendar date with no time-of-day component.
///
/// Only constructed through validating paths, so the year always lies within
/// `MIN_YEAR..=MAX_YEAR`. Ordering is by (year, month, day).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{:02}/{:02}/{:04}", "_0.day()", "_0.month()", "_0.year()")]
pub struct CalendarDate(NaiveDate);

/// The statutory cutoff, 1 January 2026.
pub const CUTOFF: CalendarDate = match NaiveDate::from_ymd_opt(
    CUTOFF_YEAR as i32,
    CUTOFF_MONTH as u32,
    CUTOFF_DAY as u32,
) {
    Some(date) => CalendarDate(date),
    None => panic!("cutoff constant is not a calendar date"),
};

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum DateError {
    #[display(fmt = "Empty date string")]
    EmptyInput,
    #[display(fmt = "Invalid date format: {_0}")]
    InvalidFormat(String),
    #[display(fmt = "Invalid year: {} (must be {}-{})", "_0", MIN_YEAR, MAX_YEAR)]
    InvalidYear(u16),
    #[display(fmt = "Invalid month: {} (must be 1-{})", "_0", MAX_MONTH)]
    InvalidMonth(u8),
    #[display(fmt = "Invalid day {day} for month {year}-{month:02}")]
    InvalidDay { year: u16, month: u8, day: u8 },
    #[display(fmt = "Date falls outside the supported years {}-{}", MIN_YEAR, MAX_YEAR)]
    OutOfRange,
}

impl std::error::Error for DateError {}

impl CalendarDate {
    /// Builds a date from numeric components, checking the day range (1-31)
    /// first, then the month and the year.
    ///
    /// # Errors
    /// Returns the `DateError` variant naming the first offending component,
    /// or `DateError::InvalidDay` if the day does not exist in that month.
    pub fn from_ymd(year: u16, month: u8, day: u8) -> Result<Self, DateError> {
        let day = Day::try_from(day).map_err(|_| DateError::InvalidDay { year, month, day })?;
        let month = Month::new(month)?;
        let year = Year::new(year)?;
        Self::from_parts(year, month, day)
    }

    /// Assembles a date from already validated components.
    ///
    /// # Errors
    /// Returns `DateError::InvalidDay` if the day is past the end of the month
    /// (31 April, 29 February outside a leap year).
    pub fn from_parts(year: Year, month: Month, day: Day) -> Result<Self, DateError> {
        NaiveDate::from_ymd_opt(
            i32::from(u16::from(year)),
            u32::from(u8::from(month)),
            u32::from(u8::from(day)),
        )
        .map(Self)
        .ok_or(DateError::InvalidDay {
            year:  year.get(),
            month: month.get(),
            day:   day.get(),
        })
    }

    /// Today's date in the local time zone.
    ///
    /// # Errors
    /// Returns `DateError::OutOfRange` if the system clock is outside the
    /// supported years.
    pub fn today() -> Result<Self, DateError> {
        Self::try_from(Local::now().date_naive())
    }

    /// Returns the year component
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn year(&self) -> u16 {
        // year is within MIN_YEAR..=MAX_YEAR by construction
        self.0.year() as u16
    }

    /// Returns the month component (1-12)
    #[allow(clippy::cast_possible_truncation)]
    pub fn month(&self) -> u8 {
        self.0.month() as u8
    }

    /// Returns the day-of-month component (1-31)
    #[allow(clippy::cast_possible_truncation)]
    pub fn day(&self) -> u8 {
        self.0.day() as u8
    }

    /// Adds calendar months, carrying into the year and clamping the day to
    /// the last day of the target month (31 Jan + 1 month = 28/29 Feb).
    ///
    /// # Errors
    /// Returns `DateError::OutOfRange` if the result is past `MAX_YEAR`.
    pub fn add_months(self, months: u32) -> Result<Self, DateError> {
        self.0
            .checked_add_months(Months::new(months))
            .ok_or(DateError::OutOfRange)
            .and_then(Self::try_from)
    }

    /// Adds whole days.
    ///
    /// # Errors
    /// Returns `DateError::OutOfRange` if the result is past `MAX_YEAR`.
    pub fn add_days(self, days: u64) -> Result<Self, DateError> {
        self.0
            .checked_add_days(Days::new(days))
            .ok_or(DateError::OutOfRange)
            .and_then(Self::try_from)
    }

    /// Signed number of days from `self` to `other` (negative if `other` is earlier).
    pub fn days_until(self, other: Self) -> i64 {
        other.0.signed_duration_since(self.0).num_days()
    }

    /// Helper to parse a one- or two-digit day/month component
    fn parse_u8(s: &str) -> Result<u8, DateError> {
        if s.is_empty() || s.len() > 2 || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(DateError::InvalidFormat(s.to_owned()));
        }
        s.parse::<u8>()
            .map_err(|_| DateError::InvalidFormat(s.to_owned()))
    }
}

impl FromStr for CalendarDate {
    type Err = DateError;

    /// Parses `D[D]<sep>M[M]<sep>YY[YY]`, where each separator is one of
    /// `.`, `/` or `-`. Surrounding whitespace is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(DateError::EmptyInput);
        }

        let parts: Vec<&str> = trimmed.split(DATE_SEPARATORS).collect();
        let [day, month, year] = parts.as_slice() else {
            return Err(DateError::InvalidFormat(format!(
                "expected day, month and year separated by '.', '/' or '-': {trimmed}"
            )));
        };

        let day = Self::parse_u8(day)?;
        let month = Self::parse_u8(month)?;
        let year = Year::from_component(year)?;

        Self::from_ymd(year.get(), month, day)
    }
}

impl TryFrom<NaiveDate> for CalendarDate {
    type Error = DateError;

    fn try_from(date: NaiveDate) -> Result<Self, Self::Error> {
        let in_range = u16::try_from(date.year()).is_ok_and(|y| (MIN_YEAR..=MAX_YEAR).contains(&y));
        if in_range {
            Ok(Self(date))
        } else {
            Err(DateError::OutOfRange)
        }
    }
}

impl From<CalendarDate> for NaiveDate {
    fn from(date: CalendarDate) -> Self {
        date.0
    }
}

impl serde::Serialize for CalendarDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for CalendarDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::date;

    #[test]
    fn test_parse_full_date() {
        let parsed = "15/08/1991".parse::<CalendarDate>().unwrap();
        assert_eq!(parsed.year(), 1991);
        assert_eq!(parsed.month(), 8);
        assert_eq!(parsed.day(), 15);
    }

    #[test]
    fn test_parse_all_separators() {
        let expected = date(25, 12, 2023);
        for input in ["25.12.2023", "25/12/2023", "25-12-2023", "25.12/2023", "25-12.23"] {
            assert_eq!(input.parse::<CalendarDate>(), Ok(expected), "input {input}");
        }
    }

    #[test]
    fn test_two_and_four_digit_years_agree() {
        struct TestCase {
            short: &'static str,
            long: &'static str,
        }

        let cases = [
            TestCase {
                short: "1.1.26",
                long: "1.1.2026",
            },
            TestCase {
                short: "01.01.26",
                long: "01.01.2026",
            },
            TestCase {
                short: "29/2/24",
                long: "29/02/2024",
            },
            TestCase {
                short: "31-12-99",
                long: "31-12-2099",
            },
            TestCase {
                short: "5.6.00",
                long: "05.06.2000",
            },
        ];

        for case in &cases {
            let short = case.short.parse::<CalendarDate>().unwrap();
            let long = case.long.parse::<CalendarDate>().unwrap();
            assert_eq!(short, long, "{} vs {}", case.short, case.long);
        }
    }

    #[test]
    fn test_parse_with_whitespace() {
        let parsed = "  1.6.2024 \t".parse::<CalendarDate>().unwrap();
        assert_eq!(parsed, date(1, 6, 2024));
    }

    #[test]
    fn test_rejects_impossible_dates() {
        assert!(matches!(
            "31/04/2024".parse::<CalendarDate>(),
            Err(DateError::InvalidDay {
                year: 2024,
                month: 4,
                day: 31
            })
        ));
        assert!(matches!(
            "29/02/2023".parse::<CalendarDate>(),
            Err(DateError::InvalidDay { .. })
        ));
        assert!(matches!(
            "00/05/2024".parse::<CalendarDate>(),
            Err(DateError::InvalidDay { day: 0, .. })
        ));
        assert!(matches!(
            "32/01/2024".parse::<CalendarDate>(),
            Err(DateError::InvalidDay { day: 32, .. })
        ));
        assert!(matches!(
            "12/13/2024".parse::<CalendarDate>(),
            Err(DateError::InvalidMonth(13))
        ));
        assert!(matches!(
            "12/00/2024".parse::<CalendarDate>(),
            Err(DateError::InvalidMonth(0))
        ));
    }

    #[test]
    fn test_from_parts() {
        let year = Year::new(2024).unwrap();
        let february = Month::new(2).unwrap();
        let april = Month::new(4).unwrap();

        let leap_day = CalendarDate::from_parts(year, february, Day::try_from(29).unwrap());
        assert_eq!(leap_day, Ok(date(29, 2, 2024)));

        let result = CalendarDate::from_parts(year, april, Day::try_from(31).unwrap());
        assert_eq!(
            result,
            Err(DateError::InvalidDay {
                year:  2024,
                month: 4,
                day:   31,
            })
        );
    }

    #[test]
    fn test_from_ymd_checks_day_range_first() {
        assert_eq!(
            CalendarDate::from_ymd(50, 13, 32),
            Err(DateError::InvalidDay {
                year:  50,
                month: 13,
                day:   32,
            })
        );
        assert_eq!(CalendarDate::from_ymd(50, 13, 1), Err(DateError::InvalidMonth(13)));
        assert_eq!(CalendarDate::from_ymd(50, 1, 1), Err(DateError::InvalidYear(50)));
    }

    #[test]
    fn test_leap_years() {
        assert!("29/02/2024".parse::<CalendarDate>().is_ok());
        assert!("29/02/2000".parse::<CalendarDate>().is_ok());
        assert!("29/02/2100".parse::<CalendarDate>().is_err());
        assert!("29/02/1900".parse::<CalendarDate>().is_err());
    }

    #[test]
    fn test_rejects_malformed_input() {
        let inputs = [
            "",
            "   ",
            "2024-01-15",
            "15 01 2024",
            "15_01_2024",
            "15/01",
            "15/01/2024/1",
            "1//2024",
            "aa/01/2024",
            "15/bb/2024",
            "15/01/yyyy",
            "123/01/2024",
            "15/001/2024",
            "15/01/202",
            "15/01/20245",
            "+1/01/2024",
            "15/01/ 2024",
            "１5/01/2024",
        ];
        for input in inputs {
            assert!(
                input.parse::<CalendarDate>().is_err(),
                "{input:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_empty_input_error() {
        assert_eq!("  ".parse::<CalendarDate>(), Err(DateError::EmptyInput));
    }

    #[test]
    fn test_rejects_years_below_minimum() {
        assert!(matches!(
            "01/01/0050".parse::<CalendarDate>(),
            Err(DateError::InvalidYear(50))
        ));
        assert!("01/01/0100".parse::<CalendarDate>().is_ok());
    }

    #[test]
    fn test_display() {
        assert_eq!(date(1, 7, 2027).to_string(), "01/07/2027");
        assert_eq!(date(31, 12, 2025).to_string(), "31/12/2025");
    }

    #[test]
    fn test_ordering() {
        assert!(date(31, 12, 2025) < date(1, 1, 2026));
        assert!(date(1, 2, 2024) > date(31, 1, 2024));
        assert!(date(2, 1, 2024) > date(1, 1, 2024));
        assert_eq!(date(1, 1, 2024), date(1, 1, 2024));
    }

    #[test]
    fn test_cutoff_constant() {
        assert_eq!(CUTOFF, date(1, 1, 2026));
    }

    #[test]
    fn test_add_months_clamps_to_month_end() {
        assert_eq!(date(31, 1, 2024).add_months(1).unwrap(), date(29, 2, 2024));
        assert_eq!(date(31, 1, 2023).add_months(1).unwrap(), date(28, 2, 2023));
        assert_eq!(date(31, 8, 2024).add_months(18).unwrap(), date(28, 2, 2026));
        assert_eq!(date(29, 2, 2024).add_months(24).unwrap(), date(28, 2, 2026));
        assert_eq!(date(30, 11, 2024).add_months(18).unwrap(), date(30, 5, 2026));
    }

    #[test]
    fn test_add_months_carries_years() {
        assert_eq!(date(1, 6, 2024).add_months(18).unwrap(), date(1, 12, 2025));
        assert_eq!(date(15, 12, 2024).add_months(1).unwrap(), date(15, 1, 2025));
        assert_eq!(date(1, 1, 2023).add_months(24).unwrap(), date(1, 1, 2025));
    }

    #[test]
    fn test_add_days() {
        assert_eq!(date(1, 7, 2027).add_days(10).unwrap(), date(11, 7, 2027));
        assert_eq!(date(25, 2, 2024).add_days(5).unwrap(), date(1, 3, 2024));
        assert_eq!(date(31, 12, 2025).add_days(1).unwrap(), date(1, 1, 2026));
        assert_eq!(date(31, 12, 2025).add_days(0).unwrap(), date(31, 12, 2025));
    }

    #[test]
    fn test_arithmetic_out_of_range() {
        assert_eq!(
            date(1, 6, 9999).add_months(18),
            Err(DateError::OutOfRange)
        );
        assert_eq!(date(31, 12, 9999).add_days(1), Err(DateError::OutOfRange));
    }

    #[test]
    fn test_days_until() {
        assert_eq!(date(1, 1, 2024).days_until(date(5, 1, 2024)), 4);
        assert_eq!(date(5, 1, 2024).days_until(date(1, 1, 2024)), -4);
        assert_eq!(date(1, 1, 2024).days_until(date(1, 1, 2025)), 366);
    }

    #[test]
    fn test_naive_date_conversions() {
        let naive = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        let converted = CalendarDate::try_from(naive).unwrap();
        assert_eq!(converted, date(1, 6, 2024));
        assert_eq!(NaiveDate::from(converted), naive);

        let ancient = NaiveDate::from_ymd_opt(50, 1, 1).unwrap();
        assert_eq!(CalendarDate::try_from(ancient), Err(DateError::OutOfRange));
    }

    #[test]
    fn test_serde_string_format() {
        let value = date(1, 6, 2024);
        let json = serde_json::to_string(&value).unwrap();
        assert_eq!(json, r#""01/06/2024""#);
        let parsed: CalendarDate = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, value);

        let short: CalendarDate = serde_json::from_str(r#""1.6.24""#).unwrap();
        assert_eq!(short, value);
    }

    #[test]
    fn test_serde_validation() {
        let result: Result<CalendarDate, _> = serde_json::from_str(r#""30/02/2024""#);
        assert!(result.is_err());
        let result: Result<CalendarDate, _> = serde_json::from_str(r#""2024-02-01""#);
        assert!(result.is_err());
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            DateError::InvalidDay {
                year: 2024,
                month: 4,
                day: 31
            }
            .to_string(),
            "Invalid day 31 for month 2024-04"
        );
        assert_eq!(
            DateError::InvalidMonth(13).to_string(),
            "Invalid month: 13 (must be 1-12)"
        );
    }
}
