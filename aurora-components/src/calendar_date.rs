//! Calendar dates without a time component.
//!
//! ## Usage
//!
//! Use as the value type of date inputs. Dates are validated on construction
//! and parse from `YYYY-MM-DD`.
use std::{
    fmt,
    str::FromStr,
    time::{SystemTime, UNIX_EPOCH},
};

use thiserror::Error;

/// A calendar date expressed as year, month, and day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDate {
    year: i32,
    month: u8,
    day: u8,
}

impl CalendarDate {
    /// Creates a calendar date if the values are valid.
    pub fn new(year: i32, month: u8, day: u8) -> Option<Self> {
        if !(1..=12).contains(&month) {
            return None;
        }
        if day == 0 || day > days_in_month(year, month) {
            return None;
        }
        Some(Self { year, month, day })
    }

    /// Returns the year.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Returns the month (1-12).
    pub fn month(&self) -> u8 {
        self.month
    }

    /// Returns the day of the month (1-31).
    pub fn day(&self) -> u8 {
        self.day
    }

    /// Returns the current date in UTC.
    pub fn today() -> Self {
        let duration = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default();
        Self::from_days_since_epoch((duration.as_secs() / 86_400) as i64)
    }

    /// Returns the date `days` days after 1970-01-01.
    ///
    /// `days` must stay within the `i32` year range.
    pub(crate) fn from_days_since_epoch(days: i64) -> Self {
        let (year, month, day) = civil_from_days(days);
        Self { year, month, day }
    }

    /// Returns the number of days since 1970-01-01 (negative before it).
    pub fn days_since_epoch(&self) -> i64 {
        days_from_civil(self.year, self.month, self.day)
    }
}

/// Formats as ISO 8601 (`YYYY-MM-DD`).
impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

/// Errors returned when parsing a [`CalendarDate`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseDateError {
    /// The input is not three `-`-separated numbers.
    #[error("date `{0}` is not in YYYY-MM-DD form")]
    Format(String),
    /// The numbers do not name a real calendar day.
    #[error("date `{0}` does not exist")]
    OutOfRange(String),
}

impl FromStr for CalendarDate {
    type Err = ParseDateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let format_error = || ParseDateError::Format(s.to_string());
        let mut parts = s.trim().splitn(3, '-');
        let year = parts
            .next()
            .and_then(|part| part.parse::<i32>().ok())
            .ok_or_else(format_error)?;
        let month = parts
            .next()
            .and_then(|part| part.parse::<u8>().ok())
            .ok_or_else(format_error)?;
        let day = parts
            .next()
            .and_then(|part| part.parse::<u8>().ok())
            .ok_or_else(format_error)?;
        CalendarDate::new(year, month, day)
            .ok_or_else(|| ParseDateError::OutOfRange(s.to_string()))
    }
}

fn days_in_month(year: i32, month: u8) -> u8 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}

fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
}

// Howard Hinnant's days_from_civil / civil_from_days, proleptic Gregorian.
fn days_from_civil(year: i32, month: u8, day: u8) -> i64 {
    let y = year as i64 - if month <= 2 { 1 } else { 0 };
    let m = month as i64;
    let d = day as i64;
    let era = if y >= 0 { y } else { y - 399 } / 400;
    let yoe = y - era * 400;
    let mp = m + if m > 2 { -3 } else { 9 };
    let doy = (153 * mp + 2) / 5 + d - 1;
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
    era * 146_097 + doe - 719_468
}

fn civil_from_days(days: i64) -> (i32, u8, u8) {
    let z = days + 719_468;
    let era = if z >= 0 { z } else { z - 146_096 } / 146_097;
    let doe = z - era * 146_097;
    let yoe = (doe - doe / 1_460 + doe / 36_524 - doe / 146_096) / 365;
    let y = yoe + era * 400;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let day = doy - (153 * mp + 2) / 5 + 1;
    let month = mp + if mp < 10 { 3 } else { -9 };
    let year = y + if month <= 2 { 1 } else { 0 };
    (year as i32, month as u8, day as u8)
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::{CalendarDate, ParseDateError};

    #[test]
    fn rejects_days_past_month_end() {
        assert!(CalendarDate::new(2024, 2, 29).is_some());
        assert!(CalendarDate::new(2023, 2, 29).is_none());
        assert!(CalendarDate::new(1900, 2, 29).is_none());
        assert!(CalendarDate::new(2000, 2, 29).is_some());
        assert!(CalendarDate::new(2024, 13, 1).is_none());
        assert!(CalendarDate::new(2024, 4, 0).is_none());
    }

    #[rstest]
    #[case(0, "1970-01-01")]
    #[case(-1, "1969-12-31")]
    #[case(19_727, "2024-01-05")]
    #[case(47_481, "2099-12-31")]
    fn epoch_day_conversion(#[case] days: i64, #[case] expected: &str) {
        let date = CalendarDate::from_days_since_epoch(days);
        assert_eq!(date.to_string(), expected);
        assert_eq!(date.days_since_epoch(), days);
    }

    #[test]
    fn today_is_a_valid_date() {
        let today = CalendarDate::today();
        assert_eq!(
            CalendarDate::new(today.year(), today.month(), today.day()),
            Some(today)
        );
        assert!(today.year() >= 2024);
    }

    #[test]
    fn parses_iso_dates() {
        let date: CalendarDate = "2025-03-10".parse().unwrap();
        assert_eq!((date.year(), date.month(), date.day()), (2025, 3, 10));
    }

    #[rstest]
    #[case("2025/03/10", ParseDateError::Format("2025/03/10".into()))]
    #[case("2025-03", ParseDateError::Format("2025-03".into()))]
    #[case("2023-02-29", ParseDateError::OutOfRange("2023-02-29".into()))]
    fn rejects_invalid_input(#[case] input: &str, #[case] expected: ParseDateError) {
        assert_eq!(input.parse::<CalendarDate>(), Err(expected));
    }

    #[test]
    fn orders_chronologically() {
        let earlier = CalendarDate::new(2024, 12, 31).unwrap();
        let later = CalendarDate::new(2025, 1, 1).unwrap();
        assert!(earlier < later);
    }
}
