use chrono::{Datelike, Duration, NaiveDate};
use std::fmt;

use crate::error::LeafError;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parses an entry date. Only the zero-padded `YYYY-MM-DD` form naming a real
/// calendar day is accepted, so `2025-3-15` and `2025-02-30` are both `None`.
pub fn parse_entry_date(input: &str) -> Option<NaiveDate> {
    let bytes = input.as_bytes();
    if bytes.len() != 10 || bytes[4] != b'-' || bytes[7] != b'-' {
        return None;
    }
    let digits_ok = bytes
        .iter()
        .enumerate()
        .all(|(i, b)| i == 4 || i == 7 || b.is_ascii_digit());
    if !digits_ok {
        return None;
    }
    NaiveDate::parse_from_str(input, DATE_FORMAT).ok()
}

pub fn date_key(year: i32, month: u32, day: u32) -> String {
    format!("{:04}-{:02}-{:02}", year, month, day)
}

/// A calendar month. `month0` is 0-based (January = 0) to match how month
/// grids are addressed by callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth {
    year: i32,
    month0: u32,
}

impl YearMonth {
    pub fn new(year: i32, month0: u32) -> Result<Self, LeafError> {
        if month0 > 11 {
            return Err(LeafError::InvalidMonth(month0));
        }
        // Both ends of the month must be representable.
        let ym = Self { year, month0 };
        let first = NaiveDate::from_ymd_opt(year, month0 + 1, 1);
        if first.is_none() || ym.following_first().is_none() {
            return Err(LeafError::YearOutOfRange(year));
        }
        Ok(ym)
    }

    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month0: date.month0(),
        }
    }

    /// Parses `YYYY-MM` where the month is 1-based, as users write it.
    pub fn parse(input: &str) -> Result<Self, LeafError> {
        let invalid = || LeafError::InvalidYearMonth(input.to_string());
        let (year_str, month_str) = input.trim().split_once('-').ok_or_else(invalid)?;
        let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
        if year_str.len() != 4
            || month_str.len() != 2
            || !all_digits(year_str)
            || !all_digits(month_str)
        {
            return Err(invalid());
        }
        let year: i32 = year_str.parse().map_err(|_| invalid())?;
        let month: u32 = month_str.parse().map_err(|_| invalid())?;
        if !(1..=12).contains(&month) {
            return Err(invalid());
        }
        Self::new(year, month - 1)
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month0(&self) -> u32 {
        self.month0
    }

    /// 1-based month number.
    pub fn month(&self) -> u32 {
        self.month0 + 1
    }

    pub fn first_day(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month(), 1).unwrap_or(NaiveDate::MIN)
    }

    pub fn days_in_month(&self) -> u32 {
        match self.following_first() {
            Some(next) => (next - Duration::days(1)).day(),
            None => 31,
        }
    }

    /// Number of blank cells before the 1st in a Sunday-first week.
    pub fn leading_blanks(&self) -> u32 {
        self.first_day().weekday().num_days_from_sunday()
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month0() == self.month0
    }

    /// The following month, or `None` past the supported calendar range.
    pub fn next(&self) -> Option<Self> {
        let (year, month0) = if self.month0 == 11 {
            (self.year + 1, 0)
        } else {
            (self.year, self.month0 + 1)
        };
        Self::new(year, month0).ok()
    }

    pub fn previous(&self) -> Option<Self> {
        let (year, month0) = if self.month0 == 0 {
            (self.year - 1, 11)
        } else {
            (self.year, self.month0 - 1)
        };
        Self::new(year, month0).ok()
    }

    fn following_first(&self) -> Option<NaiveDate> {
        if self.month0 == 11 {
            NaiveDate::from_ymd_opt(self.year + 1, 1, 1)
        } else {
            NaiveDate::from_ymd_opt(self.year, self.month0 + 2, 1)
        }
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_entry_date_is_strict() {
        assert_eq!(
            parse_entry_date("2025-03-15"),
            NaiveDate::from_ymd_opt(2025, 3, 15)
        );
        assert_eq!(parse_entry_date("2025-3-15"), None);
        assert_eq!(parse_entry_date("2025-03-5"), None);
        assert_eq!(parse_entry_date("2025-02-30"), None);
        assert_eq!(parse_entry_date("2025/03/15"), None);
        assert_eq!(parse_entry_date(" 2025-03-15"), None);
        assert_eq!(parse_entry_date(""), None);
        assert_eq!(parse_entry_date("not a date"), None);
    }

    #[test]
    fn test_days_in_month() {
        assert_eq!(YearMonth::new(2024, 1).unwrap().days_in_month(), 29);
        assert_eq!(YearMonth::new(2023, 1).unwrap().days_in_month(), 28);
        assert_eq!(YearMonth::new(1900, 1).unwrap().days_in_month(), 28);
        assert_eq!(YearMonth::new(2000, 1).unwrap().days_in_month(), 29);
        assert_eq!(YearMonth::new(2025, 3).unwrap().days_in_month(), 30);
        assert_eq!(YearMonth::new(2025, 11).unwrap().days_in_month(), 31);
    }

    #[test]
    fn test_invalid_month() {
        assert_eq!(YearMonth::new(2025, 12), Err(LeafError::InvalidMonth(12)));
    }

    #[test]
    fn test_parse_year_month() {
        let ym = YearMonth::parse("2025-03").unwrap();
        assert_eq!(ym.year(), 2025);
        assert_eq!(ym.month0(), 2);
        assert_eq!(ym.to_string(), "2025-03");

        assert!(YearMonth::parse("2025-3").is_err());
        assert!(YearMonth::parse("2025-13").is_err());
        assert!(YearMonth::parse("2025-00").is_err());
        assert!(YearMonth::parse("march").is_err());
    }

    #[test]
    fn test_navigation_wraps_years() {
        let dec = YearMonth::new(2024, 11).unwrap();
        let jan = YearMonth::new(2025, 0).unwrap();
        assert_eq!(dec.next(), Some(jan));
        assert_eq!(jan.previous(), Some(dec));
        assert_eq!(dec.next().and_then(|m| m.previous()), Some(dec));
    }

    #[test]
    fn test_navigation_stops_at_calendar_range() {
        let last = YearMonth::from_date(NaiveDate::MAX);
        assert_eq!(last.next(), None);
        let first = YearMonth::from_date(NaiveDate::MIN);
        assert_eq!(first.previous(), None);
        // Neighbours inside the range still resolve.
        assert!(last.previous().is_some());
        assert!(first.next().is_some());
    }

    #[test]
    fn test_leading_blanks() {
        // 2025-06-01 is a Sunday, 2025-03-01 a Saturday.
        assert_eq!(YearMonth::new(2025, 5).unwrap().leading_blanks(), 0);
        assert_eq!(YearMonth::new(2025, 2).unwrap().leading_blanks(), 6);
    }
}
