//! Calendar-month keys.

use core::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use solestock_core::{DomainError, DomainResult, ValueObject};

/// A calendar month (year + month number).
///
/// Ordering is chronological. The text form is zero-padded `YYYY-MM`, so it
/// also sorts chronologically as a string.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthKey {
    first_day: NaiveDate,
}

impl ValueObject for MonthKey {}

impl MonthKey {
    /// `month` is 1-based (January = 1).
    pub fn new(year: i32, month: u32) -> DomainResult<Self> {
        NaiveDate::from_ymd_opt(year, month, 1)
            .map(|first_day| Self { first_day })
            .ok_or_else(|| DomainError::validation(format!("invalid month: {year}-{month}")))
    }

    /// The month a date falls in.
    pub fn of(date: NaiveDate) -> Self {
        Self {
            first_day: date.with_day(1).unwrap_or(date),
        }
    }

    pub fn year(self) -> i32 {
        self.first_day.year()
    }

    pub fn month(self) -> u32 {
        self.first_day.month()
    }

    pub fn contains(self, date: NaiveDate) -> bool {
        Self::of(date) == self
    }

    /// Long form for list headings, e.g. `April 2024`.
    pub fn label(self) -> String {
        self.first_day.format("%B %Y").to_string()
    }

    /// Parse an optional month selection; absent or blank means "all months".
    pub fn parse_filter(raw: Option<&str>) -> DomainResult<Option<Self>> {
        match raw.map(str::trim) {
            None | Some("") => Ok(None),
            Some(s) => s.parse().map(Some),
        }
    }
}

impl core::fmt::Display for MonthKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{:04}-{:02}", self.year(), self.month())
    }
}

impl FromStr for MonthKey {
    type Err = DomainError;

    /// Accepts `YYYY-MM` and the unpadded `YYYY-M`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || DomainError::validation(format!("month must look like YYYY-MM, got {s:?}"));
        let (year, month) = s.trim().split_once('-').ok_or_else(invalid)?;
        let digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
        if year.len() != 4 || month.is_empty() || month.len() > 2 || !digits(year) || !digits(month)
        {
            return Err(invalid());
        }
        let year: i32 = year.parse().map_err(|_| invalid())?;
        let month: u32 = month.parse().map_err(|_| invalid())?;
        Self::new(year, month)
    }
}

impl Serialize for MonthKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for MonthKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_zero_padded() {
        let key = MonthKey::new(2024, 4).unwrap();
        assert_eq!(key.to_string(), "2024-04");
    }

    #[test]
    fn october_sorts_after_february() {
        let feb = MonthKey::new(2024, 2).unwrap();
        let oct = MonthKey::new(2024, 10).unwrap();
        assert!(feb < oct);
        assert!(feb.to_string() < oct.to_string());
    }

    #[test]
    fn december_sorts_before_next_january() {
        let dec = MonthKey::new(2023, 12).unwrap();
        let jan = MonthKey::new(2024, 1).unwrap();
        assert!(dec < jan);
    }

    #[test]
    fn parses_padded_and_unpadded_forms() {
        let padded: MonthKey = "2024-03".parse().unwrap();
        let unpadded: MonthKey = "2024-3".parse().unwrap();
        assert_eq!(padded, unpadded);
        assert_eq!(padded.month(), 3);
    }

    #[test]
    fn rejects_malformed_months() {
        let malformed = [
            "2024", "2024-13", "2024-0", "24-01", "2024-001", "april", "2024-+1", "+024-01",
            "2024- 1",
        ];
        for raw in malformed {
            assert!(raw.parse::<MonthKey>().is_err(), "{raw} should not parse");
        }
    }

    #[test]
    fn of_and_contains_ignore_the_day() {
        let date = NaiveDate::from_ymd_opt(2024, 4, 27).unwrap();
        let key = MonthKey::of(date);
        assert_eq!(key, MonthKey::new(2024, 4).unwrap());
        assert!(key.contains(NaiveDate::from_ymd_opt(2024, 4, 1).unwrap()));
        assert!(!key.contains(NaiveDate::from_ymd_opt(2024, 5, 1).unwrap()));
    }

    #[test]
    fn label_uses_long_month_name() {
        assert_eq!(MonthKey::new(2024, 4).unwrap().label(), "April 2024");
    }

    #[test]
    fn blank_filter_means_all_months() {
        assert_eq!(MonthKey::parse_filter(None).unwrap(), None);
        assert_eq!(MonthKey::parse_filter(Some("  ")).unwrap(), None);
        assert_eq!(
            MonthKey::parse_filter(Some("2024-01")).unwrap(),
            Some(MonthKey::new(2024, 1).unwrap())
        );
    }

    #[test]
    fn serializes_as_string() {
        let key = MonthKey::new(2024, 1).unwrap();
        assert_eq!(serde_json::to_string(&key).unwrap(), "\"2024-01\"");
        let back: MonthKey = serde_json::from_str("\"2024-01\"").unwrap();
        assert_eq!(back, key);
    }
}
