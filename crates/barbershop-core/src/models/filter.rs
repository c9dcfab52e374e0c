// ABOUTME: List filters for appointment queries by exact day or calendar month
// ABOUTME: MonthKey renders the lexicographic date range used for month queries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::formats::{MONTH_RANGE_END_DAY, MONTH_RANGE_START_DAY};
use chrono::{Datelike, NaiveDate};
use std::fmt;

/// A calendar month (`YYYY-MM`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MonthKey {
    year: i32,
    month: u32,
}

impl MonthKey {
    /// Build from a year and a 1-based month, `None` if the month is out of range
    #[must_use]
    pub const fn new(year: i32, month: u32) -> Option<Self> {
        if month >= 1 && month <= 12 && year >= 0 && year <= 9999 {
            Some(Self { year, month })
        } else {
            None
        }
    }

    /// Month containing `date`
    #[must_use]
    pub fn of(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// Parse `YYYY-MM` (exactly four and two digits)
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let (year, month) = s.split_once('-')?;
        if year.len() != 4 || month.len() != 2 {
            return None;
        }
        if !year.bytes().chain(month.bytes()).all(|b| b.is_ascii_digit()) {
            return None;
        }
        Self::new(year.parse().ok()?, month.parse().ok()?)
    }

    /// Year component
    #[must_use]
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// 1-based month component
    #[must_use]
    pub const fn month(&self) -> u32 {
        self.month
    }

    /// First day of the month
    #[must_use]
    pub fn first_day(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
    }

    /// Number of days in the month
    #[must_use]
    pub fn days_in_month(&self) -> u32 {
        let (next_year, next_month) = if self.month == 12 {
            (self.year + 1, 1)
        } else {
            (self.year, self.month + 1)
        };
        NaiveDate::from_ymd_opt(next_year, next_month, 1)
            .and_then(|d| d.pred_opt())
            .map_or(31, |d| d.day())
    }

    /// Inclusive string bounds `YYYY-MM-01 ..= YYYY-MM-31`
    ///
    /// The upper bound is always day 31. Zero-padded dates compare
    /// lexicographically in calendar order, so shorter months still match
    /// exactly their own days.
    #[must_use]
    pub fn date_range(&self) -> (String, String) {
        (
            format!("{self}-{MONTH_RANGE_START_DAY}"),
            format!("{self}-{MONTH_RANGE_END_DAY}"),
        )
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

/// Which appointments a list query returns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ListFilter {
    /// Every appointment
    #[default]
    All,
    /// Appointments on one day
    Date(NaiveDate),
    /// Appointments within one calendar month
    Month(MonthKey),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_requires_exact_shape() {
        assert_eq!(MonthKey::parse("2024-02"), MonthKey::new(2024, 2));
        assert!(MonthKey::parse("2024-2").is_none());
        assert!(MonthKey::parse("24-02").is_none());
        assert!(MonthKey::parse("2024-13").is_none());
        assert!(MonthKey::parse("2024-02-01").is_none());
        assert!(MonthKey::parse("+024-02").is_none());
    }

    #[test]
    fn test_date_range_uses_literal_31() {
        let month = MonthKey::new(2024, 2).unwrap();
        assert_eq!(
            month.date_range(),
            ("2024-02-01".to_owned(), "2024-02-31".to_owned())
        );
    }

    #[test]
    fn test_days_in_month() {
        assert_eq!(MonthKey::new(2024, 2).unwrap().days_in_month(), 29);
        assert_eq!(MonthKey::new(2023, 2).unwrap().days_in_month(), 28);
        assert_eq!(MonthKey::new(2024, 12).unwrap().days_in_month(), 31);
        assert_eq!(MonthKey::new(2024, 4).unwrap().days_in_month(), 30);
    }
}
