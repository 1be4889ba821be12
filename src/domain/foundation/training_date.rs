//! Calendar date value object (`YYYY-MM-DD`).

use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use super::ValidationError;

static DATE_SHAPE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").expect("date shape pattern compiles")
});

const DATE_FORMAT: &str = "%Y-%m-%d";

/// A validated calendar date on which training happened.
///
/// Construction only succeeds for strings of the exact `YYYY-MM-DD` shape
/// that also name a real day, so `2024-02-30` and `2024-13-01` are rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TrainingDate(NaiveDate);

impl TrainingDate {
    /// Parses and validates a date string, reporting failures against `date`.
    pub fn parse(value: &str) -> Result<Self, ValidationError> {
        Self::parse_field("date", value)
    }

    /// Parses and validates a date string, reporting failures against `field`.
    pub fn parse_field(field: &str, value: &str) -> Result<Self, ValidationError> {
        if !has_date_shape(value) {
            return Err(ValidationError::invalid_format(
                field,
                "Date must be YYYY-MM-DD format",
            ));
        }
        NaiveDate::parse_from_str(value, DATE_FORMAT)
            .map(Self)
            .map_err(|_| ValidationError::invalid_format(field, "Date must be a valid calendar date"))
    }

    /// Wraps a date read back from storage.
    pub fn from_naive(date: NaiveDate) -> Self {
        Self(date)
    }

    pub fn as_naive(&self) -> NaiveDate {
        self.0
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// The calendar day immediately before this one.
    pub fn previous_day(&self) -> Option<Self> {
        self.0.pred_opt().map(Self)
    }
}

/// True when `value` looks like `YYYY-MM-DD`, without checking the calendar.
pub fn has_date_shape(value: &str) -> bool {
    DATE_SHAPE.is_match(value)
}

/// First day of the month (inclusive) and first day of the next month
/// (exclusive) for a year/month pair.
pub fn month_bounds(year: i32, month: u32) -> Result<(NaiveDate, NaiveDate), ValidationError> {
    if !(1..=12).contains(&month) {
        return Err(ValidationError::out_of_range("month", 1, 12, month as i64));
    }
    if !(1..=9999).contains(&year) {
        return Err(ValidationError::out_of_range("year", 1, 9999, year as i64));
    }
    let (next_year, next_month) = if month == 12 { (year + 1, 1) } else { (year, month + 1) };
    let start = NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or_else(|| ValidationError::invalid_format("month", "not a valid month"))?;
    let end = NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .ok_or_else(|| ValidationError::invalid_format("month", "not a valid month"))?;
    Ok((start, end))
}

impl fmt::Display for TrainingDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}

impl FromStr for TrainingDate {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for TrainingDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for TrainingDate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(serde::de::Error::custom)
    }
}
