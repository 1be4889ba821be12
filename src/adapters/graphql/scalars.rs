//! Custom scalars: `Date` and `DateTime`.

use async_graphql::{InputValueError, InputValueResult, Scalar, ScalarType, Value};
use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::domain::foundation::{has_date_shape, Timestamp, TrainingDate};

static DATE_TIME_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\d{4}-\d{2}-\d{2}T\d{2}:\d{2}:\d{2}(\.\d{3})?Z$").expect("date-time pattern compiles")
});

/// Calendar date as `YYYY-MM-DD`.
///
/// Input is only checked for shape here. Handlers parse it into a
/// `TrainingDate` so an impossible date is reported against its field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GqlDate(pub String);

#[Scalar(name = "Date")]
impl ScalarType for GqlDate {
    fn parse(value: Value) -> InputValueResult<Self> {
        match &value {
            Value::String(s) if has_date_shape(s) => Ok(GqlDate(s.clone())),
            Value::String(_) => Err(InputValueError::custom("Date must be in YYYY-MM-DD format")),
            _ => Err(InputValueError::expected_type(value)),
        }
    }

    fn to_value(&self) -> Value {
        Value::String(self.0.clone())
    }
}

impl From<TrainingDate> for GqlDate {
    fn from(date: TrainingDate) -> Self {
        GqlDate(date.to_string())
    }
}

/// UTC instant as ISO-8601 with milliseconds, e.g. `2024-01-15T10:30:00.000Z`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GqlDateTime(pub Timestamp);

#[Scalar(name = "DateTime")]
impl ScalarType for GqlDateTime {
    fn parse(value: Value) -> InputValueResult<Self> {
        let raw = match &value {
            Value::String(s) => s,
            _ => return Err(InputValueError::expected_type(value)),
        };
        if !DATE_TIME_PATTERN.is_match(raw) {
            return Err(InputValueError::custom(
                "DateTime must be ISO-8601 UTC, e.g. 2024-01-15T10:30:00.000Z",
            ));
        }
        DateTime::parse_from_rfc3339(raw)
            .map(|dt| GqlDateTime(Timestamp::from_datetime(dt.with_timezone(&Utc))))
            .map_err(|_| InputValueError::custom("DateTime is not a real instant"))
    }

    fn to_value(&self) -> Value {
        Value::String(self.0.to_iso_millis())
    }
}

impl From<Timestamp> for GqlDateTime {
    fn from(ts: Timestamp) -> Self {
        GqlDateTime(ts)
    }
}
