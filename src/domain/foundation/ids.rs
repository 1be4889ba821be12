//! Strongly-typed identifier value objects.
//!
//! Identifiers are surrogate integer keys assigned by storage. Values coming
//! from clients go through `parse`, which rejects non-positive ids.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// Identifier of a training session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TrainingSessionId(i32);

impl TrainingSessionId {
    /// Validates a client-supplied id.
    pub fn parse(field: &str, raw: i32) -> Result<Self, ValidationError> {
        if raw <= 0 {
            return Err(ValidationError::not_positive(field));
        }
        Ok(Self(raw))
    }

    /// Wraps an id read back from storage.
    pub fn from_i32(raw: i32) -> Self {
        Self(raw)
    }

    /// Returns the inner integer.
    pub fn value(&self) -> i32 {
        self.0
    }
}

impl fmt::Display for TrainingSessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of an exercise row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExerciseId(i32);

impl ExerciseId {
    /// Validates a client-supplied id.
    pub fn parse(field: &str, raw: i32) -> Result<Self, ValidationError> {
        if raw <= 0 {
            return Err(ValidationError::not_positive(field));
        }
        Ok(Self(raw))
    }

    /// Wraps an id read back from storage.
    pub fn from_i32(raw: i32) -> Self {
        Self(raw)
    }

    /// Returns the inner integer.
    pub fn value(&self) -> i32 {
        self.0
    }
}

impl fmt::Display for ExerciseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
