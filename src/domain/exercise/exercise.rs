//! Exercise record, write inputs and the reps/duration rule.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{
    ExerciseId, FieldUpdate, Timestamp, TrainingDate, TrainingSessionId, ValidationError,
};

/// One exercise performed within a training session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Exercise {
    pub id: ExerciseId,
    pub training_session_id: TrainingSessionId,
    pub exercise_name: String,
    pub weight: Option<f64>,
    pub reps: Option<i32>,
    pub duration_seconds: Option<i32>,
    pub sets: i32,
    /// Position within the session's list, 1-based. Not guaranteed unique.
    pub order: i32,
    pub notes: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Exercise {
    /// Mirrors the storage CHECK constraints: `sets > 0` and at least one of
    /// reps/duration positive.
    pub fn passes_storage_checks(&self) -> bool {
        self.sets > 0
            && (self.reps.map_or(false, |r| r > 0) || self.duration_seconds.map_or(false, |d| d > 0))
    }
}

/// Validated values for inserting an exercise.
#[derive(Debug, Clone, PartialEq)]
pub struct NewExercise {
    pub training_session_id: TrainingSessionId,
    pub exercise_name: String,
    pub weight: Option<f64>,
    pub reps: Option<i32>,
    pub duration_seconds: Option<i32>,
    pub sets: i32,
    pub order: i32,
    pub notes: Option<String>,
}

/// Validated partial update of an exercise.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ExerciseChanges {
    pub exercise_name: Option<String>,
    pub weight: FieldUpdate<f64>,
    pub reps: FieldUpdate<i32>,
    pub duration_seconds: FieldUpdate<i32>,
    pub sets: Option<i32>,
    pub order: Option<i32>,
    pub notes: FieldUpdate<String>,
}

impl ExerciseChanges {
    /// Changes that only move the exercise to a new position.
    pub fn reorder(order: i32) -> Self {
        Self {
            order: Some(order),
            ..Default::default()
        }
    }

    /// Applies the changes to an in-memory copy of an exercise.
    pub fn apply_to(self, exercise: &mut Exercise) {
        if let Some(name) = self.exercise_name {
            exercise.exercise_name = name;
        }
        exercise.weight = self.weight.apply(exercise.weight);
        exercise.reps = self.reps.apply(exercise.reps);
        exercise.duration_seconds = self.duration_seconds.apply(exercise.duration_seconds);
        if let Some(sets) = self.sets {
            exercise.sets = sets;
        }
        if let Some(order) = self.order {
            exercise.order = order;
        }
        exercise.notes = self.notes.apply(exercise.notes.take());
    }
}

/// Exactly one of `reps` and `duration_seconds` must be present.
pub fn check_reps_or_duration(
    reps: Option<i32>,
    duration_seconds: Option<i32>,
) -> Result<(), ValidationError> {
    match (reps, duration_seconds) {
        (Some(_), Some(_)) => Err(ValidationError::rule(
            "reps",
            "Cannot provide both reps and durationSeconds",
        )),
        (None, None) => Err(ValidationError::rule(
            "reps",
            "Either reps or durationSeconds must be provided",
        )),
        _ => Ok(()),
    }
}

/// How `AddExercise` picks an order when the caller leaves it out.
///
/// Session creation always falls back to the 1-based list position; adding a
/// single exercise historically used a fixed `1`, which can collide with
/// existing rows. `Append` places it after the current last exercise instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExerciseOrderPolicy {
    #[default]
    First,
    Append,
}

impl ExerciseOrderPolicy {
    /// Default order for a new exercise given the orders already in the session.
    pub fn next_order(&self, existing: &[i32]) -> i32 {
        match self {
            ExerciseOrderPolicy::First => 1,
            ExerciseOrderPolicy::Append => existing.iter().copied().max().unwrap_or(0) + 1,
        }
    }
}

/// One row of an exercise's history across sessions.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExerciseHistoryEntry {
    pub date: TrainingDate,
    pub weight: Option<f64>,
    pub reps: Option<i32>,
    pub duration_seconds: Option<i32>,
    pub sets: i32,
}
