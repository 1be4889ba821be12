//! GraphQL input objects and their mapping onto commands.

use async_graphql::{InputObject, MaybeUndefined};

use super::scalars::GqlDate;
use crate::application::ExerciseOrderInput;
use crate::domain::exercise::{ExerciseInput, ExercisePatch};
use crate::domain::foundation::FieldUpdate;

/// Omitted keeps the stored value, `null` clears it.
fn field_update<T>(value: MaybeUndefined<T>) -> FieldUpdate<T> {
    match value {
        MaybeUndefined::Undefined => FieldUpdate::Unchanged,
        MaybeUndefined::Null => FieldUpdate::Clear,
        MaybeUndefined::Value(v) => FieldUpdate::Set(v),
    }
}

#[derive(InputObject)]
#[graphql(name = "ExerciseInput")]
pub struct GqlExerciseInput {
    pub exercise_name: String,
    pub weight: Option<f64>,
    pub reps: Option<i32>,
    pub duration_seconds: Option<i32>,
    pub sets: i32,
    /// Position within the session; defaults depend on the mutation.
    pub order: Option<i32>,
    pub notes: Option<String>,
}

impl From<GqlExerciseInput> for ExerciseInput {
    fn from(input: GqlExerciseInput) -> Self {
        Self {
            exercise_name: input.exercise_name,
            weight: input.weight,
            reps: input.reps,
            duration_seconds: input.duration_seconds,
            sets: input.sets,
            order: input.order,
            notes: input.notes,
        }
    }
}

#[derive(InputObject)]
#[graphql(name = "CreateTrainingSessionInput")]
pub struct GqlCreateTrainingSessionInput {
    pub date: GqlDate,
    pub body_weight: Option<f64>,
    pub notes: Option<String>,
    pub exercises: Vec<GqlExerciseInput>,
}

#[derive(InputObject)]
#[graphql(name = "UpdateTrainingSessionInput")]
pub struct GqlUpdateTrainingSessionInput {
    pub date: MaybeUndefined<GqlDate>,
    pub body_weight: MaybeUndefined<f64>,
    pub notes: MaybeUndefined<String>,
}

impl GqlUpdateTrainingSessionInput {
    pub fn into_parts(self) -> (FieldUpdate<String>, FieldUpdate<f64>, FieldUpdate<String>) {
        (
            field_update(self.date).map(|d| d.0),
            field_update(self.body_weight),
            field_update(self.notes),
        )
    }
}

#[derive(InputObject)]
#[graphql(name = "UpdateExerciseInput")]
pub struct GqlUpdateExerciseInput {
    pub exercise_name: MaybeUndefined<String>,
    pub weight: MaybeUndefined<f64>,
    pub reps: MaybeUndefined<i32>,
    pub duration_seconds: MaybeUndefined<i32>,
    pub sets: MaybeUndefined<i32>,
    pub order: MaybeUndefined<i32>,
    pub notes: MaybeUndefined<String>,
}

impl From<GqlUpdateExerciseInput> for ExercisePatch {
    fn from(input: GqlUpdateExerciseInput) -> Self {
        Self {
            exercise_name: field_update(input.exercise_name),
            weight: field_update(input.weight),
            reps: field_update(input.reps),
            duration_seconds: field_update(input.duration_seconds),
            sets: field_update(input.sets),
            order: field_update(input.order),
            notes: field_update(input.notes),
        }
    }
}

#[derive(InputObject)]
#[graphql(name = "ExerciseOrderInput")]
pub struct GqlExerciseOrderInput {
    pub id: i32,
    pub order: i32,
}

impl From<GqlExerciseOrderInput> for ExerciseOrderInput {
    fn from(input: GqlExerciseOrderInput) -> Self {
        Self {
            id: input.id,
            order: input.order,
        }
    }
}
