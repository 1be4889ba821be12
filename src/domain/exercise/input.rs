//! Unvalidated exercise input and the checks that turn it into write values.

use crate::domain::foundation::validate::{
    require_max_chars, require_non_empty, require_positive_int, require_storable_decimal,
    EXERCISE_NAME_MAX_CHARS, EXERCISE_WEIGHT_COLUMN, NOTES_MAX_CHARS,
};
use crate::domain::foundation::{FieldUpdate, TrainingSessionId, ValidationError};

use super::{check_reps_or_duration, ExerciseChanges, NewExercise};

/// Exercise fields as supplied by a client.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ExerciseInput {
    pub exercise_name: String,
    pub weight: Option<f64>,
    pub reps: Option<i32>,
    pub duration_seconds: Option<i32>,
    pub sets: i32,
    pub order: Option<i32>,
    pub notes: Option<String>,
}

impl ExerciseInput {
    /// Checks every field without consuming the input.
    pub fn check(&self) -> Result<(), ValidationError> {
        require_non_empty("exerciseName", &self.exercise_name)?;
        require_max_chars("exerciseName", &self.exercise_name, EXERCISE_NAME_MAX_CHARS)?;
        if let Some(weight) = self.weight {
            require_storable_decimal("weight", weight, EXERCISE_WEIGHT_COLUMN)?;
        }
        if let Some(reps) = self.reps {
            require_positive_int("reps", reps)?;
        }
        if let Some(duration) = self.duration_seconds {
            require_positive_int("durationSeconds", duration)?;
        }
        check_reps_or_duration(self.reps, self.duration_seconds)?;
        require_positive_int("sets", self.sets)?;
        if let Some(order) = self.order {
            require_positive_int("order", order)?;
        }
        if let Some(notes) = &self.notes {
            require_max_chars("notes", notes, NOTES_MAX_CHARS)?;
        }
        Ok(())
    }

    /// Validates the input for insertion into `training_session_id`.
    ///
    /// `default_order` is used when the client left `order` out.
    pub fn validate(
        self,
        training_session_id: TrainingSessionId,
        default_order: i32,
    ) -> Result<NewExercise, ValidationError> {
        self.check()?;
        Ok(self.into_new_exercise(training_session_id, default_order))
    }

    /// Builds the insert values. Only meaningful once `check` has passed.
    pub fn into_new_exercise(
        self,
        training_session_id: TrainingSessionId,
        default_order: i32,
    ) -> NewExercise {
        NewExercise {
            training_session_id,
            exercise_name: self.exercise_name,
            weight: self.weight,
            reps: self.reps,
            duration_seconds: self.duration_seconds,
            sets: self.sets,
            order: self.order.unwrap_or(default_order),
            notes: self.notes,
        }
    }
}

/// Partial exercise update as supplied by a client.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ExercisePatch {
    pub exercise_name: FieldUpdate<String>,
    pub weight: FieldUpdate<f64>,
    pub reps: FieldUpdate<i32>,
    pub duration_seconds: FieldUpdate<i32>,
    pub sets: FieldUpdate<i32>,
    pub order: FieldUpdate<i32>,
    pub notes: FieldUpdate<String>,
}

impl ExercisePatch {
    /// Validates the patch.
    ///
    /// Reps and duration must be supplied together, one of them as null, so
    /// the result satisfies the reps-or-duration rule without reading the
    /// stored row.
    pub fn validate(self) -> Result<ExerciseChanges, ValidationError> {
        let exercise_name = self.exercise_name.required("exerciseName")?;
        let sets = self.sets.required("sets")?;
        let order = self.order.required("order")?;

        if let Some(name) = &exercise_name {
            require_non_empty("exerciseName", name)?;
            require_max_chars("exerciseName", name, EXERCISE_NAME_MAX_CHARS)?;
        }
        if let Some(weight) = self.weight.value() {
            require_storable_decimal("weight", *weight, EXERCISE_WEIGHT_COLUMN)?;
        }
        if let Some(reps) = self.reps.value() {
            require_positive_int("reps", *reps)?;
        }
        if let Some(duration) = self.duration_seconds.value() {
            require_positive_int("durationSeconds", *duration)?;
        }

        match (self.reps.is_supplied(), self.duration_seconds.is_supplied()) {
            (false, false) => {}
            (true, true) => {
                check_reps_or_duration(self.reps.cloned_value(), self.duration_seconds.cloned_value())?
            }
            (true, false) | (false, true) => {
                return Err(ValidationError::rule(
                    if self.reps.is_supplied() { "durationSeconds" } else { "reps" },
                    "When updating reps or durationSeconds, provide both fields and set the other to null",
                ));
            }
        }

        if let Some(sets) = sets {
            require_positive_int("sets", sets)?;
        }
        if let Some(order) = order {
            require_positive_int("order", order)?;
        }
        if let Some(notes) = self.notes.value() {
            require_non_empty("notes", notes)?;
            require_max_chars("notes", notes, NOTES_MAX_CHARS)?;
        }

        Ok(ExerciseChanges {
            exercise_name,
            weight: self.weight,
            reps: self.reps,
            duration_seconds: self.duration_seconds,
            sets,
            order,
            notes: self.notes,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn squat() -> ExerciseInput {
        ExerciseInput {
            exercise_name: "squat".to_string(),
            reps: Some(10),
            sets: 3,
            ..Default::default()
        }
    }

    fn session() -> TrainingSessionId {
        TrainingSessionId::from_i32(1)
    }

    #[test]
    fn valid_input_uses_default_order() {
        let new = squat().validate(session(), 4).unwrap();
        assert_eq!(new.order, 4);
        assert_eq!(new.reps, Some(10));
        assert_eq!(new.duration_seconds, None);
    }

    #[test]
    fn explicit_order_wins_over_default() {
        let input = ExerciseInput {
            order: Some(2),
            ..squat()
        };
        assert_eq!(input.validate(session(), 4).unwrap().order, 2);
    }

    #[test]
    fn both_reps_and_duration_are_rejected() {
        let input = ExerciseInput {
            duration_seconds: Some(30),
            ..squat()
        };
        let err = input.validate(session(), 1).unwrap_err();
        assert_eq!(err.to_string(), "Invalid input: Cannot provide both reps and durationSeconds");
    }

    #[test]
    fn neither_reps_nor_duration_is_rejected() {
        let input = ExerciseInput {
            reps: None,
            ..squat()
        };
        assert!(input.validate(session(), 1).is_err());
    }

    #[test]
    fn non_positive_values_are_rejected() {
        let zero_sets = ExerciseInput { sets: 0, ..squat() };
        assert_eq!(zero_sets.validate(session(), 1).unwrap_err().field(), "sets");

        let negative_weight = ExerciseInput {
            weight: Some(-5.0),
            ..squat()
        };
        assert_eq!(negative_weight.validate(session(), 1).unwrap_err().field(), "weight");

        let zero_order = ExerciseInput {
            order: Some(0),
            ..squat()
        };
        assert_eq!(zero_order.validate(session(), 1).unwrap_err().field(), "order");
    }

    #[test]
    fn empty_and_overlong_names_are_rejected() {
        let empty = ExerciseInput {
            exercise_name: String::new(),
            ..squat()
        };
        assert!(empty.validate(session(), 1).is_err());

        let long = ExerciseInput {
            exercise_name: "x".repeat(256),
            ..squat()
        };
        assert!(long.validate(session(), 1).is_err());
    }

    #[test]
    fn patch_with_both_keys_switches_measure() {
        let changes = ExercisePatch {
            reps: FieldUpdate::Set(12),
            duration_seconds: FieldUpdate::Clear,
            ..Default::default()
        }
        .validate()
        .unwrap();
        assert_eq!(changes.reps, FieldUpdate::Set(12));
        assert_eq!(changes.duration_seconds, FieldUpdate::Clear);
    }

    #[test]
    fn patch_with_only_reps_key_is_rejected() {
        let err = ExercisePatch {
            reps: FieldUpdate::Set(12),
            ..Default::default()
        }
        .validate()
        .unwrap_err();
        assert_eq!(err.field(), "durationSeconds");
    }

    #[test]
    fn patch_clearing_both_measures_is_rejected() {
        let result = ExercisePatch {
            reps: FieldUpdate::Clear,
            duration_seconds: FieldUpdate::Clear,
            ..Default::default()
        }
        .validate();
        assert!(result.is_err());
    }

    #[test]
    fn patch_setting_both_measures_is_rejected() {
        let result = ExercisePatch {
            reps: FieldUpdate::Set(5),
            duration_seconds: FieldUpdate::Set(30),
            ..Default::default()
        }
        .validate();
        assert!(result.is_err());
    }

    #[test]
    fn patch_without_measure_keys_is_fine() {
        let changes = ExercisePatch {
            sets: FieldUpdate::Set(4),
            notes: FieldUpdate::Clear,
            ..Default::default()
        }
        .validate()
        .unwrap();
        assert_eq!(changes.sets, Some(4));
        assert!(!changes.reps.is_supplied());
    }

    #[test]
    fn patch_rejects_null_for_required_columns() {
        let null_name = ExercisePatch {
            exercise_name: FieldUpdate::Clear,
            ..Default::default()
        };
        assert_eq!(null_name.validate().unwrap_err().field(), "exerciseName");

        let null_sets = ExercisePatch {
            sets: FieldUpdate::Clear,
            ..Default::default()
        };
        assert_eq!(null_sets.validate().unwrap_err().field(), "sets");

        let null_order = ExercisePatch {
            order: FieldUpdate::Clear,
            ..Default::default()
        };
        assert_eq!(null_order.validate().unwrap_err().field(), "order");
    }

    #[test]
    fn patch_weight_must_fit_the_column() {
        let err = ExercisePatch {
            weight: FieldUpdate::Set(62.345),
            ..Default::default()
        }
        .validate()
        .unwrap_err();
        assert_eq!(err.field(), "weight");
        assert!(ExercisePatch {
            weight: FieldUpdate::Set(62.35),
            ..Default::default()
        }
        .validate()
        .is_ok());
    }

    #[test]
    fn patch_rejects_empty_notes_but_allows_clearing() {
        let empty = ExercisePatch {
            notes: FieldUpdate::Set(String::new()),
            ..Default::default()
        };
        assert!(empty.validate().is_err());

        let cleared = ExercisePatch {
            notes: FieldUpdate::Clear,
            ..Default::default()
        };
        assert!(cleared.validate().is_ok());
    }
}
