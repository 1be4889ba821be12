//! Exercise domain module.
//!
//! An exercise belongs to exactly one training session and records either a
//! rep count or a duration, never both.

mod errors;
mod exercise;
mod input;
mod names;

pub use errors::ExerciseError;
pub use exercise::{
    check_reps_or_duration, Exercise, ExerciseChanges, ExerciseHistoryEntry, ExerciseOrderPolicy,
    NewExercise,
};
pub use input::{ExerciseInput, ExercisePatch};
pub use names::{compare_exercise_names, sort_exercise_names};
