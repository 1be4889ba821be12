//! Exercise command and query handlers.

mod add_exercise;
mod delete_exercise;
mod queries;
mod reorder_exercises;
mod update_exercise;

pub use add_exercise::{AddExerciseCommand, AddExerciseHandler};
pub use delete_exercise::{DeleteExerciseCommand, DeleteExerciseHandler};
pub use queries::{
    GetExerciseHistoryHandler, GetExerciseHistoryQuery, GetExerciseNamesHandler,
    ListSessionExercisesHandler, ListSessionExercisesQuery,
};
pub use reorder_exercises::{ExerciseOrderInput, ReorderExercisesCommand, ReorderExercisesHandler};
pub use update_exercise::{UpdateExerciseCommand, UpdateExerciseHandler};
