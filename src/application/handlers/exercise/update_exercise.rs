//! UpdateExerciseHandler - Command handler for partial exercise updates.

use std::sync::Arc;

use crate::application::finish;
use crate::domain::exercise::{Exercise, ExerciseError, ExercisePatch};
use crate::domain::foundation::ExerciseId;
use crate::ports::{ExerciseRepository, UnitOfWork};

/// Command to change some fields of an exercise.
#[derive(Debug, Clone, Default)]
pub struct UpdateExerciseCommand {
    pub id: i32,
    pub patch: ExercisePatch,
}

/// Handler for updating exercises.
pub struct UpdateExerciseHandler {
    exercises: Arc<dyn ExerciseRepository>,
    unit_of_work: Arc<dyn UnitOfWork>,
}

impl UpdateExerciseHandler {
    pub fn new(exercises: Arc<dyn ExerciseRepository>, unit_of_work: Arc<dyn UnitOfWork>) -> Self {
        Self {
            exercises,
            unit_of_work,
        }
    }

    pub async fn handle(&self, cmd: UpdateExerciseCommand) -> Result<Exercise, ExerciseError> {
        let id = ExerciseId::parse("id", cmd.id)?;
        let changes = cmd.patch.validate()?;

        let mut tx = self.unit_of_work.begin().await?;
        let outcome = self
            .exercises
            .update(id, &changes, Some(tx.as_mut()))
            .await
            .map_err(ExerciseError::from)
            .and_then(|updated| updated.ok_or_else(|| ExerciseError::not_found(id)));
        let exercise = finish(tx, outcome).await?;

        tracing::info!(exercise_id = %exercise.id, "Exercise updated");
        Ok(exercise)
    }
}
