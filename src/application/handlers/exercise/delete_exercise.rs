//! DeleteExerciseHandler - Command handler for removing one exercise.

use std::sync::Arc;

use crate::application::finish;
use crate::domain::exercise::ExerciseError;
use crate::domain::foundation::ExerciseId;
use crate::ports::{DeleteOutcome, ExerciseRepository, UnitOfWork};

/// Command to delete an exercise.
#[derive(Debug, Clone)]
pub struct DeleteExerciseCommand {
    pub id: i32,
}

/// Handler for deleting exercises.
pub struct DeleteExerciseHandler {
    exercises: Arc<dyn ExerciseRepository>,
    unit_of_work: Arc<dyn UnitOfWork>,
}

impl DeleteExerciseHandler {
    pub fn new(exercises: Arc<dyn ExerciseRepository>, unit_of_work: Arc<dyn UnitOfWork>) -> Self {
        Self {
            exercises,
            unit_of_work,
        }
    }

    pub async fn handle(
        &self,
        cmd: DeleteExerciseCommand,
    ) -> Result<DeleteOutcome<ExerciseId>, ExerciseError> {
        let id = ExerciseId::parse("id", cmd.id)?;

        let mut tx = self.unit_of_work.begin().await?;
        let outcome = self
            .exercises
            .delete_by_id(id, Some(tx.as_mut()))
            .await
            .map_err(ExerciseError::from)
            .and_then(|deleted| {
                if deleted.success {
                    Ok(deleted)
                } else {
                    Err(ExerciseError::not_found(id))
                }
            });
        let deleted = finish(tx, outcome).await?;

        tracing::info!(exercise_id = %id, "Exercise deleted");
        Ok(deleted)
    }
}
