//! ReorderExercisesHandler - Command handler for rearranging a session's exercises.

use std::collections::HashSet;
use std::sync::Arc;

use crate::application::finish;
use crate::domain::exercise::{Exercise, ExerciseChanges, ExerciseError};
use crate::domain::foundation::validate::require_positive_int;
use crate::domain::foundation::{ExerciseId, TrainingSessionId, ValidationError};
use crate::ports::{ExerciseRepository, TrainingSessionRepository, TransactionHandle, UnitOfWork};

/// New position for one exercise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExerciseOrderInput {
    pub id: i32,
    pub order: i32,
}

/// Command to set the order of several exercises of one session at once.
#[derive(Debug, Clone)]
pub struct ReorderExercisesCommand {
    pub training_session_id: i32,
    pub exercises: Vec<ExerciseOrderInput>,
}

/// Handler for reordering exercises.
pub struct ReorderExercisesHandler {
    sessions: Arc<dyn TrainingSessionRepository>,
    exercises: Arc<dyn ExerciseRepository>,
    unit_of_work: Arc<dyn UnitOfWork>,
}

impl ReorderExercisesHandler {
    pub fn new(
        sessions: Arc<dyn TrainingSessionRepository>,
        exercises: Arc<dyn ExerciseRepository>,
        unit_of_work: Arc<dyn UnitOfWork>,
    ) -> Self {
        Self {
            sessions,
            exercises,
            unit_of_work,
        }
    }

    /// Returns the session's exercises in their new order.
    pub async fn handle(&self, cmd: ReorderExercisesCommand) -> Result<Vec<Exercise>, ExerciseError> {
        let session_id = TrainingSessionId::parse("trainingSessionId", cmd.training_session_id)?;
        let moves = validate_moves(&cmd.exercises)?;

        if self.sessions.find_by_id(session_id).await?.is_none() {
            return Err(ExerciseError::session_not_found(session_id));
        }

        let owned: HashSet<ExerciseId> = self
            .exercises
            .find_by_training_session_id(session_id)
            .await?
            .iter()
            .map(|e| e.id)
            .collect();
        for (id, _) in &moves {
            if !owned.contains(id) {
                return Err(match self.exercises.find_by_id(*id).await? {
                    Some(_) => ExerciseError::NotInSession {
                        exercise_id: *id,
                        training_session_id: session_id,
                    },
                    None => ExerciseError::not_found(*id),
                });
            }
        }

        let mut tx = self.unit_of_work.begin().await?;
        let outcome = self.apply(&moves, tx.as_mut()).await;
        finish(tx, outcome).await?;

        tracing::info!(
            training_session_id = %session_id,
            moved = moves.len(),
            "Exercises reordered"
        );
        Ok(self.exercises.find_by_training_session_id(session_id).await?)
    }

    async fn apply(
        &self,
        moves: &[(ExerciseId, i32)],
        tx: &mut dyn TransactionHandle,
    ) -> Result<(), ExerciseError> {
        for (id, order) in moves {
            let updated = self
                .exercises
                .update(*id, &ExerciseChanges::reorder(*order), Some(&mut *tx))
                .await?;
            if updated.is_none() {
                return Err(ExerciseError::not_found(*id));
            }
        }
        Ok(())
    }
}

fn validate_moves(inputs: &[ExerciseOrderInput]) -> Result<Vec<(ExerciseId, i32)>, ValidationError> {
    if inputs.is_empty() {
        return Err(ValidationError::empty_field("exercises"));
    }

    let mut seen = HashSet::new();
    inputs
        .iter()
        .enumerate()
        .map(|(index, input)| {
            let position = format!("exercises[{}]", index);
            let id = ExerciseId::parse("id", input.id).map_err(|e| e.within(&position))?;
            let order = require_positive_int("order", input.order).map_err(|e| e.within(&position))?;
            if !seen.insert(id) {
                return Err(ValidationError::rule(
                    "exercises",
                    format!("Exercise {} is listed more than once", id),
                ));
            }
            Ok((id, order))
        })
        .collect()
}
