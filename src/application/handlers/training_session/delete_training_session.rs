//! DeleteTrainingSessionHandler - Command handler for removing a session.
//!
//! Exercises go with their session through the storage cascade.

use std::sync::Arc;

use crate::application::finish;
use crate::domain::foundation::TrainingSessionId;
use crate::domain::training_session::TrainingSessionError;
use crate::ports::{DeleteOutcome, TrainingSessionRepository, UnitOfWork};

/// Command to delete a session.
#[derive(Debug, Clone)]
pub struct DeleteTrainingSessionCommand {
    pub id: i32,
}

/// Handler for deleting training sessions.
pub struct DeleteTrainingSessionHandler {
    sessions: Arc<dyn TrainingSessionRepository>,
    unit_of_work: Arc<dyn UnitOfWork>,
}

impl DeleteTrainingSessionHandler {
    pub fn new(
        sessions: Arc<dyn TrainingSessionRepository>,
        unit_of_work: Arc<dyn UnitOfWork>,
    ) -> Self {
        Self {
            sessions,
            unit_of_work,
        }
    }

    pub async fn handle(
        &self,
        cmd: DeleteTrainingSessionCommand,
    ) -> Result<DeleteOutcome<TrainingSessionId>, TrainingSessionError> {
        let id = TrainingSessionId::parse("id", cmd.id)?;

        let mut tx = self.unit_of_work.begin().await?;
        let outcome = self
            .sessions
            .delete_by_id(id, Some(tx.as_mut()))
            .await
            .map_err(TrainingSessionError::from)
            .and_then(|deleted| {
                if deleted.success {
                    Ok(deleted)
                } else {
                    Err(TrainingSessionError::not_found(id))
                }
            });
        let deleted = finish(tx, outcome).await?;

        tracing::info!(training_session_id = %id, "Training session deleted");
        Ok(deleted)
    }
}
