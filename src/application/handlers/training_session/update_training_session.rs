//! UpdateTrainingSessionHandler - Command handler for partial session updates.

use std::sync::Arc;

use crate::application::finish;
use crate::domain::foundation::validate::{
    require_max_chars, require_storable_decimal, BODY_WEIGHT_COLUMN, NOTES_MAX_CHARS,
};
use crate::domain::foundation::{
    ErrorCode, FieldUpdate, TrainingDate, TrainingSessionId, ValidationError,
};
use crate::domain::training_session::{
    TrainingSession, TrainingSessionChanges, TrainingSessionError,
};
use crate::ports::{TrainingSessionRepository, UnitOfWork};

/// Command to change some fields of a session.
///
/// `body_weight` and `notes` distinguish "leave alone" from "clear".
/// `date` cannot be cleared, so `FieldUpdate::Clear` is rejected for it.
#[derive(Debug, Clone, Default)]
pub struct UpdateTrainingSessionCommand {
    pub id: i32,
    pub date: FieldUpdate<String>,
    pub body_weight: FieldUpdate<f64>,
    pub notes: FieldUpdate<String>,
}

/// Handler for updating training sessions.
pub struct UpdateTrainingSessionHandler {
    sessions: Arc<dyn TrainingSessionRepository>,
    unit_of_work: Arc<dyn UnitOfWork>,
}

impl UpdateTrainingSessionHandler {
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
        cmd: UpdateTrainingSessionCommand,
    ) -> Result<TrainingSession, TrainingSessionError> {
        let id = TrainingSessionId::parse("id", cmd.id)?;
        let changes = validate_changes(cmd)?;

        // Moving onto a date owned by another session would break uniqueness
        if let Some(date) = changes.date {
            if let Some(existing) = self.sessions.find_by_date(&date).await? {
                if existing.id != id {
                    return Err(TrainingSessionError::duplicate_date(date));
                }
            }
        }

        let mut tx = self.unit_of_work.begin().await?;
        let outcome = self
            .sessions
            .update(id, &changes, Some(tx.as_mut()))
            .await
            .map_err(|e| match (e.code, changes.date) {
                (ErrorCode::ConstraintViolation, Some(date)) => {
                    TrainingSessionError::duplicate_date(date)
                }
                _ => TrainingSessionError::from(e),
            })
            .and_then(|updated| updated.ok_or_else(|| TrainingSessionError::not_found(id)));
        let session = finish(tx, outcome).await?;

        tracing::info!(training_session_id = %session.id, "Training session updated");
        Ok(session)
    }
}

fn validate_changes(
    cmd: UpdateTrainingSessionCommand,
) -> Result<TrainingSessionChanges, ValidationError> {
    let date = cmd
        .date
        .required("date")?
        .map(|raw| TrainingDate::parse_field("date", &raw))
        .transpose()?;
    if let Some(weight) = cmd.body_weight.value() {
        require_storable_decimal("bodyWeight", *weight, BODY_WEIGHT_COLUMN)?;
    }
    if let Some(notes) = cmd.notes.value() {
        require_max_chars("notes", notes, NOTES_MAX_CHARS)?;
    }

    let changes = TrainingSessionChanges {
        date,
        body_weight: cmd.body_weight,
        notes: cmd.notes,
    };
    if changes.is_empty() {
        return Err(ValidationError::rule(
            "input",
            "At least one of date, bodyWeight or notes must be provided",
        ));
    }
    Ok(changes)
}
