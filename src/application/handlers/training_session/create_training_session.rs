//! CreateTrainingSessionHandler - Command handler for recording a day of training.
//!
//! The session row and all of its exercises are written in one transaction:
//! either everything is stored or nothing is.

use std::sync::Arc;

use crate::application::finish;
use crate::domain::exercise::{Exercise, ExerciseInput};
use crate::domain::foundation::validate::{
    require_max_chars, require_storable_decimal, BODY_WEIGHT_COLUMN, NOTES_MAX_CHARS,
};
use crate::domain::foundation::{ErrorCode, TrainingDate, ValidationError};
use crate::domain::training_session::{
    NewTrainingSession, TrainingSession, TrainingSessionError,
};
use crate::ports::{ExerciseRepository, TrainingSessionRepository, TransactionHandle, UnitOfWork};

/// Command to create a session together with its exercises.
#[derive(Debug, Clone)]
pub struct CreateTrainingSessionCommand {
    pub date: String,
    pub body_weight: Option<f64>,
    pub notes: Option<String>,
    pub exercises: Vec<ExerciseInput>,
}

/// Result of successful session creation.
#[derive(Debug, Clone)]
pub struct CreateTrainingSessionResult {
    pub session: TrainingSession,
    pub exercises: Vec<Exercise>,
}

/// Handler for creating training sessions.
pub struct CreateTrainingSessionHandler {
    sessions: Arc<dyn TrainingSessionRepository>,
    exercises: Arc<dyn ExerciseRepository>,
    unit_of_work: Arc<dyn UnitOfWork>,
}

impl CreateTrainingSessionHandler {
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

    pub async fn handle(
        &self,
        cmd: CreateTrainingSessionCommand,
    ) -> Result<CreateTrainingSessionResult, TrainingSessionError> {
        // 1. Validate everything before touching storage
        let new_session = validate_session(&cmd)?;
        if cmd.exercises.is_empty() {
            return Err(ValidationError::rule(
                "exercises",
                "A training session needs at least one exercise",
            )
            .into());
        }
        for (index, exercise) in cmd.exercises.iter().enumerate() {
            exercise
                .check()
                .map_err(|e| e.within(&format!("exercises[{}]", index)))?;
        }

        // 2. One session per date
        if self.sessions.find_by_date(&new_session.date).await?.is_some() {
            return Err(TrainingSessionError::duplicate_date(new_session.date));
        }

        // 3. Write session and exercises together
        let mut tx = self.unit_of_work.begin().await?;
        let outcome = self.write(&new_session, cmd.exercises, tx.as_mut()).await;
        let result = finish(tx, outcome).await?;

        tracing::info!(
            training_session_id = %result.session.id,
            date = %result.session.date,
            exercises = result.exercises.len(),
            "Training session created"
        );

        Ok(result)
    }

    async fn write(
        &self,
        new_session: &NewTrainingSession,
        inputs: Vec<ExerciseInput>,
        tx: &mut dyn TransactionHandle,
    ) -> Result<CreateTrainingSessionResult, TrainingSessionError> {
        let session = self
            .sessions
            .create(new_session, Some(&mut *tx))
            .await
            .map_err(|e| match e.code {
                // Lost a race with a concurrent create for the same date
                ErrorCode::ConstraintViolation => {
                    TrainingSessionError::duplicate_date(new_session.date)
                }
                _ => e.into(),
            })?;

        let new_exercises: Vec<_> = inputs
            .into_iter()
            .enumerate()
            .map(|(index, input)| input.into_new_exercise(session.id, index as i32 + 1))
            .collect();

        let exercises = self
            .exercises
            .create_many(&new_exercises, Some(&mut *tx))
            .await?;

        Ok(CreateTrainingSessionResult { session, exercises })
    }
}

fn validate_session(
    cmd: &CreateTrainingSessionCommand,
) -> Result<NewTrainingSession, ValidationError> {
    let date = TrainingDate::parse_field("date", &cmd.date)?;
    if let Some(weight) = cmd.body_weight {
        require_storable_decimal("bodyWeight", weight, BODY_WEIGHT_COLUMN)?;
    }
    if let Some(notes) = &cmd.notes {
        require_max_chars("notes", notes, NOTES_MAX_CHARS)?;
    }
    Ok(NewTrainingSession {
        date,
        body_weight: cmd.body_weight,
        notes: cmd.notes.clone(),
    })
}
