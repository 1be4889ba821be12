//! Query handlers for reading single sessions.

use std::sync::Arc;

use crate::domain::foundation::{TrainingDate, TrainingSessionId};
use crate::domain::training_session::{TrainingSession, TrainingSessionError};
use crate::ports::TrainingSessionRepository;

/// Query to look a session up by id.
#[derive(Debug, Clone)]
pub struct GetTrainingSessionQuery {
    pub id: i32,
}

/// Returns `Ok(None)` for an unknown id; absence is not an error for reads.
pub struct GetTrainingSessionHandler {
    sessions: Arc<dyn TrainingSessionRepository>,
}

impl GetTrainingSessionHandler {
    pub fn new(sessions: Arc<dyn TrainingSessionRepository>) -> Self {
        Self { sessions }
    }

    pub async fn handle(
        &self,
        query: GetTrainingSessionQuery,
    ) -> Result<Option<TrainingSession>, TrainingSessionError> {
        let id = TrainingSessionId::parse("id", query.id)?;
        Ok(self.sessions.find_by_id(id).await?)
    }
}

/// Query to look a session up by its calendar date.
#[derive(Debug, Clone)]
pub struct GetTrainingSessionByDateQuery {
    pub date: String,
}

pub struct GetTrainingSessionByDateHandler {
    sessions: Arc<dyn TrainingSessionRepository>,
}

impl GetTrainingSessionByDateHandler {
    pub fn new(sessions: Arc<dyn TrainingSessionRepository>) -> Self {
        Self { sessions }
    }

    pub async fn handle(
        &self,
        query: GetTrainingSessionByDateQuery,
    ) -> Result<Option<TrainingSession>, TrainingSessionError> {
        let date = TrainingDate::parse_field("date", &query.date)?;
        Ok(self.sessions.find_by_date(&date).await?)
    }
}
