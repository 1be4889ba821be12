//! ListTrainingSessionsHandler - Query handler for paging through sessions.

use std::sync::Arc;

use crate::domain::foundation::validate::require_page;
use crate::domain::training_session::{TrainingSession, TrainingSessionError};
use crate::ports::{ListQuery, Page, TrainingSessionRepository};

/// Query for one page of sessions, newest date first.
#[derive(Debug, Clone)]
pub struct ListTrainingSessionsQuery {
    pub limit: i32,
    pub offset: i32,
}

impl Default for ListTrainingSessionsQuery {
    fn default() -> Self {
        Self {
            limit: 20,
            offset: 0,
        }
    }
}

/// Handler for listing sessions.
pub struct ListTrainingSessionsHandler {
    sessions: Arc<dyn TrainingSessionRepository>,
}

impl ListTrainingSessionsHandler {
    pub fn new(sessions: Arc<dyn TrainingSessionRepository>) -> Self {
        Self { sessions }
    }

    pub async fn handle(
        &self,
        query: ListTrainingSessionsQuery,
    ) -> Result<Page<TrainingSession>, TrainingSessionError> {
        let (limit, offset) = require_page(query.limit, query.offset)?;
        Ok(self.sessions.find_all(ListQuery::new(limit, offset)).await?)
    }
}
