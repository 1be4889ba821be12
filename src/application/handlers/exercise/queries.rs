//! Read-only exercise queries.

use std::sync::Arc;

use crate::domain::exercise::{Exercise, ExerciseError, ExerciseHistoryEntry};
use crate::domain::foundation::validate::{require_non_empty, require_page};
use crate::domain::foundation::TrainingSessionId;
use crate::ports::{ExerciseRepository, ListQuery, Page};

/// Distinct exercise names for autocomplete.
pub struct GetExerciseNamesHandler {
    exercises: Arc<dyn ExerciseRepository>,
}

impl GetExerciseNamesHandler {
    pub fn new(exercises: Arc<dyn ExerciseRepository>) -> Self {
        Self { exercises }
    }

    pub async fn handle(&self) -> Result<Vec<String>, ExerciseError> {
        Ok(self.exercises.find_names().await?)
    }
}

/// Query for the exercises of one session.
#[derive(Debug, Clone)]
pub struct ListSessionExercisesQuery {
    pub training_session_id: i32,
}

/// Lists a session's exercises in display order.
pub struct ListSessionExercisesHandler {
    exercises: Arc<dyn ExerciseRepository>,
}

impl ListSessionExercisesHandler {
    pub fn new(exercises: Arc<dyn ExerciseRepository>) -> Self {
        Self { exercises }
    }

    pub async fn handle(
        &self,
        query: ListSessionExercisesQuery,
    ) -> Result<Vec<Exercise>, ExerciseError> {
        let id = TrainingSessionId::parse("trainingSessionId", query.training_session_id)?;
        Ok(self.exercises.find_by_training_session_id(id).await?)
    }
}

/// Query for past performances of one exercise.
#[derive(Debug, Clone)]
pub struct GetExerciseHistoryQuery {
    pub exercise_name: String,
    pub limit: i32,
    pub offset: i32,
}

pub struct GetExerciseHistoryHandler {
    exercises: Arc<dyn ExerciseRepository>,
}

impl GetExerciseHistoryHandler {
    pub fn new(exercises: Arc<dyn ExerciseRepository>) -> Self {
        Self { exercises }
    }

    pub async fn handle(
        &self,
        query: GetExerciseHistoryQuery,
    ) -> Result<Page<ExerciseHistoryEntry>, ExerciseError> {
        require_non_empty("exerciseName", &query.exercise_name)?;
        let (limit, offset) = require_page(query.limit, query.offset)?;
        Ok(self
            .exercises
            .find_history(&query.exercise_name, ListQuery::new(limit, offset))
            .await?)
    }
}
