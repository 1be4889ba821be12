//! GraphQL object types.
//!
//! These wrap domain records so the schema can evolve independently of them.

use async_graphql::{Context, Object, Result, SimpleObject};

use super::errors::IntoGraphqlError;
use super::scalars::{GqlDate, GqlDateTime};
use super::GraphqlHandlers;
use crate::application::ListSessionExercisesQuery;
use crate::domain::exercise::{Exercise, ExerciseHistoryEntry};
use crate::domain::training_session::{StreakSummary, TrainingSession};
use crate::ports::{DeleteOutcome, Page};

fn count(n: impl TryInto<i32>) -> i32 {
    n.try_into().unwrap_or(i32::MAX)
}

/// A training session, optionally carrying exercises that were just written.
pub struct GqlTrainingSession {
    session: TrainingSession,
    exercises: Option<Vec<Exercise>>,
}

impl GqlTrainingSession {
    pub fn with_exercises(session: TrainingSession, exercises: Vec<Exercise>) -> Self {
        Self {
            session,
            exercises: Some(exercises),
        }
    }
}

impl From<TrainingSession> for GqlTrainingSession {
    fn from(session: TrainingSession) -> Self {
        Self {
            session,
            exercises: None,
        }
    }
}

#[Object(name = "TrainingSession")]
impl GqlTrainingSession {
    async fn id(&self) -> i32 {
        self.session.id.value()
    }

    async fn date(&self) -> GqlDate {
        self.session.date.into()
    }

    async fn body_weight(&self) -> Option<f64> {
        self.session.body_weight
    }

    async fn notes(&self) -> Option<&str> {
        self.session.notes.as_deref()
    }

    /// Exercises in display order.
    async fn exercises(&self, ctx: &Context<'_>) -> Result<Vec<GqlExercise>> {
        if let Some(exercises) = &self.exercises {
            return Ok(exercises.iter().cloned().map(GqlExercise::from).collect());
        }
        let handlers = ctx.data::<GraphqlHandlers>()?;
        let exercises = handlers
            .list_session_exercises
            .handle(ListSessionExercisesQuery {
                training_session_id: self.session.id.value(),
            })
            .await
            .into_graphql()?;
        Ok(exercises.into_iter().map(GqlExercise::from).collect())
    }

    async fn created_at(&self) -> GqlDateTime {
        self.session.created_at.into()
    }

    async fn updated_at(&self) -> GqlDateTime {
        self.session.updated_at.into()
    }
}

#[derive(SimpleObject)]
#[graphql(name = "Exercise")]
pub struct GqlExercise {
    pub id: i32,
    pub training_session_id: i32,
    pub exercise_name: String,
    pub weight: Option<f64>,
    pub reps: Option<i32>,
    pub duration_seconds: Option<i32>,
    pub sets: i32,
    pub order: i32,
    pub notes: Option<String>,
    pub created_at: GqlDateTime,
    pub updated_at: GqlDateTime,
}

impl From<Exercise> for GqlExercise {
    fn from(e: Exercise) -> Self {
        Self {
            id: e.id.value(),
            training_session_id: e.training_session_id.value(),
            exercise_name: e.exercise_name,
            weight: e.weight,
            reps: e.reps,
            duration_seconds: e.duration_seconds,
            sets: e.sets,
            order: e.order,
            notes: e.notes,
            created_at: e.created_at.into(),
            updated_at: e.updated_at.into(),
        }
    }
}

/// One page of sessions plus the overall count.
#[derive(SimpleObject)]
#[graphql(name = "TrainingSessionList")]
pub struct GqlTrainingSessionList {
    pub total_count: i32,
    pub items: Vec<GqlTrainingSession>,
}

impl From<Page<TrainingSession>> for GqlTrainingSessionList {
    fn from(page: Page<TrainingSession>) -> Self {
        Self {
            total_count: count(page.total_count),
            items: page.items.into_iter().map(GqlTrainingSession::from).collect(),
        }
    }
}

#[derive(SimpleObject)]
#[graphql(name = "DeleteResult")]
pub struct GqlDeleteResult {
    pub success: bool,
    pub deleted_id: Option<i32>,
}

impl GqlDeleteResult {
    pub fn from_outcome<Id>(outcome: DeleteOutcome<Id>, value: impl Fn(Id) -> i32) -> Self {
        Self {
            success: outcome.success,
            deleted_id: outcome.deleted_id.map(value),
        }
    }
}

#[derive(SimpleObject)]
#[graphql(name = "StreakInfo")]
pub struct GqlStreakInfo {
    pub current_streak: i32,
    pub longest_streak: i32,
    pub last_training_date: Option<GqlDate>,
    pub this_month_count: i32,
    pub total_count: i32,
}

impl From<StreakSummary> for GqlStreakInfo {
    fn from(s: StreakSummary) -> Self {
        Self {
            current_streak: count(s.current_streak),
            longest_streak: count(s.longest_streak),
            last_training_date: s.last_training_date.map(GqlDate::from),
            this_month_count: count(s.this_month_count),
            total_count: count(s.total_count),
        }
    }
}

#[derive(SimpleObject)]
#[graphql(name = "ExerciseHistoryItem")]
pub struct GqlExerciseHistoryItem {
    pub date: GqlDate,
    pub weight: Option<f64>,
    pub reps: Option<i32>,
    pub duration_seconds: Option<i32>,
    pub sets: i32,
}

#[derive(SimpleObject)]
#[graphql(name = "ExerciseHistory")]
pub struct GqlExerciseHistory {
    pub total_count: i32,
    pub items: Vec<GqlExerciseHistoryItem>,
}

impl From<Page<ExerciseHistoryEntry>> for GqlExerciseHistory {
    fn from(page: Page<ExerciseHistoryEntry>) -> Self {
        Self {
            total_count: count(page.total_count),
            items: page
                .items
                .into_iter()
                .map(|h| GqlExerciseHistoryItem {
                    date: h.date.into(),
                    weight: h.weight,
                    reps: h.reps,
                    duration_seconds: h.duration_seconds,
                    sets: h.sets,
                })
                .collect(),
        }
    }
}
