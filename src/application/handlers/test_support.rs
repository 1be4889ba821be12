//! Shared fixtures for handler tests.

use std::sync::Arc;

use crate::adapters::memory::{
    InMemoryExerciseRepository, InMemoryStore, InMemoryTrainingSessionRepository,
    InMemoryUnitOfWork,
};
use crate::domain::exercise::{Exercise, ExerciseInput, NewExercise};
use crate::domain::foundation::TrainingDate;
use crate::domain::training_session::{NewTrainingSession, TrainingSession};
use crate::ports::{ExerciseRepository, TrainingSessionRepository, UnitOfWork};

/// In-memory ports sharing one store.
pub(crate) struct Ports {
    pub store: InMemoryStore,
    pub sessions: Arc<dyn TrainingSessionRepository>,
    pub exercises: Arc<dyn ExerciseRepository>,
    pub uow: Arc<dyn UnitOfWork>,
}

impl Ports {
    pub fn new() -> Self {
        let store = InMemoryStore::new();
        Self {
            sessions: Arc::new(InMemoryTrainingSessionRepository::new(store.clone())),
            exercises: Arc::new(InMemoryExerciseRepository::new(store.clone())),
            uow: Arc::new(InMemoryUnitOfWork::new(store.clone())),
            store,
        }
    }

    pub async fn seed_session(&self, date: &str) -> TrainingSession {
        self.sessions
            .create(
                &NewTrainingSession {
                    date: TrainingDate::parse(date).unwrap(),
                    body_weight: None,
                    notes: None,
                },
                None,
            )
            .await
            .unwrap()
    }

    pub async fn seed_exercise(&self, session: &TrainingSession, name: &str, order: i32) -> Exercise {
        self.exercises
            .create(
                &NewExercise {
                    training_session_id: session.id,
                    exercise_name: name.to_string(),
                    weight: Some(60.0),
                    reps: Some(8),
                    duration_seconds: None,
                    sets: 3,
                    order,
                    notes: None,
                },
                None,
            )
            .await
            .unwrap()
    }
}

pub(crate) fn exercise_input(name: &str) -> ExerciseInput {
    ExerciseInput {
        exercise_name: name.to_string(),
        reps: Some(10),
        sets: 3,
        ..Default::default()
    }
}
