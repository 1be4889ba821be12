//! In-memory implementation of ExerciseRepository.

use async_trait::async_trait;

use super::store::{InMemoryStore, StoreState};
use crate::domain::exercise::{
    sort_exercise_names, Exercise, ExerciseChanges, ExerciseHistoryEntry, NewExercise,
};
use crate::domain::foundation::{DomainError, ExerciseId, TrainingSessionId};
use crate::ports::{DeleteOutcome, ExerciseRepository, ListQuery, Page, TransactionHandle};

/// In-memory exercise repository sharing state with the session repository.
#[derive(Debug, Clone)]
pub struct InMemoryExerciseRepository {
    store: InMemoryStore,
}

impl InMemoryExerciseRepository {
    pub fn new(store: InMemoryStore) -> Self {
        Self { store }
    }
}

fn in_list_order(state: &StoreState, keep: impl Fn(&Exercise) -> bool) -> Vec<Exercise> {
    let mut exercises: Vec<Exercise> = state.exercises.values().filter(|e| keep(e)).cloned().collect();
    exercises.sort_by_key(|e| (e.order, e.id));
    exercises
}

#[async_trait]
impl ExerciseRepository for InMemoryExerciseRepository {
    async fn create(
        &self,
        input: &NewExercise,
        tx: Option<&mut dyn TransactionHandle>,
    ) -> Result<Exercise, DomainError> {
        self.store.write(tx, |state| state.insert_exercise(input))
    }

    async fn create_many(
        &self,
        inputs: &[NewExercise],
        tx: Option<&mut dyn TransactionHandle>,
    ) -> Result<Vec<Exercise>, DomainError> {
        if inputs.is_empty() {
            return Ok(Vec::new());
        }
        self.store.write(tx, |state| {
            inputs.iter().map(|input| state.insert_exercise(input)).collect()
        })
    }

    async fn find_by_id(&self, id: ExerciseId) -> Result<Option<Exercise>, DomainError> {
        self.store
            .read(|state| state.exercises.get(&id.value()).cloned())
    }

    async fn find_all(&self, query: ListQuery) -> Result<Page<Exercise>, DomainError> {
        let all = self.store.read(|state| in_list_order(state, |_| true))?;
        Ok(Page::slice(all, query))
    }

    async fn find_by_training_session_id(
        &self,
        training_session_id: TrainingSessionId,
    ) -> Result<Vec<Exercise>, DomainError> {
        self.store.read(|state| {
            in_list_order(state, |e| e.training_session_id == training_session_id)
        })
    }

    async fn find_names(&self) -> Result<Vec<String>, DomainError> {
        let names = self.store.read(|state| {
            state
                .exercises
                .values()
                .map(|e| e.exercise_name.clone())
                .collect::<Vec<_>>()
        })?;
        Ok(sort_exercise_names(names))
    }

    async fn find_history(
        &self,
        exercise_name: &str,
        query: ListQuery,
    ) -> Result<Page<ExerciseHistoryEntry>, DomainError> {
        let mut rows = self.store.read(|state| {
            state
                .exercises
                .values()
                .filter(|e| e.exercise_name == exercise_name)
                .filter_map(|e| {
                    let session = state.sessions.get(&e.training_session_id.value())?;
                    Some((session.date, e.order, e.id, e.clone()))
                })
                .collect::<Vec<_>>()
        })?;
        rows.sort_by(|a, b| b.0.cmp(&a.0).then(a.1.cmp(&b.1)).then(a.2.cmp(&b.2)));

        let entries = rows
            .into_iter()
            .map(|(date, _, _, e)| ExerciseHistoryEntry {
                date,
                weight: e.weight,
                reps: e.reps,
                duration_seconds: e.duration_seconds,
                sets: e.sets,
            })
            .collect();
        Ok(Page::slice(entries, query))
    }

    async fn update(
        &self,
        id: ExerciseId,
        changes: &ExerciseChanges,
        tx: Option<&mut dyn TransactionHandle>,
    ) -> Result<Option<Exercise>, DomainError> {
        self.store.write(tx, |state| state.update_exercise(id, changes))
    }

    async fn delete_by_id(
        &self,
        id: ExerciseId,
        tx: Option<&mut dyn TransactionHandle>,
    ) -> Result<DeleteOutcome<ExerciseId>, DomainError> {
        let removed = self
            .store
            .write(tx, |state| Ok(state.exercises.remove(&id.value()).is_some()))?;
        Ok(if removed {
            DeleteOutcome::deleted(id)
        } else {
            DeleteOutcome::nothing_deleted()
        })
    }
}
