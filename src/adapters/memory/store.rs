//! Shared in-memory state and its transactions.
//!
//! The store behaves like the relational schema: session dates are unique,
//! exercises need an existing session, the `sets`/reps-or-duration checks
//! apply and deleting a session cascades to its exercises.
//!
//! A transaction works on a private copy of the state. Commit replaces the
//! shared state with the copy; rollback (or drop) discards it. Every write
//! that reaches the shared state bumps its generation, and a transaction that
//! wrote fails to commit if the generation moved since it began.

use std::any::Any;
use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;

use crate::domain::exercise::{Exercise, ExerciseChanges, NewExercise};
use crate::domain::foundation::{
    DomainError, ErrorCode, ExerciseId, Timestamp, TrainingSessionId,
};
use crate::domain::training_session::{
    NewTrainingSession, TrainingSession, TrainingSessionChanges,
};
use crate::ports::{TransactionHandle, UnitOfWork};

/// Rows held by the store.
#[derive(Debug, Clone, Default)]
pub(crate) struct StoreState {
    pub(crate) sessions: BTreeMap<i32, TrainingSession>,
    pub(crate) exercises: BTreeMap<i32, Exercise>,
    last_session_id: i32,
    last_exercise_id: i32,
    generation: u64,
}

impl StoreState {
    pub(crate) fn insert_session(
        &mut self,
        input: &NewTrainingSession,
    ) -> Result<TrainingSession, DomainError> {
        if self.sessions.values().any(|s| s.date == input.date) {
            return Err(unique_date_violation(&input.date.to_string()));
        }
        self.last_session_id += 1;
        let now = Timestamp::now();
        let session = TrainingSession {
            id: TrainingSessionId::from_i32(self.last_session_id),
            date: input.date,
            body_weight: input.body_weight,
            notes: input.notes.clone(),
            created_at: now,
            updated_at: now,
        };
        self.sessions.insert(self.last_session_id, session.clone());
        Ok(session)
    }

    pub(crate) fn update_session(
        &mut self,
        id: TrainingSessionId,
        changes: &TrainingSessionChanges,
    ) -> Result<Option<TrainingSession>, DomainError> {
        let Some(current) = self.sessions.get(&id.value()) else {
            return Ok(None);
        };
        let mut updated = current.clone();
        changes.clone().apply_to(&mut updated);

        let clashes = self
            .sessions
            .values()
            .any(|s| s.id != id && s.date == updated.date);
        if clashes {
            return Err(unique_date_violation(&updated.date.to_string()));
        }

        updated.updated_at = Timestamp::now();
        self.sessions.insert(id.value(), updated.clone());
        Ok(Some(updated))
    }

    /// Removes the session and every exercise that references it.
    pub(crate) fn delete_session(&mut self, id: TrainingSessionId) -> bool {
        if self.sessions.remove(&id.value()).is_none() {
            return false;
        }
        self.exercises.retain(|_, e| e.training_session_id != id);
        true
    }

    pub(crate) fn insert_exercise(&mut self, input: &NewExercise) -> Result<Exercise, DomainError> {
        if !self.sessions.contains_key(&input.training_session_id.value()) {
            return Err(DomainError::new(
                ErrorCode::ConstraintViolation,
                format!(
                    "exercises.training_session_id references missing training session {}",
                    input.training_session_id
                ),
            ));
        }
        let now = Timestamp::now();
        let exercise = Exercise {
            id: ExerciseId::from_i32(self.last_exercise_id + 1),
            training_session_id: input.training_session_id,
            exercise_name: input.exercise_name.clone(),
            weight: input.weight,
            reps: input.reps,
            duration_seconds: input.duration_seconds,
            sets: input.sets,
            order: input.order,
            notes: input.notes.clone(),
            created_at: now,
            updated_at: now,
        };
        check_exercise_row(&exercise)?;

        self.last_exercise_id += 1;
        self.exercises.insert(self.last_exercise_id, exercise.clone());
        Ok(exercise)
    }

    pub(crate) fn update_exercise(
        &mut self,
        id: ExerciseId,
        changes: &ExerciseChanges,
    ) -> Result<Option<Exercise>, DomainError> {
        let Some(current) = self.exercises.get(&id.value()) else {
            return Ok(None);
        };
        let mut updated = current.clone();
        changes.clone().apply_to(&mut updated);
        check_exercise_row(&updated)?;

        updated.updated_at = Timestamp::now();
        self.exercises.insert(id.value(), updated.clone());
        Ok(Some(updated))
    }
}

fn unique_date_violation(date: &str) -> DomainError {
    DomainError::new(
        ErrorCode::ConstraintViolation,
        format!("training_sessions.date must be unique, {} already exists", date),
    )
}

fn check_exercise_row(exercise: &Exercise) -> Result<(), DomainError> {
    if !exercise.passes_storage_checks() {
        return Err(DomainError::new(
            ErrorCode::ConstraintViolation,
            "exercises row violates chk_exercises_sets_positive or chk_exercises_reps_or_duration",
        ));
    }
    Ok(())
}

fn concurrent_commit() -> DomainError {
    DomainError::new(
        ErrorCode::DatabaseError,
        "transaction conflicts with a concurrent write, retry it",
    )
}

fn lock_poisoned() -> DomainError {
    DomainError::new(ErrorCode::InternalError, "in-memory store lock poisoned")
}

/// Cheaply cloneable handle to the shared state.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    state: Arc<RwLock<StoreState>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs a read against committed state.
    pub(crate) fn read<R>(&self, f: impl FnOnce(&StoreState) -> R) -> Result<R, DomainError> {
        let guard = self.state.read().map_err(|_| lock_poisoned())?;
        Ok(f(&guard))
    }

    /// Runs a read, seeing uncommitted writes of `tx` when given.
    pub(crate) fn read_in<R>(
        &self,
        tx: Option<&mut dyn TransactionHandle>,
        f: impl FnOnce(&StoreState) -> R,
    ) -> Result<R, DomainError> {
        match tx {
            Some(handle) => Ok(f(&MemoryTransaction::from_handle(handle)?.working)),
            None => self.read(f),
        }
    }

    /// Runs a write inside `tx`, or as its own atomic step when `tx` is `None`.
    pub(crate) fn write<R>(
        &self,
        tx: Option<&mut dyn TransactionHandle>,
        f: impl FnOnce(&mut StoreState) -> Result<R, DomainError>,
    ) -> Result<R, DomainError> {
        match tx {
            Some(handle) => {
                let tx = MemoryTransaction::from_handle(handle)?;
                tx.wrote = true;
                f(&mut tx.working)
            }
            None => {
                let mut guard = self.state.write().map_err(|_| lock_poisoned())?;
                let mut working = guard.clone();
                let result = f(&mut working)?;
                working.generation += 1;
                *guard = working;
                Ok(result)
            }
        }
    }

    /// Number of stored sessions, for test assertions.
    pub fn session_count(&self) -> usize {
        self.read(|state| state.sessions.len()).unwrap_or_default()
    }

    /// Number of stored exercises, for test assertions.
    pub fn exercise_count(&self) -> usize {
        self.read(|state| state.exercises.len()).unwrap_or_default()
    }
}

/// Transaction over an `InMemoryStore`.
pub struct MemoryTransaction {
    store: Arc<RwLock<StoreState>>,
    working: StoreState,
    wrote: bool,
}

impl MemoryTransaction {
    fn from_handle(handle: &mut dyn TransactionHandle) -> Result<&mut MemoryTransaction, DomainError> {
        handle
            .as_any_mut()
            .downcast_mut::<MemoryTransaction>()
            .ok_or_else(|| {
                DomainError::new(
                    ErrorCode::InternalError,
                    "transaction handle was not opened by the in-memory store",
                )
            })
    }
}

#[async_trait]
impl TransactionHandle for MemoryTransaction {
    async fn commit(self: Box<Self>) -> Result<(), DomainError> {
        let MemoryTransaction { store, mut working, wrote } = *self;
        if !wrote {
            return Ok(());
        }
        let mut guard = store.write().map_err(|_| lock_poisoned())?;
        if guard.generation != working.generation {
            return Err(concurrent_commit());
        }
        working.generation += 1;
        *guard = working;
        Ok(())
    }

    async fn rollback(self: Box<Self>) -> Result<(), DomainError> {
        Ok(())
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// `UnitOfWork` over an `InMemoryStore`.
#[derive(Debug, Clone)]
pub struct InMemoryUnitOfWork {
    store: InMemoryStore,
}

impl InMemoryUnitOfWork {
    pub fn new(store: InMemoryStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl UnitOfWork for InMemoryUnitOfWork {
    async fn begin(&self) -> Result<Box<dyn TransactionHandle>, DomainError> {
        let working = self.store.read(StoreState::clone)?;
        Ok(Box::new(MemoryTransaction {
            store: Arc::clone(&self.store.state),
            working,
            wrote: false,
        }))
    }
}
