//! Exercise repository port.
//!
//! Exercises are always read in list position order (`order` ascending,
//! then id). Writes follow the same optional-transaction convention as
//! `TrainingSessionRepository`.

use async_trait::async_trait;

use super::{DeleteOutcome, ListQuery, Page, TransactionHandle};
use crate::domain::exercise::{Exercise, ExerciseChanges, ExerciseHistoryEntry, NewExercise};
use crate::domain::foundation::{DomainError, ExerciseId, TrainingSessionId};

/// Repository port for exercises.
#[async_trait]
pub trait ExerciseRepository: Send + Sync {
    /// Insert a new exercise.
    ///
    /// # Errors
    ///
    /// - `ConstraintViolation` if the owning session doesn't exist or a
    ///   storage CHECK rejects the row
    /// - `DatabaseError` on persistence failure
    async fn create(
        &self,
        input: &NewExercise,
        tx: Option<&mut dyn TransactionHandle>,
    ) -> Result<Exercise, DomainError>;

    /// Insert several exercises in one statement.
    ///
    /// An empty slice returns an empty vector without touching storage.
    async fn create_many(
        &self,
        inputs: &[NewExercise],
        tx: Option<&mut dyn TransactionHandle>,
    ) -> Result<Vec<Exercise>, DomainError>;

    /// Find an exercise by its ID.
    async fn find_by_id(&self, id: ExerciseId) -> Result<Option<Exercise>, DomainError>;

    /// Page through all exercises.
    async fn find_all(&self, query: ListQuery) -> Result<Page<Exercise>, DomainError>;

    /// Exercises of one session.
    async fn find_by_training_session_id(
        &self,
        training_session_id: TrainingSessionId,
    ) -> Result<Vec<Exercise>, DomainError>;

    /// Distinct exercise names, sorted for display.
    async fn find_names(&self) -> Result<Vec<String>, DomainError>;

    /// Past performances of one exercise, newest session first.
    async fn find_history(
        &self,
        exercise_name: &str,
        query: ListQuery,
    ) -> Result<Page<ExerciseHistoryEntry>, DomainError>;

    /// Apply a partial update.
    ///
    /// Returns `None` if the exercise doesn't exist.
    async fn update(
        &self,
        id: ExerciseId,
        changes: &ExerciseChanges,
        tx: Option<&mut dyn TransactionHandle>,
    ) -> Result<Option<Exercise>, DomainError>;

    /// Hard delete an exercise.
    async fn delete_by_id(
        &self,
        id: ExerciseId,
        tx: Option<&mut dyn TransactionHandle>,
    ) -> Result<DeleteOutcome<ExerciseId>, DomainError>;
}
