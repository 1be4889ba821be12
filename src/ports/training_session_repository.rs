//! Training session repository port.
//!
//! Defines the contract for persisting and querying training sessions.
//!
//! # Design
//!
//! - **Optional transaction**: every write takes `Option<&mut dyn TransactionHandle>`.
//!   `None` runs the statement on its own; `Some` joins the caller's transaction.
//! - **Partial updates**: `TrainingSessionChanges` distinguishes an omitted field
//!   from an explicit null.
//! - **Ordering**: lists come back newest date first.

use async_trait::async_trait;

use super::{DeleteOutcome, ListQuery, Page, TransactionHandle};
use crate::domain::foundation::{DomainError, TrainingDate, TrainingSessionId};
use crate::domain::training_session::{
    NewTrainingSession, TrainingSession, TrainingSessionChanges,
};

/// Repository port for training sessions.
#[async_trait]
pub trait TrainingSessionRepository: Send + Sync {
    /// Insert a new session.
    ///
    /// # Errors
    ///
    /// - `ConstraintViolation` if a session already exists for the date
    /// - `DatabaseError` on persistence failure
    async fn create(
        &self,
        input: &NewTrainingSession,
        tx: Option<&mut dyn TransactionHandle>,
    ) -> Result<TrainingSession, DomainError>;

    /// Insert several sessions in one statement.
    ///
    /// An empty slice returns an empty vector without touching storage.
    async fn create_many(
        &self,
        inputs: &[NewTrainingSession],
        tx: Option<&mut dyn TransactionHandle>,
    ) -> Result<Vec<TrainingSession>, DomainError>;

    /// Find a session by its ID.
    ///
    /// Returns `None` if not found.
    async fn find_by_id(&self, id: TrainingSessionId)
        -> Result<Option<TrainingSession>, DomainError>;

    /// Check that a session exists, seen from inside `tx` when given.
    async fn exists(
        &self,
        id: TrainingSessionId,
        tx: Option<&mut dyn TransactionHandle>,
    ) -> Result<bool, DomainError>;

    /// Page through all sessions, date descending.
    async fn find_all(&self, query: ListQuery) -> Result<Page<TrainingSession>, DomainError>;

    /// Find the session recorded for an exact date.
    async fn find_by_date(&self, date: &TrainingDate)
        -> Result<Option<TrainingSession>, DomainError>;

    /// Sessions whose date falls in the given month, date descending.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` if the month is outside 1..=12
    async fn find_by_month(
        &self,
        year: i32,
        month: u32,
    ) -> Result<Vec<TrainingSession>, DomainError>;

    /// Every recorded session date, newest first.
    async fn find_dates(&self) -> Result<Vec<TrainingDate>, DomainError>;

    /// Apply a partial update.
    ///
    /// Returns `None` if the session doesn't exist.
    async fn update(
        &self,
        id: TrainingSessionId,
        changes: &TrainingSessionChanges,
        tx: Option<&mut dyn TransactionHandle>,
    ) -> Result<Option<TrainingSession>, DomainError>;

    /// Hard delete a session. Its exercises are removed with it.
    async fn delete_by_id(
        &self,
        id: TrainingSessionId,
        tx: Option<&mut dyn TransactionHandle>,
    ) -> Result<DeleteOutcome<TrainingSessionId>, DomainError>;
}
