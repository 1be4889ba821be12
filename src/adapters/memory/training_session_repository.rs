//! In-memory implementation of TrainingSessionRepository.

use async_trait::async_trait;

use super::store::InMemoryStore;
use crate::domain::foundation::{month_bounds, DomainError, TrainingDate, TrainingSessionId};
use crate::domain::training_session::{
    NewTrainingSession, TrainingSession, TrainingSessionChanges,
};
use crate::ports::{
    DeleteOutcome, ListQuery, Page, TrainingSessionRepository, TransactionHandle,
};

/// In-memory session repository for tests and local runs without a database.
#[derive(Debug, Clone)]
pub struct InMemoryTrainingSessionRepository {
    store: InMemoryStore,
}

impl InMemoryTrainingSessionRepository {
    pub fn new(store: InMemoryStore) -> Self {
        Self { store }
    }

    fn sorted_by_date_desc(&self) -> Result<Vec<TrainingSession>, DomainError> {
        self.store.read(|state| {
            let mut sessions: Vec<TrainingSession> = state.sessions.values().cloned().collect();
            sessions.sort_by(|a, b| b.date.cmp(&a.date));
            sessions
        })
    }
}

#[async_trait]
impl TrainingSessionRepository for InMemoryTrainingSessionRepository {
    async fn create(
        &self,
        input: &NewTrainingSession,
        tx: Option<&mut dyn TransactionHandle>,
    ) -> Result<TrainingSession, DomainError> {
        self.store.write(tx, |state| state.insert_session(input))
    }

    async fn create_many(
        &self,
        inputs: &[NewTrainingSession],
        tx: Option<&mut dyn TransactionHandle>,
    ) -> Result<Vec<TrainingSession>, DomainError> {
        if inputs.is_empty() {
            return Ok(Vec::new());
        }
        self.store.write(tx, |state| {
            inputs.iter().map(|input| state.insert_session(input)).collect()
        })
    }

    async fn find_by_id(
        &self,
        id: TrainingSessionId,
    ) -> Result<Option<TrainingSession>, DomainError> {
        self.store
            .read(|state| state.sessions.get(&id.value()).cloned())
    }

    async fn exists(
        &self,
        id: TrainingSessionId,
        tx: Option<&mut dyn TransactionHandle>,
    ) -> Result<bool, DomainError> {
        self.store
            .read_in(tx, |state| state.sessions.contains_key(&id.value()))
    }

    async fn find_all(&self, query: ListQuery) -> Result<Page<TrainingSession>, DomainError> {
        Ok(Page::slice(self.sorted_by_date_desc()?, query))
    }

    async fn find_by_date(
        &self,
        date: &TrainingDate,
    ) -> Result<Option<TrainingSession>, DomainError> {
        self.store
            .read(|state| state.sessions.values().find(|s| s.date == *date).cloned())
    }

    async fn find_by_month(
        &self,
        year: i32,
        month: u32,
    ) -> Result<Vec<TrainingSession>, DomainError> {
        let (start, end) = month_bounds(year, month)?;
        Ok(self
            .sorted_by_date_desc()?
            .into_iter()
            .filter(|s| s.date.as_naive() >= start && s.date.as_naive() < end)
            .collect())
    }

    async fn find_dates(&self) -> Result<Vec<TrainingDate>, DomainError> {
        Ok(self
            .sorted_by_date_desc()?
            .into_iter()
            .map(|s| s.date)
            .collect())
    }

    async fn update(
        &self,
        id: TrainingSessionId,
        changes: &TrainingSessionChanges,
        tx: Option<&mut dyn TransactionHandle>,
    ) -> Result<Option<TrainingSession>, DomainError> {
        self.store.write(tx, |state| state.update_session(id, changes))
    }

    async fn delete_by_id(
        &self,
        id: TrainingSessionId,
        tx: Option<&mut dyn TransactionHandle>,
    ) -> Result<DeleteOutcome<TrainingSessionId>, DomainError> {
        let deleted = self.store.write(tx, |state| Ok(state.delete_session(id)))?;
        Ok(if deleted {
            DeleteOutcome::deleted(id)
        } else {
            DeleteOutcome::nothing_deleted()
        })
    }
}
