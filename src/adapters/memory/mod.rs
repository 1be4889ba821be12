//! In-memory storage adapters.
//!
//! Implements the repository and unit-of-work ports over one shared
//! `InMemoryStore`, enforcing the same constraints as the database schema.

mod exercise_repository;
mod store;
mod training_session_repository;

pub use exercise_repository::InMemoryExerciseRepository;
pub use store::{InMemoryStore, InMemoryUnitOfWork, MemoryTransaction};
pub use training_session_repository::InMemoryTrainingSessionRepository;
