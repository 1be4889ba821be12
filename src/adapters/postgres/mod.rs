//! PostgreSQL adapters - Database implementations for repository ports.
//!
//! This module provides adapters for PostgreSQL-backed persistence:
//! - `PostgresTrainingSessionRepository` - Training session rows
//! - `PostgresExerciseRepository` - Exercise rows and name/history queries
//! - `PostgresUnitOfWork` - Transactions shared by both repositories
//! - `connect` / `run_migrations` - Pool setup at startup

mod connection;
mod exercise_repository;
mod training_session_repository;

pub use connection::{connect, run_migrations, PgTransaction, PostgresUnitOfWork};
pub use exercise_repository::PostgresExerciseRepository;
pub use training_session_repository::PostgresTrainingSessionRepository;
