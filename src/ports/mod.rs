//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Storage Ports
//!
//! - `TrainingSessionRepository` - Training session persistence and queries
//! - `ExerciseRepository` - Exercise persistence and queries
//! - `UnitOfWork` / `TransactionHandle` - Atomic multi-step writes

mod exercise_repository;
mod paging;
mod training_session_repository;
mod unit_of_work;

pub use exercise_repository::ExerciseRepository;
pub use paging::{DeleteOutcome, ListQuery, Page};
pub use training_session_repository::TrainingSessionRepository;
pub use unit_of_work::{TransactionHandle, UnitOfWork};
