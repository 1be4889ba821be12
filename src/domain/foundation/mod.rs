//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, validators and error types
//! that form the vocabulary of the training log domain.

mod errors;
mod field_update;
mod ids;
mod timestamp;
mod training_date;
pub mod validate;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use field_update::FieldUpdate;
pub use ids::{ExerciseId, TrainingSessionId};
pub use timestamp::Timestamp;
pub use training_date::{has_date_shape, month_bounds, TrainingDate};
