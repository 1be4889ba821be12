//! Training session domain module.
//!
//! A training session records one calendar day of training: optional body
//! weight and notes, plus the exercises performed (see `domain::exercise`).
//! At most one session exists per date.

mod errors;
mod session;
mod streak;

pub use errors::TrainingSessionError;
pub use session::{NewTrainingSession, TrainingSession, TrainingSessionChanges};
pub use streak::StreakSummary;
