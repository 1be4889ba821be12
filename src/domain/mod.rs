//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (dates, IDs, partial updates, errors)
//! - `training_session` - Training days, their write inputs and streak summaries
//! - `exercise` - Exercises within a session and the reps/duration rule

pub mod exercise;
pub mod foundation;
pub mod training_session;
