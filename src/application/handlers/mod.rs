//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod exercise;
pub mod training_session;

#[cfg(test)]
pub(crate) mod test_support;

pub use exercise::*;
pub use training_session::*;
