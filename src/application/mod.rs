//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Following CQRS, it separates command handlers (write) from query handlers (read).
//! Every command that writes runs inside one unit of work.

pub mod handlers;

use crate::domain::foundation::DomainError;
use crate::ports::TransactionHandle;

pub use handlers::*;

/// Commits `tx` when `outcome` succeeded, rolls it back otherwise.
///
/// A failed rollback is logged and the original error is returned.
pub(crate) async fn finish<T, E>(
    tx: Box<dyn TransactionHandle>,
    outcome: Result<T, E>,
) -> Result<T, E>
where
    E: From<DomainError>,
{
    match outcome {
        Ok(value) => {
            tx.commit().await?;
            Ok(value)
        }
        Err(err) => {
            if let Err(rollback_err) = tx.rollback().await {
                tracing::warn!(error = %rollback_err, "Failed to roll back transaction");
            }
            Err(err)
        }
    }
}
