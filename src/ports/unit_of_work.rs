//! Unit of work port.
//!
//! Use cases that write more than one row open a transaction through
//! `UnitOfWork::begin` and pass the handle to every repository call, so all
//! writes commit or roll back together.
//!
//! # Design
//!
//! - **Adapter-owned handles**: each adapter recovers its own concrete handle
//!   type through `as_any_mut`; passing a handle from a different adapter is
//!   reported as an internal error.
//! - **Drop rolls back**: a handle dropped without `commit` discards its writes.

use std::any::Any;

use async_trait::async_trait;

use crate::domain::foundation::DomainError;

/// An open transaction.
#[async_trait]
pub trait TransactionHandle: Send {
    /// Makes every write performed through this handle durable.
    async fn commit(self: Box<Self>) -> Result<(), DomainError>;

    /// Discards every write performed through this handle.
    async fn rollback(self: Box<Self>) -> Result<(), DomainError>;

    /// Access to the concrete handle for the adapter that created it.
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

/// Opens transactions.
#[async_trait]
pub trait UnitOfWork: Send + Sync {
    /// Begins a new transaction.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` if no connection could be obtained
    async fn begin(&self) -> Result<Box<dyn TransactionHandle>, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_of_work_is_object_safe() {
        fn _accepts_dyn(_uow: &dyn UnitOfWork) {}
    }

    #[test]
    fn transaction_handle_is_object_safe() {
        fn _accepts_dyn(_tx: Box<dyn TransactionHandle>) {}
    }
}
