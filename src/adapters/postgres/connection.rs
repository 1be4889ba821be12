//! Pool setup, transactions and row helpers shared by the Postgres repositories.

use std::any::Any;

use async_trait::async_trait;
use secrecy::ExposeSecret;
use sqlx::pool::PoolConnection;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions, PgRow};
use sqlx::{PgConnection, PgPool, Postgres, Row};

use crate::config::DatabaseConfig;
use crate::domain::foundation::{DomainError, ErrorCode};
use crate::ports::{TransactionHandle, UnitOfWork};

/// Opens the connection pool described by `config`.
pub async fn connect(config: &DatabaseConfig) -> Result<PgPool, DomainError> {
    let options = match &config.url {
        Some(url) => url
            .expose_secret()
            .parse::<PgConnectOptions>()
            .map_err(|e| DomainError::database("Invalid database URL", e))?,
        None => PgConnectOptions::new()
            .host(&config.host)
            .port(config.port)
            .database(&config.name)
            .username(&config.user)
            .password(config.password.expose_secret()),
    };

    PgPoolOptions::new()
        .min_connections(config.min_connections)
        .max_connections(config.max_connections)
        .acquire_timeout(config.acquire_timeout())
        .idle_timeout(config.idle_timeout())
        .max_lifetime(config.max_lifetime())
        .connect_with(options)
        .await
        .map_err(|e| DomainError::database("Failed to connect to database", e))
}

/// Applies the schema migrations in `migrations/`.
pub async fn run_migrations(pool: &PgPool) -> Result<(), DomainError> {
    sqlx::migrate!("./migrations")
        .run(pool)
        .await
        .map_err(|e| DomainError::database("Failed to run migrations", e))
}

// ════════════════════════════════════════════════════════════════════════════
// Transactions
// ════════════════════════════════════════════════════════════════════════════

/// An open Postgres transaction.
pub struct PgTransaction {
    inner: sqlx::Transaction<'static, Postgres>,
}

impl PgTransaction {
    fn from_handle(handle: &mut dyn TransactionHandle) -> Result<&mut PgTransaction, DomainError> {
        handle
            .as_any_mut()
            .downcast_mut::<PgTransaction>()
            .ok_or_else(|| {
                DomainError::new(
                    ErrorCode::InternalError,
                    "transaction handle was not opened by the Postgres unit of work",
                )
            })
    }
}

#[async_trait]
impl TransactionHandle for PgTransaction {
    async fn commit(self: Box<Self>) -> Result<(), DomainError> {
        self.inner
            .commit()
            .await
            .map_err(|e| DomainError::database("Failed to commit transaction", e))
    }

    async fn rollback(self: Box<Self>) -> Result<(), DomainError> {
        self.inner
            .rollback()
            .await
            .map_err(|e| DomainError::database("Failed to roll back transaction", e))
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// `UnitOfWork` backed by a Postgres pool.
#[derive(Clone)]
pub struct PostgresUnitOfWork {
    pool: PgPool,
}

impl PostgresUnitOfWork {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UnitOfWork for PostgresUnitOfWork {
    async fn begin(&self) -> Result<Box<dyn TransactionHandle>, DomainError> {
        let inner = self
            .pool
            .begin()
            .await
            .map_err(|e| DomainError::database("Failed to begin transaction", e))?;
        Ok(Box::new(PgTransaction { inner }))
    }
}

/// Connection for one repository call: the caller's transaction, or a
/// pooled connection running in autocommit mode.
pub(crate) enum Conn<'a> {
    Joined(&'a mut PgConnection),
    Pooled(PoolConnection<Postgres>),
}

impl Conn<'_> {
    pub(crate) fn get(&mut self) -> &mut PgConnection {
        match self {
            Conn::Joined(conn) => &mut **conn,
            Conn::Pooled(conn) => &mut **conn,
        }
    }
}

pub(crate) async fn conn<'a>(
    pool: &PgPool,
    tx: Option<&'a mut dyn TransactionHandle>,
) -> Result<Conn<'a>, DomainError> {
    match tx {
        Some(handle) => {
            let tx = PgTransaction::from_handle(handle)?;
            Ok(Conn::Joined(&mut *tx.inner))
        }
        None => pool
            .acquire()
            .await
            .map(Conn::Pooled)
            .map_err(|e| DomainError::database("Failed to acquire connection", e)),
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Helper functions
// ════════════════════════════════════════════════════════════════════════════

const UNIQUE_VIOLATION: &str = "23505";
const FOREIGN_KEY_VIOLATION: &str = "23503";
const CHECK_VIOLATION: &str = "23514";
const NUMERIC_VALUE_OUT_OF_RANGE: &str = "22003";

/// Maps a sqlx error, reporting unique, foreign key and check violations
/// as `ConstraintViolation`.
pub(crate) fn map_db_error(context: &str, err: sqlx::Error) -> DomainError {
    map_write_error(context, "value", err)
}

/// Like `map_db_error`, reporting a value too large for its `NUMERIC`
/// column as a validation failure on `numeric_field`.
pub(crate) fn map_write_error(context: &str, numeric_field: &str, err: sqlx::Error) -> DomainError {
    if let sqlx::Error::Database(db) = &err {
        let code = db.code();
        if let Some(mapped) =
            classify_db_error(context, code.as_deref(), db.message(), db.constraint(), numeric_field)
        {
            return mapped;
        }
    }
    DomainError::database(context, err)
}

fn classify_db_error(
    context: &str,
    sqlstate: Option<&str>,
    message: &str,
    constraint: Option<&str>,
    numeric_field: &str,
) -> Option<DomainError> {
    match sqlstate? {
        UNIQUE_VIOLATION | FOREIGN_KEY_VIOLATION | CHECK_VIOLATION => {
            let mut mapped = DomainError::new(
                ErrorCode::ConstraintViolation,
                format!("{}: {}", context, message),
            );
            if let Some(constraint) = constraint {
                mapped = mapped.with_detail("constraint", constraint);
            }
            Some(mapped)
        }
        NUMERIC_VALUE_OUT_OF_RANGE => Some(DomainError::validation(
            numeric_field,
            format!("{}: {}", context, message),
        )),
        _ => None,
    }
}

/// Reads one column, reporting decode failures as `DatabaseError`.
pub(crate) fn column<'r, T>(row: &'r PgRow, name: &str) -> Result<T, DomainError>
where
    T: sqlx::Decode<'r, Postgres> + sqlx::Type<Postgres>,
{
    row.try_get(name)
        .map_err(|e| DomainError::database(&format!("Failed to get {}", name), e))
}
