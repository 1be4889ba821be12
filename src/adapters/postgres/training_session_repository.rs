//! PostgreSQL implementation of TrainingSessionRepository.
//!
//! `body_weight` is stored as `NUMERIC(4,1)` and read back as `float8`.

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Postgres, QueryBuilder};

use super::connection::{column, conn, map_db_error, map_write_error};
use crate::domain::foundation::{
    month_bounds, DomainError, Timestamp, TrainingDate, TrainingSessionId,
};
use crate::domain::training_session::{
    NewTrainingSession, TrainingSession, TrainingSessionChanges,
};
use crate::ports::{
    DeleteOutcome, ListQuery, Page, TrainingSessionRepository, TransactionHandle,
};

const SESSION_COLUMNS: &str =
    "id, date, body_weight::float8 AS body_weight, notes, created_at, updated_at";

/// PostgreSQL implementation of TrainingSessionRepository.
#[derive(Clone)]
pub struct PostgresTrainingSessionRepository {
    pool: PgPool,
}

impl PostgresTrainingSessionRepository {
    /// Creates a new PostgresTrainingSessionRepository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TrainingSessionRepository for PostgresTrainingSessionRepository {
    async fn create(
        &self,
        input: &NewTrainingSession,
        tx: Option<&mut dyn TransactionHandle>,
    ) -> Result<TrainingSession, DomainError> {
        let mut conn = conn(&self.pool, tx).await?;
        let sql = format!(
            "INSERT INTO training_sessions (date, body_weight, notes) VALUES ($1, $2, $3) RETURNING {}",
            SESSION_COLUMNS
        );
        let row = sqlx::query(&sql)
            .bind(input.date.as_naive())
            .bind(input.body_weight)
            .bind(input.notes.as_deref())
            .fetch_one(conn.get())
            .await
            .map_err(|e| map_write_error("Failed to insert training session", "bodyWeight", e))?;

        row_to_session(&row)
    }

    async fn create_many(
        &self,
        inputs: &[NewTrainingSession],
        tx: Option<&mut dyn TransactionHandle>,
    ) -> Result<Vec<TrainingSession>, DomainError> {
        if inputs.is_empty() {
            return Ok(Vec::new());
        }
        let mut conn = conn(&self.pool, tx).await?;

        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new("INSERT INTO training_sessions (date, body_weight, notes) ");
        builder.push_values(inputs, |mut values, input| {
            values
                .push_bind(input.date.as_naive())
                .push_bind(input.body_weight)
                .push_bind(input.notes.clone());
        });
        builder.push(" RETURNING ");
        builder.push(SESSION_COLUMNS);

        let rows = builder
            .build()
            .fetch_all(conn.get())
            .await
            .map_err(|e| map_write_error("Failed to insert training sessions", "bodyWeight", e))?;

        rows.iter().map(row_to_session).collect()
    }

    async fn find_by_id(
        &self,
        id: TrainingSessionId,
    ) -> Result<Option<TrainingSession>, DomainError> {
        let sql = format!("SELECT {} FROM training_sessions WHERE id = $1", SESSION_COLUMNS);
        let row = sqlx::query(&sql)
            .bind(id.value())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| map_db_error("Failed to fetch training session", e))?;

        row.as_ref().map(row_to_session).transpose()
    }

    async fn exists(
        &self,
        id: TrainingSessionId,
        tx: Option<&mut dyn TransactionHandle>,
    ) -> Result<bool, DomainError> {
        let mut conn = conn(&self.pool, tx).await?;
        let result: (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM training_sessions WHERE id = $1)")
                .bind(id.value())
                .fetch_one(conn.get())
                .await
                .map_err(|e| map_db_error("Failed to check training session existence", e))?;

        Ok(result.0)
    }

    async fn find_all(&self, query: ListQuery) -> Result<Page<TrainingSession>, DomainError> {
        let total: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM training_sessions")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| map_db_error("Failed to count training sessions", e))?;

        let sql = format!(
            "SELECT {} FROM training_sessions ORDER BY date DESC LIMIT $1 OFFSET $2",
            SESSION_COLUMNS
        );
        let rows = sqlx::query(&sql)
            .bind(i64::from(query.limit))
            .bind(i64::from(query.offset))
            .fetch_all(&self.pool)
            .await
            .map_err(|e| map_db_error("Failed to list training sessions", e))?;

        Ok(Page {
            total_count: total.0.max(0) as u64,
            items: rows.iter().map(row_to_session).collect::<Result<_, _>>()?,
        })
    }

    async fn find_by_date(
        &self,
        date: &TrainingDate,
    ) -> Result<Option<TrainingSession>, DomainError> {
        let sql = format!("SELECT {} FROM training_sessions WHERE date = $1", SESSION_COLUMNS);
        let row = sqlx::query(&sql)
            .bind(date.as_naive())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| map_db_error("Failed to fetch training session by date", e))?;

        row.as_ref().map(row_to_session).transpose()
    }

    async fn find_by_month(
        &self,
        year: i32,
        month: u32,
    ) -> Result<Vec<TrainingSession>, DomainError> {
        let (start, end) = month_bounds(year, month)?;
        let sql = format!(
            "SELECT {} FROM training_sessions WHERE date >= $1 AND date < $2 ORDER BY date DESC",
            SESSION_COLUMNS
        );
        let rows = sqlx::query(&sql)
            .bind(start)
            .bind(end)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| map_db_error("Failed to fetch training sessions by month", e))?;

        rows.iter().map(row_to_session).collect()
    }

    async fn find_dates(&self) -> Result<Vec<TrainingDate>, DomainError> {
        let rows: Vec<(NaiveDate,)> =
            sqlx::query_as("SELECT date FROM training_sessions ORDER BY date DESC")
                .fetch_all(&self.pool)
                .await
                .map_err(|e| map_db_error("Failed to fetch training dates", e))?;

        Ok(rows.into_iter().map(|(d,)| TrainingDate::from_naive(d)).collect())
    }

    async fn update(
        &self,
        id: TrainingSessionId,
        changes: &TrainingSessionChanges,
        tx: Option<&mut dyn TransactionHandle>,
    ) -> Result<Option<TrainingSession>, DomainError> {
        let mut conn = conn(&self.pool, tx).await?;
        let sql = update_sql();
        let row = sqlx::query(&sql)
            .bind(id.value())
            .bind(changes.date.map(|d| d.as_naive()))
            .bind(changes.body_weight.is_supplied())
            .bind(changes.body_weight.cloned_value())
            .bind(changes.notes.is_supplied())
            .bind(changes.notes.cloned_value())
            .fetch_optional(conn.get())
            .await
            .map_err(|e| map_write_error("Failed to update training session", "bodyWeight", e))?;

        row.as_ref().map(row_to_session).transpose()
    }

    async fn delete_by_id(
        &self,
        id: TrainingSessionId,
        tx: Option<&mut dyn TransactionHandle>,
    ) -> Result<DeleteOutcome<TrainingSessionId>, DomainError> {
        let mut conn = conn(&self.pool, tx).await?;
        let result = sqlx::query("DELETE FROM training_sessions WHERE id = $1")
            .bind(id.value())
            .execute(conn.get())
            .await
            .map_err(|e| map_db_error("Failed to delete training session", e))?;

        Ok(if result.rows_affected() > 0 {
            DeleteOutcome::deleted(id)
        } else {
            DeleteOutcome::nothing_deleted()
        })
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Helper functions
// ════════════════════════════════════════════════════════════════════════════

/// Partial update: each nullable column takes a "supplied" flag and a value.
fn update_sql() -> String {
    format!(
        r#"
        UPDATE training_sessions SET
            date = COALESCE($2, date),
            body_weight = CASE WHEN $3 THEN $4::numeric ELSE body_weight END,
            notes = CASE WHEN $5 THEN $6 ELSE notes END,
            updated_at = NOW()
        WHERE id = $1
        RETURNING {}
        "#,
        SESSION_COLUMNS
    )
}

fn row_to_session(row: &PgRow) -> Result<TrainingSession, DomainError> {
    let created_at: chrono::DateTime<chrono::Utc> = column(row, "created_at")?;
    let updated_at: chrono::DateTime<chrono::Utc> = column(row, "updated_at")?;

    Ok(TrainingSession {
        id: TrainingSessionId::from_i32(column(row, "id")?),
        date: TrainingDate::from_naive(column(row, "date")?),
        body_weight: column(row, "body_weight")?,
        notes: column(row, "notes")?,
        created_at: Timestamp::from_datetime(created_at),
        updated_at: Timestamp::from_datetime(updated_at),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn highest_placeholder(sql: &str) -> u32 {
        sql.split('$')
            .skip(1)
            .filter_map(|rest| {
                let digits: String = rest.chars().take_while(char::is_ascii_digit).collect();
                digits.parse().ok()
            })
            .max()
            .unwrap_or(0)
    }

    #[test]
    fn update_sql_uses_one_placeholder_per_bind() {
        // id, date, then flag + value for body_weight and notes
        assert_eq!(highest_placeholder(&update_sql()), 6);
    }

    #[test]
    fn update_sql_only_touches_supplied_nullable_columns() {
        let sql = update_sql();
        assert!(sql.contains("body_weight = CASE WHEN $3 THEN $4::numeric ELSE body_weight END"));
        assert!(sql.contains("notes = CASE WHEN $5 THEN $6 ELSE notes END"));
        assert!(sql.contains("date = COALESCE($2, date)"));
    }

    #[test]
    fn body_weight_is_read_as_float8() {
        assert!(SESSION_COLUMNS.contains("body_weight::float8 AS body_weight"));
    }
}
