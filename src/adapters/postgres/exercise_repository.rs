//! PostgreSQL implementation of ExerciseRepository.
//!
//! `order` is a reserved word and is always quoted. `weight` is stored as
//! `NUMERIC(5,2)` and read back as `float8`.

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Postgres, QueryBuilder};

use super::connection::{column, conn, map_db_error, map_write_error};
use crate::domain::exercise::{
    sort_exercise_names, Exercise, ExerciseChanges, ExerciseHistoryEntry, NewExercise,
};
use crate::domain::foundation::{
    DomainError, ExerciseId, Timestamp, TrainingDate, TrainingSessionId,
};
use crate::ports::{DeleteOutcome, ExerciseRepository, ListQuery, Page, TransactionHandle};

const EXERCISE_COLUMNS: &str = r#"id, training_session_id, exercise_name, weight::float8 AS weight, reps, duration_seconds, sets, "order", notes, created_at, updated_at"#;

const INSERT_PREFIX: &str = r#"INSERT INTO exercises (training_session_id, exercise_name, weight, reps, duration_seconds, sets, "order", notes) "#;

/// PostgreSQL implementation of ExerciseRepository.
#[derive(Clone)]
pub struct PostgresExerciseRepository {
    pool: PgPool,
}

impl PostgresExerciseRepository {
    /// Creates a new PostgresExerciseRepository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn insert(
        &self,
        inputs: &[NewExercise],
        tx: Option<&mut dyn TransactionHandle>,
    ) -> Result<Vec<Exercise>, DomainError> {
        let mut conn = conn(&self.pool, tx).await?;

        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new(INSERT_PREFIX);
        builder.push_values(inputs, |mut values, input| {
            values
                .push_bind(input.training_session_id.value())
                .push_bind(input.exercise_name.clone())
                .push_bind(input.weight)
                .push_bind(input.reps)
                .push_bind(input.duration_seconds)
                .push_bind(input.sets)
                .push_bind(input.order)
                .push_bind(input.notes.clone());
        });
        builder.push(" RETURNING ");
        builder.push(EXERCISE_COLUMNS);

        let rows = builder
            .build()
            .fetch_all(conn.get())
            .await
            .map_err(|e| map_write_error("Failed to insert exercises", "weight", e))?;

        rows.iter().map(row_to_exercise).collect()
    }
}

#[async_trait]
impl ExerciseRepository for PostgresExerciseRepository {
    async fn create(
        &self,
        input: &NewExercise,
        tx: Option<&mut dyn TransactionHandle>,
    ) -> Result<Exercise, DomainError> {
        let mut created = self.insert(std::slice::from_ref(input), tx).await?;
        created
            .pop()
            .ok_or_else(|| DomainError::database("Failed to insert exercise", "no row returned"))
    }

    async fn create_many(
        &self,
        inputs: &[NewExercise],
        tx: Option<&mut dyn TransactionHandle>,
    ) -> Result<Vec<Exercise>, DomainError> {
        if inputs.is_empty() {
            return Ok(Vec::new());
        }
        self.insert(inputs, tx).await
    }

    async fn find_by_id(&self, id: ExerciseId) -> Result<Option<Exercise>, DomainError> {
        let sql = format!("SELECT {} FROM exercises WHERE id = $1", EXERCISE_COLUMNS);
        let row = sqlx::query(&sql)
            .bind(id.value())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| map_db_error("Failed to fetch exercise", e))?;

        row.as_ref().map(row_to_exercise).transpose()
    }

    async fn find_all(&self, query: ListQuery) -> Result<Page<Exercise>, DomainError> {
        let total: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM exercises")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| map_db_error("Failed to count exercises", e))?;

        let sql = format!(
            r#"SELECT {} FROM exercises ORDER BY "order" ASC, id ASC LIMIT $1 OFFSET $2"#,
            EXERCISE_COLUMNS
        );
        let rows = sqlx::query(&sql)
            .bind(i64::from(query.limit))
            .bind(i64::from(query.offset))
            .fetch_all(&self.pool)
            .await
            .map_err(|e| map_db_error("Failed to list exercises", e))?;

        Ok(Page {
            total_count: total.0.max(0) as u64,
            items: rows.iter().map(row_to_exercise).collect::<Result<_, _>>()?,
        })
    }

    async fn find_by_training_session_id(
        &self,
        training_session_id: TrainingSessionId,
    ) -> Result<Vec<Exercise>, DomainError> {
        let sql = format!(
            r#"SELECT {} FROM exercises WHERE training_session_id = $1 ORDER BY "order" ASC, id ASC"#,
            EXERCISE_COLUMNS
        );
        let rows = sqlx::query(&sql)
            .bind(training_session_id.value())
            .fetch_all(&self.pool)
            .await
            .map_err(|e| map_db_error("Failed to fetch exercises by session", e))?;

        rows.iter().map(row_to_exercise).collect()
    }

    async fn find_names(&self) -> Result<Vec<String>, DomainError> {
        let rows: Vec<(String,)> = sqlx::query_as("SELECT DISTINCT exercise_name FROM exercises")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| map_db_error("Failed to fetch exercise names", e))?;

        // Sorted here so the result does not depend on the database collation.
        Ok(sort_exercise_names(rows.into_iter().map(|(name,)| name).collect()))
    }

    async fn find_history(
        &self,
        exercise_name: &str,
        query: ListQuery,
    ) -> Result<Page<ExerciseHistoryEntry>, DomainError> {
        let total: (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM exercises WHERE exercise_name = $1")
                .bind(exercise_name)
                .fetch_one(&self.pool)
                .await
                .map_err(|e| map_db_error("Failed to count exercise history", e))?;

        let rows = sqlx::query(
            r#"
            SELECT s.date, e.weight::float8 AS weight, e.reps, e.duration_seconds, e.sets
            FROM exercises e
            JOIN training_sessions s ON s.id = e.training_session_id
            WHERE e.exercise_name = $1
            ORDER BY s.date DESC, e."order" ASC, e.id ASC
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(exercise_name)
        .bind(i64::from(query.limit))
        .bind(i64::from(query.offset))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| map_db_error("Failed to fetch exercise history", e))?;

        let items = rows
            .iter()
            .map(|row| {
                let date: NaiveDate = column(row, "date")?;
                Ok(ExerciseHistoryEntry {
                    date: TrainingDate::from_naive(date),
                    weight: column(row, "weight")?,
                    reps: column(row, "reps")?,
                    duration_seconds: column(row, "duration_seconds")?,
                    sets: column(row, "sets")?,
                })
            })
            .collect::<Result<_, DomainError>>()?;

        Ok(Page {
            total_count: total.0.max(0) as u64,
            items,
        })
    }

    async fn update(
        &self,
        id: ExerciseId,
        changes: &ExerciseChanges,
        tx: Option<&mut dyn TransactionHandle>,
    ) -> Result<Option<Exercise>, DomainError> {
        let mut conn = conn(&self.pool, tx).await?;
        let sql = update_sql();
        let row = sqlx::query(&sql)
            .bind(id.value())
            .bind(changes.exercise_name.as_deref())
            .bind(changes.weight.is_supplied())
            .bind(changes.weight.cloned_value())
            .bind(changes.reps.is_supplied())
            .bind(changes.reps.cloned_value())
            .bind(changes.duration_seconds.is_supplied())
            .bind(changes.duration_seconds.cloned_value())
            .bind(changes.sets)
            .bind(changes.order)
            .bind(changes.notes.is_supplied())
            .bind(changes.notes.cloned_value())
            .fetch_optional(conn.get())
            .await
            .map_err(|e| map_write_error("Failed to update exercise", "weight", e))?;

        row.as_ref().map(row_to_exercise).transpose()
    }

    async fn delete_by_id(
        &self,
        id: ExerciseId,
        tx: Option<&mut dyn TransactionHandle>,
    ) -> Result<DeleteOutcome<ExerciseId>, DomainError> {
        let mut conn = conn(&self.pool, tx).await?;
        let result = sqlx::query("DELETE FROM exercises WHERE id = $1")
            .bind(id.value())
            .execute(conn.get())
            .await
            .map_err(|e| map_db_error("Failed to delete exercise", e))?;

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

/// Partial update. Nullable columns take a "supplied" flag and a value,
/// required columns are kept when their parameter is NULL.
fn update_sql() -> String {
    format!(
        r#"
        UPDATE exercises SET
            exercise_name = COALESCE($2, exercise_name),
            weight = CASE WHEN $3 THEN $4::numeric ELSE weight END,
            reps = CASE WHEN $5 THEN $6 ELSE reps END,
            duration_seconds = CASE WHEN $7 THEN $8 ELSE duration_seconds END,
            sets = COALESCE($9, sets),
            "order" = COALESCE($10, "order"),
            notes = CASE WHEN $11 THEN $12 ELSE notes END,
            updated_at = NOW()
        WHERE id = $1
        RETURNING {}
        "#,
        EXERCISE_COLUMNS
    )
}

fn row_to_exercise(row: &PgRow) -> Result<Exercise, DomainError> {
    let created_at: chrono::DateTime<chrono::Utc> = column(row, "created_at")?;
    let updated_at: chrono::DateTime<chrono::Utc> = column(row, "updated_at")?;

    Ok(Exercise {
        id: ExerciseId::from_i32(column(row, "id")?),
        training_session_id: TrainingSessionId::from_i32(column(row, "training_session_id")?),
        exercise_name: column(row, "exercise_name")?,
        weight: column(row, "weight")?,
        reps: column(row, "reps")?,
        duration_seconds: column(row, "duration_seconds")?,
        sets: column(row, "sets")?,
        order: column(row, "order")?,
        notes: column(row, "notes")?,
        created_at: Timestamp::from_datetime(created_at),
        updated_at: Timestamp::from_datetime(updated_at),
    })
}
