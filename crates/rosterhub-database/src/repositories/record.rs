//! Personnel record repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use rosterhub_core::error::{AppError, ErrorKind};
use rosterhub_core::result::AppResult;
use rosterhub_core::types::filter::RecordFilter;
use rosterhub_entity::record::model::{Record, RecordStats, SyncOp, SyncPlan};

/// Repository for personnel records.
#[derive(Debug, Clone)]
pub struct RecordRepository {
    pool: PgPool,
}

impl RecordRepository {
    /// Create a new record repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List every stored record email.
    pub async fn list_emails(&self) -> AppResult<Vec<String>> {
        sqlx::query_scalar("SELECT email FROM records")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to list record emails", e)
            })
    }

    /// Search records with a conjunctive substring filter.
    ///
    /// Absent criteria do not constrain; the result is ordered newest
    /// first and unpaginated.
    pub async fn search(&self, filter: &RecordFilter) -> AppResult<Vec<Record>> {
        sqlx::query_as::<_, Record>(
            "SELECT * FROM records \
             WHERE ($1::TEXT IS NULL OR name ILIKE $1) \
               AND ($2::TEXT IS NULL OR department ILIKE $2) \
               AND ($3::TEXT IS NULL OR email ILIKE $3) \
             ORDER BY created_at DESC",
        )
        .bind(filter.name_pattern())
        .bind(filter.department_pattern())
        .bind(filter.email_pattern())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to search records", e))
    }

    /// Aggregate statistics over the records matching a filter.
    pub async fn stats(&self, filter: &RecordFilter) -> AppResult<RecordStats> {
        sqlx::query_as::<_, RecordStats>(
            "SELECT COUNT(*) AS total_records, \
                    COUNT(DISTINCT department) AS departments, \
                    COALESCE(SUM(salary), 0) AS total_salary \
             FROM records \
             WHERE ($1::TEXT IS NULL OR name ILIKE $1) \
               AND ($2::TEXT IS NULL OR department ILIKE $2) \
               AND ($3::TEXT IS NULL OR email ILIKE $3)",
        )
        .bind(filter.name_pattern())
        .bind(filter.department_pattern())
        .bind(filter.email_pattern())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to compute record stats", e))
    }

    /// Apply a sync plan inside a single transaction.
    ///
    /// Inserts and updates run in upload order, then removed emails are
    /// hard-deleted. Any statement failure rolls the whole batch back, so
    /// the table is never left partially converged.
    pub async fn apply_sync(&self, plan: &SyncPlan) -> AppResult<()> {
        let mut tx = self.pool.begin().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to begin sync transaction", e)
        })?;

        for op in &plan.ops {
            match op {
                SyncOp::Insert(draft) => {
                    sqlx::query(
                        "INSERT INTO records \
                         (id, name, email, phone, department, salary, created_at, updated_at) \
                         VALUES ($1, $2, $3, $4, $5, $6, NOW(), NOW())",
                    )
                    .bind(Uuid::new_v4())
                    .bind(&draft.name)
                    .bind(&draft.email)
                    .bind(&draft.phone)
                    .bind(&draft.department)
                    .bind(draft.salary)
                    .execute(&mut *tx)
                    .await
                    .map_err(|e| {
                        AppError::with_source(ErrorKind::Database, "Failed to insert record", e)
                    })?;
                }
                SyncOp::Update(draft) => {
                    sqlx::query(
                        "UPDATE records \
                         SET name = $2, phone = $3, department = $4, salary = $5, \
                             updated_at = NOW() \
                         WHERE email = $1",
                    )
                    .bind(&draft.email)
                    .bind(&draft.name)
                    .bind(&draft.phone)
                    .bind(&draft.department)
                    .bind(draft.salary)
                    .execute(&mut *tx)
                    .await
                    .map_err(|e| {
                        AppError::with_source(ErrorKind::Database, "Failed to update record", e)
                    })?;
                }
            }
        }

        if !plan.deletes.is_empty() {
            sqlx::query("DELETE FROM records WHERE email = ANY($1)")
                .bind(&plan.deletes)
                .execute(&mut *tx)
                .await
                .map_err(|e| {
                    AppError::with_source(
                        ErrorKind::Database,
                        "Failed to delete removed records",
                        e,
                    )
                })?;
        }

        tx.commit().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to commit sync transaction", e)
        })
    }
}
