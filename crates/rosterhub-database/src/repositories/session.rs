//! Session repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use rosterhub_core::error::{AppError, ErrorKind};
use rosterhub_core::result::AppResult;
use rosterhub_entity::session::model::{CreateSession, Session};

/// Repository for login session rows.
#[derive(Debug, Clone)]
pub struct SessionRepository {
    pool: PgPool,
}

impl SessionRepository {
    /// Create a new session repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find the active session carrying the given token.
    pub async fn find_active_by_token(&self, token: &str) -> AppResult<Option<Session>> {
        sqlx::query_as::<_, Session>(
            "SELECT * FROM user_sessions WHERE token = $1 AND is_active = TRUE",
        )
        .bind(token)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to find session by token", e)
        })
    }

    /// Count active sessions for a user.
    pub async fn count_active_by_user(&self, user_id: Uuid) -> AppResult<i64> {
        sqlx::query_scalar(
            "SELECT COUNT(*) FROM user_sessions WHERE user_id = $1 AND is_active = TRUE",
        )
        .bind(user_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to count active sessions", e)
        })
    }

    /// Create a session only if the user is below the active-session cap.
    ///
    /// The check and the insert run inside one transaction that first
    /// locks the user row, so two concurrent logins for the same user
    /// cannot both pass the count check. Returns `None` when the cap is
    /// already reached; no row is created in that case.
    pub async fn create_if_below_cap(
        &self,
        data: &CreateSession,
        cap: u32,
    ) -> AppResult<Option<Session>> {
        let mut tx = self.pool.begin().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to begin session transaction", e)
        })?;

        // Serializes session creation per user; concurrent logins for the
        // same user queue on this lock.
        sqlx::query("SELECT id FROM users WHERE id = $1 FOR UPDATE")
            .bind(data.user_id)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to lock user row", e)
            })?;

        let active: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM user_sessions WHERE user_id = $1 AND is_active = TRUE",
        )
        .bind(data.user_id)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to count active sessions", e)
        })?;

        if active >= i64::from(cap) {
            return Ok(None);
        }

        let session = sqlx::query_as::<_, Session>(
            "INSERT INTO user_sessions (id, user_id, token, created_at, is_active) \
             VALUES ($1, $2, $3, NOW(), TRUE) \
             RETURNING *",
        )
        .bind(Uuid::new_v4())
        .bind(data.user_id)
        .bind(&data.token)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create session", e))?;

        tx.commit().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to commit session transaction", e)
        })?;

        Ok(Some(session))
    }

    /// Deactivate the session carrying the given token.
    ///
    /// Sessions are soft-deleted; the row is kept with `is_active` set to
    /// `false`. Unknown tokens are a no-op.
    pub async fn deactivate_by_token(&self, token: &str) -> AppResult<()> {
        sqlx::query("UPDATE user_sessions SET is_active = FALSE WHERE token = $1")
            .bind(token)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to deactivate session", e)
            })?;
        Ok(())
    }
}
