//! Member repository implementation.

use sqlx::PgPool;
use sqlx::types::Json;
use uuid::Uuid;

use rosterhub_core::error::{AppError, ErrorKind};
use rosterhub_core::result::AppResult;
use rosterhub_entity::member::model::{CreateMember, Member, MemberSummary};

/// Repository for the member directory mini-app.
#[derive(Debug, Clone)]
pub struct MemberRepository {
    pool: PgPool,
}

impl MemberRepository {
    /// Create a new member repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a new member.
    pub async fn create(&self, data: &CreateMember) -> AppResult<Member> {
        sqlx::query_as::<_, Member>(
            "INSERT INTO members \
             (id, name, email, password_hash, gender, date_of_birth, bio, skills, created_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, NOW()) \
             RETURNING *",
        )
        .bind(Uuid::new_v4())
        .bind(&data.name)
        .bind(&data.email)
        .bind(&data.password_hash)
        .bind(&data.gender)
        .bind(data.date_of_birth)
        .bind(&data.bio)
        .bind(Json(&data.skills))
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err)
                if db_err.constraint() == Some("members_email_key") =>
            {
                AppError::conflict("Email already registered")
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to create member", e),
        })
    }

    /// Check whether a member with the given email exists.
    pub async fn email_exists(&self, email: &str) -> AppResult<bool> {
        let count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM members WHERE LOWER(email) = LOWER($1)")
                .bind(email)
                .fetch_one(&self.pool)
                .await
                .map_err(|e| {
                    AppError::with_source(ErrorKind::Database, "Failed to check member email", e)
                })?;
        Ok(count > 0)
    }

    /// List all members, newest first.
    pub async fn list_summaries(&self) -> AppResult<Vec<MemberSummary>> {
        sqlx::query_as::<_, MemberSummary>(
            "SELECT id, name, email FROM members ORDER BY created_at DESC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list members", e))
    }
}
