//! Session entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A login session row.
///
/// Sessions are created on login and soft-deleted (`is_active` set to
/// `false`) on logout; rows are never physically removed. At most a
/// configured number of sessions per user may be active at once.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Session {
    /// Unique session identifier.
    pub id: Uuid,
    /// The user this session belongs to.
    pub user_id: Uuid,
    /// The signed access token issued for this session.
    #[serde(skip_serializing)]
    pub token: String,
    /// When the session was created (login time).
    pub created_at: DateTime<Utc>,
    /// Whether the session is still active.
    pub is_active: bool,
}

/// Data required to create a new session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateSession {
    /// The user this session belongs to.
    pub user_id: Uuid,
    /// The signed access token to associate with the session.
    pub token: String,
}
