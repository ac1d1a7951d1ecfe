//! Request context carrying the authenticated user and session.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Context for the current authenticated request.
///
/// Extracted by the API layer from the bearer token and passed into
/// service methods so that every operation knows *who* is acting and
/// from *which* session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestContext {
    /// The authenticated user's ID.
    pub user_id: Uuid,
    /// The current session ID.
    pub session_id: Uuid,
    /// The username (convenience field from JWT claims).
    pub username: String,
    /// The raw bearer token, kept for session deactivation on logout.
    #[serde(skip_serializing)]
    pub token: String,
    /// When the request was received.
    pub request_time: DateTime<Utc>,
}

impl RequestContext {
    /// Creates a new request context.
    pub fn new(user_id: Uuid, session_id: Uuid, username: String, token: String) -> Self {
        Self {
            user_id,
            session_id,
            username,
            token,
            request_time: Utc::now(),
        }
    }
}
