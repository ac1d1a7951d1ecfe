//! Member directory entity model.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use sqlx::types::Json;
use uuid::Uuid;

/// A member of the standalone directory mini-app.
///
/// Members are unrelated to roster [`crate::user::User`] logins; they
/// live in their own table and are only created and listed.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Member {
    /// Unique member identifier.
    pub id: Uuid,
    /// Full name.
    pub name: String,
    /// Email address; unique across members.
    pub email: String,
    /// Argon2 password hash.
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Self-reported gender.
    pub gender: String,
    /// Date of birth.
    pub date_of_birth: NaiveDate,
    /// Free-text biography.
    pub bio: String,
    /// Skill tags, stored as a JSON array.
    pub skills: Json<Vec<String>>,
    /// When the member was created.
    pub created_at: DateTime<Utc>,
}

/// Data required to create a new member.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateMember {
    /// Full name.
    pub name: String,
    /// Email address.
    pub email: String,
    /// Pre-hashed password.
    pub password_hash: String,
    /// Self-reported gender.
    pub gender: String,
    /// Date of birth.
    pub date_of_birth: NaiveDate,
    /// Free-text biography.
    pub bio: String,
    /// Skill tags.
    pub skills: Vec<String>,
}

/// The listing projection of a member.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct MemberSummary {
    /// Unique member identifier.
    pub id: Uuid,
    /// Full name.
    pub name: String,
    /// Email address.
    pub email: String,
}
