//! Response DTOs.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use rosterhub_entity::member::{Member, MemberSummary};
use rosterhub_entity::record::{Record, RecordStats, SyncSummary};
use rosterhub_entity::user::User;

/// Standard success response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T: Serialize> {
    /// Whether the request was successful.
    pub success: bool,
    /// Response data.
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// Creates a successful response.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Login response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    /// Bearer token for subsequent requests.
    pub token: String,
    /// Token expiration time.
    pub expires_at: DateTime<Utc>,
    /// Authenticated user.
    pub user: UserResponse,
}

/// User summary for responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    /// User ID.
    pub id: Uuid,
    /// Username.
    pub username: String,
    /// Created at.
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            created_at: user.created_at,
        }
    }
}

/// Simple message response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Message.
    pub message: String,
}

/// Roster sync outcome.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SyncResponse {
    /// Outcome message.
    pub message: String,
    /// Records inserted.
    pub inserted: u64,
    /// Records updated.
    pub updated: u64,
    /// Records deleted.
    pub deleted: u64,
}

impl SyncResponse {
    /// Builds the sync outcome from the applied operation counts.
    pub fn from_summary(message: impl Into<String>, summary: SyncSummary) -> Self {
        Self {
            message: message.into(),
            inserted: summary.inserted,
            updated: summary.updated,
            deleted: summary.deleted,
        }
    }
}

/// A personnel record in listings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordResponse {
    /// Record ID.
    pub id: Uuid,
    /// Full name.
    pub name: String,
    /// Email address.
    pub email: String,
    /// Phone number.
    pub phone: String,
    /// Department.
    pub department: String,
    /// Salary.
    pub salary: f64,
    /// First synchronized at.
    pub created_at: DateTime<Utc>,
    /// Last updated at.
    pub updated_at: DateTime<Utc>,
}

impl From<Record> for RecordResponse {
    fn from(record: Record) -> Self {
        Self {
            id: record.id,
            name: record.name,
            email: record.email,
            phone: record.phone,
            department: record.department,
            salary: record.salary,
            created_at: record.created_at,
            updated_at: record.updated_at,
        }
    }
}

/// Dashboard aggregates over the filtered record set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatsResponse {
    /// Matching record count.
    pub total_records: i64,
    /// Distinct departments among matching records.
    pub departments: i64,
    /// Salary sum over matching records.
    pub total_salary: f64,
}

impl From<RecordStats> for StatsResponse {
    fn from(stats: RecordStats) -> Self {
        Self {
            total_records: stats.total_records,
            departments: stats.departments,
            total_salary: stats.total_salary,
        }
    }
}

/// A created member.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemberResponse {
    /// Member ID.
    pub id: Uuid,
    /// Full name.
    pub name: String,
    /// Email address.
    pub email: String,
    /// Gender.
    pub gender: String,
    /// Date of birth.
    pub date_of_birth: NaiveDate,
    /// Biography.
    pub bio: String,
    /// Skill tags.
    pub skills: Vec<String>,
    /// Created at.
    pub created_at: DateTime<Utc>,
}

impl From<Member> for MemberResponse {
    fn from(member: Member) -> Self {
        Self {
            id: member.id,
            name: member.name,
            email: member.email,
            gender: member.gender,
            date_of_birth: member.date_of_birth,
            bio: member.bio,
            skills: member.skills.0,
            created_at: member.created_at,
        }
    }
}

/// A member in listings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemberSummaryResponse {
    /// Member ID.
    pub id: Uuid,
    /// Full name.
    pub name: String,
    /// Email address.
    pub email: String,
}

impl From<MemberSummary> for MemberSummaryResponse {
    fn from(summary: MemberSummary) -> Self {
        Self {
            id: summary.id,
            name: summary.name,
            email: summary.email,
        }
    }
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status.
    pub status: String,
    /// Version.
    pub version: String,
    /// Database connectivity.
    pub database: String,
}
