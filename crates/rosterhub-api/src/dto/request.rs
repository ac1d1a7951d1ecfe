//! Request DTOs with validation.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

use rosterhub_core::types::filter::RecordFilter;

/// Login request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    /// Username.
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,
    /// Password.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Record listing and stats filter query parameters.
///
/// All parameters are optional; blank values mean "unconstrained".
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecordFilterQuery {
    /// Substring filter on name.
    pub filter_name: Option<String>,
    /// Substring filter on department.
    pub filter_department: Option<String>,
    /// Substring filter on email.
    pub filter_email: Option<String>,
}

impl RecordFilterQuery {
    /// Converts the raw query parameters into a normalized filter.
    pub fn into_filter(self) -> RecordFilter {
        RecordFilter::new(self.filter_name, self.filter_department, self.filter_email)
    }
}

/// Member registration request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateMemberRequest {
    /// Full name.
    #[validate(length(min = 1, max = 255, message = "Name is required"))]
    pub name: String,
    /// Email address.
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
    /// Password (stored hashed).
    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub password: String,
    /// Self-reported gender.
    #[validate(length(min = 1, message = "Gender is required"))]
    pub gender: String,
    /// Date of birth.
    pub date_of_birth: NaiveDate,
    /// Free-text biography.
    #[serde(default)]
    pub bio: String,
    /// Skill tags.
    #[validate(length(min = 1, message = "At least one skill is required"))]
    pub skills: Vec<String>,
}
