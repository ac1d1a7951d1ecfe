//! Record search filter.

use serde::{Deserialize, Serialize};

/// Conjunctive substring filter over roster records.
///
/// Each present criterion constrains its column with a substring match;
/// absent criteria do not constrain at all. Blank input (empty or
/// whitespace-only) is normalized to "absent" so that an empty form
/// field never filters the listing down to nothing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecordFilter {
    /// Substring to match against the record name.
    pub name: Option<String>,
    /// Substring to match against the department.
    pub department: Option<String>,
    /// Substring to match against the email address.
    pub email: Option<String>,
}

impl RecordFilter {
    /// Build a filter, normalizing each criterion.
    pub fn new(
        name: Option<String>,
        department: Option<String>,
        email: Option<String>,
    ) -> Self {
        Self {
            name: normalize(name),
            department: normalize(department),
            email: normalize(email),
        }
    }

    /// Whether no criterion is set.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.department.is_none() && self.email.is_none()
    }

    /// SQL `LIKE`/`ILIKE` pattern for the name criterion.
    pub fn name_pattern(&self) -> Option<String> {
        self.name.as_deref().map(like_pattern)
    }

    /// SQL `LIKE`/`ILIKE` pattern for the department criterion.
    pub fn department_pattern(&self) -> Option<String> {
        self.department.as_deref().map(like_pattern)
    }

    /// SQL `LIKE`/`ILIKE` pattern for the email criterion.
    pub fn email_pattern(&self) -> Option<String> {
        self.email.as_deref().map(like_pattern)
    }
}

/// Trim a criterion and collapse blank input to `None`.
fn normalize(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Wrap a criterion in `%` wildcards for substring matching.
fn like_pattern(value: &str) -> String {
    format!("%{value}%")
}
