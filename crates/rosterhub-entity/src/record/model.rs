//! Personnel record entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A personnel record synchronized from a roster upload.
///
/// The email address is the natural key: the sync run converges the
/// stored set of records to exactly the uploaded set, matching rows by
/// email. Records are created, updated, and hard-deleted only by sync
/// runs.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Record {
    /// Unique record identifier.
    pub id: Uuid,
    /// Full name.
    pub name: String,
    /// Email address; unique across records.
    pub email: String,
    /// Phone number.
    pub phone: String,
    /// Department name.
    pub department: String,
    /// Salary amount.
    pub salary: f64,
    /// When the record was first inserted.
    pub created_at: DateTime<Utc>,
    /// When the record was last updated by a sync run.
    pub updated_at: DateTime<Utc>,
}

/// A parsed roster row, not yet persisted.
///
/// Produced by the upload parser; carries the mutable fields of a
/// [`Record`] keyed by email.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordDraft {
    /// Full name.
    pub name: String,
    /// Email address (natural key).
    pub email: String,
    /// Phone number.
    pub phone: String,
    /// Department name.
    pub department: String,
    /// Salary amount.
    pub salary: f64,
}

/// Aggregate statistics over a (possibly filtered) record set.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct RecordStats {
    /// Number of matching records.
    pub total_records: i64,
    /// Number of distinct departments among matching records.
    pub departments: i64,
    /// Sum of salaries over matching records.
    pub total_salary: f64,
}

/// A single convergence operation produced by the sync planner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SyncOp {
    /// Insert a new record for an email not stored yet.
    Insert(RecordDraft),
    /// Overwrite the mutable fields of the record with this email.
    Update(RecordDraft),
}

/// The operations required to converge the stored record set to an
/// uploaded roster.
///
/// `ops` preserves upload row order so that a duplicated email within
/// one upload resolves to its last row. `deletes` holds the emails
/// present in storage but absent from the upload.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SyncPlan {
    /// Inserts and updates, in upload order.
    pub ops: Vec<SyncOp>,
    /// Emails whose records must be hard-deleted.
    pub deletes: Vec<String>,
}

impl SyncPlan {
    /// Whether the plan contains no work at all.
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty() && self.deletes.is_empty()
    }

    /// Summarize the plan as operation counts.
    pub fn summary(&self) -> SyncSummary {
        let mut summary = SyncSummary {
            deleted: self.deletes.len() as u64,
            ..SyncSummary::default()
        };
        for op in &self.ops {
            match op {
                SyncOp::Insert(_) => summary.inserted += 1,
                SyncOp::Update(_) => summary.updated += 1,
            }
        }
        summary
    }
}

/// Operation counts reported after a sync run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyncSummary {
    /// Number of records inserted.
    pub inserted: u64,
    /// Number of records updated.
    pub updated: u64,
    /// Number of records deleted.
    pub deleted: u64,
}
