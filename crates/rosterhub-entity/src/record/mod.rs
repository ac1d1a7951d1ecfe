//! Personnel record domain entities.

pub mod model;

pub use model::{Record, RecordDraft, RecordStats, SyncOp, SyncPlan, SyncSummary};
