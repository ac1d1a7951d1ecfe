//! Roster synchronization service — upload, search, and statistics.

use std::collections::HashSet;
use std::sync::Arc;

use tracing::info;

use rosterhub_core::config::UploadConfig;
use rosterhub_core::error::AppError;
use rosterhub_core::result::AppResult;
use rosterhub_core::types::filter::RecordFilter;
use rosterhub_database::repositories::record::RecordRepository;
use rosterhub_entity::record::{Record, RecordStats, SyncSummary};

use crate::context::RequestContext;
use crate::roster::parser::RosterParser;
use crate::roster::reconciler::plan_sync;

/// Orchestrates the roster upload pipeline and record queries.
///
/// An upload is parsed, planned against the stored email set, and
/// applied in one transaction, so the stored records converge to exactly
/// the uploaded roster or stay untouched.
#[derive(Clone)]
pub struct RosterService {
    /// Record repository.
    record_repo: Arc<RecordRepository>,
    /// Upload parser.
    parser: RosterParser,
}

impl std::fmt::Debug for RosterService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RosterService").finish()
    }
}

impl RosterService {
    /// Creates a new roster service.
    pub fn new(record_repo: Arc<RecordRepository>, upload_config: UploadConfig) -> Self {
        Self {
            record_repo,
            parser: RosterParser::new(upload_config),
        }
    }

    /// Synchronizes the stored records to an uploaded roster file.
    ///
    /// Parses the upload, refuses it when no data rows survive parsing
    /// (leaving the stored records untouched), then plans and applies
    /// the convergence in a single transaction. Returns the operation
    /// counts of the applied plan.
    pub async fn sync_upload(
        &self,
        ctx: &RequestContext,
        filename: &str,
        bytes: &[u8],
    ) -> AppResult<SyncSummary> {
        let rows = self.parser.parse(filename, bytes)?;
        if rows.is_empty() {
            return Err(AppError::validation(
                "No valid data rows found in uploaded file",
            ));
        }
        let parsed = rows.len();

        let existing: HashSet<String> = self
            .record_repo
            .list_emails()
            .await?
            .into_iter()
            .collect();

        let plan = plan_sync(&existing, rows);
        let summary = plan.summary();
        self.record_repo.apply_sync(&plan).await?;

        info!(
            user_id = %ctx.user_id,
            filename = %filename,
            rows = parsed,
            inserted = summary.inserted,
            updated = summary.updated,
            deleted = summary.deleted,
            "Roster synchronized"
        );

        Ok(summary)
    }

    /// Searches records with a conjunctive substring filter, newest first.
    pub async fn search(&self, filter: &RecordFilter) -> AppResult<Vec<Record>> {
        self.record_repo.search(filter).await
    }

    /// Computes aggregate statistics over the records matching a filter.
    pub async fn stats(&self, filter: &RecordFilter) -> AppResult<RecordStats> {
        self.record_repo.stats(filter).await
    }
}
