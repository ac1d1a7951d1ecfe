//! Roster file parsing — upload gate and CSV row extraction.

use csv::{ReaderBuilder, Trim};
use tracing::{debug, warn};

use rosterhub_core::config::UploadConfig;
use rosterhub_core::error::{AppError, ErrorKind};
use rosterhub_core::result::AppResult;
use rosterhub_entity::record::RecordDraft;

/// Columns a roster row must carry: name, email, phone, department, salary.
const REQUIRED_COLUMNS: usize = 5;

/// Parses uploaded roster files into record drafts.
///
/// The upload gate accepts every configured spreadsheet extension, but
/// only CSV content is actually parsed. Binary spreadsheet payloads pass
/// the gate, yield zero rows, and are rejected downstream as empty
/// uploads.
#[derive(Debug, Clone)]
pub struct RosterParser {
    /// Upload configuration (size limit and accepted extensions).
    config: UploadConfig,
}

impl RosterParser {
    /// Creates a new parser with the given upload configuration.
    pub fn new(config: UploadConfig) -> Self {
        Self { config }
    }

    /// Parses an uploaded roster file into drafts, preserving row order.
    ///
    /// Rejects files whose extension is not accepted or whose size
    /// exceeds the configured limit. Within the CSV body the header row
    /// is skipped, rows with fewer than five columns are dropped, and
    /// rows without an email are dropped. A salary cell that does not
    /// parse as a number becomes `0.0`.
    pub fn parse(&self, filename: &str, bytes: &[u8]) -> AppResult<Vec<RecordDraft>> {
        let extension = extension_of(filename);
        if !self
            .config
            .allowed_extensions
            .iter()
            .any(|allowed| *allowed == extension)
        {
            return Err(AppError::validation("Only CSV and Excel files allowed"));
        }

        // Check size limit
        if bytes.len() > self.config.max_file_size_bytes() {
            return Err(AppError::validation(format!(
                "File exceeds maximum upload size of {} MB",
                self.config.max_file_size_mb
            )));
        }

        if extension != "csv" {
            debug!(
                filename = %filename,
                extension = %extension,
                "Accepted non-CSV roster file; no rows extracted"
            );
            return Ok(Vec::new());
        }

        self.parse_csv(bytes)
    }

    fn parse_csv(&self, bytes: &[u8]) -> AppResult<Vec<RecordDraft>> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(Trim::All)
            .from_reader(bytes);

        let mut drafts = Vec::new();
        for (index, row) in reader.records().enumerate() {
            let row = row.map_err(|e| {
                AppError::with_source(ErrorKind::Validation, "Failed to parse CSV content", e)
            })?;

            // Data rows start on line 2, after the header.
            let line = index + 2;

            if row.len() < REQUIRED_COLUMNS {
                warn!(line = line, columns = row.len(), "Skipping short roster row");
                continue;
            }

            let email = row.get(1).unwrap_or("");
            if email.is_empty() {
                warn!(line = line, "Skipping roster row without an email");
                continue;
            }

            let salary = row.get(4).unwrap_or("").parse::<f64>().unwrap_or(0.0);

            drafts.push(RecordDraft {
                name: row.get(0).unwrap_or("").to_string(),
                email: email.to_string(),
                phone: row.get(2).unwrap_or("").to_string(),
                department: row.get(3).unwrap_or("").to_string(),
                salary,
            });
        }

        Ok(drafts)
    }
}

/// Returns the lowercased extension of a filename, without the dot.
fn extension_of(filename: &str) -> String {
    filename
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default()
}
