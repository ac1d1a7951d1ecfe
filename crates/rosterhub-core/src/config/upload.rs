//! Roster upload configuration.

use serde::{Deserialize, Serialize};

/// Roster file upload configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadConfig {
    /// Maximum accepted upload size in megabytes.
    #[serde(default = "default_max_file_size_mb")]
    pub max_file_size_mb: u64,
    /// File extensions accepted at the upload gate (lowercase, no dot).
    /// Only `csv` content is actually parsed.
    #[serde(default = "default_allowed_extensions")]
    pub allowed_extensions: Vec<String>,
}

impl UploadConfig {
    /// Maximum accepted upload size in bytes.
    pub fn max_file_size_bytes(&self) -> usize {
        (self.max_file_size_mb as usize) * 1024 * 1024
    }
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            max_file_size_mb: default_max_file_size_mb(),
            allowed_extensions: default_allowed_extensions(),
        }
    }
}

fn default_max_file_size_mb() -> u64 {
    10
}

fn default_allowed_extensions() -> Vec<String> {
    vec!["csv".to_string(), "xlsx".to_string(), "xls".to_string()]
}
