//! Session management configuration.

use serde::{Deserialize, Serialize};

/// Session management configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Maximum number of concurrently active sessions per user.
    #[serde(default = "default_max_active_sessions")]
    pub max_active_sessions: u32,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            max_active_sessions: default_max_active_sessions(),
        }
    }
}

fn default_max_active_sessions() -> u32 {
    2
}
