//! Startup admin seeding configuration.

use serde::{Deserialize, Serialize};

/// Startup admin seeding configuration.
///
/// Users are otherwise never created through the roster API, so a fresh
/// deployment seeds one login from these settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BootstrapConfig {
    /// Whether to seed the admin user on startup.
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// Username of the seeded admin user.
    #[serde(default = "default_admin_username")]
    pub admin_username: String,
    /// Plaintext password of the seeded admin user; hashed before storage.
    /// Must be overridden in production deployments.
    #[serde(default = "default_admin_password")]
    pub admin_password: String,
}

impl Default for BootstrapConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            admin_username: default_admin_username(),
            admin_password: default_admin_password(),
        }
    }
}

fn default_enabled() -> bool {
    true
}

fn default_admin_username() -> String {
    "admin".to_string()
}

fn default_admin_password() -> String {
    "admin123".to_string()
}
