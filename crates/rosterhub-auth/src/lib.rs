//! # rosterhub-auth
//!
//! Authentication for RosterHub: JWT issuance and validation, Argon2id
//! password hashing, and the capped login session lifecycle.
//!
//! ## Modules
//!
//! - `jwt` — signed token creation and validation
//! - `password` — Argon2id password hashing and verification
//! - `session` — login/logout flows and the active-session cap

pub mod jwt;
pub mod password;
pub mod session;

pub use jwt::{Claims, JwtDecoder, JwtEncoder};
pub use password::PasswordHasher;
pub use session::SessionManager;
