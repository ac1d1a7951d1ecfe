//! Session lifecycle management.

pub mod manager;

pub use manager::{LoginResult, SessionManager};
