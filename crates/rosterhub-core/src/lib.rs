//! # rosterhub-core
//!
//! Core crate for RosterHub. Contains configuration schemas, shared
//! query types, and the unified error system.
//!
//! This crate has **no** internal dependencies on other RosterHub crates.

pub mod config;
pub mod error;
pub mod result;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
