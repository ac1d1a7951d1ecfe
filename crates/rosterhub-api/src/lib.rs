//! # rosterhub-api
//!
//! HTTP API layer for RosterHub built on Axum.
//!
//! Provides the REST endpoints, middleware (CORS, body limits, request
//! logging), the bearer-token auth extractor, DTOs, and the mapping from
//! domain errors to HTTP responses.

pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use error::ApiError;
pub use router::build_router;
pub use state::AppState;
