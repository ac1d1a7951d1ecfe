//! Route definitions for the RosterHub HTTP API.
//!
//! All JSON routes are mounted under `/api`; the health probe lives at
//! the root. The router receives `AppState` and passes it to all
//! handlers via Axum's `State` extractor.

use axum::{
    Router,
    extract::DefaultBodyLimit,
    middleware as axum_middleware,
    routing::{get, post},
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let max_upload = state.config.upload.max_file_size_bytes();

    let api_routes = Router::new()
        .merge(auth_routes())
        .merge(roster_routes())
        .merge(record_routes())
        .merge(member_routes());

    let cors = build_cors_layer(&state);

    Router::new()
        .nest("/api", api_routes)
        .route("/health", get(handlers::health::health_check))
        .layer(DefaultBodyLimit::max(max_upload))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(axum_middleware::from_fn(
            middleware::logging::request_logging,
        ))
        .with_state(state)
}

/// Auth endpoints: login, logout, me
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/login", post(handlers::auth::login))
        .route("/auth/logout", post(handlers::auth::logout))
        .route("/auth/me", get(handlers::auth::me))
}

/// Roster upload endpoint
fn roster_routes() -> Router<AppState> {
    Router::new().route("/roster/upload", post(handlers::roster::upload))
}

/// Record listing and dashboard stats
fn record_routes() -> Router<AppState> {
    Router::new()
        .route("/records", get(handlers::record::list_records))
        .route("/records/stats", get(handlers::record::record_stats))
}

/// Member directory endpoints (unauthenticated)
fn member_routes() -> Router<AppState> {
    Router::new()
        .route("/members", post(handlers::member::create_member))
        .route("/members", get(handlers::member::list_members))
}

/// Build CORS layer from configuration
fn build_cors_layer(state: &AppState) -> CorsLayer {
    let cors_config = &state.config.server.cors;

    let mut cors = CorsLayer::new().allow_methods(Any).allow_headers(Any);

    if cors_config.allowed_origins.contains(&"*".to_string()) {
        cors = cors.allow_origin(Any);
    } else {
        let origins: Vec<axum::http::HeaderValue> = cors_config
            .allowed_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        cors = cors.allow_origin(origins);
    }

    cors
}
