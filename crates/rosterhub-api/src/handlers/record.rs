//! Record listing and dashboard stats handlers.

use axum::Json;
use axum::extract::{Query, State};

use crate::dto::request::RecordFilterQuery;
use crate::dto::response::{ApiResponse, RecordResponse, StatsResponse};
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// GET /api/records
pub async fn list_records(
    State(state): State<AppState>,
    _auth: AuthUser,
    Query(query): Query<RecordFilterQuery>,
) -> Result<Json<ApiResponse<Vec<RecordResponse>>>, ApiError> {
    let filter = query.into_filter();
    let records = state.roster_service.search(&filter).await?;

    Ok(Json(ApiResponse::ok(
        records.into_iter().map(RecordResponse::from).collect(),
    )))
}

/// GET /api/records/stats
pub async fn record_stats(
    State(state): State<AppState>,
    _auth: AuthUser,
    Query(query): Query<RecordFilterQuery>,
) -> Result<Json<ApiResponse<StatsResponse>>, ApiError> {
    let filter = query.into_filter();
    let stats = state.roster_service.stats(&filter).await?;

    Ok(Json(ApiResponse::ok(StatsResponse::from(stats))))
}
