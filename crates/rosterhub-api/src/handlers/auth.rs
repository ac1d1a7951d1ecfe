//! Auth handlers — login, logout, me.

use axum::Json;
use axum::extract::State;
use axum::http::HeaderMap;
use validator::Validate;

use rosterhub_core::error::AppError;

use crate::dto::request::LoginRequest;
use crate::dto::response::{ApiResponse, LoginResponse, MessageResponse, UserResponse};
use crate::error::{ApiError, validation_error};
use crate::extractors::AuthUser;
use crate::state::AppState;

/// POST /api/auth/login
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<ApiResponse<LoginResponse>>, ApiError> {
    req.validate().map_err(|e| validation_error(&e))?;

    let result = state
        .session_manager
        .login(&req.username, &req.password)
        .await?;

    Ok(Json(ApiResponse::ok(LoginResponse {
        token: result.token,
        expires_at: result.expires_at,
        user: UserResponse::from(result.user),
    })))
}

/// POST /api/auth/logout
///
/// Deactivates the session carrying the presented token. Logout is
/// idempotent: an unknown or already-inactive token is a no-op.
pub async fn logout(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    if let Some(token) = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
    {
        state.session_manager.logout(token).await?;
    }

    Ok(Json(ApiResponse::ok(MessageResponse {
        message: "Logged out successfully".to_string(),
    })))
}

/// GET /api/auth/me
pub async fn me(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<UserResponse>>, ApiError> {
    let user = state
        .user_repo
        .find_by_id(auth.user_id)
        .await?
        .ok_or_else(|| AppError::not_found("User not found"))?;

    Ok(Json(ApiResponse::ok(UserResponse::from(user))))
}
