//! Member directory handlers.

use axum::Json;
use axum::extract::State;
use validator::Validate;

use rosterhub_service::member::NewMember;

use crate::dto::request::CreateMemberRequest;
use crate::dto::response::{ApiResponse, MemberResponse, MemberSummaryResponse};
use crate::error::{ApiError, validation_error};
use crate::state::AppState;

/// POST /api/members
pub async fn create_member(
    State(state): State<AppState>,
    Json(req): Json<CreateMemberRequest>,
) -> Result<Json<ApiResponse<MemberResponse>>, ApiError> {
    req.validate().map_err(|e| validation_error(&e))?;

    let member = state
        .member_service
        .register(NewMember {
            name: req.name,
            email: req.email,
            password: req.password,
            gender: req.gender,
            date_of_birth: req.date_of_birth,
            bio: req.bio,
            skills: req.skills,
        })
        .await?;

    Ok(Json(ApiResponse::ok(MemberResponse::from(member))))
}

/// GET /api/members
pub async fn list_members(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<MemberSummaryResponse>>>, ApiError> {
    let members = state.member_service.list().await?;

    Ok(Json(ApiResponse::ok(
        members
            .into_iter()
            .map(MemberSummaryResponse::from)
            .collect(),
    )))
}
