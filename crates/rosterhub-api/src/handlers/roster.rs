//! Roster upload handler.

use axum::Json;
use axum::body::Bytes;
use axum::extract::{Multipart, State};

use rosterhub_core::error::AppError;

use crate::dto::response::{ApiResponse, SyncResponse};
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// POST /api/roster/upload
///
/// Accepts a multipart body with a single `file` part and synchronizes
/// the stored records to its contents.
pub async fn upload(
    State(state): State<AppState>,
    auth: AuthUser,
    mut multipart: Multipart,
) -> Result<Json<ApiResponse<SyncResponse>>, ApiError> {
    let mut upload: Option<(String, Bytes)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::validation(format!("Invalid multipart body: {e}")))?
    {
        if field.name() != Some("file") {
            continue;
        }

        let filename = field
            .file_name()
            .map(str::to_string)
            .ok_or_else(|| AppError::validation("Uploaded file has no filename"))?;

        let bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::validation(format!("Failed to read upload: {e}")))?;

        upload = Some((filename, bytes));
        break;
    }

    let (filename, bytes) = upload.ok_or_else(|| AppError::validation("No file uploaded"))?;

    let summary = state
        .roster_service
        .sync_upload(&auth, &filename, &bytes)
        .await?;

    Ok(Json(ApiResponse::ok(SyncResponse::from_summary(
        "Data synchronized successfully",
        summary,
    ))))
}
