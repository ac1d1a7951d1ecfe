//! `AuthUser` extractor — pulls the bearer token from the Authorization
//! header, validates it, and injects the request context.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use rosterhub_core::error::AppError;
use rosterhub_service::context::RequestContext;

use crate::error::ApiError;
use crate::state::AppState;

/// Extracted authenticated user context available in handlers.
///
/// Rejects the request when the token is missing, malformed, expired,
/// or no longer backed by an active session row.
#[derive(Debug, Clone)]
pub struct AuthUser(pub RequestContext);

impl std::ops::Deref for AuthUser {
    type Target = RequestContext;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| AppError::authentication("Missing Authorization header"))?;

        let token = auth_header
            .strip_prefix("Bearer ")
            .ok_or_else(|| AppError::authentication("Invalid Authorization header format"))?;

        // Signature and expiry first, then the session row.
        let claims = state.jwt_decoder.decode(token)?;

        let session = state
            .session_manager
            .find_active_session(token)
            .await?
            .ok_or_else(|| AppError::authentication("Session is no longer active"))?;

        let ctx = RequestContext::new(
            claims.user_id(),
            session.id,
            claims.username,
            token.to_string(),
        );

        Ok(AuthUser(ctx))
    }
}
