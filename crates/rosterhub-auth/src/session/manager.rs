//! Session lifecycle manager — login and logout flows.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::{info, warn};

use rosterhub_core::config::session::SessionConfig;
use rosterhub_core::error::AppError;
use rosterhub_database::repositories::session::SessionRepository;
use rosterhub_database::repositories::user::UserRepository;
use rosterhub_entity::session::model::{CreateSession, Session};
use rosterhub_entity::user::User;

use crate::jwt::JwtEncoder;
use crate::password::PasswordHasher;

/// Result of a successful login.
#[derive(Debug, Clone, serde::Serialize)]
pub struct LoginResult {
    /// The signed access token for this session.
    pub token: String,
    /// When the token expires.
    pub expires_at: DateTime<Utc>,
    /// Created session.
    pub session: Session,
    /// The authenticated user.
    pub user: User,
}

/// Manages the login session lifecycle.
#[derive(Clone)]
pub struct SessionManager {
    /// JWT encoder for token generation.
    jwt_encoder: Arc<JwtEncoder>,
    /// User lookup.
    user_repo: Arc<UserRepository>,
    /// Session persistence.
    session_repo: Arc<SessionRepository>,
    /// Password hasher.
    password_hasher: Arc<PasswordHasher>,
    /// Session configuration.
    session_config: SessionConfig,
}

impl std::fmt::Debug for SessionManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionManager")
            .field("session_config", &self.session_config)
            .finish()
    }
}

impl SessionManager {
    /// Creates a new session manager with all required dependencies.
    pub fn new(
        jwt_encoder: Arc<JwtEncoder>,
        user_repo: Arc<UserRepository>,
        session_repo: Arc<SessionRepository>,
        password_hasher: Arc<PasswordHasher>,
        session_config: SessionConfig,
    ) -> Self {
        Self {
            jwt_encoder,
            user_repo,
            session_repo,
            password_hasher,
            session_config,
        }
    }

    /// Performs the complete login flow:
    ///
    /// 1. Find the user by username
    /// 2. Verify the password
    /// 3. Issue a signed access token
    /// 4. Persist the session, refusing if the active-session cap is reached
    pub async fn login(&self, username: &str, password: &str) -> Result<LoginResult, AppError> {
        let user = self
            .user_repo
            .find_by_username(username)
            .await?
            .ok_or_else(|| AppError::authentication("Invalid username or password"))?;

        let password_valid = self
            .password_hasher
            .verify_password(password, &user.password_hash)?;

        if !password_valid {
            warn!(user_id = %user.id, "Login rejected: wrong password");
            return Err(AppError::authentication("Invalid username or password"));
        }

        let issued = self.jwt_encoder.issue(user.id, &user.username)?;

        let cap = self.session_config.max_active_sessions;
        let session = self
            .session_repo
            .create_if_below_cap(
                &CreateSession {
                    user_id: user.id,
                    token: issued.token.clone(),
                },
                cap,
            )
            .await?
            .ok_or_else(|| {
                warn!(user_id = %user.id, cap, "Login rejected: session cap reached");
                AppError::conflict(format!("Maximum {cap} active sessions allowed"))
            })?;

        info!(
            user_id = %user.id,
            session_id = %session.id,
            "Login successful"
        );

        Ok(LoginResult {
            token: issued.token,
            expires_at: issued.expires_at,
            session,
            user,
        })
    }

    /// Deactivates the session carrying the given token.
    ///
    /// Logging out an unknown or already-inactive token is a no-op.
    pub async fn logout(&self, token: &str) -> Result<(), AppError> {
        self.session_repo.deactivate_by_token(token).await?;
        info!("Logout completed");
        Ok(())
    }

    /// Returns the active session carrying the given token, if any.
    pub async fn find_active_session(&self, token: &str) -> Result<Option<Session>, AppError> {
        self.session_repo.find_active_by_token(token).await
    }
}
