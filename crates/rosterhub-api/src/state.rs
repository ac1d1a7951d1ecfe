//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use sqlx::PgPool;

use rosterhub_auth::jwt::decoder::JwtDecoder;
use rosterhub_auth::jwt::encoder::JwtEncoder;
use rosterhub_auth::password::hasher::PasswordHasher;
use rosterhub_auth::session::manager::SessionManager;
use rosterhub_core::config::AppConfig;

use rosterhub_database::repositories::member::MemberRepository;
use rosterhub_database::repositories::record::RecordRepository;
use rosterhub_database::repositories::session::SessionRepository;
use rosterhub_database::repositories::user::UserRepository;

use rosterhub_service::member::service::MemberService;
use rosterhub_service::roster::service::RosterService;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    // ── Configuration ────────────────────────────────────────
    /// Application configuration
    pub config: Arc<AppConfig>,

    // ── Infrastructure ───────────────────────────────────────
    /// PostgreSQL connection pool
    pub db_pool: PgPool,

    // ── Auth ─────────────────────────────────────────────────
    /// JWT token encoder
    pub jwt_encoder: Arc<JwtEncoder>,
    /// JWT token decoder and validator
    pub jwt_decoder: Arc<JwtDecoder>,
    /// Password hasher (Argon2)
    pub password_hasher: Arc<PasswordHasher>,
    /// Session lifecycle manager
    pub session_manager: Arc<SessionManager>,

    // ── Repositories ─────────────────────────────────────────
    /// User repository
    pub user_repo: Arc<UserRepository>,
    /// Session repository
    pub session_repo: Arc<SessionRepository>,
    /// Record repository
    pub record_repo: Arc<RecordRepository>,
    /// Member repository
    pub member_repo: Arc<MemberRepository>,

    // ── Services ─────────────────────────────────────────────
    /// Roster sync and record query service
    pub roster_service: Arc<RosterService>,
    /// Member directory service
    pub member_service: Arc<MemberService>,
}

impl AppState {
    /// Wires repositories, auth components, and services from the
    /// configuration and database pool.
    pub fn build(config: AppConfig, db_pool: PgPool) -> Self {
        // ── Repositories ─────────────────────────────────────
        let user_repo = Arc::new(UserRepository::new(db_pool.clone()));
        let session_repo = Arc::new(SessionRepository::new(db_pool.clone()));
        let record_repo = Arc::new(RecordRepository::new(db_pool.clone()));
        let member_repo = Arc::new(MemberRepository::new(db_pool.clone()));

        // ── Auth ─────────────────────────────────────────────
        let password_hasher = Arc::new(PasswordHasher::new());
        let jwt_encoder = Arc::new(JwtEncoder::new(&config.auth));
        let jwt_decoder = Arc::new(JwtDecoder::new(&config.auth));
        let session_manager = Arc::new(SessionManager::new(
            Arc::clone(&jwt_encoder),
            Arc::clone(&user_repo),
            Arc::clone(&session_repo),
            Arc::clone(&password_hasher),
            config.session.clone(),
        ));

        // ── Services ─────────────────────────────────────────
        let roster_service = Arc::new(RosterService::new(
            Arc::clone(&record_repo),
            config.upload.clone(),
        ));
        let member_service = Arc::new(MemberService::new(
            Arc::clone(&member_repo),
            Arc::clone(&password_hasher),
        ));

        Self {
            config: Arc::new(config),
            db_pool,
            jwt_encoder,
            jwt_decoder,
            password_hasher,
            session_manager,
            user_repo,
            session_repo,
            record_repo,
            member_repo,
            roster_service,
            member_service,
        }
    }
}
