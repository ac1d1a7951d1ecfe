//! Shared test helpers for integration tests.

use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode};
use serde_json::Value;
use sqlx::PgPool;
use tower::ServiceExt;
use uuid::Uuid;

use rosterhub_api::state::AppState;
use rosterhub_core::config::AppConfig;

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Database pool for direct queries
    pub db_pool: PgPool,
    /// Application config
    pub config: AppConfig,
}

impl TestApp {
    /// Create a new test application backed by the test database.
    pub async fn new() -> Self {
        let config = AppConfig::from_file("tests/fixtures/test_config.toml")
            .expect("Failed to load test config");

        let db_pool = rosterhub_database::connection::DatabasePool::connect(&config.database)
            .await
            .expect("Failed to connect to test database")
            .into_pool();

        rosterhub_database::migration::run_migrations(&db_pool)
            .await
            .expect("Failed to run migrations");

        Self::clean_database(&db_pool).await;

        let state = AppState::build(config.clone(), db_pool.clone());
        let router = rosterhub_api::router::build_router(state);

        Self {
            router,
            db_pool,
            config,
        }
    }

    /// Clean all test data from the database
    async fn clean_database(pool: &PgPool) {
        let tables = ["user_sessions", "records", "members", "users"];

        for table in &tables {
            let query = format!("DELETE FROM {}", table);
            let _ = sqlx::query(&query).execute(pool).await;
        }
    }

    /// Create a test user and return their ID
    pub async fn create_test_user(&self, username: &str, password: &str) -> Uuid {
        let hasher = rosterhub_auth::password::hasher::PasswordHasher::new();
        let hash = hasher
            .hash_password(password)
            .expect("Failed to hash password");
        let id = Uuid::new_v4();

        sqlx::query(
            "INSERT INTO users (id, username, password_hash, created_at) \
             VALUES ($1, $2, $3, NOW())",
        )
        .bind(id)
        .bind(username)
        .bind(&hash)
        .execute(&self.db_pool)
        .await
        .expect("Failed to create test user");

        id
    }

    /// Login and return the bearer token
    pub async fn login(&self, username: &str, password: &str) -> String {
        let body = serde_json::json!({
            "username": username,
            "password": password,
        });

        let response = self
            .request("POST", "/api/auth/login", Some(body), None)
            .await;

        assert_eq!(
            response.status,
            StatusCode::OK,
            "Login failed: {:?}",
            response.body
        );

        response.body["data"]["token"]
            .as_str()
            .expect("No token in login response")
            .to_string()
    }

    /// Count the active sessions stored for a user
    pub async fn count_active_sessions(&self, user_id: Uuid) -> i64 {
        sqlx::query_scalar(
            "SELECT COUNT(*) FROM user_sessions WHERE user_id = $1 AND is_active = TRUE",
        )
        .bind(user_id)
        .fetch_one(&self.db_pool)
        .await
        .expect("Failed to count sessions")
    }

    /// The set of record emails currently stored, sorted
    pub async fn record_emails(&self) -> Vec<String> {
        sqlx::query_scalar("SELECT email FROM records ORDER BY email")
            .fetch_all(&self.db_pool)
            .await
            .expect("Failed to list record emails")
    }

    /// Make an HTTP request to the test app
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();

        let mut req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json");

        if let Some(token) = token {
            req = req.header("Authorization", format!("Bearer {}", token));
        }

        let req = req
            .body(Body::from(body_str))
            .expect("Failed to build request");

        self.send(req).await
    }

    /// Upload a roster file through the multipart endpoint
    pub async fn upload_roster(
        &self,
        token: &str,
        filename: &str,
        content: &[u8],
    ) -> TestResponse {
        let boundary = "rosterhub-test-boundary";
        let mut body = Vec::new();
        body.extend_from_slice(
            format!(
                "--{boundary}\r\n\
                 Content-Disposition: form-data; name=\"file\"; filename=\"{filename}\"\r\n\
                 Content-Type: text/csv\r\n\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(content);
        body.extend_from_slice(format!("\r\n--{boundary}--\r\n").as_bytes());

        let req = Request::builder()
            .method("POST")
            .uri("/api/roster/upload")
            .header(
                "Content-Type",
                format!("multipart/form-data; boundary={boundary}"),
            )
            .header("Authorization", format!("Bearer {}", token))
            .body(Body::from(body))
            .expect("Failed to build upload request");

        self.send(req).await
    }

    async fn send(&self, req: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse { status, body }
    }
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Parsed JSON body
    pub body: Value,
}
