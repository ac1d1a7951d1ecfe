//! Integration tests for the authentication flow.

use http::StatusCode;

use crate::helpers::TestApp;

#[tokio::test]
#[ignore = "requires a running PostgreSQL"]
async fn test_login_success() {
    let app = TestApp::new().await;
    let user_id = app.create_test_user("testuser", "password123").await;

    let response = app
        .request(
            "POST",
            "/api/auth/login",
            Some(serde_json::json!({
                "username": "testuser",
                "password": "password123",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body["data"]["token"].is_string());
    assert_eq!(response.body["data"]["user"]["username"], "testuser");
    assert_eq!(app.count_active_sessions(user_id).await, 1);
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL"]
async fn test_login_invalid_password() {
    let app = TestApp::new().await;
    let user_id = app.create_test_user("testuser2", "password123").await;

    let response = app
        .request(
            "POST",
            "/api/auth/login",
            Some(serde_json::json!({
                "username": "testuser2",
                "password": "wrongpassword",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(app.count_active_sessions(user_id).await, 0);
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL"]
async fn test_login_nonexistent_user() {
    let app = TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/auth/login",
            Some(serde_json::json!({
                "username": "nobody",
                "password": "whatever",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL"]
async fn test_login_missing_credentials() {
    let app = TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/auth/login",
            Some(serde_json::json!({
                "username": "",
                "password": "",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL"]
async fn test_me_returns_current_user() {
    let app = TestApp::new().await;
    app.create_test_user("meuser", "password123").await;
    let token = app.login("meuser", "password123").await;

    let response = app.request("GET", "/api/auth/me", None, Some(&token)).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["username"], "meuser");
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL"]
async fn test_me_without_token() {
    let app = TestApp::new().await;

    let response = app.request("GET", "/api/auth/me", None, None).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL"]
async fn test_logout_deactivates_session() {
    let app = TestApp::new().await;
    let user_id = app.create_test_user("logoutuser", "password123").await;
    let token = app.login("logoutuser", "password123").await;
    assert_eq!(app.count_active_sessions(user_id).await, 1);

    let response = app
        .request("POST", "/api/auth/logout", None, Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(app.count_active_sessions(user_id).await, 0);

    // The token is refused afterwards even though it has not expired.
    let response = app.request("GET", "/api/auth/me", None, Some(&token)).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL"]
async fn test_logout_unknown_token_is_noop() {
    let app = TestApp::new().await;

    let response = app
        .request("POST", "/api/auth/logout", None, Some("not-a-real-token"))
        .await;

    assert_eq!(response.status, StatusCode::OK);
}
