//! Integration tests for the active-session cap.

use http::StatusCode;

use crate::helpers::TestApp;

fn login_body(username: &str) -> serde_json::Value {
    serde_json::json!({
        "username": username,
        "password": "password123",
    })
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL"]
async fn test_logins_below_cap_succeed() {
    let app = TestApp::new().await;
    let user_id = app.create_test_user("capuser", "password123").await;

    let resp1 = app
        .request("POST", "/api/auth/login", Some(login_body("capuser")), None)
        .await;
    assert_eq!(resp1.status, StatusCode::OK);
    assert_eq!(app.count_active_sessions(user_id).await, 1);

    let resp2 = app
        .request("POST", "/api/auth/login", Some(login_body("capuser")), None)
        .await;
    assert_eq!(resp2.status, StatusCode::OK);
    assert_eq!(app.count_active_sessions(user_id).await, 2);
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL"]
async fn test_login_at_cap_is_refused() {
    let app = TestApp::new().await;
    let user_id = app.create_test_user("cappeduser", "password123").await;

    app.login("cappeduser", "password123").await;
    app.login("cappeduser", "password123").await;
    assert_eq!(app.count_active_sessions(user_id).await, 2);

    let response = app
        .request(
            "POST",
            "/api/auth/login",
            Some(login_body("cappeduser")),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::CONFLICT);
    assert_eq!(
        response.body["message"],
        "Maximum 2 active sessions allowed"
    );
    // No session row was created by the refused login.
    assert_eq!(app.count_active_sessions(user_id).await, 2);
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL"]
async fn test_logout_frees_a_seat() {
    let app = TestApp::new().await;
    let user_id = app.create_test_user("seatuser", "password123").await;

    let token1 = app.login("seatuser", "password123").await;
    app.login("seatuser", "password123").await;

    let response = app
        .request("POST", "/api/auth/logout", None, Some(&token1))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(app.count_active_sessions(user_id).await, 1);

    // The freed seat can be taken again.
    let response = app
        .request("POST", "/api/auth/login", Some(login_body("seatuser")), None)
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(app.count_active_sessions(user_id).await, 2);
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL"]
async fn test_cap_applies_per_user() {
    let app = TestApp::new().await;
    let alice = app.create_test_user("alice", "password123").await;
    let bob = app.create_test_user("bob", "password123").await;

    app.login("alice", "password123").await;
    app.login("alice", "password123").await;

    // Alice being at the cap does not affect Bob.
    let response = app
        .request("POST", "/api/auth/login", Some(login_body("bob")), None)
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(app.count_active_sessions(alice).await, 2);
    assert_eq!(app.count_active_sessions(bob).await, 1);
}
