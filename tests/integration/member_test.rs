//! Integration tests for the member directory mini-app.

use http::StatusCode;

use crate::helpers::TestApp;

fn member_payload(email: &str) -> serde_json::Value {
    serde_json::json!({
        "name": "Dana",
        "email": email,
        "password": "hunter2x",
        "gender": "female",
        "date_of_birth": "1992-07-15",
        "bio": "Keeps the lights on.",
        "skills": ["rust", "sql"],
    })
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL"]
async fn test_create_member() {
    let app = TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/members",
            Some(member_payload("dana@example.com")),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);
    assert_eq!(response.body["data"]["email"], "dana@example.com");
    assert_eq!(response.body["data"]["skills"][0], "rust");
    // The password never appears in the response.
    assert!(response.body["data"].get("password").is_none());
    assert!(response.body["data"].get("password_hash").is_none());
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL"]
async fn test_duplicate_member_email_conflicts() {
    let app = TestApp::new().await;

    let first = app
        .request(
            "POST",
            "/api/members",
            Some(member_payload("dup@example.com")),
            None,
        )
        .await;
    assert_eq!(first.status, StatusCode::OK);

    let second = app
        .request(
            "POST",
            "/api/members",
            Some(member_payload("dup@example.com")),
            None,
        )
        .await;
    assert_eq!(second.status, StatusCode::CONFLICT);
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL"]
async fn test_member_validation_rejections() {
    let app = TestApp::new().await;

    let bad_email = member_payload("not-an-email");
    let response = app.request("POST", "/api/members", Some(bad_email), None).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);

    let mut short_password = member_payload("short@example.com");
    short_password["password"] = serde_json::json!("abc");
    let response = app
        .request("POST", "/api/members", Some(short_password), None)
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);

    let mut no_skills = member_payload("skills@example.com");
    no_skills["skills"] = serde_json::json!([]);
    let response = app.request("POST", "/api/members", Some(no_skills), None).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL"]
async fn test_list_members() {
    let app = TestApp::new().await;

    app.request(
        "POST",
        "/api/members",
        Some(member_payload("one@example.com")),
        None,
    )
    .await;
    app.request(
        "POST",
        "/api/members",
        Some(member_payload("two@example.com")),
        None,
    )
    .await;

    let response = app.request("GET", "/api/members", None, None).await;

    assert_eq!(response.status, StatusCode::OK);
    let members = response.body["data"]
        .as_array()
        .expect("data should be an array");
    assert_eq!(members.len(), 2);
    // Newest first.
    assert_eq!(members[0]["email"], "two@example.com");
    assert_eq!(members[1]["email"], "one@example.com");
}
