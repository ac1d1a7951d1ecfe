//! Integration tests for roster upload and synchronization.

use http::StatusCode;

use crate::helpers::TestApp;

const HEADER: &str = "name,email,phone,department,salary\n";

async fn logged_in_app() -> (TestApp, String) {
    let app = TestApp::new().await;
    app.create_test_user("uploader", "password123").await;
    let token = app.login("uploader", "password123").await;
    (app, token)
}

fn roster(rows: &[&str]) -> Vec<u8> {
    let mut csv = String::from(HEADER);
    for row in rows {
        csv.push_str(row);
        csv.push('\n');
    }
    csv.into_bytes()
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL"]
async fn test_initial_upload_inserts_everything() {
    let (app, token) = logged_in_app().await;

    let csv = roster(&[
        "Alice,alice@example.com,555-0100,Engineering,85000",
        "Bob,bob@example.com,555-0101,Sales,62000",
    ]);
    let response = app.upload_roster(&token, "roster.csv", &csv).await;

    assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);
    assert_eq!(response.body["data"]["inserted"], 2);
    assert_eq!(response.body["data"]["updated"], 0);
    assert_eq!(response.body["data"]["deleted"], 0);
    assert_eq!(
        app.record_emails().await,
        vec!["alice@example.com", "bob@example.com"]
    );
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL"]
async fn test_sync_converges_to_uploaded_set() {
    let (app, token) = logged_in_app().await;

    let first = roster(&[
        "A,a@example.com,1,Eng,1000",
        "B,b@example.com,2,Eng,2000",
        "C,c@example.com,3,Eng,3000",
    ]);
    app.upload_roster(&token, "roster.csv", &first).await;

    let second = roster(&[
        "B,b@example.com,2,Eng,2500",
        "C,c@example.com,3,Eng,3500",
        "D,d@example.com,4,Eng,4000",
    ]);
    let response = app.upload_roster(&token, "roster.csv", &second).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["inserted"], 1);
    assert_eq!(response.body["data"]["updated"], 2);
    assert_eq!(response.body["data"]["deleted"], 1);
    // a removed, b & c updated, d inserted.
    assert_eq!(
        app.record_emails().await,
        vec!["b@example.com", "c@example.com", "d@example.com"]
    );

    let salary: f64 =
        sqlx::query_scalar("SELECT salary FROM records WHERE email = 'b@example.com'")
            .fetch_one(&app.db_pool)
            .await
            .expect("record should exist");
    assert_eq!(salary, 2500.0);
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL"]
async fn test_sync_is_idempotent() {
    let (app, token) = logged_in_app().await;

    let csv = roster(&[
        "Alice,alice@example.com,555-0100,Engineering,85000",
        "Bob,bob@example.com,555-0101,Sales,62000",
    ]);
    app.upload_roster(&token, "roster.csv", &csv).await;
    let response = app.upload_roster(&token, "roster.csv", &csv).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["inserted"], 0);
    assert_eq!(response.body["data"]["updated"], 2);
    assert_eq!(response.body["data"]["deleted"], 0);
    assert_eq!(
        app.record_emails().await,
        vec!["alice@example.com", "bob@example.com"]
    );
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL"]
async fn test_duplicate_email_in_upload_last_row_wins() {
    let (app, token) = logged_in_app().await;

    let csv = roster(&[
        "Alice,alice@example.com,555-0100,Engineering,85000",
        "Alice Updated,alice@example.com,555-0199,Platform,90000",
    ]);
    let response = app.upload_roster(&token, "roster.csv", &csv).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(app.record_emails().await, vec!["alice@example.com"]);

    let (name, salary): (String, f64) =
        sqlx::query_as("SELECT name, salary FROM records WHERE email = 'alice@example.com'")
            .fetch_one(&app.db_pool)
            .await
            .expect("record should exist");
    assert_eq!(name, "Alice Updated");
    assert_eq!(salary, 90000.0);
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL"]
async fn test_upload_rejects_wrong_extension() {
    let (app, token) = logged_in_app().await;

    let response = app.upload_roster(&token, "roster.txt", b"data").await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["message"], "Only CSV and Excel files allowed");
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL"]
async fn test_excel_upload_yields_no_rows_and_no_sync() {
    let (app, token) = logged_in_app().await;

    let seed = roster(&["Alice,alice@example.com,555-0100,Engineering,85000"]);
    app.upload_roster(&token, "roster.csv", &seed).await;

    // The extension passes the gate but binary content parses to zero
    // rows; existing records stay untouched.
    let response = app
        .upload_roster(&token, "roster.xlsx", b"PK\x03\x04binary")
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(app.record_emails().await, vec!["alice@example.com"]);
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL"]
async fn test_upload_requires_authentication() {
    let app = TestApp::new().await;

    let response = app
        .upload_roster("invalid-token", "roster.csv", HEADER.as_bytes())
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL"]
async fn test_short_rows_are_skipped() {
    let (app, token) = logged_in_app().await;

    let csv = roster(&[
        "Alice,alice@example.com,555-0100,Engineering,85000",
        "Bob,bob@example.com",
    ]);
    let response = app.upload_roster(&token, "roster.csv", &csv).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["inserted"], 1);
    assert_eq!(app.record_emails().await, vec!["alice@example.com"]);
}
