//! Integration tests for record listing, filtering, and dashboard stats.

use http::StatusCode;

use crate::helpers::TestApp;

async fn app_with_records() -> (TestApp, String) {
    let app = TestApp::new().await;
    app.create_test_user("viewer", "password123").await;
    let token = app.login("viewer", "password123").await;

    let csv = b"name,email,phone,department,salary\n\
        Alice,alice@example.com,555-0100,Engineering,85000\n\
        Bob,bob@example.com,555-0101,Eng-Ops,62000\n\
        Carol,carol@example.com,555-0102,Marketing,70000\n";
    let response = app.upload_roster(&token, "roster.csv", csv).await;
    assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);

    (app, token)
}

fn emails(body: &serde_json::Value) -> Vec<&str> {
    let mut emails: Vec<&str> = body["data"]
        .as_array()
        .expect("data should be an array")
        .iter()
        .map(|r| r["email"].as_str().expect("email should be a string"))
        .collect();
    emails.sort_unstable();
    emails
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL"]
async fn test_unfiltered_listing_returns_everything() {
    let (app, token) = app_with_records().await;

    let response = app.request("GET", "/api/records", None, Some(&token)).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        emails(&response.body),
        vec!["alice@example.com", "bob@example.com", "carol@example.com"]
    );
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL"]
async fn test_department_filter_matches_substrings() {
    let (app, token) = app_with_records().await;

    // "Eng" is contained in both "Engineering" and "Eng-Ops".
    let response = app
        .request(
            "GET",
            "/api/records?filter_department=Eng",
            None,
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        emails(&response.body),
        vec!["alice@example.com", "bob@example.com"]
    );

    // The full department name only matches itself.
    let response = app
        .request(
            "GET",
            "/api/records?filter_department=Engineering",
            None,
            Some(&token),
        )
        .await;
    assert_eq!(emails(&response.body), vec!["alice@example.com"]);
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL"]
async fn test_filters_are_conjunctive() {
    let (app, token) = app_with_records().await;

    let response = app
        .request(
            "GET",
            "/api/records?filter_name=o&filter_department=Eng",
            None,
            Some(&token),
        )
        .await;

    // "o" matches Bob and Carol; "Eng" narrows that to Bob.
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(emails(&response.body), vec!["bob@example.com"]);
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL"]
async fn test_blank_filter_values_do_not_constrain() {
    let (app, token) = app_with_records().await;

    let response = app
        .request(
            "GET",
            "/api/records?filter_name=&filter_department=",
            None,
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(emails(&response.body).len(), 3);
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL"]
async fn test_listing_requires_authentication() {
    let app = TestApp::new().await;

    let response = app.request("GET", "/api/records", None, None).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL"]
async fn test_stats_honor_the_same_filters() {
    let (app, token) = app_with_records().await;

    let response = app
        .request("GET", "/api/records/stats", None, Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["total_records"], 3);
    assert_eq!(response.body["data"]["departments"], 3);
    assert_eq!(response.body["data"]["total_salary"], 217000.0);

    let response = app
        .request(
            "GET",
            "/api/records/stats?filter_department=Eng",
            None,
            Some(&token),
        )
        .await;
    assert_eq!(response.body["data"]["total_records"], 2);
    assert_eq!(response.body["data"]["departments"], 2);
    assert_eq!(response.body["data"]["total_salary"], 147000.0);
}
