//! Quiz submission API tests
//!
//! Exercises `POST /quiz/submit`: session authentication, one submission
//! per user, and error mapping.

mod common;

use axum::http::StatusCode;
use common::{supabase_for, test_server, test_state};
use pretty_assertions::assert_eq;
use serde_json::json;
use vocably::backend::auth::sessions::create_token;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn session_token() -> String {
    std::env::set_var("SUPABASE_JWT_SECRET", "integration-test-secret");
    create_token(
        uuid::Uuid::new_v4(),
        Some("Ada".to_string()),
        Some("ada@example.com".to_string()),
        None,
    )
    .unwrap()
}

#[tokio::test]
async fn test_submit_score() {
    let mock = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/rest/v1/quiz_scores"))
        .respond_with(ResponseTemplate::new(201))
        .mount(&mock)
        .await;

    let server = test_server(test_state(Some(supabase_for(&mock))));

    let response = server
        .post("/quiz/submit")
        .add_header("Authorization", format!("Bearer {}", session_token()))
        .json(&json!({"score": 8}))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.json::<serde_json::Value>()["ok"], true);
}

#[tokio::test]
async fn test_duplicate_submission_is_conflict() {
    let mock = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/rest/v1/quiz_scores"))
        .respond_with(ResponseTemplate::new(409).set_body_string(
            r#"{"code":"23505","message":"duplicate key value violates unique constraint"}"#,
        ))
        .mount(&mock)
        .await;

    let server = test_server(test_state(Some(supabase_for(&mock))));

    let response = server
        .post("/quiz/submit")
        .add_header("Authorization", format!("Bearer {}", session_token()))
        .json(&json!({"score": 8}))
        .await;

    assert_eq!(response.status_code(), StatusCode::CONFLICT);
    let body: serde_json::Value = response.json();
    assert!(body["error"].as_str().unwrap().contains("already"));
}

#[tokio::test]
async fn test_missing_session_is_unauthorized() {
    let server = test_server(test_state(None));

    let response = server.post("/quiz/submit").json(&json!({"score": 8})).await;

    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_garbage_token_is_unauthorized() {
    std::env::set_var("SUPABASE_JWT_SECRET", "integration-test-secret");
    let server = test_server(test_state(None));

    let response = server
        .post("/quiz/submit")
        .add_header("Authorization", "Bearer not.a.token")
        .json(&json!({"score": 8}))
        .await;

    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_missing_score_is_bad_request() {
    let server = test_server(test_state(None));

    let response = server
        .post("/quiz/submit")
        .add_header("Authorization", format!("Bearer {}", session_token()))
        .json(&json!({}))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_unconfigured_backend_is_server_error() {
    let server = test_server(test_state(None));

    let response = server
        .post("/quiz/submit")
        .add_header("Authorization", format!("Bearer {}", session_token()))
        .json(&json!({"score": 8}))
        .await;

    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
}
