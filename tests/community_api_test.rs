//! Community membership API tests
//!
//! Exercises `POST`/`GET /community-members`: the atomic RPC path, the
//! manual fallback with duplicate tolerance, the atomic-only strategy,
//! and input validation.

mod common;

use axum::http::StatusCode;
use common::{supabase_for, test_server, test_state, test_state_with};
use pretty_assertions::assert_eq;
use serde_json::json;
use vocably::backend::server::config::{Settings, WriteStrategy};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_join_via_rpc() {
    let mock = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/rest/v1/rpc/set_community_membership"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"member_count": 1, "joined": true})),
        )
        .mount(&mock)
        .await;

    let server = test_server(test_state(Some(supabase_for(&mock))));

    let response = server
        .post("/community-members")
        .json(&json!({"action": "join", "userId": "u1", "userName": "Ada"}))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: serde_json::Value = response.json();
    assert_eq!(body["members"], 1);
    assert_eq!(body["joined"], true);

    // Joining again is a no-op on the backend, not an error
    let repeat = server
        .post("/community-members")
        .json(&json!({"action": "join", "userId": "u1", "userName": "Ada"}))
        .await;
    assert_eq!(repeat.status_code(), StatusCode::OK);
    let body: serde_json::Value = repeat.json();
    assert_eq!(body["members"], 1);
    assert_eq!(body["joined"], true);
}

#[tokio::test]
async fn test_join_falls_back_to_manual_writes() {
    let mock = MockServer::start().await;

    // RPC not deployed on this backend
    Mock::given(method("POST"))
        .and(path("/rest/v1/rpc/set_community_membership"))
        .respond_with(ResponseTemplate::new(404).set_body_string("function not found"))
        .mount(&mock)
        .await;

    Mock::given(method("POST"))
        .and(path("/rest/v1/community_members"))
        .respond_with(ResponseTemplate::new(201))
        .mount(&mock)
        .await;

    // Aggregate count: exact count via Content-Range
    Mock::given(method("GET"))
        .and(path("/rest/v1/community_members"))
        .and(query_param("select", "*"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("Content-Range", "0-0/1")
                .set_body_json(json!([{"user_id": "u1"}])),
        )
        .mount(&mock)
        .await;

    // Caller's membership flag
    Mock::given(method("GET"))
        .and(path("/rest/v1/community_members"))
        .and(query_param("select", "user_id"))
        .and(query_param("user_id", "eq.u1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"user_id": "u1"}])))
        .mount(&mock)
        .await;

    let server = test_server(test_state(Some(supabase_for(&mock))));

    let response = server
        .post("/community-members")
        .json(&json!({"action": "join", "userId": "u1"}))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: serde_json::Value = response.json();
    assert_eq!(body["members"], 1);
    assert_eq!(body["joined"], true);
}

#[tokio::test]
async fn test_fallback_tolerates_duplicate_join() {
    let mock = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/rest/v1/rpc/set_community_membership"))
        .respond_with(ResponseTemplate::new(404).set_body_string("function not found"))
        .mount(&mock)
        .await;

    // Unique violation on the association table
    Mock::given(method("POST"))
        .and(path("/rest/v1/community_members"))
        .respond_with(ResponseTemplate::new(409).set_body_string(
            r#"{"code":"23505","message":"duplicate key value violates unique constraint"}"#,
        ))
        .mount(&mock)
        .await;

    Mock::given(method("GET"))
        .and(path("/rest/v1/community_members"))
        .and(query_param("select", "*"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("Content-Range", "0-0/1")
                .set_body_json(json!([{"user_id": "u1"}])),
        )
        .mount(&mock)
        .await;

    Mock::given(method("GET"))
        .and(path("/rest/v1/community_members"))
        .and(query_param("select", "user_id"))
        .and(query_param("user_id", "eq.u1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"user_id": "u1"}])))
        .mount(&mock)
        .await;

    let server = test_server(test_state(Some(supabase_for(&mock))));

    let response = server
        .post("/community-members")
        .json(&json!({"action": "join", "userId": "u1"}))
        .await;

    // Already joined reads as success, not an error
    assert_eq!(response.status_code(), StatusCode::OK);
    let body: serde_json::Value = response.json();
    assert_eq!(body["members"], 1);
    assert_eq!(body["joined"], true);
}

#[tokio::test]
async fn test_leave_for_user_who_never_joined() {
    let mock = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/rest/v1/rpc/set_community_membership"))
        .respond_with(ResponseTemplate::new(404).set_body_string("function not found"))
        .mount(&mock)
        .await;

    Mock::given(method("DELETE"))
        .and(path("/rest/v1/community_members"))
        .and(query_param("user_id", "eq.ghost"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&mock)
        .await;

    Mock::given(method("GET"))
        .and(path("/rest/v1/community_members"))
        .and(query_param("select", "*"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("Content-Range", "*/0")
                .set_body_json(json!([])),
        )
        .mount(&mock)
        .await;

    Mock::given(method("GET"))
        .and(path("/rest/v1/community_members"))
        .and(query_param("select", "user_id"))
        .and(query_param("user_id", "eq.ghost"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&mock)
        .await;

    let server = test_server(test_state(Some(supabase_for(&mock))));

    let response = server
        .post("/community-members")
        .json(&json!({"action": "leave", "userId": "ghost"}))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: serde_json::Value = response.json();
    assert_eq!(body["members"], 0);
    assert_eq!(body["joined"], false);
}

#[tokio::test]
async fn test_atomic_only_strategy_fails_closed() {
    let mock = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/rest/v1/rpc/set_community_membership"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&mock)
        .await;

    let settings = Settings {
        write_strategy: WriteStrategy::AtomicOnly,
        ..Settings::default()
    };
    let server = test_server(test_state_with(Some(supabase_for(&mock)), settings));

    let response = server
        .post("/community-members")
        .json(&json!({"action": "join", "userId": "u1"}))
        .await;

    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: serde_json::Value = response.json();
    assert!(body["error"].as_str().is_some());
}

#[tokio::test]
async fn test_get_membership_with_user() {
    let mock = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/rest/v1/community_members"))
        .and(query_param("select", "*"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("Content-Range", "0-0/7")
                .set_body_json(json!([{"user_id": "other"}])),
        )
        .mount(&mock)
        .await;

    Mock::given(method("GET"))
        .and(path("/rest/v1/community_members"))
        .and(query_param("select", "user_id"))
        .and(query_param("user_id", "eq.u1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"user_id": "u1"}])))
        .mount(&mock)
        .await;

    let server = test_server(test_state(Some(supabase_for(&mock))));

    let response = server.get("/community-members?userId=u1").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: serde_json::Value = response.json();
    assert_eq!(body["members"], 7);
    assert_eq!(body["joined"], true);
}

#[tokio::test]
async fn test_get_membership_without_user_is_not_joined() {
    let mock = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/rest/v1/community_members"))
        .and(query_param("select", "*"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("Content-Range", "0-0/7")
                .set_body_json(json!([{"user_id": "other"}])),
        )
        .mount(&mock)
        .await;

    let server = test_server(test_state(Some(supabase_for(&mock))));

    let response = server.get("/community-members").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: serde_json::Value = response.json();
    assert_eq!(body["members"], 7);
    assert_eq!(body["joined"], false);
}

#[tokio::test]
async fn test_missing_fields_are_bad_request() {
    let server = test_server(test_state(None));

    let response = server
        .post("/community-members")
        .json(&json!({"action": "join"}))
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);

    let response = server
        .post("/community-members")
        .json(&json!({"userId": "u1"}))
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);

    let response = server
        .post("/community-members")
        .json(&json!({"action": "quit", "userId": "u1"}))
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_unconfigured_backend_is_server_error() {
    let server = test_server(test_state(None));

    let response = server
        .post("/community-members")
        .json(&json!({"action": "join", "userId": "u1"}))
        .await;
    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);

    let response = server.get("/community-members").await;
    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
}
