#![allow(dead_code)]

//! Test infrastructure for rd-server API tests

use rd_config::Config;
use rd_server::{AppState, build_router};

use axum::{
    Router,
    body::Body,
    http::{Request, Response, StatusCode},
};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

pub const TEST_SECRET: &str = "integration-test-secret-32-bytes-long";
pub const TEST_PASSWORD: &str = "correct-horse";

/// AppState over a fresh in-memory database
pub async fn create_test_app_state(config: &Config) -> AppState {
    let pool = rd_db::connect_in_memory()
        .await
        .expect("Failed to create test database");

    AppState::new(pool, config, TEST_SECRET, None)
}

pub async fn create_test_app() -> Router {
    build_router(create_test_app_state(&Config::default()).await)
}

pub fn json_request(method: &str, uri: &str, body: Value, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header("Content-Type", "application/json");
    if let Some(token) = token {
        builder = builder.header("Authorization", format!("Bearer {}", token));
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

pub fn get_request(uri: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(token) = token {
        builder = builder.header("Authorization", format!("Bearer {}", token));
    }
    builder.body(Body::empty()).unwrap()
}

pub async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response: Response<Body> = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json = if body.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body).unwrap_or(Value::Null)
    };
    (status, json)
}

pub async fn register(app: &Router, name: &str) -> Value {
    let (status, json) = send(
        app,
        json_request(
            "POST",
            "/api/v1/accounts",
            json!({
                "email": format!("{}@example.com", name.to_lowercase()),
                "display_name": name,
                "password": TEST_PASSWORD,
            }),
            None,
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "register failed: {}", json);
    json
}

/// Register and sign in; returns the bearer token
pub async fn sign_in(app: &Router, name: &str) -> String {
    register(app, name).await;
    let (status, json) = send(
        app,
        json_request(
            "POST",
            "/api/v1/sessions",
            json!({
                "email": format!("{}@example.com", name.to_lowercase()),
                "password": TEST_PASSWORD,
            }),
            None,
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "sign-in failed: {}", json);
    json["token"].as_str().unwrap().to_string()
}

pub async fn record(app: &Router, token: &str, outcome: &str) -> (StatusCode, Value) {
    send(
        app,
        json_request(
            "POST",
            "/api/v1/me/outcomes",
            json!({ "outcome": outcome }),
            Some(token),
        ),
    )
    .await
}
