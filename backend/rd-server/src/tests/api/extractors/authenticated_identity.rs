use crate::{AppState, AuthenticatedIdentity};

use rd_config::Config;

use axum::{body::Body, extract::FromRequestParts, http::Request};
use uuid::Uuid;

const SECRET: &str = "test-secret-key-at-least-32-bytes!!";

async fn create_test_state() -> AppState {
    let pool = rd_db::connect_in_memory()
        .await
        .expect("Failed to create test pool");

    AppState::new(pool, &Config::default(), SECRET, None)
}

#[tokio::test]
async fn test_extractor_with_valid_bearer_token() {
    let state = create_test_state().await;
    let identity_id = Uuid::new_v4();
    let token = state.tokens.issue(identity_id).unwrap();
    let request = Request::builder()
        .header("Authorization", format!("Bearer {}", token))
        .body(Body::empty())
        .unwrap();

    let (mut parts, _body) = request.into_parts();
    let result = AuthenticatedIdentity::from_request_parts(&mut parts, &state).await;

    assert_eq!(result.unwrap().0, identity_id);
}

#[tokio::test]
async fn test_extractor_without_header_is_unauthorized() {
    let state = create_test_state().await;
    let request = Request::builder().body(Body::empty()).unwrap();

    let (mut parts, _body) = request.into_parts();
    let result = AuthenticatedIdentity::from_request_parts(&mut parts, &state).await;

    assert!(matches!(result, Err(crate::ApiError::Unauthorized { .. })));
}

#[tokio::test]
async fn test_extractor_with_basic_scheme_is_unauthorized() {
    let state = create_test_state().await;
    let request = Request::builder()
        .header("Authorization", "Basic dXNlcjpwYXNz")
        .body(Body::empty())
        .unwrap();

    let (mut parts, _body) = request.into_parts();
    let result = AuthenticatedIdentity::from_request_parts(&mut parts, &state).await;

    assert!(matches!(result, Err(crate::ApiError::Unauthorized { .. })));
}

#[tokio::test]
async fn test_extractor_with_foreign_token_is_unauthorized() {
    let state = create_test_state().await;
    let other = rd_auth::SessionTokens::with_hs256(b"another-secret-key-at-least-32-bytes", 3600);
    let token = other.issue(Uuid::new_v4()).unwrap();
    let request = Request::builder()
        .header("Authorization", format!("Bearer {}", token))
        .body(Body::empty())
        .unwrap();

    let (mut parts, _body) = request.into_parts();
    let result = AuthenticatedIdentity::from_request_parts(&mut parts, &state).await;

    assert!(matches!(result, Err(crate::ApiError::Unauthorized { .. })));
}
