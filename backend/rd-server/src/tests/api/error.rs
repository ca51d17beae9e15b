use crate::ApiError;

use rd_auth::AuthError;
use rd_service::ServiceError;

use std::panic::Location;

use axum::http::StatusCode;
use axum::response::IntoResponse;
use error_location::ErrorLocation;
use http_body_util::BodyExt;
use uuid::Uuid;

async fn body_json(error: ApiError) -> (StatusCode, serde_json::Value) {
    let response = error.into_response();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn test_validation_error_returns_400_with_field() {
    let error = ApiError::from(ServiceError::Validation {
        message: "Missing Username".into(),
        field: Some("display_name".into()),
        location: ErrorLocation::from(Location::caller()),
    });

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"]["message"], "Missing Username");
    assert_eq!(json["error"]["field"], "display_name");
}

#[tokio::test]
async fn test_service_errors_map_to_statuses() {
    let cases = [
        (ServiceError::invalid_credential(), StatusCode::UNAUTHORIZED),
        (
            ServiceError::DuplicateIdentity {
                location: ErrorLocation::from(Location::caller()),
            },
            StatusCode::CONFLICT,
        ),
        (
            ServiceError::WeakCredential {
                message: "too short".into(),
                location: ErrorLocation::from(Location::caller()),
            },
            StatusCode::UNPROCESSABLE_ENTITY,
        ),
        (
            ServiceError::unknown_identity(Uuid::new_v4()),
            StatusCode::NOT_FOUND,
        ),
        (
            ServiceError::persistence("constraint failed"),
            StatusCode::SERVICE_UNAVAILABLE,
        ),
        (
            ServiceError::internal("join error"),
            StatusCode::INTERNAL_SERVER_ERROR,
        ),
    ];

    for (error, expected) in cases {
        let (status, _) = body_json(ApiError::from(error)).await;
        assert_eq!(status, expected);
    }
}

#[tokio::test]
async fn test_persistence_error_hides_internal_message() {
    let error = ApiError::from(ServiceError::persistence("UNIQUE constraint failed: users"));

    let (_, json) = body_json(error).await;

    assert_eq!(json["error"]["code"], "PERSISTENCE_ERROR");
    assert_eq!(json["error"]["message"], "Could not save your progress");
    assert!(json["error"].get("field").is_none());
}

#[tokio::test]
async fn test_rate_limit_returns_429() {
    let error = ApiError::from(AuthError::RateLimitExceeded {
        limit: 10,
        window_secs: 60,
        location: ErrorLocation::from(Location::caller()),
    });

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::TOO_MANY_REQUESTS);
    assert_eq!(json["error"]["code"], "RATE_LIMITED");
}

#[tokio::test]
async fn test_expired_token_returns_401() {
    let error = ApiError::from(AuthError::TokenExpired {
        location: ErrorLocation::from(Location::caller()),
    });

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["error"]["code"], "UNAUTHORIZED");
}
