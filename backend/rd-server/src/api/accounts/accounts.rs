//! Account registration handler

use crate::{ApiResult, AppState, IdentityResponse, RegisterRequest};

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};

/// POST /api/v1/accounts
///
/// Register a new identity. The score record is created on first sign-in.
pub async fn register(
    State(state): State<AppState>,
    payload: Result<Json<RegisterRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<IdentityResponse>)> {
    let Json(request) = payload?;

    let identity = state.service.register(request.into()).await?;

    Ok((
        StatusCode::CREATED,
        Json(IdentityResponse {
            identity: identity.into(),
        }),
    ))
}
