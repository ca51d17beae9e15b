//! Handlers for the signed-in player's own record

use crate::{
    AccountResponse, ApiResult, AppState, AuthenticatedIdentity, RecordOutcomeRequest,
    UpdateDisplayNameRequest,
};

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};

/// GET /api/v1/me
///
/// Load the score record, creating a zeroed one on first access
pub async fn get_account(
    State(state): State<AppState>,
    AuthenticatedIdentity(identity_id): AuthenticatedIdentity,
) -> ApiResult<Json<AccountResponse>> {
    let record = state.service.load_or_init(identity_id).await?;

    Ok(Json(AccountResponse {
        account: record.into(),
    }))
}

/// PUT /api/v1/me/display-name
pub async fn update_display_name(
    State(state): State<AppState>,
    AuthenticatedIdentity(identity_id): AuthenticatedIdentity,
    payload: Result<Json<UpdateDisplayNameRequest>, JsonRejection>,
) -> ApiResult<Json<AccountResponse>> {
    let Json(request) = payload?;

    let record = state
        .service
        .update_display_name(identity_id, &request.display_name)
        .await?;

    Ok(Json(AccountResponse {
        account: record.into(),
    }))
}

/// POST /api/v1/me/outcomes
///
/// Count one completed round. A failed request means the round was not
/// recorded and may be resubmitted.
pub async fn record_outcome(
    State(state): State<AppState>,
    AuthenticatedIdentity(identity_id): AuthenticatedIdentity,
    payload: Result<Json<RecordOutcomeRequest>, JsonRejection>,
) -> ApiResult<Json<AccountResponse>> {
    let Json(request) = payload?;
    let outcome = request.into_outcome()?;

    let record = state.service.record_outcome(identity_id, outcome).await?;

    Ok(Json(AccountResponse {
        account: record.into(),
    }))
}
