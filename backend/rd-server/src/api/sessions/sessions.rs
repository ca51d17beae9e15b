//! Sign-in handler
//!
//! Sign-out is client side: the client discards its token.

use crate::{ApiResult, AppState, SessionResponse, SignInRequest};

use rd_core::{Credentials, normalize_email};

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};

/// POST /api/v1/sessions
///
/// Verify credentials, load (or initialize) the score record and issue a token.
pub async fn sign_in(
    State(state): State<AppState>,
    payload: Result<Json<SignInRequest>, JsonRejection>,
) -> ApiResult<Json<SessionResponse>> {
    let Json(request) = payload?;

    state.login_limiter.check(&normalize_email(&request.email))?;

    let credentials = Credentials::from(request);
    let session = state.service.sign_in(&credentials).await?;
    let token = state.tokens.issue(session.identity.id)?;

    log::info!("Identity {} signed in", session.identity.id);

    Ok(Json(SessionResponse {
        token,
        identity: session.identity.into(),
        account: session.account.into(),
    }))
}
