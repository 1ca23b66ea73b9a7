//! Sign-up and sign-in: both end with a passcode email on its way.

use super::{
    state::AuthState,
    types::{AccountResponse, SignInRequest, SignInResponse, SignUpRequest},
    utils::{normalize_email, valid_email},
};
use crate::identity::types::NewProfile;
use axum::{
    extract::Extension,
    http::StatusCode,
    response::{IntoResponse, Json},
};
use std::sync::Arc;
use tracing::error;

#[utoipa::path(
    post,
    path = "/v1/auth/sign-up",
    request_body = SignUpRequest,
    responses(
        (status = 200, description = "Passcode emailed, profile ensured", body = AccountResponse),
        (status = 400, description = "Invalid email or empty name"),
        (status = 502, description = "Identity platform error")
    ),
    tag = "auth"
)]
pub async fn sign_up(
    state: Extension<Arc<AuthState>>,
    Json(request): Json<SignUpRequest>,
) -> impl IntoResponse {
    let email = normalize_email(&request.email);
    if !valid_email(&email) {
        return StatusCode::BAD_REQUEST.into_response();
    }

    let full_name = request.full_name.trim().to_string();
    if full_name.is_empty() {
        return StatusCode::BAD_REQUEST.into_response();
    }

    let existing = match state.identity().find_profile_by_email(&email).await {
        Ok(existing) => existing,
        Err(err) => {
            error!("Failed to look up profile by email: {err}");
            return StatusCode::BAD_GATEWAY.into_response();
        }
    };

    // A passcode is sent on every attempt, even for accounts that already
    // have a profile, so retrying the form always yields a fresh code.
    let token = match state.identity().create_email_token(&email).await {
        Ok(token) => token,
        Err(err) => {
            error!("Failed to send a passcode: {err}");
            return StatusCode::BAD_GATEWAY.into_response();
        }
    };

    if existing.is_none() {
        let profile = NewProfile {
            full_name,
            email,
            avatar: state.config().default_avatar_url().to_string(),
            account_id: token.user_id.clone(),
        };
        if let Err(err) = state.identity().create_profile(profile).await {
            error!("Failed to create profile: {err}");
            return StatusCode::BAD_GATEWAY.into_response();
        }
    }

    Json(AccountResponse {
        account_id: token.user_id,
    })
    .into_response()
}

#[utoipa::path(
    post,
    path = "/v1/auth/sign-in",
    request_body = SignInRequest,
    responses(
        (status = 200, description = "Passcode emailed, or no account for that email", body = SignInResponse),
        (status = 400, description = "Invalid email"),
        (status = 502, description = "Identity platform error")
    ),
    tag = "auth"
)]
pub async fn sign_in(
    state: Extension<Arc<AuthState>>,
    Json(request): Json<SignInRequest>,
) -> impl IntoResponse {
    let email = normalize_email(&request.email);
    if !valid_email(&email) {
        return StatusCode::BAD_REQUEST.into_response();
    }

    match state.identity().find_profile_by_email(&email).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return Json(SignInResponse {
                account_id: None,
                error: Some("User not found".to_string()),
            })
            .into_response();
        }
        Err(err) => {
            error!("Failed to look up profile by email: {err}");
            return StatusCode::BAD_GATEWAY.into_response();
        }
    }

    match state.identity().create_email_token(&email).await {
        Ok(token) => Json(SignInResponse {
            account_id: Some(token.user_id),
            error: None,
        })
        .into_response(),
        Err(err) => {
            error!("Failed to send a passcode: {err}");
            StatusCode::BAD_GATEWAY.into_response()
        }
    }
}
