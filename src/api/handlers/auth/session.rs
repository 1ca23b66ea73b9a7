//! Session lifecycle: verify the passcode, resolve the current user, sign out.

use super::{
    state::AuthState,
    types::{SessionResponse, VerifyRequest},
    utils::{clear_session_cookie, extract_session_secret, session_cookie},
};
use axum::{
    extract::Extension,
    http::{
        header::{LOCATION, SET_COOKIE},
        HeaderMap, StatusCode,
    },
    response::{IntoResponse, Json},
};
use std::sync::Arc;
use tracing::{error, warn};

#[utoipa::path(
    post,
    path = "/v1/auth/verify",
    request_body = VerifyRequest,
    responses(
        (status = 200, description = "Session created, cookie set", body = SessionResponse),
        (status = 401, description = "Passcode rejected"),
        (status = 500, description = "Failed to build the session cookie")
    ),
    tag = "auth"
)]
pub async fn verify(
    state: Extension<Arc<AuthState>>,
    Json(request): Json<VerifyRequest>,
) -> impl IntoResponse {
    let session = match state
        .identity()
        .create_session(&request.account_id, &request.secret)
        .await
    {
        Ok(session) => session,
        Err(err) => {
            error!("Failed to create session: {err}");
            return StatusCode::UNAUTHORIZED.into_response();
        }
    };

    let cookie = match session_cookie(&session.secret) {
        Ok(cookie) => cookie,
        Err(err) => {
            error!("Failed to build session cookie: {err}");
            return StatusCode::INTERNAL_SERVER_ERROR.into_response();
        }
    };

    let mut headers = HeaderMap::new();
    headers.insert(SET_COOKIE, cookie);

    (
        headers,
        Json(SessionResponse {
            session_id: session.id,
        }),
    )
        .into_response()
}

#[utoipa::path(
    get,
    path = "/v1/auth/me",
    responses(
        (status = 200, description = "Profile of the signed-in user, or null when no profile exists", body = Option<crate::identity::types::Profile>),
        (status = 401, description = "No session cookie or session expired"),
        (status = 502, description = "Identity platform error")
    ),
    tag = "auth"
)]
pub async fn me(state: Extension<Arc<AuthState>>, headers: HeaderMap) -> impl IntoResponse {
    let Some(secret) = extract_session_secret(&headers) else {
        return StatusCode::UNAUTHORIZED.into_response();
    };

    let account = match state.identity().current_account(&secret).await {
        Ok(account) => account,
        Err(err) => {
            error!("Failed to resolve session account: {err}");
            return StatusCode::UNAUTHORIZED.into_response();
        }
    };

    match state.identity().find_profile_by_account(&account.id).await {
        Ok(Some(profile)) => Json(profile).into_response(),
        // Verified account without a profile document: legitimate, the
        // frontend treats null as "finish onboarding".
        Ok(None) => Json(serde_json::Value::Null).into_response(),
        Err(err) => {
            error!("Failed to look up profile by account: {err}");
            StatusCode::BAD_GATEWAY.into_response()
        }
    }
}

#[utoipa::path(
    post,
    path = "/v1/auth/sign-out",
    responses(
        (status = 303, description = "Cookie cleared, redirect to the sign-in page")
    ),
    tag = "auth"
)]
pub async fn sign_out(state: Extension<Arc<AuthState>>, headers: HeaderMap) -> impl IntoResponse {
    if let Some(secret) = extract_session_secret(&headers) {
        // Upstream failure must not keep the browser signed in; the cookie
        // is cleared regardless.
        if let Err(err) = state.identity().delete_current_session(&secret).await {
            warn!("Failed to delete session upstream: {err}");
        }
    }

    let mut response_headers = HeaderMap::new();
    match clear_session_cookie() {
        Ok(cookie) => {
            response_headers.insert(SET_COOKIE, cookie);
        }
        Err(err) => {
            error!("Failed to build clearing cookie: {err}");
        }
    }
    match state.config().sign_in_path().parse() {
        Ok(location) => {
            response_headers.insert(LOCATION, location);
        }
        Err(err) => {
            error!("Failed to build redirect location: {err}");
        }
    }

    (StatusCode::SEE_OTHER, response_headers)
}
