//! Email normalization and session cookie helpers.

use axum::http::{header::InvalidHeaderValue, HeaderMap, HeaderValue};
use regex::Regex;

/// Cookie carrying the platform session secret.
pub(super) const SESSION_COOKIE_NAME: &str = "appwrite-session";

/// Normalize an email for lookup against the unique email attribute.
pub(super) fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Basic email format check on already-normalized input.
pub(super) fn valid_email(email_normalized: &str) -> bool {
    Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").is_ok_and(|regex| regex.is_match(email_normalized))
}

/// Build the session cookie holding the platform session secret.
///
/// No Max-Age: session expiry is owned by the platform, the cookie only
/// carries the secret.
pub(super) fn session_cookie(secret: &str) -> Result<HeaderValue, InvalidHeaderValue> {
    HeaderValue::from_str(&format!(
        "{SESSION_COOKIE_NAME}={secret}; Path=/; HttpOnly; SameSite=Strict; Secure"
    ))
}

pub(super) fn clear_session_cookie() -> Result<HeaderValue, InvalidHeaderValue> {
    HeaderValue::from_str(&format!(
        "{SESSION_COOKIE_NAME}=; Path=/; HttpOnly; SameSite=Strict; Secure; Max-Age=0"
    ))
}

/// Read the session secret from the request cookies, if present.
pub(super) fn extract_session_secret(headers: &HeaderMap) -> Option<String> {
    let header = headers.get(axum::http::header::COOKIE)?;
    let value = header.to_str().ok()?;
    for pair in value.split(';') {
        // Valueless pairs are legal in a Cookie header; skip them.
        let Some((key, val)) = pair.trim().split_once('=') else {
            continue;
        };
        if key.trim() == SESSION_COOKIE_NAME {
            return Some(val.trim().to_string());
        }
    }
    None
}
