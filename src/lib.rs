//! # Pordisto (Passwordless Auth Gateway)
//!
//! `pordisto` is a thin authentication gateway for web applications that
//! delegate credential handling to a hosted identity platform. It exposes a
//! small JSON API for passwordless signup and sign-in: the platform emails a
//! one-time passcode (OTP), the gateway exchanges the passcode for a session
//! secret, and the secret is carried in a session cookie.
//!
//! ## Flow
//!
//! 1. **Sign-up / sign-in** looks up the user profile document by email and
//!    asks the platform to email a passcode. On first signup a profile
//!    document is created with a default avatar.
//! 2. **Verify** exchanges `(accountId, passcode)` for a session and stores
//!    the session secret in a `HttpOnly; SameSite=Strict; Secure` cookie.
//! 3. **Me** resolves the cookie back into the profile document; **sign-out**
//!    deletes the platform session, clears the cookie, and redirects to the
//!    sign-in page.
//!
//! The platform owns credential storage, OTP delivery, and session issuance;
//! this service only sequences the calls and manages the cookie.

pub mod api;
pub mod cli;
pub mod identity;

#[allow(clippy::doc_markdown, clippy::needless_raw_string_hashes)]
pub mod built_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}

pub const GIT_COMMIT_HASH: &str = match built_info::GIT_COMMIT_HASH {
    Some(hash) => hash,
    None => "unknown",
};

pub const APP_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"),);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_git_commit_hash_format() {
        if GIT_COMMIT_HASH == "unknown" {
            // Acceptable in non-git build environments
            return;
        }
        assert!(
            GIT_COMMIT_HASH.chars().all(|c| c.is_ascii_hexdigit()),
            "GIT_COMMIT_HASH should be a hex string, got: {GIT_COMMIT_HASH}"
        );
        assert!(
            GIT_COMMIT_HASH.len() >= 7,
            "GIT_COMMIT_HASH should be at least 7 characters long, got: {GIT_COMMIT_HASH}"
        );
    }

    #[test]
    fn test_app_user_agent_format() {
        assert!(APP_USER_AGENT.starts_with(env!("CARGO_PKG_NAME")));
        assert!(APP_USER_AGENT.contains(env!("CARGO_PKG_VERSION")));
    }
}
