//! Typed client for the hosted identity platform.
//!
//! Everything credential-shaped lives on the platform side: it stores
//! accounts, emails one-time passcodes, and issues session secrets. This
//! module only knows how to ask for those things over REST and how to read
//! the answers back.
//!
//! The [`IdentityApi`] trait is the seam between handlers and the wire:
//! handlers depend on the trait, the production [`client::IdentityClient`]
//! implements it over reqwest, and tests swap in a mock.

pub mod client;
pub mod types;

use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use url::Url;

use types::{Account, EmailToken, NewProfile, Profile, Session};

/// Operations the auth handlers need from the identity platform.
///
/// Session-scoped calls take the session secret explicitly; there is no
/// ambient request context.
#[async_trait]
pub trait IdentityApi: Send + Sync {
    /// Ask the platform to email a one-time passcode; returns the account id.
    async fn create_email_token(&self, email: &str) -> Result<EmailToken>;

    /// Exchange `(account id, passcode)` for a session.
    async fn create_session(&self, account_id: &str, secret: &str) -> Result<Session>;

    /// Delete the session the given secret belongs to.
    async fn delete_current_session(&self, session_secret: &str) -> Result<()>;

    /// Resolve the account behind a session secret.
    async fn current_account(&self, session_secret: &str) -> Result<Account>;

    async fn find_profile_by_email(&self, email: &str) -> Result<Option<Profile>>;

    async fn find_profile_by_account(&self, account_id: &str) -> Result<Option<Profile>>;

    /// Create a profile document. Implementations must be idempotent per
    /// account id: a conflict resolves to the existing document.
    async fn create_profile(&self, profile: NewProfile) -> Result<Profile>;

    /// Dependency check used by the health endpoint.
    async fn health(&self) -> Result<()>;
}

/// Join a path onto the identity endpoint.
///
/// # Errors
/// Returns an error if `endpoint` cannot be parsed, has no host, or uses an
/// unsupported scheme.
pub fn endpoint_url(endpoint: &str, path: &str) -> Result<String> {
    let parsed = Url::parse(endpoint)
        .with_context(|| format!("invalid identity endpoint: {endpoint}"))?;

    match parsed.scheme() {
        "http" | "https" => {}
        other => {
            return Err(anyhow!(
                "unsupported identity endpoint scheme: {other}://"
            ));
        }
    }

    parsed
        .host_str()
        .context("identity endpoint must include a host")?;

    let base = endpoint.trim_end_matches('/');
    Ok(format!("{base}{path}"))
}
