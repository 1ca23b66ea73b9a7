//! Auth configuration and shared handler state.

use crate::identity::IdentityApi;
use std::sync::Arc;

const DEFAULT_AVATAR_URL: &str = "https://pordisto.dev/assets/avatar-placeholder.png";
const DEFAULT_SIGN_IN_PATH: &str = "/sign-in";

#[derive(Clone, Debug)]
pub struct AuthConfig {
    frontend_base_url: String,
    default_avatar_url: String,
    sign_in_path: String,
}

impl AuthConfig {
    #[must_use]
    pub fn new(frontend_base_url: String) -> Self {
        Self {
            frontend_base_url,
            default_avatar_url: DEFAULT_AVATAR_URL.to_string(),
            sign_in_path: DEFAULT_SIGN_IN_PATH.to_string(),
        }
    }

    #[must_use]
    pub fn with_default_avatar_url(mut self, url: String) -> Self {
        self.default_avatar_url = url;
        self
    }

    #[must_use]
    pub fn with_sign_in_path(mut self, path: String) -> Self {
        self.sign_in_path = path;
        self
    }

    pub(crate) fn frontend_base_url(&self) -> &str {
        &self.frontend_base_url
    }

    pub(super) fn default_avatar_url(&self) -> &str {
        &self.default_avatar_url
    }

    pub(super) fn sign_in_path(&self) -> &str {
        &self.sign_in_path
    }
}

pub struct AuthState {
    config: AuthConfig,
    identity: Arc<dyn IdentityApi>,
}

impl AuthState {
    #[must_use]
    pub fn new(config: AuthConfig, identity: Arc<dyn IdentityApi>) -> Self {
        Self { config, identity }
    }

    #[must_use]
    pub fn config(&self) -> &AuthConfig {
        &self.config
    }

    #[must_use]
    pub fn identity(&self) -> &dyn IdentityApi {
        self.identity.as_ref()
    }
}
