use secrecy::SecretString;

/// Identity platform connection settings shared across the server lifetime.
#[derive(Clone)]
pub struct GlobalArgs {
    pub identity_endpoint: String,
    pub identity_project: String,
    pub identity_api_key: SecretString,
}

impl GlobalArgs {
    #[must_use]
    pub fn new(endpoint: String, project: String) -> Self {
        Self {
            identity_endpoint: endpoint,
            identity_project: project,
            identity_api_key: SecretString::default(),
        }
    }

    pub fn set_api_key(&mut self, api_key: SecretString) {
        self.identity_api_key = api_key;
    }
}

impl std::fmt::Debug for GlobalArgs {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GlobalArgs")
            .field("identity_endpoint", &self.identity_endpoint)
            .field("identity_project", &self.identity_project)
            .field("identity_api_key", &"***")
            .finish()
    }
}
