use crate::{
    api,
    api::handlers::auth::{AuthConfig, AuthState},
    cli::globals::GlobalArgs,
    identity::client::IdentityClient,
};
use anyhow::Result;
use secrecy::SecretString;
use std::sync::Arc;
use tracing::debug;

#[derive(Debug)]
pub struct Args {
    pub port: u16,
    pub identity_endpoint: String,
    pub identity_project: String,
    pub identity_api_key: String,
    pub identity_database_id: String,
    pub identity_users_collection_id: String,
    pub frontend_base_url: String,
    pub default_avatar_url: String,
    pub sign_in_path: String,
}

/// Execute the server action.
/// # Errors
/// Returns an error if the identity client cannot be built or the server fails to start.
pub async fn execute(args: Args) -> Result<()> {
    let mut globals = GlobalArgs::new(args.identity_endpoint, args.identity_project);
    globals.set_api_key(SecretString::from(args.identity_api_key));

    debug!("Global args: {:?}", globals);

    let identity = IdentityClient::new(
        &globals,
        args.identity_database_id,
        args.identity_users_collection_id,
    )?;

    let auth_config = AuthConfig::new(args.frontend_base_url)
        .with_default_avatar_url(args.default_avatar_url)
        .with_sign_in_path(args.sign_in_path);

    let auth_state = Arc::new(AuthState::new(auth_config, Arc::new(identity)));

    api::new(args.port, auth_state).await
}
