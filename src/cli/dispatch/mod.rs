//! Command-line argument dispatch and server initialization.
//!
//! This module parses validated CLI arguments and maps them to the appropriate
//! action, such as starting the API server with its full configuration state.

use crate::cli::actions::{server::Args, Action};
use crate::cli::commands::{auth, identity};
use anyhow::Result;

/// Map validated CLI matches to a server action.
///
/// # Errors
/// Returns an error if required arguments are missing or inconsistent.
pub fn handler(matches: &clap::ArgMatches) -> Result<Action> {
    let port = matches.get_one::<u16>("port").copied().unwrap_or(8080);

    // Validate the identity endpoint scheme before building options
    crate::cli::commands::validate(matches).map_err(|e| anyhow::anyhow!(e))?;

    let identity_opts = identity::Options::parse(matches)?;
    let auth_opts = auth::Options::parse(matches)?;

    Ok(Action::Server(Args {
        port,
        identity_endpoint: identity_opts.endpoint,
        identity_project: identity_opts.project,
        identity_api_key: identity_opts.api_key,
        identity_database_id: identity_opts.database_id,
        identity_users_collection_id: identity_opts.users_collection_id,
        frontend_base_url: auth_opts.frontend_base_url,
        default_avatar_url: auth_opts.default_avatar_url,
        sign_in_path: auth_opts.sign_in_path,
    }))
}
