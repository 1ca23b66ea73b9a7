//! Identity platform arguments: endpoint, project, API key, and the database
//! holding user profile documents.

use anyhow::{Context, Result};
use clap::{Arg, ArgMatches, Command};

pub const ARG_IDENTITY_ENDPOINT: &str = "identity-endpoint";
pub const ARG_IDENTITY_PROJECT: &str = "identity-project";
pub const ARG_IDENTITY_API_KEY: &str = "identity-api-key";
pub const ARG_IDENTITY_DATABASE_ID: &str = "identity-database-id";
pub const ARG_IDENTITY_USERS_COLLECTION_ID: &str = "identity-users-collection-id";

#[must_use]
pub fn with_args(command: Command) -> Command {
    command
        .arg(
            Arg::new(ARG_IDENTITY_ENDPOINT)
                .long(ARG_IDENTITY_ENDPOINT)
                .help("Identity platform REST endpoint, e.g. https://cloud.example.com")
                .env("PORDISTO_IDENTITY_ENDPOINT")
                .required(true),
        )
        .arg(
            Arg::new(ARG_IDENTITY_PROJECT)
                .long(ARG_IDENTITY_PROJECT)
                .help("Identity platform project identifier")
                .env("PORDISTO_IDENTITY_PROJECT")
                .required(true),
        )
        .arg(
            Arg::new(ARG_IDENTITY_API_KEY)
                .long(ARG_IDENTITY_API_KEY)
                .help("Server API key used for admin calls to the identity platform")
                .env("PORDISTO_IDENTITY_API_KEY")
                .required(true),
        )
        .arg(
            Arg::new(ARG_IDENTITY_DATABASE_ID)
                .long(ARG_IDENTITY_DATABASE_ID)
                .help("Database id holding the user profile collection")
                .env("PORDISTO_IDENTITY_DATABASE_ID")
                .required(true),
        )
        .arg(
            Arg::new(ARG_IDENTITY_USERS_COLLECTION_ID)
                .long(ARG_IDENTITY_USERS_COLLECTION_ID)
                .help("Collection id of the user profile documents")
                .env("PORDISTO_IDENTITY_USERS_COLLECTION_ID")
                .required(true),
        )
}

#[derive(Debug)]
pub struct Options {
    pub endpoint: String,
    pub project: String,
    pub api_key: String,
    pub database_id: String,
    pub users_collection_id: String,
}

impl Options {
    /// # Errors
    /// Returns an error if a required identity argument is missing.
    pub fn parse(matches: &ArgMatches) -> Result<Self> {
        Ok(Self {
            endpoint: matches
                .get_one::<String>(ARG_IDENTITY_ENDPOINT)
                .cloned()
                .context("missing required argument: --identity-endpoint")?,
            project: matches
                .get_one::<String>(ARG_IDENTITY_PROJECT)
                .cloned()
                .context("missing required argument: --identity-project")?,
            api_key: matches
                .get_one::<String>(ARG_IDENTITY_API_KEY)
                .cloned()
                .context("missing required argument: --identity-api-key")?,
            database_id: matches
                .get_one::<String>(ARG_IDENTITY_DATABASE_ID)
                .cloned()
                .context("missing required argument: --identity-database-id")?,
            users_collection_id: matches
                .get_one::<String>(ARG_IDENTITY_USERS_COLLECTION_ID)
                .cloned()
                .context("missing required argument: --identity-users-collection-id")?,
        })
    }
}
