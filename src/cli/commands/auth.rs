//! Auth-facing arguments: frontend origin, default avatar, sign-in redirect.

use anyhow::{Context, Result};
use clap::{Arg, ArgMatches, Command};

pub const ARG_FRONTEND_BASE_URL: &str = "frontend-base-url";
pub const ARG_DEFAULT_AVATAR_URL: &str = "default-avatar-url";
pub const ARG_SIGN_IN_PATH: &str = "sign-in-path";

#[must_use]
pub fn with_args(command: Command) -> Command {
    command
        .arg(
            Arg::new(ARG_FRONTEND_BASE_URL)
                .long(ARG_FRONTEND_BASE_URL)
                .help("Frontend base URL allowed to call the API with credentials")
                .env("PORDISTO_FRONTEND_BASE_URL")
                .default_value("https://pordisto.dev"),
        )
        .arg(
            Arg::new(ARG_DEFAULT_AVATAR_URL)
                .long(ARG_DEFAULT_AVATAR_URL)
                .help("Avatar URL assigned to profiles created on first signup")
                .env("PORDISTO_DEFAULT_AVATAR_URL")
                .default_value("https://pordisto.dev/assets/avatar-placeholder.png"),
        )
        .arg(
            Arg::new(ARG_SIGN_IN_PATH)
                .long(ARG_SIGN_IN_PATH)
                .help("Path the sign-out endpoint redirects to")
                .env("PORDISTO_SIGN_IN_PATH")
                .default_value("/sign-in"),
        )
}

#[derive(Debug)]
pub struct Options {
    pub frontend_base_url: String,
    pub default_avatar_url: String,
    pub sign_in_path: String,
}

impl Options {
    /// # Errors
    /// Returns an error if a defaulted auth argument is somehow absent.
    pub fn parse(matches: &ArgMatches) -> Result<Self> {
        Ok(Self {
            frontend_base_url: matches
                .get_one::<String>(ARG_FRONTEND_BASE_URL)
                .cloned()
                .context("missing required argument: --frontend-base-url")?,
            default_avatar_url: matches
                .get_one::<String>(ARG_DEFAULT_AVATAR_URL)
                .cloned()
                .context("missing required argument: --default-avatar-url")?,
            sign_in_path: matches
                .get_one::<String>(ARG_SIGN_IN_PATH)
                .cloned()
                .context("missing required argument: --sign-in-path")?,
        })
    }
}
