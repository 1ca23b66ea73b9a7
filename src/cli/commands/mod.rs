pub mod auth;
pub mod identity;
pub mod logging;

use clap::{
    builder::styling::{AnsiColor, Effects, Styles},
    Arg, ColorChoice, Command,
};

use self::identity::ARG_IDENTITY_ENDPOINT;

/// Validate that the identity endpoint is an HTTP(S) URL.
///
/// # Errors
/// Returns an error string if `identity-endpoint` uses an unsupported scheme.
pub fn validate(matches: &clap::ArgMatches) -> Result<(), String> {
    let Some(endpoint) = matches.get_one::<String>(ARG_IDENTITY_ENDPOINT) else {
        return Ok(()); // Should be handled by required=true in clap
    };

    if !endpoint.starts_with("http://") && !endpoint.starts_with("https://") {
        return Err(format!(
            "--{ARG_IDENTITY_ENDPOINT} must be an http:// or https:// URL, got: {endpoint}"
        ));
    }
    Ok(())
}

#[must_use]
pub fn new() -> Command {
    let styles = Styles::styled()
        .header(AnsiColor::Yellow.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Blue.on_default() | Effects::BOLD)
        .placeholder(AnsiColor::Green.on_default());

    let long_version: &'static str = Box::leak(
        format!("{} - {}", env!("CARGO_PKG_VERSION"), crate::GIT_COMMIT_HASH).into_boxed_str(),
    );

    let command = Command::new("pordisto")
        .about("Passwordless authentication gateway")
        .version(env!("CARGO_PKG_VERSION"))
        .long_version(long_version)
        .color(ColorChoice::Auto)
        .styles(styles)
        .arg(
            Arg::new("port")
                .short('p')
                .long("port")
                .help("Port to listen on")
                .default_value("8080")
                .env("PORDISTO_PORT")
                .value_parser(clap::value_parser!(u16)),
        );

    let command = identity::with_args(command);
    let command = auth::with_args(command);
    logging::with_args(command)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_args() -> Vec<&'static str> {
        vec![
            "pordisto",
            "--identity-endpoint",
            "https://cloud.example.com",
            "--identity-project",
            "pordisto",
            "--identity-api-key",
            "api-key",
            "--identity-database-id",
            "main",
            "--identity-users-collection-id",
            "users",
        ]
    }

    #[test]
    fn test_new() {
        let command = new();

        assert_eq!(command.get_name(), "pordisto");
        assert_eq!(
            command.get_about().map(ToString::to_string),
            Some("Passwordless authentication gateway".to_string())
        );
        assert_eq!(
            command.get_version().map(ToString::to_string),
            Some(env!("CARGO_PKG_VERSION").to_string())
        );
    }

    #[test]
    fn test_check_port_and_identity_args() {
        let command = new();
        let mut args = base_args();
        args.extend(["--port", "8443"]);
        let matches = command.get_matches_from(args);

        assert_eq!(matches.get_one::<u16>("port").copied(), Some(8443));
        assert_eq!(
            matches.get_one::<String>(ARG_IDENTITY_ENDPOINT).cloned(),
            Some("https://cloud.example.com".to_string())
        );
        assert_eq!(
            matches
                .get_one::<String>(identity::ARG_IDENTITY_USERS_COLLECTION_ID)
                .cloned(),
            Some("users".to_string())
        );
    }

    #[test]
    fn test_check_env() {
        temp_env::with_vars(
            [
                (
                    "PORDISTO_IDENTITY_ENDPOINT",
                    Some("https://cloud.example.com"),
                ),
                ("PORDISTO_IDENTITY_PROJECT", Some("pordisto")),
                ("PORDISTO_IDENTITY_API_KEY", Some("api-key")),
                ("PORDISTO_IDENTITY_DATABASE_ID", Some("main")),
                ("PORDISTO_IDENTITY_USERS_COLLECTION_ID", Some("users")),
                ("PORDISTO_PORT", Some("443")),
                ("PORDISTO_FRONTEND_BASE_URL", Some("https://app.example.com")),
                ("PORDISTO_LOG_LEVEL", Some("info")),
            ],
            || {
                let command = new();
                let matches = command.get_matches_from(vec!["pordisto"]);
                assert_eq!(matches.get_one::<u16>("port").copied(), Some(443));
                assert_eq!(
                    matches.get_one::<String>(ARG_IDENTITY_ENDPOINT).cloned(),
                    Some("https://cloud.example.com".to_string())
                );
                assert_eq!(
                    matches
                        .get_one::<String>(auth::ARG_FRONTEND_BASE_URL)
                        .cloned(),
                    Some("https://app.example.com".to_string())
                );
                assert_eq!(
                    matches.get_one::<u8>(logging::ARG_VERBOSITY).copied(),
                    Some(2)
                );
            },
        );
    }

    #[test]
    fn test_check_log_level_env() {
        // loop cover all possible value_parse
        let levels = ["error", "warn", "info", "debug", "trace"];
        for (index, &level) in levels.iter().enumerate() {
            temp_env::with_vars(
                [
                    ("PORDISTO_LOG_LEVEL", Some(level)),
                    (
                        "PORDISTO_IDENTITY_ENDPOINT",
                        Some("https://cloud.example.com"),
                    ),
                    ("PORDISTO_IDENTITY_PROJECT", Some("pordisto")),
                    ("PORDISTO_IDENTITY_API_KEY", Some("api-key")),
                    ("PORDISTO_IDENTITY_DATABASE_ID", Some("main")),
                    ("PORDISTO_IDENTITY_USERS_COLLECTION_ID", Some("users")),
                ],
                || {
                    let command = new();
                    let matches = command.get_matches_from(vec!["pordisto"]);
                    assert_eq!(
                        matches.get_one::<u8>(logging::ARG_VERBOSITY).copied(),
                        u8::try_from(index).ok()
                    );
                },
            );
        }
    }

    #[test]
    fn test_check_log_level_verbosity() {
        // loop cover all possible value_parse
        let levels = ["error", "warn", "info", "debug", "trace"];
        for (index, _) in levels.iter().enumerate() {
            temp_env::with_vars([("PORDISTO_LOG_LEVEL", None::<String>)], || {
                let mut args: Vec<String> =
                    base_args().iter().map(ToString::to_string).collect();

                // Add the appropriate number of "-v" flags based on the index
                if index > 0 {
                    let v = format!("-{}", "v".repeat(index));
                    args.push(v);
                }

                let command = new();

                let matches = command.get_matches_from(args);

                assert_eq!(
                    matches.get_one::<u8>(logging::ARG_VERBOSITY).copied(),
                    u8::try_from(index).ok()
                );
            });
        }
    }

    #[test]
    fn test_validate_rejects_non_http_endpoint() -> Result<(), Box<dyn std::error::Error>> {
        let command = new();
        let matches = command.try_get_matches_from(vec![
            "pordisto",
            "--identity-endpoint",
            "unix:///tmp/identity.sock",
            "--identity-project",
            "pordisto",
            "--identity-api-key",
            "api-key",
            "--identity-database-id",
            "main",
            "--identity-users-collection-id",
            "users",
        ])?;
        assert!(
            validate(&matches).is_err(),
            "Should fail on non-http endpoint"
        );
        Ok(())
    }

    #[test]
    fn test_validate_accepts_https_endpoint() -> Result<(), Box<dyn std::error::Error>> {
        let command = new();
        let matches = command.try_get_matches_from(base_args())?;
        assert!(validate(&matches).is_ok(), "Should pass with https URL");
        Ok(())
    }

    #[test]
    fn test_rejects_bare_positional_token() {
        // Flags only, no subcommands: a stray bare token is a usage error.
        let command = new();
        let mut args = base_args();
        args.insert(1, "server");
        let result = command.try_get_matches_from(args);
        assert_eq!(
            result.map(|_| ()).map_err(|e| e.kind()),
            Err(clap::error::ErrorKind::UnknownArgument)
        );
    }

    #[test]
    fn test_missing_required_args_fail() {
        temp_env::with_vars(
            [
                ("PORDISTO_IDENTITY_ENDPOINT", None::<&str>),
                ("PORDISTO_IDENTITY_PROJECT", None::<&str>),
                ("PORDISTO_IDENTITY_API_KEY", None::<&str>),
                ("PORDISTO_IDENTITY_DATABASE_ID", None::<&str>),
                ("PORDISTO_IDENTITY_USERS_COLLECTION_ID", None::<&str>),
            ],
            || {
                let command = new();
                let result = command.try_get_matches_from(vec!["pordisto"]);
                assert_eq!(
                    result.map(|_| ()).map_err(|e| e.kind()),
                    Err(clap::error::ErrorKind::MissingRequiredArgument)
                );
            },
        );
    }
}
