//! Tests for validated configuration.

use std::io::Write;
use std::time::Duration;

use tempfile::{NamedTempFile, tempdir};

use super::ConfigError;
use super::cli::Cli;
use super::defaults;
use super::toml::TomlConfig;
use super::validated::{ValidatedConfig, write_default_config};
use crate::api::Environment;

/// Helper to create CLI args from a slice; the subcommand is always `list`.
fn cli(args: &[&str]) -> Cli {
    let mut full_args = vec!["dwolla-subscriptions", "list"];
    full_args.extend(args);
    Cli::parse_from_iter(full_args)
}

/// Helper to parse TOML config
fn toml(content: &str) -> TomlConfig {
    TomlConfig::parse(content).unwrap()
}

mod required_fields {
    use super::*;

    #[test]
    fn missing_token_returns_error() {
        let result = ValidatedConfig::from_raw(&cli(&[]), None);

        assert!(matches!(
            result,
            Err(ConfigError::MissingRequired { field: "token", .. })
        ));
    }

    #[test]
    fn token_from_cli_becomes_bearer_header() {
        let config = ValidatedConfig::from_raw(&cli(&["--token", "abc"]), None).unwrap();

        let auth = config.headers.get(http::header::AUTHORIZATION).unwrap();
        assert_eq!(auth, "Bearer abc");
        assert!(auth.is_sensitive());
    }

    #[test]
    fn token_from_toml() {
        let toml = toml("[api]\ntoken = \"from-file\"");

        let config = ValidatedConfig::from_raw(&cli(&[]), Some(&toml)).unwrap();

        assert_eq!(
            config.headers.get(http::header::AUTHORIZATION).unwrap(),
            "Bearer from-file"
        );
    }

    #[test]
    fn cli_token_wins_over_toml() {
        let toml = toml("[api]\ntoken = \"from-file\"");

        let config = ValidatedConfig::from_raw(&cli(&["--token", "from-cli"]), Some(&toml)).unwrap();

        assert_eq!(
            config.headers.get(http::header::AUTHORIZATION).unwrap(),
            "Bearer from-cli"
        );
    }
}

mod endpoint {
    use super::*;

    #[test]
    fn defaults_to_sandbox() {
        let config = ValidatedConfig::from_raw(&cli(&["--token", "t"]), None).unwrap();

        assert_eq!(config.environment, Environment::Sandbox);
        assert_eq!(config.base_url.as_str(), "https://api-sandbox.dwolla.com/");
    }

    #[test]
    fn environment_from_toml_accepts_aliases() {
        let toml = toml("[api]\ntoken = \"t\"\nenvironment = \"Prod\"");

        let config = ValidatedConfig::from_raw(&cli(&[]), Some(&toml)).unwrap();

        assert_eq!(config.environment, Environment::Production);
        assert_eq!(config.base_url.as_str(), "https://api.dwolla.com/");
    }

    #[test]
    fn cli_environment_wins_over_toml() {
        let toml = toml("[api]\ntoken = \"t\"\nenvironment = \"production\"");

        let config =
            ValidatedConfig::from_raw(&cli(&["--environment", "sandbox"]), Some(&toml)).unwrap();

        assert_eq!(config.environment, Environment::Sandbox);
    }

    #[test]
    fn invalid_environment_is_rejected() {
        let toml = toml("[api]\ntoken = \"t\"\nenvironment = \"staging\"");

        let result = ValidatedConfig::from_raw(&cli(&[]), Some(&toml));

        assert!(matches!(
            result,
            Err(ConfigError::InvalidEnvironment { ref value }) if value == "staging"
        ));
    }

    #[test]
    fn explicit_base_url_overrides_environment() {
        let config = ValidatedConfig::from_raw(
            &cli(&[
                "--token",
                "t",
                "--environment",
                "production",
                "--base-url",
                "http://localhost:8080/",
            ]),
            None,
        )
        .unwrap();

        assert_eq!(config.environment, Environment::Production);
        assert_eq!(config.base_url.as_str(), "http://localhost:8080/");
    }

    #[test]
    fn malformed_base_url_is_rejected() {
        let result =
            ValidatedConfig::from_raw(&cli(&["--token", "t", "--base-url", "not a url"]), None);

        assert!(matches!(result, Err(ConfigError::InvalidUrl { .. })));
    }

    #[test]
    fn non_http_base_url_is_rejected() {
        let result =
            ValidatedConfig::from_raw(&cli(&["--token", "t", "--base-url", "mailto:a@b.c"]), None);

        assert!(matches!(result, Err(ConfigError::InvalidUrl { .. })));
    }
}

mod headers {
    use super::*;

    #[test]
    fn cli_headers_accept_both_formats() {
        let config = ValidatedConfig::from_raw(
            &cli(&["--token", "t", "--header", "X-A=1", "--header", "X-B: 2"]),
            None,
        )
        .unwrap();

        assert_eq!(config.headers.get("x-a").unwrap(), "1");
        assert_eq!(config.headers.get("x-b").unwrap(), "2");
    }

    #[test]
    fn cli_header_replaces_toml_header() {
        let toml = toml("[api]\ntoken = \"t\"\n[api.headers]\nX-A = \"file\"\nX-B = \"kept\"");

        let config =
            ValidatedConfig::from_raw(&cli(&["--header", "X-A=cli"]), Some(&toml)).unwrap();

        assert_eq!(config.headers.get("x-a").unwrap(), "cli");
        assert_eq!(config.headers.get("x-b").unwrap(), "kept");
    }

    #[test]
    fn token_overrides_authorization_header() {
        let config = ValidatedConfig::from_raw(
            &cli(&["--token", "t", "--header", "Authorization=Basic xyz"]),
            None,
        )
        .unwrap();

        assert_eq!(
            config.headers.get(http::header::AUTHORIZATION).unwrap(),
            "Bearer t"
        );
    }

    #[test]
    fn header_without_separator_is_rejected() {
        let result = ValidatedConfig::from_raw(&cli(&["--token", "t", "--header", "nope"]), None);

        assert!(matches!(result, Err(ConfigError::InvalidHeader { .. })));
    }

    #[test]
    fn invalid_header_name_is_rejected() {
        let result =
            ValidatedConfig::from_raw(&cli(&["--token", "t", "--header", "Bad Name=1"]), None);

        assert!(matches!(result, Err(ConfigError::InvalidHeaderName { .. })));
    }

    #[test]
    fn token_with_newline_is_rejected() {
        let result = ValidatedConfig::from_raw(&cli(&["--token", "a\nb"]), None);

        assert!(matches!(result, Err(ConfigError::InvalidHeaderValue { .. })));
    }
}

mod timeout {
    use super::*;

    #[test]
    fn defaults_to_thirty_seconds() {
        let config = ValidatedConfig::from_raw(&cli(&["--token", "t"]), None).unwrap();

        assert_eq!(config.timeout, Duration::from_secs(defaults::TIMEOUT_SECS));
        assert_eq!(config.timeout, Duration::from_secs(30));
    }

    #[test]
    fn cli_wins_over_toml() {
        let toml = toml("[api]\ntoken = \"t\"\ntimeout = 12");

        let config = ValidatedConfig::from_raw(&cli(&["--timeout", "3"]), Some(&toml)).unwrap();

        assert_eq!(config.timeout, Duration::from_secs(3));
    }

    #[test]
    fn zero_is_rejected() {
        let result = ValidatedConfig::from_raw(&cli(&["--token", "t", "--timeout", "0"]), None);

        assert!(matches!(
            result,
            Err(ConfigError::InvalidDuration {
                field: "timeout",
                ..
            })
        ));
    }
}

mod display {
    use super::*;

    #[test]
    fn display_hides_token() {
        let config =
            ValidatedConfig::from_raw(&cli(&["--token", "very-secret", "--header", "X-A=1"]), None)
                .unwrap();

        let shown = config.to_string();

        assert!(shown.contains("sandbox"));
        assert!(shown.contains("authorization"));
        assert!(shown.contains("x-a"));
        assert!(!shown.contains("very-secret"));
    }
}

mod files {
    use super::*;

    #[test]
    fn load_reads_config_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[api]\ntoken = \"file-token\"\ntimeout = 7").unwrap();
        let path = file.path().to_str().unwrap();

        let config = ValidatedConfig::load(&cli(&["--config", path])).unwrap();

        assert_eq!(config.timeout, Duration::from_secs(7));
    }

    #[test]
    fn load_missing_file_is_read_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("absent.toml");

        let result = ValidatedConfig::load(&cli(&["--config", path.to_str().unwrap()]));

        assert!(matches!(result, Err(ConfigError::FileRead { .. })));
    }

    #[test]
    fn write_default_config_round_trips_through_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("generated.toml");

        write_default_config(&path).unwrap();
        let config =
            ValidatedConfig::load(&cli(&["--config", path.to_str().unwrap(), "--token", "t"]))
                .unwrap();

        assert_eq!(config.environment, Environment::Sandbox);
    }

    #[test]
    fn write_to_missing_directory_fails() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nope").join("config.toml");

        let result = write_default_config(&path);

        assert!(matches!(result, Err(ConfigError::FileWrite { .. })));
    }
}
