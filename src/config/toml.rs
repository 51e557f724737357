//! TOML configuration file parsing.

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;

use super::ConfigError;

/// Root configuration structure from TOML file.
///
/// All fields are optional to allow partial configuration
/// that can be merged with CLI arguments.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    /// API connection section
    #[serde(default)]
    pub api: ApiSection,
}

/// API connection section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ApiSection {
    /// "sandbox" or "production"
    pub environment: Option<String>,

    /// Explicit base URL, overriding `environment`
    pub base_url: Option<String>,

    /// Bearer token
    pub token: Option<String>,

    /// Request timeout in seconds
    pub timeout: Option<u64>,

    /// Extra HTTP headers as key-value pairs
    #[serde(default)]
    pub headers: HashMap<String, String>,
}

impl TomlConfig {
    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;

        Self::parse(&content)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(ConfigError::from)
    }
}

/// Generates a default configuration file with comments.
#[must_use]
pub fn default_config_template() -> String {
    r#"# dwolla-subscriptions configuration file

[api]
# Platform environment: "sandbox" or "production" (default: sandbox)
environment = "sandbox"

# Explicit API base URL; overrides environment when set
# base_url = "https://api-sandbox.dwolla.com/"

# Bearer token for the Authorization header (required, or pass --token)
# token = "your-token-here"

# Request timeout in seconds (default: 30)
timeout = 30

# Extra HTTP headers (CLI --header values replace same-named entries)
# [api.headers]
# X-Custom-Header = "value"
"#
    .to_string()
}
