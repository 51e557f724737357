//! Default values for configuration options.

use crate::api::Environment;

/// Default platform environment.
pub const ENVIRONMENT: Environment = Environment::Sandbox;

/// Default request timeout in seconds.
pub const TIMEOUT_SECS: u64 = 30;

/// Default output path for `init`.
pub const CONFIG_FILE: &str = "dwolla-subscriptions.toml";
