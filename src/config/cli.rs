//! CLI argument parsing using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use super::defaults;
use crate::api::Environment;

/// Manage webhook subscriptions on the Dwolla API.
///
/// Each invocation performs one operation and prints the resulting
/// resource as JSON on stdout.
#[derive(Debug, Parser)]
#[command(name = "dwolla-subscriptions")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Operation to run
    #[command(subcommand)]
    pub command: Command,

    /// Path to configuration file
    #[arg(long, short, global = true)]
    pub config: Option<PathBuf>,

    /// Platform environment
    #[arg(long, value_enum, global = true)]
    pub environment: Option<EnvironmentArg>,

    /// API base URL (overrides --environment)
    #[arg(long = "base-url", global = true)]
    pub base_url: Option<String>,

    /// Bearer token for the Authorization header
    #[arg(long, global = true)]
    pub token: Option<String>,

    /// Extra HTTP headers in 'Key=Value' or 'Key: Value' format (can be specified multiple times)
    #[arg(long = "header", value_name = "K=V", global = true)]
    pub headers: Vec<String>,

    /// Request timeout in seconds
    #[arg(long, global = true)]
    pub timeout: Option<u64>,

    /// Enable verbose logging
    #[arg(long, short, global = true)]
    pub verbose: bool,
}

/// Subcommands
#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Generate a default configuration file
    Init {
        /// Output path for the configuration file
        #[arg(long, short, default_value = defaults::CONFIG_FILE)]
        output: PathBuf,
    },

    /// Create a webhook subscription
    Create {
        /// URL the platform should deliver webhooks to
        #[arg(long)]
        url: String,

        /// Shared secret used to sign deliveries
        #[arg(long)]
        secret: String,

        /// Create the subscription paused
        #[arg(long)]
        paused: bool,
    },

    /// Retrieve a webhook subscription
    Get {
        /// Subscription id
        id: String,
    },

    /// List webhook subscriptions
    List,

    /// Remove a webhook subscription
    Remove {
        /// Subscription id
        id: String,
    },

    /// Pause delivery for a webhook subscription
    Pause {
        /// Subscription id
        id: String,
    },

    /// Resume delivery for a webhook subscription
    Unpause {
        /// Subscription id
        id: String,
    },

    /// List webhooks delivered to a subscription
    Webhooks {
        /// Subscription id
        id: String,
    },
}

/// Environment argument for CLI parsing
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum EnvironmentArg {
    /// api-sandbox.dwolla.com
    Sandbox,
    /// api.dwolla.com
    Production,
}

impl From<EnvironmentArg> for Environment {
    fn from(arg: EnvironmentArg) -> Self {
        match arg {
            EnvironmentArg::Sandbox => Self::Sandbox,
            EnvironmentArg::Production => Self::Production,
        }
    }
}

impl Cli {
    /// Parses CLI arguments from the command line.
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Parses CLI arguments from an iterator (useful for testing).
    pub fn parse_from_iter<I, T>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::parse_from(iter)
    }
}
