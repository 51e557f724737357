//! Command execution.
//!
//! Maps each subcommand onto one service call (or a retrieve followed by a
//! hyperlink-driven instance call) and prints the result as JSON.

use std::io::Write;
use std::path::Path;

use serde::Serialize;
use thiserror::Error;

use dwolla_subscriptions::api::{ApiError, Client};
use dwolla_subscriptions::config::{Command, ConfigError, ValidatedConfig, write_default_config};
use dwolla_subscriptions::subscription::{
    WebhookSubscriptionRequest, WebhookSubscriptionService,
};
use dwolla_subscriptions::transport::{HttpClient, HttpError, ReqwestClient};

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;

/// Error type for command execution failures.
#[derive(Debug, Error)]
pub enum RunError {
    /// Failed to build the HTTP client.
    #[error("Failed to create HTTP client: {0}")]
    ClientSetup(#[source] HttpError),

    /// The API call failed.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// Failed to write the config template.
    #[error(transparent)]
    Init(#[from] ConfigError),

    /// Failed to serialize the result.
    #[error("Failed to encode output: {0}")]
    Encode(#[source] serde_json::Error),

    /// Failed to write the result.
    #[error("Failed to write output: {0}")]
    Output(#[from] std::io::Error),
}

/// Executes `command` with a client built from `config`, printing to stdout.
///
/// # Errors
///
/// Returns an error if the client cannot be built, the API call fails,
/// or the output cannot be written.
#[cfg(not(tarpaulin_include))]
pub async fn execute(config: &ValidatedConfig, command: &Command) -> Result<(), RunError> {
    let client = build_client(config)?;

    dispatch(&client, command, &mut std::io::stdout()).await
}

/// Builds the production client for `config`.
///
/// # Errors
///
/// Returns [`RunError::ClientSetup`] if the transport cannot be initialized.
pub fn build_client(config: &ValidatedConfig) -> Result<Client<ReqwestClient>, RunError> {
    let http = ReqwestClient::with_timeout(config.timeout).map_err(RunError::ClientSetup)?;

    Ok(Client::new(http, config.base_url.clone()).with_headers(config.headers.clone()))
}

/// Runs a single command and writes its JSON result to `out`.
///
/// # Errors
///
/// Returns the first API, config or output error encountered.
pub async fn dispatch<H: HttpClient, W: Write>(
    client: &Client<H>,
    command: &Command,
    out: &mut W,
) -> Result<(), RunError> {
    let service = client.webhook_subscriptions();

    match command {
        Command::Init { output } => init(output, out),
        Command::Create {
            url,
            secret,
            paused,
        } => {
            let request =
                WebhookSubscriptionRequest::new(url.as_str(), secret.as_str()).with_paused(*paused);
            let subscription = service.create(&request).await?;
            print_json(out, &subscription)
        }
        Command::Get { id } => print_json(out, &service.retrieve(id).await?),
        Command::List => {
            let page = service.list().await?;
            tracing::info!(total = page.total, "Listed webhook subscriptions");
            print_json(out, &page)
        }
        Command::Remove { id } => {
            service.remove(id).await?;
            Ok(())
        }
        Command::Pause { id } => {
            let mut subscription = service.retrieve(id).await?;
            subscription.pause(client).await?;
            print_json(out, &subscription)
        }
        Command::Unpause { id } => {
            let mut subscription = service.retrieve(id).await?;
            subscription.unpause(client).await?;
            print_json(out, &subscription)
        }
        Command::Webhooks { id } => {
            let subscription = service.retrieve(id).await?;
            let webhooks = subscription.retrieve_webhooks(client).await?;
            print_json(out, &webhooks)
        }
    }
}

/// Writes the config template to `output` and reports where it went.
///
/// Needs neither a token nor a client, so `main` calls it before loading
/// configuration.
///
/// # Errors
///
/// Returns an error if the template or the report cannot be written.
pub fn init<W: Write>(output: &Path, out: &mut W) -> Result<(), RunError> {
    write_default_config(output)?;
    writeln!(out, "Configuration template written to: {}", output.display())?;
    Ok(())
}

fn print_json<W: Write, T: Serialize>(out: &mut W, value: &T) -> Result<(), RunError> {
    serde_json::to_writer_pretty(&mut *out, value).map_err(RunError::Encode)?;
    writeln!(out)?;
    Ok(())
}
