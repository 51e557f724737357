//! dwolla-subscriptions: typed client for the Dwolla webhook-subscription API.
//!
//! Resources are plain data ([`subscription::WebhookSubscription`],
//! [`webhook::Webhook`]); operations go through an [`api::Client`] built on
//! any [`transport::HttpClient`].
//!
//! ```no_run
//! use dwolla_subscriptions::api::{Client, Environment};
//! use dwolla_subscriptions::subscription::{WebhookSubscriptionRequest, WebhookSubscriptionService};
//! use dwolla_subscriptions::transport::ReqwestClient;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = Client::for_environment(ReqwestClient::new(), Environment::Sandbox)
//!     .with_bearer_token("token")?;
//!
//! let request = WebhookSubscriptionRequest::new("https://example.com/hooks", "shared-secret");
//! let mut subscription = client.webhook_subscriptions().create(&request).await?;
//! subscription.pause(&client).await?;
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod config;
pub mod subscription;
pub mod transport;
pub mod webhook;
