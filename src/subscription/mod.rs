//! Webhook subscriptions.
//!
//! This module provides:
//! - The subscription resource types ([`WebhookSubscription`], [`WebhookSubscriptions`])
//! - The outbound payload ([`WebhookSubscriptionRequest`])
//! - The service trait ([`WebhookSubscriptionService`]) and its
//!   implementation over [`Client`](crate::api::Client) ([`SubscriptionApi`])
//!
//! Instance operations (`pause`, `unpause`, `remove`, `retrieve_webhooks`)
//! live on [`WebhookSubscription`] itself and follow its `_links`.

mod model;
mod service;


pub use model::{WebhookSubscription, WebhookSubscriptionRequest, WebhookSubscriptions};
pub use service::{SubscriptionApi, WebhookSubscriptionService};
