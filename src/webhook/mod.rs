//! Webhook delivery records.
//!
//! A [`Webhook`] is one event notification the platform delivered (or tried
//! to deliver) to a subscription's URL, together with its delivery attempts.

mod model;


pub use model::{Webhook, WebhookAttempt, WebhookHeader, WebhookRequest, WebhookResponse, Webhooks};

pub(crate) use model::retrieve_linked_webhooks;
