//! Webhook resource types.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::api::{ApiError, Client, Links, rel};
use crate::transport::HttpClient;

/// A webhook delivered for a subscription.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Webhook {
    /// Hyperlinks for follow-up calls
    #[serde(rename = "_links")]
    pub links: Links,
    /// Webhook identifier
    pub id: String,
    /// Event topic, e.g. `customer_created`
    pub topic: String,
    /// Account the event belongs to
    pub account_id: String,
    /// Event that triggered the webhook
    pub event_id: String,
    /// Subscription the webhook was delivered to
    pub subscription_id: String,
    /// Delivery attempts, oldest first
    pub attempts: Vec<WebhookAttempt>,
}

/// One delivery attempt of a webhook.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WebhookAttempt {
    /// Attempt identifier
    pub id: String,
    /// What was sent
    pub request: WebhookRequest,
    /// What the subscriber answered
    pub response: WebhookResponse,
}

/// The outbound half of a delivery attempt.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WebhookRequest {
    /// When the delivery was sent
    pub timestamp: String,
    /// Subscriber URL the delivery went to
    pub url: String,
    /// Headers sent, including the signature
    pub headers: Vec<WebhookHeader>,
    /// Event payload as sent
    pub body: String,
}

/// The subscriber's answer to a delivery attempt.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WebhookResponse {
    /// When the subscriber answered
    pub timestamp: String,
    /// Headers the subscriber returned
    pub headers: Vec<WebhookHeader>,
    /// HTTP status the subscriber returned
    pub status_code: u16,
    /// Response body, possibly truncated by the platform
    pub body: String,
}

/// A header recorded on a delivery attempt.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WebhookHeader {
    /// Header name
    pub name: String,
    /// Header value
    pub value: String,
}

/// A page of webhooks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Webhooks {
    /// Hyperlinks for the collection (paging)
    #[serde(rename = "_links")]
    pub links: Links,
    /// Embedded resources keyed by relation
    #[serde(rename = "_embedded")]
    pub embedded: BTreeMap<String, Vec<Webhook>>,
    /// Total number of webhooks on the server
    pub total: u64,
}

impl Webhooks {
    /// Relation under which the items are embedded.
    pub const EMBEDDED_KEY: &'static str = "webhooks";

    /// Returns the embedded webhooks, empty if none were embedded.
    #[must_use]
    pub fn webhooks(&self) -> &[Webhook] {
        self.embedded
            .get(Self::EMBEDDED_KEY)
            .map_or(&[], Vec::as_slice)
    }
}

impl Webhook {
    /// Retrieves the webhooks behind this resource's `webhooks` link.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::MissingLink`] without sending anything if the
    /// link is absent, otherwise any error from the request.
    pub async fn retrieve_webhooks<H: HttpClient>(
        &self,
        client: &Client<H>,
    ) -> Result<Webhooks, ApiError> {
        retrieve_linked_webhooks(&self.links, client).await
    }
}

/// Follows the `webhooks` relation of `links`.
pub(crate) async fn retrieve_linked_webhooks<H: HttpClient>(
    links: &Links,
    client: &Client<H>,
) -> Result<Webhooks, ApiError> {
    let link = links.require(rel::WEBHOOKS)?;
    let webhooks: Webhooks = client.get(&link.href).await?;

    tracing::debug!(total = webhooks.total, "Retrieved webhooks");
    Ok(webhooks)
}
