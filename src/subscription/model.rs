//! Subscription resource types and their instance operations.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::api::{ApiError, Client, Links, rel};
use crate::transport::HttpClient;
use crate::webhook::{Webhooks, retrieve_linked_webhooks};

/// A registration telling the platform where to deliver event notifications.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WebhookSubscription {
    /// Hyperlinks for follow-up calls (`self`, `webhooks`)
    #[serde(rename = "_links")]
    pub links: Links,
    /// Subscription identifier
    pub id: String,
    /// Delivery URL
    pub url: String,
    /// Whether delivery is paused
    pub paused: bool,
    /// Creation timestamp as sent by the platform
    pub created: String,
}

/// A page of webhook subscriptions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WebhookSubscriptions {
    /// Hyperlinks for the collection
    #[serde(rename = "_links")]
    pub links: Links,
    /// Embedded resources keyed by relation
    #[serde(rename = "_embedded")]
    pub embedded: BTreeMap<String, Vec<WebhookSubscription>>,
    /// Total number of subscriptions
    pub total: u64,
}

/// Payload for creating or updating a subscription.
///
/// Empty `url` and `secret` are left out of the JSON; `paused` is always sent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebhookSubscriptionRequest {
    /// Delivery URL
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub url: String,
    /// Shared secret used by the platform to sign deliveries
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub secret: String,
    /// Whether delivery is paused
    #[serde(default)]
    pub paused: bool,
}

impl WebhookSubscriptionRequest {
    /// Creates a request for a new, active subscription.
    #[must_use]
    pub fn new(url: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            secret: secret.into(),
            paused: false,
        }
    }

    /// Sets the paused flag.
    #[must_use]
    pub const fn with_paused(mut self, paused: bool) -> Self {
        self.paused = paused;
        self
    }

    /// A request carrying only the paused flag.
    #[must_use]
    pub const fn paused_only(paused: bool) -> Self {
        Self {
            url: String::new(),
            secret: String::new(),
            paused,
        }
    }
}

impl WebhookSubscriptions {
    /// Relation under which the items are embedded.
    pub const EMBEDDED_KEY: &'static str = "webhook-subscriptions";

    /// Returns the embedded subscriptions, empty if none were embedded.
    #[must_use]
    pub fn subscriptions(&self) -> &[WebhookSubscription] {
        self.embedded
            .get(Self::EMBEDDED_KEY)
            .map_or(&[], Vec::as_slice)
    }

    /// Consumes the page, returning the embedded subscriptions.
    #[must_use]
    pub fn into_subscriptions(mut self) -> Vec<WebhookSubscription> {
        self.embedded.remove(Self::EMBEDDED_KEY).unwrap_or_default()
    }
}

impl WebhookSubscription {
    /// Pauses delivery, replacing `self` with the updated resource.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::MissingLink`] without sending anything if there is
    /// no `self` link, otherwise any error from the request.
    pub async fn pause<H: HttpClient>(&mut self, client: &Client<H>) -> Result<(), ApiError> {
        self.set_paused(client, true).await
    }

    /// Resumes delivery, replacing `self` with the updated resource.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::MissingLink`] without sending anything if there is
    /// no `self` link, otherwise any error from the request.
    pub async fn unpause<H: HttpClient>(&mut self, client: &Client<H>) -> Result<(), ApiError> {
        self.set_paused(client, false).await
    }

    /// Deletes this subscription on the server.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::MissingLink`] without sending anything if there is
    /// no `self` link, otherwise any error from the request.
    pub async fn remove<H: HttpClient>(&self, client: &Client<H>) -> Result<(), ApiError> {
        let link = self.links.require(rel::SELF)?;
        client.delete(&link.href).await?;

        tracing::debug!(id = %self.id, "Removed webhook subscription");
        Ok(())
    }

    /// Retrieves the webhooks delivered to this subscription.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::MissingLink`] without sending anything if there is
    /// no `webhooks` link, otherwise any error from the request.
    pub async fn retrieve_webhooks<H: HttpClient>(
        &self,
        client: &Client<H>,
    ) -> Result<Webhooks, ApiError> {
        retrieve_linked_webhooks(&self.links, client).await
    }

    async fn set_paused<H: HttpClient>(
        &mut self,
        client: &Client<H>,
        paused: bool,
    ) -> Result<(), ApiError> {
        let link = self.links.require(rel::SELF)?;
        let updated: Self = client
            .post(&link.href, &WebhookSubscriptionRequest::paused_only(paused))
            .await?;

        tracing::debug!(id = %updated.id, paused = updated.paused, "Updated webhook subscription");
        *self = updated;
        Ok(())
    }
}
