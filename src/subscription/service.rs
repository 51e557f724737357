//! The webhook-subscription service.

use std::future::Future;

use super::{WebhookSubscription, WebhookSubscriptionRequest, WebhookSubscriptions};
use crate::api::{ApiError, Client};
use crate::transport::HttpClient;

/// Collection path of the subscription resource.
const PATH: &str = "webhook-subscriptions";

/// Operations on the webhook-subscription collection.
///
/// Each call is one request; nothing is validated, paged or retried locally.
pub trait WebhookSubscriptionService: Send + Sync {
    /// Creates a subscription.
    ///
    /// # Errors
    ///
    /// Returns any [`ApiError`] from the request.
    fn create(
        &self,
        request: &WebhookSubscriptionRequest,
    ) -> impl Future<Output = Result<WebhookSubscription, ApiError>> + Send;

    /// Retrieves the subscription with the given id.
    ///
    /// # Errors
    ///
    /// Returns any [`ApiError`] from the request.
    fn retrieve(
        &self,
        id: &str,
    ) -> impl Future<Output = Result<WebhookSubscription, ApiError>> + Send;

    /// Lists subscriptions.
    ///
    /// # Errors
    ///
    /// Returns any [`ApiError`] from the request.
    fn list(&self) -> impl Future<Output = Result<WebhookSubscriptions, ApiError>> + Send;

    /// Removes the subscription with the given id.
    ///
    /// # Errors
    ///
    /// Returns any [`ApiError`] from the request.
    fn remove(&self, id: &str) -> impl Future<Output = Result<(), ApiError>> + Send;
}

/// [`WebhookSubscriptionService`] backed by a [`Client`].
#[derive(Debug)]
pub struct SubscriptionApi<'c, H> {
    client: &'c Client<H>,
}

impl<'c, H> SubscriptionApi<'c, H> {
    /// Wraps a client.
    #[must_use]
    pub const fn new(client: &'c Client<H>) -> Self {
        Self { client }
    }
}

// Manual impls: a derive would require `H: Clone`.
impl<H> Clone for SubscriptionApi<'_, H> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<H> Copy for SubscriptionApi<'_, H> {}

impl<H> Client<H> {
    /// Returns the webhook-subscription service for this client.
    #[must_use]
    pub const fn webhook_subscriptions(&self) -> SubscriptionApi<'_, H> {
        SubscriptionApi::new(self)
    }
}

impl<H: HttpClient> WebhookSubscriptionService for SubscriptionApi<'_, H> {
    async fn create(
        &self,
        request: &WebhookSubscriptionRequest,
    ) -> Result<WebhookSubscription, ApiError> {
        let subscription: WebhookSubscription = self.client.post(PATH, request).await?;

        tracing::info!(id = %subscription.id, url = %subscription.url, "Created webhook subscription");
        Ok(subscription)
    }

    async fn retrieve(&self, id: &str) -> Result<WebhookSubscription, ApiError> {
        let url = self.client.item_url(PATH, id)?;
        self.client.get(url.as_str()).await
    }

    async fn list(&self) -> Result<WebhookSubscriptions, ApiError> {
        let subscriptions: WebhookSubscriptions = self.client.get(PATH).await?;

        tracing::debug!(total = subscriptions.total, "Listed webhook subscriptions");
        Ok(subscriptions)
    }

    async fn remove(&self, id: &str) -> Result<(), ApiError> {
        let url = self.client.item_url(PATH, id)?;
        self.client.delete(url.as_str()).await?;

        tracing::info!(id, "Removed webhook subscription");
        Ok(())
    }
}
