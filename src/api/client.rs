//! The generic API collaborator every resource operation goes through.

use std::fmt;

use http::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, HeaderValue, InvalidHeaderValue};
use http::{HeaderMap, HeaderName, StatusCode};
use serde::Deserialize;
use serde::Serialize;
use serde::de::DeserializeOwned;
use url::Url;

use super::ApiError;
use crate::transport::{HttpClient, HttpRequest, HttpResponse, ReqwestClient};

/// Media type the platform speaks for both requests and responses.
pub const HAL_MEDIA_TYPE: &str = "application/vnd.dwolla.v1.hal+json";

/// Platform environment, selecting the API base URL.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Environment {
    /// Sandbox for integration testing
    #[default]
    Sandbox,
    /// Live payments
    Production,
}

impl Environment {
    /// Sandbox API root.
    pub const SANDBOX_URL: &'static str = "https://api-sandbox.dwolla.com/";

    /// Production API root.
    pub const PRODUCTION_URL: &'static str = "https://api.dwolla.com/";

    /// Returns the API root for this environment.
    ///
    /// # Panics
    ///
    /// Never in practice; both roots are valid URL constants.
    #[must_use]
    pub fn base_url(self) -> Url {
        let raw = match self {
            Self::Sandbox => Self::SANDBOX_URL,
            Self::Production => Self::PRODUCTION_URL,
        };
        Url::parse(raw).expect("environment base URLs are valid constants")
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sandbox => write!(f, "sandbox"),
            Self::Production => write!(f, "production"),
        }
    }
}

/// Error document returned by the platform on failure.
#[derive(Deserialize)]
struct RemoteErrorBody {
    code: String,
    message: String,
}

/// API client bound to a base URL and a transport.
///
/// Targets passed to [`get`](Self::get), [`post`](Self::post) and
/// [`delete`](Self::delete) are either paths relative to the base URL
/// (`"webhook-subscriptions"`) or absolute hrefs taken from a resource's
/// `_links`; both are resolved with [`Url::join`].
///
/// # Example
///
/// ```no_run
/// use dwolla_subscriptions::api::{Client, Environment};
/// use dwolla_subscriptions::transport::ReqwestClient;
///
/// let client = Client::for_environment(ReqwestClient::new(), Environment::Sandbox)
///     .with_bearer_token("token")
///     .unwrap();
/// assert_eq!(client.base_url().as_str(), "https://api-sandbox.dwolla.com/");
/// ```
#[derive(Debug, Clone)]
pub struct Client<H = ReqwestClient> {
    http: H,
    base_url: Url,
    headers: HeaderMap,
}

impl<H> Client<H> {
    /// Creates a client rooted at `base_url`.
    ///
    /// A missing trailing slash is added so relative paths resolve beneath
    /// the base path instead of replacing its last segment.
    #[must_use]
    pub fn new(http: H, mut base_url: Url) -> Self {
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        Self {
            http,
            base_url,
            headers: HeaderMap::new(),
        }
    }

    /// Creates a client rooted at the given environment's API.
    #[must_use]
    pub fn for_environment(http: H, environment: Environment) -> Self {
        Self::new(http, environment.base_url())
    }

    /// Sets headers sent with every request, replacing any set before.
    #[must_use]
    pub fn with_headers(mut self, headers: HeaderMap) -> Self {
        self.headers = headers;
        self
    }

    /// Adds a header sent with every request.
    #[must_use]
    pub fn with_header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }

    /// Sends `Authorization: Bearer <token>` with every request.
    ///
    /// # Errors
    ///
    /// Returns an error if the token contains characters not allowed in a header.
    pub fn with_bearer_token(self, token: &str) -> Result<Self, InvalidHeaderValue> {
        let mut value = HeaderValue::from_str(&format!("Bearer {token}"))?;
        value.set_sensitive(true);
        Ok(self.with_header(AUTHORIZATION, value))
    }

    /// Returns the base URL, always ending in `/`.
    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Returns the headers sent with every request.
    #[must_use]
    pub const fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Returns the underlying transport.
    #[must_use]
    pub const fn http(&self) -> &H {
        &self.http
    }

    /// Resolves a relative path or absolute href against the base URL.
    ///
    /// Absolute hrefs keep their own host, and the default headers
    /// (`Authorization` included) go with them. Only pass hrefs the platform
    /// itself returned in `_links` or `Location`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidTarget`] if the target cannot be joined.
    pub fn resolve(&self, target: &str) -> Result<Url, ApiError> {
        self.base_url
            .join(target)
            .map_err(|e| ApiError::InvalidTarget {
                target: target.to_string(),
                reason: e.to_string(),
            })
    }

    /// Builds the URL of one item of `collection`.
    ///
    /// `id` becomes exactly one path segment; `/`, `?`, `#` and `%` in it
    /// are percent-encoded rather than read as URL syntax.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidTarget`] if `id` is empty, `.` or `..`,
    /// none of which can name an item.
    pub fn item_url(&self, collection: &str, id: &str) -> Result<Url, ApiError> {
        let invalid = |reason: &str| ApiError::InvalidTarget {
            target: format!("{collection}/{id}"),
            reason: reason.to_string(),
        };

        if matches!(id, "" | "." | "..") {
            return Err(invalid("id must be a non-empty path segment"));
        }

        let mut url = self.resolve(collection)?;
        url.path_segments_mut()
            .map_err(|()| invalid("collection URL cannot be a base"))?
            .pop_if_empty()
            .push(id);
        Ok(url)
    }
}

impl<H: HttpClient> Client<H> {
    /// Fetches `target` and decodes the body as `T`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure, non-success status, or
    /// an undecodable body.
    pub async fn get<T: DeserializeOwned>(&self, target: &str) -> Result<T, ApiError> {
        let url = self.resolve(target)?;
        let response = self.send(HttpRequest::get(url)).await?;
        decode(&response)
    }

    /// Posts `body` as JSON to `target` and decodes the resulting resource.
    ///
    /// A `201 Created` carrying a `Location` header is answered by fetching
    /// that location, since creation responses have no body.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on encode failure, transport failure,
    /// non-success status, or an undecodable body.
    pub async fn post<B, T>(&self, target: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized + Sync,
        T: DeserializeOwned,
    {
        let url = self.resolve(target)?;
        let payload = serde_json::to_vec(body).map_err(ApiError::Encode)?;
        let request = HttpRequest::post(url)
            .with_header(CONTENT_TYPE, HeaderValue::from_static(HAL_MEDIA_TYPE))
            .with_body(payload);

        let response = self.send(request).await?;

        let created = response
            .location()
            .filter(|_| response.status == StatusCode::CREATED);

        if let Some(location) = created {
            tracing::debug!(location, "Fetching created resource");
            return self.get(location).await;
        }

        decode(&response)
    }

    /// Deletes `target`, discarding any response body.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure or non-success status.
    pub async fn delete(&self, target: &str) -> Result<(), ApiError> {
        let url = self.resolve(target)?;
        self.send(HttpRequest::delete(url)).await?;
        Ok(())
    }

    /// Sends a request with the default headers and checks the status.
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        let request = request
            .with_header(ACCEPT, HeaderValue::from_static(HAL_MEDIA_TYPE))
            .with_headers(&self.headers);
        let method = request.method.clone();
        let url = request.url.clone();

        tracing::debug!(%method, %url, "Sending request");

        let response = self.http.request(request).await.map_err(|e| {
            tracing::warn!(%method, %url, error = %e, "Request failed");
            ApiError::from(e)
        })?;

        if response.is_success() {
            tracing::debug!(%method, %url, status = %response.status, "Request succeeded");
            return Ok(response);
        }

        tracing::warn!(%method, %url, status = %response.status, "Request rejected");
        Err(error_from_response(&response))
    }
}

fn decode<T: DeserializeOwned>(response: &HttpResponse) -> Result<T, ApiError> {
    serde_json::from_slice(&response.body).map_err(ApiError::Decode)
}

fn error_from_response(response: &HttpResponse) -> ApiError {
    match serde_json::from_slice::<RemoteErrorBody>(&response.body) {
        Ok(body) => ApiError::Remote {
            status: response.status,
            code: body.code,
            message: body.message,
        },
        Err(_) => ApiError::Status {
            status: response.status,
            body: response
                .body_text()
                .filter(|text| !text.is_empty())
                .map(ToString::to_string),
        },
    }
}
