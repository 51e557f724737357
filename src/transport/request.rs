//! Raw request and response values exchanged with an [`HttpClient`].

use std::future::Future;

use http::header::LOCATION;
use http::{HeaderMap, HeaderName, HeaderValue, Method, StatusCode};
use url::Url;

use super::HttpError;

/// One outgoing call to the platform.
///
/// The API client fills in the media-type and default headers; a transport
/// only has to put these fields on the wire.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    /// Verb; the API only issues GET, POST and DELETE
    pub method: Method,
    /// Absolute target, already resolved against the base URL
    pub url: Url,
    /// Headers to send
    pub headers: HeaderMap,
    /// Encoded JSON payload, if any
    pub body: Option<Vec<u8>>,
}

impl HttpRequest {
    /// Creates a request with no headers and no body.
    #[must_use]
    pub fn new(method: Method, url: Url) -> Self {
        Self {
            method,
            url,
            headers: HeaderMap::new(),
            body: None,
        }
    }

    /// Fetch a resource or collection.
    #[must_use]
    pub fn get(url: Url) -> Self {
        Self::new(Method::GET, url)
    }

    /// Create a resource, or update one through its `self` link.
    #[must_use]
    pub fn post(url: Url) -> Self {
        Self::new(Method::POST, url)
    }

    /// Remove a resource.
    #[must_use]
    pub fn delete(url: Url) -> Self {
        Self::new(Method::DELETE, url)
    }

    /// Attaches an encoded payload.
    #[must_use]
    pub fn with_body(mut self, body: Vec<u8>) -> Self {
        self.body = Some(body);
        self
    }

    /// Appends a header value, keeping any existing values of that name.
    #[must_use]
    pub fn with_header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.append(name, value);
        self
    }

    /// Copies `headers` in, replacing existing values of the same names.
    #[must_use]
    pub fn with_headers(mut self, headers: &HeaderMap) -> Self {
        for (name, value) in headers {
            self.headers.insert(name, value.clone());
        }
        self
    }
}

/// What the platform answered, body fully buffered.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    /// Status line code
    pub status: StatusCode,
    /// Response headers
    pub headers: HeaderMap,
    /// Raw body; empty for `201 Created` and most deletes
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// Creates a response from its parts.
    #[must_use]
    pub const fn new(status: StatusCode, headers: HeaderMap, body: Vec<u8>) -> Self {
        Self {
            status,
            headers,
            body,
        }
    }

    /// True for any 2xx status.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// The body as UTF-8, or `None` if it is not valid text.
    #[must_use]
    pub fn body_text(&self) -> Option<&str> {
        std::str::from_utf8(&self.body).ok()
    }

    /// Where a newly created resource lives, from the `Location` header.
    #[must_use]
    pub fn location(&self) -> Option<&str> {
        self.headers.get(LOCATION).and_then(|v| v.to_str().ok())
    }
}

/// The network seam: sends one [`HttpRequest`] and buffers the answer.
///
/// [`ReqwestClient`](super::ReqwestClient) is the production
/// implementation. Tests implement it on a struct that replays canned
/// responses and records what was sent:
///
/// ```ignore
/// use dwolla_subscriptions::transport::{HttpClient, HttpError, HttpRequest, HttpResponse};
///
/// struct Canned(HttpResponse);
///
/// impl HttpClient for Canned {
///     async fn request(&self, _req: HttpRequest) -> Result<HttpResponse, HttpError> {
///         Ok(self.0.clone())
///     }
/// }
/// ```
pub trait HttpClient: Send + Sync {
    /// Sends `req` and returns whatever status came back.
    ///
    /// A 4xx or 5xx answer is still `Ok`; judging statuses is left to
    /// [`Client`](crate::api::Client).
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] only when no response was obtained:
    /// - [`HttpError::Connection`]
    /// - [`HttpError::Timeout`]
    /// - [`HttpError::InvalidUrl`]
    fn request(
        &self,
        req: HttpRequest,
    ) -> impl Future<Output = Result<HttpResponse, HttpError>> + Send;
}
