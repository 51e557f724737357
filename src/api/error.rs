//! Error types for API operations.

use thiserror::Error;

use crate::transport::HttpError;

/// Error type for resource operations.
///
/// Two kinds of failure exist: everything that came back from (or failed on
/// the way to) the remote service, and [`ApiError::MissingLink`], which is
/// raised locally before any request is sent.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The transport failed; passed through unmodified.
    #[error(transparent)]
    Http(#[from] HttpError),

    /// The service answered with a non-success status and an error document.
    #[error("API error (status {status}) {code}: {message}")]
    Remote {
        /// HTTP status code
        status: http::StatusCode,
        /// Machine-readable error code, e.g. `NotFound`
        code: String,
        /// Human-readable message from the service
        message: String,
    },

    /// The service answered with a non-success status and no usable error document.
    #[error("Unexpected status {status}")]
    Status {
        /// HTTP status code
        status: http::StatusCode,
        /// Response body, if it was valid UTF-8
        body: Option<String>,
    },

    /// The response body could not be decoded into the expected type.
    #[error("Failed to decode response: {0}")]
    Decode(#[source] serde_json::Error),

    /// The request payload could not be encoded.
    #[error("Failed to encode request: {0}")]
    Encode(#[source] serde_json::Error),

    /// A path or hyperlink could not be resolved against the base URL.
    #[error("Invalid request target '{target}': {reason}")]
    InvalidTarget {
        /// The path or href that failed to resolve
        target: String,
        /// Reason for invalidity
        reason: String,
    },

    /// The resource has no hyperlink with the required relation.
    #[error("No {rel} resource link")]
    MissingLink {
        /// Relation name that was looked up
        rel: String,
    },
}

impl ApiError {
    /// Creates a `MissingLink` error for the given relation.
    #[must_use]
    pub fn missing_link(rel: impl Into<String>) -> Self {
        Self::MissingLink { rel: rel.into() }
    }

    /// Returns true for errors raised locally before any request was sent.
    #[must_use]
    pub const fn is_precondition(&self) -> bool {
        matches!(self, Self::MissingLink { .. })
    }

    /// Returns the HTTP status if the service answered with one.
    #[must_use]
    pub const fn status(&self) -> Option<http::StatusCode> {
        match self {
            Self::Remote { status, .. } | Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Returns true if the service reported that the resource does not exist.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(http::StatusCode::NOT_FOUND)
    }
}
