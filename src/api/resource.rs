//! HAL hyperlinks embedded in resources.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::ApiError;

/// Well-known link relation names.
pub mod rel {
    /// The resource itself.
    pub const SELF: &str = "self";
    /// Webhooks delivered for a subscription.
    pub const WEBHOOKS: &str = "webhooks";
}

/// A single hyperlink as found under `_links`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    /// Target URL, usually absolute.
    pub href: String,

    /// Media type of the target.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub media_type: Option<String>,

    /// Resource type of the target, e.g. `webhook-subscription`.
    #[serde(
        rename = "resource-type",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub resource_type: Option<String>,
}

impl Link {
    /// Creates a link with only an `href`.
    #[must_use]
    pub fn new(href: impl Into<String>) -> Self {
        Self {
            href: href.into(),
            media_type: None,
            resource_type: None,
        }
    }
}

/// Mapping from relation name to [`Link`].
///
/// Instance operations never walk an object graph; they look up a relation
/// here and fail with [`ApiError::MissingLink`] if it is absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Links(BTreeMap<String, Link>);

impl Links {
    /// Creates an empty link map.
    #[must_use]
    pub const fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Adds (or replaces) a relation.
    #[must_use]
    pub fn with(mut self, rel: impl Into<String>, link: Link) -> Self {
        self.0.insert(rel.into(), link);
        self
    }

    /// Looks up a relation.
    #[must_use]
    pub fn get(&self, rel: &str) -> Option<&Link> {
        self.0.get(rel)
    }

    /// Looks up a relation that an operation cannot proceed without.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::MissingLink`] if the relation is absent.
    pub fn require(&self, rel: &str) -> Result<&Link, ApiError> {
        self.get(rel).ok_or_else(|| ApiError::missing_link(rel))
    }

    /// Returns true if the relation is present.
    #[must_use]
    pub fn contains(&self, rel: &str) -> bool {
        self.0.contains_key(rel)
    }

    /// Iterates relations in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Link)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of relations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if there are no relations.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
