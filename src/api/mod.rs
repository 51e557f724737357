//! JSON layer over the transport.
//!
//! This module provides:
//! - The generic API collaborator ([`Client`]) with `get`/`post`/`delete`
//! - Platform environments and their base URLs ([`Environment`])
//! - HAL hyperlink primitives ([`Link`], [`Links`])
//! - The error type shared by every resource operation ([`ApiError`])

mod client;
mod error;
mod resource;

#[cfg(test)]
pub(crate) mod test_fixtures;


pub use client::{Client, Environment, HAL_MEDIA_TYPE};
pub use error::ApiError;
pub use resource::{Link, Links, rel};
