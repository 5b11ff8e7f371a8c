//! Membership store for already-delivered reviews.

use async_trait::async_trait;
use thiserror::Error;

/// Error surfaced by a [`SeenStore`] backend.
///
/// Backends live in other crates with their own error types; this flattens
/// them to a message so the review model stays backend-agnostic.
#[derive(Debug, Error)]
#[error("{0}")]
pub struct StoreError(String);

impl StoreError {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

/// Persistent membership set of dedup keys for reviews that have already
/// been sent out.
///
/// Keys are opaque strings built by [`crate::Review::dedup_key`]. Membership
/// survives restarts; a review is delivered at most once across runs.
#[async_trait]
pub trait SeenStore: Send + Sync {
    /// Whether `key` has been recorded.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be reached.
    async fn is_member(&self, key: &str) -> Result<bool, StoreError>;

    /// Record `key`. Recording an already-present key is a no-op.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be reached.
    async fn add(&self, key: &str) -> Result<(), StoreError>;
}
