//! Emotion classification provider trait.

use crate::types::classification::LabelScore;
use crate::Error;
use async_trait::async_trait;

/// Abstraction for text emotion classification services.
///
/// Implementations score a transcript against a fixed emotion vocabulary
/// (see [`crate::types::classification::EMOTION_LABELS`]) and return every
/// label exactly once. Supports hosted inference APIs and local models.
#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait]
pub trait Provider: Send + Sync {
    /// Classify `text` against the provider's emotion vocabulary.
    ///
    /// An empty result violates the provider contract and is rejected by
    /// the aggregation stage downstream, not silently tolerated here.
    async fn classify(&self, text: &str) -> std::result::Result<Vec<LabelScore>, Error>;

    /// Return unique identifier for this provider (e.g., "hugging_face").
    fn provider_id(&self) -> &str;

    /// Validate API credentials by making a lightweight test request.
    async fn verify_credentials(&self) -> std::result::Result<bool, Error>;
}
