use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;

use crate::domain::ComplaintCategory;

/// Unvalidated verdict as reported by an external classifier.
///
/// `priority` is kept as raw JSON. It is only read when no keyword decided
/// the priority, so a keyword match never depends on its shape.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ClassifierOutput {
    pub category: String,
    #[serde(default)]
    pub priority: Value,
    pub reason: String,
}

#[async_trait]
pub trait ComplaintClassifier: Send + Sync {
    /// `Ok(None)` means the classifier answered but produced no verdict.
    async fn classify(
        &self,
        description: &str,
        categories: &[ComplaintCategory],
    ) -> Result<Option<ClassifierOutput>, ClassifierError>;
}

#[derive(Debug, thiserror::Error)]
pub enum ClassifierError {
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("rate limited")]
    RateLimited,
    #[error("invalid response: {0}")]
    InvalidResponse(String),
    #[error("classifier unavailable: {0}")]
    Unavailable(String),
}
