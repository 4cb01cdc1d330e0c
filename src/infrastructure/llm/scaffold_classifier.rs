use std::time::Duration;

use crate::application::ports::{ClassifierError, ClassifierOutput, ComplaintClassifier};
use crate::domain::ComplaintCategory;

/// Offline stand-in used in scaffold mode or when no API key is configured.
///
/// Always reports itself unavailable, so triage runs on keywords alone.
pub struct ScaffoldClassifier {
    delay: Duration,
}

impl ScaffoldClassifier {
    pub fn new(delay_ms: u64) -> Self {
        Self {
            delay: Duration::from_millis(delay_ms),
        }
    }
}

#[async_trait::async_trait]
impl ComplaintClassifier for ScaffoldClassifier {
    async fn classify(
        &self,
        _description: &str,
        _categories: &[ComplaintCategory],
    ) -> Result<Option<ClassifierOutput>, ClassifierError> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        Err(ClassifierError::Unavailable("scaffold mode".to_string()))
    }
}
