use std::sync::Arc;

use crate::application::ports::{ClassifierError, ComplaintClassifier};
use crate::presentation::config::{ClassifierSettings, ScaffoldConfig};

use super::openai_classifier::create_complaint_classifier;
use super::scaffold_classifier::ScaffoldClassifier;

pub struct ClassifierFactory;

impl ClassifierFactory {
    pub fn create(
        settings: &ClassifierSettings,
        scaffold: &ScaffoldConfig,
    ) -> Result<Arc<dyn ComplaintClassifier>, ClassifierError> {
        if scaffold.enabled {
            tracing::info!("Scaffold mode enabled, using offline classifier");
            return Ok(Arc::new(ScaffoldClassifier::new(
                scaffold.mock_response_delay_ms,
            )));
        }

        if settings.api_key.trim().is_empty() && settings.provider != "lmstudio" {
            tracing::warn!(
                provider = %settings.provider,
                "No classifier API key configured, triage will run in fallback mode"
            );
            return Ok(Arc::new(ScaffoldClassifier::new(0)));
        }

        let classifier = create_complaint_classifier(settings)?;
        Ok(Arc::new(classifier))
    }
}
