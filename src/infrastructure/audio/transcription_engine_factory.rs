use std::sync::Arc;
use std::time::Duration;

use crate::application::ports::{TranscriptionEngine, TranscriptionError};
use crate::presentation::config::{TranscriptionProviderSetting, TranscriptionSettings};

use super::azure_whisper_engine::AzureWhisperEngine;
use super::disabled_engine::DisabledTranscriptionEngine;
use super::openai_whisper_engine::OpenAiWhisperEngine;

pub struct TranscriptionEngineFactory;

impl TranscriptionEngineFactory {
    pub fn create(
        settings: &TranscriptionSettings,
    ) -> Result<Arc<dyn TranscriptionEngine>, TranscriptionError> {
        let timeout = Duration::from_secs(settings.timeout_secs);

        match settings.provider {
            TranscriptionProviderSetting::Disabled => Ok(Arc::new(DisabledTranscriptionEngine)),
            TranscriptionProviderSetting::OpenAi => {
                let key = non_empty(&settings.api_key).ok_or_else(|| {
                    TranscriptionError::ConfigurationFailed(
                        "API key required for OpenAI Whisper".to_string(),
                    )
                })?;
                let engine = OpenAiWhisperEngine::new(
                    key,
                    settings.base_url.clone(),
                    Some(settings.model.clone()),
                    timeout,
                )?;
                Ok(Arc::new(engine))
            }
            TranscriptionProviderSetting::Azure => {
                let base_url = settings.base_url.as_deref().ok_or_else(|| {
                    TranscriptionError::ConfigurationFailed(
                        "base_url required for Azure Whisper".to_string(),
                    )
                })?;
                let key = non_empty(&settings.api_key).ok_or_else(|| {
                    TranscriptionError::ConfigurationFailed(
                        "API key required for Azure Whisper".to_string(),
                    )
                })?;
                let engine = AzureWhisperEngine::new(
                    base_url,
                    &settings.model,
                    &key,
                    &settings.api_version,
                    timeout,
                )?;
                Ok(Arc::new(engine))
            }
        }
    }
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
