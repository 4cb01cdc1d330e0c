use async_trait::async_trait;

use crate::application::ports::{TranscriptionEngine, TranscriptionError};
use crate::domain::AudioPayload;

/// Engine used when no speech provider is configured.
pub struct DisabledTranscriptionEngine;

#[async_trait]
impl TranscriptionEngine for DisabledTranscriptionEngine {
    async fn transcribe(&self, _audio: &AudioPayload) -> Result<String, TranscriptionError> {
        Err(TranscriptionError::ConfigurationFailed(
            "transcription is disabled".to_string(),
        ))
    }
}
