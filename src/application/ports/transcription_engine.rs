use async_trait::async_trait;

use crate::domain::AudioPayload;

#[async_trait]
pub trait TranscriptionEngine: Send + Sync {
    async fn transcribe(&self, audio: &AudioPayload) -> Result<String, TranscriptionError>;
}

#[derive(Debug, thiserror::Error)]
pub enum TranscriptionError {
    #[error("transcription failed: {0}")]
    TranscriptionFailed(String),
    #[error("unsupported audio format: {0}")]
    UnsupportedFormat(String),
    #[error("engine configuration failed: {0}")]
    ConfigurationFailed(String),
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
}
