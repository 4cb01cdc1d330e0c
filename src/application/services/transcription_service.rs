use std::sync::Arc;

use serde::Serialize;

use crate::application::ports::TranscriptionEngine;
use crate::domain::AudioPayload;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TranscriptionResult {
    pub transcribed_text: String,
}

/// Best-effort speech to text. An empty transcript means "unavailable", never silence.
pub struct TranscriptionService {
    engine: Arc<dyn TranscriptionEngine>,
}

impl TranscriptionService {
    pub fn new(engine: Arc<dyn TranscriptionEngine>) -> Self {
        Self { engine }
    }

    #[tracing::instrument(
        skip(self, audio),
        fields(media_type = %audio.media_type, bytes = audio.bytes.len())
    )]
    pub async fn transcribe(&self, audio: &AudioPayload) -> TranscriptionResult {
        if audio.is_empty() {
            tracing::debug!("Empty audio payload, skipping transcription");
            return TranscriptionResult::default();
        }

        match self.engine.transcribe(audio).await {
            Ok(text) => TranscriptionResult {
                transcribed_text: text.trim().to_string(),
            },
            Err(e) => {
                tracing::warn!(error = %e, "Transcription unavailable");
                TranscriptionResult::default()
            }
        }
    }
}
