use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use super::whisper_http::{accept, http_client, request_failed, upload_form};
use crate::application::ports::{TranscriptionEngine, TranscriptionError};
use crate::domain::AudioPayload;

const SERVICE: &str = "openai whisper";
const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
const DEFAULT_MODEL: &str = "whisper-1";

/// Speech-to-text through the OpenAI `audio/transcriptions` endpoint, plain text output.
pub struct OpenAiWhisperEngine {
    client: Client,
    api_key: String,
    url: String,
    model: String,
}

impl OpenAiWhisperEngine {
    pub fn new(
        api_key: String,
        base_url: Option<String>,
        model: Option<String>,
        timeout: Duration,
    ) -> Result<Self, TranscriptionError> {
        let base = base_url.as_deref().unwrap_or(DEFAULT_BASE_URL);
        Ok(Self {
            client: http_client(timeout)?,
            api_key,
            url: format!("{}/audio/transcriptions", base.trim_end_matches('/')),
            model: model.unwrap_or_else(|| DEFAULT_MODEL.to_string()),
        })
    }
}

#[async_trait]
impl TranscriptionEngine for OpenAiWhisperEngine {
    async fn transcribe(&self, audio: &AudioPayload) -> Result<String, TranscriptionError> {
        let form = upload_form(audio)?
            .text("model", self.model.clone())
            .text("response_format", "text");

        tracing::debug!(
            model = %self.model,
            media_type = %audio.media_type,
            bytes = audio.bytes.len(),
            "Uploading complaint audio"
        );

        let response = self
            .client
            .post(&self.url)
            .bearer_auth(&self.api_key)
            .multipart(form)
            .send()
            .await
            .map_err(|e| request_failed(SERVICE, e))?;

        let transcript = accept(response, SERVICE)
            .await?
            .text()
            .await
            .map_err(|e| TranscriptionError::TranscriptionFailed(format!("unreadable transcript: {}", e)))?;

        let transcript = transcript.trim();
        tracing::info!(chars = transcript.chars().count(), "Complaint audio transcribed");
        Ok(transcript.to_string())
    }
}
