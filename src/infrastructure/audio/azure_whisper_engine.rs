use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use super::whisper_http::{accept, http_client, request_failed, upload_form};
use crate::application::ports::{TranscriptionEngine, TranscriptionError};
use crate::domain::AudioPayload;

const SERVICE: &str = "azure whisper";

/// Speech-to-text through an Azure OpenAI whisper deployment.
pub struct AzureWhisperEngine {
    client: Client,
    url: String,
    api_key: String,
}

#[derive(Deserialize)]
struct TranscriptBody {
    #[serde(default)]
    text: Option<String>,
}

impl AzureWhisperEngine {
    pub fn new(
        base_url: &str,
        deployment: &str,
        api_key: &str,
        api_version: &str,
        timeout: Duration,
    ) -> Result<Self, TranscriptionError> {
        Ok(Self {
            client: http_client(timeout)?,
            url: format!(
                "{}/openai/deployments/{}/audio/transcriptions?api-version={}",
                base_url.trim_end_matches('/'),
                deployment,
                api_version,
            ),
            api_key: api_key.to_string(),
        })
    }
}

#[async_trait]
impl TranscriptionEngine for AzureWhisperEngine {
    async fn transcribe(&self, audio: &AudioPayload) -> Result<String, TranscriptionError> {
        let form = upload_form(audio)?;

        tracing::debug!(
            media_type = %audio.media_type,
            bytes = audio.bytes.len(),
            "Uploading complaint audio to azure deployment"
        );

        let response = self
            .client
            .post(&self.url)
            .header("api-key", &self.api_key)
            .multipart(form)
            .send()
            .await
            .map_err(|e| request_failed(SERVICE, e))?;

        let body: TranscriptBody = accept(response, SERVICE)
            .await?
            .json()
            .await
            .map_err(|e| TranscriptionError::TranscriptionFailed(format!("malformed transcript: {}", e)))?;

        let transcript = body
            .text
            .map(|text| text.trim().to_string())
            .ok_or_else(|| {
                TranscriptionError::TranscriptionFailed("transcript body had no text".to_string())
            })?;

        tracing::info!(chars = transcript.chars().count(), "Complaint audio transcribed");
        Ok(transcript)
    }
}
