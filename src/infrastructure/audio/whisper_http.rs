use std::time::Duration;

use reqwest::multipart::{Form, Part};
use reqwest::{Client, Response, StatusCode};

use crate::application::ports::TranscriptionError;
use crate::domain::AudioPayload;

pub(super) fn http_client(timeout: Duration) -> Result<Client, TranscriptionError> {
    Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|e| TranscriptionError::ConfigurationFailed(format!("http client: {}", e)))
}

/// Multipart form carrying the recording under the `file` field.
pub(super) fn upload_form(audio: &AudioPayload) -> Result<Form, TranscriptionError> {
    let recording = Part::bytes(audio.bytes.clone())
        .file_name(audio.file_name())
        .mime_str(&audio.media_type)
        .map_err(|e| {
            TranscriptionError::UnsupportedFormat(format!("{}: {}", audio.media_type, e))
        })?;
    Ok(Form::new().part("file", recording))
}

/// Passes a successful response through and classifies the rest.
///
/// Credential rejections surface as configuration problems and rejected uploads
/// as unsupported audio, so callers can tell them apart from outages.
pub(super) async fn accept(
    response: Response,
    service: &str,
) -> Result<Response, TranscriptionError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let detail = response.text().await.unwrap_or_default();
    let message = format!("{} answered {}: {}", service, status, detail.trim());

    Err(match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
            TranscriptionError::ConfigurationFailed(message)
        }
        StatusCode::BAD_REQUEST
        | StatusCode::PAYLOAD_TOO_LARGE
        | StatusCode::UNSUPPORTED_MEDIA_TYPE => TranscriptionError::UnsupportedFormat(message),
        _ => TranscriptionError::ApiRequestFailed(message),
    })
}

pub(super) fn request_failed(service: &str, error: reqwest::Error) -> TranscriptionError {
    if error.is_timeout() {
        TranscriptionError::ApiRequestFailed(format!("{} timed out", service))
    } else {
        TranscriptionError::ApiRequestFailed(format!("{} unreachable: {}", service, error))
    }
}
