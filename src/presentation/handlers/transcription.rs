use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Deserialize;

use crate::domain::AudioPayload;
use crate::presentation::state::AppState;

use super::error::error_response;

#[derive(Deserialize)]
pub struct TranscriptionRequest {
    pub audio_data_uri: String,
}

#[tracing::instrument(skip(state, request))]
pub async fn transcription_handler(
    State(state): State<AppState>,
    Json(request): Json<TranscriptionRequest>,
) -> impl IntoResponse {
    let audio = match AudioPayload::from_data_uri(&request.audio_data_uri) {
        Ok(audio) => audio,
        Err(e) => {
            tracing::debug!(error = %e, "Rejected audio payload");
            return error_response(StatusCode::BAD_REQUEST, format!("invalid audio: {}", e));
        }
    };

    let result = state.transcription_service.transcribe(&audio).await;
    (StatusCode::OK, Json(result)).into_response()
}
