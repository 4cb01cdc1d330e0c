use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::{Deserialize, Serialize};

use crate::domain::{ComplaintCategory, TriageVerdict, VerdictSource};
use crate::presentation::state::AppState;

use super::error::error_response;

/// The complaint form only asks for assistance past this many characters.
pub const MIN_DESCRIPTION_CHARS: usize = 20;

#[derive(Deserialize)]
pub struct TriageRequest {
    pub description: String,
}

#[derive(Serialize)]
pub struct TriageResponse {
    pub category: ComplaintCategory,
    pub priority: u8,
    pub priority_label: &'static str,
    pub reason: String,
    pub source: VerdictSource,
}

impl From<TriageVerdict> for TriageResponse {
    fn from(verdict: TriageVerdict) -> Self {
        Self {
            category: verdict.category,
            priority: verdict.priority.value(),
            priority_label: verdict.priority.label(),
            reason: verdict.reason,
            source: verdict.source,
        }
    }
}

#[tracing::instrument(skip(state, request))]
pub async fn triage_handler(
    State(state): State<AppState>,
    Json(request): Json<TriageRequest>,
) -> impl IntoResponse {
    if request.description.trim().chars().count() <= MIN_DESCRIPTION_CHARS {
        return error_response(
            StatusCode::UNPROCESSABLE_ENTITY,
            format!(
                "description must be longer than {} characters",
                MIN_DESCRIPTION_CHARS
            ),
        );
    }

    let verdict = state.triage_service.classify(&request.description).await;
    (StatusCode::OK, Json(TriageResponse::from(verdict))).into_response()
}
