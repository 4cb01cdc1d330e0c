use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Deserialize;
use uuid::Uuid;

use crate::application::ports::ComplaintFilter;
use crate::domain::{
    ComplaintCategory, ComplaintId, ComplaintStatus, JourneyDetails, NewComplaint,
};
use crate::presentation::state::AppState;

use super::error::error_response;

const ANONYMOUS_SUBMITTER: &str = "anonymous";

#[derive(Deserialize)]
pub struct CreateComplaintRequest {
    pub category: ComplaintCategory,
    pub description: String,
    #[serde(default)]
    pub journey: JourneyDetails,
    pub submitted_by: Option<String>,
}

#[derive(Deserialize)]
pub struct ListComplaintsQuery {
    pub status: Option<ComplaintStatus>,
    pub category: Option<ComplaintCategory>,
}

#[derive(Deserialize)]
pub struct UpdateStatusRequest {
    pub status: ComplaintStatus,
    pub remarks: Option<String>,
}

#[tracing::instrument(skip(state, request))]
pub async fn create_complaint_handler(
    State(state): State<AppState>,
    Json(request): Json<CreateComplaintRequest>,
) -> impl IntoResponse {
    let input = NewComplaint {
        category: request.category,
        description: request.description,
        journey: request.journey,
        submitted_by: request
            .submitted_by
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| ANONYMOUS_SUBMITTER.to_string()),
    };

    match state.complaint_service.submit(input, None).await {
        Ok(complaint) => (StatusCode::CREATED, Json(complaint)).into_response(),
        Err(e) => e.into_response(),
    }
}

pub async fn list_complaints_handler(
    State(state): State<AppState>,
    Query(query): Query<ListComplaintsQuery>,
) -> impl IntoResponse {
    let filter = ComplaintFilter {
        status: query.status,
        category: query.category,
    };

    match state.complaint_service.list(&filter).await {
        Ok(complaints) => (StatusCode::OK, Json(complaints)).into_response(),
        Err(e) => e.into_response(),
    }
}

pub async fn get_complaint_handler(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> impl IntoResponse {
    let id = ComplaintId::from_uuid(id);
    match state.complaint_service.get(id).await {
        Ok(Some(complaint)) => (StatusCode::OK, Json(complaint)).into_response(),
        Ok(None) => error_response(StatusCode::NOT_FOUND, format!("complaint not found: {}", id)),
        Err(e) => e.into_response(),
    }
}

#[tracing::instrument(skip(state, request))]
pub async fn update_status_handler(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateStatusRequest>,
) -> impl IntoResponse {
    match state
        .complaint_service
        .update_status(ComplaintId::from_uuid(id), request.status, request.remarks)
        .await
    {
        Ok(complaint) => (StatusCode::OK, Json(complaint)).into_response(),
        Err(e) => e.into_response(),
    }
}
