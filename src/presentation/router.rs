use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::middleware;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::infrastructure::observability::request_id_middleware;
use crate::presentation::handlers::{
    create_complaint_handler, get_complaint_handler, health_handler, list_complaints_handler,
    transcription_handler, triage_handler, update_status_handler,
};
use crate::presentation::state::AppState;

/// Base64 voice recordings are far larger than the default JSON limit.
const MAX_AUDIO_BODY_BYTES: usize = 25 * 1024 * 1024;

pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    let api = Router::new()
        .route("/triage", post(triage_handler))
        .route(
            "/transcriptions",
            post(transcription_handler).layer(DefaultBodyLimit::max(MAX_AUDIO_BODY_BYTES)),
        )
        .route(
            "/complaints",
            post(create_complaint_handler).get(list_complaints_handler),
        )
        .route("/complaints/{id}", get(get_complaint_handler))
        .route("/complaints/{id}/status", post(update_status_handler));

    Router::new()
        .route("/health", get(health_handler))
        .nest("/api/v1", api)
        .layer(middleware::from_fn(request_id_middleware))
        .layer(trace_layer)
        .layer(cors)
        .with_state(state)
}
