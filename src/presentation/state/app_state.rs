use std::sync::Arc;

use crate::application::services::{ComplaintService, TranscriptionService, TriageService};
use crate::presentation::config::ScaffoldConfig;

#[derive(Clone)]
pub struct AppState {
    pub triage_service: Arc<TriageService>,
    pub transcription_service: Arc<TranscriptionService>,
    pub complaint_service: Arc<ComplaintService>,
    pub scaffold_config: ScaffoldConfig,
}
