mod complaint_service;
mod transcription_service;
mod triage_service;

pub use complaint_service::{ComplaintError, ComplaintService};
pub use transcription_service::{TranscriptionResult, TranscriptionService};
pub use triage_service::TriageService;
