mod complaints;
mod error;
mod health;
mod transcription;
mod triage;

pub use complaints::{
    create_complaint_handler, get_complaint_handler, list_complaints_handler,
    update_status_handler,
};
pub use error::ErrorResponse;
pub use health::health_handler;
pub use transcription::transcription_handler;
pub use triage::{MIN_DESCRIPTION_CHARS, triage_handler};
