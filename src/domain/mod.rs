mod audio_payload;
mod complaint;
mod complaint_category;
mod complaint_id;
mod complaint_status;
mod keyword_priority_table;
mod priority_level;
mod triage_verdict;

pub use audio_payload::{AudioPayload, AudioPayloadError};
pub use complaint::{Complaint, JourneyDetails, NewComplaint, StatusChange};
pub use complaint_category::ComplaintCategory;
pub use complaint_id::ComplaintId;
pub use complaint_status::ComplaintStatus;
pub use keyword_priority_table::KeywordPriorityTable;
pub use priority_level::PriorityLevel;
pub use triage_verdict::{FALLBACK_REASON, TriageVerdict, VerdictSource};
