mod complaint_classifier;
mod complaint_repository;
mod repository_error;
mod transcription_engine;

pub use complaint_classifier::{ClassifierError, ClassifierOutput, ComplaintClassifier};
pub use complaint_repository::{ComplaintFilter, ComplaintRepository};
pub use repository_error::RepositoryError;
pub use transcription_engine::{TranscriptionEngine, TranscriptionError};
