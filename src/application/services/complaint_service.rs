use std::cmp::Reverse;
use std::sync::Arc;

use crate::application::ports::{ComplaintFilter, ComplaintRepository, RepositoryError};
use crate::domain::{Complaint, ComplaintId, ComplaintStatus, NewComplaint, TriageVerdict};

use super::TriageService;

pub struct ComplaintService {
    repository: Arc<dyn ComplaintRepository>,
    triage: Arc<TriageService>,
}

impl ComplaintService {
    pub fn new(repository: Arc<dyn ComplaintRepository>, triage: Arc<TriageService>) -> Self {
        Self { repository, triage }
    }

    /// Stores a new complaint with the verdict the form already holds, or a fresh one.
    #[tracing::instrument(skip(self, input, verdict), fields(category = %input.category))]
    pub async fn submit(
        &self,
        input: NewComplaint,
        verdict: Option<TriageVerdict>,
    ) -> Result<Complaint, ComplaintError> {
        if input.description.trim().is_empty() {
            return Err(ComplaintError::Validation(
                "description must not be empty".to_string(),
            ));
        }

        let verdict = match verdict {
            Some(verdict) => verdict,
            None => self.triage.classify(&input.description).await,
        };

        let complaint = Complaint::new(input, Some(verdict));
        self.repository.create(&complaint).await?;

        tracing::info!(complaint_id = %complaint.id, "Complaint submitted");
        Ok(complaint)
    }

    pub async fn get(&self, id: ComplaintId) -> Result<Option<Complaint>, ComplaintError> {
        Ok(self.repository.get_by_id(id).await?)
    }

    #[tracing::instrument(skip(self, remarks))]
    pub async fn update_status(
        &self,
        id: ComplaintId,
        status: ComplaintStatus,
        remarks: Option<String>,
    ) -> Result<Complaint, ComplaintError> {
        let mut complaint = self
            .repository
            .get_by_id(id)
            .await?
            .ok_or(ComplaintError::NotFound(id))?;

        let from = complaint.status;
        if !complaint.advance(status, remarks) {
            return Err(ComplaintError::InvalidTransition { from, to: status });
        }

        self.repository.update(&complaint).await?;
        tracing::info!(complaint_id = %id, from = %from, to = %status, "Complaint status updated");
        Ok(complaint)
    }

    /// Most urgent first; untriaged complaints sort last, ties by submission time.
    pub async fn list(&self, filter: &ComplaintFilter) -> Result<Vec<Complaint>, ComplaintError> {
        let mut complaints = self.repository.list(filter).await?;
        complaints.sort_by_key(|c| (Reverse(c.triage.as_ref().map(|t| t.priority)), c.created_at));
        Ok(complaints)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ComplaintError {
    #[error("validation failed: {0}")]
    Validation(String),
    #[error("complaint not found: {0}")]
    NotFound(ComplaintId),
    #[error("cannot move complaint from {from} to {to}")]
    InvalidTransition {
        from: ComplaintStatus,
        to: ComplaintStatus,
    },
    #[error("repository: {0}")]
    Repository(#[from] RepositoryError),
}
