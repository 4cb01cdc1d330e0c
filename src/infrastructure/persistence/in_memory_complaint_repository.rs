use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::application::ports::{ComplaintFilter, ComplaintRepository, RepositoryError};
use crate::domain::{Complaint, ComplaintId};

/// Process-local complaint store, owned by whoever constructs it.
#[derive(Default)]
pub struct InMemoryComplaintRepository {
    complaints: RwLock<HashMap<ComplaintId, Complaint>>,
}

impl InMemoryComplaintRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_complaints(complaints: impl IntoIterator<Item = Complaint>) -> Self {
        Self {
            complaints: RwLock::new(complaints.into_iter().map(|c| (c.id, c)).collect()),
        }
    }
}

#[async_trait]
impl ComplaintRepository for InMemoryComplaintRepository {
    async fn create(&self, complaint: &Complaint) -> Result<(), RepositoryError> {
        let mut complaints = self.complaints.write().await;
        if complaints.contains_key(&complaint.id) {
            return Err(RepositoryError::ConstraintViolation(format!(
                "complaint {} already exists",
                complaint.id
            )));
        }
        complaints.insert(complaint.id, complaint.clone());
        Ok(())
    }

    async fn get_by_id(&self, id: ComplaintId) -> Result<Option<Complaint>, RepositoryError> {
        Ok(self.complaints.read().await.get(&id).cloned())
    }

    async fn update(&self, complaint: &Complaint) -> Result<(), RepositoryError> {
        let mut complaints = self.complaints.write().await;
        match complaints.get_mut(&complaint.id) {
            Some(existing) => {
                *existing = complaint.clone();
                Ok(())
            }
            None => Err(RepositoryError::NotFound(complaint.id.to_string())),
        }
    }

    async fn list(&self, filter: &ComplaintFilter) -> Result<Vec<Complaint>, RepositoryError> {
        Ok(self
            .complaints
            .read()
            .await
            .values()
            .filter(|c| filter.matches(c))
            .cloned()
            .collect())
    }
}
