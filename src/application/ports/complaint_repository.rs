use async_trait::async_trait;

use crate::domain::{Complaint, ComplaintCategory, ComplaintId, ComplaintStatus};

use super::RepositoryError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ComplaintFilter {
    pub status: Option<ComplaintStatus>,
    pub category: Option<ComplaintCategory>,
}

impl ComplaintFilter {
    pub fn matches(&self, complaint: &Complaint) -> bool {
        self.status.is_none_or(|s| complaint.status == s)
            && self.category.is_none_or(|c| complaint.category == c)
    }
}

#[async_trait]
pub trait ComplaintRepository: Send + Sync {
    async fn create(&self, complaint: &Complaint) -> Result<(), RepositoryError>;

    async fn get_by_id(&self, id: ComplaintId) -> Result<Option<Complaint>, RepositoryError>;

    async fn update(&self, complaint: &Complaint) -> Result<(), RepositoryError>;

    async fn list(&self, filter: &ComplaintFilter) -> Result<Vec<Complaint>, RepositoryError>;
}
