use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{ComplaintCategory, ComplaintId, ComplaintStatus, TriageVerdict};

const SUBMITTED_REMARKS: &str = "Complaint submitted successfully.";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JourneyDetails {
    pub pnr: Option<String>,
    pub ticket_no: Option<String>,
    pub train_no: Option<String>,
    pub station_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusChange {
    pub status: ComplaintStatus,
    pub timestamp: DateTime<Utc>,
    pub remarks: Option<String>,
}

/// Passenger input collected by the complaint form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewComplaint {
    pub category: ComplaintCategory,
    pub description: String,
    pub journey: JourneyDetails,
    pub submitted_by: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Complaint {
    pub id: ComplaintId,
    pub category: ComplaintCategory,
    pub status: ComplaintStatus,
    pub description: String,
    pub journey: JourneyDetails,
    pub submitted_by: String,
    pub created_at: DateTime<Utc>,
    pub history: Vec<StatusChange>,
    pub triage: Option<TriageVerdict>,
}

impl Complaint {
    pub fn new(input: NewComplaint, triage: Option<TriageVerdict>) -> Self {
        let now = Utc::now();
        Self {
            id: ComplaintId::new(),
            category: input.category,
            status: ComplaintStatus::Submitted,
            description: input.description,
            journey: input.journey,
            submitted_by: input.submitted_by,
            created_at: now,
            history: vec![StatusChange {
                status: ComplaintStatus::Submitted,
                timestamp: now,
                remarks: Some(SUBMITTED_REMARKS.to_string()),
            }],
            triage,
        }
    }

    /// Moves the complaint forward, returning `false` if the transition is not allowed.
    pub fn advance(&mut self, status: ComplaintStatus, remarks: Option<String>) -> bool {
        if !self.status.can_transition_to(status) {
            return false;
        }
        self.status = status;
        self.history.push(StatusChange {
            status,
            timestamp: Utc::now(),
            remarks,
        });
        true
    }

    pub fn suggested_category(&self) -> Option<ComplaintCategory> {
        self.triage.as_ref().map(|t| t.category)
    }
}
