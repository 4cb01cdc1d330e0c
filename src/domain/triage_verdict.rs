use serde::{Deserialize, Serialize};

use super::{ComplaintCategory, PriorityLevel};

pub const FALLBACK_REASON: &str =
    "Automatic assist is temporarily unavailable. Category set to Other by fallback mode.";

const FALLBACK_PRIORITY: PriorityLevel = PriorityLevel::MEDIUM;

/// Where the priority of a verdict came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerdictSource {
    Classifier,
    KeywordOverride,
    Fallback,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TriageVerdict {
    pub category: ComplaintCategory,
    pub priority: PriorityLevel,
    pub reason: String,
    pub source: VerdictSource,
}

impl TriageVerdict {
    pub fn fallback(keyword_priority: Option<PriorityLevel>) -> Self {
        Self {
            category: ComplaintCategory::Other,
            priority: keyword_priority.unwrap_or(FALLBACK_PRIORITY),
            reason: FALLBACK_REASON.to_string(),
            source: VerdictSource::Fallback,
        }
    }

    pub fn is_fallback(&self) -> bool {
        self.source == VerdictSource::Fallback
    }
}
