use std::sync::Arc;

use serde_json::Value;

use crate::application::ports::{ClassifierOutput, ComplaintClassifier};
use crate::domain::{
    ComplaintCategory, KeywordPriorityTable, PriorityLevel, TriageVerdict, VerdictSource,
};
use crate::infrastructure::observability::sanitize_prompt;

/// Assigns a category and priority to a complaint description.
///
/// The external classifier supplies category and reason. A keyword match
/// always decides the priority, and any classifier failure degrades to
/// [`TriageVerdict::fallback`] instead of surfacing an error.
pub struct TriageService {
    classifier: Arc<dyn ComplaintClassifier>,
    keywords: Arc<KeywordPriorityTable>,
}

impl TriageService {
    pub fn new(classifier: Arc<dyn ComplaintClassifier>) -> Self {
        Self::with_keywords(classifier, KeywordPriorityTable::standard())
    }

    pub fn with_keywords(
        classifier: Arc<dyn ComplaintClassifier>,
        keywords: Arc<KeywordPriorityTable>,
    ) -> Self {
        Self {
            classifier,
            keywords,
        }
    }

    pub fn scan_keywords(&self, text: &str) -> Option<PriorityLevel> {
        self.keywords.scan(text)
    }

    #[tracing::instrument(skip(self, description), fields(chars = description.chars().count()))]
    pub async fn classify(&self, description: &str) -> TriageVerdict {
        tracing::debug!(description = %sanitize_prompt(description), "Triaging complaint");

        let keyword_priority = self.scan_keywords(description);

        let output = match self
            .classifier
            .classify(description, &ComplaintCategory::ALL)
            .await
        {
            Ok(Some(output)) => output,
            Ok(None) => {
                tracing::warn!("Classifier returned no output, using fallback verdict");
                return TriageVerdict::fallback(keyword_priority);
            }
            Err(e) => {
                tracing::warn!(error = %e, "Classifier unavailable, using fallback verdict");
                return TriageVerdict::fallback(keyword_priority);
            }
        };

        match resolve_verdict(output, keyword_priority) {
            Ok(verdict) => {
                tracing::info!(
                    category = %verdict.category,
                    priority = verdict.priority.value(),
                    source = ?verdict.source,
                    "Complaint triaged"
                );
                verdict
            }
            Err(e) => {
                tracing::warn!(error = %e, "Malformed classifier output, using fallback verdict");
                TriageVerdict::fallback(keyword_priority)
            }
        }
    }
}

fn resolve_verdict(
    output: ClassifierOutput,
    keyword_priority: Option<PriorityLevel>,
) -> Result<TriageVerdict, String> {
    let category: ComplaintCategory = output.category.trim().parse()?;

    let (priority, source) = match keyword_priority {
        Some(priority) => (priority, VerdictSource::KeywordOverride),
        None => (
            classifier_priority(&output.priority)?,
            VerdictSource::Classifier,
        ),
    };

    Ok(TriageVerdict {
        category,
        priority,
        reason: output.reason,
        source,
    })
}

/// Accepts any JSON number with an integral value, so `4` and `4.0` agree.
fn classifier_priority(raw: &Value) -> Result<PriorityLevel, String> {
    let value = match raw.as_i64() {
        Some(value) => value,
        None => match raw.as_f64() {
            Some(value) if value.fract() == 0.0 && value.abs() <= i64::MAX as f64 => {
                value as i64
            }
            _ => return Err(format!("priority is not an integer: {}", raw)),
        },
    };
    PriorityLevel::new(value)
}
