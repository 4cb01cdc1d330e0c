use std::sync::{Arc, LazyLock};

use super::PriorityLevel;

static DEFAULT_TABLE: LazyLock<Arc<KeywordPriorityTable>> = LazyLock::new(|| {
    Arc::new(KeywordPriorityTable::new(vec![
        (
            PriorityLevel::CRITICAL,
            vec!["heart attack", "bleeding", "unconscious", "fire", "assault"],
        ),
        (PriorityLevel::HIGH, vec!["theft", "harassment", "broken door"]),
    ]))
});

/// Trigger phrases that pin a complaint to a minimum priority.
///
/// Levels are kept sorted from most to least urgent, so a text matching
/// phrases at two levels always resolves to the higher one.
#[derive(Debug, Clone)]
pub struct KeywordPriorityTable {
    levels: Vec<(PriorityLevel, Vec<String>)>,
}

impl KeywordPriorityTable {
    pub fn new<S: AsRef<str>>(levels: Vec<(PriorityLevel, Vec<S>)>) -> Self {
        let mut levels: Vec<(PriorityLevel, Vec<String>)> = levels
            .into_iter()
            .map(|(level, phrases)| {
                let phrases = phrases
                    .iter()
                    .map(|p| p.as_ref().trim().to_lowercase())
                    .filter(|p| !p.is_empty())
                    .collect();
                (level, phrases)
            })
            .collect();
        levels.sort_by(|a, b| b.0.cmp(&a.0));
        Self { levels }
    }

    /// The process-wide table used by the triage service.
    pub fn standard() -> Arc<KeywordPriorityTable> {
        Arc::clone(&DEFAULT_TABLE)
    }

    /// Returns the most urgent level with a phrase contained in `text`.
    pub fn scan(&self, text: &str) -> Option<PriorityLevel> {
        let lower_text = text.to_lowercase();
        self.levels
            .iter()
            .find(|(_, phrases)| phrases.iter().any(|p| lower_text.contains(p.as_str())))
            .map(|(level, _)| *level)
    }

    pub fn levels(&self) -> impl Iterator<Item = (PriorityLevel, &[String])> {
        self.levels.iter().map(|(l, p)| (*l, p.as_slice()))
    }
}
