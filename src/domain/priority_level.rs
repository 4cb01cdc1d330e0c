use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Complaint urgency from 1 (feedback) to 5 (critical).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PriorityLevel(u8);

impl PriorityLevel {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    pub const FEEDBACK: PriorityLevel = PriorityLevel(1);
    pub const LOW: PriorityLevel = PriorityLevel(2);
    pub const MEDIUM: PriorityLevel = PriorityLevel(3);
    pub const HIGH: PriorityLevel = PriorityLevel(4);
    pub const CRITICAL: PriorityLevel = PriorityLevel(5);

    pub fn new(value: i64) -> Result<Self, String> {
        if (i64::from(Self::MIN)..=i64::from(Self::MAX)).contains(&value) {
            Ok(Self(value as u8))
        } else {
            Err(format!(
                "Invalid priority level: {}. Expected {}..={}",
                value,
                Self::MIN,
                Self::MAX
            ))
        }
    }

    pub fn value(&self) -> u8 {
        self.0
    }

    pub fn label(&self) -> &'static str {
        match self.0 {
            5 => "Critical",
            4 => "High",
            3 => "Medium",
            2 => "Low",
            _ => "Feedback",
        }
    }
}

impl fmt::Display for PriorityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.0, self.label())
    }
}

impl Serialize for PriorityLevel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.0)
    }
}

impl<'de> Deserialize<'de> for PriorityLevel {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = i64::deserialize(deserializer)?;
        PriorityLevel::new(raw).map_err(serde::de::Error::custom)
    }
}
