use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Fixed set of complaint categories a passenger or the classifier can pick from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComplaintCategory {
    Medical,
    Security,
    Cleanliness,
    Food,
    Delay,
    StaffBehavior,
    Infrastructure,
    Other,
}

impl ComplaintCategory {
    pub const ALL: [ComplaintCategory; 8] = [
        ComplaintCategory::Medical,
        ComplaintCategory::Security,
        ComplaintCategory::Cleanliness,
        ComplaintCategory::Food,
        ComplaintCategory::Delay,
        ComplaintCategory::StaffBehavior,
        ComplaintCategory::Infrastructure,
        ComplaintCategory::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ComplaintCategory::Medical => "Medical",
            ComplaintCategory::Security => "Security",
            ComplaintCategory::Cleanliness => "Cleanliness",
            ComplaintCategory::Food => "Food",
            ComplaintCategory::Delay => "Delay",
            ComplaintCategory::StaffBehavior => "Staff Behavior",
            ComplaintCategory::Infrastructure => "Infrastructure",
            ComplaintCategory::Other => "Other",
        }
    }
}

impl FromStr for ComplaintCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Medical" => Ok(ComplaintCategory::Medical),
            "Security" => Ok(ComplaintCategory::Security),
            "Cleanliness" => Ok(ComplaintCategory::Cleanliness),
            "Food" => Ok(ComplaintCategory::Food),
            "Delay" => Ok(ComplaintCategory::Delay),
            "Staff Behavior" | "StaffBehavior" => Ok(ComplaintCategory::StaffBehavior),
            "Infrastructure" => Ok(ComplaintCategory::Infrastructure),
            "Other" => Ok(ComplaintCategory::Other),
            _ => Err(format!("Invalid complaint category: {}", s)),
        }
    }
}

impl fmt::Display for ComplaintCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Serialize for ComplaintCategory {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ComplaintCategory {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
