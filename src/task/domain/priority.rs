//! Priority tiers used when ranking backlog tasks.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Priority tier of a backlog task.
///
/// Persisted as its label (`"High"`, `"Medium"`, `"Low"`). Labels outside the
/// known tiers are kept verbatim as [`Priority::Unrecognized`] so a backlog
/// written by another tool still loads; such tasks rank below every tier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Priority {
    /// Least urgent tier.
    Low,
    /// Default tier for new tasks.
    #[default]
    Medium,
    /// Most urgent tier.
    High,
    /// A persisted label that does not name a known tier.
    Unrecognized(String),
}

impl Priority {
    /// Known tiers in the order the balanced strategy visits them.
    pub const TIERS: [Self; 3] = [Self::High, Self::Medium, Self::Low];

    /// Parses a priority label. Matching is exact, as labels are persisted
    /// verbatim.
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        match label {
            "High" => Self::High,
            "Medium" => Self::Medium,
            "Low" => Self::Low,
            other => Self::Unrecognized(other.to_owned()),
        }
    }

    /// Returns the persisted label.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
            Self::Unrecognized(label) => label,
        }
    }

    /// Ranking weight: High 3, Medium 2, Low 1, anything else 0.
    #[must_use]
    pub const fn weight(&self) -> u8 {
        match self {
            Self::High => 3,
            Self::Medium => 2,
            Self::Low => 1,
            Self::Unrecognized(_) => 0,
        }
    }
}

impl From<String> for Priority {
    fn from(value: String) -> Self {
        Self::from_label(&value)
    }
}

impl From<Priority> for String {
    fn from(value: Priority) -> Self {
        match value {
            Priority::Unrecognized(label) => label,
            known => known.as_str().to_owned(),
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
