//! Strategies available for generating today's selection.

use super::ParseGenerationModeError;
use serde::{Deserialize, Serialize};

/// Strategy used to pick today's tasks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GenerationMode {
    /// Uniformly shuffled backlog.
    Random,
    /// Highest priority first, earliest deadline breaking ties.
    ByPriority,
    /// Earliest deadline first.
    ByDeadline,
    /// One task per priority tier, topped up by priority.
    Balanced,
}

impl GenerationMode {
    /// All modes, in presentation order.
    pub const ALL: [Self; 4] = [
        Self::Random,
        Self::ByPriority,
        Self::ByDeadline,
        Self::Balanced,
    ];

    /// Returns the canonical name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Random => "random",
            Self::ByPriority => "by_priority",
            Self::ByDeadline => "by_deadline",
            Self::Balanced => "balanced",
        }
    }
}

impl TryFrom<&str> for GenerationMode {
    type Error = ParseGenerationModeError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase().replace([' ', '-'], "_");
        match normalized.as_str() {
            "random" => Ok(Self::Random),
            "by_priority" | "priority" => Ok(Self::ByPriority),
            "by_deadline" | "deadline" => Ok(Self::ByDeadline),
            "balanced" => Ok(Self::Balanced),
            _ => Err(ParseGenerationModeError(value.to_owned())),
        }
    }
}
