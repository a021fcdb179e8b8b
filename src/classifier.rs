//! Score to strength level mapping.

use crate::types::StrengthLevel;

impl StrengthLevel {
    /// Maps a score to its band. Thresholds are checked top-down and no
    /// bounds validation is done, so any integer is accepted.
    pub fn from_score(score: i64) -> Self {
        match score {
            s if s >= 90 => StrengthLevel::Strong,
            s if s >= 70 => StrengthLevel::Good,
            s if s >= 50 => StrengthLevel::Fair,
            _ => StrengthLevel::Weak,
        }
    }
}

/// Returns the strength level and its advisory message for `score`.
pub fn classify(score: i64) -> (StrengthLevel, &'static str) {
    let level = StrengthLevel::from_score(score);
    (level, level.message())
}
