//! Ability score parsing.

use std::fmt;

use crate::error::{BestiaryError, Result};

/// A parsed ability score (STR, DEX, and friends).
///
/// Displays as the score with its derived modifier, e.g. `16 (+3)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AbilityScore {
    pub score: i64,
}

impl AbilityScore {
    pub fn new(score: i64) -> Self {
        Self { score }
    }

    /// Ability modifier: floor((score - 10) / 2).
    ///
    /// Floor division, not truncation: a score of 7 gives -2, not -1.
    pub fn modifier(&self) -> i64 {
        (self.score - 10).div_euclid(2)
    }
}

impl fmt::Display for AbilityScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({:+})", self.score, self.modifier())
    }
}

/// Parse an ability score from its textual field value.
pub fn parse_ability(value: &str) -> Result<AbilityScore> {
    let score = value
        .trim()
        .parse::<i64>()
        .map_err(|_| BestiaryError::Format {
            message: format!("Invalid ability score: '{}'", value.trim()),
            help: Some("Ability scores are plain integers, e.g. 16".to_string()),
        })?;
    Ok(AbilityScore::new(score))
}
