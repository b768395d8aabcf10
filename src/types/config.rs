//! Session configuration

use serde::{Deserialize, Serialize};

/// Knobs for the conversational and questionnaire sessions
///
/// Scoring thresholds are not here; they are fixed constants in the crate
/// root.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Observations needed before a conversation produces its result
    pub min_observations: usize,
    /// Guidance replies before the conversation moves on from a trait
    pub max_retries: u32,
    /// Delay before a computed result is shown (milliseconds, 0 = none)
    pub reveal_delay_ms: u64,
    /// Answers needed to finish a questionnaire by skipping the last question
    pub min_answers_to_finish: usize,
    /// Confidence recorded for an explicit multiple-choice selection
    pub selection_confidence: f64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            min_observations: 8,
            max_retries: 2,
            reveal_delay_ms: 1500,
            min_answers_to_finish: 3,
            selection_confidence: 0.9,
        }
    }
}
