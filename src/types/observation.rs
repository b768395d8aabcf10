//! Trait observations

use serde::{Deserialize, Serialize};

/// One piece of evidence about the person: a trait and what was observed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Observation {
    /// Catalog trait id, e.g. "body_build"
    pub trait_id: String,
    /// Vocabulary phrase or classifier token
    pub value: String,
    /// 0.0-1.0
    pub confidence: f64,
}

impl Observation {
    pub fn new(trait_id: impl Into<String>, value: impl Into<String>, confidence: f64) -> Self {
        Self {
            trait_id: trait_id.into(),
            value: value.into(),
            confidence,
        }
    }

    /// Confidence as a whole percentage, for display
    pub fn confidence_percent(&self) -> u32 {
        (self.confidence * 100.0).round() as u32
    }
}
