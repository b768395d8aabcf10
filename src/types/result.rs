//! Aggregated constitution result

use colored::Colorize;
use serde::{Serialize, Serializer};
use std::str::FromStr;
use crate::types::{Dosha, DoshaScores, TraitDefinition};

/// Constitution label
///
/// Serializes and displays as `"tridoshic"`, `"vata-pitta"` or `"kapha"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Constitution {
    /// No dosha clearly ahead of the runner-up
    Tridoshic,
    /// Primary and secondary co-dominant
    Dual(Dosha, Dosha),
    /// One dosha clearly dominant
    Single(Dosha),
}

impl std::fmt::Display for Constitution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Constitution::Tridoshic => write!(f, "tridoshic"),
            Constitution::Dual(primary, secondary) => write!(f, "{}-{}", primary, secondary),
            Constitution::Single(dosha) => write!(f, "{}", dosha),
        }
    }
}

impl FromStr for Constitution {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_lowercase();
        if s == "tridoshic" {
            return Ok(Constitution::Tridoshic);
        }
        match s.split_once('-') {
            Some((primary, secondary)) => Ok(Constitution::Dual(primary.parse()?, secondary.parse()?)),
            None => Ok(Constitution::Single(s.parse()?)),
        }
    }
}

impl Serialize for Constitution {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// A trait and how decisively its observation pointed at one dosha
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TraitContribution {
    #[serde(rename = "trait")]
    pub trait_def: TraitDefinition,
    /// Largest single-dosha share of the observation (0.0-1.0)
    pub contribution: f64,
}

/// Immutable snapshot produced by each aggregation
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PrakrutiResult {
    pub primary_dosha: Dosha,
    /// Only set for dual constitutions
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary_dosha: Option<Dosha>,
    pub constitution: Constitution,
    /// Whole percent, 0-100
    pub confidence: u8,
    /// Percentages, 0-100 each
    pub scores: DoshaScores,
    /// Highest contributions first, at most MAX_TOP_TRAITS
    pub top_traits: Vec<TraitContribution>,
    pub explanation: String,
    pub balancing_tips: Vec<String>,
}

impl PrakrutiResult {
    /// Format for terminal display (with colors)
    pub fn to_terminal_string(&self) -> String {
        let label = format!(
            "{} {}",
            self.primary_dosha.emoji(),
            self.constitution.to_string().to_uppercase()
        )
        .color(self.primary_dosha.color())
        .bold();

        let scores: Vec<String> = Dosha::ALL
            .iter()
            .map(|d| {
                format!("{}={:.0}%", d.key(), self.scores.get(*d).round())
                    .color(d.color())
                    .to_string()
            })
            .collect();

        format!(
            "{} | {} | confidence={}%",
            label,
            scores.join(" "),
            self.confidence
        )
    }

    /// Format for parseable output (no colors)
    pub fn to_parseable_string(&self) -> String {
        format!(
            "constitution={} | vata={:.0} | pitta={:.0} | kapha={:.0} | confidence={}",
            self.constitution,
            self.scores.vata.round(),
            self.scores.pitta.round(),
            self.scores.kapha.round(),
            self.confidence
        )
    }
}
