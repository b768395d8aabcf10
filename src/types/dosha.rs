//! Dosha definitions and per-dosha scores

use colored::Color;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// The three constitutional archetypes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dosha {
    /// Air and space
    Vata,
    /// Fire and water
    Pitta,
    /// Earth and water
    Kapha,
}

impl Dosha {
    /// All doshas in canonical order (also the tie-break order)
    pub const ALL: [Dosha; 3] = [Dosha::Vata, Dosha::Pitta, Dosha::Kapha];

    /// Lowercase key, as used in constitution labels
    pub fn key(&self) -> &'static str {
        match self {
            Dosha::Vata => "vata",
            Dosha::Pitta => "pitta",
            Dosha::Kapha => "kapha",
        }
    }

    /// Capitalized display name
    pub fn name(&self) -> &'static str {
        match self {
            Dosha::Vata => "Vata",
            Dosha::Pitta => "Pitta",
            Dosha::Kapha => "Kapha",
        }
    }

    /// Governing elements, lowercase ("air and space")
    pub fn elements(&self) -> &'static str {
        match self {
            Dosha::Vata => "air and space",
            Dosha::Pitta => "fire and water",
            Dosha::Kapha => "earth and water",
        }
    }

    /// Terminal color
    pub fn color(&self) -> Color {
        match self {
            Dosha::Vata => Color::Cyan,
            Dosha::Pitta => Color::Red,
            Dosha::Kapha => Color::Green,
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Dosha::Vata => "🌬️",
            Dosha::Pitta => "🔥",
            Dosha::Kapha => "🌍",
        }
    }
}

impl std::fmt::Display for Dosha {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}

impl FromStr for Dosha {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "vata" => Ok(Dosha::Vata),
            "pitta" => Ok(Dosha::Pitta),
            "kapha" => Ok(Dosha::Kapha),
            other => Err(format!("unknown dosha '{}'", other)),
        }
    }
}

/// Per-dosha scores
///
/// Attribution produces values in [0, 1]; aggregated results hold
/// percentages in [0, 100]. The three values are independent means and
/// need not sum to a fixed total.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct DoshaScores {
    pub vata: f64,
    pub pitta: f64,
    pub kapha: f64,
}

impl DoshaScores {
    pub fn new(vata: f64, pitta: f64, kapha: f64) -> Self {
        Self { vata, pitta, kapha }
    }

    /// All-zero scores
    pub fn zero() -> Self {
        Self::default()
    }

    /// 1.0 for `dosha`, 0.0 for the others
    pub fn one_hot(dosha: Dosha) -> Self {
        Self::weighted(dosha, 1.0, 0.0)
    }

    /// `dominant` for `dosha`, `minor` for each of the others
    pub fn weighted(dosha: Dosha, dominant: f64, minor: f64) -> Self {
        let mut scores = Self::new(minor, minor, minor);
        *scores.get_mut(dosha) = dominant;
        scores
    }

    pub fn get(&self, dosha: Dosha) -> f64 {
        match dosha {
            Dosha::Vata => self.vata,
            Dosha::Pitta => self.pitta,
            Dosha::Kapha => self.kapha,
        }
    }

    pub fn get_mut(&mut self, dosha: Dosha) -> &mut f64 {
        match dosha {
            Dosha::Vata => &mut self.vata,
            Dosha::Pitta => &mut self.pitta,
            Dosha::Kapha => &mut self.kapha,
        }
    }

    /// Component-wise accumulate
    pub fn add(&mut self, other: &DoshaScores) {
        self.vata += other.vata;
        self.pitta += other.pitta;
        self.kapha += other.kapha;
    }

    /// Highest single component
    pub fn max(&self) -> f64 {
        self.vata.max(self.pitta).max(self.kapha)
    }

    /// Lowest single component
    pub fn min(&self) -> f64 {
        self.vata.min(self.pitta).min(self.kapha)
    }

    /// max - min
    pub fn spread(&self) -> f64 {
        self.max() - self.min()
    }

    /// Doshas sorted by score, descending. Ties keep canonical order.
    pub fn ranked(&self) -> [(Dosha, f64); 3] {
        let mut ranked = Dosha::ALL.map(|d| (d, self.get(d)));
        // sort_by is stable
        ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        ranked
    }
}
