//! Trait catalog entries

use serde::Serialize;
use crate::types::Dosha;

/// Broad grouping of a trait
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TraitCategory {
    Physical,
    Mental,
    Lifestyle,
    Preferences,
}

impl std::fmt::Display for TraitCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            TraitCategory::Physical => "physical",
            TraitCategory::Mental => "mental",
            TraitCategory::Lifestyle => "lifestyle",
            TraitCategory::Preferences => "preferences",
        };
        write!(f, "{}", name)
    }
}

/// A single observable trait
///
/// The affinity scores describe how strongly the trait is associated with
/// each dosha in general. They are part of the catalog but the scoring path
/// does not read them; attribution works from the option vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TraitDefinition {
    pub id: &'static str,
    pub name: &'static str,
    pub category: TraitCategory,
    pub description: &'static str,
    pub vata_score: f64,
    pub pitta_score: f64,
    pub kapha_score: f64,
}

/// Example phrases per dosha for one trait
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TraitOptions {
    pub trait_id: &'static str,
    pub vata: &'static [&'static str],
    pub pitta: &'static [&'static str],
    pub kapha: &'static [&'static str],
}

impl TraitOptions {
    /// Phrases for one dosha, in catalog order
    pub fn for_dosha(&self, dosha: Dosha) -> &'static [&'static str] {
        match dosha {
            Dosha::Vata => self.vata,
            Dosha::Pitta => self.pitta,
            Dosha::Kapha => self.kapha,
        }
    }

    /// Every (dosha, phrase) pair: vata first, then pitta, then kapha
    pub fn iter(&self) -> impl Iterator<Item = (Dosha, &'static str)> + '_ {
        Dosha::ALL
            .into_iter()
            .flat_map(move |dosha| self.for_dosha(dosha).iter().map(move |p| (dosha, *p)))
    }

    /// The first `n` phrases of the flattened list
    pub fn examples(&self, n: usize) -> Vec<&'static str> {
        self.iter().map(|(_, p)| p).take(n).collect()
    }
}
