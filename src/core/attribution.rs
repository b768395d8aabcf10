//! Dosha attribution: which dosha(s) an observed value points at
//!
//! Three tiers, first hit wins:
//! 1. Vocabulary: substring match either way against the trait's options → one-hot
//! 2. Generic keywords on the value alone → 0.8 / 0.1 / 0.1
//! 3. Nothing matched → 0.33 / 0.33 / 0.34

use lazy_static::lazy_static;
use regex::Regex;
use tracing::trace;
use crate::{HEURISTIC_DOMINANT, HEURISTIC_MINOR};
use crate::core::catalog::options_for;
use crate::types::{Dosha, DoshaScores};

lazy_static! {
    // Generic descriptive words, independent of trait. Overlaps the option
    // vocabulary only partially.
    static ref RE_VATA: Regex = Regex::new(
        r"(?i)(thin|dry|light|quick|variable|anxious|restless|creative)"
    ).unwrap();

    static ref RE_PITTA: Regex = Regex::new(
        r"(?i)(medium|sharp|intense|hot|focused|competitive|angry|precise)"
    ).unwrap();

    static ref RE_KAPHA: Regex = Regex::new(
        r"(?i)(heavy|slow|steady|calm|thick|patient|cool|enduring)"
    ).unwrap();
}

/// Split used when nothing matches. Not symmetric; kapha takes the remainder.
pub const EVEN_SPLIT: DoshaScores = DoshaScores { vata: 0.33, pitta: 0.33, kapha: 0.34 };

/// Attribute an observed value of a trait to the doshas
///
/// Unknown trait ids get all-zero scores.
pub fn attribute(trait_id: &str, value: &str) -> DoshaScores {
    let Some(options) = options_for(trait_id) else {
        trace!(trait_id, "attribution: unknown trait");
        return DoshaScores::zero();
    };

    let value_lc = value.to_lowercase();
    for (dosha, phrase) in options.iter() {
        let phrase_lc = phrase.to_lowercase();
        if phrase_lc.contains(&value_lc) || value_lc.contains(&phrase_lc) {
            trace!(trait_id, value, phrase, %dosha, "attribution: vocabulary match");
            return DoshaScores::one_hot(dosha);
        }
    }

    if let Some(dosha) = heuristic_dosha(&value_lc) {
        trace!(trait_id, value, %dosha, "attribution: keyword heuristic");
        return DoshaScores::weighted(dosha, HEURISTIC_DOMINANT, HEURISTIC_MINOR);
    }

    trace!(trait_id, value, "attribution: even split");
    EVEN_SPLIT
}

/// Generic keyword tier, checked vata → pitta → kapha
fn heuristic_dosha(value: &str) -> Option<Dosha> {
    if RE_VATA.is_match(value) {
        Some(Dosha::Vata)
    } else if RE_PITTA.is_match(value) {
        Some(Dosha::Pitta)
    } else if RE_KAPHA.is_match(value) {
        Some(Dosha::Kapha)
    } else {
        None
    }
}

// =============================================================================
// TESTS
// =============================================================================
