//! Aggregator: folds observations into a PrakrutiResult
//!
//! Scores are per-dosha means of the attribution vectors, as percentages.
//! Labeling:
//! - gap(primary, secondary) < 10  → tridoshic
//! - 10 ≤ gap < 20                 → "primary-secondary"
//! - gap ≥ 20                      → "primary"

use tracing::{debug, trace};
use crate::{
    TRIDOSHIC_MARGIN, DUAL_MARGIN, SPREAD_SATURATION, RESPONSE_SATURATION,
    SPREAD_WEIGHT, RESPONSE_WEIGHT, MAX_TOP_TRAITS,
};
use crate::core::attribution::attribute;
use crate::core::catalog::find_trait;
use crate::core::narrative::{explain, tips};
use crate::types::{Constitution, Dosha, DoshaScores, Observation, PrakrutiResult, TraitContribution};

/// Aggregate observations into a result
///
/// Observations for unknown traits are skipped when scoring but still count
/// toward the confidence response count. Empty input yields zero scores, a
/// tridoshic label and 0% confidence. Duplicates are not merged
/// here; callers keep one observation per trait (see ObservationSet).
pub fn aggregate(responses: &[Observation]) -> PrakrutiResult {
    let mut totals = DoshaScores::zero();
    let mut counted = 0usize;
    let mut contributions: Vec<TraitContribution> = Vec::with_capacity(responses.len());

    for response in responses {
        let Some(trait_def) = find_trait(&response.trait_id) else {
            trace!(trait_id = %response.trait_id, "skipping unknown trait");
            continue;
        };

        let attributed = attribute(&response.trait_id, &response.value);
        totals.add(&attributed);
        counted += 1;

        contributions.push(TraitContribution {
            trait_def: *trait_def,
            contribution: attributed.max(),
        });
    }

    let scores = if counted > 0 {
        let n = counted as f64;
        DoshaScores::new(
            totals.vata / n * 100.0,
            totals.pitta / n * 100.0,
            totals.kapha / n * 100.0,
        )
    } else {
        DoshaScores::zero()
    };

    let ranked = scores.ranked();
    let primary = ranked[0].0;
    let constitution = label_constitution(&ranked);
    let secondary = match constitution {
        Constitution::Dual(_, secondary) => Some(secondary),
        _ => None,
    };
    let confidence = confidence_score(&scores, responses.len());

    // sort_by is stable: equal contributions keep observation order
    contributions.sort_by(|a, b| {
        b.contribution
            .partial_cmp(&a.contribution)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    contributions.truncate(MAX_TOP_TRAITS);

    debug!(
        responses = counted,
        vata = scores.vata,
        pitta = scores.pitta,
        kapha = scores.kapha,
        %constitution,
        confidence,
        "aggregated prakruti"
    );

    PrakrutiResult {
        primary_dosha: primary,
        secondary_dosha: secondary,
        constitution,
        confidence,
        scores,
        top_traits: contributions,
        explanation: explain(&constitution, &scores),
        balancing_tips: tips(primary, secondary).into_iter().map(String::from).collect(),
    }
}

/// Label from doshas ranked by score (descending)
///
/// Only the top two scores matter; the third is ignored even for tridoshic.
pub fn label_constitution(ranked: &[(Dosha, f64); 3]) -> Constitution {
    let (primary, primary_score) = ranked[0];
    let (secondary, secondary_score) = ranked[1];
    let gap = primary_score - secondary_score;

    if gap < TRIDOSHIC_MARGIN {
        Constitution::Tridoshic
    } else if gap < DUAL_MARGIN {
        Constitution::Dual(primary, secondary)
    } else {
        Constitution::Single(primary)
    }
}

/// Confidence percent from score spread and response count
///
/// round(100 × (0.7 × min(spread/50, 1) + 0.3 × min(count/8, 1)))
pub fn confidence_score(scores: &DoshaScores, response_count: usize) -> u8 {
    let spread_confidence = (scores.spread() / SPREAD_SATURATION).min(1.0);
    let response_confidence = (response_count as f64 / RESPONSE_SATURATION).min(1.0);
    let blended = spread_confidence * SPREAD_WEIGHT + response_confidence * RESPONSE_WEIGHT;
    (blended * 100.0).round().clamp(0.0, 100.0) as u8
}

// =============================================================================
// TESTS
// =============================================================================
