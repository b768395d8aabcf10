//! Prakruti: rule-based Ayurvedic constitution classifier
//!
//! Free text → TraitClassifier → ObservationSet → aggregate → PrakrutiResult

pub mod core;
pub mod types;

pub use crate::core::{aggregate, attribute, classify, option_vocabulary, trait_catalog};

// =============================================================================
// CONSTITUTION LABELING [C]
// =============================================================================

/// Below this primary-secondary gap the constitution is tridoshic
pub const TRIDOSHIC_MARGIN: f64 = 10.0;

/// Below this gap (and at or above TRIDOSHIC_MARGIN) the constitution is dual
pub const DUAL_MARGIN: f64 = 20.0;

// =============================================================================
// CONFIDENCE [C]
// =============================================================================

/// Score spread (max - min, in points) at which spread confidence saturates
pub const SPREAD_SATURATION: f64 = 50.0;

/// Response count at which response confidence saturates
pub const RESPONSE_SATURATION: f64 = 8.0;

/// Weight of the spread term in the confidence blend
pub const SPREAD_WEIGHT: f64 = 0.7;

/// Weight of the response-count term in the confidence blend
pub const RESPONSE_WEIGHT: f64 = 0.3;

// =============================================================================
// ATTRIBUTION [C]
// =============================================================================

/// Dominant share when the generic keyword heuristic matches
pub const HEURISTIC_DOMINANT: f64 = 0.8;

/// Share given to each of the other two doshas on a heuristic match
pub const HEURISTIC_MINOR: f64 = 0.1;

// =============================================================================
// RESULT SHAPE
// =============================================================================

/// Number of ranked contributing traits kept in a result
pub const MAX_TOP_TRAITS: usize = 5;

// =============================================================================
// VERSION
// =============================================================================

pub const VERSION: &str = "1.0.0";
