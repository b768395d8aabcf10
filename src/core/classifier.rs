//! Trait classifier: maps free text to trait observations
//!
//! A fixed decision table. Traits are tested in table order; within a trait
//! the first matching alternative wins and yields exactly one observation.
//! Triggers are case-insensitive substrings (no word boundaries), so
//! "smaller" triggers "small" and "darkness" triggers "dark".

use lazy_static::lazy_static;
use regex::Regex;
use tracing::{debug, trace};
use crate::types::Observation;

/// One alternative for a trait: trigger pattern and the value it yields
#[derive(Debug)]
pub struct Alternative {
    pub value: &'static str,
    pub confidence: f64,
    pub pattern: Regex,
}

/// Ordered alternatives for one trait
#[derive(Debug)]
pub struct TraitRules {
    pub trait_id: &'static str,
    pub alternatives: Vec<Alternative>,
}

/// (trait_id, value, confidence, triggers)
type RuleRow = (&'static str, &'static str, f64, &'static str);

// Order is significant at both levels: trait order fixes output order,
// alternative order fixes precedence within a trait.
const RULE_TABLE: &[RuleRow] = &[
    // =========================================================================
    // Physical
    // =========================================================================
    ("body_build", "thin", 0.8, "thin|lean|skinny|small|delicate|petite"),
    ("body_build", "medium", 0.8, "medium|athletic|average|moderate"),
    ("body_build", "large", 0.8, "large|heavy|big|solid|stocky"),
    ("skin_type", "dry", 0.8, "dry|rough|flaky"),
    ("skin_type", "oily", 0.8, "oily|acne|sensitive|warm"),
    ("skin_type", "smooth", 0.8, "smooth|moist|cool|pale"),
    ("hair_type", "dry", 0.8, "dry|frizzy|coarse|brittle|dark"),
    ("hair_type", "fine", 0.8, "fine|soft|oily|straight|light|early gray"),
    ("hair_type", "thick", 0.8, "thick|lustrous|wavy|strong"),
    // =========================================================================
    // Energy, emotions, sleep
    // =========================================================================
    ("energy_level", "variable", 0.7, "tired|exhausted|low energy|variable energy"),
    ("energy_level", "intense", 0.7, "high energy|intense|focused|driven"),
    ("energy_level", "steady", 0.7, "steady|consistent|slow start|endurance"),
    ("emotions", "anxious", 0.9, "anxious|worried|nervous|restless"),
    ("emotions", "irritable", 0.9, "angry|frustrated|irritable|impatient"),
    ("emotions", "calm", 0.9, "calm|peaceful|steady|patient"),
    ("sleep_pattern", "light", 0.8, "light sleep|restless|insomnia|trouble sleeping"),
    ("sleep_pattern", "moderate", 0.8, "hot sleeper|intense dreams|early riser"),
    ("sleep_pattern", "deep", 0.8, "deep sleep|love sleep|hard to wake"),
    // =========================================================================
    // Mind
    // =========================================================================
    ("memory", "quick", 0.8, "quick to learn|quick to forget|creative|short.term"),
    ("memory", "sharp", 0.8, "sharp|precise|analytical|good comprehension"),
    ("memory", "slow", 0.8, "slow to learn|good retention|methodical|long.term"),
    ("decision_making", "quick", 0.8, "quick decision|spontaneous|intuitive|changes mind"),
    ("decision_making", "decisive", 0.8, "decisive|confident|logical|goal.oriented"),
    ("decision_making", "deliberate", 0.8, "takes time|deliberate|careful|practical"),
    // =========================================================================
    // Preferences
    // =========================================================================
    ("weather_preference", "warm", 0.8, "prefer warm|dislike cold|like humidity|cold weather"),
    ("weather_preference", "cool", 0.8, "prefer cool|dislike heat|like breeze|hot weather"),
    ("weather_preference", "dry", 0.8, "warm dry|dislike damp|like sunshine|sunny"),
    ("diet_preference", "irregular", 0.8, "irregular eating|warm food|sweet|sour|salty"),
    ("diet_preference", "regular", 0.8, "regular meals|cool food|cooling|bitter|astringent"),
    ("diet_preference", "light", 0.8, "skip meals|light food|spicy|pungent"),
    // =========================================================================
    // Stress
    // =========================================================================
    ("stress_response", "anxious", 0.9, "anxious|worried|overwhelmed|restless"),
    ("stress_response", "angry", 0.9, "angry|frustrated|impatient|critical"),
    ("stress_response", "withdrawn", 0.9, "withdrawn|sluggish|unmotivated|sad"),
];

lazy_static! {
    static ref RULES: Vec<TraitRules> = build_rules(RULE_TABLE);
}

/// Group rows by trait, keeping first-seen trait order and row order
fn build_rules(table: &[RuleRow]) -> Vec<TraitRules> {
    let mut rules: Vec<TraitRules> = Vec::new();
    for &(trait_id, value, confidence, triggers) in table {
        // Table patterns are literals; a failure here is a typo in RULE_TABLE
        let pattern = Regex::new(&format!("(?i)({})", triggers)).unwrap();
        let alternative = Alternative { value, confidence, pattern };
        match rules.iter_mut().find(|r| r.trait_id == trait_id) {
            Some(group) => group.alternatives.push(alternative),
            None => rules.push(TraitRules { trait_id, alternatives: vec![alternative] }),
        }
    }
    rules
}

/// Free-text trait classifier
#[derive(Debug, Default, Clone, Copy)]
pub struct TraitClassifier;

impl TraitClassifier {
    /// Create new classifier
    pub fn new() -> Self {
        Self
    }

    /// Classify text into at most one observation per trait
    pub fn classify(&self, text: &str) -> Vec<Observation> {
        let mut observations = Vec::new();

        for rules in RULES.iter() {
            let hit = rules.alternatives.iter().find(|alt| alt.pattern.is_match(text));
            if let Some(alt) = hit {
                trace!(trait_id = rules.trait_id, value = alt.value, "classifier rule matched");
                observations.push(Observation::new(rules.trait_id, alt.value, alt.confidence));
            }
        }

        debug!(matched = observations.len(), "classified input");
        observations
    }

    /// Trait ids that the text touches, in table order
    pub fn matched_traits(&self, text: &str) -> Vec<&'static str> {
        RULES
            .iter()
            .filter(|r| r.alternatives.iter().any(|alt| alt.pattern.is_match(text)))
            .map(|r| r.trait_id)
            .collect()
    }

    /// The compiled rule table, in evaluation order
    pub fn rules(&self) -> &'static [TraitRules] {
        &RULES
    }
}

/// Classify text with the fixed rule table
pub fn classify(text: &str) -> Vec<Observation> {
    TraitClassifier::new().classify(text)
}

// =============================================================================
// TESTS
// =============================================================================
