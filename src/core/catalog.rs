//! Trait catalog: the fixed trait list and per-dosha option vocabulary
//!
//! Pure data. Order matters: the questionnaire and conversation walk traits
//! in catalog order, and attribution scans options vata → pitta → kapha in
//! list order.

use crate::types::{TraitCategory, TraitDefinition, TraitOptions};

/// All traits, in presentation order
pub static TRAITS: [TraitDefinition; 11] = [
    // Physical
    TraitDefinition {
        id: "body_build",
        name: "Body Build",
        category: TraitCategory::Physical,
        description: "Your natural body frame and build",
        vata_score: 0.9,
        pitta_score: 0.5,
        kapha_score: 0.1,
    },
    TraitDefinition {
        id: "skin_type",
        name: "Skin Type",
        category: TraitCategory::Physical,
        description: "Your skin characteristics and texture",
        vata_score: 0.8,
        pitta_score: 0.7,
        kapha_score: 0.6,
    },
    TraitDefinition {
        id: "hair_type",
        name: "Hair Type",
        category: TraitCategory::Physical,
        description: "Your hair texture and characteristics",
        vata_score: 0.8,
        pitta_score: 0.6,
        kapha_score: 0.5,
    },
    // Mental
    TraitDefinition {
        id: "memory",
        name: "Memory",
        category: TraitCategory::Mental,
        description: "How you process and retain information",
        vata_score: 0.8,
        pitta_score: 0.7,
        kapha_score: 0.9,
    },
    TraitDefinition {
        id: "decision_making",
        name: "Decision Making",
        category: TraitCategory::Mental,
        description: "Your approach to making decisions",
        vata_score: 0.9,
        pitta_score: 0.8,
        kapha_score: 0.3,
    },
    TraitDefinition {
        id: "emotions",
        name: "Emotional Patterns",
        category: TraitCategory::Mental,
        description: "Your typical emotional responses",
        vata_score: 0.9,
        pitta_score: 0.7,
        kapha_score: 0.4,
    },
    // Lifestyle
    TraitDefinition {
        id: "energy_level",
        name: "Energy Level",
        category: TraitCategory::Lifestyle,
        description: "Your typical energy patterns throughout the day",
        vata_score: 0.8,
        pitta_score: 0.9,
        kapha_score: 0.5,
    },
    TraitDefinition {
        id: "sleep_pattern",
        name: "Sleep Pattern",
        category: TraitCategory::Lifestyle,
        description: "Your natural sleep habits and quality",
        vata_score: 0.9,
        pitta_score: 0.6,
        kapha_score: 0.3,
    },
    // Preferences
    TraitDefinition {
        id: "weather_preference",
        name: "Weather Preference",
        category: TraitCategory::Preferences,
        description: "What weather conditions you prefer",
        vata_score: 0.2,
        pitta_score: 0.1,
        kapha_score: 0.8,
    },
    TraitDefinition {
        id: "diet_preference",
        name: "Diet Preference",
        category: TraitCategory::Preferences,
        description: "Your natural food preferences and eating habits",
        vata_score: 0.7,
        pitta_score: 0.8,
        kapha_score: 0.4,
    },
    TraitDefinition {
        id: "stress_response",
        name: "Stress Response",
        category: TraitCategory::Mental,
        description: "How you typically respond to stress",
        vata_score: 0.9,
        pitta_score: 0.8,
        kapha_score: 0.3,
    },
];

/// Option vocabulary, one entry per trait
pub static OPTIONS: [TraitOptions; 11] = [
    TraitOptions {
        trait_id: "body_build",
        vata: &["Thin", "Lean", "Small-boned", "Delicate frame"],
        pitta: &["Medium build", "Athletic", "Well-proportioned", "Moderate frame"],
        kapha: &["Large frame", "Heavy-set", "Big-boned", "Solid build"],
    },
    TraitOptions {
        trait_id: "skin_type",
        vata: &["Dry", "Rough", "Thin", "Cool to touch", "Prone to dryness"],
        pitta: &["Warm", "Soft", "Oily", "Prone to acne", "Sensitive", "Freckles"],
        kapha: &["Smooth", "Moist", "Thick", "Cool", "Pale", "Large pores"],
    },
    TraitOptions {
        trait_id: "hair_type",
        vata: &["Dry", "Frizzy", "Coarse", "Brittle", "Dark"],
        pitta: &["Fine", "Soft", "Oily", "Early graying", "Straight", "Light colored"],
        kapha: &["Thick", "Lustrous", "Wavy", "Oily", "Dark", "Strong"],
    },
    TraitOptions {
        trait_id: "memory",
        vata: &["Quick to learn", "Quick to forget", "Short-term focused", "Creative"],
        pitta: &["Sharp", "Precise", "Good comprehension", "Analytical"],
        kapha: &["Slow to learn", "Good retention", "Long-term memory", "Methodical"],
    },
    TraitOptions {
        trait_id: "decision_making",
        vata: &["Quick decisions", "Often changes mind", "Spontaneous", "Intuitive"],
        pitta: &["Decisive", "Confident", "Goal-oriented", "Logical"],
        kapha: &["Takes time", "Deliberate", "Careful consideration", "Practical"],
    },
    TraitOptions {
        trait_id: "emotions",
        vata: &["Anxious", "Worried", "Enthusiastic", "Changeable moods"],
        pitta: &["Irritable when stressed", "Intense", "Passionate", "Competitive"],
        kapha: &["Calm", "Steady", "Patient", "Rarely angry"],
    },
    TraitOptions {
        trait_id: "energy_level",
        vata: &["Variable energy", "Bursts of activity", "Gets tired easily"],
        pitta: &["High energy", "Intense focus", "Sustained activity"],
        kapha: &["Steady energy", "Slow start", "Good endurance"],
    },
    TraitOptions {
        trait_id: "sleep_pattern",
        vata: &["Light sleeper", "Restless", "Difficulty falling asleep", "Vivid dreams"],
        pitta: &["Moderate sleep", "Hot sleeper", "Intense dreams", "Early riser"],
        kapha: &["Deep sleeper", "Loves sleep", "Slow to wake", "Few dreams"],
    },
    TraitOptions {
        trait_id: "weather_preference",
        vata: &["Prefers warm", "Dislikes cold/wind", "Likes humidity"],
        pitta: &["Prefers cool", "Dislikes heat", "Likes breeze"],
        kapha: &["Prefers warm/dry", "Dislikes cold/damp", "Likes sunshine"],
    },
    TraitOptions {
        trait_id: "diet_preference",
        vata: &["Irregular eating", "Prefers warm foods", "Sweet/sour/salty tastes"],
        pitta: &["Regular meals", "Likes cool foods", "Sweet/bitter/astringent tastes"],
        kapha: &["Can skip meals", "Likes light foods", "Pungent/bitter/astringent tastes"],
    },
    TraitOptions {
        trait_id: "stress_response",
        vata: &["Anxious", "Worried", "Overwhelmed", "Restless"],
        pitta: &["Angry", "Frustrated", "Impatient", "Critical"],
        kapha: &["Withdrawn", "Sluggish", "Unmotivated", "Sad"],
    },
];

/// The full trait list
pub fn trait_catalog() -> &'static [TraitDefinition] {
    &TRAITS
}

/// The full option vocabulary
pub fn option_vocabulary() -> &'static [TraitOptions] {
    &OPTIONS
}

/// Look up a trait by id
pub fn find_trait(trait_id: &str) -> Option<&'static TraitDefinition> {
    TRAITS.iter().find(|t| t.id == trait_id)
}

/// Look up a trait's option vocabulary by id
pub fn options_for(trait_id: &str) -> Option<&'static TraitOptions> {
    OPTIONS.iter().find(|o| o.trait_id == trait_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Dosha;
    use std::collections::HashSet;

    #[test]
    fn test_trait_ids_unique() {
        let ids: HashSet<&str> = TRAITS.iter().map(|t| t.id).collect();
        assert_eq!(ids.len(), TRAITS.len());
    }

    #[test]
    fn test_every_trait_has_options() {
        for t in trait_catalog() {
            let options = options_for(t.id).unwrap_or_else(|| panic!("no options for {}", t.id));
            for dosha in Dosha::ALL {
                assert!(!options.for_dosha(dosha).is_empty(), "{} has no {} options", t.id, dosha);
            }
        }
    }

    #[test]
    fn test_affinity_scores_in_range() {
        for t in trait_catalog() {
            for score in [t.vata_score, t.pitta_score, t.kapha_score] {
                assert!((0.0..=1.0).contains(&score), "{} affinity out of range", t.id);
            }
        }
    }

    #[test]
    fn test_option_iteration_order() {
        let options = options_for("energy_level").unwrap();
        let flat: Vec<(Dosha, &str)> = options.iter().collect();
        assert_eq!(flat[0], (Dosha::Vata, "Variable energy"));
        assert_eq!(flat[3], (Dosha::Pitta, "High energy"));
        assert_eq!(flat[8], (Dosha::Kapha, "Good endurance"));
        assert_eq!(options.examples(3), vec!["Variable energy", "Bursts of activity", "Gets tired easily"]);
    }

    #[test]
    fn test_unknown_trait_lookup() {
        assert!(find_trait("eye_color").is_none());
        assert!(options_for("eye_color").is_none());
    }
}
