//! Integration tests for attribution and aggregation
//!
//! Tests the full path: observations → attribute → aggregate → narrative

use pretty_assertions::assert_eq;
use prakruti::core::attribution::EVEN_SPLIT;
use prakruti::core::narrative::{dosha_tips, BALANCE_BOTH_TIP};
use prakruti::core::ObservationSet;
use prakruti::types::{Constitution, Dosha, DoshaScores, Observation};
use prakruti::{aggregate, attribute, option_vocabulary, trait_catalog};
use serde_json::json;

fn kapha_example() -> Vec<Observation> {
    vec![
        Observation::new("emotions", "calm", 0.9),
        Observation::new("sleep_pattern", "deep sleep", 0.8),
        Observation::new("memory", "slow to learn", 0.8),
    ]
}

#[test]
fn test_end_to_end_kapha() {
    let result = aggregate(&kapha_example());
    assert_eq!(result.scores, DoshaScores::new(0.0, 0.0, 100.0));
    assert_eq!(result.constitution, Constitution::Single(Dosha::Kapha));
    assert_eq!(result.confidence, 81);
    assert_eq!(result.secondary_dosha, None);
    assert_eq!(result.balancing_tips, dosha_tips(Dosha::Kapha).to_vec());
}

#[test]
fn test_result_json_shape() {
    let result = aggregate(&kapha_example());
    let value = serde_json::to_value(&result).unwrap();

    assert_eq!(value["primaryDosha"], json!("kapha"));
    assert_eq!(value["constitution"], json!("kapha"));
    assert_eq!(value["confidence"], json!(81));
    assert_eq!(value["scores"], json!({"vata": 0.0, "pitta": 0.0, "kapha": 100.0}));
    assert_eq!(value["topTraits"][0]["trait"]["id"], json!("emotions"));
    assert_eq!(value["topTraits"][0]["contribution"], json!(1.0));
    assert!(value.get("secondaryDosha").is_none());
    assert_eq!(value["balancingTips"].as_array().map(Vec::len), Some(5));
}

#[test]
fn test_dual_result() {
    let responses = vec![
        Observation::new("body_build", "Athletic", 0.9),
        Observation::new("memory", "Sharp", 0.9),
        Observation::new("decision_making", "Decisive", 0.9),
        Observation::new("emotions", "Anxious", 0.9),
        Observation::new("sleep_pattern", "Light sleeper", 0.9),
        Observation::new("hair_type", "Thick", 0.9),
    ];
    let result = aggregate(&responses);
    assert_eq!(result.constitution, Constitution::Dual(Dosha::Pitta, Dosha::Vata));
    assert_eq!(result.primary_dosha, Dosha::Pitta);
    assert_eq!(result.secondary_dosha, Some(Dosha::Vata));
    assert!(result.explanation.starts_with("You have a dual constitution with Pitta"));

    let tips = &result.balancing_tips;
    assert_eq!(tips[0], dosha_tips(Dosha::Pitta)[0]);
    assert_eq!(tips[1], dosha_tips(Dosha::Vata)[0]);
    assert_eq!(tips[2], dosha_tips(Dosha::Pitta)[1]);
    assert_eq!(tips[3], dosha_tips(Dosha::Vata)[1]);
    assert_eq!(tips[4], BALANCE_BOTH_TIP);

    let value = serde_json::to_value(&result).unwrap();
    assert_eq!(value["constitution"], json!("pitta-vata"));
    assert_eq!(value["secondaryDosha"], json!("vata"));
}

#[test]
fn test_tridoshic_result() {
    let responses = vec![
        Observation::new("body_build", "Thin", 0.9),
        Observation::new("skin_type", "Oily", 0.9),
        Observation::new("hair_type", "Thick", 0.9),
    ];
    let result = aggregate(&responses);
    assert_eq!(result.constitution, Constitution::Tridoshic);
    assert_eq!(result.secondary_dosha, None);
    assert!(result.explanation.contains("(Vata: 33%, Pitta: 33%, Kapha: 33%)"));
    assert_eq!(result.confidence, 11);
}

#[test]
fn test_duplicates_last_write_wins() {
    let mut set = ObservationSet::new();
    set.insert(Observation::new("emotions", "Anxious", 0.9));
    set.insert(Observation::new("memory", "Sharp", 0.9));
    set.insert(Observation::new("emotions", "Calm", 0.9));

    assert_eq!(set.len(), 2);
    let result = set.aggregate();
    assert_eq!(result.scores, DoshaScores::new(0.0, 50.0, 50.0));

    // The raw list double counts
    let raw = aggregate(&[
        Observation::new("emotions", "Anxious", 0.9),
        Observation::new("memory", "Sharp", 0.9),
        Observation::new("emotions", "Calm", 0.9),
    ]);
    assert!(raw.scores.vata > 0.0);
}

#[test]
fn test_attribution_tiers() {
    // vocabulary, either direction
    assert_eq!(attribute("sleep_pattern", "Light sleeper"), DoshaScores::one_hot(Dosha::Vata));
    assert_eq!(attribute("sleep_pattern", "light"), DoshaScores::one_hot(Dosha::Vata));
    // keyword heuristic
    assert_eq!(
        attribute("weather_preference", "intense"),
        DoshaScores::new(0.1, 0.8, 0.1)
    );
    // nothing matched
    assert_eq!(attribute("body_build", "purple"), EVEN_SPLIT);
    // unknown trait
    assert_eq!(attribute("eye_color", "blue"), DoshaScores::zero());
}

/// Every catalog phrase attributes to exactly one dosha (not always its own:
/// "Prefers warm/dry" contains the vata phrase "Prefers warm")
#[test]
fn test_catalog_phrases_are_one_hot() {
    for options in option_vocabulary() {
        for (_, phrase) in options.iter() {
            let scores = attribute(options.trait_id, phrase);
            let ones = Dosha::ALL.iter().filter(|d| scores.get(**d) == 1.0).count();
            let zeros = Dosha::ALL.iter().filter(|d| scores.get(**d) == 0.0).count();
            assert_eq!((ones, zeros), (1, 2), "{} / {}", options.trait_id, phrase);
        }
    }
    assert_eq!(
        attribute("weather_preference", "Prefers warm/dry"),
        DoshaScores::one_hot(Dosha::Vata)
    );
}

#[test]
fn test_catalog_shape() {
    let ids: Vec<&str> = trait_catalog().iter().map(|t| t.id).collect();
    assert_eq!(
        ids,
        vec![
            "body_build",
            "skin_type",
            "hair_type",
            "memory",
            "decision_making",
            "emotions",
            "energy_level",
            "sleep_pattern",
            "weather_preference",
            "diet_preference",
            "stress_response",
        ]
    );
    assert_eq!(option_vocabulary().len(), trait_catalog().len());
}
