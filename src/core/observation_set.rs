//! Caller-held observation set: one observation per trait, last write wins

use indexmap::IndexMap;
use tracing::debug;
use crate::core::aggregator::aggregate;
use crate::core::catalog::{find_trait, options_for};
use crate::types::{Observation, PrakrutiResult, SessionError};

/// Ordered map from trait id to its latest observation
///
/// Replacing an observation keeps the slot of the first one for that
/// trait, so iteration order is first-insertion order.
#[derive(Debug, Clone, Default)]
pub struct ObservationSet {
    entries: IndexMap<String, Observation>,
}

impl ObservationSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the observation for its trait
    ///
    /// Returns the replaced observation, if any.
    pub fn insert(&mut self, observation: Observation) -> Option<Observation> {
        let replaced = self.entries.insert(observation.trait_id.clone(), observation);
        if let Some(ref old) = replaced {
            debug!(trait_id = %old.trait_id, old = %old.value, "replaced observation");
        }
        replaced
    }

    /// Record an explicit multiple-choice selection
    ///
    /// The trait must exist and `value` must be one of its options.
    pub fn select(&mut self, trait_id: &str, value: &str, confidence: f64) -> Result<(), SessionError> {
        if find_trait(trait_id).is_none() {
            return Err(SessionError::UnknownTrait(trait_id.to_string()));
        }
        if !(0.0..=1.0).contains(&confidence) {
            return Err(SessionError::InvalidConfidence(confidence));
        }
        let phrase = options_for(trait_id)
            .and_then(|options| options.iter().find(|(_, p)| p.eq_ignore_ascii_case(value.trim())))
            .map(|(_, p)| p)
            .ok_or_else(|| SessionError::UnknownOption {
                trait_id: trait_id.to_string(),
                value: value.to_string(),
            })?;

        self.insert(Observation::new(trait_id, phrase, confidence));
        Ok(())
    }

    /// Change the value of an existing observation, keeping its confidence
    pub fn edit_value(&mut self, trait_id: &str, value: &str) -> Result<(), SessionError> {
        let observation = self
            .entries
            .get_mut(trait_id)
            .ok_or_else(|| SessionError::NotObserved(trait_id.to_string()))?;
        observation.value = value.to_string();
        Ok(())
    }

    /// Remove the observation for a trait, keeping the order of the rest
    pub fn remove(&mut self, trait_id: &str) -> Result<Observation, SessionError> {
        self.entries
            .shift_remove(trait_id)
            .ok_or_else(|| SessionError::NotObserved(trait_id.to_string()))
    }

    pub fn get(&self, trait_id: &str) -> Option<&Observation> {
        self.entries.get(trait_id)
    }

    pub fn contains(&self, trait_id: &str) -> bool {
        self.entries.contains_key(trait_id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Observation> {
        self.entries.values()
    }

    /// Trait ids present, in insertion order
    pub fn answered(&self) -> Vec<&str> {
        self.entries.keys().map(String::as_str).collect()
    }

    /// Observations in insertion order
    pub fn to_vec(&self) -> Vec<Observation> {
        self.entries.values().cloned().collect()
    }

    /// Aggregate the current set
    pub fn aggregate(&self) -> PrakrutiResult {
        aggregate(&self.to_vec())
    }
}

impl Extend<Observation> for ObservationSet {
    fn extend<I: IntoIterator<Item = Observation>>(&mut self, iter: I) {
        for observation in iter {
            self.insert(observation);
        }
    }
}

impl FromIterator<Observation> for ObservationSet {
    fn from_iter<I: IntoIterator<Item = Observation>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Constitution, Dosha};

    #[test]
    fn test_last_write_wins() {
        let mut set = ObservationSet::new();
        assert!(set.insert(Observation::new("emotions", "Anxious", 0.9)).is_none());
        let replaced = set.insert(Observation::new("emotions", "Calm", 0.7));
        assert_eq!(replaced.unwrap().value, "Anxious");
        assert_eq!(set.len(), 1);
        assert_eq!(set.get("emotions").unwrap().value, "Calm");

        let result = set.aggregate();
        assert_eq!(result.constitution, Constitution::Single(Dosha::Kapha));
    }

    #[test]
    fn test_replacement_keeps_position() {
        let mut set = ObservationSet::new();
        set.insert(Observation::new("body_build", "Thin", 0.8));
        set.insert(Observation::new("emotions", "Anxious", 0.9));
        set.insert(Observation::new("body_build", "Athletic", 0.8));
        assert_eq!(set.answered(), vec!["body_build", "emotions"]);
    }

    #[test]
    fn test_select_validates() {
        let mut set = ObservationSet::new();
        assert_eq!(
            set.select("eye_color", "Blue", 0.9),
            Err(SessionError::UnknownTrait("eye_color".to_string()))
        );
        assert!(matches!(
            set.select("body_build", "Enormous", 0.9),
            Err(SessionError::UnknownOption { .. })
        ));
        assert_eq!(
            set.select("body_build", "Thin", 1.5),
            Err(SessionError::InvalidConfidence(1.5))
        );
        assert!(set.is_empty());
    }

    #[test]
    fn test_select_normalizes_phrase() {
        let mut set = ObservationSet::new();
        set.select("body_build", "  medium BUILD ", 0.9).unwrap();
        assert_eq!(set.get("body_build").unwrap().value, "Medium build");
    }

    #[test]
    fn test_edit_value_keeps_confidence() {
        let mut set = ObservationSet::new();
        set.insert(Observation::new("skin_type", "dry", 0.8));
        set.edit_value("skin_type", "Oily").unwrap();
        let obs = set.get("skin_type").unwrap();
        assert_eq!(obs.value, "Oily");
        assert!((obs.confidence - 0.8).abs() < 1e-10);
        assert!(set.edit_value("hair_type", "Thick").is_err());
    }

    #[test]
    fn test_remove_keeps_order() {
        let mut set: ObservationSet = vec![
            Observation::new("body_build", "Thin", 0.8),
            Observation::new("skin_type", "Dry", 0.8),
            Observation::new("hair_type", "Thick", 0.8),
        ]
        .into_iter()
        .collect();

        let removed = set.remove("body_build").unwrap();
        assert_eq!(removed.value, "Thin");
        assert_eq!(set.answered(), vec!["skin_type", "hair_type"]);
        assert_eq!(set.get("hair_type").unwrap().value, "Thick");
        assert_eq!(set.get("skin_type").unwrap().value, "Dry");
        assert_eq!(
            set.remove("body_build"),
            Err(SessionError::NotObserved("body_build".to_string()))
        );
    }

    #[test]
    fn test_extend_from_classifier_output() {
        let mut set = ObservationSet::new();
        set.extend(crate::core::classify("I am thin and anxious"));
        set.extend(crate::core::classify("actually I feel calm"));
        assert_eq!(set.get("emotions").unwrap().value, "calm");
        assert_eq!(set.get("body_build").unwrap().value, "thin");
    }
}
