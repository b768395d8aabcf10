//! Conversation session: free-text assessment
//!
//! Each message is classified and merged into the observation set. The
//! guide acknowledges what it noted, re-asks with examples when nothing
//! was recognized (up to the retry budget), answers general questions,
//! and asks about the next unanswered trait in catalog order. Once enough
//! traits are observed the turn carries the computed result.

use std::collections::HashMap;
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, info};
use crate::core::catalog::{find_trait, options_for, trait_catalog};
use crate::core::classifier::TraitClassifier;
use crate::core::observation_set::ObservationSet;
use crate::types::{Observation, PrakrutiResult, SessionConfig, SessionError};

pub const GREETING: &str = "Welcome! I'll help you discover your Ayurvedic prakruti (constitution). \
    You can either answer my questions or tell me about yourself in your own words. \
    Let's start - how would you describe your physical build and energy levels?";

const MOVE_ON: &str = "I understand it might be difficult to categorize. Let's move on to another aspect. ";
const COMPLETE: &str = "Perfect! I have gathered comprehensive information about your constitution. \
    Let me calculate your personalized prakruti results...";
const CONTINUE_AFTER_ANSWER: &str = " Now, let's continue with your assessment. ";
const ALL_ASKED: &str = "Thank you for sharing! Let me ask you a few more questions to better \
    understand your constitution.";

const QUESTION_WORDS: [&str; 11] = [
    "what", "how", "why", "when", "where", "which", "who",
    "can you explain", "tell me about", "what is", "what are",
];

/// Who wrote a message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Speaker {
    User,
    Guide,
}

/// One message in the transcript
#[derive(Debug, Clone, Serialize)]
pub struct Message {
    pub id: usize,
    pub speaker: Speaker,
    pub content: String,
    pub timestamp: DateTime<Utc>,
    /// Observations read from this message (user messages only)
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub interpreted: Vec<Observation>,
}

/// Outcome of one user message
#[derive(Debug, Clone)]
pub struct ConversationTurn {
    pub reply: String,
    pub interpreted: Vec<Observation>,
    /// Set once enough traits have been observed
    pub result: Option<PrakrutiResult>,
}

/// A follow-up question aimed at one trait
#[derive(Debug, Clone, PartialEq)]
pub struct NextQuestion {
    pub trait_id: &'static str,
    pub text: String,
}

#[derive(Debug)]
pub struct ConversationSession {
    config: SessionConfig,
    classifier: TraitClassifier,
    observations: ObservationSet,
    messages: Vec<Message>,
    /// Message that supplied each trait's current observation
    sources: HashMap<String, usize>,
    last_asked: Option<&'static str>,
    retry_count: u32,
}

impl ConversationSession {
    /// Start a session; the transcript opens with the greeting
    pub fn new(config: SessionConfig) -> Self {
        let mut session = Self {
            config,
            classifier: TraitClassifier::new(),
            observations: ObservationSet::new(),
            messages: Vec::new(),
            sources: HashMap::new(),
            last_asked: None,
            retry_count: 0,
        };
        session.push(Speaker::Guide, GREETING.to_string(), Vec::new());
        session
    }

    /// Handle one user message
    pub fn send(&mut self, input: &str) -> Result<ConversationTurn, SessionError> {
        let input = input.trim();
        if input.is_empty() {
            return Err(SessionError::EmptyMessage);
        }

        let interpreted = self.classifier.classify(input);
        let message_id = self.push(Speaker::User, input.to_string(), interpreted.clone());
        for observation in &interpreted {
            self.sources.insert(observation.trait_id.clone(), message_id);
        }
        self.observations.extend(interpreted.iter().cloned());

        let mut reply = String::new();

        if !interpreted.is_empty() {
            reply.push_str(&acknowledge(&interpreted));
            self.retry_count = 0;
        } else if let Some(trait_id) = self.last_asked.filter(|_| self.retry_count < self.config.max_retries) {
            self.retry_count += 1;
            debug!(trait_id, retry = self.retry_count, "nothing recognized, guiding");
            let guidance = domain_guidance(trait_id);
            return Ok(self.reply(guidance, interpreted, None));
        } else if self.retry_count >= self.config.max_retries {
            reply.push_str(MOVE_ON);
            self.retry_count = 0;
            self.last_asked = None;
        }

        if self.observations.len() >= self.config.min_observations {
            info!(observations = self.observations.len(), "conversation complete");
            reply.push_str(COMPLETE);
            let result = self.observations.aggregate();
            return Ok(self.reply(reply, interpreted, Some(result)));
        }

        if is_question(input) {
            reply.push_str(answer_question(input));
            reply.push_str(CONTINUE_AFTER_ANSWER);
            if let Some(next) = self.next_question() {
                reply.push_str(&next.text);
                self.last_asked = Some(next.trait_id);
            }
        } else if let Some(next) = self.next_question() {
            reply.push_str(&next.text);
            self.last_asked = Some(next.trait_id);
        } else {
            reply.push_str(ALL_ASKED);
            self.last_asked = None;
        }

        Ok(self.reply(reply, interpreted, None))
    }

    /// Question about the first trait not yet observed, in catalog order
    pub fn next_question(&self) -> Option<NextQuestion> {
        let trait_def = trait_catalog()
            .iter()
            .find(|t| !self.observations.contains(t.id))?;
        let examples = options_for(trait_def.id)
            .map(|o| o.examples(3).join(", "))
            .unwrap_or_default();
        Some(NextQuestion {
            trait_id: trait_def.id,
            text: format!(
                "Tell me about your {}: {}. For example: {}.",
                trait_def.name.to_lowercase(),
                trait_def.description,
                examples
            ),
        })
    }

    /// Correct a value read from an earlier message
    ///
    /// Updates both the message's interpretation and the observation set.
    /// Nothing changes unless the trait is still in the set and its current
    /// observation came from this message.
    pub fn edit_interpreted(&mut self, message_id: usize, trait_id: &str, value: &str) -> Result<(), SessionError> {
        let message_index = self
            .messages
            .iter()
            .position(|m| m.id == message_id)
            .ok_or(SessionError::UnknownMessage(message_id))?;
        let observation_index = self.messages[message_index]
            .interpreted
            .iter()
            .position(|o| o.trait_id == trait_id)
            .ok_or_else(|| SessionError::NotObserved(trait_id.to_string()))?;

        if !self.observations.contains(trait_id) {
            return Err(SessionError::NotObserved(trait_id.to_string()));
        }
        if self.sources.get(trait_id) != Some(&message_id) {
            return Err(SessionError::Superseded {
                message_id,
                trait_id: trait_id.to_string(),
            });
        }

        self.observations.edit_value(trait_id, value)?;
        self.messages[message_index].interpreted[observation_index].value = value.to_string();
        debug!(message_id, trait_id, value, "edited interpretation");
        Ok(())
    }

    /// Current result, whether or not the session is complete
    pub fn result(&self) -> PrakrutiResult {
        self.observations.aggregate()
    }

    pub fn is_complete(&self) -> bool {
        self.observations.len() >= self.config.min_observations
    }

    pub fn observations(&self) -> &ObservationSet {
        &self.observations
    }

    /// Mutable access for the trait editor
    pub fn observations_mut(&mut self) -> &mut ObservationSet {
        &mut self.observations
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Trait the guide asked about most recently
    pub fn last_asked(&self) -> Option<&'static str> {
        self.last_asked
    }

    fn reply(&mut self, text: String, interpreted: Vec<Observation>, result: Option<PrakrutiResult>) -> ConversationTurn {
        self.push(Speaker::Guide, text.clone(), Vec::new());
        ConversationTurn { reply: text, interpreted, result }
    }

    fn push(&mut self, speaker: Speaker, content: String, interpreted: Vec<Observation>) -> usize {
        let id = self.messages.len() + 1;
        self.messages.push(Message {
            id,
            speaker,
            content,
            timestamp: Utc::now(),
            interpreted,
        });
        id
    }
}

impl Default for ConversationSession {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}

/// "I understand - I've noted your body build, emotional patterns. "
fn acknowledge(interpreted: &[Observation]) -> String {
    let names: Vec<String> = interpreted
        .iter()
        .filter_map(|o| find_trait(&o.trait_id))
        .map(|t| t.name.to_lowercase())
        .collect();
    format!("I understand - I've noted your {}. ", names.join(", "))
}

/// Re-ask for a trait, listing the first four options
pub fn domain_guidance(trait_id: &str) -> String {
    let (Some(trait_def), Some(options)) = (find_trait(trait_id), options_for(trait_id)) else {
        return String::new();
    };
    format!(
        "I need more specific information about your {}. Please choose from options like: {}. \
         Try to be more specific about which description fits you best.",
        trait_def.name.to_lowercase(),
        options.examples(4).join(", ")
    )
}

/// Question word anywhere in the text, or a question mark
pub fn is_question(input: &str) -> bool {
    let lower = input.to_lowercase();
    QUESTION_WORDS.iter().any(|w| lower.contains(w)) || input.contains('?')
}

/// Canned answer for a general question, chosen by topic keyword
pub fn answer_question(question: &str) -> &'static str {
    let q = question.to_lowercase();
    let mentions = |words: &[&str]| words.iter().any(|w| q.contains(w));

    if mentions(&["vata", "air", "space"]) {
        "Vata dosha represents the air and space elements. It governs movement, breathing, \
         circulation, and nervous system functions. Vata types are typically creative, energetic, \
         and quick-thinking, but can become anxious or restless when imbalanced."
    } else if mentions(&["pitta", "fire", "metabolism"]) {
        "Pitta dosha represents fire and water elements. It governs digestion, metabolism, and \
         transformation in the body. Pitta types are usually focused, intelligent, and \
         goal-oriented, but can become irritable or competitive when imbalanced."
    } else if mentions(&["kapha", "earth", "water"]) {
        "Kapha dosha represents earth and water elements. It governs structure, immunity, and \
         lubrication in the body. Kapha types are typically calm, stable, and nurturing, but can \
         become sluggish or attached when imbalanced."
    } else if mentions(&["prakruti", "constitution"]) {
        "Prakruti is your natural Ayurvedic constitution - the unique combination of doshas you \
         were born with. It remains constant throughout your life and determines your physical, \
         mental, and emotional characteristics. Understanding your prakruti helps you make \
         lifestyle choices that support your natural balance."
    } else if mentions(&["balance", "imbalance"]) {
        "Ayurvedic balance means living in harmony with your natural constitution. Imbalances \
         occur when lifestyle, diet, stress, or environment disturb your natural dosha \
         proportions. The goal is to understand your prakruti and make choices that maintain \
         your optimal state of health."
    } else if mentions(&["food", "diet", "eat"]) {
        "In Ayurveda, food is medicine. Each dosha benefits from different foods: Vata types need \
         warm, nourishing foods; Pitta types benefit from cooling, moderate foods; Kapha types do \
         well with light, spicy foods. Your ideal diet should support your constitution while \
         balancing any current imbalances."
    } else {
        "That's a great question about Ayurveda! The ancient science of Ayurveda focuses on \
         understanding your unique constitution to achieve optimal health and wellness. Each \
         person has a unique combination of the three doshas - Vata, Pitta, and Kapha - which \
         influence their physical, mental, and emotional characteristics."
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opens_with_greeting() {
        let session = ConversationSession::default();
        assert_eq!(session.messages().len(), 1);
        assert_eq!(session.messages()[0].speaker, Speaker::Guide);
        assert_eq!(session.messages()[0].content, GREETING);
    }

    #[test]
    fn test_empty_message_rejected() {
        let mut session = ConversationSession::default();
        assert_eq!(session.send("   ").unwrap_err(), SessionError::EmptyMessage);
        assert_eq!(session.messages().len(), 1);
    }

    #[test]
    fn test_acknowledges_and_asks_next() {
        let mut session = ConversationSession::default();
        let turn = session.send("I am thin and anxious").unwrap();
        assert!(turn.reply.starts_with(
            "I understand - I've noted your body build, emotional patterns, stress response. "
        ));
        // body_build answered, skin_type is next
        assert!(turn.reply.contains("Tell me about your skin type: Your skin characteristics and texture. For example: Dry, Rough, Thin."));
        assert_eq!(session.last_asked(), Some("skin_type"));
        assert!(turn.result.is_none());
    }

    #[test]
    fn test_guidance_then_move_on() {
        let mut session = ConversationSession::default();
        session.send("I am thin").unwrap();
        assert_eq!(session.last_asked(), Some("skin_type"));

        let first = session.send("no idea").unwrap();
        assert!(first.reply.starts_with("I need more specific information about your skin type."));
        assert!(first.reply.contains("Dry, Rough, Thin, Cool to touch"));

        let second = session.send("no idea").unwrap();
        assert!(second.reply.starts_with("I need more specific information"));

        let third = session.send("no idea").unwrap();
        assert!(third.reply.starts_with(MOVE_ON));
        // skin_type is still the first unanswered trait
        assert!(third.reply.contains("Tell me about your skin type"));
    }

    #[test]
    fn test_question_gets_answer() {
        let mut session = ConversationSession::default();
        let turn = session.send("What is pitta?").unwrap();
        assert!(turn.reply.starts_with("Pitta dosha represents fire and water elements."));
        assert!(turn.reply.contains("Now, let's continue with your assessment. Tell me about your body build"));
    }

    #[test]
    fn test_completes_after_enough_traits() {
        let mut session = ConversationSession::default();
        session.send("I'm thin with dry skin and frizzy hair").unwrap();
        session.send("always tired and anxious").unwrap();
        let turn = session.send("light sleep, quick to learn, spontaneous").unwrap();
        assert!(session.observations().len() >= 8);
        assert!(session.is_complete());
        assert!(turn.reply.ends_with(COMPLETE));
        let result = turn.result.expect("result after completion");
        assert_eq!(result.primary_dosha, crate::types::Dosha::Vata);
    }

    #[test]
    fn test_edit_interpreted() {
        let mut session = ConversationSession::default();
        session.send("I am thin").unwrap();
        let user_message_id = session.messages()[1].id;
        session.edit_interpreted(user_message_id, "body_build", "Large frame").unwrap();
        assert_eq!(session.observations().get("body_build").unwrap().value, "Large frame");
        assert_eq!(session.messages()[1].interpreted[0].value, "Large frame");
        assert!(session.edit_interpreted(99, "body_build", "Thin").is_err());
        assert!(session.edit_interpreted(user_message_id, "memory", "Sharp").is_err());
    }

    #[test]
    fn test_edit_removed_trait_leaves_message_alone() {
        let mut session = ConversationSession::default();
        session.send("I am thin").unwrap();
        session.observations_mut().remove("body_build").unwrap();

        assert_eq!(
            session.edit_interpreted(2, "body_build", "Large frame"),
            Err(SessionError::NotObserved("body_build".to_string()))
        );
        assert_eq!(session.messages()[1].interpreted[0].value, "thin");
        assert!(!session.observations().contains("body_build"));
    }

    #[test]
    fn test_edit_superseded_message_rejected() {
        let mut session = ConversationSession::default();
        session.send("I am thin").unwrap();
        session.send("actually I am heavy").unwrap();
        assert_eq!(session.messages()[3].id, 4);

        assert_eq!(
            session.edit_interpreted(2, "body_build", "Medium build"),
            Err(SessionError::Superseded { message_id: 2, trait_id: "body_build".to_string() })
        );
        assert_eq!(session.observations().get("body_build").unwrap().value, "large");
        assert_eq!(session.messages()[1].interpreted[0].value, "thin");

        session.edit_interpreted(4, "body_build", "Medium build").unwrap();
        assert_eq!(session.observations().get("body_build").unwrap().value, "Medium build");
        assert_eq!(session.messages()[3].interpreted[0].value, "Medium build");
    }

    #[test]
    fn test_is_question() {
        assert!(is_question("how does this work"));
        assert!(is_question("really?"));
        assert!(!is_question("I sleep deeply"));
    }

    #[test]
    fn test_answer_topics() {
        assert!(answer_question("tell me about kapha").starts_with("Kapha dosha"));
        assert!(answer_question("what should I eat").starts_with("In Ayurveda, food is medicine."));
        assert!(answer_question("why?").starts_with("That's a great question"));
    }

    #[test]
    fn test_domain_guidance_unknown_trait() {
        assert!(domain_guidance("eye_color").is_empty());
    }
}
