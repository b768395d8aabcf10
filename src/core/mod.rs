//! Core modules for Prakruti

pub mod catalog;
pub mod classifier;
pub mod attribution;
pub mod aggregator;
pub mod narrative;
pub mod observation_set;
pub mod conversation;
pub mod questionnaire;
pub mod report;

pub use catalog::{find_trait, option_vocabulary, options_for, trait_catalog};
pub use classifier::{classify, TraitClassifier};
pub use attribution::attribute;
pub use aggregator::{aggregate, confidence_score, label_constitution};
pub use narrative::{explain, tips};
pub use observation_set::ObservationSet;
pub use conversation::{ConversationSession, ConversationTurn, Message, Speaker};
pub use questionnaire::{Question, QuestionOption, QuestionView, Questionnaire, QuestionnaireStep};
pub use report::ResultReport;
