//! Errors raised at session edges
//!
//! The scoring core never fails. These only come from editing an
//! observation set or stepping a session with input it cannot accept.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SessionError {
    #[error("unknown trait '{0}'")]
    UnknownTrait(String),

    #[error("'{value}' is not an option for trait '{trait_id}'")]
    UnknownOption { trait_id: String, value: String },

    #[error("confidence {0} is outside 0.0-1.0")]
    InvalidConfidence(f64),

    #[error("trait '{0}' has not been observed")]
    NotObserved(String),

    #[error("no message with id {0}")]
    UnknownMessage(usize),

    #[error("message is empty")]
    EmptyMessage,

    #[error("need at least {need} answers to finish, have {have}")]
    NotEnoughAnswers { have: usize, need: usize },

    #[error("questionnaire is already finished")]
    QuestionnaireFinished,

    #[error("trait '{trait_id}' from message {message_id} was replaced by a later message")]
    Superseded { message_id: usize, trait_id: String },
}

impl SessionError {
    /// Stable code string (for logging and JSON output)
    pub fn code(&self) -> &'static str {
        match self {
            Self::UnknownTrait(_) => "S001_UNKNOWN_TRAIT",
            Self::UnknownOption { .. } => "S002_UNKNOWN_OPTION",
            Self::InvalidConfidence(_) => "S003_INVALID_CONFIDENCE",
            Self::NotObserved(_) => "S004_NOT_OBSERVED",
            Self::UnknownMessage(_) => "S005_UNKNOWN_MESSAGE",
            Self::EmptyMessage => "S006_EMPTY_MESSAGE",
            Self::NotEnoughAnswers { .. } => "S007_NOT_ENOUGH_ANSWERS",
            Self::QuestionnaireFinished => "S008_QUESTIONNAIRE_FINISHED",
            Self::Superseded { .. } => "S009_SUPERSEDED",
        }
    }
}
