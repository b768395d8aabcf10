//! Questionnaire session: one multiple-choice question per catalog trait

use serde::Serialize;
use tracing::{debug, info};
use crate::core::catalog::{options_for, trait_catalog};
use crate::core::observation_set::ObservationSet;
use crate::types::{Dosha, PrakrutiResult, SessionConfig, SessionError, TraitDefinition};

/// A selectable answer, tagged with the dosha it indicates
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct QuestionOption {
    pub dosha: Dosha,
    pub value: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct Question {
    #[serde(rename = "trait")]
    pub trait_def: &'static TraitDefinition,
    /// Every vocabulary option: vata, then pitta, then kapha
    pub options: Vec<QuestionOption>,
}

impl Question {
    fn for_trait(trait_def: &'static TraitDefinition) -> Self {
        let options = options_for(trait_def.id)
            .map(|o| o.iter().map(|(dosha, value)| QuestionOption { dosha, value }).collect())
            .unwrap_or_default();
        Self { trait_def, options }
    }
}

/// The question now showing, with its position and any earlier answer
#[derive(Debug, Clone, Serialize)]
pub struct QuestionView<'a> {
    /// One-based
    pub number: usize,
    pub total: usize,
    pub progress: u8,
    pub selected: Option<&'a str>,
    pub question: &'a Question,
}

/// Where the questionnaire stands after a move
#[derive(Debug, Clone)]
pub enum QuestionnaireStep {
    /// Index of the question now showing
    Next(usize),
    Finished(PrakrutiResult),
}

#[derive(Debug)]
pub struct Questionnaire {
    config: SessionConfig,
    questions: Vec<Question>,
    current: usize,
    answers: ObservationSet,
    finished: bool,
}

impl Questionnaire {
    pub fn new(config: SessionConfig) -> Self {
        let questions = trait_catalog().iter().map(Question::for_trait).collect();
        Self {
            config,
            questions,
            current: 0,
            answers: ObservationSet::new(),
            finished: false,
        }
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    /// The question now showing; None once finished
    pub fn current_question(&self) -> Option<&Question> {
        if self.finished {
            return None;
        }
        self.questions.get(self.current)
    }

    /// Everything needed to display the current question
    pub fn current_view(&self) -> Option<QuestionView<'_>> {
        let question = self.current_question()?;
        Some(QuestionView {
            number: self.current + 1,
            total: self.questions.len(),
            progress: self.progress(),
            selected: self.current_answer(),
            question,
        })
    }

    /// Previously recorded answer for the current question, for pre-selection
    pub fn current_answer(&self) -> Option<&str> {
        let question = self.current_question()?;
        self.answers.get(question.trait_def.id).map(|o| o.value.as_str())
    }

    pub fn is_last(&self) -> bool {
        self.current + 1 == self.questions.len()
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn answers(&self) -> &ObservationSet {
        &self.answers
    }

    /// Percent of the way through, counting the current question
    pub fn progress(&self) -> u8 {
        if self.questions.is_empty() {
            return 100;
        }
        let shown = (self.current + 1).min(self.questions.len());
        (shown as f64 / self.questions.len() as f64 * 100.0).round() as u8
    }

    /// Record an answer for the current question and advance
    ///
    /// Answering the last question finishes the questionnaire.
    pub fn answer(&mut self, value: &str) -> Result<QuestionnaireStep, SessionError> {
        let trait_id = self
            .current_question()
            .map(|q| q.trait_def.id)
            .ok_or(SessionError::QuestionnaireFinished)?;
        self.answers.select(trait_id, value, self.config.selection_confidence)?;
        debug!(trait_id, value, "questionnaire answer");

        if self.is_last() {
            return Ok(self.finish());
        }
        self.current += 1;
        Ok(QuestionnaireStep::Next(self.current))
    }

    /// Answer by option position (zero-based) in the current question
    pub fn answer_option(&mut self, choice: usize) -> Result<QuestionnaireStep, SessionError> {
        let question = self.current_question().ok_or(SessionError::QuestionnaireFinished)?;
        let option = question.options.get(choice).ok_or_else(|| SessionError::UnknownOption {
            trait_id: question.trait_def.id.to_string(),
            value: format!("#{}", choice + 1),
        })?;
        let value = option.value;
        self.answer(value)
    }

    /// Go back one question; returns its recorded answer, if any
    pub fn back(&mut self) -> Option<&str> {
        if self.finished || self.current == 0 {
            return None;
        }
        self.current -= 1;
        self.current_answer()
    }

    /// Leave the current question unanswered
    ///
    /// On the last question this finishes, provided enough answers exist.
    pub fn skip(&mut self) -> Result<QuestionnaireStep, SessionError> {
        if self.finished {
            return Err(SessionError::QuestionnaireFinished);
        }
        if self.is_last() {
            let have = self.answers.len();
            let need = self.config.min_answers_to_finish;
            if have < need {
                return Err(SessionError::NotEnoughAnswers { have, need });
            }
            return Ok(self.finish());
        }
        self.current += 1;
        Ok(QuestionnaireStep::Next(self.current))
    }

    fn finish(&mut self) -> QuestionnaireStep {
        self.finished = true;
        info!(answers = self.answers.len(), "questionnaire finished");
        QuestionnaireStep::Finished(self.answers.aggregate())
    }
}

impl Default for Questionnaire {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Constitution;

    fn next_index(step: QuestionnaireStep) -> usize {
        match step {
            QuestionnaireStep::Next(i) => i,
            QuestionnaireStep::Finished(_) => panic!("finished early"),
        }
    }

    #[test]
    fn test_one_question_per_trait_with_all_options() {
        let q = Questionnaire::default();
        assert_eq!(q.questions().len(), 11);
        assert_eq!(q.questions()[0].trait_def.id, "body_build");
        assert_eq!(q.questions()[0].options.len(), 12);
        assert_eq!(
            q.questions()[0].options[4],
            QuestionOption { dosha: Dosha::Pitta, value: "Medium build" }
        );
    }

    #[test]
    fn test_answer_advances_and_records() {
        let mut q = Questionnaire::default();
        assert_eq!(next_index(q.answer("thin").unwrap()), 1);
        let obs = q.answers().get("body_build").unwrap();
        assert_eq!(obs.value, "Thin");
        assert!((obs.confidence - 0.9).abs() < 1e-10);
    }

    #[test]
    fn test_invalid_answer_does_not_advance() {
        let mut q = Questionnaire::default();
        assert!(q.answer("Gigantic").is_err());
        assert_eq!(q.current_index(), 0);
    }

    #[test]
    fn test_back_returns_previous_answer() {
        let mut q = Questionnaire::default();
        assert!(q.back().is_none());
        q.answer("Athletic").unwrap();
        q.skip().unwrap();
        assert_eq!(q.back(), None);
        assert_eq!(q.back(), Some("Athletic"));
        assert_eq!(q.current_index(), 0);
    }

    #[test]
    fn test_current_view_serializes() {
        let mut q = Questionnaire::default();
        q.answer("Thin").unwrap();
        q.back();

        let view = q.current_view().unwrap();
        assert_eq!(view.number, 1);
        assert_eq!(view.selected, Some("Thin"));

        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["total"], 11);
        assert_eq!(json["progress"], 9);
        assert_eq!(json["selected"], "Thin");
        assert_eq!(json["question"]["trait"]["id"], "body_build");
        assert_eq!(json["question"]["options"][0]["dosha"], "vata");

        while q.current_question().is_some() {
            q.answer_option(0).unwrap();
        }
        assert!(q.current_view().is_none());
    }

    #[test]
    fn test_progress() {
        let mut q = Questionnaire::default();
        assert_eq!(q.progress(), 9);
        for _ in 0..10 {
            q.skip().unwrap();
        }
        assert!(q.is_last());
        assert_eq!(q.progress(), 100);
    }

    #[test]
    fn test_skip_last_needs_min_answers() {
        let mut q = Questionnaire::default();
        q.answer("Thin").unwrap();
        q.answer("Dry").unwrap();
        for _ in 0..8 {
            q.skip().unwrap();
        }
        assert!(q.is_last());
        assert_eq!(q.skip().unwrap_err(), SessionError::NotEnoughAnswers { have: 2, need: 3 });
        assert!(!q.is_finished());

        // diet_preference was skipped
        assert!(q.back().is_none());
        q.answer("Regular meals").unwrap();
        assert!(q.is_last());
        match q.skip().unwrap() {
            QuestionnaireStep::Finished(result) => {
                assert_eq!(result.constitution, Constitution::Single(Dosha::Vata));
            }
            QuestionnaireStep::Next(_) => panic!("expected finish"),
        }
        assert!(q.is_finished());
        assert_eq!(q.skip().unwrap_err(), SessionError::QuestionnaireFinished);
    }

    #[test]
    fn test_answer_every_question() {
        let mut q = Questionnaire::default();
        let mut last = None;
        for _ in 0..11 {
            last = Some(q.answer_option(0).unwrap());
        }
        match last {
            Some(QuestionnaireStep::Finished(result)) => {
                assert_eq!(result.scores.vata, 100.0);
                assert_eq!(result.confidence, 100);
            }
            _ => panic!("expected finish"),
        }
        assert!(q.current_question().is_none());
        assert_eq!(q.answer("Thin").unwrap_err(), SessionError::QuestionnaireFinished);
    }

    #[test]
    fn test_answer_option_out_of_range() {
        let mut q = Questionnaire::default();
        assert!(matches!(q.answer_option(40), Err(SessionError::UnknownOption { .. })));
    }
}
