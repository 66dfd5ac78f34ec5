use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::ids::QuestionId;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionError {
    #[error("question {id}: prompt cannot be empty")]
    EmptyPrompt { id: QuestionId },

    #[error("question {id}: at least one answer option is required")]
    NoOptions { id: QuestionId },

    #[error("question {id}: option #{index} has empty text")]
    BlankOption { id: QuestionId, index: usize },

    #[error("question {id}: no option is marked correct")]
    NoCorrectOption { id: QuestionId },

    #[error("question {id}: {count} options are marked correct, expected exactly one")]
    MultipleCorrectOptions { id: QuestionId, count: usize },
}

//
// ─── ANSWER OPTION ─────────────────────────────────────────────────────────────
//

/// One selectable answer together with the explanation shown after grading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerOption {
    text: String,
    rationale: String,
    is_correct: bool,
}

impl AnswerOption {
    #[must_use]
    pub fn new(text: impl Into<String>, rationale: impl Into<String>, is_correct: bool) -> Self {
        Self {
            text: text.into(),
            rationale: rationale.into(),
            is_correct,
        }
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn rationale(&self) -> &str {
        &self.rationale
    }

    #[must_use]
    pub fn is_correct(&self) -> bool {
        self.is_correct
    }
}

//
// ─── QUESTION ──────────────────────────────────────────────────────────────────
//

/// Unvalidated question as it appears in the bank file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionDraft {
    pub id: QuestionId,
    pub prompt: String,
    pub options: Vec<AnswerOption>,
    #[serde(default)]
    pub hint: String,
}

impl QuestionDraft {
    /// Check the draft and turn it into a `Question`.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError` when the prompt is blank, an option has no text,
    /// or the options do not contain exactly one correct answer.
    pub fn validate(self) -> Result<Question, QuestionError> {
        if self.prompt.trim().is_empty() {
            return Err(QuestionError::EmptyPrompt { id: self.id });
        }
        validate_options(self.id, &self.options)?;

        Ok(Question {
            id: self.id,
            prompt: self.prompt,
            options: self.options,
            hint: self.hint,
        })
    }
}

/// A validated multiple-choice question.
///
/// Always holds at least one option and exactly one correct option.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    id: QuestionId,
    prompt: String,
    options: Vec<AnswerOption>,
    hint: String,
}

impl Question {
    #[must_use]
    pub fn id(&self) -> QuestionId {
        self.id
    }

    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    #[must_use]
    pub fn options(&self) -> &[AnswerOption] {
        &self.options
    }

    #[must_use]
    pub fn option(&self, index: usize) -> Option<&AnswerOption> {
        self.options.get(index)
    }

    #[must_use]
    pub fn hint(&self) -> &str {
        &self.hint
    }

    /// The single correct option.
    ///
    /// Validation guarantees it exists, so `None` only shows up for a
    /// question that was never validated, which the public API cannot build.
    #[must_use]
    pub fn correct_option(&self) -> Option<&AnswerOption> {
        self.options.iter().find(|option| option.is_correct())
    }

    /// Position of the correct option in the current option order.
    #[must_use]
    pub fn correct_index(&self) -> Option<usize> {
        self.options.iter().position(AnswerOption::is_correct)
    }

    /// Structural copy of this question carrying `options` in a new order.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError` if `options` breaks the option rules.
    pub fn with_options(&self, options: Vec<AnswerOption>) -> Result<Self, QuestionError> {
        validate_options(self.id, &options)?;
        Ok(Self {
            id: self.id,
            prompt: self.prompt.clone(),
            options,
            hint: self.hint.clone(),
        })
    }
}

fn validate_options(id: QuestionId, options: &[AnswerOption]) -> Result<(), QuestionError> {
    if options.is_empty() {
        return Err(QuestionError::NoOptions { id });
    }
    if let Some(index) = options.iter().position(|o| o.text.trim().is_empty()) {
        return Err(QuestionError::BlankOption { id, index });
    }
    match options.iter().filter(|o| o.is_correct).count() {
        0 => Err(QuestionError::NoCorrectOption { id }),
        1 => Ok(()),
        count => Err(QuestionError::MultipleCorrectOptions { id, count }),
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
