use std::collections::HashSet;

use serde::Deserialize;
use thiserror::Error;

use crate::model::ids::QuestionId;
use crate::model::question::{Question, QuestionDraft, QuestionError};

const BUILTIN_BANK_JSON: &str = include_str!("../../assets/question_bank.json");

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum BankError {
    #[error("question bank is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("question bank title cannot be empty")]
    EmptyTitle,

    #[error("question bank has no questions")]
    Empty,

    #[error("question id {0} appears more than once")]
    DuplicateId(QuestionId),

    #[error(transparent)]
    Question(#[from] QuestionError),
}

/// Bank file layout: `{ title, questions: [...] }`.
#[derive(Debug, Clone, Deserialize)]
pub struct QuestionBankDraft {
    pub title: String,
    pub questions: Vec<QuestionDraft>,
}

impl QuestionBankDraft {
    /// Validate every question and the bank as a whole.
    ///
    /// # Errors
    ///
    /// Returns the first `BankError` found; a bank is never partially loaded.
    pub fn validate(self) -> Result<QuestionBank, BankError> {
        let title = self.title.trim().to_string();
        if title.is_empty() {
            return Err(BankError::EmptyTitle);
        }
        if self.questions.is_empty() {
            return Err(BankError::Empty);
        }

        let mut seen = HashSet::with_capacity(self.questions.len());
        let mut questions = Vec::with_capacity(self.questions.len());
        for draft in self.questions {
            if !seen.insert(draft.id) {
                return Err(BankError::DuplicateId(draft.id));
            }
            questions.push(draft.validate()?);
        }

        Ok(QuestionBank { title, questions })
    }
}

/// Read-only template every session copies its questions from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionBank {
    title: String,
    questions: Vec<Question>,
}

impl QuestionBank {
    /// Parse and validate a bank from JSON text.
    ///
    /// # Errors
    ///
    /// Returns `BankError::Parse` for malformed JSON and the other variants for
    /// data that breaks the bank rules.
    pub fn from_json(raw: &str) -> Result<Self, BankError> {
        let draft: QuestionBankDraft = serde_json::from_str(raw)?;
        draft.validate()
    }

    /// The bank shipped with the application.
    ///
    /// # Errors
    ///
    /// Returns `BankError` if the embedded asset is malformed.
    pub fn builtin() -> Result<Self, BankError> {
        Self::from_json(BUILTIN_BANK_JSON)
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}
