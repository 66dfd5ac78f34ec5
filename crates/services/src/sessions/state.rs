use quiz_core::model::{AnswerOption, Question, RespondentIdentity};

use super::progress::SessionProgress;

/// Coarse lifecycle of a quiz session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum QuizPhase {
    #[default]
    NotStarted,
    InProgress,
    Finished,
}

/// Everything the quiz screens need to render a session.
///
/// Only the controller mutates it; readers get plain getters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionState {
    pub(super) questions: Vec<Question>,
    pub(super) current_index: usize,
    pub(super) score: u32,
    pub(super) selection: Option<usize>,
    pub(super) graded: bool,
    pub(super) phase: QuizPhase,
}

impl SessionState {
    pub(super) fn in_progress(questions: Vec<Question>) -> Self {
        Self {
            questions,
            current_index: 0,
            score: 0,
            selection: None,
            graded: false,
            phase: QuizPhase::InProgress,
        }
    }

    #[must_use]
    pub fn phase(&self) -> QuizPhase {
        self.phase
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn selection(&self) -> Option<usize> {
        self.selection
    }

    #[must_use]
    pub fn is_graded(&self) -> bool {
        self.graded
    }

    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        self.questions.get(self.current_index)
    }

    #[must_use]
    pub fn selected_option(&self) -> Option<&AnswerOption> {
        let index = self.selection?;
        self.current_question()?.option(index)
    }

    /// `Some(true)` once a correct selection was graded, `None` before grading.
    #[must_use]
    pub fn is_selection_correct(&self) -> Option<bool> {
        if !self.graded {
            return None;
        }
        self.selected_option().map(AnswerOption::is_correct)
    }

    #[must_use]
    pub fn is_last_question(&self) -> bool {
        self.current_index + 1 >= self.questions.len()
    }

    #[must_use]
    pub fn progress(&self) -> SessionProgress {
        SessionProgress::new(self.current_index, self.total())
    }
}

/// Final numbers of a finished session, handed to the report formatter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizOutcome {
    pub identity: RespondentIdentity,
    pub score: u32,
    pub total: u32,
}
