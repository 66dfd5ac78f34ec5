use std::sync::Arc;

use rand::Rng;
use tracing::{debug, info, trace};

use quiz_core::model::{IdentityDraft, QuestionBank, RespondentIdentity};

use crate::error::SessionError;

use super::plan::SessionBuilder;
use super::state::{QuizOutcome, QuizPhase, SessionState};

/// Drives one respondent through the quiz.
///
/// Transitions whose preconditions do not hold are silent no-ops: the state is
/// left exactly as it was and nothing is returned to the caller.
#[derive(Debug, Clone)]
pub struct SessionController {
    bank: Arc<QuestionBank>,
    identity: Option<RespondentIdentity>,
    state: SessionState,
}

impl SessionController {
    #[must_use]
    pub fn new(bank: Arc<QuestionBank>) -> Self {
        Self {
            bank,
            identity: None,
            state: SessionState::default(),
        }
    }

    #[must_use]
    pub fn bank(&self) -> &QuestionBank {
        &self.bank
    }

    #[must_use]
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    #[must_use]
    pub fn identity(&self) -> Option<&RespondentIdentity> {
        self.identity.as_ref()
    }

    #[must_use]
    pub fn phase(&self) -> QuizPhase {
        self.state.phase
    }

    //
    // ─── TRANSITIONS ───────────────────────────────────────────────────────────
    //

    /// Validate the identity and begin a freshly shuffled session.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Validation` for a blank name or group and
    /// `SessionError::AlreadyStarted` outside `NotStarted`. State is unchanged on error.
    pub fn start(&mut self, draft: IdentityDraft) -> Result<(), SessionError> {
        self.start_with_rng(draft, &mut rand::rng())
    }

    /// Same as [`start`](Self::start) with a caller-supplied RNG.
    ///
    /// # Errors
    ///
    /// See [`start`](Self::start).
    pub fn start_with_rng<R: Rng + ?Sized>(
        &mut self,
        draft: IdentityDraft,
        rng: &mut R,
    ) -> Result<(), SessionError> {
        if self.state.phase != QuizPhase::NotStarted {
            return Err(SessionError::AlreadyStarted);
        }
        let identity = draft.validate()?;
        let plan = SessionBuilder::new(&self.bank).build(rng)?;

        info!(
            group = identity.group(),
            questions = plan.total(),
            "quiz session started"
        );
        self.identity = Some(identity);
        self.state = SessionState::in_progress(plan.questions);
        Ok(())
    }

    /// Pick an option on the current question; may be called again to change it.
    pub fn select_option(&mut self, index: usize) {
        if !self.accepts_selection() {
            trace!(index, "selection ignored");
            return;
        }
        let in_range = self
            .state
            .current_question()
            .is_some_and(|question| index < question.options().len());
        if !in_range {
            trace!(index, "selection out of range ignored");
            return;
        }
        self.state.selection = Some(index);
    }

    /// Lock in the selection and score it. At most one point per question.
    pub fn submit(&mut self) {
        if !self.accepts_selection() {
            trace!("submit ignored");
            return;
        }
        let Some(correct) = self.state.selected_option().map(|option| option.is_correct()) else {
            trace!("submit without selection ignored");
            return;
        };

        self.state.graded = true;
        if correct {
            self.state.score += 1;
        }
        debug!(
            index = self.state.current_index,
            correct,
            score = self.state.score,
            "answer graded"
        );
    }

    /// Move past a graded question, finishing after the last one.
    pub fn advance(&mut self) {
        if self.state.phase != QuizPhase::InProgress || !self.state.graded {
            trace!("advance ignored");
            return;
        }

        if self.state.is_last_question() {
            self.state.phase = QuizPhase::Finished;
            info!(
                score = self.state.score,
                total = self.state.total(),
                "quiz session finished"
            );
            return;
        }

        self.state.current_index += 1;
        self.state.selection = None;
        self.state.graded = false;
    }

    /// Drop identity and session progress, returning to `NotStarted`.
    pub fn restart(&mut self) {
        if self.state.phase != QuizPhase::NotStarted {
            info!("quiz session restarted");
        }
        self.identity = None;
        self.state = SessionState::default();
    }

    /// Final score, available only once the session is finished.
    #[must_use]
    pub fn outcome(&self) -> Option<QuizOutcome> {
        if self.state.phase != QuizPhase::Finished {
            return None;
        }
        let identity = self.identity.clone()?;
        Some(QuizOutcome {
            identity,
            score: self.state.score,
            total: u32::try_from(self.state.total()).unwrap_or(u32::MAX),
        })
    }

    fn accepts_selection(&self) -> bool {
        self.state.phase == QuizPhase::InProgress && !self.state.graded
    }
}
