//! Shared error types for the services crate.

use thiserror::Error;

use quiz_core::model::{IdentityError, QuestionError};

/// Errors emitted by the session controller.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SessionError {
    /// Name or group missing; the respondent can fix it and retry.
    #[error(transparent)]
    Validation(#[from] IdentityError),
    #[error("a session is already running; restart it first")]
    AlreadyStarted,
    #[error(transparent)]
    Question(#[from] QuestionError),
}

impl SessionError {
    /// True for errors the respondent can correct on the start screen.
    #[must_use]
    pub fn is_user_correctable(&self) -> bool {
        matches!(self, SessionError::Validation(_))
    }
}

/// Errors reported by clipboard and mail handoffs.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum HandoffError {
    #[error("handoff is not available on this platform")]
    Unavailable,
    #[error("handoff was rejected: {0}")]
    Rejected(String),
    #[error("could not build mail link: {0}")]
    InvalidLink(String),
}
