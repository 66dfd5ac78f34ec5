#![forbid(unsafe_code)]

pub mod error;
pub mod randomizer;
pub mod sessions;
pub mod share;

pub use quiz_core::Clock;
pub use sessions as session;

pub use error::{HandoffError, SessionError};
pub use randomizer::{shuffle, shuffle_with};
pub use sessions::{
    QuizOutcome, QuizPhase, SessionBuilder, SessionController, SessionPlan, SessionProgress,
    SessionState,
};
pub use share::{Clipboard, MailComposer, ShareOutcome, ShareService};
