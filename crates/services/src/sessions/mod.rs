mod controller;
mod plan;
mod progress;
mod state;

// Public API of the session subsystem.
pub use crate::error::SessionError;
pub use controller::SessionController;
pub use plan::{SessionBuilder, SessionPlan};
pub use progress::SessionProgress;
pub use state::{QuizOutcome, QuizPhase, SessionState};
