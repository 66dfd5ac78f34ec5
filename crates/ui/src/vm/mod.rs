mod copy_feedback;
mod quiz_vm;
mod result_vm;
mod start_vm;

pub use copy_feedback::{COPIED_RESET_DELAY, CopyFeedback};
pub use quiz_vm::{
    CorrectAnswerVm, FeedbackVm, OptionState, OptionVm, QuizAction, QuizVm, map_quiz,
};
pub use result_vm::{ResultVm, finished_report, map_result, tier_message, tier_tone};
pub use start_vm::{IDENTITY_REQUIRED_MESSAGE, StartForm, intro_line};
