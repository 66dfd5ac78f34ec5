//! Result report: thresholds, the fixed-layout text block and the mail handoff request.

mod format;
mod mail;
mod policy;

pub use format::{QuizReport, format_report, percentage};
pub use mail::{MailDraft, encode_component};
pub use policy::{
    DEFAULT_DISTINCTION_THRESHOLD, DEFAULT_PASS_THRESHOLD, DEFAULT_REPORT_HEADING, ReportPolicy,
    ReportPolicyError, ResultTier,
};
