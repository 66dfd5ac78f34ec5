use std::sync::Arc;

use async_trait::async_trait;
use tracing::{info, warn};

use quiz_core::Clock;
use quiz_core::report::{MailDraft, QuizReport, ReportPolicy};

use crate::error::HandoffError;
use crate::sessions::QuizOutcome;

//
// ─── HANDOFF SEAMS ─────────────────────────────────────────────────────────────
//

/// Writes plain text to the system clipboard.
#[async_trait(?Send)]
pub trait Clipboard: Send + Sync {
    async fn write_text(&self, text: &str) -> Result<(), HandoffError>;
}

/// Opens the user's mail client with a prepared draft.
#[async_trait(?Send)]
pub trait MailComposer: Send + Sync {
    async fn compose(&self, draft: &MailDraft) -> Result<(), HandoffError>;
}

/// Result of a handoff as far as the result screen cares.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareOutcome {
    Delivered,
    Failed,
}

impl ShareOutcome {
    #[must_use]
    pub fn is_delivered(self) -> bool {
        matches!(self, ShareOutcome::Delivered)
    }
}

//
// ─── SHARE SERVICE ─────────────────────────────────────────────────────────────
//

/// Builds the result report and hands it to the clipboard or mail client.
///
/// Handoff failures are logged and reported as `ShareOutcome::Failed`; they are
/// never returned as errors and never touch session state.
#[derive(Clone)]
pub struct ShareService {
    clock: Clock,
    policy: ReportPolicy,
    clipboard: Arc<dyn Clipboard>,
    mail: Arc<dyn MailComposer>,
}

impl ShareService {
    #[must_use]
    pub fn new(
        clock: Clock,
        policy: ReportPolicy,
        clipboard: Arc<dyn Clipboard>,
        mail: Arc<dyn MailComposer>,
    ) -> Self {
        Self {
            clock,
            policy,
            clipboard,
            mail,
        }
    }

    /// Render the report for a finished session, dated by the service clock.
    #[must_use]
    pub fn build_report(&self, outcome: &QuizOutcome) -> QuizReport {
        QuizReport::new(
            &outcome.identity,
            outcome.score,
            outcome.total,
            self.clock.today(),
            &self.policy,
        )
    }

    pub async fn copy_report(&self, report: &QuizReport) -> ShareOutcome {
        match self.clipboard.write_text(report.text()).await {
            Ok(()) => {
                info!(percentage = report.percentage(), "report copied to clipboard");
                ShareOutcome::Delivered
            }
            Err(err) => {
                warn!(error = %err, "clipboard write failed");
                ShareOutcome::Failed
            }
        }
    }

    pub async fn send_report(&self, report: &QuizReport) -> ShareOutcome {
        let draft = report.mail();
        match self.mail.compose(&draft).await {
            Ok(()) => {
                info!("report handed to mail client");
                ShareOutcome::Delivered
            }
            Err(err) => {
                warn!(error = %err, "mail handoff failed");
                ShareOutcome::Failed
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    use quiz_core::model::IdentityDraft;
    use quiz_core::time::fixed_clock;

    #[derive(Default)]
    struct RecordingClipboard {
        written: Mutex<Vec<String>>,
        fail: bool,
    }

    #[async_trait(?Send)]
    impl Clipboard for RecordingClipboard {
        async fn write_text(&self, text: &str) -> Result<(), HandoffError> {
            if self.fail {
                return Err(HandoffError::Rejected("permission denied".into()));
            }
            self.written.lock().unwrap().push(text.to_string());
            Ok(())
        }
    }

    #[derive(Default)]
    struct RecordingMail {
        drafts: Mutex<Vec<MailDraft>>,
    }

    #[async_trait(?Send)]
    impl MailComposer for RecordingMail {
        async fn compose(&self, draft: &MailDraft) -> Result<(), HandoffError> {
            self.drafts.lock().unwrap().push(draft.clone());
            Ok(())
        }
    }

    fn outcome(score: u32, total: u32) -> QuizOutcome {
        QuizOutcome {
            identity: IdentityDraft::new("A A", "G1").validate().unwrap(),
            score,
            total,
        }
    }

    #[test]
    fn report_uses_policy_and_clock() {
        let service = ShareService::new(
            fixed_clock(),
            ReportPolicy::default(),
            Arc::new(RecordingClipboard::default()),
            Arc::new(RecordingMail::default()),
        );
        let report = service.build_report(&outcome(8, 10));
        assert_eq!(report.percentage(), 80);
        assert!(report.is_passing());
        assert_eq!(report.date(), fixed_clock().today());
        assert!(report.text().contains("80%"));
    }

    #[tokio::test]
    async fn copy_writes_report_text() {
        let clipboard = Arc::new(RecordingClipboard::default());
        let service = ShareService::new(
            fixed_clock(),
            ReportPolicy::default(),
            clipboard.clone(),
            Arc::new(RecordingMail::default()),
        );
        let report = service.build_report(&outcome(5, 10));

        assert_eq!(service.copy_report(&report).await, ShareOutcome::Delivered);
        assert_eq!(*clipboard.written.lock().unwrap(), vec![report.text().to_string()]);
    }

    #[tokio::test]
    async fn clipboard_failure_is_swallowed() {
        let clipboard = Arc::new(RecordingClipboard {
            fail: true,
            ..RecordingClipboard::default()
        });
        let service = ShareService::new(
            fixed_clock(),
            ReportPolicy::default(),
            clipboard,
            Arc::new(RecordingMail::default()),
        );
        let report = service.build_report(&outcome(5, 10));

        let result = service.copy_report(&report).await;
        assert_eq!(result, ShareOutcome::Failed);
        assert!(!result.is_delivered());
    }

    #[tokio::test]
    async fn send_hands_over_subject_and_body() {
        let mail = Arc::new(RecordingMail::default());
        let service = ShareService::new(
            fixed_clock(),
            ReportPolicy::default(),
            Arc::new(RecordingClipboard::default()),
            mail.clone(),
        );
        let report = service.build_report(&outcome(9, 10));

        assert!(service.send_report(&report).await.is_delivered());
        let drafts = mail.drafts.lock().unwrap();
        assert_eq!(drafts.len(), 1);
        assert_eq!(drafts[0].subject(), "Результаты теста: A A (G1)");
        assert!(drafts[0].body().starts_with(report.text()));
    }
}
