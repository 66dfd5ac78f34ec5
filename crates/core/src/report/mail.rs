use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use url::Url;

use crate::report::format::QuizReport;

/// Characters left as-is by JavaScript's `encodeURIComponent`.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encode a single URI component.
#[must_use]
pub fn encode_component(value: &str) -> String {
    utf8_percent_encode(value, COMPONENT).to_string()
}

/// Mail composer request: the core only builds it, sending is up to the OS.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailDraft {
    subject: String,
    body: String,
}

impl MailDraft {
    #[must_use]
    pub fn for_report(report: &QuizReport) -> Self {
        let identity = report.identity();
        Self {
            subject: format!(
                "Результаты теста: {} ({})",
                identity.name(),
                identity.group()
            ),
            body: format!("{}\n\n", report.text()),
        }
    }

    #[must_use]
    pub fn subject(&self) -> &str {
        &self.subject
    }

    #[must_use]
    pub fn body(&self) -> &str {
        &self.body
    }

    /// `mailto:` link with no recipient, so the user picks one in their client.
    ///
    /// # Errors
    ///
    /// Returns `url::ParseError` if the assembled link is rejected by the parser.
    pub fn mailto_url(&self) -> Result<Url, url::ParseError> {
        Url::parse(&format!(
            "mailto:?subject={}&body={}",
            encode_component(&self.subject),
            encode_component(&self.body)
        ))
    }
}
