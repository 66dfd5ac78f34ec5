use std::process::{Command, ExitStatus};
use std::thread::{self, JoinHandle};

use async_trait::async_trait;
use tracing::{debug, warn};

use quiz_core::report::MailDraft;
use services::{HandoffError, MailComposer};

/// Hands a `mailto:` link to the operating system's default mail client.
pub struct DesktopMailComposer;

#[async_trait(?Send)]
impl MailComposer for DesktopMailComposer {
    async fn compose(&self, draft: &MailDraft) -> Result<(), HandoffError> {
        let url = draft
            .mailto_url()
            .map_err(|err| HandoffError::InvalidLink(err.to_string()))?;
        let command = opener(url.as_str()).ok_or(HandoffError::Unavailable)?;
        launch(command)?;
        debug!(subject = draft.subject(), "mail client launched");
        Ok(())
    }
}

/// Spawn the opener and reap it on a detached thread so no zombie is left behind.
fn launch(mut command: Command) -> Result<JoinHandle<Option<ExitStatus>>, HandoffError> {
    let mut child = command
        .spawn()
        .map_err(|err| HandoffError::Rejected(err.to_string()))?;
    thread::Builder::new()
        .name("mail-opener".into())
        .spawn(move || match child.wait() {
            Ok(status) => {
                if !status.success() {
                    warn!(%status, "mail opener exited with an error");
                }
                Some(status)
            }
            Err(err) => {
                warn!(error = %err, "failed to wait for mail opener");
                None
            }
        })
        .map_err(|err| HandoffError::Rejected(err.to_string()))
}

#[cfg(target_os = "macos")]
fn opener(url: &str) -> Option<Command> {
    let mut command = Command::new("open");
    command.arg(url);
    Some(command)
}

#[cfg(target_os = "windows")]
fn opener(url: &str) -> Option<Command> {
    // `cmd /C start` would split the link on `&`.
    let mut command = Command::new("rundll32");
    command.args(["url.dll,FileProtocolHandler", url]);
    Some(command)
}

#[cfg(target_os = "linux")]
fn opener(url: &str) -> Option<Command> {
    let mut command = Command::new("xdg-open");
    command.arg(url);
    Some(command)
}

#[cfg(not(any(target_os = "macos", target_os = "windows", target_os = "linux")))]
fn opener(_url: &str) -> Option<Command> {
    None
}
