use std::time::Duration;

/// How long the "copied" label stays up.
pub const COPIED_RESET_DELAY: Duration = Duration::from_secs(2);

/// Transient "copied" flag on the result screen.
///
/// Every successful copy hands out a new token; only the timer holding the
/// latest token may clear the flag, so a second copy restarts the delay.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CopyFeedback {
    copied: bool,
    generation: u64,
}

impl CopyFeedback {
    #[must_use]
    pub fn is_copied(&self) -> bool {
        self.copied
    }

    #[must_use]
    pub fn label(&self) -> &'static str {
        if self.copied {
            "Скопировано!"
        } else {
            "Скопировать результат"
        }
    }

    /// Raise the flag and return the token for the reset timer.
    pub fn mark_copied(&mut self) -> u64 {
        self.generation = self.generation.wrapping_add(1);
        self.copied = true;
        self.generation
    }

    /// Drop the flag and invalidate any pending timer.
    pub fn clear(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        self.copied = false;
    }

    /// Clear the flag if `token` is still the latest one. Returns whether it did.
    pub fn expire(&mut self, token: u64) -> bool {
        if !self.copied || token != self.generation {
            return false;
        }
        self.copied = false;
        true
    }
}
