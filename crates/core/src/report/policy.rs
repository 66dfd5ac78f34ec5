use thiserror::Error;

pub const DEFAULT_PASS_THRESHOLD: u32 = 60;
pub const DEFAULT_DISTINCTION_THRESHOLD: u32 = 85;
pub const DEFAULT_REPORT_HEADING: &str = "РЕЗУЛЬТАТЫ ТЕСТИРОВАНИЯ (СОП ТюмГУ)";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ReportPolicyError {
    #[error("pass threshold must be between 0 and 100, got {0}")]
    PassOutOfRange(u32),

    #[error("distinction threshold must be between 0 and 100, got {0}")]
    DistinctionOutOfRange(u32),

    #[error("pass threshold ({pass}) must not exceed distinction threshold ({distinction})")]
    InvertedThresholds { pass: u32, distinction: u32 },

    #[error("report heading cannot be empty")]
    EmptyHeading,
}

/// Outcome bracket a percentage falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultTier {
    Distinction,
    Pass,
    Fail,
}

impl ResultTier {
    #[must_use]
    pub fn is_passing(self) -> bool {
        !matches!(self, ResultTier::Fail)
    }

    /// Status line value printed in the report.
    #[must_use]
    pub fn status_label(self) -> &'static str {
        if self.is_passing() {
            "СДАНО"
        } else {
            "НЕ СДАНО"
        }
    }
}

/// Grading thresholds (in percent) and the report heading.
///
/// Percentages at or above `distinction_threshold` get the top tier, at or above
/// `pass_threshold` pass, everything else fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportPolicy {
    pass_threshold: u32,
    distinction_threshold: u32,
    heading: String,
}

impl ReportPolicy {
    /// Build a policy with custom thresholds and the default heading.
    ///
    /// # Errors
    ///
    /// Returns `ReportPolicyError` if a threshold is above 100 or the pass
    /// threshold is above the distinction threshold.
    pub fn new(pass_threshold: u32, distinction_threshold: u32) -> Result<Self, ReportPolicyError> {
        if pass_threshold > 100 {
            return Err(ReportPolicyError::PassOutOfRange(pass_threshold));
        }
        if distinction_threshold > 100 {
            return Err(ReportPolicyError::DistinctionOutOfRange(distinction_threshold));
        }
        if pass_threshold > distinction_threshold {
            return Err(ReportPolicyError::InvertedThresholds {
                pass: pass_threshold,
                distinction: distinction_threshold,
            });
        }

        Ok(Self {
            pass_threshold,
            distinction_threshold,
            heading: DEFAULT_REPORT_HEADING.to_string(),
        })
    }

    /// Replace the first line of the report.
    ///
    /// # Errors
    ///
    /// Returns `ReportPolicyError::EmptyHeading` for blank input.
    pub fn with_heading(mut self, heading: impl Into<String>) -> Result<Self, ReportPolicyError> {
        let heading = heading.into().trim().to_string();
        if heading.is_empty() {
            return Err(ReportPolicyError::EmptyHeading);
        }
        self.heading = heading;
        Ok(self)
    }

    #[must_use]
    pub fn pass_threshold(&self) -> u32 {
        self.pass_threshold
    }

    #[must_use]
    pub fn distinction_threshold(&self) -> u32 {
        self.distinction_threshold
    }

    #[must_use]
    pub fn heading(&self) -> &str {
        &self.heading
    }

    #[must_use]
    pub fn tier(&self, percentage: u32) -> ResultTier {
        if percentage >= self.distinction_threshold {
            ResultTier::Distinction
        } else if percentage >= self.pass_threshold {
            ResultTier::Pass
        } else {
            ResultTier::Fail
        }
    }
}

impl Default for ReportPolicy {
    fn default() -> Self {
        Self {
            pass_threshold: DEFAULT_PASS_THRESHOLD,
            distinction_threshold: DEFAULT_DISTINCTION_THRESHOLD,
            heading: DEFAULT_REPORT_HEADING.to_string(),
        }
    }
}
