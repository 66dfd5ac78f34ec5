use quiz_core::report::percentage;

/// Aggregated view of session progress, useful for UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionProgress {
    /// 1-based number of the question on screen.
    pub position: usize,
    pub total: usize,
    /// Share of questions already behind the current one, rounded.
    pub percent_complete: u32,
}

impl SessionProgress {
    #[must_use]
    pub fn new(current_index: usize, total: usize) -> Self {
        let done = u32::try_from(current_index).unwrap_or(u32::MAX);
        let all = u32::try_from(total).unwrap_or(u32::MAX);
        Self {
            position: current_index + 1,
            total,
            percent_complete: percentage(done, all),
        }
    }
}
