/// Aggregated view of quiz progress, useful for UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizProgress {
    /// One-based number of the question on screen.
    pub number: usize,
    pub total: usize,
    pub is_complete: bool,
}
