/// Aggregated view of quiz progress, useful for UI.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SessionProgress {
    pub total: usize,
    pub current: usize,
    pub remaining: usize,
    /// Share of questions already behind the current one, `0.0..=100.0`.
    pub percent: f64,
    pub is_complete: bool,
}
