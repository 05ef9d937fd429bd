/// Feedback band selected from the final score percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResultTier {
    Perfect,
    High,
    Mid,
    Encouragement,
}

impl ResultTier {
    /// Picks the tier for `score` out of `total`.
    ///
    /// Thresholds are compared against the unrounded percentage: 100, 80, 60.
    #[must_use]
    pub fn from_score(score: u32, total: u32) -> Self {
        let Some(percentage) = percentage(score, total) else {
            return Self::Encouragement;
        };
        if percentage >= 100.0 {
            Self::Perfect
        } else if percentage >= 80.0 {
            Self::High
        } else if percentage >= 60.0 {
            Self::Mid
        } else {
            Self::Encouragement
        }
    }

    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Self::Perfect => "Perfect score! You're an App SDK master!",
            Self::High => "Great job! You're almost an expert!",
            Self::Mid => "Good effort! Keep learning and you'll be a pro soon!",
            Self::Encouragement => "Don't worry, practice makes perfect! Try again!",
        }
    }
}

/// Score as a percentage of `total`; `None` when there is nothing to score.
#[must_use]
pub fn percentage(score: u32, total: u32) -> Option<f64> {
    if total == 0 {
        return None;
    }
    Some(f64::from(score) / f64::from(total) * 100.0)
}
