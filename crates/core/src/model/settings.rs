use std::time::Duration;

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SettingsError {
    #[error("time limit must be > 0 seconds")]
    InvalidTimeLimit,

    #[error("feedback delay must be > 0")]
    InvalidFeedbackDelay,

    #[error("tick interval must be > 0")]
    InvalidTickInterval,
}

/// Timing knobs for a quiz session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizSettings {
    time_limit_secs: u32,
    feedback_delay: Duration,
    tick_interval: Duration,
}

impl QuizSettings {
    pub const DEFAULT_TIME_LIMIT_SECS: u32 = 300;
    pub const DEFAULT_FEEDBACK_DELAY: Duration = Duration::from_millis(1500);
    pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_secs(1);

    /// Five minutes on the clock, 1.5s of answer feedback, one tick per second.
    #[must_use]
    pub fn standard() -> Self {
        Self {
            time_limit_secs: Self::DEFAULT_TIME_LIMIT_SECS,
            feedback_delay: Self::DEFAULT_FEEDBACK_DELAY,
            tick_interval: Self::DEFAULT_TICK_INTERVAL,
        }
    }

    /// # Errors
    ///
    /// Returns `SettingsError` if any value is zero.
    pub fn new(
        time_limit_secs: u32,
        feedback_delay: Duration,
        tick_interval: Duration,
    ) -> Result<Self, SettingsError> {
        if time_limit_secs == 0 {
            return Err(SettingsError::InvalidTimeLimit);
        }
        if feedback_delay.is_zero() {
            return Err(SettingsError::InvalidFeedbackDelay);
        }
        if tick_interval.is_zero() {
            return Err(SettingsError::InvalidTickInterval);
        }

        Ok(Self {
            time_limit_secs,
            feedback_delay,
            tick_interval,
        })
    }

    #[must_use]
    pub fn time_limit_secs(&self) -> u32 {
        self.time_limit_secs
    }

    #[must_use]
    pub fn feedback_delay(&self) -> Duration {
        self.feedback_delay
    }

    #[must_use]
    pub fn tick_interval(&self) -> Duration {
        self.tick_interval
    }
}

impl Default for QuizSettings {
    fn default() -> Self {
        Self::standard()
    }
}
