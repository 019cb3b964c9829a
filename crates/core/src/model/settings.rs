use chrono::Duration;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SettingsError {
    #[error("sample size must be > 0")]
    InvalidSampleSize,

    #[error("time limit must be > 0 seconds")]
    InvalidTimeLimit,

    #[error("pass mark must be between 1 and 100 percent")]
    InvalidPassMark,
}

/// Configuration for a quiz attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizSettings {
    sample_size: u32,
    time_limit_secs: u32,
    pass_mark_percent: u8,
}

impl QuizSettings {
    /// Exam defaults: 20 questions, 20 minutes, 75% to pass.
    #[must_use]
    pub fn exam_defaults() -> Self {
        Self {
            sample_size: 20,
            time_limit_secs: 1200,
            pass_mark_percent: 75,
        }
    }

    /// Creates custom quiz settings.
    ///
    /// # Errors
    ///
    /// Returns `SettingsError` if any value is zero or the pass mark exceeds 100.
    pub fn new(
        sample_size: u32,
        time_limit_secs: u32,
        pass_mark_percent: u8,
    ) -> Result<Self, SettingsError> {
        if sample_size == 0 {
            return Err(SettingsError::InvalidSampleSize);
        }
        if time_limit_secs == 0 {
            return Err(SettingsError::InvalidTimeLimit);
        }
        if !(1..=100).contains(&pass_mark_percent) {
            return Err(SettingsError::InvalidPassMark);
        }
        Ok(Self {
            sample_size,
            time_limit_secs,
            pass_mark_percent,
        })
    }

    #[must_use]
    pub fn sample_size(&self) -> u32 {
        self.sample_size
    }

    #[must_use]
    pub fn time_limit_secs(&self) -> u32 {
        self.time_limit_secs
    }

    #[must_use]
    pub fn time_limit(&self) -> Duration {
        Duration::seconds(i64::from(self.time_limit_secs))
    }

    #[must_use]
    pub fn pass_mark_percent(&self) -> u8 {
        self.pass_mark_percent
    }

    /// Lowest passing score for a session of `total` questions.
    #[must_use]
    pub fn pass_score(&self, total: u32) -> u32 {
        let needed = u64::from(total) * u64::from(self.pass_mark_percent);
        u32::try_from(needed.div_ceil(100)).unwrap_or(u32::MAX)
    }
}

impl Default for QuizSettings {
    fn default() -> Self {
        Self::exam_defaults()
    }
}
