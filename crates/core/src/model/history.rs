use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::ids::SessionId;

/// Outcome of a completed quiz attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuizStatus {
    Pass,
    Fail,
}

impl QuizStatus {
    /// Pass when `score / total` reaches `pass_mark_percent`.
    ///
    /// Integer comparison, so 15 of 20 at 75% passes and 14 of 20 fails.
    #[must_use]
    pub fn from_score(score: u32, total: u32, pass_mark_percent: u8) -> Self {
        let earned = u64::from(score) * 100;
        let needed = u64::from(total) * u64::from(pass_mark_percent);
        if earned >= needed { Self::Pass } else { Self::Fail }
    }

    #[must_use]
    pub fn is_pass(self) -> bool {
        matches!(self, Self::Pass)
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pass => "Pass",
            Self::Fail => "Fail",
        }
    }
}

/// One row of the results table. At most one is written per session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    session_id: SessionId,
    completed_at: DateTime<Utc>,
    score: u32,
    total: u32,
    status: QuizStatus,
}

impl HistoryEntry {
    #[must_use]
    pub fn new(
        session_id: SessionId,
        completed_at: DateTime<Utc>,
        score: u32,
        total: u32,
        status: QuizStatus,
    ) -> Self {
        Self {
            session_id,
            completed_at,
            score,
            total,
            status,
        }
    }

    #[must_use]
    pub fn session_id(&self) -> SessionId {
        self.session_id
    }

    #[must_use]
    pub fn completed_at(&self) -> DateTime<Utc> {
        self.completed_at
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn total(&self) -> u32 {
        self.total
    }

    #[must_use]
    pub fn status(&self) -> QuizStatus {
        self.status
    }

    /// Score rendered as `"X / N"`.
    #[must_use]
    pub fn score_label(&self) -> String {
        format!("{} / {}", self.score, self.total)
    }
}
