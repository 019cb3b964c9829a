use std::fmt;

use chrono::{DateTime, Duration, Utc};
use thiserror::Error;

use crate::model::answer::AnswerRecord;
use crate::model::history::{HistoryEntry, QuizStatus};
use crate::model::ids::SessionId;
use crate::model::question::Question;
use crate::model::settings::QuizSettings;
use crate::time::elapsed_between;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuizError {
    #[error("no questions available for quiz")]
    Empty,

    #[error("{selected:?} is not one of the offered options")]
    InvalidSelection { selected: String },

    #[error("quiz already finished ({0})")]
    Finished(TerminalReason),

    #[error("quiz is still in progress")]
    NotFinished,
}

//
// ─── STATE ─────────────────────────────────────────────────────────────────────
//

/// Why no further questions can be answered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminalReason {
    /// Every question was answered.
    Exhausted,
    /// The time limit ran out first.
    Expired,
}

impl fmt::Display for TerminalReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TerminalReason::Exhausted => f.write_str("all questions answered"),
            TerminalReason::Expired => f.write_str("time is up"),
        }
    }
}

/// What the quiz should present next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizStep<'a> {
    Question { index: usize, question: &'a Question },
    Terminal(TerminalReason),
}

/// Snapshot of quiz progress, useful for UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizProgress {
    pub total: usize,
    pub answered: usize,
    pub remaining: usize,
    pub score: u32,
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// One timed attempt at a fixed, pre-sampled question set.
///
/// The question order is fixed at creation. `submit_answer` is the only
/// transition that moves the cursor; expiry is derived from the start time
/// and is checked on every query rather than stored.
#[derive(Clone)]
pub struct QuizSession {
    id: SessionId,
    questions: Vec<Question>,
    cursor: usize,
    score: u32,
    answers: Vec<AnswerRecord>,
    started_at: DateTime<Utc>,
    time_limit: Duration,
    pass_mark_percent: u8,
    recorded: bool,
}

impl QuizSession {
    /// Create a session over `questions`, keeping at most `settings.sample_size()`
    /// of them in the given order.
    ///
    /// `started_at` should come from the services layer clock.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::Empty` if no questions are provided.
    pub fn new(
        mut questions: Vec<Question>,
        settings: &QuizSettings,
        started_at: DateTime<Utc>,
    ) -> Result<Self, QuizError> {
        let limit = usize::try_from(settings.sample_size()).unwrap_or(usize::MAX);
        questions.truncate(limit);

        if questions.is_empty() {
            return Err(QuizError::Empty);
        }

        Ok(Self {
            id: SessionId::random(),
            questions,
            cursor: 0,
            score: 0,
            answers: Vec::new(),
            started_at,
            time_limit: settings.time_limit(),
            pass_mark_percent: settings.pass_mark_percent(),
            recorded: false,
        })
    }

    #[must_use]
    pub fn id(&self) -> SessionId {
        self.id
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Number of questions in this session.
    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Index of the next unanswered question.
    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn answers(&self) -> &[AnswerRecord] {
        &self.answers
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    #[must_use]
    pub fn time_limit(&self) -> Duration {
        self.time_limit
    }

    #[must_use]
    pub fn pass_mark_percent(&self) -> u8 {
        self.pass_mark_percent
    }

    /// True once the history entry for this session has been written.
    #[must_use]
    pub fn is_recorded(&self) -> bool {
        self.recorded
    }

    #[must_use]
    pub fn progress(&self) -> QuizProgress {
        QuizProgress {
            total: self.len(),
            answered: self.answers.len(),
            remaining: self.len().saturating_sub(self.cursor),
            score: self.score,
        }
    }

    /// `max(0, time_limit - (now - started_at))`.
    #[must_use]
    pub fn remaining_time(&self, now: DateTime<Utc>) -> Duration {
        let elapsed = elapsed_between(self.started_at, now);
        (self.time_limit - elapsed).max(Duration::zero())
    }

    #[must_use]
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.remaining_time(now) <= Duration::zero()
    }

    /// `Some` once no further answers are accepted.
    ///
    /// Exhaustion wins over expiry when both hold.
    #[must_use]
    pub fn terminal_reason(&self, now: DateTime<Utc>) -> Option<TerminalReason> {
        if self.cursor >= self.questions.len() {
            Some(TerminalReason::Exhausted)
        } else if self.is_expired(now) {
            Some(TerminalReason::Expired)
        } else {
            None
        }
    }

    #[must_use]
    pub fn is_terminal(&self, now: DateTime<Utc>) -> bool {
        self.terminal_reason(now).is_some()
    }

    /// The question at the cursor, or the terminal state.
    #[must_use]
    pub fn current_question(&self, now: DateTime<Utc>) -> QuizStep<'_> {
        if let Some(reason) = self.terminal_reason(now) {
            return QuizStep::Terminal(reason);
        }
        QuizStep::Question {
            index: self.cursor,
            question: &self.questions[self.cursor],
        }
    }

    /// Grade `selected` against the current question and advance the cursor.
    ///
    /// Callers must submit each question at most once; the session does not
    /// deduplicate.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::Finished` if the session is terminal at `now`.
    /// Returns `QuizError::InvalidSelection` if `selected` is none of the three
    /// options. Neither error changes any state.
    pub fn submit_answer(
        &mut self,
        selected: &str,
        now: DateTime<Utc>,
    ) -> Result<&AnswerRecord, QuizError> {
        if let Some(reason) = self.terminal_reason(now) {
            return Err(QuizError::Finished(reason));
        }

        let question = &self.questions[self.cursor];
        if question.letter_of(selected).is_none() {
            return Err(QuizError::InvalidSelection {
                selected: selected.to_string(),
            });
        }

        let record = AnswerRecord::new(self.cursor, question, selected);
        if record.is_correct() {
            self.score += 1;
        }
        self.answers.push(record);
        self.cursor += 1;

        self.answers.last().ok_or(QuizError::Empty)
    }

    /// Answered questions whose selection differs from the correct option,
    /// in answering order. Each call starts a fresh pass.
    #[must_use]
    pub fn wrong_answers(&self) -> WrongAnswers<'_> {
        WrongAnswers {
            inner: self.answers.iter(),
        }
    }

    #[must_use]
    pub fn status(&self) -> QuizStatus {
        let total = u32::try_from(self.len()).unwrap_or(u32::MAX);
        QuizStatus::from_score(self.score, total, self.pass_mark_percent)
    }

    /// Build the history row for a terminal session.
    ///
    /// Unanswered questions after an expiry still count towards the total.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::NotFinished` if the session is still active at `completed_at`.
    pub fn history_entry(&self, completed_at: DateTime<Utc>) -> Result<HistoryEntry, QuizError> {
        if !self.is_terminal(completed_at) {
            return Err(QuizError::NotFinished);
        }
        let total = u32::try_from(self.len()).unwrap_or(u32::MAX);
        Ok(HistoryEntry::new(
            self.id,
            completed_at,
            self.score,
            total,
            self.status(),
        ))
    }

    /// Mark the session as written to history. Permanent for this session.
    pub fn mark_recorded(&mut self) {
        self.recorded = true;
    }
}

impl fmt::Debug for QuizSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuizSession")
            .field("id", &self.id)
            .field("questions_len", &self.questions.len())
            .field("cursor", &self.cursor)
            .field("score", &self.score)
            .field("answers_len", &self.answers.len())
            .field("started_at", &self.started_at)
            .field("recorded", &self.recorded)
            .finish_non_exhaustive()
    }
}

/// Iterator over incorrect answers of a session.
#[derive(Debug, Clone)]
pub struct WrongAnswers<'a> {
    inner: std::slice::Iter<'a, AnswerRecord>,
}

impl<'a> Iterator for WrongAnswers<'a> {
    type Item = &'a AnswerRecord;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.by_ref().find(|record| !record.is_correct())
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
