use std::sync::Arc;

use chrono::Duration;
use tracing::{debug, info, warn};

use storage::repository::{HistoryRepository, QuestionRepository, StorageError};
use study_core::model::{AnswerRecord, HistoryEntry, QuizSession, QuizSettings, QuizStep};

use super::plan::QuestionSampler;
use crate::Clock;
use crate::error::QuizServiceError;

/// Orchestrates quiz start, answering, and one-time history recording.
///
/// The session itself is owned by the caller and passed in explicitly.
#[derive(Clone)]
pub struct QuizService {
    clock: Clock,
    settings: QuizSettings,
    questions: Arc<dyn QuestionRepository>,
    history: Arc<dyn HistoryRepository>,
    sampler: QuestionSampler,
}

impl QuizService {
    #[must_use]
    pub fn new(
        clock: Clock,
        settings: QuizSettings,
        questions: Arc<dyn QuestionRepository>,
        history: Arc<dyn HistoryRepository>,
    ) -> Self {
        Self {
            clock,
            settings,
            questions,
            history,
            sampler: QuestionSampler::new(),
        }
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.sampler = self.sampler.with_seed(seed);
        self
    }

    #[must_use]
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    #[must_use]
    pub fn settings(&self) -> &QuizSettings {
        &self.settings
    }

    /// Sample a fresh question set and start the timer.
    ///
    /// # Errors
    ///
    /// Returns `QuizServiceError::DataUnavailable` if the question source cannot
    /// be read or has no questions.
    pub async fn start(&self) -> Result<QuizSession, QuizServiceError> {
        let available = self.questions.list_questions().await.map_err(|e| {
            warn!(error = %e, "question source unavailable");
            QuizServiceError::DataUnavailable(e)
        })?;
        if available.is_empty() {
            warn!("question source is empty");
            return Err(QuizServiceError::DataUnavailable(StorageError::NotFound));
        }

        let size = usize::try_from(self.settings.sample_size()).unwrap_or(usize::MAX);
        let available_len = available.len();
        let drawn = self.sampler.sample(available, size);
        let session = QuizSession::new(drawn, &self.settings, self.clock.now())?;

        info!(
            session = %session.id(),
            questions = session.len(),
            available = available_len,
            "quiz started"
        );
        Ok(session)
    }

    /// Discard `previous` and start over with a new sample and timer.
    ///
    /// History already written for `previous` is kept.
    ///
    /// # Errors
    ///
    /// Same as [`QuizService::start`].
    pub async fn reset(&self, previous: QuizSession) -> Result<QuizSession, QuizServiceError> {
        debug!(session = %previous.id(), "quiz reset");
        drop(previous);
        self.start().await
    }

    #[must_use]
    pub fn current_question<'a>(&self, session: &'a QuizSession) -> QuizStep<'a> {
        session.current_question(self.clock.now())
    }

    #[must_use]
    pub fn remaining_time(&self, session: &QuizSession) -> Duration {
        session.remaining_time(self.clock.now())
    }

    /// Grade `selected` against the current question and advance.
    ///
    /// # Errors
    ///
    /// Returns `QuizServiceError::Quiz` for an invalid selection or a finished
    /// session; the session is unchanged in both cases.
    pub fn submit_answer(
        &self,
        session: &mut QuizSession,
        selected: &str,
    ) -> Result<AnswerRecord, QuizServiceError> {
        let record = session.submit_answer(selected, self.clock.now())?.clone();
        debug!(
            session = %session.id(),
            cursor = session.cursor(),
            correct = record.is_correct(),
            "answer recorded"
        );
        Ok(record)
    }

    /// Write the history entry for a terminal session, exactly once.
    ///
    /// Returns `None` if the session was already recorded. A failed append
    /// leaves the session unrecorded so the call can be retried.
    ///
    /// # Errors
    ///
    /// Returns `QuizServiceError::Quiz` if the session is still in progress.
    /// Returns `QuizServiceError::Storage` if the history sink rejects the entry.
    pub async fn finalize(
        &self,
        session: &mut QuizSession,
    ) -> Result<Option<HistoryEntry>, QuizServiceError> {
        if session.is_recorded() {
            return Ok(None);
        }

        let entry = session.history_entry(self.clock.now())?;
        self.history.append_entry(&entry).await?;
        session.mark_recorded();

        info!(
            session = %session.id(),
            score = %entry.score_label(),
            status = entry.status().as_str(),
            "quiz finalized"
        );
        Ok(Some(entry))
    }
}
