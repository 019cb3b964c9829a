//! Shared error types for the services crate.

use std::path::PathBuf;

use thiserror::Error;

use storage::repository::StorageError;
use study_core::model::{EssayId, EssayReviewError, QuizError};

/// Errors emitted by `QuizService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum QuizServiceError {
    /// The question source is missing, unreadable, or has no rows.
    #[error("question data unavailable: {0}")]
    DataUnavailable(StorageError),
    #[error(transparent)]
    Quiz(#[from] QuizError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl QuizServiceError {
    /// True when the submitted text matched none of the options.
    #[must_use]
    pub fn is_invalid_selection(&self) -> bool {
        matches!(self, Self::Quiz(QuizError::InvalidSelection { .. }))
    }

    /// True when the session was already terminal, for example after expiry.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        matches!(self, Self::Quiz(QuizError::Finished(_)))
    }
}

/// Errors emitted by `EssayService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum EssayServiceError {
    #[error("essay data unavailable: {0}")]
    DataUnavailable(StorageError),
    #[error("no essay with id {0}")]
    UnknownEssay(EssayId),
    #[error(transparent)]
    Review(#[from] EssayReviewError),
}

/// Errors emitted by `HistoryService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum HistoryServiceError {
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors emitted by `ReferenceService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ReferenceError {
    #[error("no study guide named {0:?}")]
    UnknownDocument(String),
    #[error("document unavailable at {path}: {reason}")]
    DataUnavailable { path: PathBuf, reason: String },
}

/// Errors emitted by `AssistantService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AssistantError {
    #[error("the assistant is not configured")]
    Disabled,
    #[error("ask a question first")]
    EmptyPrompt,
    #[error("the assistant returned an empty response")]
    EmptyResponse,
    #[error("assistant request failed with status {0}")]
    HttpStatus(reqwest::StatusCode),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}
