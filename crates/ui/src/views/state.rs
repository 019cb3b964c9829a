use dioxus::prelude::*;
use services::{EssayServiceError, HistoryServiceError, QuizServiceError, ReferenceError};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewError {
    DataUnavailable,
    InvalidSelection,
    Unknown,
}

impl ViewError {
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Self::DataUnavailable => "❌ Could not load the study data. Check the data files and try again.",
            Self::InvalidSelection => "That answer is not one of the options. Please choose again.",
            Self::Unknown => "Something went wrong. Please try again.",
        }
    }
}

impl From<&QuizServiceError> for ViewError {
    fn from(err: &QuizServiceError) -> Self {
        if err.is_invalid_selection() {
            return Self::InvalidSelection;
        }
        match err {
            QuizServiceError::DataUnavailable(_) => Self::DataUnavailable,
            _ => Self::Unknown,
        }
    }
}

impl From<&EssayServiceError> for ViewError {
    fn from(err: &EssayServiceError) -> Self {
        match err {
            EssayServiceError::DataUnavailable(_) => Self::DataUnavailable,
            _ => Self::Unknown,
        }
    }
}

impl From<&HistoryServiceError> for ViewError {
    fn from(_: &HistoryServiceError) -> Self {
        Self::Unknown
    }
}

impl From<&ReferenceError> for ViewError {
    fn from(err: &ReferenceError) -> Self {
        match err {
            ReferenceError::DataUnavailable { .. } => Self::DataUnavailable,
            _ => Self::Unknown,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ViewState<T> {
    Idle,
    Loading,
    Ready(T),
    Error(ViewError),
}

#[must_use]
pub fn view_state_from_resource<T: Clone>(
    resource: Resource<Result<T, ViewError>>,
) -> ViewState<T> {
    match resource.state().cloned() {
        UseResourceState::Pending => ViewState::Loading,
        UseResourceState::Ready => match resource.value().read().as_ref() {
            Some(Ok(data)) => ViewState::Ready(data.clone()),
            Some(Err(err)) => ViewState::Error(*err),
            None => ViewState::Error(ViewError::Unknown),
        },
        UseResourceState::Paused | UseResourceState::Stopped => ViewState::Idle,
    }
}
