use std::sync::Arc;

use dioxus::prelude::*;
use services::{AssistantService, EssayService, HistoryService, QuizService, ReferenceService};
use study_core::model::{EssayReview, QuizSession};

use crate::platform::LinkOpenerRef;

pub trait UiApp: Send + Sync {
    fn quiz(&self) -> Arc<QuizService>;
    fn essays(&self) -> Arc<EssayService>;
    fn history(&self) -> Arc<HistoryService>;
    fn reference(&self) -> Arc<ReferenceService>;
    fn assistant(&self) -> Arc<AssistantService>;
    fn link_opener(&self) -> LinkOpenerRef;
}

#[derive(Clone)]
pub struct AppContext {
    quiz: Arc<QuizService>,
    essays: Arc<EssayService>,
    history: Arc<HistoryService>,
    reference: Arc<ReferenceService>,
    assistant: Arc<AssistantService>,
    link_opener: LinkOpenerRef,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            quiz: app.quiz(),
            essays: app.essays(),
            history: app.history(),
            reference: app.reference(),
            assistant: app.assistant(),
            link_opener: app.link_opener(),
        }
    }

    #[must_use]
    pub fn quiz(&self) -> Arc<QuizService> {
        Arc::clone(&self.quiz)
    }

    #[must_use]
    pub fn essays(&self) -> Arc<EssayService> {
        Arc::clone(&self.essays)
    }

    #[must_use]
    pub fn history(&self) -> Arc<HistoryService> {
        Arc::clone(&self.history)
    }

    #[must_use]
    pub fn reference(&self) -> Arc<ReferenceService> {
        Arc::clone(&self.reference)
    }

    #[must_use]
    pub fn assistant(&self) -> Arc<AssistantService> {
        Arc::clone(&self.assistant)
    }

    #[must_use]
    pub fn link_opener(&self) -> LinkOpenerRef {
        Arc::clone(&self.link_opener)
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}

/// Per-window study state that survives moving between menu pages.
///
/// The quiz session is created lazily by the quiz page and replaced on retry.
#[derive(Clone, Copy)]
pub struct StudyState {
    pub quiz: Signal<Option<QuizSession>>,
    pub essays: Signal<EssayReview>,
}

impl StudyState {
    /// Must be called inside a component scope.
    #[must_use]
    pub fn new() -> Self {
        Self {
            quiz: Signal::new(None),
            essays: Signal::new(EssayReview::new()),
        }
    }
}
