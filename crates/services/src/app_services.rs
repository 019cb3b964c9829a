use std::sync::Arc;

use storage::repository::Storage;
use study_core::model::QuizSettings;

use crate::Clock;
use crate::assistant_service::AssistantService;
use crate::essay_service::EssayService;
use crate::history_service::HistoryService;
use crate::quiz::QuizService;
use crate::reference_service::ReferenceService;

/// Assembles the app-facing services over one storage backend.
#[derive(Clone)]
pub struct AppServices {
    quiz: Arc<QuizService>,
    essays: Arc<EssayService>,
    history: Arc<HistoryService>,
    reference: Arc<ReferenceService>,
    assistant: Arc<AssistantService>,
}

impl AppServices {
    #[must_use]
    pub fn new(
        storage: &Storage,
        clock: Clock,
        settings: QuizSettings,
        reference: ReferenceService,
        assistant: AssistantService,
    ) -> Self {
        let quiz = Arc::new(QuizService::new(
            clock,
            settings,
            Arc::clone(&storage.questions),
            Arc::clone(&storage.history),
        ));
        let essays = Arc::new(EssayService::new(Arc::clone(&storage.essays)));
        let history = Arc::new(HistoryService::new(Arc::clone(&storage.history)));

        Self {
            quiz,
            essays,
            history,
            reference: Arc::new(reference),
            assistant: Arc::new(assistant),
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
}
