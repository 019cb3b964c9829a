#![forbid(unsafe_code)]

pub mod app_services;
pub mod assistant_service;
pub mod error;
pub mod essay_service;
pub mod history_service;
pub mod quiz;
pub mod reference_service;

pub use study_core::Clock;

pub use app_services::AppServices;
pub use assistant_service::{AssistantConfig, AssistantService};
pub use error::{
    AssistantError, EssayServiceError, HistoryServiceError, QuizServiceError, ReferenceError,
};
pub use essay_service::{EssayService, EssayTopic};
pub use history_service::HistoryService;
pub use quiz::{QuestionSampler, QuizService};
pub use reference_service::ReferenceService;
