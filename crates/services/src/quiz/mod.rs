mod plan;
mod workflow;

// Public API of the quiz subsystem.
pub use crate::error::QuizServiceError;
pub use plan::QuestionSampler;
pub use workflow::QuizService;
