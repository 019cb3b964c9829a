mod answer;
pub mod content;
mod essay;
mod history;
mod ids;
mod question;
mod quiz;
mod reveal;
mod settings;

pub use content::{ExternalLink, GuideDocument, LinkError, TextError};
pub use ids::{EssayId, ParseIdError, QuestionId, SessionId};

pub use answer::AnswerRecord;
pub use essay::{Essay, EssayReview, EssayReviewError, EssayReviewMode, EssayVersion};
pub use history::{HistoryEntry, QuizStatus};
pub use question::{OptionLetter, Question, QuestionError, REFERENCE_NOT_AVAILABLE};
pub use quiz::{QuizError, QuizProgress, QuizSession, QuizStep, TerminalReason, WrongAnswers};
pub use reveal::StepReveal;
pub use settings::{QuizSettings, SettingsError};
