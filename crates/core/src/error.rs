use thiserror::Error;

use crate::model::content::LinkError;
use crate::model::{EssayReviewError, QuestionError, QuizError, SettingsError, TextError};

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Question(#[from] QuestionError),
    #[error(transparent)]
    Quiz(#[from] QuizError),
    #[error(transparent)]
    Settings(#[from] SettingsError),
    #[error(transparent)]
    EssayReview(#[from] EssayReviewError),
    #[error(transparent)]
    TextValidation(#[from] TextError),
    #[error(transparent)]
    Link(#[from] LinkError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::QuizSettings;

    fn settings(sample: u32) -> Result<QuizSettings, Error> {
        Ok(QuizSettings::new(sample, 1200, 75)?)
    }

    #[test]
    fn domain_errors_convert_with_question_mark() {
        assert!(settings(20).is_ok());
        assert!(matches!(
            settings(0),
            Err(Error::Settings(SettingsError::InvalidSampleSize))
        ));
    }
}
