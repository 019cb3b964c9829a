use std::path::{Path, PathBuf};

use async_trait::async_trait;
use study_core::model::Question;

use super::mapping::RawQuestion;
use super::read_rows;
use crate::repository::{QuestionRepository, StorageError};

/// Questions from a sheet with columns
/// `question, option_a, option_b, option_c, correct_answer[, reference]`.
#[derive(Debug, Clone)]
pub struct CsvQuestionSource {
    path: PathBuf,
}

impl CsvQuestionSource {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl QuestionRepository for CsvQuestionSource {
    async fn list_questions(&self) -> Result<Vec<Question>, StorageError> {
        read_rows::<RawQuestion>(&self.path)?
            .into_iter()
            .map(|(row, raw)| raw.into_question(row))
            .collect()
    }
}
