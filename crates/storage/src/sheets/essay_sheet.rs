use std::path::{Path, PathBuf};

use async_trait::async_trait;
use study_core::model::Essay;
use tracing::warn;

use super::mapping::RawEssay;
use super::read_rows;
use crate::repository::{EssayRepository, StorageError};

/// Essays from a sheet with columns
/// `Title, Question, Version_1, Version_2, Version_3, Reference`.
///
/// A row with a blank title, question or version is skipped; the other rows
/// keep their row-based ids.
#[derive(Debug, Clone)]
pub struct CsvEssaySource {
    path: PathBuf,
}

impl CsvEssaySource {
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
impl EssayRepository for CsvEssaySource {
    async fn list_essays(&self) -> Result<Vec<Essay>, StorageError> {
        let mut essays = Vec::new();
        for (row, raw) in read_rows::<RawEssay>(&self.path)? {
            match raw.into_essay(row) {
                Ok(essay) => essays.push(essay),
                Err(e) => {
                    warn!(path = %self.path.display(), row, error = %e, "essay row skipped");
                }
            }
        }
        Ok(essays)
    }
}
