//! CSV-backed question and essay sources.
//!
//! Files are re-read on every call so edits to the sheets are picked up by the
//! next quiz or essay menu without restarting.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::repository::{
    EssayRepository, HistoryRepository, InMemoryRepository, QuestionRepository, Storage,
    StorageError,
};

mod essay_sheet;
mod mapping;
mod question_sheet;

pub use essay_sheet::CsvEssaySource;
pub use question_sheet::CsvQuestionSource;

fn read_file(path: &Path) -> Result<Vec<u8>, StorageError> {
    std::fs::read(path).map_err(|e| {
        warn!(path = %path.display(), error = %e, "sheet unreadable");
        StorageError::Io {
            path: path.display().to_string(),
            reason: e.to_string(),
        }
    })
}

/// Deserialize every data row of `path`, pairing each with its 0-based index.
fn read_rows<R: DeserializeOwned>(path: &Path) -> Result<Vec<(usize, R)>, StorageError> {
    let bytes = read_file(path)?;
    let text = mapping::decode_text(&bytes);

    let mut reader = ::csv::ReaderBuilder::new()
        .trim(::csv::Trim::Headers)
        .from_reader(text.as_bytes());

    let mut rows = Vec::new();
    for (index, record) in reader.deserialize::<R>().enumerate() {
        let raw = record.map_err(|e| {
            warn!(path = %path.display(), row = index, error = %e, "sheet row rejected");
            StorageError::Csv {
                path: path.display().to_string(),
                reason: e.to_string(),
            }
        })?;
        rows.push((index, raw));
    }
    debug!(path = %path.display(), rows = rows.len(), "sheet loaded");
    Ok(rows)
}

impl Storage {
    /// Build a `Storage` reading questions and essays from CSV files, with an
    /// in-memory history that lasts for the process.
    #[must_use]
    pub fn sheets(questions_path: impl Into<PathBuf>, essays_path: impl Into<PathBuf>) -> Self {
        let questions: Arc<dyn QuestionRepository> =
            Arc::new(CsvQuestionSource::new(questions_path));
        let essays: Arc<dyn EssayRepository> = Arc::new(CsvEssaySource::new(essays_path));
        let history: Arc<dyn HistoryRepository> = Arc::new(InMemoryRepository::new());
        Self {
            questions,
            essays,
            history,
        }
    }
}
