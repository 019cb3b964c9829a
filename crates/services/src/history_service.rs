use std::sync::Arc;

use storage::repository::HistoryRepository;
use study_core::model::HistoryEntry;

use crate::error::HistoryServiceError;

/// Read access to the results table.
#[derive(Clone)]
pub struct HistoryService {
    history: Arc<dyn HistoryRepository>,
}

impl HistoryService {
    #[must_use]
    pub fn new(history: Arc<dyn HistoryRepository>) -> Self {
        Self { history }
    }

    /// Every recorded attempt, oldest first.
    ///
    /// # Errors
    ///
    /// Returns `HistoryServiceError::Storage` if the history cannot be read.
    pub async fn list_entries(&self) -> Result<Vec<HistoryEntry>, HistoryServiceError> {
        Ok(self.history.list_entries().await?)
    }
}
