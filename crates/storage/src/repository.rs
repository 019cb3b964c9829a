use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use study_core::model::{Essay, EssayId, HistoryEntry, Question};
use thiserror::Error;

/// Errors surfaced by storage adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("not found")]
    NotFound,

    #[error("cannot read {path}: {reason}")]
    Io { path: String, reason: String },

    #[error("cannot parse {path}: {reason}")]
    Csv { path: String, reason: String },

    #[error("row {row} is malformed: {reason}")]
    Malformed { row: usize, reason: String },

    #[error("connection error: {0}")]
    Connection(String),
}

/// Source of multiple-choice questions.
#[async_trait]
pub trait QuestionRepository: Send + Sync {
    /// Every available question, in source order.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the source cannot be read or a row is malformed.
    async fn list_questions(&self) -> Result<Vec<Question>, StorageError>;
}

/// Source of essay topics.
#[async_trait]
pub trait EssayRepository: Send + Sync {
    /// Every essay, in source order.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the source cannot be read or a row is malformed.
    async fn list_essays(&self) -> Result<Vec<Essay>, StorageError>;

    /// Fetch one essay by id.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::NotFound` if missing, or other storage errors.
    async fn get_essay(&self, id: EssayId) -> Result<Essay, StorageError> {
        self.list_essays()
            .await?
            .into_iter()
            .find(|essay| essay.id() == id)
            .ok_or(StorageError::NotFound)
    }
}

/// Append-only record of completed quiz attempts.
#[async_trait]
pub trait HistoryRepository: Send + Sync {
    /// Append an entry and return its position in the history.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the entry cannot be stored.
    async fn append_entry(&self, entry: &HistoryEntry) -> Result<usize, StorageError>;

    /// All entries, oldest first.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the history cannot be read.
    async fn list_entries(&self) -> Result<Vec<HistoryEntry>, StorageError>;
}

/// Simple in-memory repository implementation for testing and the history sink.
#[derive(Clone, Default)]
pub struct InMemoryRepository {
    questions: Arc<Mutex<Vec<Question>>>,
    essays: Arc<Mutex<Vec<Essay>>>,
    history: Arc<Mutex<Vec<HistoryEntry>>>,
}

impl InMemoryRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_questions(questions: Vec<Question>) -> Self {
        Self {
            questions: Arc::new(Mutex::new(questions)),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_essays(self, essays: Vec<Essay>) -> Self {
        Self {
            essays: Arc::new(Mutex::new(essays)),
            ..self
        }
    }
}

fn poisoned<E: std::fmt::Display>(e: E) -> StorageError {
    StorageError::Connection(e.to_string())
}

#[async_trait]
impl QuestionRepository for InMemoryRepository {
    async fn list_questions(&self) -> Result<Vec<Question>, StorageError> {
        let guard = self.questions.lock().map_err(poisoned)?;
        Ok(guard.clone())
    }
}

#[async_trait]
impl EssayRepository for InMemoryRepository {
    async fn list_essays(&self) -> Result<Vec<Essay>, StorageError> {
        let guard = self.essays.lock().map_err(poisoned)?;
        Ok(guard.clone())
    }
}

#[async_trait]
impl HistoryRepository for InMemoryRepository {
    async fn append_entry(&self, entry: &HistoryEntry) -> Result<usize, StorageError> {
        let mut guard = self.history.lock().map_err(poisoned)?;
        guard.push(entry.clone());
        Ok(guard.len() - 1)
    }

    async fn list_entries(&self) -> Result<Vec<HistoryEntry>, StorageError> {
        let guard = self.history.lock().map_err(poisoned)?;
        Ok(guard.clone())
    }
}

/// Aggregates the repositories behind trait objects for easy backend swapping.
#[derive(Clone)]
pub struct Storage {
    pub questions: Arc<dyn QuestionRepository>,
    pub essays: Arc<dyn EssayRepository>,
    pub history: Arc<dyn HistoryRepository>,
}

impl Storage {
    #[must_use]
    pub fn in_memory() -> Self {
        Self::from_repo(InMemoryRepository::new())
    }

    #[must_use]
    pub fn from_repo(repo: InMemoryRepository) -> Self {
        let questions: Arc<dyn QuestionRepository> = Arc::new(repo.clone());
        let essays: Arc<dyn EssayRepository> = Arc::new(repo.clone());
        let history: Arc<dyn HistoryRepository> = Arc::new(repo);
        Self {
            questions,
            essays,
            history,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use study_core::model::{OptionLetter, QuestionId, QuizStatus, SessionId};
    use study_core::time::fixed_now;

    fn build_question(id: u64) -> Question {
        Question::new(
            QuestionId::new(id),
            "Q",
            ["a".into(), "b".into(), "c".into()],
            OptionLetter::C,
            None,
        )
        .unwrap()
    }

    fn build_essay(id: u64) -> Essay {
        Essay::new(
            EssayId::new(id),
            format!("Topic {id}"),
            "Q",
            ["1".into(), "2".into(), "3".into()],
            None,
        )
        .unwrap()
    }

    #[tokio::test]
    async fn history_is_append_only_and_ordered() {
        let repo = InMemoryRepository::new();
        let first = HistoryEntry::new(SessionId::random(), fixed_now(), 15, 20, QuizStatus::Pass);
        let second = HistoryEntry::new(SessionId::random(), fixed_now(), 3, 20, QuizStatus::Fail);

        assert_eq!(repo.append_entry(&first).await.unwrap(), 0);
        assert_eq!(repo.append_entry(&second).await.unwrap(), 1);

        let entries = repo.list_entries().await.unwrap();
        assert_eq!(entries, vec![first, second]);
    }

    #[tokio::test]
    async fn get_essay_finds_by_id() {
        let repo = InMemoryRepository::new().with_essays(vec![build_essay(0), build_essay(1)]);
        let essay = repo.get_essay(EssayId::new(1)).await.unwrap();
        assert_eq!(essay.title(), "Topic 1");
        let err = repo.get_essay(EssayId::new(9)).await.unwrap_err();
        assert!(matches!(err, StorageError::NotFound));
    }

    #[tokio::test]
    async fn storage_shares_one_backing_repo() {
        let repo = InMemoryRepository::with_questions(vec![build_question(0)]);
        let storage = Storage::from_repo(repo.clone());
        assert_eq!(storage.questions.list_questions().await.unwrap().len(), 1);

        let entry = HistoryEntry::new(SessionId::random(), fixed_now(), 1, 1, QuizStatus::Pass);
        storage.history.append_entry(&entry).await.unwrap();
        assert_eq!(repo.list_entries().await.unwrap().len(), 1);
    }
}
