use std::sync::Arc;

use tracing::{debug, warn};

use storage::repository::{EssayRepository, StorageError};
use study_core::model::{EssayId, EssayReview};

use crate::error::EssayServiceError;

/// Menu entry for one essay topic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EssayTopic {
    pub id: EssayId,
    pub title: String,
    pub reviewed: bool,
}

/// Loads essays and drives the step-by-step review.
#[derive(Clone)]
pub struct EssayService {
    essays: Arc<dyn EssayRepository>,
}

impl EssayService {
    #[must_use]
    pub fn new(essays: Arc<dyn EssayRepository>) -> Self {
        Self { essays }
    }

    /// Every topic in source order, flagged when already reviewed.
    ///
    /// # Errors
    ///
    /// Returns `EssayServiceError::DataUnavailable` if the essay source cannot be read.
    pub async fn list_topics(
        &self,
        review: &EssayReview,
    ) -> Result<Vec<EssayTopic>, EssayServiceError> {
        let essays = self.essays.list_essays().await.map_err(|e| {
            warn!(error = %e, "essay source unavailable");
            EssayServiceError::DataUnavailable(e)
        })?;

        Ok(essays
            .into_iter()
            .map(|essay| EssayTopic {
                id: essay.id(),
                reviewed: review.is_reviewed(essay.id()),
                title: essay.title().to_owned(),
            })
            .collect())
    }

    /// Open `id` in `review` at its first version.
    ///
    /// # Errors
    ///
    /// Returns `EssayServiceError::UnknownEssay` if no such essay exists, or
    /// `EssayServiceError::DataUnavailable` if the source cannot be read.
    pub async fn open(
        &self,
        review: &mut EssayReview,
        id: EssayId,
    ) -> Result<(), EssayServiceError> {
        let essay = self.essays.get_essay(id).await.map_err(|e| match e {
            StorageError::NotFound => EssayServiceError::UnknownEssay(id),
            other => EssayServiceError::DataUnavailable(other),
        })?;
        debug!(essay = %id, title = essay.title(), "essay opened");
        review.open(essay);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use storage::repository::InMemoryRepository;
    use study_core::model::{Essay, EssayReviewMode};

    fn build_essay(id: u64) -> Essay {
        Essay::new(
            EssayId::new(id),
            format!("Topic {id}"),
            "Q",
            ["one".into(), "two".into(), "three".into()],
            None,
        )
        .unwrap()
    }

    fn service() -> EssayService {
        let repo = InMemoryRepository::new().with_essays(vec![build_essay(0), build_essay(1)]);
        EssayService::new(Arc::new(repo))
    }

    #[tokio::test]
    async fn reviewed_topics_are_flagged() {
        let svc = service();
        let mut review = EssayReview::new();

        svc.open(&mut review, EssayId::new(1)).await.unwrap();
        review.continue_reveal().unwrap();
        review.continue_reveal().unwrap();
        review.return_to_menu().unwrap();

        let topics = svc.list_topics(&review).await.unwrap();
        assert_eq!(topics.len(), 2);
        assert!(!topics[0].reviewed);
        assert!(topics[1].reviewed);
    }

    #[tokio::test]
    async fn opening_unknown_essay_fails_without_changing_mode() {
        let svc = service();
        let mut review = EssayReview::new();
        let err = svc.open(&mut review, EssayId::new(7)).await.unwrap_err();
        assert!(matches!(err, EssayServiceError::UnknownEssay(id) if id == EssayId::new(7)));
        assert_eq!(review.mode(), &EssayReviewMode::Menu);
    }
}
