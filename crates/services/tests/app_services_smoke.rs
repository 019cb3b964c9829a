use services::{AppServices, AssistantService, Clock, ReferenceService};
use storage::repository::Storage;
use study_core::model::{EssayReview, QuizSettings};
use study_core::time::fixed_now;

#[tokio::test]
async fn services_share_one_history() {
    let storage = Storage::in_memory();
    let services = AppServices::new(
        &storage,
        Clock::fixed(fixed_now()),
        QuizSettings::exam_defaults(),
        ReferenceService::new(".", "."),
        AssistantService::disabled(),
    );

    assert!(services.quiz().start().await.is_err());
    assert!(services.history().list_entries().await.unwrap().is_empty());
    assert!(
        services
            .essays()
            .list_topics(&EssayReview::new())
            .await
            .unwrap()
            .is_empty()
    );
    assert_eq!(services.reference().documents().len(), 2);
    assert!(!services.assistant().enabled());
}
