use chrono::Duration;
use services::{AssistantConfig, AssistantService, Clock};
use storage::repository::{HistoryRepository, InMemoryRepository, Storage};
use study_core::model::{
    Essay, EssayId, EssayReview, HistoryEntry, OptionLetter, Question, QuestionId, QuizSession,
    QuizSettings, QuizStatus, SessionId,
};
use study_core::time::fixed_now;

use super::QuizIntent;
use super::test_harness::{Seed, ViewKind, setup_view_harness, setup_view_harness_with};

fn build_question(id: u64) -> Question {
    Question::new(
        QuestionId::new(id),
        format!("Question {id}?"),
        [format!("right {id}"), format!("wrong {id}"), format!("other {id}")],
        OptionLetter::A,
        Some(format!("CAR M.{id}")),
    )
    .unwrap()
}

fn build_essay(id: u64) -> Essay {
    Essay::new(
        EssayId::new(id),
        format!("Topic {id}"),
        format!("Explain topic {id}."),
        ["draft".into(), "middle".into(), "**full**".into()],
        Some("CAR 145.A.30".into()),
    )
    .unwrap()
}

fn question_storage(n: u64) -> Storage {
    Storage::from_repo(InMemoryRepository::with_questions(
        (0..n).map(build_question).collect(),
    ))
}

fn seeded_session(n: u64) -> QuizSession {
    let questions = (0..n).map(build_question).collect();
    QuizSession::new(questions, &QuizSettings::exam_defaults(), fixed_now()).unwrap()
}

#[tokio::test(flavor = "current_thread")]
async fn home_view_smoke_lists_menu() {
    let mut harness = setup_view_harness(
        ViewKind::Home,
        Storage::in_memory(),
        Clock::fixed(fixed_now()),
        Seed::default(),
    );
    harness.rebuild();
    let html = harness.render();
    for label in [
        "Start MCQ Practice Quiz",
        "Essay Questions Review",
        "View My Results",
        "Study Guide / References",
        "Ask a Module 10 Question",
        "About This App",
        "Visit GCAA Website",
    ] {
        assert!(html.contains(label), "missing {label} in {html}");
    }
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_starts_session() {
    let mut harness = setup_view_harness(
        ViewKind::Quiz,
        question_storage(3),
        Clock::fixed(fixed_now()),
        Seed::default(),
    );
    harness.rebuild();
    harness.drive_async().await;
    harness.drive_async().await;

    let html = harness.render();
    assert!(html.contains("Q1:"), "missing first question in {html}");
    assert!(html.contains("Time Remaining: 20:00"), "missing timer in {html}");
    assert!(html.contains("(3 out of 3)"), "missing pass mark in {html}");
    assert!(html.contains("training purposes only"), "missing disclaimer in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_renders_error_state() {
    let mut harness = setup_view_harness(
        ViewKind::Quiz,
        Storage::in_memory(),
        Clock::fixed(fixed_now()),
        Seed::default(),
    );
    harness.rebuild();
    harness.drive_async().await;

    let html = harness.render();
    assert!(html.contains("Could not load the study data"), "missing error in {html}");
    assert!(html.contains("Retry"), "missing retry in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_intents_answer_finalize_and_retry() {
    let mut harness = setup_view_harness(
        ViewKind::Quiz,
        question_storage(2),
        Clock::fixed(fixed_now()),
        Seed {
            quiz: Some(seeded_session(2)),
            essays: None,
        },
    );
    harness.rebuild();
    harness.drive_async().await;
    assert!(harness.render().contains("Q1: Question 0?"));

    harness.dispatch_quiz(QuizIntent::Choose {
        cursor: 0,
        text: "right 0".into(),
    });
    // A second trigger for the same question is ignored.
    harness.dispatch_quiz(QuizIntent::Choose {
        cursor: 0,
        text: "wrong 0".into(),
    });
    assert!(harness.render().contains("Q2: Question 1?"));

    harness.dispatch_quiz(QuizIntent::Choose {
        cursor: 1,
        text: "wrong 1".into(),
    });
    harness.drive_async().await;
    harness.drive_async().await;

    let html = harness.render();
    assert!(html.contains("You scored 1 out of 2"), "missing score in {html}");
    assert!(!html.contains("Your answer:"), "wrong answers shown too early in {html}");
    let entries = harness.storage.history.list_entries().await.unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].score_label(), "1 / 2");

    harness.dispatch_quiz(QuizIntent::ShowWrongAnswers);
    let html = harness.render();
    assert!(html.contains("Q2: Question 1?"), "missing wrong question in {html}");
    assert!(html.contains("wrong 1"), "missing selected answer in {html}");
    assert!(html.contains("CAR M.1"), "missing reference in {html}");

    harness.dispatch_quiz(QuizIntent::Retry);
    harness.drive_async().await;
    harness.drive_async().await;

    let html = harness.render();
    assert!(html.contains("Q1:"), "missing fresh question in {html}");
    assert_eq!(harness.storage.history.list_entries().await.unwrap().len(), 1);
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_shows_time_up() {
    let mut harness = setup_view_harness(
        ViewKind::Quiz,
        question_storage(2),
        Clock::fixed(fixed_now() + Duration::seconds(1200)),
        Seed {
            quiz: Some(seeded_session(2)),
            essays: None,
        },
    );
    harness.rebuild();
    harness.drive_async().await;
    harness.drive_async().await;

    let html = harness.render();
    assert!(html.contains("Time is up!"), "missing expiry notice in {html}");
    assert!(html.contains("Time Remaining: 00:00"), "missing timer in {html}");
    assert!(html.contains("You scored 0 out of 2"), "missing score in {html}");
    let entries = harness.storage.history.list_entries().await.unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].status(), QuizStatus::Fail);

    harness.dispatch_quiz(QuizIntent::Choose {
        cursor: 0,
        text: "right 0".into(),
    });
    let html = harness.render();
    assert!(html.contains("You scored 0 out of 2"), "score changed in {html}");
    assert!(!html.contains("Something went wrong"), "late click surfaced an error in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn results_view_smoke_renders_table() {
    let mut harness = setup_view_harness(
        ViewKind::Results,
        Storage::in_memory(),
        Clock::fixed(fixed_now()),
        Seed::default(),
    );
    let entry = HistoryEntry::new(SessionId::random(), fixed_now(), 15, 20, QuizStatus::Pass);
    harness.storage.history.append_entry(&entry).await.unwrap();

    harness.rebuild();
    harness.drive_async().await;

    let html = harness.render();
    assert!(html.contains("2023-11-14 22:13"), "missing date in {html}");
    assert!(html.contains("15 / 20"), "missing score in {html}");
    assert!(html.contains("✅ Pass"), "missing status in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn results_view_smoke_renders_empty_state() {
    let mut harness = setup_view_harness(
        ViewKind::Results,
        Storage::in_memory(),
        Clock::fixed(fixed_now()),
        Seed::default(),
    );
    harness.rebuild();
    harness.drive_async().await;

    let html = harness.render();
    assert!(html.contains("taken any quizzes yet"), "missing empty state in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn essays_view_smoke_lists_topics() {
    let repo = InMemoryRepository::new().with_essays(vec![build_essay(0), build_essay(1)]);
    let mut harness = setup_view_harness(
        ViewKind::Essays,
        Storage::from_repo(repo),
        Clock::fixed(fixed_now()),
        Seed::default(),
    );
    harness.rebuild();
    harness.drive_async().await;

    let html = harness.render();
    assert!(html.contains("Topic 0"), "missing topic in {html}");
    assert!(html.contains("Topic 1"), "missing topic in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn essays_view_smoke_reveals_first_version() {
    let mut review = EssayReview::new();
    review.open(build_essay(0));
    let repo = InMemoryRepository::new().with_essays(vec![build_essay(0)]);
    let mut harness = setup_view_harness(
        ViewKind::Essays,
        Storage::from_repo(repo),
        Clock::fixed(fixed_now()),
        Seed {
            quiz: None,
            essays: Some(review),
        },
    );
    harness.rebuild();
    harness.drive_async().await;

    let html = harness.render();
    assert!(html.contains("Explain topic 0."), "missing question in {html}");
    assert!(html.contains("Version 1 (Student Draft Style)"), "missing draft in {html}");
    assert!(html.contains("Continue to Version 2"), "missing continue in {html}");
    assert!(!html.contains("Version 2 (Mid-Level Answer)"), "revealed too much in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn study_guide_view_smoke_lists_documents() {
    let mut harness = setup_view_harness(
        ViewKind::StudyGuide,
        Storage::in_memory(),
        Clock::fixed(fixed_now()),
        Seed::default(),
    );
    harness.rebuild();

    let html = harness.render();
    assert!(html.contains("Download: GCAA Module 10 Essay Exam Guidance"));
    assert!(html.contains("Download: Writing a GCAA Module 10 Essay"));
    assert!(html.contains("Summary of Writing Advice"));
}

#[tokio::test(flavor = "current_thread")]
async fn about_and_website_views_smoke() {
    let mut about = setup_view_harness(
        ViewKind::About,
        Storage::in_memory(),
        Clock::fixed(fixed_now()),
        Seed::default(),
    );
    about.rebuild();
    assert!(about.render().contains("Important Notice"));

    let mut website = setup_view_harness(
        ViewKind::Website,
        Storage::in_memory(),
        Clock::fixed(fixed_now()),
        Seed::default(),
    );
    website.rebuild();
    let html = website.render();
    assert!(html.contains("https://www.gcaa.gov.ae/en/pages/default.aspx"), "missing link in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn assistant_view_smoke_explains_missing_key() {
    let mut harness = setup_view_harness(
        ViewKind::Assistant,
        Storage::in_memory(),
        Clock::fixed(fixed_now()),
        Seed::default(),
    );
    harness.rebuild();

    let html = harness.render();
    assert!(html.contains("STUDY_AI_API_KEY"), "missing setup hint in {html}");
    assert!(!html.contains("<textarea"), "input offered while disabled in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn assistant_view_smoke_offers_question_box() {
    let assistant = AssistantService::new(Some(AssistantConfig {
        base_url: "http://127.0.0.1:9/v1".into(),
        api_key: "test-key".into(),
        model: "test-model".into(),
    }));
    let mut harness = setup_view_harness_with(
        ViewKind::Assistant,
        Storage::in_memory(),
        Clock::fixed(fixed_now()),
        Seed::default(),
        assistant,
    );
    harness.rebuild();

    let html = harness.render();
    assert!(html.contains("<textarea"), "missing input in {html}");
    assert!(html.contains("Answers come from test-model"), "missing model note in {html}");
    assert!(!html.contains("STUDY_AI_API_KEY"), "setup hint shown while enabled in {html}");
}
