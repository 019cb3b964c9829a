use dioxus::prelude::*;

use study_core::model::EssayId;

use crate::context::{AppContext, StudyState};
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{EssayPageVm, EssayTopicVm, map_essay_topics, project_essay};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EssayIntent {
    Open(EssayId),
    Continue,
    ReturnToMenu,
}

#[component]
pub fn EssaysView() -> Element {
    let ctx = use_context::<AppContext>();
    let study = use_context::<StudyState>();
    let essays = ctx.essays();
    let review = study.essays;
    let error = use_signal(|| None::<ViewError>);

    let essays_for_topics = essays.clone();
    let topics = use_resource(move || {
        let essays = essays_for_topics.clone();
        async move {
            // Re-read so the reviewed flags follow the review state.
            let snapshot = review.cloned();
            let topics = essays
                .list_topics(&snapshot)
                .await
                .map_err(|e| ViewError::from(&e))?;
            Ok::<_, ViewError>(map_essay_topics(&topics))
        }
    });
    let state = view_state_from_resource(topics);

    let dispatch_intent = use_callback(move |intent: EssayIntent| {
        let mut review = review;
        let mut error = error;
        match intent {
            EssayIntent::Open(id) => {
                let essays = essays.clone();
                spawn(async move {
                    let mut next = (*review.peek()).clone();
                    match essays.open(&mut next, id).await {
                        Ok(()) => {
                            review.set(next);
                            error.set(None);
                        }
                        Err(e) => error.set(Some(ViewError::from(&e))),
                    }
                });
            }
            EssayIntent::Continue => {
                if review.write().continue_reveal().is_err() {
                    error.set(Some(ViewError::Unknown));
                }
            }
            EssayIntent::ReturnToMenu => {
                if review.write().return_to_menu().is_err() {
                    error.set(Some(ViewError::Unknown));
                }
            }
        }
    });

    let page = project_essay(&review.read());

    rsx! {
        div { class: "page essays-page",
            if let Some(err) = *error.read() {
                p { class: "quiz-warning", "{err.message()}" }
            }
            if let Some(page) = page {
                EssayPage { page, on_intent: dispatch_intent }
            } else {
                h2 { "📚 Essay Topics" }
                match state {
                    ViewState::Idle => rsx! {
                        p { "Idle" }
                    },
                    ViewState::Loading => rsx! {
                        p { "Loading..." }
                    },
                    ViewState::Ready(topics) => rsx! {
                        EssayMenu { topics, on_intent: dispatch_intent }
                    },
                    ViewState::Error(err) => rsx! {
                        p { "{err.message()}" }
                    },
                }
            }
        }
    }
}

#[component]
fn EssayMenu(topics: Vec<EssayTopicVm>, on_intent: EventHandler<EssayIntent>) -> Element {
    rsx! {
        p { "Select a topic to view its essay:" }
        if topics.is_empty() {
            p { "No essay topics available." }
        }
        div { class: "essay-topics",
            for topic in topics {
                button {
                    class: "btn btn-secondary",
                    r#type: "button",
                    onclick: move |_| on_intent.call(EssayIntent::Open(topic.id)),
                    "{topic.label}"
                }
            }
        }
    }
}

#[component]
fn EssayPage(page: EssayPageVm, on_intent: EventHandler<EssayIntent>) -> Element {
    rsx! {
        h3 { "{page.question}" }
        for version in page.versions {
            div { class: "essay-version",
                h4 { "{version.heading}" }
                div { dangerous_inner_html: "{version.body_html}" }
            }
        }
        if let Some(reference) = page.reference {
            p { "Reference: " code { "{reference}" } }
        }
        if let Some(label) = page.continue_label {
            button {
                class: "btn",
                r#type: "button",
                onclick: move |_| on_intent.call(EssayIntent::Continue),
                "{label}"
            }
        }
        if page.can_return {
            button {
                class: "btn btn-secondary",
                r#type: "button",
                onclick: move |_| on_intent.call(EssayIntent::ReturnToMenu),
                "🔙 Return to Menu"
            }
        }
    }
}
