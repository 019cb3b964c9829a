use std::time::Duration as StdDuration;

use dioxus::prelude::*;
use tracing::warn;

use study_core::model::{QuizStep, SessionId};

use crate::context::{AppContext, StudyState};
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{
    QuestionVm, QuizHeaderVm, QuizScreenVm, ResultStep, ResultsVm, project_quiz, results_reveal,
};

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QuizIntent {
    Choose { cursor: usize, text: String },
    ShowWrongAnswers,
    Retry,
}

#[component]
pub fn QuizView() -> Element {
    let ctx = use_context::<AppContext>();
    let study = use_context::<StudyState>();
    let quiz = ctx.quiz();
    let disclaimer = ctx.reference().disclaimer();
    let session = study.quiz;

    let error = use_signal(|| None::<ViewError>);
    let answered = use_signal(|| None::<(SessionId, usize)>);
    let results = use_signal(results_reveal);
    let finalizing = use_signal(|| None::<SessionId>);
    let mut tick = use_signal(|| 0_u64);

    use_future(move || async move {
        let mut interval = tokio::time::interval(StdDuration::from_secs(1));
        loop {
            interval.tick().await;
            *tick.write() += 1;
        }
    });

    let quiz_for_start = quiz.clone();
    let resource = use_resource(move || {
        let quiz = quiz_for_start.clone();
        let mut session = session;
        async move {
            if session.peek().is_some() {
                return Ok(());
            }
            let started = quiz.start().await.map_err(|e| ViewError::from(&e))?;
            session.set(Some(started));
            Ok::<_, ViewError>(())
        }
    });
    let state = view_state_from_resource(resource);

    // Records the attempt once the session turns terminal, by exhaustion or by the clock.
    let quiz_for_finalize = quiz.clone();
    use_effect(move || {
        let _ = tick();
        let pending = {
            let guard = session.read();
            let Some(current) = guard.as_ref() else {
                return;
            };
            let terminal = matches!(
                quiz_for_finalize.current_question(current),
                QuizStep::Terminal(_)
            );
            if current.is_recorded() || !terminal || *finalizing.peek() == Some(current.id()) {
                return;
            }
            current.clone()
        };

        let quiz = quiz_for_finalize.clone();
        let mut session = session;
        let mut finalizing = finalizing;
        let mut error = error;
        finalizing.set(Some(pending.id()));
        spawn(async move {
            let mut pending = pending;
            match quiz.finalize(&mut pending).await {
                Ok(_) => {
                    let mut guard = session.write();
                    if let Some(current) = guard.as_mut().filter(|s| s.id() == pending.id()) {
                        *current = pending;
                    }
                }
                Err(e) => {
                    warn!(error = %e, "quiz result not recorded");
                    finalizing.set(None);
                    error.set(Some(ViewError::from(&e)));
                }
            }
        });
    });

    let dispatch_intent = {
        let quiz = quiz.clone();
        use_callback(move |intent: QuizIntent| {
            let mut session = session;
            let mut error = error;
            let mut answered = answered;
            let mut results = results;
            let mut finalizing = finalizing;

            match intent {
                QuizIntent::Choose { cursor, text } => {
                    let mut guard = session.write();
                    let Some(current) = guard.as_mut() else {
                        return;
                    };
                    let key = (current.id(), cursor);
                    if current.cursor() != cursor || *answered.peek() == Some(key) {
                        return;
                    }
                    match quiz.submit_answer(current, &text) {
                        Ok(_) => {
                            answered.set(Some(key));
                            error.set(None);
                        }
                        // A click racing the clock; the results screen takes over.
                        Err(e) if e.is_finished() => {}
                        Err(e) => error.set(Some(ViewError::from(&e))),
                    }
                }
                QuizIntent::ShowWrongAnswers => {
                    results.write().advance();
                }
                QuizIntent::Retry => {
                    let quiz = quiz.clone();
                    spawn(async move {
                        let previous = session.write().take();
                        let next = match previous {
                            Some(previous) => quiz.reset(previous).await,
                            None => quiz.start().await,
                        };
                        results.set(results_reveal());
                        answered.set(None);
                        finalizing.set(None);
                        match next {
                            Ok(fresh) => {
                                session.set(Some(fresh));
                                error.set(None);
                            }
                            Err(e) => error.set(Some(ViewError::from(&e))),
                        }
                    });
                }
            }
        })
    };

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<QuizTestHandles>() {
                handles.register(dispatch_intent);
            }
        }
    }

    let _ = tick();
    let screen = session.read().as_ref().map(|current| {
        let total = u32::try_from(current.len()).unwrap_or(u32::MAX);
        let header = QuizHeaderVm::new(quiz.settings(), total, quiz.remaining_time(current));
        (header, project_quiz(current, quiz.current_question(current)))
    });
    let session_id = session.read().as_ref().map(|s| s.id());
    let locked_cursor = answered()
        .filter(|(id, _)| Some(*id) == session_id)
        .map(|(_, cursor)| cursor);
    let show_wrong = results.read().visible().contains(&ResultStep::WrongAnswers);

    rsx! {
        div { class: "page quiz-page",
            h2 { "📝 MCQ Practice Quiz" }
            match state {
                ViewState::Idle => rsx! {
                    p { "Idle" }
                },
                ViewState::Loading => rsx! {
                    p { "Loading..." }
                },
                ViewState::Error(err) => rsx! {
                    p { class: "quiz-warning", "{err.message()}" }
                    button {
                        class: "btn btn-secondary",
                        r#type: "button",
                        onclick: move |_| {
                            let mut resource = resource;
                            resource.restart();
                        },
                        "Retry"
                    }
                },
                ViewState::Ready(()) => rsx! {
                    if let Some((header, screen)) = screen {
                        p { class: "quiz-timer", "{header.timer_label}" }
                        p { class: "notice notice--disclaimer", "{disclaimer}" }
                        p { class: "notice notice--time", "{header.time_note}" }
                        p { class: "notice notice--pass", "{header.pass_note}" }
                        if let Some(err) = *error.read() {
                            p { class: "quiz-warning", "{err.message()}" }
                        }
                        match screen {
                            QuizScreenVm::Question(question) => rsx! {
                                QuestionCard { question, locked_cursor, on_intent: dispatch_intent }
                            },
                            QuizScreenVm::Results(results) => rsx! {
                                ResultsPanel { results, show_wrong, on_intent: dispatch_intent }
                            },
                        }
                    } else {
                        if let Some(err) = *error.read() {
                            p { class: "quiz-warning", "{err.message()}" }
                        }
                        p { "Loading..." }
                    }
                },
            }
        }
    }
}

#[component]
fn QuestionCard(
    question: QuestionVm,
    locked_cursor: Option<usize>,
    on_intent: EventHandler<QuizIntent>,
) -> Element {
    let cursor = question.cursor;
    let disabled = locked_cursor == Some(cursor);
    rsx! {
        div { class: "quiz-question",
            h3 { "{question.heading}" }
            p { "Choose one:" }
            div { class: "quiz-options", role: "radiogroup",
                for option in question.options {
                    button {
                        class: "quiz-option",
                        r#type: "button",
                        role: "radio",
                        disabled,
                        onclick: {
                            let text = option.clone();
                            move |_| on_intent.call(QuizIntent::Choose { cursor, text: text.clone() })
                        },
                        "{option}"
                    }
                }
            }
        }
    }
}

#[component]
fn ResultsPanel(results: ResultsVm, show_wrong: bool, on_intent: EventHandler<QuizIntent>) -> Element {
    let banner_class = if results.passed {
        "quiz-banner"
    } else {
        "quiz-banner quiz-banner--fail"
    };
    rsx! {
        div { class: "quiz-results",
            if results.expired {
                p { class: "quiz-warning", "⏱️ Time is up! Showing your results." }
            }
            p { class: "{banner_class}", "{results.score_line}" }
            if show_wrong {
                h3 { "❌ Questions you got wrong:" }
                if results.wrong.is_empty() {
                    p { "None. Every answer was correct." }
                }
                for wrong in results.wrong {
                    div { class: "wrong-answer",
                        p { strong { "{wrong.heading}" } }
                        p { "Your answer: " code { "{wrong.selected}" } }
                        p { "Correct answer: " code { "{wrong.correct}" } }
                        p { "Reference: " code { "{wrong.reference}" } }
                    }
                }
            } else {
                button {
                    class: "btn btn-secondary",
                    r#type: "button",
                    onclick: move |_| on_intent.call(QuizIntent::ShowWrongAnswers),
                    "Review wrong answers"
                }
            }
            button {
                class: "btn",
                r#type: "button",
                onclick: move |_| on_intent.call(QuizIntent::Retry),
                "🔁 Retry Quiz"
            }
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct QuizTestHandles {
    dispatch: Rc<RefCell<Option<Callback<QuizIntent>>>>,
}

#[cfg(test)]
impl QuizTestHandles {
    pub(crate) fn register(&self, dispatch: Callback<QuizIntent>) {
        *self.dispatch.borrow_mut() = Some(dispatch);
    }

    pub(crate) fn dispatch(&self) -> Callback<QuizIntent> {
        (*self.dispatch.borrow()).expect("quiz dispatch registered")
    }
}
