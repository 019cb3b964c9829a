use dioxus::prelude::*;
use services::AssistantError;
use tracing::warn;

use crate::context::AppContext;

const NOT_CONFIGURED: &str =
    "🔒 The assistant is not configured. Set STUDY_AI_API_KEY and restart the app to use it.";

#[derive(Clone, Debug, PartialEq, Eq)]
enum AssistantReply {
    Answer(String),
    Failed(&'static str),
}

fn failure_message(err: &AssistantError) -> &'static str {
    match err {
        AssistantError::Disabled => NOT_CONFIGURED,
        AssistantError::EmptyPrompt => "Type a question first.",
        _ => "❌ The assistant could not answer right now. Please try again.",
    }
}

#[component]
pub fn AssistantView() -> Element {
    let ctx = use_context::<AppContext>();
    let assistant = ctx.assistant();
    let disclaimer = ctx.reference().disclaimer();
    let enabled = assistant.enabled();
    let model = assistant.model().map(str::to_owned);

    let mut question = use_signal(String::new);
    let mut reply = use_signal(|| None::<AssistantReply>);
    let mut asking = use_signal(|| false);

    let on_ask = use_callback(move |()| {
        if *asking.peek() {
            return;
        }
        let assistant = assistant.clone();
        let prompt = question.peek().clone();
        asking.set(true);
        spawn(async move {
            let outcome = match assistant.ask(&prompt).await {
                Ok(answer) => AssistantReply::Answer(answer),
                Err(e) => {
                    warn!(error = %e, "assistant question failed");
                    AssistantReply::Failed(failure_message(&e))
                }
            };
            reply.set(Some(outcome));
            asking.set(false);
        });
    });

    let ask_label = if asking() { "⏳ Thinking..." } else { "Ask" };

    rsx! {
        div { class: "page assistant-page",
            h2 { "🤖 Ask a Module 10 Question" }
            p { class: "notice notice--disclaimer", "{disclaimer}" }
            if !enabled {
                p { class: "quiz-warning", "{NOT_CONFIGURED}" }
            } else {
                if let Some(model) = model {
                    p { class: "assistant-model", "Answers come from {model}. Check them against the regulations." }
                }
                textarea {
                    class: "assistant-input",
                    rows: "4",
                    placeholder: "e.g. What does CAR 145.A.30 require of certifying staff?",
                    value: "{question}",
                    oninput: move |evt| question.set(evt.value()),
                }
                button {
                    class: "btn",
                    r#type: "button",
                    disabled: asking(),
                    onclick: move |_| on_ask.call(()),
                    "{ask_label}"
                }
                match reply() {
                    Some(AssistantReply::Answer(text)) => rsx! {
                        div { class: "assistant-reply",
                            strong { "Assistant:" }
                            p { "{text}" }
                        }
                    },
                    Some(AssistantReply::Failed(message)) => rsx! {
                        p { class: "quiz-warning", "{message}" }
                    },
                    None => rsx! {},
                }
            }
        }
    }
}
