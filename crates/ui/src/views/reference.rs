use dioxus::prelude::*;

use crate::context::AppContext;
use crate::views::ViewError;

#[derive(Clone, Debug, PartialEq, Eq)]
enum SaveOutcome {
    Saved(String),
    Failed(ViewError),
}

#[component]
pub fn StudyGuideView() -> Element {
    let ctx = use_context::<AppContext>();
    let reference = ctx.reference();
    let documents = reference.documents().to_vec();
    let mut outcome = use_signal(|| None::<SaveOutcome>);

    let on_save = use_callback(move |file_name: String| {
        let result = reference.save_document(&file_name);
        outcome.set(Some(match result {
            Ok(path) => SaveOutcome::Saved(path.display().to_string()),
            Err(e) => SaveOutcome::Failed(ViewError::from(&e)),
        }));
    });

    rsx! {
        div { class: "page",
            h2 { "📚 Study Guide & References" }
            p { "The following documents are provided to help you prepare for the GCAA Module 10 essay exam:" }
            match outcome() {
                Some(SaveOutcome::Saved(path)) => rsx! {
                    p { class: "notice notice--pass", "Saved to {path}" }
                },
                Some(SaveOutcome::Failed(err)) => rsx! {
                    p { class: "quiz-warning", "{err.message()}" }
                },
                None => rsx! {},
            }
            for doc in documents {
                div { class: "guide-doc",
                    button {
                        class: "btn",
                        r#type: "button",
                        onclick: {
                            let file_name = doc.file_name().to_owned();
                            move |_| on_save.call(file_name.clone())
                        },
                        "📥 Download: {doc.title()}"
                    }
                    p { strong { "{doc.summary_heading()}:" } }
                    ul {
                        for point in doc.summary() {
                            li { "{point}" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn AboutView() -> Element {
    let ctx = use_context::<AppContext>();
    let about = ctx.reference().about();

    rsx! {
        div { class: "page",
            h2 { "About" }
            p { class: "notice notice--disclaimer", "⚠️ {about}" }
        }
    }
}

#[component]
pub fn WebsiteView() -> Element {
    let ctx = use_context::<AppContext>();
    let link = ctx.reference().regulator_link();
    let opener = ctx.link_opener();
    let url = link.url().to_string();

    rsx! {
        div { class: "page",
            h2 { "🌐 {link.title()}" }
            p { "{link.description()}" }
            a {
                href: "{url}",
                onclick: {
                    let url = url.clone();
                    move |evt: MouseEvent| {
                        evt.prevent_default();
                        opener.open_url(&url);
                    }
                },
                "👉 Click here to open the GCAA Website"
            }
        }
    }
}
