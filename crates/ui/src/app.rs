use dioxus::prelude::*;
use dioxus_router::Router;
use study_core::model::content::APP_TITLE;

use crate::context::StudyState;
use crate::routes::Route;

#[component]
pub fn App() -> Element {
    use_context_provider(StudyState::new);

    rsx! {
        document::Stylesheet { href: asset!("/assets/style.css") }

        document::Title { "{APP_TITLE}" }

        div { class: "app-root",
            ErrorBoundary {
                handle_error: |errors: ErrorContext| rsx! {
                    div { class: "fatal",
                        h1 { "Something went wrong" }
                        pre { "{errors:?}" }
                    }
                },
                Router::<Route> {}
            }
        }
    }
}
