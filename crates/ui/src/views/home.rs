use dioxus::prelude::*;
use dioxus_router::Link;
use study_core::model::content::{APP_TITLE, TRAINING_DISCLAIMER};

use crate::routes::MENU;

#[component]
pub fn HomeView() -> Element {
    rsx! {
        div { class: "page",
            h2 { "🛠️ {APP_TITLE}" }
            p { "Welcome! Please choose a study mode:" }
            ul { class: "home-menu",
                for (label, route) in MENU {
                    li { Link { to: route, "{label}" } }
                }
            }
            p { class: "notice notice--disclaimer", "{TRAINING_DISCLAIMER}" }
        }
    }
}
