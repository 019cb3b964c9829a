use dioxus::prelude::*;
use dioxus_router::{Link, Outlet, Routable};
use study_core::model::content::APP_TITLE;

use crate::views::{
    AboutView, AssistantView, EssaysView, HomeView, QuizView, ResultsView, StudyGuideView,
    WebsiteView,
};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", HomeView)] Home {},
        #[route("/quiz", QuizView)] Quiz {},
        #[route("/essays", EssaysView)] Essays {},
        #[route("/results", ResultsView)] Results {},
        #[route("/guide", StudyGuideView)] StudyGuide {},
        #[route("/assistant", AssistantView)] Assistant {},
        #[route("/about", AboutView)] About {},
        #[route("/website", WebsiteView)] Website {},
}

/// Menu entries in display order.
pub const MENU: [(&str, Route); 7] = [
    ("📝 Start MCQ Practice Quiz", Route::Quiz {}),
    ("🧠 Essay Questions Review", Route::Essays {}),
    ("📊 View My Results", Route::Results {}),
    ("📚 Study Guide / References", Route::StudyGuide {}),
    ("🤖 Ask a Module 10 Question", Route::Assistant {}),
    ("ℹ️ About This App", Route::About {}),
    ("🌐 Visit GCAA Website", Route::Website {}),
];

#[component]
fn Layout() -> Element {
    rsx! {
        div { class: "app",
            Sidebar {}
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}

#[component]
fn Sidebar() -> Element {
    rsx! {
        nav { class: "sidebar",
            h1 { Link { to: Route::Home {}, "🛠️ {APP_TITLE}" } }
            ul {
                for (label, route) in MENU {
                    li { Link { to: route, "{label}" } }
                }
            }
        }
    }
}
