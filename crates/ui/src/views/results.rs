use dioxus::prelude::*;

use crate::context::AppContext;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{HistoryRowVm, map_history_rows};

#[component]
pub fn ResultsView() -> Element {
    let ctx = use_context::<AppContext>();
    let history = ctx.history();

    let resource = use_resource(move || {
        let history = history.clone();
        async move {
            let entries = history
                .list_entries()
                .await
                .map_err(|e| ViewError::from(&e))?;
            Ok::<_, ViewError>(map_history_rows(&entries))
        }
    });

    let state = view_state_from_resource(resource);

    rsx! {
        div { class: "page",
            h2 { "📊 My Quiz History" }

            match state {
                ViewState::Idle => rsx! {
                    p { "Idle" }
                },
                ViewState::Loading => rsx! {
                    p { "Loading..." }
                },
                ViewState::Ready(rows) => rsx! {
                    if rows.is_empty() {
                        p { "You haven't taken any quizzes yet." }
                    } else {
                        h3 { "📝 Previous Attempts" }
                        ResultsTable { rows }
                    }
                },
                ViewState::Error(err) => rsx! {
                    p { "{err.message()}" }
                },
            }
        }
    }
}

#[component]
fn ResultsTable(rows: Vec<HistoryRowVm>) -> Element {
    rsx! {
        table { class: "results-table",
            thead {
                tr {
                    th { "Date" }
                    th { "Score" }
                    th { "Status" }
                }
            }
            tbody {
                for row in rows {
                    tr {
                        td { "{row.date}" }
                        td { "{row.score}" }
                        td { "{row.status}" }
                    }
                }
            }
        }
    }
}
