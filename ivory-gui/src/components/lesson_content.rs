//! Active lesson title and body.

use dioxus::prelude::*;

use crate::state::SharedState;

#[component]
pub fn LessonContent() -> Element {
    let state = use_context::<Signal<SharedState>>();
    let view = state.read().app.lesson_view();

    match view {
        Some(view) => rsx! {
            div { id: "lesson-content", class: "lesson-content",
                h3 { "{view.title}" }
                div { class: "lesson-body", dangerous_inner_html: "{view.body}" }
            }
        },
        None => rsx! {
            div { id: "lesson-content", class: "lesson-content empty",
                "No lessons available"
            }
        },
    }
}
