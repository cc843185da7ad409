//! Lesson list sidebar component.

use dioxus::prelude::*;

use crate::dispatch::{use_dispatch, DispatchExt};
use crate::state::SharedState;
use ivory_types::{Action, LessonAction};

/// Clickable lesson titles; the active one is marked on every render.
#[component]
pub fn LessonList() -> Element {
    let state = use_context::<Signal<SharedState>>();
    let mut dispatch = use_dispatch();

    let (titles, active) = {
        let s = state.read();
        let titles: Vec<&'static str> = s.app.lessons.iter().map(|l| l.title).collect();
        (titles, s.app.session.current_lesson)
    };

    rsx! {
        ul { id: "lesson-list", class: "lesson-list",
            for (idx, title) in titles.into_iter().enumerate() {
                li {
                    key: "{idx}",
                    class: if idx == active { "lesson-item active" } else { "lesson-item" },
                    onclick: move |_| {
                        dispatch.dispatch_action(Action::Lesson(LessonAction::GoTo(idx)));
                    },
                    "{title}"
                }
            }
        }
    }
}
