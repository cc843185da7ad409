//! Previous/next lesson controls.

use dioxus::prelude::*;

use crate::components::common::Button;
use crate::dispatch::{use_dispatch, DispatchExt};
use crate::state::SharedState;
use ivory_types::{Action, LessonAction};

/// Prev is disabled on the first lesson, next on the last.
#[component]
pub fn LessonNav() -> Element {
    let state = use_context::<Signal<SharedState>>();
    let mut dispatch = use_dispatch();

    let (prev_enabled, next_enabled) = state
        .read()
        .app
        .lesson_view()
        .map(|v| (v.prev_enabled, v.next_enabled))
        .unwrap_or((false, false));

    rsx! {
        div { class: "lesson-nav",
            Button {
                id: "prev-lesson",
                label: "Previous",
                disabled: !prev_enabled,
                onclick: move |_| dispatch.dispatch_action(Action::Lesson(LessonAction::Prev)),
            }
            Button {
                id: "next-lesson",
                label: "Next",
                disabled: !next_enabled,
                onclick: move |_| dispatch.dispatch_action(Action::Lesson(LessonAction::Next)),
            }
        }
    }
}
