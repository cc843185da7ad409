//! Root application component and state initialization.

use dioxus::prelude::*;

use crate::components::{LessonContent, LessonList, LessonNav, PianoKeyboard, VolumeControl};
use crate::state::SharedState;

const MAIN_CSS: &str = include_str!("styles/main.css");

/// Root application component.
#[component]
pub fn App() -> Element {
    use_context_provider(|| Signal::new(SharedState::init()));

    rsx! {
        style { {MAIN_CSS} }
        div { class: "app",
            header { class: "app-header",
                h1 { "Ivory" }
                span { class: "subtitle", "Piano practice" }
            }
            div { class: "main-content",
                aside { class: "sidebar",
                    h3 { "Lessons" }
                    LessonList {}
                }
                section { class: "lesson-panel",
                    LessonContent {}
                    LessonNav {}
                }
            }
            div { class: "practice",
                PianoKeyboard {}
                VolumeControl {}
            }
        }
    }
}
