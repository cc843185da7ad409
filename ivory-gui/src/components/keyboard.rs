//! One-octave piano keyboard.

use dioxus::prelude::*;

use crate::dispatch::{use_dispatch, DispatchExt};
use crate::state::SharedState;
use ivory_types::{Action, KeyAction, KeyState};

/// The keyboard container: one key per catalog note, in order.
#[component]
pub fn PianoKeyboard() -> Element {
    let state = use_context::<Signal<SharedState>>();

    let keys: Vec<KeyState> = state.read().app.keyboard.keys().to_vec();

    rsx! {
        div { id: "piano", class: "piano",
            for key_state in keys {
                PianoKey { key: "{key_state.note}", key_state }
            }
        }
    }
}

/// A single key. Clicking plays the note and shows the press state until the
/// release timer fires.
#[component]
fn PianoKey(key_state: KeyState) -> Element {
    let mut dispatch = use_dispatch();
    let note = key_state.note;
    let class = key_state.classes();

    rsx! {
        div {
            class: "{class}",
            "data-note": "{note}",
            onclick: move |_| {
                dispatch.dispatch_action(Action::Key(KeyAction::Press(note)));
            },
            span { class: "key-label", "{note}" }
        }
    }
}
