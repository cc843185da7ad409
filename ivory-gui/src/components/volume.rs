//! Playback volume slider.

use dioxus::prelude::*;

use crate::components::common::Slider;
use crate::dispatch::{use_dispatch, DispatchExt};
use crate::state::SharedState;
use ivory_types::{Action, VolumeAction};

#[component]
pub fn VolumeControl() -> Element {
    let state = use_context::<Signal<SharedState>>();
    let mut dispatch = use_dispatch();

    let volume = state.read().app.session.volume;
    let percent = (volume * 100.0).round() as u32;

    rsx! {
        div { class: "volume-control",
            label { r#for: "volume", "Volume" }
            Slider {
                id: "volume",
                value: volume,
                min: 0.0,
                max: 1.0,
                onchange: move |v: f32| {
                    dispatch.dispatch_action(Action::Volume(VolumeAction::Set(v)));
                },
            }
            span { class: "volume-value", "{percent}%" }
        }
    }
}
