//! Slider component for parameter adjustment.

use dioxus::prelude::*;

/// A horizontal slider for adjusting float values.
///
/// Input that does not parse as a number is dropped.
#[component]
pub fn Slider(
    id: String,
    value: f32,
    min: f32,
    max: f32,
    #[props(default = 0.01)] step: f32,
    onchange: EventHandler<f32>,
) -> Element {
    rsx! {
        input {
            id: "{id}",
            r#type: "range",
            class: "slider horizontal",
            min: "{min}",
            max: "{max}",
            step: "{step}",
            value: "{value}",
            oninput: move |evt| {
                if let Ok(v) = evt.value().parse::<f32>() {
                    onchange.call(v);
                }
            }
        }
    }
}
