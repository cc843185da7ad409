//! Button components.

use dioxus::prelude::*;

/// A standard button.
#[component]
pub fn Button(
    id: String,
    label: String,
    #[props(default = false)] disabled: bool,
    onclick: EventHandler<()>,
) -> Element {
    rsx! {
        button {
            id: "{id}",
            class: "btn",
            disabled: disabled,
            onclick: move |_| onclick.call(()),
            "{label}"
        }
    }
}
