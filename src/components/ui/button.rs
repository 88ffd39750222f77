use crate::icons::Loader;
use dioxus::prelude::*;

/// Primary call-to-action that swaps to a spinner while `busy`.
#[component]
pub fn ActionButton(
    label: String,
    icon: Element,
    busy: bool,
    #[props(default)] disabled: bool,
    #[props(default)] large: bool,
    onclick: EventHandler<MouseEvent>,
) -> Element {
    rsx! {
        button {
            class: "btn-hero",
            class: if large { "btn-lg" } else { "btn-full" },
            disabled: disabled || busy,
            onclick: move |e| onclick.call(e),
            if busy {
                Loader { size: 16, class: Some("spin".to_string()) }
                "विश्लेषण हो रहा है... | Analyzing..."
            } else {
                {icon}
                "{label}"
            }
        }
    }
}
