use dioxus::prelude::*;

#[component]
pub fn Progress(value: f32) -> Element {
    let pct = value.clamp(0.0, 100.0);
    rsx! {
        div { class: "progress",
            div { class: "progress-bar", style: "width: {pct}%;" }
        }
    }
}
