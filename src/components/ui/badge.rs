use dioxus::prelude::*;

#[component]
pub fn Badge(class: &'static str, children: Element) -> Element {
    rsx! {
        span { class: "badge {class}", {children} }
    }
}
