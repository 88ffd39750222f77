use crate::hooks::use_language;
use crate::icons::Globe;
use crate::models::Language;
use dioxus::prelude::*;

#[component]
pub fn LanguageSelector() -> Element {
    let language = use_language();
    let current = language.current();

    rsx! {
        div { class: "language-selector",
            Globe { size: 16, class: Some("text-primary".to_string()) }
            select {
                class: "select select-compact",
                onchange: move |evt: Event<FormData>| language.set_code(&evt.value()),
                for lang in Language::all() {
                    option {
                        key: "{lang.code()}",
                        value: "{lang.code()}",
                        selected: *lang == current,
                        title: "{lang.english_name()}",
                        "{lang.name()}"
                    }
                }
            }
        }
    }
}
