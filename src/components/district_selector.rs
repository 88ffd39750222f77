use crate::data::{is_known_district, DISTRICTS};
use crate::icons::MapPin;
use dioxus::prelude::*;

/// Dropdown over the fixed district list. Reports every valid pick upward.
#[component]
pub fn DistrictSelector(
    selected_district: String,
    on_district_change: EventHandler<String>,
) -> Element {
    let on_change = move |evt: Event<FormData>| {
        let value = evt.value();
        if is_known_district(&value) {
            on_district_change.call(value);
        }
    };

    rsx! {
        div { class: "card card-elevated district-selector",
            div { class: "card-header text-center",
                h3 { class: "card-title card-title-center",
                    MapPin { size: 20, class: Some("text-primary".to_string()) }
                    "अपना जिला चुनें | Select Your District"
                }
            }
            div { class: "card-content",
                select {
                    id: "district-select",
                    class: "select",
                    onchange: on_change,
                    option {
                        value: "",
                        disabled: true,
                        selected: selected_district.is_empty(),
                        "जिला चुनें / Choose District"
                    }
                    for district in DISTRICTS {
                        option {
                            key: "{district}",
                            value: "{district}",
                            selected: district == selected_district,
                            "{district}"
                        }
                    }
                }
            }
        }
    }
}
