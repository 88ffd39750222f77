use crate::components::ui::{Card, CardContent};
use crate::components::WeatherCard;
use crate::data::WEATHER_TIPS;
use crate::icons::Info;
use crate::state::DashboardState;
use dioxus::prelude::*;

#[component]
pub fn WeatherTab() -> Element {
    let state = use_context::<DashboardState>();
    let district = (state.selected_district)();

    rsx! {
        div { class: "grid-lg-2",
            WeatherCard { district }
            Card {
                CardContent {
                    div { class: "inline-icon tips-heading",
                        Info { size: 20, class: Some("text-primary".to_string()) }
                        h3 { class: "font-semibold", "मौसम सुझाव | Weather Tips" }
                    }
                    div { class: "stack-sm text-sm text-muted",
                        for tip in WEATHER_TIPS {
                            p { "• {tip.hi}" }
                            p { "• {tip.en}" }
                        }
                    }
                }
            }
        }
    }
}
