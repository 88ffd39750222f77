use crate::components::ui::{Card, CardContent, CardHeader, SelectDistrictPrompt};
use crate::hooks::use_weather;
use crate::icons::*;
use crate::models::WeatherCondition;
use dioxus::prelude::*;

#[component]
pub fn WeatherCard(district: ReadSignal<String>) -> Element {
    let flow = use_weather(district);

    if district.read().is_empty() {
        return rsx! {
            SelectDistrictPrompt {
                hi: "कृपया पहले अपना जिला चुनें",
                en: "Please select your district first",
            }
        };
    }

    let flow = flow.read();
    let reading = flow.reading().cloned();
    let updated_at = reading
        .as_ref()
        .map(|r| r.fetched_at.format("%H:%M").to_string())
        .unwrap_or_default();
    let condition_icon = reading.as_ref().map(|r| rsx! {
        ConditionIcon { condition: r.condition }
    });

    rsx! {
        Card { elevated: true,
            CardHeader {
                title: "मौसम की जानकारी | Weather Info".to_string(),
                trailing: condition_icon,
            }
            CardContent {
                if flow.is_loading() {
                    div { class: "skeleton",
                        div { class: "skeleton-line w-3-4" }
                        div { class: "skeleton-line w-1-2" }
                        div { class: "skeleton-line w-2-3" }
                    }
                } else if let Some(weather) = reading {
                    div { class: "stack",
                        div { class: "text-center",
                            h3 { class: "reading-location", "{weather.location}" }
                            p { class: "reading-hero", "{weather.temperature_c}°C" }
                            p { class: "text-muted", "{weather.condition.label()}" }
                        }
                        div { class: "grid-2",
                            div { class: "tile",
                                Droplets { size: 20, class: Some("text-primary".to_string()) }
                                div {
                                    p { class: "text-muted text-sm", "Humidity" }
                                    p { class: "tile-value", "{weather.humidity_pct}%" }
                                }
                            }
                            div { class: "tile",
                                Wind { size: 20, class: Some("text-primary".to_string()) }
                                div {
                                    p { class: "text-muted text-sm", "Wind" }
                                    p { class: "tile-value", "{weather.wind_kmh} km/h" }
                                }
                            }
                        }
                        p { class: "text-muted text-xs timestamp",
                            Clock { size: 12 }
                            "Updated {updated_at}"
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn ConditionIcon(condition: WeatherCondition) -> Element {
    match condition {
        WeatherCondition::Sunny => rsx! {
            Sun { size: 32, class: Some("text-accent glow".to_string()) }
        },
        WeatherCondition::PartlyCloudy | WeatherCondition::Cloudy => rsx! {
            Cloud { size: 32, class: Some("text-muted".to_string()) }
        },
        WeatherCondition::LightRain => rsx! {
            CloudRain { size: 32, class: Some("text-primary".to_string()) }
        },
    }
}
