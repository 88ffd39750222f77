use crate::components::ui::{ActionButton, Badge, Card, CardContent, CardHeader, Progress};
use crate::hooks::use_soil_analysis;
use crate::icons::*;
use crate::models::{ParameterStatus, SoilReading};
use dioxus::prelude::*;

#[component]
pub fn SoilAnalysis(district: ReadSignal<String>) -> Element {
    let analyzer = use_soil_analysis(district);

    let flow = analyzer.flow.read();
    let reading = flow.reading().cloned();
    let analyzing = flow.is_analyzing();
    drop(flow);

    let district_name = district.read().clone();
    let prompt = if district_name.is_empty() {
        "पहले जिला चुनें | Select district first".to_string()
    } else {
        format!(
            "{0} जिले के लिए मिट्टी विश्लेषण | Soil analysis for {0}",
            district_name
        )
    };

    rsx! {
        Card { elevated: true,
            CardHeader {
                title: "मिट्टी विश्लेषण | Soil Analysis".to_string(),
                subtitle: "उपग्रह डेटा से मिट्टी की गुणवत्ता | Soil quality from satellite data".to_string(),
                icon: rsx! {
                    Satellite { size: 20, class: Some("text-primary".to_string()) }
                },
            }
            CardContent { class: "stack".to_string(),
                if let Some(soil) = reading {
                    SoilReport { soil }
                } else {
                    div { class: "empty-state",
                        Satellite { size: 64, class: Some("text-muted float".to_string()) }
                        p { class: "text-muted", "{prompt}" }
                        ActionButton {
                            label: "मिट्टी का विश्लेषण करें | Analyze Soil".to_string(),
                            icon: rsx! {
                                Zap { size: 16 }
                            },
                            busy: analyzing,
                            disabled: district_name.is_empty(),
                            large: true,
                            onclick: move |_| analyzer.analyze(),
                        }
                    }
                }
            }
        }
    }
}

/// Measured parameters with their status badges, nutrients and advice.
#[component]
pub fn SoilReport(soil: SoilReading) -> Element {
    rsx! {
        div { class: "grid-2",
            div { class: "tile tile-column",
                div { class: "row-between",
                    div { class: "inline-icon",
                        Beaker { size: 16, class: Some("text-primary".to_string()) }
                        span { class: "font-medium", "pH Level" }
                    }
                    StatusBadge { status: soil.ph_status() }
                }
                p { class: "reading-value", "{soil.ph:.1}" }
                Progress { value: soil.ph_progress() }
            }
            div { class: "tile tile-column",
                div { class: "row-between",
                    div { class: "inline-icon",
                        Droplets { size: 16, class: Some("text-primary".to_string()) }
                        span { class: "font-medium", "Moisture" }
                    }
                    StatusBadge { status: soil.moisture_status() }
                }
                p { class: "reading-value", "{soil.moisture_pct}%" }
                Progress { value: f32::from(soil.moisture_pct) }
            }
        }

        div { class: "tile tile-column",
            h3 { class: "tile-title", "पोषक तत्व | Nutrients (kg/ha)" }
            div { class: "grid-3",
                Nutrient { symbol: "N", name: "Nitrogen", value: soil.nitrogen, tone: "nutrient-n" }
                Nutrient { symbol: "P", name: "Phosphorus", value: soil.phosphorus, tone: "nutrient-p" }
                Nutrient { symbol: "K", name: "Potassium", value: soil.potassium, tone: "nutrient-k" }
            }
            p { class: "text-muted text-sm text-center",
                "Organic matter: {soil.organic_matter_pct:.1}%"
            }
        }

        div { class: "tile tile-column",
            h3 { class: "tile-title", "सिफारिशें | Recommendations" }
            div { class: "stack-sm",
                for (index, rec) in soil.recommendations.iter().enumerate() {
                    div { key: "{index}", class: "recommendation",
                        p { class: "text-sm", "{rec.en}" }
                        p { class: "text-muted text-sm", "{rec.hi}" }
                    }
                }
            }
        }
    }
}

#[component]
fn StatusBadge(status: ParameterStatus) -> Element {
    rsx! {
        Badge { class: status.badge_class(), "{status.label()}" }
    }
}

#[component]
fn Nutrient(symbol: &'static str, name: &'static str, value: u8, tone: &'static str) -> Element {
    rsx! {
        div { class: "text-center",
            div { class: "nutrient-dot {tone}",
                span { "{symbol}" }
            }
            p { class: "font-semibold", "{value}" }
            p { class: "text-muted text-xs", "{name}" }
        }
    }
}
