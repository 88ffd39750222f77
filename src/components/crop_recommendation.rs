use crate::components::ui::{Badge, Card, CardContent, CardHeader, SelectDistrictPrompt};
use crate::data::crops_for;
use crate::icons::*;
use dioxus::prelude::*;

#[component]
pub fn CropRecommendation(district: String) -> Element {
    if district.is_empty() {
        return rsx! {
            SelectDistrictPrompt {
                hi: "जिला चुनने के बाद फसल की सिफारिशें देखें",
                en: "View crop recommendations after selecting district",
            }
        };
    }

    let crops = crops_for(&district);

    rsx! {
        Card { elevated: true,
            CardHeader {
                title: "फसल सिफारिशें | Crop Recommendations".to_string(),
                subtitle: format!("{0} जिले के लिए | For {0} District", district),
                icon: rsx! {
                    Wheat { size: 20, class: Some("text-primary".to_string()) }
                },
            }
            CardContent {
                div { class: "stack",
                    for (index, crop) in crops.iter().enumerate() {
                        div { key: "{index}", class: "tile tile-column",
                            div { class: "row-between",
                                div {
                                    h3 { class: "tile-title", "{crop.name.en} | {crop.name.hi}" }
                                    p { class: "text-muted text-sm", "{crop.season.label()} Season" }
                                }
                                Badge { class: crop.profitability.badge_class(),
                                    "{crop.profitability.label()} Profit"
                                }
                            }
                            div { class: "grid-2 text-sm",
                                div { class: "inline-icon",
                                    Sprout { size: 16, class: Some("text-primary".to_string()) }
                                    span { class: "text-muted", "Soil:" }
                                    span { "{crop.soil_type}" }
                                }
                                div { class: "inline-icon",
                                    Calendar { size: 16, class: Some("text-primary".to_string()) }
                                    span { class: "text-muted", "Period:" }
                                    span { "{crop.growth_period}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(district: &str) -> String {
        let district = district.to_string();
        dioxus_ssr::render_element(rsx! {
            CropRecommendation { district }
        })
    }

    #[test]
    fn test_prompt_without_district() {
        let html = render("");
        assert!(html.contains("जिला चुनने के बाद फसल की सिफारिशें देखें"));
        assert!(html.contains("View crop recommendations after selecting district"));
        assert!(!html.contains("badge"));
    }

    #[test]
    fn test_dhanbad_lists_crops_in_order_with_profit_badges() {
        let html = render("Dhanbad");
        assert!(html.contains("For Dhanbad District"));

        let rice = html.find("Rice | धान").unwrap();
        let sugarcane = html.find("Sugarcane | गन्ना").unwrap();
        let potato = html.find("Potato | आलू").unwrap();
        assert!(rice < sugarcane && sugarcane < potato);

        let high = r#"<span class="badge badge-accent">High Profit</span>"#;
        let medium = r#"<span class="badge badge-primary">Medium Profit</span>"#;
        assert_eq!(html.matches(high).count(), 2);
        assert_eq!(html.matches(medium).count(), 1);
        assert!(html.find(medium).unwrap() > potato);
        assert!(html.contains("Clay loam"));
        assert!(html.contains("12-18 months"));
    }

    #[test]
    fn test_district_without_entry_shows_ranchi_crops() {
        let html = render("Dumka");
        assert!(html.contains("For Dumka District"));
        for crop in ["Rice | धान", "Wheat | गेहूं", "Maize | मक्का"] {
            assert!(html.contains(crop));
        }
        assert!(!html.contains("Sugarcane"));
    }
}
