use crate::components::{DistrictSelector, LanguageSelector};
use crate::hooks::use_district;
use crate::icons::*;
use crate::Route;
use dioxus::prelude::*;

#[component]
pub fn MainLayout() -> Element {
    let district = use_district();
    let selected = district.selected();

    rsx! {
        div { class: "page",
            header { class: "site-header",
                div { class: "container row-between",
                    div { class: "inline-icon",
                        Leaf { size: 32, class: Some("glow".to_string()) }
                        div {
                            h1 { class: "site-title", "झारखंड कृषि सहायक | Jharkhand Krishi Sahayak" }
                            p { class: "site-subtitle", "Smart Agriculture Assistant for Jharkhand Farmers" }
                        }
                    }
                    LanguageSelector {}
                }
            }

            section { class: "hero",
                div { class: "container hero-grid",
                    div { class: "stack",
                        h2 { class: "hero-title",
                            "स्मार्ट खेती के लिए"
                            br {}
                            span { class: "text-primary", "आधुनिक समाधान" }
                        }
                        p { class: "hero-lead", "Modern Solutions for Smart Farming in Jharkhand" }
                        p { class: "text-muted",
                            "मौसम, मिट्टी और फसल की बीमारी की जानकारी एक ही स्थान पर। "
                            "Get weather, soil, and crop disease information in one place."
                        }
                    }
                    DistrictSelector {
                        selected_district: selected,
                        on_district_change: move |name: String| district.select(name),
                    }
                }
            }

            main { class: "container main",
                nav { class: "tab-list",
                    for tab in Route::tabs() {
                        TabItem { to: tab }
                    }
                }
                div { class: "tab-content", Outlet::<Route> {} }
            }

            footer { class: "site-footer",
                div { class: "container text-center",
                    div { class: "inline-icon footer-brand",
                        Leaf { size: 24 }
                        span { "झारखंड कृषि सहायक" }
                    }
                    p { class: "footer-tagline",
                        "Empowering farmers with technology and knowledge | किसानों को तकनीक और ज्ञान से सशक्त बनाना"
                    }
                }
            }
        }
    }
}

#[component]
fn TabItem(to: Route) -> Element {
    let label = to.title();
    let icon = match to {
        Route::WeatherTab {} => rsx! { Cloud { size: 16 } },
        Route::CropsTab {} => rsx! { Leaf { size: 16 } },
        Route::DiseaseTab {} => rsx! { Camera { size: 16 } },
        Route::SoilTab {} => rsx! { Zap { size: 16 } },
    };

    rsx! {
        Link {
            to,
            class: "tab-trigger",
            active_class: "tab-active",
            {icon}
            span { class: "tab-label", "{label}" }
        }
    }
}
