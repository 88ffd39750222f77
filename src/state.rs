use crate::config::load_config;
use crate::models::Language;
use crate::services::SimulatedFarmService;
use dioxus::prelude::*;

/// The page-level state shared by every panel. Panels only read it.
#[derive(Clone, Copy)]
pub struct DashboardState {
    /// Empty until the user picks a district.
    pub selected_district: Signal<String>,
    pub language: Signal<Language>,
}

#[component]
pub fn AppStateProvider(children: Element) -> Element {
    let config = use_hook(load_config);

    let selected_district = use_signal(String::new);
    let language = use_signal(|| config.language());

    use_context_provider(|| SimulatedFarmService::new(config.simulation));
    use_context_provider(|| DashboardState {
        selected_district,
        language,
    });

    rsx! {
        {children}
    }
}
