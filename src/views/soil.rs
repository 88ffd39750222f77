use crate::components::SoilAnalysis;
use crate::state::DashboardState;
use dioxus::prelude::*;

#[component]
pub fn SoilTab() -> Element {
    let state = use_context::<DashboardState>();
    let district = (state.selected_district)();

    rsx! {
        SoilAnalysis { district }
    }
}
