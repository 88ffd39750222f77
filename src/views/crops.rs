use crate::components::CropRecommendation;
use crate::state::DashboardState;
use dioxus::prelude::*;

#[component]
pub fn CropsTab() -> Element {
    let state = use_context::<DashboardState>();
    let district = (state.selected_district)();

    rsx! {
        CropRecommendation { district }
    }
}
