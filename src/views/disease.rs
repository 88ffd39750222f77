use crate::components::DiseaseDetection;
use dioxus::prelude::*;

#[component]
pub fn DiseaseTab() -> Element {
    rsx! {
        DiseaseDetection {}
    }
}
