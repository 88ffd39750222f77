pub mod use_disease_detection;
pub mod use_soil_analysis;
pub mod use_weather;

pub use use_disease_detection::{use_disease_detection, use_disease_detection_with_service, DiseaseDetector};
pub use use_soil_analysis::{use_soil_analysis, use_soil_analysis_with_service, SoilAnalyzer};
pub use use_weather::{use_weather, use_weather_with_service};

use crate::models::Language;
use crate::services::SimulatedFarmService;
use crate::state::DashboardState;
use dioxus::prelude::*;

/// The service provided by `AppStateProvider`, configured from the startup config.
pub fn use_farm_service() -> SimulatedFarmService {
    use_context::<SimulatedFarmService>()
}

#[derive(Clone, Copy)]
pub struct DistrictClient {
    state: DashboardState,
}

impl DistrictClient {
    pub fn selected(&self) -> String {
        (self.state.selected_district)()
    }

    pub fn select(&self, district: String) {
        if !crate::data::is_known_district(&district) {
            tracing::warn!("Ignoring unknown district {:?}", district);
            return;
        }
        tracing::info!("District selected: {}", district);
        let mut selected = self.state.selected_district;
        selected.set(district);
    }
}

pub fn use_district() -> DistrictClient {
    let state = use_context::<DashboardState>();
    DistrictClient { state }
}

#[derive(Clone, Copy)]
pub struct LanguageClient {
    state: DashboardState,
}

impl LanguageClient {
    pub fn current(&self) -> Language {
        (self.state.language)()
    }

    /// Only records the choice; no translation is wired to it.
    pub fn set_code(&self, code: &str) {
        match Language::from_code(code) {
            Some(lang) => {
                tracing::info!("Language changed to: {}", lang.code());
                let mut language = self.state.language;
                language.set(lang);
            }
            None => tracing::warn!("Ignoring unknown language code {:?}", code),
        }
    }
}

pub fn use_language() -> LanguageClient {
    let state = use_context::<DashboardState>();
    LanguageClient { state }
}
