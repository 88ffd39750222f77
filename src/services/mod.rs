pub mod disease;
pub mod soil;
pub mod weather;

use crate::config::SimulationConfig;
use crate::models::{CropImage, DetectionResult, SoilReading, WeatherReading};
use async_trait::async_trait;
use std::time::Duration;
use tracing::debug;

/// Source of the data shown by the panels.
///
/// Futures are not `Send`: every call runs on the UI event loop.
#[async_trait(?Send)]
pub trait FarmService: Clone + PartialEq + 'static {
    async fn fetch_weather(&self, district: &str) -> WeatherReading;
    async fn detect_disease(&self, image: &CropImage) -> DetectionResult;
    async fn analyze_soil(&self, district: &str) -> SoilReading;
}

/// Produces random readings after fixed delays in place of real sensors and models.
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub struct SimulatedFarmService {
    pub config: SimulationConfig,
}

impl SimulatedFarmService {
    pub fn new(config: SimulationConfig) -> Self {
        Self { config }
    }
}

#[async_trait(?Send)]
impl FarmService for SimulatedFarmService {
    async fn fetch_weather(&self, district: &str) -> WeatherReading {
        debug!("Simulating weather fetch for {}", district);
        sleep(self.config.weather_delay()).await;
        weather::generate(district, &mut rand::thread_rng())
    }

    async fn detect_disease(&self, image: &CropImage) -> DetectionResult {
        debug!(
            "Simulating disease detection on {} ({}x{})",
            image.file_name, image.width, image.height
        );
        sleep(self.config.detection_delay()).await;
        disease::classify(&mut rand::thread_rng())
    }

    async fn analyze_soil(&self, district: &str) -> SoilReading {
        debug!("Simulating satellite soil analysis for {}", district);
        sleep(self.config.soil_delay()).await;
        soil::generate(district, &mut rand::thread_rng())
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn sleep(duration: Duration) {
    if !duration.is_zero() {
        tokio::time::sleep(duration).await;
    }
}

#[cfg(target_arch = "wasm32")]
pub async fn sleep(duration: Duration) {
    if !duration.is_zero() {
        gloo_timers::future::sleep(duration).await;
    }
}
