use crate::error::AppError;
use crate::models::Language;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{info, warn};

pub const CONFIG_FILENAME: &str = "krishi_sahayak.json";

/// Fixed latencies of the simulated weather, detection and soil calls.
#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Debug)]
#[serde(default)]
pub struct SimulationConfig {
    pub weather_delay_ms: u64,
    pub detection_delay_ms: u64,
    pub soil_delay_ms: u64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            weather_delay_ms: 1000,
            detection_delay_ms: 3000,
            soil_delay_ms: 4000,
        }
    }
}

impl SimulationConfig {
    /// No latency at all. Used by tests.
    pub fn instant() -> Self {
        Self {
            weather_delay_ms: 0,
            detection_delay_ms: 0,
            soil_delay_ms: 0,
        }
    }

    pub fn weather_delay(&self) -> Duration {
        Duration::from_millis(self.weather_delay_ms)
    }

    pub fn detection_delay(&self) -> Duration {
        Duration::from_millis(self.detection_delay_ms)
    }

    pub fn soil_delay(&self) -> Duration {
        Duration::from_millis(self.soil_delay_ms)
    }
}

#[derive(Serialize, Deserialize, Default, Clone, PartialEq, Debug)]
#[serde(default)]
pub struct AppConfig {
    pub simulation: SimulationConfig,
    pub default_language: Option<Language>,
}

impl AppConfig {
    pub fn language(&self) -> Language {
        self.default_language.unwrap_or_default()
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn get_config_path() -> PathBuf {
    if let Some(proj_dirs) = directories::ProjectDirs::from("in", "krishi", "KrishiSahayak") {
        return proj_dirs.config_dir().join(CONFIG_FILENAME);
    }

    std::env::current_dir()
        .unwrap_or_default()
        .join(CONFIG_FILENAME)
}

#[cfg(target_arch = "wasm32")]
pub fn get_config_path() -> PathBuf {
    PathBuf::from(CONFIG_FILENAME)
}

/// Loads the startup configuration. A missing file is not an error; a broken
/// one is logged and replaced by defaults.
pub fn load_config() -> AppConfig {
    if cfg!(target_arch = "wasm32") {
        return AppConfig::default();
    }
    let path = get_config_path();
    match load_config_from(&path) {
        Ok(Some(config)) => {
            info!("Loaded configuration from {}", path.display());
            config
        }
        Ok(None) => AppConfig::default(),
        Err(e) => {
            warn!("Ignoring configuration at {}: {}", path.display(), e);
            AppConfig::default()
        }
    }
}

pub fn load_config_from(path: &Path) -> Result<Option<AppConfig>, AppError> {
    let contents = match std::fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e.into()),
    };
    let config = serde_json::from_str(&contents)?;
    Ok(Some(config))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_simulated_latencies() {
        let sim = SimulationConfig::default();
        assert_eq!(sim.weather_delay(), Duration::from_secs(1));
        assert_eq!(sim.detection_delay(), Duration::from_secs(3));
        assert_eq!(sim.soil_delay(), Duration::from_secs(4));
        assert_eq!(AppConfig::default().language(), Language::Hindi);
    }

    #[test]
    fn test_partial_json_keeps_other_defaults() {
        let config: AppConfig =
            serde_json::from_str(r#"{ "simulation": { "soil_delay_ms": 10 } }"#).unwrap();
        assert_eq!(config.simulation.soil_delay_ms, 10);
        assert_eq!(config.simulation.weather_delay_ms, 1000);
        assert_eq!(config.default_language, None);
    }
}
