use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A piece of UI text carried in English and Hindi.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Bilingual {
    pub en: &'static str,
    pub hi: &'static str,
}

impl Bilingual {
    pub const fn new(en: &'static str, hi: &'static str) -> Self {
        Self { en, hi }
    }
}

impl fmt::Display for Bilingual {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} | {}", self.en, self.hi)
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize, Default)]
pub enum Language {
    #[default]
    #[serde(rename = "hi")]
    Hindi,
    #[serde(rename = "en")]
    English,
    #[serde(rename = "ur")]
    Urdu,
    #[serde(rename = "bn")]
    Bengali,
    #[serde(rename = "or")]
    Odia,
}

impl Language {
    pub fn code(&self) -> &'static str {
        match self {
            Language::Hindi => "hi",
            Language::English => "en",
            Language::Urdu => "ur",
            Language::Bengali => "bn",
            Language::Odia => "or",
        }
    }

    /// Native-script name shown in the picker.
    pub fn name(&self) -> &'static str {
        match self {
            Language::Hindi => "हिंदी",
            Language::English => "English",
            Language::Urdu => "اردو",
            Language::Bengali => "বাংলা",
            Language::Odia => "ଓଡ଼ିଆ",
        }
    }

    pub fn english_name(&self) -> &'static str {
        match self {
            Language::Hindi => "Hindi",
            Language::English => "English",
            Language::Urdu => "Urdu",
            Language::Bengali => "Bengali",
            Language::Odia => "Odia",
        }
    }

    pub fn from_code(code: &str) -> Option<Language> {
        Language::all().iter().copied().find(|l| l.code() == code)
    }

    pub fn all() -> &'static [Language] {
        &[
            Language::Hindi,
            Language::English,
            Language::Urdu,
            Language::Bengali,
            Language::Odia,
        ]
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum WeatherCondition {
    Sunny,
    PartlyCloudy,
    Cloudy,
    LightRain,
}

impl WeatherCondition {
    pub fn label(&self) -> &'static str {
        match self {
            WeatherCondition::Sunny => "Sunny",
            WeatherCondition::PartlyCloudy => "Partly Cloudy",
            WeatherCondition::Cloudy => "Cloudy",
            WeatherCondition::LightRain => "Light Rain",
        }
    }

    pub fn all() -> &'static [WeatherCondition] {
        &[
            WeatherCondition::Sunny,
            WeatherCondition::PartlyCloudy,
            WeatherCondition::Cloudy,
            WeatherCondition::LightRain,
        ]
    }
}

#[derive(Clone, PartialEq, Debug)]
pub struct WeatherReading {
    pub location: String,
    pub temperature_c: u8,
    pub humidity_pct: u8,
    pub condition: WeatherCondition,
    pub wind_kmh: u8,
    pub fetched_at: DateTime<Local>,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Season {
    Kharif,
    Rabi,
    Annual,
}

impl Season {
    pub fn label(&self) -> &'static str {
        match self {
            Season::Kharif => "Kharif",
            Season::Rabi => "Rabi",
            Season::Annual => "Annual",
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Profitability {
    High,
    Medium,
    Low,
}

impl Profitability {
    pub fn label(&self) -> &'static str {
        match self {
            Profitability::High => "High",
            Profitability::Medium => "Medium",
            Profitability::Low => "Low",
        }
    }

    pub fn badge_class(&self) -> &'static str {
        match self {
            Profitability::High => "badge-accent",
            Profitability::Medium => "badge-primary",
            Profitability::Low => "badge-muted",
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct CropRecord {
    pub name: Bilingual,
    pub season: Season,
    pub profitability: Profitability,
    pub soil_type: &'static str,
    pub growth_period: &'static str,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl Severity {
    pub fn label(&self) -> &'static str {
        match self {
            Severity::Low => "Low",
            Severity::Medium => "Medium",
            Severity::High => "High",
        }
    }

    pub fn badge_class(&self) -> &'static str {
        match self {
            Severity::High => "badge-destructive",
            Severity::Medium => "badge-accent",
            Severity::Low => "badge-primary",
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct DetectionResult {
    pub disease: Bilingual,
    pub confidence: u8,
    pub severity: Severity,
    pub treatment: Bilingual,
}

/// A locally decoded crop photo. Only held for the preview; never sent anywhere.
#[derive(Clone, PartialEq, Debug)]
pub struct CropImage {
    pub file_name: String,
    pub mime: &'static str,
    pub width: u32,
    pub height: u32,
    pub size_bytes: usize,
    pub data_url: String,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ParameterStatus {
    Low,
    Optimal,
    High,
}

impl ParameterStatus {
    pub fn classify(value: f32, range: OptimalRange) -> Self {
        if value < range.min {
            ParameterStatus::Low
        } else if value > range.max {
            ParameterStatus::High
        } else {
            ParameterStatus::Optimal
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ParameterStatus::Low => "Low",
            ParameterStatus::Optimal => "Optimal",
            ParameterStatus::High => "High",
        }
    }

    pub fn badge_class(&self) -> &'static str {
        match self {
            ParameterStatus::Low => "badge-destructive",
            ParameterStatus::High => "badge-accent",
            ParameterStatus::Optimal => "badge-primary",
        }
    }
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct OptimalRange {
    pub min: f32,
    pub max: f32,
}

pub const PH_OPTIMAL: OptimalRange = OptimalRange { min: 6.0, max: 7.5 };
pub const MOISTURE_OPTIMAL: OptimalRange = OptimalRange { min: 40.0, max: 60.0 };

#[derive(Clone, PartialEq, Debug)]
pub struct SoilReading {
    pub district: String,
    pub ph: f32,
    pub moisture_pct: u8,
    pub nitrogen: u8,
    pub phosphorus: u8,
    pub potassium: u8,
    pub organic_matter_pct: f32,
    pub recommendations: &'static [Bilingual],
    pub analyzed_at: DateTime<Local>,
}

impl SoilReading {
    pub fn ph_status(&self) -> ParameterStatus {
        ParameterStatus::classify(self.ph, PH_OPTIMAL)
    }

    pub fn moisture_status(&self) -> ParameterStatus {
        ParameterStatus::classify(f32::from(self.moisture_pct), MOISTURE_OPTIMAL)
    }

    /// pH mapped onto the 0-14 scale as a percentage for the progress bar.
    pub fn ph_progress(&self) -> f32 {
        (self.ph / 14.0) * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parameter_status_thresholds() {
        assert_eq!(ParameterStatus::classify(5.9, PH_OPTIMAL), ParameterStatus::Low);
        assert_eq!(ParameterStatus::classify(6.0, PH_OPTIMAL), ParameterStatus::Optimal);
        assert_eq!(ParameterStatus::classify(7.5, PH_OPTIMAL), ParameterStatus::Optimal);
        assert_eq!(ParameterStatus::classify(7.6, PH_OPTIMAL), ParameterStatus::High);
        assert_eq!(ParameterStatus::classify(39.0, MOISTURE_OPTIMAL), ParameterStatus::Low);
        assert_eq!(ParameterStatus::classify(61.0, MOISTURE_OPTIMAL), ParameterStatus::High);
    }

    #[test]
    fn test_badge_classes_by_tier() {
        assert_eq!(Profitability::High.badge_class(), "badge-accent");
        assert_eq!(Profitability::Medium.badge_class(), "badge-primary");
        assert_eq!(Profitability::Low.badge_class(), "badge-muted");

        assert_eq!(Severity::High.badge_class(), "badge-destructive");
        assert_eq!(Severity::Medium.badge_class(), "badge-accent");
        assert_eq!(Severity::Low.badge_class(), "badge-primary");

        assert_eq!(ParameterStatus::Low.badge_class(), "badge-destructive");
        assert_eq!(ParameterStatus::Optimal.badge_class(), "badge-primary");
        assert_eq!(ParameterStatus::High.badge_class(), "badge-accent");
    }

    #[test]
    fn test_language_codes_round_trip() {
        for lang in Language::all() {
            assert_eq!(Language::from_code(lang.code()), Some(*lang));
        }
        assert_eq!(Language::from_code("fr"), None);
        assert_eq!(Language::default(), Language::Hindi);
    }

    #[test]
    fn test_language_serde_uses_codes() {
        let json = serde_json::to_string(&Language::Bengali).unwrap();
        assert_eq!(json, "\"bn\"");
        let parsed: Language = serde_json::from_str("\"or\"").unwrap();
        assert_eq!(parsed, Language::Odia);
    }

    #[test]
    fn test_bilingual_display() {
        let text = Bilingual::new("Rice", "धान");
        assert_eq!(text.to_string(), "Rice | धान");
    }
}
