pub mod crop_recommendation;
pub mod disease_detection;
pub mod district_selector;
pub mod language_selector;
pub mod soil_analysis;
pub mod toast;
pub mod ui;
pub mod weather_card;

pub use crop_recommendation::CropRecommendation;
pub use disease_detection::DiseaseDetection;
pub use district_selector::DistrictSelector;
pub use language_selector::LanguageSelector;
pub use soil_analysis::SoilAnalysis;
pub use ui::*;
pub use weather_card::WeatherCard;
