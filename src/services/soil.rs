use crate::data::SOIL_RECOMMENDATIONS;
use crate::models::SoilReading;
use chrono::Local;
use rand::Rng;

/// Draws `min + floor(rand * span)`, matching how the panel has always sampled
/// integer soil values.
fn draw_int<R: Rng + ?Sized>(rng: &mut R, min: u8, span: u8) -> u8 {
    min + rng.gen_range(0..span)
}

/// Draws `min + rand * span` rounded to one decimal place.
fn draw_tenths<R: Rng + ?Sized>(rng: &mut R, min: f32, span: f32) -> f32 {
    let raw = min + rng.gen::<f32>() * span;
    (raw * 10.0).round() / 10.0
}

pub fn generate<R: Rng + ?Sized>(district: &str, rng: &mut R) -> SoilReading {
    SoilReading {
        district: district.to_string(),
        ph: draw_tenths(rng, 5.5, 3.0),
        moisture_pct: draw_int(rng, 30, 40),
        nitrogen: draw_int(rng, 20, 40),
        phosphorus: draw_int(rng, 10, 25),
        potassium: draw_int(rng, 40, 60),
        organic_matter_pct: draw_tenths(rng, 1.0, 2.0),
        recommendations: &SOIL_RECOMMENDATIONS,
        analyzed_at: Local::now(),
    }
}
