use crate::models::{WeatherCondition, WeatherReading};
use chrono::Local;
use rand::seq::SliceRandom;
use rand::Rng;
use std::ops::Range;

pub const TEMPERATURE_C: Range<u8> = 20..35;
pub const HUMIDITY_PCT: Range<u8> = 60..90;
pub const WIND_KMH: Range<u8> = 5..15;

pub fn generate<R: Rng + ?Sized>(district: &str, rng: &mut R) -> WeatherReading {
    WeatherReading {
        location: district.to_string(),
        temperature_c: rng.gen_range(TEMPERATURE_C),
        humidity_pct: rng.gen_range(HUMIDITY_PCT),
        condition: *WeatherCondition::all()
            .choose(rng)
            .unwrap_or(&WeatherCondition::Sunny),
        wind_kmh: rng.gen_range(WIND_KMH),
        fetched_at: Local::now(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[test]
    fn test_readings_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..2000 {
            let reading = generate("Gumla", &mut rng);
            assert_eq!(reading.location, "Gumla");
            assert!((20..=34).contains(&reading.temperature_c));
            assert!((60..=89).contains(&reading.humidity_pct));
            assert!((5..=14).contains(&reading.wind_kmh));
        }
    }

    #[test]
    fn test_every_condition_is_reachable() {
        let mut rng = StdRng::seed_from_u64(42);
        let seen: HashSet<_> = (0..500)
            .map(|_| generate("Ranchi", &mut rng).condition)
            .map(|c| c.label())
            .collect();
        assert_eq!(seen.len(), WeatherCondition::all().len());
    }
}
