//! Per-panel state machines.
//!
//! Every simulated call takes a [`Ticket`] from the panel's [`RequestTracker`].
//! A completion is applied only while its ticket is still the latest one, so a
//! slow response can never overwrite the result of a newer request.

use crate::error::AppError;
use crate::models::{CropImage, DetectionResult, SoilReading, WeatherReading};
use tracing::debug;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Ticket(u64);

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct RequestTracker {
    generation: u64,
}

impl RequestTracker {
    /// Starts a new request, superseding every ticket issued before.
    pub fn issue(&mut self) -> Ticket {
        self.generation += 1;
        Ticket(self.generation)
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        ticket.0 == self.generation
    }

    /// Supersedes any outstanding ticket without starting a new request.
    pub fn invalidate(&mut self) {
        self.generation += 1;
    }
}

#[derive(Clone, PartialEq, Debug, Default)]
pub struct WeatherFlow {
    tracker: RequestTracker,
    loading: bool,
    reading: Option<WeatherReading>,
}

impl WeatherFlow {
    /// Reacts to a district change. Returns a ticket when a fetch must start.
    pub fn district_changed(&mut self, district: &str) -> Option<Ticket> {
        if district.is_empty() {
            self.tracker.invalidate();
            self.loading = false;
            return None;
        }
        self.loading = true;
        Some(self.tracker.issue())
    }

    /// Applies a finished fetch. Returns `false` when the result was stale.
    pub fn resolve(&mut self, ticket: Ticket, reading: WeatherReading) -> bool {
        if !self.tracker.is_current(ticket) {
            debug!("Dropping stale weather reading for {}", reading.location);
            return false;
        }
        self.reading = Some(reading);
        self.loading = false;
        true
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn reading(&self) -> Option<&WeatherReading> {
        self.reading.as_ref()
    }
}

#[derive(Clone, PartialEq, Debug, Default)]
pub enum DetectionPhase {
    #[default]
    Idle,
    ImageSelected {
        image: CropImage,
    },
    Detecting {
        image: CropImage,
    },
    ResultShown {
        image: CropImage,
        result: DetectionResult,
    },
}

#[derive(Clone, PartialEq, Debug, Default)]
pub struct DetectionFlow {
    tracker: RequestTracker,
    phase: DetectionPhase,
}

impl DetectionFlow {
    pub fn phase(&self) -> &DetectionPhase {
        &self.phase
    }

    pub fn image(&self) -> Option<&CropImage> {
        match &self.phase {
            DetectionPhase::Idle => None,
            DetectionPhase::ImageSelected { image }
            | DetectionPhase::Detecting { image }
            | DetectionPhase::ResultShown { image, .. } => Some(image),
        }
    }

    pub fn result(&self) -> Option<&DetectionResult> {
        match &self.phase {
            DetectionPhase::ResultShown { result, .. } => Some(result),
            _ => None,
        }
    }

    pub fn is_detecting(&self) -> bool {
        matches!(self.phase, DetectionPhase::Detecting { .. })
    }

    /// Holds a new image. Any shown result and any detection in flight are
    /// dropped on the spot.
    pub fn select_image(&mut self, image: CropImage) {
        self.tracker.invalidate();
        self.phase = DetectionPhase::ImageSelected { image };
    }

    /// Starts a detection for the held image.
    pub fn begin(&mut self) -> Result<(Ticket, CropImage), AppError> {
        let image = self.image().cloned().ok_or(AppError::NoImage)?;
        let ticket = self.tracker.issue();
        self.phase = DetectionPhase::Detecting {
            image: image.clone(),
        };
        Ok((ticket, image))
    }

    pub fn complete(&mut self, ticket: Ticket, result: DetectionResult) -> bool {
        if !self.tracker.is_current(ticket) {
            debug!("Dropping stale detection result {}", result.disease.en);
            return false;
        }
        match std::mem::take(&mut self.phase) {
            DetectionPhase::Detecting { image } => {
                self.phase = DetectionPhase::ResultShown { image, result };
                true
            }
            other => {
                self.phase = other;
                false
            }
        }
    }
}

#[derive(Clone, PartialEq, Debug, Default)]
pub struct SoilFlow {
    tracker: RequestTracker,
    analyzing: bool,
    reading: Option<SoilReading>,
}

impl SoilFlow {
    pub fn begin(&mut self, district: &str) -> Result<Ticket, AppError> {
        if district.is_empty() {
            return Err(AppError::NoDistrict);
        }
        self.analyzing = true;
        Ok(self.tracker.issue())
    }

    pub fn complete(&mut self, ticket: Ticket, reading: SoilReading) -> bool {
        if !self.tracker.is_current(ticket) {
            debug!("Dropping stale soil reading for {}", reading.district);
            return false;
        }
        self.reading = Some(reading);
        self.analyzing = false;
        true
    }

    pub fn is_analyzing(&self) -> bool {
        self.analyzing
    }

    pub fn reading(&self) -> Option<&SoilReading> {
        self.reading.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{MOCK_DETECTIONS, SOIL_RECOMMENDATIONS};
    use crate::models::WeatherCondition;
    use chrono::Local;

    fn image(name: &str) -> CropImage {
        CropImage {
            file_name: name.to_string(),
            mime: "image/png",
            width: 1,
            height: 1,
            size_bytes: 67,
            data_url: "data:image/png;base64,".to_string(),
        }
    }

    fn weather(location: &str) -> WeatherReading {
        WeatherReading {
            location: location.to_string(),
            temperature_c: 25,
            humidity_pct: 70,
            condition: WeatherCondition::Sunny,
            wind_kmh: 8,
            fetched_at: Local::now(),
        }
    }

    fn soil(district: &str) -> SoilReading {
        SoilReading {
            district: district.to_string(),
            ph: 6.5,
            moisture_pct: 50,
            nitrogen: 30,
            phosphorus: 20,
            potassium: 60,
            organic_matter_pct: 2.0,
            recommendations: &SOIL_RECOMMENDATIONS,
            analyzed_at: Local::now(),
        }
    }

    #[test]
    fn test_tracker_only_latest_ticket_is_current() {
        let mut tracker = RequestTracker::default();
        let first = tracker.issue();
        let second = tracker.issue();
        assert!(!tracker.is_current(first));
        assert!(tracker.is_current(second));
        tracker.invalidate();
        assert!(!tracker.is_current(second));
    }

    #[test]
    fn test_weather_empty_district_does_not_fetch() {
        let mut flow = WeatherFlow::default();
        assert_eq!(flow.district_changed(""), None);
        assert!(!flow.is_loading());
        assert!(flow.reading().is_none());
    }

    #[test]
    fn test_weather_slow_stale_fetch_cannot_overwrite_newer() {
        let mut flow = WeatherFlow::default();
        let ranchi = flow.district_changed("Ranchi").unwrap();
        let dhanbad = flow.district_changed("Dhanbad").unwrap();

        assert!(flow.resolve(dhanbad, weather("Dhanbad")));
        assert!(!flow.resolve(ranchi, weather("Ranchi")));

        assert_eq!(flow.reading().unwrap().location, "Dhanbad");
        assert!(!flow.is_loading());
    }

    #[test]
    fn test_weather_stays_loading_until_latest_resolves() {
        let mut flow = WeatherFlow::default();
        let ranchi = flow.district_changed("Ranchi").unwrap();
        let _dhanbad = flow.district_changed("Dhanbad").unwrap();
        assert!(!flow.resolve(ranchi, weather("Ranchi")));
        assert!(flow.is_loading());
        assert!(flow.reading().is_none());
    }

    #[test]
    fn test_detection_without_image_is_rejected_without_change() {
        let mut flow = DetectionFlow::default();
        let before = flow.clone();
        assert!(matches!(flow.begin(), Err(AppError::NoImage)));
        assert_eq!(flow, before);
        assert_eq!(flow.phase(), &DetectionPhase::Idle);
    }

    #[test]
    fn test_detection_full_cycle() {
        let mut flow = DetectionFlow::default();
        flow.select_image(image("leaf.png"));
        assert!(matches!(flow.phase(), DetectionPhase::ImageSelected { .. }));

        let (ticket, held) = flow.begin().unwrap();
        assert_eq!(held.file_name, "leaf.png");
        assert!(flow.is_detecting());

        assert!(flow.complete(ticket, MOCK_DETECTIONS[0]));
        assert_eq!(flow.result(), Some(&MOCK_DETECTIONS[0]));
        assert_eq!(flow.image().unwrap().file_name, "leaf.png");
    }

    #[test]
    fn test_new_image_clears_shown_result_immediately() {
        let mut flow = DetectionFlow::default();
        flow.select_image(image("first.png"));
        let (ticket, _) = flow.begin().unwrap();
        flow.complete(ticket, MOCK_DETECTIONS[2]);
        assert!(flow.result().is_some());

        flow.select_image(image("second.png"));
        assert!(flow.result().is_none());
        assert_eq!(
            flow.phase(),
            &DetectionPhase::ImageSelected {
                image: image("second.png")
            }
        );
    }

    #[test]
    fn test_new_image_during_detection_discards_pending_result() {
        let mut flow = DetectionFlow::default();
        flow.select_image(image("first.png"));
        let (ticket, _) = flow.begin().unwrap();
        flow.select_image(image("second.png"));

        assert!(!flow.complete(ticket, MOCK_DETECTIONS[1]));
        assert!(flow.result().is_none());
        assert!(!flow.is_detecting());
    }

    #[test]
    fn test_soil_without_district_is_rejected_without_change() {
        let mut flow = SoilFlow::default();
        let before = flow.clone();
        assert!(matches!(flow.begin(""), Err(AppError::NoDistrict)));
        assert!(!flow.is_analyzing());
        assert_eq!(flow, before);
    }

    #[test]
    fn test_soil_latest_analysis_wins() {
        let mut flow = SoilFlow::default();
        let first = flow.begin("Ranchi").unwrap();
        let second = flow.begin("Dumka").unwrap();
        assert!(flow.is_analyzing());

        assert!(flow.complete(second, soil("Dumka")));
        assert!(!flow.complete(first, soil("Ranchi")));
        assert_eq!(flow.reading().unwrap().district, "Dumka");
        assert!(!flow.is_analyzing());
    }
}
