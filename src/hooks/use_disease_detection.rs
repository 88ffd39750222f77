use crate::components::toast::{use_toast, ToastType};
use crate::flows::{DetectionFlow, RequestTracker, Ticket};
use crate::services::{disease, FarmService};
use dioxus::prelude::*;
use tracing::{debug, info, warn};

#[derive(Clone, Copy)]
pub struct DiseaseDetector {
    pub flow: Signal<DetectionFlow>,
    picks: Signal<RequestTracker>,
    load_image: Callback<(Ticket, String, Vec<u8>)>,
    detect: Callback<()>,
}

impl DiseaseDetector {
    /// Registers a file pick before its bytes are read. Only the most recent
    /// pick may replace the held image.
    pub fn start_pick(&self) -> Ticket {
        let mut picks = self.picks;
        let ticket = picks.write().issue();
        ticket
    }

    /// Decodes a locally picked file and holds it for detection.
    pub fn load_image(&self, pick: Ticket, file_name: String, bytes: Vec<u8>) {
        self.load_image.call((pick, file_name, bytes));
    }

    pub fn detect(&self) {
        self.detect.call(());
    }
}

pub fn use_disease_detection() -> DiseaseDetector {
    let service = super::use_farm_service();
    use_disease_detection_with_service(service)
}

pub fn use_disease_detection_with_service<S: FarmService>(service: S) -> DiseaseDetector {
    let mut flow = use_signal(DetectionFlow::default);
    let picks = use_signal(RequestTracker::default);
    let mut toasts = use_toast();

    let load_image = use_callback(move |(pick, file_name, bytes): (Ticket, String, Vec<u8>)| {
        if !picks.peek().is_current(pick) {
            debug!("Dropping superseded image pick {}", file_name);
            return;
        }
        match disease::decode_image(&file_name, bytes) {
            Ok(image) => {
                info!(
                    "Image selected: {} ({}, {}x{})",
                    image.file_name, image.mime, image.width, image.height
                );
                flow.write().select_image(image);
            }
            Err(e) => {
                warn!("Rejected image {}: {}", file_name, e);
                toasts.show_error(&e);
            }
        }
    });

    let detect = use_callback(move |()| {
        let mut next = flow.peek().clone();
        let (ticket, image) = match next.begin() {
            Ok(started) => started,
            Err(e) => {
                warn!("Detection refused: {}", e);
                toasts.show_error(&e);
                return;
            }
        };
        flow.set(next);

        let service = service.clone();
        let mut toasts = toasts;
        spawn(async move {
            let result = service.detect_disease(&image).await;
            if flow.write().complete(ticket, result) {
                toasts.show(
                    "विश्लेषण पूर्ण | Analysis Complete",
                    &format!("{}% confidence in detection", result.confidence),
                    ToastType::Success,
                );
            }
        });
    });

    DiseaseDetector {
        flow,
        picks,
        load_image,
        detect,
    }
}
