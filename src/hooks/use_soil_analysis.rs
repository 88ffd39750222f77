use crate::components::toast::{use_toast, ToastType};
use crate::flows::SoilFlow;
use crate::services::FarmService;
use dioxus::prelude::*;
use tracing::warn;

#[derive(Clone, Copy)]
pub struct SoilAnalyzer {
    pub flow: Signal<SoilFlow>,
    analyze: Callback<()>,
}

impl SoilAnalyzer {
    pub fn analyze(&self) {
        self.analyze.call(());
    }
}

pub fn use_soil_analysis(district: ReadSignal<String>) -> SoilAnalyzer {
    let service = super::use_farm_service();
    use_soil_analysis_with_service(district, service)
}

pub fn use_soil_analysis_with_service<S: FarmService>(
    district: ReadSignal<String>,
    service: S,
) -> SoilAnalyzer {
    let mut flow = use_signal(SoilFlow::default);
    let mut toasts = use_toast();

    let analyze = use_callback(move |()| {
        let district = district.peek().clone();
        let mut next = flow.peek().clone();
        let ticket = match next.begin(&district) {
            Ok(ticket) => ticket,
            Err(e) => {
                warn!("Soil analysis refused: {}", e);
                toasts.show_error(&e);
                return;
            }
        };
        flow.set(next);

        let service = service.clone();
        let mut toasts = toasts;
        spawn(async move {
            let reading = service.analyze_soil(&district).await;
            if flow.write().complete(ticket, reading) {
                toasts.show(
                    "मिट्टी विश्लेषण पूर्ण | Soil Analysis Complete",
                    &format!(
                        "{0} जिले के लिए उपग्रह डेटा से विश्लेषण | Analysis from satellite data for {0}",
                        district
                    ),
                    ToastType::Success,
                );
            }
        });
    });

    SoilAnalyzer { flow, analyze }
}
