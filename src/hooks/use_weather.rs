use crate::flows::WeatherFlow;
use crate::services::FarmService;
use dioxus::prelude::*;

pub fn use_weather(district: ReadSignal<String>) -> Signal<WeatherFlow> {
    let service = super::use_farm_service();
    use_weather_with_service(district, service)
}

/// Refetches whenever `district` changes to a non-empty name. Readings from
/// superseded fetches are dropped.
pub fn use_weather_with_service<S: FarmService>(
    district: ReadSignal<String>,
    service: S,
) -> Signal<WeatherFlow> {
    let mut flow = use_signal(WeatherFlow::default);

    use_effect(move || {
        let district = district();
        let Some(ticket) = flow.write().district_changed(&district) else {
            return;
        };
        let service = service.clone();
        spawn(async move {
            let reading = service.fetch_weather(&district).await;
            flow.write().resolve(ticket, reading);
        });
    });

    flow
}
