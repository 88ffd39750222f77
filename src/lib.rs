#![allow(non_snake_case)]

pub mod components;
pub mod config;
pub mod data;
pub mod error;
pub mod flows;
pub mod hooks;
pub mod icons;
pub mod layouts;
pub mod models;
pub mod services;
pub mod state;
pub mod views;

use dioxus::prelude::*;

use components::toast::ToastProvider;
use layouts::MainLayout;
use state::AppStateProvider;
use views::{crops::CropsTab, disease::DiseaseTab, soil::SoilTab, weather::WeatherTab};

pub const APP_TITLE: &str = "Jharkhand Krishi Sahayak";

#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(MainLayout)]
        #[route("/")]
        WeatherTab {},
        #[route("/crops")]
        CropsTab {},
        #[route("/disease")]
        DiseaseTab {},
        #[route("/soil")]
        SoilTab {},
}

impl Route {
    pub fn title(&self) -> &'static str {
        match self {
            Route::WeatherTab {} => "मौसम | Weather",
            Route::CropsTab {} => "फसल | Crops",
            Route::DiseaseTab {} => "बीमारी | Disease",
            Route::SoilTab {} => "मिट्टी | Soil",
        }
    }

    /// Tabs in display order.
    pub fn tabs() -> [Route; 4] {
        [
            Route::WeatherTab {},
            Route::CropsTab {},
            Route::DiseaseTab {},
            Route::SoilTab {},
        ]
    }
}

pub fn App() -> Element {
    rsx! {
        document::Title { "{APP_TITLE}" }
        document::Stylesheet { href: asset!("/assets/main.css") }
        ToastProvider {
            AppStateProvider { Router::<Route> {} }
        }
    }
}

fn init_logging() {
    #[cfg(not(target_arch = "wasm32"))]
    {
        use tracing_subscriber::EnvFilter;
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }

    #[cfg(target_arch = "wasm32")]
    dioxus::logger::initialize_default();
}

#[cfg(feature = "desktop")]
pub fn run_app() {
    use dioxus::desktop::{Config, LogicalSize, WindowBuilder};

    init_logging();

    let config = Config::new()
        .with_window(
            WindowBuilder::new()
                .with_title(APP_TITLE)
                .with_inner_size(LogicalSize::new(1200.0, 900.0)),
        )
        .with_menu(None);

    LaunchBuilder::new().with_cfg(config).launch(App);
}

#[cfg(not(feature = "desktop"))]
pub fn run_app() {
    init_logging();
    dioxus::launch(App);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tabs_cover_every_route_in_order() {
        let paths: Vec<String> = Route::tabs().iter().map(|r| r.to_string()).collect();
        assert_eq!(paths, vec!["/", "/crops", "/disease", "/soil"]);
    }

    #[test]
    fn test_tab_titles_are_bilingual() {
        for tab in Route::tabs() {
            assert!(tab.title().contains(" | "));
        }
    }
}
