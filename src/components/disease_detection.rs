use crate::components::toast::use_toast;
use crate::components::ui::{ActionButton, Badge, Card, CardContent, CardHeader};
use crate::models::DetectionResult;
use crate::error::AppError;
use crate::hooks::use_disease_detection;
use crate::icons::*;
use dioxus::prelude::*;

const FILE_INPUT_ID: &str = "crop-image-input";

#[component]
pub fn DiseaseDetection() -> Element {
    let detector = use_disease_detection();
    let toasts = use_toast();

    let flow = detector.flow.read();
    let image = flow.image().cloned();
    let result = flow.result().copied();
    let detecting = flow.is_detecting();
    drop(flow);
    let size_kb = image
        .as_ref()
        .map(|i| i.size_bytes.div_ceil(1024))
        .unwrap_or_default();

    let on_file = move |evt: FormEvent| async move {
        let Some(file) = evt.files().into_iter().next() else {
            return;
        };
        let name = file.name();
        let pick = detector.start_pick();
        match file.read_bytes().await {
            Ok(bytes) => detector.load_image(pick, name, bytes.to_vec()),
            Err(e) => {
                let mut toasts = toasts;
                toasts.show_error(&AppError::ImageRead(format!("{}: {}", name, e)));
            }
        }
    };

    rsx! {
        Card { elevated: true,
            CardHeader {
                title: "बीमारी की पहचान | Disease Detection".to_string(),
                subtitle: "अपनी फसल की तस्वीर अपलोड करें | Upload your crop image".to_string(),
                icon: rsx! {
                    Camera { size: 20, class: Some("text-primary".to_string()) }
                },
            }
            CardContent { class: "stack".to_string(),
                input {
                    id: FILE_INPUT_ID,
                    r#type: "file",
                    accept: "image/*",
                    class: "hidden",
                    onchange: on_file,
                }

                if let Some(image) = image.as_ref() {
                    div { class: "tile preview",
                        img {
                            src: "{image.data_url}",
                            alt: "Uploaded crop",
                            class: "preview-image",
                        }
                        p { class: "text-muted text-xs",
                            "{image.file_name} · {image.width}×{image.height} · {size_kb} KB"
                        }
                        label { r#for: FILE_INPUT_ID, class: "btn-outline preview-change", "Change Image" }
                    }
                } else {
                    label { r#for: FILE_INPUT_ID, class: "dropzone",
                        Upload { size: 48, class: Some("text-muted".to_string()) }
                        p { class: "text-muted", "तस्वीर अपलोड करने के लिए क्लिक करें" }
                        p { class: "text-muted text-sm", "Click to upload image" }
                    }
                }

                ActionButton {
                    label: "बीमारी की जांच करें | Detect Disease".to_string(),
                    icon: rsx! {
                        TriangleAlert { size: 16 }
                    },
                    busy: detecting,
                    disabled: image.is_none(),
                    onclick: move |_| detector.detect(),
                }

                if let Some(result) = result {
                    DetectionReport { result }
                }
            }
        }
    }
}

/// The detected disease with its confidence, risk badge and treatment.
#[component]
pub fn DetectionReport(result: DetectionResult) -> Element {
    rsx! {
        div { class: "tile tile-column",
            div { class: "row-between",
                div {
                    h3 { class: "tile-title", "{result.disease.en} | {result.disease.hi}" }
                    p { class: "text-muted text-sm", "Confidence: {result.confidence}%" }
                }
                Badge { class: result.severity.badge_class(), "{result.severity.label()} Risk" }
            }
            div { class: "inline-icon align-start",
                CircleCheck { size: 16, class: Some("text-primary".to_string()) }
                div {
                    p { class: "text-sm font-medium", "Treatment | उपचार:" }
                    p { class: "text-muted text-sm", "{result.treatment.en}" }
                    p { class: "text-muted text-sm", "{result.treatment.hi}" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::MOCK_DETECTIONS;

    #[test]
    fn test_report_shows_risk_badge_per_severity() {
        let html = dioxus_ssr::render_element(rsx! {
            DetectionReport { result: MOCK_DETECTIONS[2] }
        });
        assert!(html.contains("Bacterial Blight | बैक्टीरियल ब्लाइट"));
        assert!(html.contains("Confidence: 78%"));
        assert!(html.contains(r#"<span class="badge badge-destructive">High Risk</span>"#));
        assert!(html.contains("Remove infected parts and apply bactericide"));

        let html = dioxus_ssr::render_element(rsx! {
            DetectionReport { result: MOCK_DETECTIONS[0] }
        });
        assert!(html.contains(r#"<span class="badge badge-accent">Medium Risk</span>"#));

        let html = dioxus_ssr::render_element(rsx! {
            DetectionReport { result: MOCK_DETECTIONS[1] }
        });
        assert!(html.contains(r#"<span class="badge badge-primary">Low Risk</span>"#));
    }
}
