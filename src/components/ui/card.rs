use dioxus::prelude::*;

#[component]
pub fn Card(#[props(default)] elevated: bool, children: Element) -> Element {
    rsx! {
        div {
            class: "card",
            class: if elevated { "card-elevated" } else { "card-soft" },
            {children}
        }
    }
}

/// Card header with an icon, a bilingual title and an optional subtitle.
#[component]
pub fn CardHeader(
    title: String,
    #[props(default)] subtitle: Option<String>,
    #[props(default)] icon: Option<Element>,
    #[props(default)] trailing: Option<Element>,
) -> Element {
    rsx! {
        div { class: "card-header",
            h3 { class: "card-title",
                span { class: "card-title-main",
                    if let Some(icon) = icon {
                        {icon}
                    }
                    "{title}"
                }
                if let Some(trailing) = trailing {
                    {trailing}
                }
            }
            if let Some(subtitle) = subtitle {
                p { class: "text-muted text-sm", "{subtitle}" }
            }
        }
    }
}

#[component]
pub fn CardContent(#[props(default)] class: Option<String>, children: Element) -> Element {
    let class = class.unwrap_or_default();
    rsx! {
        div { class: "card-content {class}", {children} }
    }
}

/// The two-line Hindi/English placeholder shown before a district is chosen.
#[component]
pub fn SelectDistrictPrompt(hi: &'static str, en: &'static str) -> Element {
    rsx! {
        Card {
            CardContent { class: "text-center".to_string(),
                p { class: "text-muted", "{hi}" }
                p { class: "text-muted text-sm", "{en}" }
            }
        }
    }
}
