//! Panel header icon

use dioxus::prelude::*;

const NO_ICON_LABEL: &str = "No plugin icon";

/// Plugin icon, or a labelled placeholder when there is no image.
#[component]
pub fn HeaderIcon(
    #[props(!optional)] image_url: Option<String>,
    #[props(!optional)] name: Option<String>,
) -> Element {
    let label = name.unwrap_or_else(|| NO_ICON_LABEL.to_string());

    rsx! {
        div {
            class: "header-icon",
            "data-test-id": "header-icon",
            if let Some(url) = image_url {
                img { src: "{url}", alt: "{label}" }
            } else {
                span { title: "{label}", "?" }
            }
        }
    }
}
