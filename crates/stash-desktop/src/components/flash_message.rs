//! Flash message banner

use dioxus::prelude::*;
use stash_core::widget::MessageType;

#[component]
pub fn FlashMessage(#[props(default)] kind: MessageType, #[props(into)] message: String) -> Element {
    let kind_name = kind.as_str();
    let class_name = format!("flash-message flash-message--{kind_name}");

    rsx! {
        div {
            class: "{class_name}",
            "data-test-id": "flash-message-{kind_name}",
            "{message}"
        }
    }
}
