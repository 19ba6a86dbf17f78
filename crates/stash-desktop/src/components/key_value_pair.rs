//! Key/value listing

use dioxus::prelude::*;

#[component]
pub fn KeyValuePair(data: Vec<(String, String)>, #[props(default)] inline: bool) -> Element {
    let class_name = if inline {
        "key-value-pair key-value-pair--inline"
    } else {
        "key-value-pair"
    };

    rsx! {
        ul {
            class: class_name,
            "data-test-id": "key-value-pair",
            for (index, (key, value)) in data.into_iter().enumerate() {
                li {
                    key: "{index}",
                    class: "key-value-pair-row",
                    span { class: "key-value-pair-key", "{key}" }
                    span { class: "key-value-pair-value", "{value}" }
                }
            }
        }
    }
}
