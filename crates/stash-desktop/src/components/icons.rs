//! Icon buttons for per-entry actions

use dioxus::prelude::*;
use stash_core::widget::ActionKind;

#[component]
pub fn IconGroup(children: Element) -> Element {
    rsx! {
        div {
            class: "icon-group",
            {children}
        }
    }
}

#[component]
pub fn IconButton(
    kind: ActionKind,
    #[props(default)] disabled: bool,
    onclick: EventHandler<MouseEvent>,
) -> Element {
    let label = kind.label();
    let class_name = format!("icon-button icon-button--{}", label.to_lowercase());

    rsx! {
        button {
            r#type: "button",
            class: "{class_name}",
            title: label,
            "data-test-id": kind.test_id(),
            disabled,
            onclick: move |event| {
                if !disabled {
                    onclick.call(event);
                }
            },
            "{label}"
        }
    }
}
