//! Collapsible panel container

use dioxus::prelude::*;

/// Panel with a clickable header, an action area, and a collapsible body.
#[component]
pub fn CollapsiblePanel(
    #[props(into)] data_test_id: String,
    header: Element,
    actions: Element,
    children: Element,
) -> Element {
    let mut expanded = use_signal(|| false);
    let is_expanded = expanded();

    rsx! {
        div {
            class: if is_expanded { "collapsible-panel expanded" } else { "collapsible-panel" },
            "data-test-id": "{data_test_id}",

            div {
                class: "collapsible-panel-header",
                onclick: move |_| expanded.set(!is_expanded),

                div {
                    class: "collapsible-panel-header-details",
                    {header}
                }
                div {
                    class: "collapsible-panel-actions",
                    // Keep action clicks from toggling the panel.
                    onclick: move |event| event.stop_propagation(),
                    {actions}
                }
            }

            if is_expanded {
                div {
                    class: "collapsible-panel-body",
                    {children}
                }
            }
        }
    }
}
