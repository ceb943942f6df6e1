//! Expand/collapse toggle shown on every card.

use dioxus::prelude::*;

/// Material "expand more" chevron, shown while collapsed
const EXPAND_MORE_PATH: &str = "M16.59 8.59L12 13.17 7.41 8.59 6 10l6 6 6-6z";
/// Material "expand less" chevron, shown while expanded
const EXPAND_LESS_PATH: &str = "M12 8l-6 6 1.41 1.41L12 10.83l4.59 4.58L18 14z";

/// Properties for the ExpandItemButton component
#[derive(Clone, PartialEq, Props)]
pub struct ExpandItemButtonProps {
    /// Current state of the owning card; only picks the icon
    pub expanded: bool,
    /// Accessible label, the same in both states
    pub label: String,
    /// Click handler
    pub onclick: EventHandler<()>,
}

/// Icon button that toggles a card
#[component]
pub fn ExpandItemButton(props: ExpandItemButtonProps) -> Element {
    let icon_path = if props.expanded {
        EXPAND_LESS_PATH
    } else {
        EXPAND_MORE_PATH
    };
    let onclick = props.onclick;

    rsx! {
        button {
            class: "expand-btn",
            r#type: "button",
            "aria-label": "{props.label}",
            "aria-expanded": "{props.expanded}",
            onclick: move |_| onclick.call(()),
            svg {
                class: "expand-btn__icon",
                "viewBox": "0 0 24 24",
                "aria-hidden": "true",
                path { d: icon_path }
            }
        }
    }
}
