use dioxus::prelude::*;

/// Description block revealed by an expanded card
#[component]
pub fn DescriptionBlock(heading: String, body: String) -> Element {
    rsx! {
        section { class: "affirmation-description",
            h3 { class: "affirmation-description__heading", "{heading}" }
            p { class: "affirmation-description__body", "{body}" }
        }
    }
}
