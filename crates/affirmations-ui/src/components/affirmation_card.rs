//! Affirmation Card Component
//!
//! Image, affirmation text and an expand toggle. The description block is
//! part of the tree only while the card is expanded.

use affirmations_core::{AffirmationId, ResolvedAffirmation};
use dioxus::prelude::*;

use super::{DescriptionBlock, ExpandItemButton};

/// Properties for the AffirmationCard component
#[derive(Clone, PartialEq, Props)]
pub struct AffirmationCardProps {
    /// Record to display
    pub affirmation: ResolvedAffirmation,
    /// Whether the description block is shown
    #[props(default = false)]
    pub expanded: bool,
    /// Called with the record id when the toggle is clicked
    pub on_toggle: EventHandler<AffirmationId>,
}

/// A single affirmation card
///
/// The card holds no state of its own: `expanded` comes from the list's
/// [`affirmations_core::CardStates`], keyed by record id.
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     AffirmationCard {
///         affirmation: resolved.clone(),
///         expanded: states.read().is_expanded(resolved.id),
///         on_toggle: move |id| { states.write().toggle(id); },
///     }
/// }
/// ```
#[component]
pub fn AffirmationCard(props: AffirmationCardProps) -> Element {
    let affirmation = &props.affirmation;
    let id = affirmation.id;
    let index = id.index();
    let expanded = props.expanded;
    let on_toggle = props.on_toggle;

    let card_class = if expanded {
        "affirmation-card affirmation-card--expanded"
    } else {
        "affirmation-card"
    };

    rsx! {
        article {
            class: card_class,
            "data-card-index": "{index}",
            "data-expanded": "{expanded}",
            div { class: "affirmation-card__content",
                img {
                    class: "affirmation-card__image",
                    src: "{affirmation.image_src}",
                    alt: "{affirmation.text}",
                }
                h2 { class: "affirmation-card__text",
                    "{affirmation.text}"
                }
                ExpandItemButton {
                    expanded: expanded,
                    label: affirmation.accessibility_label.clone(),
                    onclick: move |_| on_toggle.call(id),
                }
                if expanded {
                    DescriptionBlock {
                        heading: affirmation.description_heading.clone(),
                        body: affirmation.description.clone(),
                    }
                }
            }
        }
    }
}
