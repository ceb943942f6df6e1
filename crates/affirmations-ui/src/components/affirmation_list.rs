//! Affirmation List Component
//!
//! Vertically scrolling, virtualized list of affirmation cards.

use std::rc::Rc;

use affirmations_core::{AffirmationId, CardStates, ResolvedAffirmation, Viewport};
use dioxus::prelude::*;

use super::AffirmationCard;
use crate::theme::Theme;

/// Viewport size assumed until the container has been measured
pub const DEFAULT_VIEWPORT_WIDTH: f64 = 420.0;
pub const DEFAULT_VIEWPORT_HEIGHT: f64 = 860.0;

/// Properties for the AffirmationList component
#[derive(Clone, PartialEq, Props)]
pub struct AffirmationListProps {
    /// Records in display order
    pub affirmations: Vec<ResolvedAffirmation>,
    /// Palette and card metrics
    pub theme: Theme,
    /// Card state on first render
    #[props(default)]
    pub initial_states: CardStates,
    /// Viewport width used before the container reports its own
    #[props(default = DEFAULT_VIEWPORT_WIDTH)]
    pub viewport_width: f64,
    /// Viewport height used before the container reports its own
    #[props(default = DEFAULT_VIEWPORT_HEIGHT)]
    pub viewport_height: f64,
}

/// Apply a measured container size, writing the signal only on change
fn apply_size(mut viewport: Signal<Viewport>, width: f64, height: f64) {
    let mut next = viewport();
    if next.resize(width, height) {
        tracing::debug!(width, height, "List viewport resized");
        viewport.set(next);
    }
}

/// Renders one card per record, materializing only the cards inside the
/// scroll window plus the theme's overscan.
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     AffirmationList {
///         affirmations: resolved,
///         theme: Theme::dark(),
///     }
/// }
/// ```
#[component]
pub fn AffirmationList(props: AffirmationListProps) -> Element {
    let initial_states = props.initial_states.clone();
    let initial_viewport = Viewport::new(props.viewport_width, props.viewport_height);

    let mut states = use_signal(move || initial_states);
    let mut viewport = use_signal(move || initial_viewport);
    let mut container: Signal<Option<Rc<MountedData>>> = use_signal(|| None);

    let metrics = props.theme.metrics;
    let current = viewport();
    let heights: Vec<f64> = props
        .affirmations
        .iter()
        .map(|affirmation| {
            let expanded = states.read().is_expanded(affirmation.id);
            metrics.card_height(affirmation, expanded, current.width)
        })
        .collect();
    let window = current.window(&heights, metrics.overscan);
    let visible = props.affirmations[window.range.clone()].to_vec();
    let list_style = props.theme.style_vars();

    let on_toggle = move |id: AffirmationId| {
        states.write().toggle(id);
    };

    rsx! {
        div {
            class: "affirmation-list",
            "role": "list",
            style: list_style,
            onmounted: move |event| async move {
                let mounted = event.data();
                match mounted.get_client_rect().await {
                    Ok(rect) => apply_size(viewport, rect.size.width, rect.size.height),
                    Err(e) => tracing::warn!("Failed to measure list viewport: {:?}", e),
                }
                container.set(Some(mounted));
            },
            onresize: move |event| {
                match event.data().get_border_box_size() {
                    Ok(size) => apply_size(viewport, size.width, size.height),
                    Err(e) => tracing::warn!("Failed to read list size: {:?}", e),
                }
            },
            onscroll: move |_| async move {
                let Some(mounted) = container() else {
                    return;
                };
                if let Ok(offset) = mounted.get_scroll_offset().await {
                    let mut next = viewport();
                    if next.scroll_to(offset.y) {
                        viewport.set(next);
                    }
                }
                // Hosts without resize observers still get a fresh size here.
                if let Ok(rect) = mounted.get_client_rect().await {
                    apply_size(viewport, rect.size.width, rect.size.height);
                }
            },

            div {
                class: "affirmation-list__spacer",
                style: "height: {window.leading_space}px;",
            }

            for affirmation in visible {
                AffirmationCard {
                    key: "{affirmation.id}",
                    expanded: states.read().is_expanded(affirmation.id),
                    affirmation: affirmation.clone(),
                    on_toggle: on_toggle,
                }
            }

            div {
                class: "affirmation-list__spacer",
                style: "height: {window.trailing_space}px;",
            }
        }
    }
}
