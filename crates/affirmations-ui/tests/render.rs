//! Server-side rendering of the affirmation list
//!
//! Renders the real data set through `dioxus-ssr` and inspects the markup:
//! card order, description visibility and list virtualization.

use affirmations_core::resources::{BundledAssets, BundledStrings, Locale};
use affirmations_core::{
    resolve_all, AffirmationId, AffirmationRepository, CardStates, ResolvedAffirmation, Viewport,
};
use affirmations_ui::{
    AffirmationList, AffirmationListProps, Theme, DEFAULT_VIEWPORT_HEIGHT, DEFAULT_VIEWPORT_WIDTH,
};
use dioxus::prelude::*;

/// Tall enough to materialize every card
const FULL_VIEWPORT: f64 = 100_000.0;

fn fixture(locale: &str) -> Vec<ResolvedAffirmation> {
    let strings = BundledStrings::load().unwrap();
    let assets = BundledAssets::new();
    let affirmations = AffirmationRepository.load_affirmations();
    resolve_all(&affirmations, &strings, &assets, &Locale::new(locale)).unwrap()
}

fn render_list(
    affirmations: Vec<ResolvedAffirmation>,
    theme: Theme,
    initial_states: CardStates,
    viewport_height: f64,
) -> String {
    let mut dom = VirtualDom::new_with_props(
        AffirmationList,
        AffirmationListProps {
            affirmations,
            theme,
            initial_states,
            viewport_width: DEFAULT_VIEWPORT_WIDTH,
            viewport_height,
        },
    );
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

/// One `(card index, has description)` pair per rendered card, in order
fn rendered_cards(html: &str) -> Vec<(usize, bool)> {
    html.split("<article")
        .skip(1)
        .map(|card| {
            let index = card
                .split("data-card-index=\"")
                .nth(1)
                .and_then(|rest| rest.split('"').next())
                .and_then(|value| value.parse().ok())
                .expect("card carries its index");
            let described = card.contains(r#"class="affirmation-description""#);
            (index, described)
        })
        .collect()
}

#[test]
fn test_renders_ten_cards_in_order() {
    let html = render_list(fixture("en"), Theme::light(), CardStates::new(), FULL_VIEWPORT);
    let cards = rendered_cards(&html);

    assert_eq!(cards.len(), 10);
    let indices: Vec<usize> = cards.iter().map(|(index, _)| *index).collect();
    assert_eq!(indices, (0..10).collect::<Vec<_>>());

    let first = html.find("I am strong.").unwrap();
    let last = html
        .find("I will be present in all the moments that this day brings.")
        .unwrap();
    assert!(first < last);
}

#[test]
fn test_fresh_cards_are_collapsed() {
    let html = render_list(fixture("en"), Theme::light(), CardStates::new(), FULL_VIEWPORT);
    assert!(rendered_cards(&html).iter().all(|(_, described)| !described));
    assert_eq!(html.matches(r#"data-expanded="false""#).count(), 10);
}

#[test]
fn test_toggle_scenario_end_to_end() {
    let affirmations = fixture("en");
    let mut states = CardStates::new();

    states.toggle(AffirmationId(3));
    let html = render_list(affirmations.clone(), Theme::light(), states.clone(), FULL_VIEWPORT);
    let cards = rendered_cards(&html);
    assert_eq!(cards.len(), 10);
    for (index, described) in &cards {
        assert_eq!(*described, *index == 3, "card {} description", index);
    }
    assert!(html.contains(">About<"));

    states.toggle(AffirmationId(3));
    let html = render_list(affirmations, Theme::light(), states, FULL_VIEWPORT);
    let cards = rendered_cards(&html);
    assert_eq!(cards.len(), 10);
    assert!(cards.iter().all(|(_, described)| !described));
}

#[test]
fn test_description_present_iff_expanded() {
    let mut states = CardStates::new();
    for index in [0, 4, 9] {
        states.toggle(AffirmationId(index));
    }

    let html = render_list(fixture("en"), Theme::light(), states.clone(), FULL_VIEWPORT);
    for (index, described) in rendered_cards(&html) {
        assert_eq!(described, states.is_expanded(AffirmationId(index)));
    }
}

#[test]
fn test_description_reuses_affirmation_text() {
    let mut states = CardStates::new();
    states.toggle(AffirmationId(0));

    let html = render_list(fixture("en"), Theme::light(), states, FULL_VIEWPORT);
    let first_card = html.split("<article").nth(1).unwrap();
    // Alt text, title and description body all carry the affirmation.
    assert_eq!(first_card.matches("I am strong.").count(), 3);
}

#[test]
fn test_toggle_label_is_constant() {
    let mut states = CardStates::new();
    states.toggle(AffirmationId(5));

    let html = render_list(fixture("en"), Theme::light(), states, FULL_VIEWPORT);
    assert_eq!(html.matches(r#"aria-label="See more about this""#).count(), 10);
}

#[test]
fn test_default_viewport_materializes_window_only() {
    let affirmations = fixture("en");
    let theme = Theme::light();
    let metrics = theme.metrics;
    let heights: Vec<f64> = affirmations
        .iter()
        .map(|affirmation| metrics.card_height(affirmation, false, DEFAULT_VIEWPORT_WIDTH))
        .collect();
    let window = Viewport::new(DEFAULT_VIEWPORT_WIDTH, DEFAULT_VIEWPORT_HEIGHT)
        .window(&heights, metrics.overscan);

    let html = render_list(affirmations, theme, CardStates::new(), DEFAULT_VIEWPORT_HEIGHT);
    let cards = rendered_cards(&html);

    // Three cards intersect 860px, plus an overscan of two.
    let indices: Vec<usize> = cards.iter().map(|(index, _)| *index).collect();
    assert_eq!(indices, vec![0, 1, 2, 3, 4]);
    assert_eq!(window.range, 0..5);
    assert!(html.contains("height: 0px;"));
    assert!(html.contains(&format!("height: {}px;", window.trailing_space)));
}

#[test]
fn test_expanded_card_widens_window_spacing() {
    let affirmations = fixture("en");
    let metrics = Theme::light().metrics;
    let collapsed = metrics.card_height(&affirmations[9], false, DEFAULT_VIEWPORT_WIDTH);
    let expanded = metrics.card_height(&affirmations[9], true, DEFAULT_VIEWPORT_WIDTH);
    assert!(expanded > collapsed);

    let mut states = CardStates::new();
    states.toggle(AffirmationId(9));
    let html = render_list(affirmations, Theme::light(), states, DEFAULT_VIEWPORT_HEIGHT);

    // Card 9 stays off screen, but its expanded height is in the trailing spacer.
    assert!(rendered_cards(&html).iter().all(|(index, _)| *index < 5));
    let trailing = html
        .rsplit("height: ")
        .next()
        .and_then(|rest| rest.split("px;").next())
        .and_then(|value| value.parse::<f64>().ok())
        .expect("trailing spacer height");
    assert!(trailing >= expanded);
}

#[test]
fn test_theme_is_applied_to_container() {
    let html = render_list(fixture("en"), Theme::dark(), CardStates::new(), FULL_VIEWPORT);
    assert!(html.contains("--color-background: #121212;"));

    let html = render_list(fixture("en"), Theme::light(), CardStates::new(), FULL_VIEWPORT);
    assert!(!html.contains("#121212"));
}

#[test]
fn test_localized_rendering() {
    let mut states = CardStates::new();
    states.toggle(AffirmationId(0));

    let html = render_list(fixture("es"), Theme::light(), states, FULL_VIEWPORT);
    assert!(html.contains("Soy fuerte."));
    assert!(html.contains(">Acerca de<"));
    assert_eq!(html.matches(r#"aria-label="Ver más sobre esto""#).count(), 10);
}
