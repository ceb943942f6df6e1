use affirmations_ui::{AffirmationList, CARD_STYLES};
use dioxus::prelude::*;

use crate::settings::AppData;

/// Root application component.
///
/// Reads the resolved data once from the root context and passes the list
/// and theme down explicitly.
#[component]
pub fn App() -> Element {
    let data = use_context::<AppData>();

    rsx! {
        style { {CARD_STYLES} }
        main { lang: "{data.locale}",
            AffirmationList {
                affirmations: data.affirmations.clone(),
                theme: data.theme.clone(),
                viewport_width: data.viewport_width,
                viewport_height: data.viewport_height,
            }
        }
    }
}
