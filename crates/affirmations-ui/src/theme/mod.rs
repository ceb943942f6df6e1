//! Visual theme for the affirmation list.
//!
//! A [`Theme`] is a plain value handed to the list component as a prop. It
//! becomes CSS custom properties on the list container, so cards pick up
//! colors through `var(--...)` without reading any global state.

mod colors;
mod styles;

pub use colors::*;
pub use styles::CARD_STYLES;

use affirmations_core::CardMetrics;

/// Color roles used by the card styles
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    pub primary: &'static str,
    /// Tint of the expand/collapse icon
    pub secondary: &'static str,
    pub background: &'static str,
    pub surface: &'static str,
    pub on_surface: &'static str,
    pub on_surface_muted: &'static str,
    pub shadow: &'static str,
}

/// Theme passed into the rendering entry point
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub palette: Palette,
    /// Card size estimates used by list virtualization
    pub metrics: CardMetrics,
}

impl Theme {
    pub fn light() -> Self {
        Self {
            palette: Palette {
                primary: LIGHT_PRIMARY,
                secondary: LIGHT_SECONDARY,
                background: LIGHT_BACKGROUND,
                surface: LIGHT_SURFACE,
                on_surface: LIGHT_ON_SURFACE,
                on_surface_muted: LIGHT_ON_SURFACE_MUTED,
                shadow: LIGHT_SHADOW,
            },
            metrics: CardMetrics::default(),
        }
    }

    pub fn dark() -> Self {
        Self {
            palette: Palette {
                primary: DARK_PRIMARY,
                secondary: DARK_SECONDARY,
                background: DARK_BACKGROUND,
                surface: DARK_SURFACE,
                on_surface: DARK_ON_SURFACE,
                on_surface_muted: DARK_ON_SURFACE_MUTED,
                shadow: DARK_SHADOW,
            },
            metrics: CardMetrics::default(),
        }
    }

    /// Inline `style` declarations exposing the palette as CSS variables
    pub fn style_vars(&self) -> String {
        let p = &self.palette;
        format!(
            "--color-primary: {}; --color-secondary: {}; --color-background: {}; \
             --color-surface: {}; --color-on-surface: {}; --color-on-surface-muted: {}; \
             --color-shadow: {};",
            p.primary,
            p.secondary,
            p.background,
            p.surface,
            p.on_surface,
            p.on_surface_muted,
            p.shadow
        )
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}
