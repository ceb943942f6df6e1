//! Affirmations UI Components
//!
//! Dioxus components for the affirmation list:
//!
//! - [`AffirmationList`]: virtualized, scrolling container that owns the
//!   expand/collapse state of every card
//! - [`AffirmationCard`]: image, text, toggle and the optional description
//! - [`Theme`]: palette and card metrics, passed in explicitly as a prop

pub mod components;
pub mod theme;

pub use components::*;
pub use theme::{Theme, CARD_STYLES};
