//! Affirmations Core Library
//!
//! Data model, bundled resources and view state for the affirmation list.
//!
//! ## Overview
//!
//! The application shows a scrollable list of cards, each pairing an image
//! with a short localized affirmation. A card can be expanded to reveal a
//! description block. This crate holds everything that is not rendering:
//!
//! - [`AffirmationRepository`] produces the fixed, ordered record list
//! - [`resources`] resolves string and image references into content
//! - [`CardStates`] owns expand/collapse state, keyed by record
//! - [`ListWindow`] decides which cards a virtualized list materializes
//!
//! ## Quick Start
//!
//! ```
//! use affirmations_core::resources::{BundledAssets, BundledStrings, Locale};
//! use affirmations_core::{resolve_all, AffirmationRepository, CardStates};
//!
//! let strings = BundledStrings::load()?;
//! let assets = BundledAssets::new();
//! let affirmations = AffirmationRepository.load_affirmations();
//! let resolved = resolve_all(&affirmations, &strings, &assets, &Locale::default())?;
//! assert_eq!(resolved[0].text, "I am strong.");
//!
//! let mut states = CardStates::new();
//! states.toggle(resolved[3].id);
//! assert!(states.is_expanded(resolved[3].id));
//! # Ok::<(), affirmations_core::AffirmationError>(())
//! ```

pub mod card_state;
pub mod error;
pub mod repository;
pub mod resources;
pub mod types;
pub mod window;

// Re-exports
pub use card_state::{CardState, CardStates};
pub use error::{AffirmationError, AffirmationResult};
pub use repository::{AffirmationRepository, AFFIRMATION_COUNT};
pub use types::{resolve_all, Affirmation, AffirmationId, ResolvedAffirmation};
pub use window::{CardMetrics, ListWindow, Viewport};
