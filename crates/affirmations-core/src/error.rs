//! Error types for Affirmations

use thiserror::Error;

use crate::resources::{ImageRef, Locale, StringKey};

/// Main error type for Affirmations operations
///
/// Every variant is a boundary failure: a reference the bundled resources
/// cannot satisfy. The list itself never fails to load.
#[derive(Error, Debug)]
pub enum AffirmationError {
    /// No non-empty string for the key in the requested or default locale
    #[error("Missing string '{key}' for locale '{locale}'")]
    MissingString { key: StringKey, locale: Locale },

    /// No artwork bundled for the image reference
    #[error("Missing asset: {0}")]
    MissingAsset(ImageRef),

    /// A bundled string table is not valid JSON
    #[error("Malformed string table for locale '{locale}': {source}")]
    StringTable {
        locale: Locale,
        #[source]
        source: serde_json::Error,
    },
}

/// Result type alias using AffirmationError
pub type AffirmationResult<T> = Result<T, AffirmationError>;
