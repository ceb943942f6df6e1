//! Bundled resources and the resolvers that turn references into content.
//!
//! Records only carry references: a [`StringKey`] for every piece of text
//! and an [`ImageRef`] for artwork. A [`StringResolver`] maps keys to
//! localized strings, an [`AssetResolver`] maps images to displayable URIs.
//! The bundled implementations compile everything into the binary, so a
//! missing reference is caught by [`validate_bundle`] before any window
//! opens.

mod assets;
mod strings;

pub use assets::BundledAssets;
pub use strings::BundledStrings;

use serde::Deserialize;

use crate::error::{AffirmationError, AffirmationResult};
use crate::repository::AffirmationRepository;

/// Reference to a localized string
///
/// Deserializes from the key names used in the string tables, so a table
/// with an unknown key fails to load.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub enum StringKey {
    AppName,
    /// Accessible label of the expand/collapse control
    ExpandButtonDescription,
    /// Heading of the description block
    About,
    /// Affirmation text, numbered from 1
    Affirmation(u8),
}

impl std::fmt::Display for StringKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StringKey::AppName => write!(f, "app_name"),
            StringKey::ExpandButtonDescription => write!(f, "expand_button_description"),
            StringKey::About => write!(f, "about"),
            StringKey::Affirmation(n) => write!(f, "affirmation{}", n),
        }
    }
}

impl std::str::FromStr for StringKey {
    type Err = String;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "app_name" => Ok(StringKey::AppName),
            "expand_button_description" => Ok(StringKey::ExpandButtonDescription),
            "about" => Ok(StringKey::About),
            _ => name
                .strip_prefix("affirmation")
                .and_then(|number| number.parse::<u8>().ok())
                .filter(|number| *number > 0)
                .map(StringKey::Affirmation)
                .ok_or_else(|| format!("unknown string key '{}'", name)),
        }
    }
}

impl TryFrom<String> for StringKey {
    type Error = String;

    fn try_from(name: String) -> Result<Self, Self::Error> {
        name.parse()
    }
}

/// Opaque reference to bundled artwork, numbered from 1
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ImageRef(u8);

impl ImageRef {
    pub fn new(number: u8) -> Self {
        Self(number)
    }

    pub fn number(&self) -> u8 {
        self.0
    }
}

impl std::fmt::Display for ImageRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "image{}", self.0)
    }
}

/// Language used to resolve strings, reduced to its primary subtag
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Locale(String);

impl Locale {
    /// Locale used when nothing else matches
    pub const DEFAULT: &'static str = "en";

    pub fn new(language: impl Into<String>) -> Self {
        Self(language.into())
    }

    /// Parse a BCP 47 tag or POSIX locale string.
    ///
    /// `es-MX`, `es_MX.UTF-8` and `ES` all become `es`. Blank input and
    /// the `C`/`POSIX` locales map to the default.
    pub fn parse(tag: &str) -> Self {
        let language = tag
            .split(['.', '@'])
            .next()
            .unwrap_or_default()
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .trim()
            .to_ascii_lowercase();

        match language.as_str() {
            "" | "c" | "posix" => Self::default(),
            _ => Self(language),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_default(&self) -> bool {
        self.0 == Self::DEFAULT
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self(Self::DEFAULT.to_string())
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Maps string references to localized text
pub trait StringResolver {
    /// Resolve `key` for `locale`, returning a non-empty string.
    fn resolve(&self, key: &StringKey, locale: &Locale) -> AffirmationResult<String>;
}

/// Maps image references to displayable URIs
pub trait AssetResolver {
    /// Resolve `image` to a URI an `img` element can load.
    fn resolve(&self, image: &ImageRef) -> AffirmationResult<String>;
}

/// Check every record against every bundled locale.
///
/// Returns all failures rather than stopping at the first one, so a single
/// run reports the whole set of broken references.
pub fn validate_bundle(
    strings: &BundledStrings,
    assets: &dyn AssetResolver,
) -> Vec<AffirmationError> {
    let affirmations = AffirmationRepository.load_affirmations();
    let mut failures = Vec::new();

    for affirmation in &affirmations {
        if let Err(err) = assets.resolve(&affirmation.image) {
            failures.push(err);
        }
    }

    for locale in strings.locales() {
        let mut keys = vec![StringKey::AppName, StringKey::About];
        for affirmation in &affirmations {
            for key in [&affirmation.text, &affirmation.accessibility_label] {
                if !keys.contains(key) {
                    keys.push(key.clone());
                }
            }
        }

        for key in keys {
            if let Err(err) = strings.resolve(&key, &locale) {
                failures.push(err);
            }
        }
    }

    tracing::debug!(failures = failures.len(), "Validated resource bundle");
    failures
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_key_display() {
        assert_eq!(StringKey::AppName.to_string(), "app_name");
        assert_eq!(
            StringKey::ExpandButtonDescription.to_string(),
            "expand_button_description"
        );
        assert_eq!(StringKey::About.to_string(), "about");
        assert_eq!(StringKey::Affirmation(10).to_string(), "affirmation10");
    }

    #[test]
    fn test_string_key_parse() {
        assert_eq!("about".parse::<StringKey>(), Ok(StringKey::About));
        assert_eq!("affirmation10".parse::<StringKey>(), Ok(StringKey::Affirmation(10)));
        assert_eq!(
            StringKey::ExpandButtonDescription.to_string().parse::<StringKey>(),
            Ok(StringKey::ExpandButtonDescription)
        );
    }

    #[test]
    fn test_string_key_parse_rejects_unknown() {
        assert!("affirmation0".parse::<StringKey>().is_err());
        assert!("affirmation".parse::<StringKey>().is_err());
        assert!("affirmation-1".parse::<StringKey>().is_err());
        assert_eq!(
            "title".parse::<StringKey>(),
            Err("unknown string key 'title'".to_string())
        );
    }

    #[test]
    fn test_image_ref_display() {
        assert_eq!(ImageRef::new(7).to_string(), "image7");
        assert_eq!(ImageRef::new(7).number(), 7);
    }

    #[test]
    fn test_locale_parse() {
        assert_eq!(Locale::parse("es"), Locale::new("es"));
        assert_eq!(Locale::parse("es-MX"), Locale::new("es"));
        assert_eq!(Locale::parse("es_MX.UTF-8"), Locale::new("es"));
        assert_eq!(Locale::parse("de_DE@euro"), Locale::new("de"));
        assert_eq!(Locale::parse("EN"), Locale::new("en"));
    }

    #[test]
    fn test_locale_parse_falls_back_to_default() {
        assert!(Locale::parse("").is_default());
        assert!(Locale::parse("C").is_default());
        assert!(Locale::parse("POSIX").is_default());
        assert!(Locale::parse("C.UTF-8").is_default());
    }

    #[test]
    fn test_bundle_is_complete() {
        let strings = BundledStrings::load().unwrap();
        let failures = validate_bundle(&strings, &BundledAssets::new());
        assert!(failures.is_empty(), "bundle failures: {:?}", failures);
    }

    #[test]
    fn test_validate_reports_every_missing_asset() {
        let strings = BundledStrings::load().unwrap();
        let failures = validate_bundle(&strings, &BundledAssets::empty());
        assert_eq!(failures.len(), 10);
        assert!(failures
            .iter()
            .all(|err| matches!(err, AffirmationError::MissingAsset(_))));
    }
}
