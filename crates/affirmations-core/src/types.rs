//! Core types for Affirmations

use crate::error::AffirmationResult;
use crate::resources::{AssetResolver, ImageRef, Locale, StringKey, StringResolver};

/// Stable identifier for an affirmation record
///
/// The record's position in the repository sequence. Card state and
/// keyed rendering hang off this, never off a rendered view instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AffirmationId(pub usize);

impl AffirmationId {
    /// Position of the record in display order
    pub fn index(&self) -> usize {
        self.0
    }
}

impl std::fmt::Display for AffirmationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "affirmation-{}", self.0)
    }
}

/// An affirmation record as it leaves the repository
///
/// Holds references only; strings and artwork are looked up by the
/// resolvers at render time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Affirmation {
    pub id: AffirmationId,
    /// Primary display text
    pub text: StringKey,
    /// Accessible label for the expand/collapse control
    pub accessibility_label: StringKey,
    /// Artwork shown at the top of the card
    pub image: ImageRef,
}

impl Affirmation {
    pub fn new(
        id: AffirmationId,
        text: StringKey,
        accessibility_label: StringKey,
        image: ImageRef,
    ) -> Self {
        Self {
            id,
            text,
            accessibility_label,
            image,
        }
    }

    /// Key shown as the body of the description block.
    ///
    /// The description reuses the primary text; records carry no separate
    /// description string.
    pub fn description(&self) -> &StringKey {
        &self.text
    }

    /// Resolve every reference into a render-ready record.
    ///
    /// Fails on the first reference that cannot be resolved, naming it.
    pub fn resolve(
        &self,
        strings: &dyn StringResolver,
        assets: &dyn AssetResolver,
        locale: &Locale,
    ) -> AffirmationResult<ResolvedAffirmation> {
        let resolved = ResolvedAffirmation {
            id: self.id,
            text: strings.resolve(&self.text, locale)?,
            accessibility_label: strings.resolve(&self.accessibility_label, locale)?,
            image_src: assets.resolve(&self.image)?,
            description_heading: strings.resolve(&StringKey::About, locale)?,
            description: strings.resolve(self.description(), locale)?,
        };
        tracing::debug!(id = %self.id, %locale, "Resolved affirmation");
        Ok(resolved)
    }
}

/// Render-ready affirmation with every reference resolved
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedAffirmation {
    pub id: AffirmationId,
    pub text: String,
    pub accessibility_label: String,
    /// Displayable image URI
    pub image_src: String,
    /// Fixed heading of the description block
    pub description_heading: String,
    pub description: String,
}

/// Resolve a whole list, preserving order.
pub fn resolve_all(
    affirmations: &[Affirmation],
    strings: &dyn StringResolver,
    assets: &dyn AssetResolver,
    locale: &Locale,
) -> AffirmationResult<Vec<ResolvedAffirmation>> {
    affirmations
        .iter()
        .map(|affirmation| affirmation.resolve(strings, assets, locale))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::{BundledAssets, BundledStrings};
    use crate::AffirmationError;

    fn sample() -> Affirmation {
        Affirmation::new(
            AffirmationId(0),
            StringKey::Affirmation(1),
            StringKey::ExpandButtonDescription,
            ImageRef::new(1),
        )
    }

    #[test]
    fn test_affirmation_id_display() {
        assert_eq!(AffirmationId(3).to_string(), "affirmation-3");
        assert_eq!(AffirmationId(3).index(), 3);
    }

    #[test]
    fn test_description_reuses_text() {
        let affirmation = sample();
        assert_eq!(affirmation.description(), &affirmation.text);
    }

    #[test]
    fn test_resolve_fills_every_field() {
        let strings = BundledStrings::load().unwrap();
        let assets = BundledAssets::new();
        let resolved = sample()
            .resolve(&strings, &assets, &Locale::default())
            .unwrap();

        assert_eq!(resolved.id, AffirmationId(0));
        assert_eq!(resolved.text, "I am strong.");
        assert_eq!(resolved.accessibility_label, "See more about this");
        assert_eq!(resolved.description_heading, "About");
        assert_eq!(resolved.description, resolved.text);
        assert!(resolved.image_src.starts_with("data:image/svg+xml;base64,"));
    }

    #[test]
    fn test_resolve_fails_fast_on_missing_asset() {
        let strings = BundledStrings::load().unwrap();
        let assets = BundledAssets::empty();
        let err = sample()
            .resolve(&strings, &assets, &Locale::default())
            .unwrap_err();
        assert!(matches!(err, AffirmationError::MissingAsset(image) if image == ImageRef::new(1)));
    }

    #[test]
    fn test_resolve_fails_fast_on_missing_string() {
        let strings = BundledStrings::load().unwrap();
        let assets = BundledAssets::new();
        let affirmation = Affirmation::new(
            AffirmationId(0),
            StringKey::Affirmation(42),
            StringKey::ExpandButtonDescription,
            ImageRef::new(1),
        );
        let err = affirmation
            .resolve(&strings, &assets, &Locale::default())
            .unwrap_err();
        assert!(matches!(
            err,
            AffirmationError::MissingString { key: StringKey::Affirmation(42), .. }
        ));
    }
}
