//! Card artwork compiled into the binary and served as `data:` URIs.

use std::borrow::Cow;
use std::collections::HashMap;

use base64::{engine::general_purpose::STANDARD, Engine};

use super::{AssetResolver, ImageRef};
use crate::error::{AffirmationError, AffirmationResult};

const BUNDLED_ARTWORK: [&str; 10] = [
    include_str!("../../resources/images/image1.svg"),
    include_str!("../../resources/images/image2.svg"),
    include_str!("../../resources/images/image3.svg"),
    include_str!("../../resources/images/image4.svg"),
    include_str!("../../resources/images/image5.svg"),
    include_str!("../../resources/images/image6.svg"),
    include_str!("../../resources/images/image7.svg"),
    include_str!("../../resources/images/image8.svg"),
    include_str!("../../resources/images/image9.svg"),
    include_str!("../../resources/images/image10.svg"),
];

/// Asset resolver backed by embedded SVG artwork
#[derive(Debug, Clone, Default)]
pub struct BundledAssets {
    artwork: HashMap<ImageRef, Cow<'static, str>>,
}

impl BundledAssets {
    /// Resolver holding the artwork shipped with the crate
    pub fn new() -> Self {
        let mut assets = Self::empty();
        for (index, svg) in BUNDLED_ARTWORK.iter().enumerate() {
            assets.insert(ImageRef::new(index as u8 + 1), *svg);
        }
        assets
    }

    /// Resolver with no artwork at all
    pub fn empty() -> Self {
        Self::default()
    }

    /// Register SVG markup for an image, replacing any previous artwork
    pub fn insert(&mut self, image: ImageRef, svg: impl Into<Cow<'static, str>>) {
        self.artwork.insert(image, svg.into());
    }

    pub fn len(&self) -> usize {
        self.artwork.len()
    }

    pub fn is_empty(&self) -> bool {
        self.artwork.is_empty()
    }
}

impl AssetResolver for BundledAssets {
    fn resolve(&self, image: &ImageRef) -> AffirmationResult<String> {
        let svg = self
            .artwork
            .get(image)
            .filter(|svg| !svg.trim().is_empty())
            .ok_or(AffirmationError::MissingAsset(*image))?;
        Ok(format!("data:image/svg+xml;base64,{}", STANDARD.encode(svg.as_bytes())))
    }
}
