//! Startup configuration and the data handed to the root component.

use affirmations_core::resources::{
    BundledAssets, BundledStrings, Locale, StringKey, StringResolver,
};
use affirmations_core::{resolve_all, AffirmationRepository, AffirmationResult, ResolvedAffirmation};
use affirmations_ui::Theme;

/// Settings gathered from the command line and environment
#[derive(Debug, Clone, PartialEq)]
pub struct AppSettings {
    /// Requested locale, before negotiation against the bundled tables
    pub locale: Locale,
    pub theme: Theme,
    pub window_width: f64,
    pub window_height: f64,
}

/// Everything the root component renders, resolved before launch
#[derive(Debug, Clone, PartialEq)]
pub struct AppData {
    pub title: String,
    pub locale: Locale,
    pub theme: Theme,
    pub affirmations: Vec<ResolvedAffirmation>,
    /// Initial list viewport, replaced once the list measures itself
    pub viewport_width: f64,
    pub viewport_height: f64,
}

impl AppData {
    /// Load and resolve the affirmation list.
    ///
    /// Any unresolved reference aborts startup.
    pub fn load(settings: &AppSettings) -> AffirmationResult<Self> {
        let strings = BundledStrings::load()?;
        let assets = BundledAssets::new();
        let locale = strings.negotiate(&settings.locale);

        let affirmations = AffirmationRepository.load_affirmations();
        let affirmations = resolve_all(&affirmations, &strings, &assets, &locale)?;
        let title = strings.resolve(&StringKey::AppName, &locale)?;

        Ok(Self {
            title,
            locale,
            theme: settings.theme.clone(),
            affirmations,
            viewport_width: settings.window_width,
            viewport_height: settings.window_height,
        })
    }
}
