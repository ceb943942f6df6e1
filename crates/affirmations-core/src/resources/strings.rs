//! Localized string tables compiled into the binary.

use std::collections::{BTreeMap, HashMap};

use super::{Locale, StringKey, StringResolver};
use crate::error::{AffirmationError, AffirmationResult};

/// Flat `key -> text` JSON objects, one per language
const BUNDLED_TABLES: &[(&str, &str)] = &[
    ("en", include_str!("../../resources/strings/en.json")),
    ("es", include_str!("../../resources/strings/es.json")),
];

/// String resolver backed by the bundled JSON tables
///
/// Lookups try the requested locale first and then the default locale, so a
/// partially translated table still renders. Blank values count as missing.
#[derive(Debug, Clone)]
pub struct BundledStrings {
    tables: BTreeMap<Locale, HashMap<StringKey, String>>,
}

impl BundledStrings {
    /// Parse the tables shipped with the crate
    pub fn load() -> AffirmationResult<Self> {
        Self::from_tables(BUNDLED_TABLES.iter().copied())
    }

    /// Parse `(language, json)` pairs into a resolver
    pub fn from_tables<'a>(
        tables: impl IntoIterator<Item = (&'a str, &'a str)>,
    ) -> AffirmationResult<Self> {
        let mut parsed = BTreeMap::new();
        for (language, json) in tables {
            let locale = Locale::new(language);
            let table: HashMap<StringKey, String> = serde_json::from_str(json)
                .map_err(|source| AffirmationError::StringTable {
                    locale: locale.clone(),
                    source,
                })?;
            tracing::debug!(%locale, entries = table.len(), "Loaded string table");
            parsed.insert(locale, table);
        }
        Ok(Self { tables: parsed })
    }

    /// Bundled locales in sorted order
    pub fn locales(&self) -> Vec<Locale> {
        self.tables.keys().cloned().collect()
    }

    pub fn supports(&self, locale: &Locale) -> bool {
        self.tables.contains_key(locale)
    }

    /// Pick the locale to render with: the requested one when bundled,
    /// otherwise the default.
    pub fn negotiate(&self, requested: &Locale) -> Locale {
        if self.supports(requested) {
            requested.clone()
        } else {
            tracing::info!(%requested, "Locale not bundled, using default");
            Locale::default()
        }
    }

    fn lookup(&self, locale: &Locale, key: &StringKey) -> Option<&str> {
        self.tables
            .get(locale)?
            .get(key)
            .map(String::as_str)
            .filter(|value| !value.trim().is_empty())
    }
}

impl StringResolver for BundledStrings {
    fn resolve(&self, key: &StringKey, locale: &Locale) -> AffirmationResult<String> {
        self.lookup(locale, key)
            .or_else(|| self.lookup(&Locale::default(), key))
            .map(str::to_string)
            .ok_or_else(|| AffirmationError::MissingString {
                key: key.clone(),
                locale: locale.clone(),
            })
    }
}
