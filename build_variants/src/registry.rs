//! Variant definitions keyed by property name.

use std::collections::BTreeMap;

use crate::Fragment;

/// Fragments defined per variant key, for one property.
pub type VariantDefinitions = BTreeMap<String, Fragment>;

/// Every variant definition recorded during one builder invocation.
///
/// The top-level builder owns the registry and nested scopes borrow it, so a
/// definition recorded anywhere in the invocation tree is visible to later
/// `get` calls. Recording the same key twice overwrites the first fragment.
///
/// # Examples
///
/// ```
/// use build_variants::{Fragment, VariantRegistry};
/// use serde_json::json;
///
/// let mut registry = VariantRegistry::new();
/// registry.record("type", [("error", Fragment::try_from(json!({"background": "red"}))?)]);
/// assert!(registry.lookup("type", "error").is_some());
/// assert!(registry.lookup("type", "info").is_none());
/// # Ok::<_, build_variants::StyleError>(())
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct VariantRegistry {
    properties: BTreeMap<String, VariantDefinitions>,
}

impl VariantRegistry {
    /// Create an empty registry.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            properties: BTreeMap::new(),
        }
    }

    /// Record `definitions` under `property`, keeping unrelated variant keys.
    pub fn record<K, I>(&mut self, property: &str, definitions: I)
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Fragment)>,
    {
        let variants = self.properties.entry(property.to_owned()).or_default();
        for (variant, fragment) in definitions {
            variants.insert(variant.into(), fragment);
        }
    }

    /// Definitions recorded for `property`.
    #[must_use]
    pub fn definitions(&self, property: &str) -> Option<&VariantDefinitions> {
        self.properties.get(property)
    }

    /// Fragment recorded for `variant` of `property`.
    #[must_use]
    pub fn lookup(&self, property: &str, variant: &str) -> Option<&Fragment> {
        self.definitions(property)?.get(variant)
    }

    /// Whether any definition was recorded for `property`.
    #[must_use]
    pub fn contains(&self, property: &str) -> bool {
        self.properties.contains_key(property)
    }

    /// Recorded property names in sorted order.
    pub fn properties(&self) -> impl Iterator<Item = &str> {
        self.properties.keys().map(String::as_str)
    }
}
