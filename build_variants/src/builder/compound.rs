//! Compound variants composed from previously defined fragments.

use std::sync::Arc;

use super::VariantsBuilder;
use crate::{
    Fragment, FragmentOptions, Selection, StyleError, StyleResult, VariantKey, VariantStyles,
};

type BoxedResolver<'f, P> =
    Box<dyn Fn(&mut VariantsBuilder<'_, P>) -> StyleResult<Fragment> + 'f>;

/// Resolver functions keyed by variant, in declaration order.
///
/// Each resolver receives a fresh child scope sharing the variant registry
/// and returns the fragment for its variant, usually by calling
/// [`VariantsBuilder::get`] on earlier definitions.
///
/// # Examples
///
/// ```
/// use build_variants::{Resolvers, VariantsBuilder};
/// use serde_json::json;
///
/// let props = ();
/// let css = VariantsBuilder::new(&props)
///     .variant("type", "default", json!({
///         "default": {"background": "white"},
///         "error": {"background": "red"}
///     }))
///     .compound_variant("variant", "ko", Resolvers::new()
///         .on("ok", |b| b.get("type", "default").end())
///         .on("ko", |b| b.get("type", "error").css(json!({"color": "pink"})).end()))
///     .end()?;
///
/// assert_eq!(css, json!({"background": "red", "color": "pink"}));
/// # Ok::<_, std::sync::Arc<build_variants::StyleError>>(())
/// ```
pub struct Resolvers<'f, P> {
    entries: Vec<(String, BoxedResolver<'f, P>)>,
}

impl<'f, P> Resolvers<'f, P> {
    /// Create an empty resolver set.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Register the resolver for `variant`, replacing an earlier one.
    #[must_use]
    pub fn on<K, F>(mut self, variant: K, resolver: F) -> Self
    where
        K: VariantKey,
        F: Fn(&mut VariantsBuilder<'_, P>) -> StyleResult<Fragment> + 'f,
    {
        let key = variant.variant_key();
        let boxed: BoxedResolver<'f, P> = Box::new(resolver);
        if let Some(slot) = self.entries.iter_mut().find(|(k, _)| *k == key) {
            slot.1 = boxed;
        } else {
            self.entries.push((key, boxed));
        }
        self
    }

    /// Number of variants with a resolver.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no resolver is registered.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Variant keys in declaration order.
    pub fn variants(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }
}

impl<P> Default for Resolvers<'_, P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P> VariantsBuilder<'_, P> {
    /// Define `property` by running every resolver, then add the fragment
    /// for `selected`.
    ///
    /// All resolvers run on every call, selected or not, and their results
    /// are recorded in the registry before anything is added. Only the
    /// contribution of the selected fragment depends on this scope being
    /// enabled.
    pub fn compound_variant(
        &mut self,
        property: &str,
        selected: impl Into<Selection>,
        resolvers: Resolvers<'_, P>,
    ) -> &mut Self {
        let composed = self.compose(property, &resolvers);
        if self.apply {
            self.select(&composed, &selected.into(), FragmentOptions::default());
        }
        self
    }

    /// [`Self::compound_variant`] for each selected value, in order.
    ///
    /// The resolver set runs once per selected value. With nothing selected
    /// no resolver runs and nothing is recorded.
    pub fn compound_variants(
        &mut self,
        property: &str,
        selected: impl Into<Selection>,
        resolvers: Resolvers<'_, P>,
    ) -> &mut Self {
        for key in selected.into().keys() {
            let composed = self.compose(property, &resolvers);
            if self.apply {
                self.select(&composed, &Selection::one(key), FragmentOptions::default());
            }
        }
        self
    }

    fn compose(&mut self, property: &str, resolvers: &Resolvers<'_, P>) -> VariantStyles {
        let mut composed = VariantStyles::new();
        for (variant, resolver) in &resolvers.entries {
            let outcome = {
                let mut scope = self.scope(true);
                resolver(&mut scope)
            };
            match outcome {
                Ok(fragment) => composed.insert(variant.as_str(), fragment),
                Err(err) => self.record_error(Arc::new(StyleError::resolver(
                    property,
                    variant.as_str(),
                    err,
                ))),
            }
        }
        self.registry
            .get_mut()
            .record(property, composed.iter().map(|(k, f)| (k, f.clone())));
        composed
    }
}
