//! Keyed variant registration.

use std::sync::Arc;

use super::VariantsBuilder;
use crate::{FragmentOptions, IntoVariantStyles, Selection, StyleError, VariantStyles};

impl<P> VariantsBuilder<'_, P> {
    /// Define the fragments of `property` and add the one for `selected`.
    ///
    /// Every entry of `styles` is recorded in the registry, whether or not
    /// it is selected and whether or not this scope is enabled, so later
    /// [`Self::get`] calls can reuse it. Booleans select the `"true"` and
    /// `"false"` entries; an absent value selects nothing.
    pub fn variant(
        &mut self,
        property: &str,
        selected: impl Into<Selection>,
        styles: impl IntoVariantStyles,
    ) -> &mut Self {
        self.variant_with_options(property, selected, styles, FragmentOptions::default())
    }

    /// [`Self::variant`] with explicit ordering options.
    pub fn variant_with_options(
        &mut self,
        property: &str,
        selected: impl Into<Selection>,
        styles: impl IntoVariantStyles,
        options: FragmentOptions,
    ) -> &mut Self {
        let styles = match styles.into_variant_styles() {
            Ok(styles) => styles,
            Err(err) => {
                self.record_error(Arc::new(StyleError::property(property, err)));
                return self;
            }
        };
        self.registry
            .get_mut()
            .record(property, styles.iter().map(|(k, f)| (k, f.clone())));
        if self.apply {
            self.select(&styles, &selected.into(), options);
        }
        self
    }

    /// Define the fragments of `property` and add one per selected value,
    /// in selection order.
    pub fn variants(
        &mut self,
        property: &str,
        selected: impl Into<Selection>,
        styles: impl IntoVariantStyles,
    ) -> &mut Self {
        self.variant_with_options(property, selected, styles, FragmentOptions::default())
    }

    /// [`Self::variants`] with explicit ordering options.
    pub fn variants_with_options(
        &mut self,
        property: &str,
        selected: impl Into<Selection>,
        styles: impl IntoVariantStyles,
        options: FragmentOptions,
    ) -> &mut Self {
        self.variant_with_options(property, selected, styles, options)
    }

    pub(super) fn select(
        &mut self,
        styles: &VariantStyles,
        selection: &Selection,
        options: FragmentOptions,
    ) {
        for key in selection.keys() {
            if let Some(fragment) = styles.get(key) {
                self.push(fragment.clone(), options);
            }
        }
    }
}
