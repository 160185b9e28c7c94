//! Fluent rule registration bound to one set of component properties.
//!
//! A [`VariantsBuilder`] evaluates every rule as soon as it is registered:
//! selected fragments go to the scope's [`FragmentMerger`], variant maps go to
//! the shared [`VariantRegistry`], and [`VariantsBuilder::end`] resolves the
//! result. Callbacks run against child scopes that borrow the registry but keep
//! their own pending fragments, so each callback contributes exactly one
//! merged fragment to its parent.
//!
//! # Example
//!
//! ```rust
//! use build_variants::VariantsBuilder;
//! use serde_json::json;
//!
//! struct ButtonProps {
//!     tone: Option<&'static str>,
//!     important: bool,
//! }
//!
//! let props = ButtonProps { tone: Some("success"), important: true };
//! let css = VariantsBuilder::new(&props)
//!     .css(json!({"color": "white"}))
//!     .variant("tone", props.tone, json!({
//!         "success": {"background": "green"},
//!         "error": {"background": "red"}
//!     }))
//!     .variant("important", props.important, json!({
//!         "true": {"textDecorationLine": "underline"},
//!         "false": {}
//!     }))
//!     .end()?;
//!
//! assert_eq!(css, json!({
//!     "color": "white",
//!     "background": "green",
//!     "textDecorationLine": "underline"
//! }));
//! # Ok::<_, std::sync::Arc<build_variants::StyleError>>(())
//! ```

mod compound;
mod replace;
mod variants;

use std::fmt;
use std::sync::Arc;

use serde::de::DeserializeOwned;

use crate::{
    Condition, Fragment, FragmentMerger, FragmentOptions, IntoFragment, Selection, StyleError,
    StyleResult, VariantRegistry,
};

pub use compound::Resolvers;

use replace::Replacement;

/// Registry handle: owned by the top-level scope, borrowed by child scopes.
enum RegistryRef<'a> {
    Owned(VariantRegistry),
    Borrowed(&'a mut VariantRegistry),
}

impl RegistryRef<'_> {
    fn get(&self) -> &VariantRegistry {
        match self {
            Self::Owned(registry) => registry,
            Self::Borrowed(registry) => &**registry,
        }
    }

    fn get_mut(&mut self) -> &mut VariantRegistry {
        match self {
            Self::Owned(registry) => registry,
            Self::Borrowed(registry) => &mut **registry,
        }
    }
}

/// One builder scope bound to a properties value.
///
/// Registration methods return `&mut Self` so calls chain; [`Self::end`]
/// resolves the chain into a [`Fragment`].
pub struct VariantsBuilder<'a, P> {
    props: &'a P,
    apply: bool,
    registry: RegistryRef<'a>,
    merger: FragmentMerger,
    replacements: Vec<Replacement<'a>>,
    errors: Vec<Arc<StyleError>>,
}

impl<'a, P> VariantsBuilder<'a, P> {
    /// Create a top-level scope for `props` with a fresh variant registry.
    #[must_use]
    pub const fn new(props: &'a P) -> Self {
        Self {
            props,
            apply: true,
            registry: RegistryRef::Owned(VariantRegistry::new()),
            merger: FragmentMerger::new(),
            replacements: Vec::new(),
            errors: Vec::new(),
        }
    }

    /// Open a child scope sharing this scope's props and registry.
    fn scope(&mut self, apply: bool) -> VariantsBuilder<'_, P> {
        VariantsBuilder {
            props: self.props,
            apply,
            registry: RegistryRef::Borrowed(self.registry.get_mut()),
            merger: FragmentMerger::new(),
            replacements: Vec::new(),
            errors: Vec::new(),
        }
    }

    /// Properties this scope was created for.
    #[must_use]
    pub const fn props(&self) -> &'a P {
        self.props
    }

    /// Whether fragments registered in this scope contribute to its result.
    #[must_use]
    pub const fn is_applied(&self) -> bool {
        self.apply
    }

    /// Variant definitions recorded so far in this invocation.
    #[must_use]
    pub fn registry(&self) -> &VariantRegistry {
        self.registry.get()
    }

    /// Fragments pending in this scope.
    #[must_use]
    pub const fn pending(&self) -> &FragmentMerger {
        &self.merger
    }

    /// Add a style fragment unconditionally.
    ///
    /// Empty fragments are ignored. Nothing is added when the scope is
    /// disabled, but malformed input is still reported.
    pub fn css(&mut self, fragment: impl IntoFragment) -> &mut Self {
        self.css_with_options(fragment, FragmentOptions::default())
    }

    /// [`Self::css`] with explicit ordering options.
    pub fn css_with_options(
        &mut self,
        fragment: impl IntoFragment,
        options: FragmentOptions,
    ) -> &mut Self {
        match fragment.into_fragment() {
            Ok(fragment) if self.apply => self.push(fragment, options),
            Ok(_) => {}
            Err(err) => self.record_error(err),
        }
        self
    }

    /// Add a fragment of values for object shapes that are not CSS.
    ///
    /// Identical to [`Self::css`]; reads better when the builder produces,
    /// for example, animation targets.
    pub fn values(&mut self, fragment: impl IntoFragment) -> &mut Self {
        self.css(fragment)
    }

    /// Add the fragment produced by `build` on an isolated child scope.
    ///
    /// The child shares the variant registry, so `build` can compose
    /// previously defined variants into a nested object such as a pseudo
    /// selector. `build` is not called when this scope is disabled.
    pub fn css_from<F>(&mut self, build: F) -> &mut Self
    where
        F: FnOnce(&mut VariantsBuilder<'_, P>) -> StyleResult<Fragment>,
    {
        self.css_from_with_options(build, FragmentOptions::default())
    }

    /// [`Self::css_from`] with explicit ordering options.
    pub fn css_from_with_options<F>(&mut self, build: F, options: FragmentOptions) -> &mut Self
    where
        F: FnOnce(&mut VariantsBuilder<'_, P>) -> StyleResult<Fragment>,
    {
        if !self.apply {
            return self;
        }
        let outcome = {
            let mut scope = self.scope(true);
            build(&mut scope)
        };
        self.accept(outcome, options)
    }

    /// Add the fragment produced by `build` on a child scope enabled by
    /// `condition`.
    ///
    /// The condition is evaluated once. When it is false the child records
    /// variant definitions but contributes no fragment, so later
    /// [`Self::get`] calls can still reuse what it defined.
    pub fn when<C, F>(&mut self, condition: C, build: F) -> &mut Self
    where
        C: Condition,
        F: FnOnce(&mut VariantsBuilder<'_, P>) -> StyleResult<Fragment>,
    {
        self.when_with_options(condition, build, FragmentOptions::default())
    }

    /// [`Self::when`] with explicit ordering options.
    pub fn when_with_options<C, F>(
        &mut self,
        condition: C,
        build: F,
        options: FragmentOptions,
    ) -> &mut Self
    where
        C: Condition,
        F: FnOnce(&mut VariantsBuilder<'_, P>) -> StyleResult<Fragment>,
    {
        let apply = condition.evaluate();
        let outcome = {
            let mut scope = self.scope(apply);
            build(&mut scope)
        };
        self.accept(outcome, options)
    }

    /// Add previously defined fragments of `property` for the selected
    /// values, in selection order.
    ///
    /// Unknown properties and values without a definition are skipped.
    pub fn get(&mut self, property: &str, selected: impl Into<Selection>) -> &mut Self {
        self.get_with_options(property, selected, FragmentOptions::default())
    }

    /// [`Self::get`] with explicit ordering options.
    pub fn get_with_options(
        &mut self,
        property: &str,
        selected: impl Into<Selection>,
        options: FragmentOptions,
    ) -> &mut Self {
        if !self.apply {
            return self;
        }
        let selection = selected.into();
        let fragments: Vec<Fragment> = self
            .registry
            .get()
            .definitions(property)
            .map(|definitions| {
                selection
                    .keys()
                    .filter_map(|key| definitions.get(key).cloned())
                    .collect()
            })
            .unwrap_or_default();
        for fragment in fragments {
            self.push(fragment, options);
        }
        self
    }

    /// Merge the pending fragments and apply replacement rules.
    ///
    /// # Errors
    ///
    /// Returns the validation errors recorded in this scope, aggregated when
    /// there are several, or a [`StyleError::Replacement`] when a replacement
    /// rule produces something other than a style object.
    pub fn end(&self) -> StyleResult<Fragment> {
        if let Some(err) = StyleError::from_recorded(&self.errors) {
            return Err(err);
        }
        let merged = self.merger.merge();
        if self.replacements.is_empty() {
            return Ok(merged);
        }
        self.apply_replacements(merged)
    }

    /// [`Self::end`], deserialising the result into a typed shape.
    ///
    /// # Errors
    ///
    /// Returns the errors of [`Self::end`], or [`StyleError::Conversion`]
    /// when the merged object does not match `T`.
    pub fn end_as<T: DeserializeOwned>(&self) -> StyleResult<T> {
        self.end()?.deserialize_into()
    }

    /// Emit props, variant definitions and pending fragments through
    /// `tracing` at debug level.
    pub fn debug(&mut self) -> &mut Self
    where
        P: fmt::Debug,
    {
        tracing::debug!(props = ?self.props, apply = self.apply, "style builder props");
        tracing::debug!(variants = ?self.registry.get(), "style builder variants");
        self.merger.debug();
        self
    }

    fn accept(&mut self, outcome: StyleResult<Fragment>, options: FragmentOptions) -> &mut Self {
        match outcome {
            Ok(fragment) if self.apply => self.push(fragment, options),
            Ok(_) => {}
            Err(err) => self.record_error(err),
        }
        self
    }

    fn push(&mut self, fragment: Fragment, options: FragmentOptions) {
        if fragment.is_empty() {
            return;
        }
        self.merger.add(fragment, options);
    }

    fn record_error(&mut self, err: Arc<StyleError>) {
        tracing::warn!(error = %err, "rejected style input");
        self.errors.push(err);
    }
}
