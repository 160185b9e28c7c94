//! Post-merge replacement of individual style keys.

use std::sync::Arc;

use serde_json::Value;

use super::VariantsBuilder;
use crate::{Fragment, IntoFragment, StyleError, StyleResult};

type Replacer<'a> = Box<dyn Fn(&Value) -> StyleResult<Fragment> + 'a>;

/// Rule that swaps one key of the merged object for a computed fragment.
pub(super) struct Replacement<'a> {
    key: String,
    replacer: Replacer<'a>,
}

impl<'a, P> VariantsBuilder<'a, P> {
    /// Replace `key` in the finalised object with the fragment `f` builds
    /// from its value.
    ///
    /// When the merged object holds `key`, the key is removed and the
    /// fragment returned by `f` is deep-merged in its place. Rules run in
    /// registration order during [`Self::end`]; a missing key leaves the
    /// object untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use build_variants::VariantsBuilder;
    /// use serde_json::json;
    ///
    /// let props = ();
    /// let css = VariantsBuilder::new(&props)
    ///     .css(json!({"opacity": 0.5}))
    ///     .replace("opacity", |value| json!({"opacity": value, "MozOpacity": value}))
    ///     .end()?;
    ///
    /// assert_eq!(css, json!({"opacity": 0.5, "MozOpacity": 0.5}));
    /// # Ok::<_, std::sync::Arc<build_variants::StyleError>>(())
    /// ```
    pub fn replace<F, R>(&mut self, key: &str, f: F) -> &mut Self
    where
        F: Fn(&Value) -> R + 'a,
        R: IntoFragment,
    {
        let owned = key.to_owned();
        let replacer: Replacer<'a> = Box::new(move |value| {
            f(value).into_fragment().map_err(|err| match &*err {
                StyleError::NotAnObject { found } => Arc::new(StyleError::Replacement {
                    key: owned.clone(),
                    found: *found,
                }),
                _ => Arc::clone(&err),
            })
        });
        self.replacements.push(Replacement {
            key: key.to_owned(),
            replacer,
        });
        self
    }

    pub(super) fn apply_replacements(&self, mut merged: Fragment) -> StyleResult<Fragment> {
        for rule in &self.replacements {
            let Some(value) = merged.remove(&rule.key) else {
                continue;
            };
            let produced = (rule.replacer)(&value)?;
            tracing::trace!(key = %rule.key, "applied style replacement");
            merged.merge(produced);
        }
        Ok(merged)
    }
}
