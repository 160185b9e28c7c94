//! Variant maps: the fragments a property can select between.

use std::sync::Arc;

use serde_json::Value;

use crate::error::value_kind;
use crate::{Fragment, IntoFragment, StyleError, StyleResult, VariantKey};

/// Fragments keyed by variant, in declaration order.
///
/// # Examples
///
/// ```
/// use build_variants::VariantStyles;
/// use serde_json::json;
///
/// let styles = VariantStyles::try_from(json!({
///     "success": {"background": "green"},
///     "error": {"background": "red"}
/// }))?;
/// assert_eq!(styles.len(), 2);
/// assert_eq!(styles.get("error").map(|f| f.len()), Some(1));
/// # Ok::<_, build_variants::StyleError>(())
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct VariantStyles {
    entries: Vec<(String, Fragment)>,
}

impl VariantStyles {
    /// Create an empty variant map.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Set the fragment for `variant`, replacing an earlier one in place.
    pub fn insert<K: VariantKey>(&mut self, variant: K, fragment: Fragment) {
        let key = variant.variant_key();
        if let Some(slot) = self.entries.iter_mut().find(|(k, _)| *k == key) {
            slot.1 = fragment;
        } else {
            self.entries.push((key, fragment));
        }
    }

    /// Builder-style form of [`Self::insert`].
    #[must_use]
    pub fn with<K: VariantKey>(mut self, variant: K, fragment: Fragment) -> Self {
        self.insert(variant, fragment);
        self
    }

    /// Fragment for `variant`.
    #[must_use]
    pub fn get(&self, variant: &str) -> Option<&Fragment> {
        self.entries
            .iter()
            .find_map(|(k, fragment)| (k == variant).then_some(fragment))
    }

    /// Number of variants.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no variant is defined.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Variants and their fragments in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Fragment)> {
        self.entries.iter().map(|(k, f)| (k.as_str(), f))
    }
}

impl IntoIterator for VariantStyles {
    type Item = (String, Fragment);
    type IntoIter = std::vec::IntoIter<(String, Fragment)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl TryFrom<Value> for VariantStyles {
    type Error = StyleError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        let map = match value {
            Value::Object(map) => map,
            other => {
                return Err(StyleError::NotAnObject {
                    found: value_kind(&other),
                });
            }
        };
        let mut styles = Self::new();
        for (variant, styles_value) in map {
            match styles_value {
                Value::Object(fragment) => styles.entries.push((variant, fragment.into())),
                other => {
                    return Err(StyleError::InvalidVariant {
                        variant,
                        found: value_kind(&other),
                    });
                }
            }
        }
        Ok(styles)
    }
}

/// Input accepted wherever the builder expects a variant map.
pub trait IntoVariantStyles {
    /// Validate the input and convert it into [`VariantStyles`].
    ///
    /// # Errors
    ///
    /// Returns [`StyleError::NotAnObject`] when the map itself is malformed and
    /// [`StyleError::InvalidVariant`] when one of its entries is.
    fn into_variant_styles(self) -> StyleResult<VariantStyles>;
}

impl IntoVariantStyles for VariantStyles {
    fn into_variant_styles(self) -> StyleResult<VariantStyles> {
        Ok(self)
    }
}

impl IntoVariantStyles for Value {
    fn into_variant_styles(self) -> StyleResult<VariantStyles> {
        VariantStyles::try_from(self).map_err(Arc::new)
    }
}

impl<K, F, const N: usize> IntoVariantStyles for [(K, F); N]
where
    K: VariantKey,
    F: IntoFragment,
{
    fn into_variant_styles(self) -> StyleResult<VariantStyles> {
        let mut styles = VariantStyles::new();
        for (variant, fragment) in self {
            let key = variant.variant_key();
            let fragment = match fragment.into_fragment() {
                Ok(fragment) => fragment,
                Err(err) => {
                    let found = match &*err {
                        StyleError::NotAnObject { found } => Some(*found),
                        _ => None,
                    };
                    return Err(found.map_or(err, |found| {
                        Arc::new(StyleError::InvalidVariant {
                            variant: key,
                            found,
                        })
                    }));
                }
            };
            styles.insert(key.as_str(), fragment);
        }
        Ok(styles)
    }
}
