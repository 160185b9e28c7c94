//! Normalisation of selected variant values into lookup keys.
//!
//! Variant maps are keyed by the string form of a property value. A
//! [`Selection`] is that string form for zero, one or many values: an absent
//! value selects nothing, a scalar selects one key, and a sequence selects
//! each of its values in order.

use serde_json::{Number, Value};

/// Conversion of a property value into the key of a variant map.
///
/// Booleans map to `"true"` / `"false"` and numbers to their decimal text, so
/// boolean and numeric properties select the same keys a variant map spells
/// out literally. Implement this for enums used as property values.
///
/// # Examples
///
/// ```
/// use build_variants::{Selection, VariantKey};
///
/// #[derive(Clone, Copy)]
/// enum Tone { Info, Error }
///
/// impl VariantKey for Tone {
///     fn variant_key(&self) -> String {
///         match self {
///             Self::Info => "info".to_owned(),
///             Self::Error => "error".to_owned(),
///         }
///     }
/// }
///
/// let selection = Selection::from(Some(Tone::Error));
/// assert_eq!(selection.keys().collect::<Vec<_>>(), ["error"]);
/// ```
pub trait VariantKey {
    /// String form used to look the value up in a variant map.
    fn variant_key(&self) -> String;
}

impl VariantKey for str {
    fn variant_key(&self) -> String {
        self.to_owned()
    }
}

impl VariantKey for String {
    fn variant_key(&self) -> String {
        self.clone()
    }
}

impl<T: VariantKey + ?Sized> VariantKey for &T {
    fn variant_key(&self) -> String {
        (**self).variant_key()
    }
}

macro_rules! display_variant_key {
    ($($ty:ty),* $(,)?) => {
        $(
            impl VariantKey for $ty {
                fn variant_key(&self) -> String {
                    self.to_string()
                }
            }
        )*
    };
}

display_variant_key!(bool, char, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

/// Ordered set of variant keys selected for one rule.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Selection(Vec<String>);

impl Selection {
    /// Selection that matches nothing.
    #[must_use]
    pub const fn none() -> Self {
        Self(Vec::new())
    }

    /// Selection of a single value.
    #[must_use]
    pub fn one<K: VariantKey + ?Sized>(value: &K) -> Self {
        Self(vec![value.variant_key()])
    }

    /// Whether nothing is selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of selected keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Selected keys in selection order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

macro_rules! scalar_selection {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Selection {
                fn from(value: $ty) -> Self {
                    Self::one(&value)
                }
            }
        )*
    };
}

scalar_selection!(
    &str, String, &String, bool, char, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize,
);

impl<T: VariantKey> From<Option<T>> for Selection {
    fn from(value: Option<T>) -> Self {
        value.map_or_else(Self::none, |v| Self::one(&v))
    }
}

impl<T: VariantKey> From<Vec<T>> for Selection {
    fn from(values: Vec<T>) -> Self {
        values.iter().collect()
    }
}

impl<T: VariantKey> From<&Vec<T>> for Selection {
    fn from(values: &Vec<T>) -> Self {
        values.iter().collect()
    }
}

impl<T: VariantKey> From<&[T]> for Selection {
    fn from(values: &[T]) -> Self {
        values.iter().collect()
    }
}

impl<T: VariantKey, const N: usize> From<[T; N]> for Selection {
    fn from(values: [T; N]) -> Self {
        values.iter().collect()
    }
}

/// Selection read from a JSON property value.
///
/// `null` selects nothing, arrays select each defined element, and objects
/// have no key form so they select nothing. Whole-valued floats select the
/// integer key, so `json!(1.0)` selects `"1"`.
impl From<&Value> for Selection {
    fn from(value: &Value) -> Self {
        match value {
            Value::Array(items) => Self(items.iter().filter_map(json_key).collect()),
            other => Self(json_key(other).into_iter().collect()),
        }
    }
}

impl From<Value> for Selection {
    fn from(value: Value) -> Self {
        Self::from(&value)
    }
}

impl<K: VariantKey> FromIterator<K> for Selection {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        Self(iter.into_iter().map(|k| k.variant_key()).collect())
    }
}

/// Whether a JSON value counts as provided.
pub(crate) const fn is_defined(value: &Value) -> bool {
    !matches!(value, Value::Null)
}

fn json_key(value: &Value) -> Option<String> {
    if !is_defined(value) {
        return None;
    }
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Bool(b) => Some(b.variant_key()),
        Value::Number(n) => Some(number_key(n)),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// Integers keep their text; floats use the shortest form, so `1.0` selects
/// `"1"` like an integer-valued property would.
fn number_key(number: &Number) -> String {
    match number.as_f64() {
        Some(float) if number.is_f64() => float.to_string(),
        _ => number.to_string(),
    }
}
