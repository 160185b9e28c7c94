//! Style fragments and the conversions that validate them.
//!
//! A [`Fragment`] is a partial style object: a JSON map from style keys to
//! terminal values or nested fragments. Builders accept anything that
//! implements [`IntoFragment`], so call sites can hand over `json!` literals
//! while malformed input is rejected at the call that received it.

use std::sync::Arc;

use serde::{Deserialize, Serialize, de::DeserializeOwned};
use serde_json::{Map, Value};

use crate::error::value_kind;
use crate::{StyleError, StyleResult, StyleResultExt};

/// A partial style object contributed by one rule.
///
/// # Examples
///
/// ```
/// use build_variants::Fragment;
/// use serde_json::json;
///
/// let fragment = Fragment::try_from(json!({"color": "red"})).expect("object input");
/// assert_eq!(fragment.get("color"), Some(&json!("red")));
/// assert_eq!(fragment, json!({"color": "red"}));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Fragment(Map<String, Value>);

impl Fragment {
    /// Create an empty fragment.
    #[must_use]
    pub fn new() -> Self {
        Self(Map::new())
    }

    /// Serialise a typed style shape into a fragment.
    ///
    /// # Errors
    ///
    /// Returns [`StyleError::Conversion`] when serialisation fails and
    /// [`StyleError::NotAnObject`] when the shape does not serialise to a map.
    ///
    /// # Examples
    ///
    /// ```
    /// use build_variants::Fragment;
    /// use serde::Serialize;
    ///
    /// #[derive(Serialize)]
    /// struct Animate { rotate: i32, scale: i32 }
    ///
    /// let fragment = Fragment::from_serialize(&Animate { rotate: 90, scale: 2 })?;
    /// assert_eq!(fragment.len(), 2);
    /// # Ok::<_, std::sync::Arc<build_variants::StyleError>>(())
    /// ```
    pub fn from_serialize<T: Serialize + ?Sized>(shape: &T) -> StyleResult<Self> {
        serde_json::to_value(shape).into_style()?.into_fragment()
    }

    /// Deserialise the fragment into a typed style shape.
    ///
    /// # Errors
    ///
    /// Returns [`StyleError::Conversion`] when the fragment does not match `T`.
    pub fn deserialize_into<T: DeserializeOwned>(self) -> StyleResult<T> {
        serde_json::from_value(self.into_value()).into_style()
    }

    /// Whether the fragment holds no keys.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of top-level keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Value stored under `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Whether `key` is present at the top level.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Insert `value` under `key`, returning the previous value.
    pub fn insert(&mut self, key: impl Into<String>, value: Value) -> Option<Value> {
        self.0.insert(key.into(), value)
    }

    /// Remove `key`, returning its value. Remaining keys keep their order.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.0.shift_remove(key)
    }

    /// Iterate over top-level keys.
    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.0.keys()
    }

    /// Borrow the underlying JSON map.
    #[must_use]
    pub const fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    /// Consume the fragment, returning the underlying JSON map.
    #[must_use]
    pub fn into_map(self) -> Map<String, Value> {
        self.0
    }

    /// Consume the fragment, returning it as a JSON object value.
    #[must_use]
    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }

    /// Deep-merge `incoming` on top of this fragment.
    ///
    /// See [`crate::merge_value`] for the exact semantics.
    pub fn merge(&mut self, incoming: Self) {
        crate::merge::merge_map(&mut self.0, incoming.0);
    }
}

impl From<Map<String, Value>> for Fragment {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl From<Fragment> for Value {
    fn from(fragment: Fragment) -> Self {
        fragment.into_value()
    }
}

impl TryFrom<Value> for Fragment {
    type Error = StyleError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(map) => Ok(Self(map)),
            other => Err(StyleError::NotAnObject {
                found: value_kind(&other),
            }),
        }
    }
}

impl PartialEq<Value> for Fragment {
    fn eq(&self, other: &Value) -> bool {
        other.as_object().is_some_and(|map| *map == self.0)
    }
}

impl PartialEq<Fragment> for Value {
    fn eq(&self, other: &Fragment) -> bool {
        other == self
    }
}

/// Input accepted wherever the builder expects a single fragment.
pub trait IntoFragment {
    /// Validate the input and convert it into a [`Fragment`].
    ///
    /// # Errors
    ///
    /// Returns [`StyleError::NotAnObject`] when the input is not a JSON object.
    fn into_fragment(self) -> StyleResult<Fragment>;
}

impl IntoFragment for Fragment {
    fn into_fragment(self) -> StyleResult<Fragment> {
        Ok(self)
    }
}

impl IntoFragment for Map<String, Value> {
    fn into_fragment(self) -> StyleResult<Fragment> {
        Ok(Fragment(self))
    }
}

impl IntoFragment for Value {
    fn into_fragment(self) -> StyleResult<Fragment> {
        Fragment::try_from(self).map_err(Arc::new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case(json!("red"), "a string")]
    #[case(json!(["a"]), "an array")]
    #[case(json!(null), "null")]
    fn rejects_non_object_values(#[case] value: Value, #[case] kind: &str) {
        let err = value.into_fragment().expect_err("non-object input");
        assert!(
            matches!(&*err, StyleError::NotAnObject { found } if *found == kind),
            "unexpected error {err:?}"
        );
    }

    #[test]
    fn compares_equal_to_matching_json() {
        let fragment = json!({"color": "red", "> a": {"color": "blue"}})
            .into_fragment()
            .expect("object input");
        assert_eq!(fragment, json!({"> a": {"color": "blue"}, "color": "red"}));
        assert_ne!(fragment, json!({"color": "red"}));
        assert_ne!(fragment, json!("red"));
    }

    #[test]
    fn merge_overlays_incoming_keys() {
        let mut base = Fragment::try_from(json!({"color": "red", "margin": 0})).expect("object");
        base.merge(Fragment::try_from(json!({"color": "lime"})).expect("object"));
        assert_eq!(base, json!({"color": "lime", "margin": 0}));
    }

    #[test]
    fn remove_keeps_remaining_key_order() {
        let mut fragment =
            Fragment::try_from(json!({"c": 1, "a": 2, "b": 3})).expect("object");
        assert_eq!(fragment.remove("a"), Some(json!(2)));
        let keys: Vec<&String> = fragment.keys().collect();
        assert_eq!(keys, ["c", "b"]);
    }

    #[test]
    fn typed_shapes_round_through_fragments() {
        #[derive(Debug, PartialEq, Serialize, Deserialize)]
        struct Animate {
            rotate: i32,
            scale: i32,
        }

        let fragment = Fragment::from_serialize(&Animate { rotate: -90, scale: 50 })
            .expect("struct serialises to a map");
        assert_eq!(fragment, json!({"rotate": -90, "scale": 50}));
        let typed: Animate = fragment.deserialize_into().expect("shape matches");
        assert_eq!(typed, Animate { rotate: -90, scale: 50 });
    }

    #[test]
    fn serialising_a_scalar_shape_is_rejected() {
        let err = Fragment::from_serialize(&42).expect_err("scalars are not fragments");
        assert!(matches!(&*err, StyleError::NotAnObject { found: "a number" }));
    }
}
