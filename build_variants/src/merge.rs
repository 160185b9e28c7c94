//! Deep merge with array concatenation.
//!
//! Generic structural merges replace arrays wholesale. Style objects instead
//! accumulate: arrays concatenate, and a scalar meeting an array is promoted
//! to a single leading element: `[a] + b` appends `b`, while `a + [b]`
//! yields `[a, b]`.

use serde_json::{Map, Value};

/// Overlay `incoming` onto `target`, updating `target` in place.
///
/// Behaviour:
/// - When `target` is an array, `incoming` is appended (arrays concatenate,
///   any other value becomes one trailing element).
/// - When `incoming` is an array and `target` is not, the result is `target`
///   followed by the elements of `incoming`.
/// - Objects are merged recursively; keys missing from `target` are inserted.
/// - Otherwise `incoming` replaces `target`. An explicit `null` counts as a
///   value and replaces, while keys absent from `incoming` leave `target`
///   untouched.
///
/// # Examples
///
/// ```rust
/// use build_variants::merge_value;
/// use serde_json::json;
///
/// let mut acc = json!({"color": "red", "> a": {"color": "blue"}});
/// merge_value(&mut acc, json!({"> a": {"margin": 0}, "color": "lime"}));
/// assert_eq!(acc, json!({"color": "lime", "> a": {"color": "blue", "margin": 0}}));
///
/// // Arrays concatenate and scalars are promoted.
/// merge_value(&mut acc, json!({"color": ["pink"]}));
/// assert_eq!(acc["color"], json!(["lime", "pink"]));
/// merge_value(&mut acc, json!({"color": "black"}));
/// assert_eq!(acc["color"], json!(["lime", "pink", "black"]));
/// ```
pub fn merge_value(target: &mut Value, incoming: Value) {
    match (target, incoming) {
        (Value::Array(existing), Value::Array(items)) => existing.extend(items),
        (Value::Array(existing), other) => existing.push(other),
        (target, Value::Array(items)) => {
            let mut merged = Vec::with_capacity(items.len() + 1);
            merged.push(target.take());
            merged.extend(items);
            *target = Value::Array(merged);
        }
        (Value::Object(existing), Value::Object(map)) => merge_map(existing, map),
        (target, other) => *target = other,
    }
}

/// Merge the entries of `incoming` into `target` key by key.
pub(crate) fn merge_map(target: &mut Map<String, Value>, incoming: Map<String, Value>) {
    for (key, value) in incoming {
        match target.get_mut(&key) {
            Some(existing) => merge_value(existing, value),
            None => {
                target.insert(key, value);
            }
        }
    }
}
