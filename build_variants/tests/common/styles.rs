//! Variant maps shared across scenarios.

use serde_json::{Value, json};

/// Background per message type. `unset` is intentionally absent.
pub fn type_styles() -> Value {
    json!({
        "default": {"background": "white"},
        "info": {"background": "blue"},
        "success": {"background": "green"},
        "error": {"background": "red"}
    })
}

/// Font decorations selected as a list.
pub fn font_styles() -> Value {
    json!({
        "strong": {"fontWeight": "bold"},
        "underline": {"textDecorationLine": "underline"},
        "italic": {"textDecoration": "italic"}
    })
}

/// Border styles, including an empty `unset` entry.
pub fn border_styles() -> Value {
    json!({
        "unset": {},
        "solid": {"border": "1px solid solid"},
        "dotted": {"border": "1px solid dotted"}
    })
}
