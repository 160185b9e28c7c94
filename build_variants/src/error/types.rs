//! Primary error enum for style composition.

use std::sync::Arc;

use serde_json::Value;
use thiserror::Error;

use super::aggregate::AggregatedErrors;

/// Errors raised while building a style object.
///
/// Selection misses (unknown variants, unknown properties, empty fragments)
/// are not errors. These variants only cover malformed input handed to the
/// builder, reported at the call that received it.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StyleError {
    /// A fragment was not a JSON object.
    #[error("expected a style object but found {found}")]
    NotAnObject {
        /// Kind of JSON value that was supplied instead.
        found: &'static str,
    },

    /// An entry of a variant map was not a JSON object.
    #[error("variant '{variant}' must map to a style object but found {found}")]
    InvalidVariant {
        /// Variant key whose styles were malformed.
        variant: String,
        /// Kind of JSON value that was supplied instead.
        found: &'static str,
    },

    /// Variant styles for a property failed validation.
    #[error("invalid styles for property '{property}': {source}")]
    Property {
        /// Property the styles were registered under.
        property: String,
        /// Underlying validation failure.
        #[source]
        source: Arc<StyleError>,
    },

    /// A compound variant resolver returned an error.
    #[error("resolver for '{property}' variant '{variant}' failed: {source}")]
    Resolver {
        /// Property the compound variant was registered under.
        property: String,
        /// Variant key of the failing resolver.
        variant: String,
        /// Error returned by the resolver.
        #[source]
        source: Arc<StyleError>,
    },

    /// A replacement rule produced something other than a style object.
    #[error("replacement for '{key}' returned {found} instead of a style object")]
    Replacement {
        /// Style key the replacement was registered for.
        key: String,
        /// Kind of JSON value the replacement returned.
        found: &'static str,
    },

    /// Converting between a typed shape and a style object failed.
    #[error("failed to convert style object: {0}")]
    Conversion(#[from] Box<serde_json::Error>),

    /// Several errors were recorded by one builder scope.
    #[error("multiple style errors:\n{0}")]
    Aggregate(Box<AggregatedErrors>),
}

/// Human-readable name of a JSON value's kind, used in error messages.
pub(crate) const fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
