//! Conversions from external error types into `StyleError`.

use super::StyleError;

/// Route JSON encoding or decoding failures to [`StyleError::Conversion`].
impl From<serde_json::Error> for StyleError {
    fn from(e: serde_json::Error) -> Self {
        Self::Conversion(Box::new(e))
    }
}
