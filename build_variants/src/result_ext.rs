//! Extensions for mapping errors to `StyleResult` concisely.
//!
//! These helpers reduce repetitive `.map_err(|e| Arc::new(StyleError::from(e)))`
//! patterns when converting external error types into the crate's
//! `StyleResult<T>` alias (`Result<T, Arc<StyleError>>`).
//!
//! # Examples
//!
//! ```
//! use build_variants::{StyleResult, StyleResultExt};
//!
//! fn encode() -> StyleResult<serde_json::Value> {
//!     serde_json::to_value(42).into_style()
//! }
//! # assert!(encode().is_ok());
//! ```

use std::sync::Arc;

use crate::{StyleError, StyleResult};

/// Generic extension for mapping any `Result<T, E>` with `E: Into<StyleError>`
/// into a `StyleResult<T>`.
pub trait StyleResultExt<T, E> {
    /// Convert `Result<T, E>` into `StyleResult<T>` using `Into<StyleError>`.
    ///
    /// # Errors
    ///
    /// Propagates the original error after conversion into `Arc<StyleError>`.
    fn into_style(self) -> StyleResult<T>;
}

impl<T, E> StyleResultExt<T, E> for Result<T, E>
where
    E: Into<StyleError>,
{
    fn into_style(self) -> StyleResult<T> {
        self.map_err(|e| Arc::new(e.into()))
    }
}
