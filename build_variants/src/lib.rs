//! Declarative composition of style objects from component properties.
//!
//! A [`VariantsBuilder`] is bound to one properties value. Rules registered
//! on it select style fragments (unconditionally, by property value, behind a
//! condition, or composed from earlier definitions) and [`VariantsBuilder::end`]
//! deep-merges the selected fragments into a single [`Fragment`].
//!
//! Fragments are `serde_json` objects. Nested objects merge key by key,
//! arrays accumulate, and everything else is overwritten by the later
//! fragment. Precedence follows [`FragmentOptions`]: ascending weight, then
//! public before private, then registration order.
//!
//! ```rust
//! use build_variants::{FragmentOptions, build_variants};
//! use serde_json::json;
//!
//! struct Props {
//!     disabled: bool,
//! }
//!
//! let props = Props { disabled: true };
//! let css = build_variants(&props)
//!     .css_with_options(json!({"opacity": 0.5}), FragmentOptions::weighted(1))
//!     .css(json!({"opacity": 1, "color": "black"}))
//!     .when(props.disabled, |b| b.css(json!({"color": "grey"})).end())
//!     .end()?;
//!
//! assert_eq!(css, json!({"opacity": 0.5, "color": "grey"}));
//! # Ok::<_, std::sync::Arc<build_variants::StyleError>>(())
//! ```

use std::sync::Arc;

mod builder;
mod condition;
mod error;
mod fragment;
mod merge;
mod merger;
mod options;
mod registry;
mod result_ext;
mod selection;
mod styles;

pub use builder::{Resolvers, VariantsBuilder};
pub use condition::Condition;
pub use error::{AggregatedErrors, StyleError};
pub use fragment::{Fragment, IntoFragment};
pub use merge::merge_value;
pub use merger::{FragmentMerger, PendingFragment};
pub use options::FragmentOptions;
pub use registry::{VariantDefinitions, VariantRegistry};
pub use result_ext::StyleResultExt;
pub use selection::{Selection, VariantKey};
pub use styles::{IntoVariantStyles, VariantStyles};

/// Result alias for style composition.
pub type StyleResult<T> = Result<T, Arc<StyleError>>;

/// Start a style builder for `props`.
///
/// Shorthand for [`VariantsBuilder::new`].
#[must_use]
pub const fn build_variants<P>(props: &P) -> VariantsBuilder<'_, P> {
    VariantsBuilder::new(props)
}
