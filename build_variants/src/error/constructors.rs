//! Constructors and aggregation helpers for `StyleError`.

use std::sync::Arc;

use super::{AggregatedErrors, StyleError};

impl StyleError {
    /// Tries to build a [`StyleError`] from an iterator of errors.
    ///
    /// Returns `None` for an empty iterator, the inner error when a single
    /// uniquely owned [`Arc`] is supplied, and [`Self::Aggregate`] otherwise.
    #[must_use]
    pub fn try_aggregate<I, E>(errors: I) -> Option<Self>
    where
        I: IntoIterator<Item = E>,
        E: Into<Arc<Self>>,
    {
        let mut arcs: Vec<Arc<Self>> = errors.into_iter().map(Into::into).collect();
        if arcs.len() > 1 {
            return Some(Self::Aggregate(Box::new(AggregatedErrors::new(arcs))));
        }
        let last = arcs.pop()?;
        Some(match Arc::try_unwrap(last) {
            Ok(err) => err,
            Err(shared) => Self::Aggregate(Box::new(AggregatedErrors::new(vec![shared]))),
        })
    }

    /// Attach the owning property name to a styles validation failure.
    ///
    /// # Examples
    ///
    /// ```
    /// use build_variants::StyleError;
    /// use std::sync::Arc;
    ///
    /// let inner = Arc::new(StyleError::NotAnObject { found: "a string" });
    /// let err = StyleError::property("type", inner);
    /// assert!(err.to_string().contains("'type'"));
    /// ```
    #[must_use]
    pub fn property(property: impl Into<String>, source: Arc<Self>) -> Self {
        Self::Property {
            property: property.into(),
            source,
        }
    }

    /// Wrap an error returned by a compound variant resolver.
    #[must_use]
    pub fn resolver(
        property: impl Into<String>,
        variant: impl Into<String>,
        source: Arc<Self>,
    ) -> Self {
        Self::Resolver {
            property: property.into(),
            variant: variant.into(),
            source,
        }
    }

    /// Collapse the errors recorded by a scope into the error `end()` reports.
    ///
    /// A single error is shared as is so callers can match on its variant;
    /// several are combined through [`Self::try_aggregate`].
    pub(crate) fn from_recorded(errors: &[Arc<Self>]) -> Option<Arc<Self>> {
        if let [single] = errors {
            return Some(Arc::clone(single));
        }
        Self::try_aggregate(errors.iter().cloned()).map(Arc::new)
    }
}
