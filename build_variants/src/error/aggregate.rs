//! Aggregation container for multiple `StyleError` values.

use std::{error::Error, fmt, sync::Arc};

use super::StyleError;

/// Collection of [`StyleError`]s recorded by a single builder scope.
///
/// # Examples
///
/// ```
/// use build_variants::StyleError;
///
/// let err = StyleError::try_aggregate(vec![
///     StyleError::NotAnObject { found: "a string" },
///     StyleError::Replacement { key: "opacity".into(), found: "null" },
/// ]);
/// if let Some(StyleError::Aggregate(agg)) = err {
///     assert_eq!(agg.len(), 2);
/// }
/// ```
#[derive(Debug)]
pub struct AggregatedErrors(Vec<Arc<StyleError>>);

impl AggregatedErrors {
    /// Create a new aggregation from a vector of errors.
    #[must_use]
    pub const fn new(errors: Vec<Arc<StyleError>>) -> Self {
        Self(errors)
    }

    /// Iterate over the contained errors.
    #[must_use = "iterators should be consumed to inspect errors"]
    pub fn iter(&self) -> impl Iterator<Item = &StyleError> {
        self.0.iter().map(Arc::as_ref)
    }

    /// Number of errors in the aggregation.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the aggregation holds no errors.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for AggregatedErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, e) in self.0.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}: {e}", i + 1)?;
        }
        Ok(())
    }
}

impl Error for AggregatedErrors {}
