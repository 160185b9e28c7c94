//! Storage and deterministic resolution of pending fragments.

use crate::{Fragment, FragmentOptions};

/// A fragment waiting to be merged, with its ordering metadata.
#[derive(Clone, Debug, PartialEq)]
pub struct PendingFragment {
    fragment: Fragment,
    options: FragmentOptions,
}

impl PendingFragment {
    /// The stored fragment.
    #[must_use]
    pub const fn fragment(&self) -> &Fragment {
        &self.fragment
    }

    /// Ordering metadata for the fragment.
    #[must_use]
    pub const fn options(&self) -> FragmentOptions {
        self.options
    }
}

/// Accumulates fragments and deep-merges them on demand.
///
/// Entries are kept in registration order. Structurally equal fragments are
/// stored as distinct entries.
///
/// # Examples
///
/// ```
/// use build_variants::{Fragment, FragmentMerger, FragmentOptions};
/// use serde_json::json;
///
/// let mut merger = FragmentMerger::new();
/// merger.add(
///     Fragment::try_from(json!({"color": "red"}))?,
///     FragmentOptions::weighted(10),
/// );
/// merger.add(
///     Fragment::try_from(json!({"color": "lime", "background": "silver"}))?,
///     FragmentOptions::default(),
/// );
/// assert_eq!(merger.merge(), json!({"color": "red", "background": "silver"}));
/// # Ok::<_, build_variants::StyleError>(())
/// ```
#[derive(Clone, Debug, Default)]
pub struct FragmentMerger {
    entries: Vec<PendingFragment>,
}

impl FragmentMerger {
    /// Create an empty merger.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Store `fragment` with its ordering `options`.
    pub fn add(&mut self, fragment: Fragment, options: FragmentOptions) -> &mut Self {
        self.entries.push(PendingFragment { fragment, options });
        self
    }

    /// Number of stored fragments.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no fragment is stored.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Stored fragments in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &PendingFragment> {
        self.entries.iter()
    }

    /// Deep-merge every stored fragment into one object.
    ///
    /// Fragments are ordered by ascending weight, then public before private,
    /// then registration order, and folded left to right with
    /// [`crate::merge_value`] semantics.
    #[must_use]
    pub fn merge(&self) -> Fragment {
        let mut ordered: Vec<&PendingFragment> = self.entries.iter().collect();
        ordered.sort_by_key(|entry| entry.options.sort_key());
        tracing::trace!(fragments = ordered.len(), "merging style fragments");

        ordered
            .into_iter()
            .fold(Fragment::new(), |mut acc, entry| {
                acc.merge(entry.fragment.clone());
                acc
            })
    }

    /// Emit the pending fragments through `tracing` at debug level.
    pub fn debug(&self) -> &Self {
        for (index, entry) in self.entries.iter().enumerate() {
            tracing::debug!(
                index,
                weight = entry.options.weight(),
                private = entry.options.is_private(),
                fragment = ?entry.fragment,
                "pending style fragment"
            );
        }
        self
    }
}
