//! Ordering metadata attached to registered fragments.

/// Precedence controls for one registered fragment.
///
/// Fragments merge in ascending weight. At equal weight, private fragments
/// merge after public ones, and registration order settles the rest.
///
/// # Examples
///
/// ```
/// use build_variants::FragmentOptions;
///
/// let options = FragmentOptions::new().with_weight(10).with_private(true);
/// assert_eq!(options.weight(), 10);
/// assert!(options.is_private());
/// assert_eq!(FragmentOptions::default().weight(), 0);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct FragmentOptions {
    weight: i32,
    private: bool,
}

impl FragmentOptions {
    /// Default options: weight 0, not private.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            weight: 0,
            private: false,
        }
    }

    /// Shorthand for options carrying only a weight.
    #[must_use]
    pub const fn weighted(weight: i32) -> Self {
        Self::new().with_weight(weight)
    }

    /// Set the merge weight.
    #[must_use]
    pub const fn with_weight(mut self, weight: i32) -> Self {
        self.weight = weight;
        self
    }

    /// Mark the fragment as private.
    #[must_use]
    pub const fn with_private(mut self, private: bool) -> Self {
        self.private = private;
        self
    }

    /// Merge weight; higher weights merge later.
    #[must_use]
    pub const fn weight(&self) -> i32 {
        self.weight
    }

    /// Whether the fragment merges after public fragments of equal weight.
    #[must_use]
    pub const fn is_private(&self) -> bool {
        self.private
    }

    /// Composite key used to order fragments before merging.
    pub(crate) const fn sort_key(&self) -> (i32, bool) {
        (self.weight, self.private)
    }
}
