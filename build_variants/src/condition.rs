//! Predicates accepted by conditional scopes.

/// A predicate evaluated once when a conditional scope is opened.
///
/// Implemented for plain booleans and for zero-argument closures returning
/// one, so callers can defer an expensive check to the point of use.
///
/// # Examples
///
/// ```
/// use build_variants::Condition;
///
/// assert!(true.evaluate());
/// assert!(!(|| 1 > 2).evaluate());
/// ```
pub trait Condition {
    /// Resolve the predicate.
    fn evaluate(self) -> bool;
}

impl Condition for bool {
    fn evaluate(self) -> bool {
        self
    }
}

impl<F> Condition for F
where
    F: FnOnce() -> bool,
{
    fn evaluate(self) -> bool {
        self()
    }
}
