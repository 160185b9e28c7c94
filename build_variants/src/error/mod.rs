//! Error types produced while registering and resolving style fragments.

mod aggregate;
mod constructors;
mod conversions;
mod types;

pub use aggregate::AggregatedErrors;
pub use types::StyleError;

pub(crate) use types::value_kind;
