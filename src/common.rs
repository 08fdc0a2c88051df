//! Defines some common functions used in this library.

/// Defines some useful functions such as the two-decimal comparison.
pub(crate) mod utils;

/// Defines some checker functions.
pub(crate) mod checker;
