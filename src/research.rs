//! This directory provides some features for research.
//! - Splitting a dataset into training/test folds
//! - Ten-fold cross validation of CMAR

/// Provides an iterator over training/test pairs.
pub mod cross_validation;

/// Provides the cross-validated evaluation of CMAR.
pub mod tcv;

pub use cross_validation::CrossValidation;
pub use tcv::{
    cross_validate,
    FoldResult,
    TcvSummary,
};
