//! Error and diagnostic types of this crate.
use thiserror::Error;

use crate::itemset::Item;


/// Errors that can occur when building itemsets, datasets,
/// or a configuration.
#[derive(Debug, Error)]
pub enum CmarError {
    /// The given sequence is not strictly increasing.
    #[error("itemset is not sorted: {items:?}")]
    UnsortedItemset {
        /// The offending sequence.
        items: Vec<Item>,
    },


    /// The given sequence contains the same attribute twice.
    #[error("itemset contains duplicate attribute `{item}`")]
    DuplicateItem {
        /// The repeated attribute id.
        item: Item,
    },


    /// `complement(a, b)` requires `|b| >= |a|`.
    #[error("complement needs |b| >= |a|, got |a| = {left}, |b| = {right}")]
    ComplementTooShort {
        /// Length of the first itemset.
        left: usize,
        /// Length of the second itemset.
        right: usize,
    },


    /// A record has no items, so it has no class attribute.
    #[error("record #{row} is empty")]
    EmptyRecord {
        /// Row index of the record.
        row: usize,
    },


    /// The last item of a record is not one of the class attributes.
    #[error("record #{row} ends with `{item}`, which is not a class attribute")]
    UnknownClass {
        /// Row index of the record.
        row: usize,
        /// The last item of the record.
        item: Item,
    },


    /// A parameter is out of its admissible range.
    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter {
        /// Name of the parameter.
        name: &'static str,
        /// Why it is rejected.
        reason: String,
    },


    /// The configuration could not be parsed.
    #[error("failed to parse configuration")]
    Config(#[from] serde_json::Error),
}


/// Result type of the fallible operations in this crate.
pub type Result<T> = std::result::Result<T, CmarError>;


/// A non-fatal diagnostic produced while reading a configuration.
/// The setting it refers to has already been replaced by its default.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigWarning {
    /// There is no hard coded critical value
    /// for the requested significance level (in percent).
    /// The 5% threshold is used instead.
    UnknownSignificance(f64),
}


impl std::fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownSignificance(percent) => write!(
                f,
                "no hard coded chi-squared critical value for {percent}%, \
                 the value for 5% (default) is used"
            ),
        }
    }
}
