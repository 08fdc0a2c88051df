//! This file defines some functions that checks some pre-conditions
//! E.g., sortedness of itemsets

use crate::error::{CmarError, Result};
use crate::itemset::Item;


/// Check whether the given sequence is strictly increasing.
/// An equal neighbour is reported as a duplicate,
/// a decreasing one as an unsorted sequence.
#[inline(always)]
pub(crate) fn check_itemset(items: &[Item]) -> Result<()> {
    for pair in items.windows(2) {
        if pair[0] == pair[1] {
            return Err(CmarError::DuplicateItem { item: pair[0] });
        }
        if pair[0] > pair[1] {
            return Err(CmarError::UnsortedItemset { items: items.to_vec() });
        }
    }
    Ok(())
}


/// Check whether the given percentage lies in `[0, 100]`.
#[inline(always)]
pub(crate) fn check_percentage(name: &str, value: f64) {
    assert!(
        (0f64..=100f64).contains(&value),
        "`{name}` must be a percentage in [0, 100], got {value}"
    );
}
