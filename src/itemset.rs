//! Provides [`Itemset`], a sorted and duplicate-free sequence of
//! attribute ids.
//!
//! An itemset is the antecedent or the consequent of a rule,
//! or a whole record of a dataset.
//! Every routine here relies on the items being strictly increasing,
//! so [`Itemset`] checks this once at construction.
//! The free functions at the bottom of this file take raw slices instead
//! and validate them on every call.
use serde::{Serialize, Deserialize};

use crate::common::checker;
use crate::error::{CmarError, Result};

use std::cmp::Ordering;
use std::fmt;


/// An attribute id. Attribute ids are small positive integers;
/// `0` is reserved for "no class".
pub type Item = u16;


/// The attribute id of a class label.
pub type ClassId = Item;


/// The class returned for a record that no rule matches.
pub const UNCLASSIFIED: ClassId = 0;


/// A strictly increasing sequence of attribute ids.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<Item>", into = "Vec<Item>")]
pub struct Itemset {
    items: Vec<Item>,
}


impl Itemset {
    /// Construct a new itemset from a strictly increasing sequence.
    /// Returns an error if `items` is unsorted or has a duplicate.
    pub fn new(items: Vec<Item>) -> Result<Self> {
        checker::check_itemset(&items[..])?;
        Ok(Self { items })
    }


    /// Construct an itemset from items in arbitrary order.
    /// The items are sorted and duplicates are dropped.
    pub fn from_unsorted<I>(items: I) -> Self
        where I: IntoIterator<Item = Item>
    {
        let mut items = items.into_iter().collect::<Vec<_>>();
        items.sort_unstable();
        items.dedup();
        Self { items }
    }


    /// Construct the itemset `{item}`.
    #[inline]
    pub fn single(item: Item) -> Self {
        Self { items: vec![item] }
    }


    /// Construct the empty itemset.
    #[inline]
    pub fn empty() -> Self {
        Self { items: Vec::new() }
    }


    #[inline]
    pub(crate) fn from_sorted(items: Vec<Item>) -> Self {
        debug_assert!(checker::check_itemset(&items[..]).is_ok());
        Self { items }
    }


    /// Returns the number of items.
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }


    /// Returns `true` if the itemset has no items.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }


    /// Returns the items as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[Item] {
        &self.items[..]
    }


    /// Returns an iterator over the items in increasing order.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = Item> + '_ {
        self.items.iter().copied()
    }


    /// Returns the largest item.
    /// For a record this is its class attribute.
    #[inline]
    pub fn last(&self) -> Option<Item> {
        self.items.last().copied()
    }


    /// Returns `true` if `item` is a member of `self`.
    #[inline]
    pub fn contains(&self, item: Item) -> bool {
        self.items.binary_search(&item).is_ok()
    }


    /// Returns `true` if every item of `self` is in `other`.
    /// The empty itemset is a subset of every itemset.
    #[inline]
    pub fn is_subset_of(&self, other: &Itemset) -> bool {
        subset_sorted(self.as_slice(), other.as_slice())
    }


    /// Returns `true` if `self` and `other` share at least one item.
    pub fn intersects(&self, other: &Itemset) -> bool {
        let (mut i, mut j) = (0, 0);
        let (a, b) = (self.as_slice(), other.as_slice());
        while i < a.len() && j < b.len() {
            match a[i].cmp(&b[j]) {
                Ordering::Equal => return true,
                Ordering::Less => i += 1,
                Ordering::Greater => j += 1,
            }
        }
        false
    }


    /// Returns `true` if `self` comes lexicographically before `other`.
    /// See [`lexicographic_before`] for the exact rule.
    #[inline]
    pub fn is_before(&self, other: &Itemset) -> bool {
        before_sorted(self.as_slice(), other.as_slice())
    }


    /// Returns the union of `self` and `other`.
    #[inline]
    pub fn union(&self, other: &Itemset) -> Itemset {
        Itemset::from_sorted(union_sorted(self.as_slice(), other.as_slice()))
    }


    /// Returns the items of `other` that are not in `self`.
    /// Fails if `other` is shorter than `self`.
    #[inline]
    pub fn complement_in(&self, other: &Itemset) -> Result<Itemset> {
        complement_sorted(self.as_slice(), other.as_slice())
            .map(Itemset::from_sorted)
    }


    /// Returns a copy of `self` extended by `item`,
    /// which must be larger than every item of `self`.
    pub(crate) fn extended(&self, item: Item) -> Itemset {
        debug_assert!(self.last().map_or(true, |last| last < item));
        let mut items = Vec::with_capacity(self.len() + 1);
        items.extend_from_slice(self.as_slice());
        items.push(item);
        Itemset { items }
    }
}


impl TryFrom<Vec<Item>> for Itemset {
    type Error = CmarError;
    fn try_from(items: Vec<Item>) -> Result<Self> {
        Self::new(items)
    }
}


impl From<Itemset> for Vec<Item> {
    fn from(itemset: Itemset) -> Self {
        itemset.items
    }
}


impl fmt::Display for Itemset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let items = self.items.iter()
            .map(|item| item.to_string())
            .collect::<Vec<_>>()
            .join(" ");
        write!(f, "{{{items}}}")
    }
}


/// Returns `true` if every element of `a` is in `b`.
/// Fails if either slice is not strictly increasing.
pub fn is_subset(a: &[Item], b: &[Item]) -> Result<bool> {
    checker::check_itemset(a)?;
    checker::check_itemset(b)?;
    Ok(subset_sorted(a, b))
}


/// Returns `true` if `a` and `b` hold the same items.
/// Fails if either slice is not strictly increasing.
pub fn is_equal(a: &[Item], b: &[Item]) -> Result<bool> {
    checker::check_itemset(a)?;
    checker::check_itemset(b)?;
    Ok(a == b)
}


/// Returns `true` if `a` comes lexicographically before `b`.
///
/// The sequences are compared element by element;
/// the first differing element decides.
/// If they agree on the whole of `a`, `a` is before `b`
/// (so equal sequences and proper prefixes of `b` are before `b`),
/// but if `b` runs out first, `a` is **not** before `b`.
/// Note that `{1, 2}` is before `{2}`.
pub fn lexicographic_before(a: &[Item], b: &[Item]) -> Result<bool> {
    checker::check_itemset(a)?;
    checker::check_itemset(b)?;
    Ok(before_sorted(a, b))
}


/// Returns the union of `a` and `b` in `O(|a| + |b|)`.
/// Fails if either slice is not strictly increasing.
pub fn union(a: &[Item], b: &[Item]) -> Result<Itemset> {
    checker::check_itemset(a)?;
    checker::check_itemset(b)?;
    Ok(Itemset::from_sorted(union_sorted(a, b)))
}


/// Returns the elements of `b` that are not in `a`.
/// Fails if either slice is not strictly increasing or `|b| < |a|`.
pub fn complement(a: &[Item], b: &[Item]) -> Result<Itemset> {
    checker::check_itemset(a)?;
    checker::check_itemset(b)?;
    complement_sorted(a, b).map(Itemset::from_sorted)
}


fn subset_sorted(a: &[Item], b: &[Item]) -> bool {
    if a.len() > b.len() { return false; }

    let mut rest = b.iter();
    a.iter().all(|x| {
        rest.by_ref()
            .find(|y| *y >= x)
            .is_some_and(|y| y == x)
    })
}


fn before_sorted(a: &[Item], b: &[Item]) -> bool {
    for (i, x) in a.iter().enumerate() {
        let Some(y) = b.get(i) else { return false; };
        match x.cmp(y) {
            Ordering::Less => return true,
            Ordering::Greater => return false,
            Ordering::Equal => {},
        }
    }
    true
}


fn union_sorted(a: &[Item], b: &[Item]) -> Vec<Item> {
    let mut merged = Vec::with_capacity(a.len() + b.len());
    let (mut i, mut j) = (0, 0);
    while i < a.len() && j < b.len() {
        match a[i].cmp(&b[j]) {
            Ordering::Less => { merged.push(a[i]); i += 1; },
            Ordering::Greater => { merged.push(b[j]); j += 1; },
            Ordering::Equal => { merged.push(a[i]); i += 1; j += 1; },
        }
    }
    merged.extend_from_slice(&a[i..]);
    merged.extend_from_slice(&b[j..]);
    merged
}


fn complement_sorted(a: &[Item], b: &[Item]) -> Result<Vec<Item>> {
    if b.len() < a.len() {
        return Err(CmarError::ComplementTooShort {
            left: a.len(),
            right: b.len(),
        });
    }
    let comp = b.iter()
        .copied()
        .filter(|y| a.binary_search(y).is_err())
        .collect::<Vec<_>>();
    Ok(comp)
}
