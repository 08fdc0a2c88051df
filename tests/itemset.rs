use cmar::itemset;
use cmar::{CmarError, Itemset};


fn set(items: &[u16]) -> Itemset {
    Itemset::new(items.to_vec()).unwrap()
}


#[test]
fn construction_rejects_malformed_sequences() {
    match Itemset::new(vec![1, 3, 2]) {
        Err(CmarError::UnsortedItemset { items }) => {
            assert_eq!(items, vec![1, 3, 2]);
        },
        other => panic!("expected an unsorted error, got {other:?}"),
    }

    match Itemset::new(vec![1, 2, 2, 5]) {
        Err(CmarError::DuplicateItem { item }) => assert_eq!(item, 2),
        other => panic!("expected a duplicate error, got {other:?}"),
    }

    assert!(Itemset::new(vec![]).is_ok());
    assert_eq!(Itemset::from_unsorted([4, 1, 4, 2]), set(&[1, 2, 4]));
}


#[test]
fn subset_and_equality() {
    let empty = Itemset::empty();
    let record = set(&[1, 2, 4, 7]);

    assert!(empty.is_subset_of(&record));
    assert!(empty.is_subset_of(&empty));
    assert!(!set(&[1]).is_subset_of(&empty));
    assert!(set(&[2, 7]).is_subset_of(&record));
    assert!(!set(&[2, 3]).is_subset_of(&record));
    assert!(record.is_subset_of(&record));

    assert!(itemset::is_subset(&[1, 4], &[1, 2, 4]).unwrap());
    assert!(itemset::is_equal(&[1, 4], &[1, 4]).unwrap());
    assert!(!itemset::is_equal(&[1, 4], &[1, 4, 5]).unwrap());
}


#[test]
fn checked_routines_fail_fast() {
    assert!(itemset::is_subset(&[2, 1], &[1, 2]).is_err());
    assert!(itemset::is_subset(&[1], &[3, 3]).is_err());
    assert!(itemset::union(&[1, 5], &[4, 2]).is_err());
    assert!(itemset::lexicographic_before(&[1, 1], &[2]).is_err());
    assert!(itemset::complement(&[1], &[2, 1]).is_err());
}


#[test]
fn lexicographic_order_matches_the_prefix_rule() {
    assert!(itemset::lexicographic_before(&[1, 2], &[2]).unwrap());
    assert!(itemset::lexicographic_before(&[1, 3], &[1, 4]).unwrap());
    assert!(!itemset::lexicographic_before(&[1, 4], &[1, 3]).unwrap());

    // A proper prefix of the second sequence comes before it,
    // but not the other way round.
    assert!(itemset::lexicographic_before(&[1], &[1, 2]).unwrap());
    assert!(!itemset::lexicographic_before(&[1, 2], &[1]).unwrap());

    assert!(set(&[3, 4]).is_before(&set(&[3, 4])));
}


#[test]
fn union_merges_sorted_sequences() {
    let merged = itemset::union(&[1, 3, 5], &[2, 3, 6, 7]).unwrap();
    assert_eq!(merged, set(&[1, 2, 3, 5, 6, 7]));

    assert_eq!(set(&[]).union(&set(&[4])), set(&[4]));
    assert_eq!(set(&[4, 9]).union(&set(&[])), set(&[4, 9]));
}


#[test]
fn complement_keeps_the_rest_of_the_second_set() {
    let comp = itemset::complement(&[2, 4], &[1, 2, 3, 4]).unwrap();
    assert_eq!(comp, set(&[1, 3]));

    let comp = set(&[2]).complement_in(&set(&[2])).unwrap();
    assert!(comp.is_empty());

    match itemset::complement(&[1, 2, 3], &[1, 2]) {
        Err(CmarError::ComplementTooShort { left, right }) => {
            assert_eq!((left, right), (3, 2));
        },
        other => panic!("expected a length error, got {other:?}"),
    }
}


#[test]
fn membership_and_display() {
    let record = set(&[1, 5, 9]);
    assert!(record.contains(5));
    assert!(!record.contains(4));
    assert_eq!(record.last(), Some(9));
    assert!(record.intersects(&set(&[2, 9])));
    assert!(!record.intersects(&set(&[2, 8])));
    assert_eq!(record.to_string(), "{1 5 9}");
}


#[test]
fn serde_rejects_unsorted_itemsets() {
    let parsed: Itemset = serde_json::from_str("[1, 4, 6]").unwrap();
    assert_eq!(parsed, set(&[1, 4, 6]));
    assert!(serde_json::from_str::<Itemset>("[4, 1]").is_err());
}
