use cmar::prelude::*;
use cmar::CoverPruner;


const N: usize = 100;


fn set(items: &[u16]) -> Itemset {
    Itemset::new(items.to_vec()).unwrap()
}


/// A store with the rules, ranked in the given order,
/// `{1} -> 9`, `{2} -> 9`, `{5} -> 10`, `{3} -> 10`.
fn ranked_store() -> RuleStore {
    let rules = [(1, 9, 39.0), (2, 9, 38.0), (5, 10, 37.0), (3, 10, 36.0)];

    let mut store = RuleStore::default();
    for (item, class, supp_ac) in rules {
        let candidate = Candidate::new(
            Itemset::single(item),
            Itemset::single(class),
            40.0,
            50.0,
            supp_ac,
        );
        assert!(store.insert_candidate(candidate, N).is_inserted());
    }
    let antecedents = store.iter()
        .map(|rule| rule.antecedent().to_string())
        .collect::<Vec<_>>();
    assert_eq!(antecedents, vec!["{1}", "{2}", "{5}", "{3}"]);
    store
}


fn training() -> Vec<Itemset> {
    vec![
        set(&[1, 2, 9]),
        set(&[1, 3, 9]),
        set(&[2, 3, 10]),
        set(&[4, 10]),
    ]
}


fn antecedents(store: &RuleStore) -> Vec<String> {
    store.iter()
        .map(|rule| rule.antecedent().to_string())
        .collect()
}


#[test]
fn rules_matching_no_record_are_dropped() {
    let pruned = CoverPruner::default().prune(ranked_store(), &training());
    assert_eq!(antecedents(&pruned), vec!["{1}", "{2}", "{3}"]);
}


#[test]
fn records_leave_once_covered_enough() {
    // Every record leaves after its first cover,
    // so `{3}` finds no record left to match.
    let pruned = ranked_store().prune(&training(), 0);
    assert_eq!(antecedents(&pruned), vec!["{1}", "{2}"]);
}


#[test]
fn pruning_stops_once_every_record_is_gone() {
    let training = vec![set(&[1, 2, 9]), set(&[1, 9])];
    let pruned = ranked_store().prune(&training, 0);
    assert_eq!(antecedents(&pruned), vec!["{1}"]);
}


#[test]
fn pruning_is_idempotent() {
    for min_cover in [0, 1, 3] {
        let once = ranked_store().prune(&training(), min_cover);
        let twice = once.clone().prune(&training(), min_cover);
        assert_eq!(once.rules(), twice.rules());
    }
}


#[test]
fn empty_inputs() {
    let pruned = ranked_store().prune(&[], 3);
    assert!(pruned.is_empty());

    let pruned = RuleStore::default().prune(&training(), 3);
    assert!(pruned.is_empty());
}
