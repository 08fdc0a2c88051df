//! Property-based tests for the CMAR engine.

use proptest::prelude::*;
use cmar::chi_squared::chi_squared;
use cmar::prelude::*;

use std::collections::BTreeSet;


const N: usize = 100;


/// Candidates `{1..=6} -> {9 | 10}` over 100 records with
/// class support 50, antecedent support in `20..=40`.
fn candidate() -> impl Strategy<Value = Candidate> {
    (
        prop::collection::btree_set(1u16..=6, 1..=3),
        any::<bool>(),
        20u32..=40,
        0u32..=15,
    )
        .prop_map(|(items, first, supp_a, miss)| {
            let class = if first { 9 } else { 10 };
            Candidate::new(
                Itemset::from_unsorted(items),
                Itemset::single(class),
                supp_a as f64,
                50.0,
                (supp_a - miss) as f64,
            )
        })
}


fn record() -> impl Strategy<Value = Itemset> {
    (prop::collection::btree_set(1u16..=6, 0..=4), any::<bool>())
        .prop_map(|(mut items, first)| {
            items.insert(if first { 9 } else { 10 });
            Itemset::from_unsorted(items)
        })
}


fn build(candidates: Vec<Candidate>) -> RuleStore {
    let mut store = RuleStore::default();
    for candidate in candidates {
        store.insert_candidate(candidate, N);
    }
    store
}


/// Returns `true` if `sub` is a subsequence of `seq`.
fn is_subsequence(sub: &[Rule], seq: &[Rule]) -> bool {
    let mut rest = seq.iter();
    sub.iter().all(|rule| rest.any(|other| other == rule))
}


proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// No rule ranks above a rule placed before it.
    #[test]
    fn store_stays_in_rank_order(
        candidates in prop::collection::vec(candidate(), 0..40)
    ) {
        let store = build(candidates);
        let ranking = CmarRanking;
        let rules = store.rules();
        for i in 0..rules.len() {
            for j in i + 1..rules.len() {
                prop_assert!(!ranking.ranks_above(&rules[j], &rules[i]));
            }
        }
    }


    /// A more specific copy of a kept rule never gets in.
    #[test]
    fn specialized_rules_are_dominated(
        candidates in prop::collection::vec(candidate(), 1..30)
    ) {
        let mut store = build(candidates);
        let before = store.rules().to_vec();

        for rule in &before {
            let specific = Candidate::new(
                rule.antecedent().union(&Itemset::single(8)),
                rule.consequent().clone(),
                rule.support_antecedent(),
                rule.support_consequent(),
                rule.support(),
            );
            prop_assert_eq!(
                store.insert_candidate(specific, N),
                Insertion::Dominated
            );
        }
        prop_assert_eq!(store.rules(), &before[..]);
    }


    /// Swapping antecedent and consequent supports keeps the statistic.
    #[test]
    fn chi_squared_is_symmetric(
        supp_a in 1u32..100,
        supp_c in 1u32..100,
        ratio in 0.0f64..=1.0,
    ) {
        let supp_ac = (supp_a.min(supp_c) as f64 * ratio).floor();
        let n = 100.0;
        let lhs = chi_squared(supp_a as f64, supp_c as f64, supp_ac, n);
        let rhs = chi_squared(supp_c as f64, supp_a as f64, supp_ac, n);
        match (lhs, rhs) {
            (Some(lhs), Some(rhs)) => {
                prop_assert!(lhs >= 0.0);
                prop_assert!((lhs - rhs).abs() <= 1e-9 * lhs.max(1.0));
            },
            (None, None) => {},
            _ => prop_assert!(false, "only one side is degenerate"),
        }
    }


    /// Pruning keeps a subsequence, and a larger cover threshold
    /// keeps at least the rules of a smaller one.
    #[test]
    fn pruning_keeps_a_subsequence(
        candidates in prop::collection::vec(candidate(), 0..30),
        training in prop::collection::vec(record(), 0..30),
        min_cover in 0usize..4,
    ) {
        let store = build(candidates);
        let pruned = store.clone().prune(&training, min_cover);
        prop_assert!(is_subsequence(pruned.rules(), store.rules()));

        let looser = store.clone().prune(&training, min_cover + 1);
        prop_assert!(is_subsequence(pruned.rules(), looser.rules()));

        let again = pruned.clone().prune(&training, min_cover);
        prop_assert_eq!(again.rules(), pruned.rules());
    }


    /// Classification reads the store only.
    #[test]
    fn classification_is_deterministic(
        candidates in prop::collection::vec(candidate(), 0..30),
        records in prop::collection::vec(record(), 1..20),
    ) {
        let classifier = CmarClassifier::new(build(candidates), N);
        let first = classifier.classify_all(&records);
        let second = records.iter()
            .map(|record| classifier.classify(record))
            .collect::<Vec<_>>();
        prop_assert_eq!(&first, &second);

        for (record, class) in records.iter().zip(first) {
            let matched = classifier.store().matching(record).count();
            prop_assert_eq!(matched == 0, class == UNCLASSIFIED);
        }
    }


    /// Union and complement agree with their set counterparts.
    #[test]
    fn union_and_complement_match_sets(
        a in prop::collection::btree_set(1u16..=12, 0..6),
        b in prop::collection::btree_set(1u16..=12, 0..6),
    ) {
        let x = Itemset::from_unsorted(a.iter().copied());
        let y = Itemset::from_unsorted(b.iter().copied());

        let union = x.union(&y);
        let expected = a.union(&b).copied().collect::<Vec<_>>();
        prop_assert_eq!(union.as_slice(), &expected[..]);
        prop_assert!(x.is_subset_of(&union));

        let rest = x.complement_in(&union).unwrap();
        let expected = union.iter()
            .filter(|item| !a.contains(item))
            .collect::<BTreeSet<_>>();
        prop_assert_eq!(rest.iter().collect::<BTreeSet<_>>(), expected);
    }
}
