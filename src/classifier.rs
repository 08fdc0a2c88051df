//! Provides the weighted chi-squared (WCS) classifier of CMAR.
use rayon::prelude::*;

use crate::chi_squared::{chi_squared, upper_bound};
use crate::itemset::{ClassId, Itemset, UNCLASSIFIED};
use crate::rule::{CmarRanking, Rule};
use crate::rule_store::RuleStore;

use std::collections::BTreeMap;


/// A trait that defines the behavor of classifier.
/// You only need to implement `classify` method.
pub trait Classifier {
    /// Predicts the class of the given record.
    /// Returns [`UNCLASSIFIED`] if the classifier has no answer.
    fn classify(&self, record: &Itemset) -> ClassId;


    /// Predicts the classes of the given records.
    fn classify_all(&self, records: &[Itemset]) -> Vec<ClassId>
        where Self: Sync,
    {
        records.par_iter()
            .map(|record| self.classify(record))
            .collect()
    }
}


/// The classifier CMAR returns.
/// It holds the pruned rule store and the number of training records
/// the supports of its rules are counted over.
///
/// A record is classified as follows.
/// 1. Collect the rules whose antecedent holds for the record.
///    Without such a rule, the record is [`UNCLASSIFIED`].
/// 2. If all collected rules predict the same class
///    (in particular if there is only one), return that class.
/// 3. Otherwise group the rules by class and score each group by
///    `sum (chi^2 * chi^2 / chi^2_max)` over its rules.
///    The group with the strictly greatest score wins;
///    groups are visited in decreasing class-id order,
///    so ties go to the larger class id.
#[derive(Debug, Clone)]
pub struct CmarClassifier<R = CmarRanking> {
    store: RuleStore<R>,
    training_size: usize,
}


impl<R> CmarClassifier<R> {
    /// Construct a new classifier from a (pruned) rule store.
    #[inline]
    pub fn new(store: RuleStore<R>, training_size: usize) -> Self {
        Self { store, training_size }
    }


    /// Returns the rule store.
    #[inline]
    pub fn store(&self) -> &RuleStore<R> {
        &self.store
    }


    /// Returns the rules in rank order.
    #[inline]
    pub fn rules(&self) -> &[Rule] {
        self.store.rules()
    }


    /// Returns the number of training records.
    #[inline]
    pub fn training_size(&self) -> usize {
        self.training_size
    }


    /// Returns the WCS score of each class that has a rule
    /// matching `record`, in decreasing class-id order.
    pub fn group_scores(&self, record: &Itemset) -> Vec<(ClassId, f64)> {
        let mut groups: BTreeMap<ClassId, Vec<&Rule>> = BTreeMap::new();
        for rule in self.store.matching(record) {
            groups.entry(rule.class()).or_default().push(rule);
        }
        self.score_groups(&groups)
    }


    fn score_groups(&self, groups: &BTreeMap<ClassId, Vec<&Rule>>)
        -> Vec<(ClassId, f64)>
    {
        let n = self.training_size as f64;
        groups.iter()
            .rev()
            .map(|(&class, rules)| {
                let score = rules.iter()
                    .map(|rule| wcs_term(rule, n))
                    .sum::<f64>();
                (class, score)
            })
            .collect()
    }
}


impl<R> Classifier for CmarClassifier<R> {
    fn classify(&self, record: &Itemset) -> ClassId {
        let matched = self.store.matching(record)
            .collect::<Vec<_>>();

        let Some(first) = matched.first() else { return UNCLASSIFIED; };

        let class = first.class();
        if matched.iter().all(|rule| rule.class() == class) {
            return class;
        }

        let mut groups: BTreeMap<ClassId, Vec<&Rule>> = BTreeMap::new();
        for rule in matched {
            groups.entry(rule.class()).or_default().push(rule);
        }
        let scores = self.score_groups(&groups);

        strongest_group(&scores[..]).unwrap_or(UNCLASSIFIED)
    }
}


/// Returns the WCS contribution `chi^2 * chi^2 / chi^2_max` of a rule
/// whose supports are counted over `n` records.
/// A rule with a degenerate statistic or bound contributes `0`.
pub fn wcs_term(rule: &Rule, n: f64) -> f64 {
    let chi = chi_squared(
        rule.support_antecedent(),
        rule.support_consequent(),
        rule.support(),
        n,
    );
    let bound = upper_bound(
        rule.support_antecedent(),
        rule.support_consequent(),
        n,
    );
    match (chi, bound) {
        (Some(chi), Some(bound)) if bound > 0.0 => chi * chi / bound,
        _ => 0.0,
    }
}


/// Returns the class of the group with the strictly greatest score.
/// The first such group in the given order wins ties.
/// Returns `None` for no group.
pub fn strongest_group(scores: &[(ClassId, f64)]) -> Option<ClassId> {
    let mut best: Option<(ClassId, f64)> = None;
    for &(class, score) in scores {
        match best {
            Some((_, top)) if score <= top => {},
            _ => best = Some((class, score)),
        }
    }
    best.map(|(class, _)| class)
}
