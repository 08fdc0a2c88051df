//! Provides [`RuleStore`], the ranked sequence of classification rules.
use crate::chi_squared::ChiSquaredTest;
use crate::cover::CoverPruner;
use crate::itemset::Itemset;
use crate::rule::{Candidate, CmarRanking, RankingPolicy, Rule};


/// The outcome of [`RuleStore::insert_candidate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Insertion {
    /// The rule was inserted at the given position.
    Inserted(usize),
    /// The chi-squared test rejected the rule.
    NotSignificant,
    /// A more general rule that ranks at least as high is already kept.
    Dominated,
}


impl Insertion {
    /// Returns `true` if the store has grown.
    #[inline]
    pub fn is_inserted(&self) -> bool {
        matches!(self, Self::Inserted(_))
    }
}


/// An ordered sequence of classification rules.
///
/// The rules are kept from the highest ranked to the lowest one
/// under the ranking policy `R` (the CMAR ranking by default),
/// and no kept rule dominates another one.
/// Only [`RuleStore::insert_candidate`] and [`RuleStore::prune`]
/// change the store.
#[derive(Debug, Clone)]
pub struct RuleStore<R = CmarRanking> {
    rules: Vec<Rule>,
    test: ChiSquaredTest,
    ranking: R,
}


impl RuleStore<CmarRanking> {
    /// Construct an empty store under the CMAR ranking.
    #[inline]
    pub fn new(test: ChiSquaredTest) -> Self {
        Self::with_ranking(test, CmarRanking)
    }
}


impl Default for RuleStore<CmarRanking> {
    fn default() -> Self {
        Self::new(ChiSquaredTest::default())
    }
}


impl<R> RuleStore<R> {
    /// Construct an empty store under the given ranking policy.
    #[inline]
    pub fn with_ranking(test: ChiSquaredTest, ranking: R) -> Self {
        Self { rules: Vec::new(), test, ranking }
    }


    /// Returns the number of kept rules.
    #[inline]
    pub fn len(&self) -> usize {
        self.rules.len()
    }


    /// Returns `true` if no rule is kept.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }


    /// Returns the rules from the highest ranked one.
    #[inline]
    pub fn rules(&self) -> &[Rule] {
        &self.rules[..]
    }


    /// Returns an iterator over the rules in rank order.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Rule> {
        self.rules.iter()
    }


    /// Returns the significance test applied on insertion.
    #[inline]
    pub fn test(&self) -> &ChiSquaredTest {
        &self.test
    }


    /// Returns the ranking policy.
    #[inline]
    pub fn ranking(&self) -> &R {
        &self.ranking
    }


    /// Returns the rules whose antecedent holds for `record`,
    /// in rank order.
    pub fn matching<'a>(&'a self, record: &'a Itemset)
        -> impl Iterator<Item = &'a Rule> + 'a
    {
        self.rules.iter()
            .filter(move |rule| rule.matches(record))
    }


    /// Move the rules out, leaving the store empty.
    pub(crate) fn take_rules(&mut self) -> Vec<Rule> {
        std::mem::take(&mut self.rules)
    }


    /// Replace the rules by `rules`, which must be
    /// a rank-ordered subsequence of the current ones.
    pub(crate) fn with_rules(self, rules: Vec<Rule>) -> Self {
        Self { rules, test: self.test, ranking: self.ranking }
    }
}


impl<R> RuleStore<R>
    where R: RankingPolicy,
{
    /// Offer a candidate rule to the store.
    ///
    /// 1. A candidate that fails the chi-squared test is dropped.
    /// 2. Into an empty store the candidate goes as the only rule.
    /// 3. A candidate dominated by a kept rule is dropped.
    /// 4. Otherwise the candidate is placed right before the first rule
    ///    it ranks above, or at the end.
    pub fn insert_candidate(
        &mut self,
        candidate: Candidate,
        training_size: usize,
    ) -> Insertion
    {
        let significant = self.test.is_significant(
            candidate.support_antecedent,
            candidate.support_consequent,
            candidate.support_rule,
            training_size as f64,
        );
        if !significant { return Insertion::NotSignificant; }

        let rule = Rule::from(candidate);

        if self.rules.is_empty() {
            self.rules.push(rule);
            return Insertion::Inserted(0);
        }

        let dominated = self.rules.iter()
            .any(|kept| self.ranking.dominates(kept, &rule));
        if dominated { return Insertion::Dominated; }

        let position = self.rules.iter()
            .position(|kept| self.ranking.ranks_above(&rule, kept))
            .unwrap_or(self.rules.len());
        self.rules.insert(position, rule);

        Insertion::Inserted(position)
    }


    /// Prune the store with the database-cover principle.
    /// See [`CoverPruner`].
    pub fn prune(self, training: &[Itemset], min_cover: usize) -> Self {
        CoverPruner::new(min_cover).prune(self, training)
    }
}


impl<'a, R> IntoIterator for &'a RuleStore<R> {
    type Item = &'a Rule;
    type IntoIter = std::slice::Iter<'a, Rule>;
    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}
