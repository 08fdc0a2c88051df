//! Defines classification rules and the CMAR ranking over them.
use serde::{Serialize, Deserialize};

use crate::common::utils::{percentage, similar_2dec};
use crate::itemset::{ClassId, Itemset, UNCLASSIFIED};

use std::fmt;


/// A candidate classification rule `antecedent -> consequent`
/// as handed over by a frequent-itemset miner.
/// Supports are counts over the training records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    /// Left hand side of the rule.
    pub antecedent: Itemset,
    /// Right hand side of the rule, a single class attribute.
    pub consequent: Itemset,
    /// Number of records containing the antecedent.
    pub support_antecedent: f64,
    /// Number of records containing the consequent.
    pub support_consequent: f64,
    /// Number of records containing both.
    pub support_rule: f64,
}


impl Candidate {
    /// Construct a new candidate.
    pub fn new(
        antecedent: Itemset,
        consequent: Itemset,
        support_antecedent: f64,
        support_consequent: f64,
        support_rule: f64,
    ) -> Self
    {
        Self {
            antecedent,
            consequent,
            support_antecedent,
            support_consequent,
            support_rule,
        }
    }


    /// Returns the confidence of the candidate in percent.
    #[inline]
    pub fn confidence(&self) -> f64 {
        percentage(self.support_rule, self.support_antecedent)
    }
}


/// A classification rule kept by a [`RuleStore`](crate::RuleStore).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rule {
    antecedent: Itemset,
    consequent: Itemset,
    support_rule: f64,
    support_antecedent: f64,
    support_consequent: f64,
    confidence: f64,
}


impl Rule {
    /// Construct a new rule.
    /// The confidence is computed from the supports.
    pub fn new(
        antecedent: Itemset,
        consequent: Itemset,
        support_antecedent: f64,
        support_consequent: f64,
        support_rule: f64,
    ) -> Self
    {
        let confidence = percentage(support_rule, support_antecedent);
        Self {
            antecedent,
            consequent,
            support_rule,
            support_antecedent,
            support_consequent,
            confidence,
        }
    }


    /// Returns the antecedent.
    #[inline]
    pub fn antecedent(&self) -> &Itemset {
        &self.antecedent
    }


    /// Returns the consequent.
    #[inline]
    pub fn consequent(&self) -> &Itemset {
        &self.consequent
    }


    /// Returns the class this rule predicts.
    #[inline]
    pub fn class(&self) -> ClassId {
        self.consequent.last().unwrap_or(UNCLASSIFIED)
    }


    /// Returns the number of records containing
    /// both the antecedent and the consequent.
    #[inline]
    pub fn support(&self) -> f64 {
        self.support_rule
    }


    /// Returns the number of records containing the antecedent.
    #[inline]
    pub fn support_antecedent(&self) -> f64 {
        self.support_antecedent
    }


    /// Returns the number of records containing the consequent.
    #[inline]
    pub fn support_consequent(&self) -> f64 {
        self.support_consequent
    }


    /// Returns the confidence in percent.
    #[inline]
    pub fn confidence(&self) -> f64 {
        self.confidence
    }


    /// Returns `true` if the antecedent holds for `record`.
    #[inline]
    pub fn matches(&self, record: &Itemset) -> bool {
        self.antecedent.is_subset_of(record)
    }


    /// Returns `true` if `self` has a shorter antecedent than `other`.
    #[inline]
    pub fn is_more_general_than(&self, other: &Rule) -> bool {
        self.antecedent.len() < other.antecedent.len()
    }
}


impl From<Candidate> for Rule {
    fn from(candidate: Candidate) -> Self {
        Rule::new(
            candidate.antecedent,
            candidate.consequent,
            candidate.support_antecedent,
            candidate.support_consequent,
            candidate.support_rule,
        )
    }
}


impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} -> {} conf {:.2}% supp {}",
            self.antecedent,
            self.consequent,
            self.confidence,
            self.support_rule,
        )
    }
}


/// A trait that defines how a rule store orders its rules
/// and when an existing rule makes a candidate redundant.
pub trait RankingPolicy {
    /// Returns `true` if `r1` ranks strictly above `r2`.
    fn ranks_above(&self, r1: &Rule, r2: &Rule) -> bool;


    /// Returns `true` if `general`, already kept, makes `candidate`
    /// redundant.
    fn dominates(&self, general: &Rule, candidate: &Rule) -> bool;
}


/// The CMAR ranking.
///
/// `r1` ranks above `r2` if, in this priority,
/// 1. `r1` has a higher confidence,
/// 2. the confidences agree (up to two decimals)
///    and `r1` has a higher support,
/// 3. the supports agree too and `r1` has a shorter antecedent.
///
/// A kept rule dominates a candidate if its antecedent is shorter
/// and the candidate does not rank above it on confidence and support
/// alone; the antecedent length is no tie break here.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CmarRanking;


impl CmarRanking {
    /// The ranking on confidence and support only.
    #[inline]
    pub fn ranks_above_on_strength(&self, r1: &Rule, r2: &Rule) -> bool {
        if r1.confidence > r2.confidence { return true; }

        similar_2dec(r1.confidence, r2.confidence)
            && r1.support_rule > r2.support_rule
    }
}


impl RankingPolicy for CmarRanking {
    fn ranks_above(&self, r1: &Rule, r2: &Rule) -> bool {
        if r1.confidence > r2.confidence { return true; }

        if similar_2dec(r1.confidence, r2.confidence) {
            if r1.support_rule > r2.support_rule { return true; }

            if similar_2dec(r1.support_rule, r2.support_rule) {
                return r1.is_more_general_than(r2);
            }
        }
        false
    }


    fn dominates(&self, general: &Rule, candidate: &Rule) -> bool {
        general.is_more_general_than(candidate)
            && !self.ranks_above_on_strength(candidate, general)
    }
}
