//! Provides [`AprioriCars`], a level-wise miner of
//! classification rule candidates.
use rayon::prelude::*;

use crate::candidate::CandidateSource;
use crate::common::checker;
use crate::dataset::{ClassLabels, Dataset};
use crate::itemset::{ClassId, Item, Itemset};
use crate::rule::Candidate;

use std::collections::{BTreeSet, HashSet};


/// The minimum support (percent) set as default.
pub const DEFAULT_MIN_SUPPORT: f64 = 20.0;
/// The maximal antecedent size set as default.
pub const DEFAULT_MAX_ANTECEDENT_SIZE: usize = 6;


/// A level-wise (Apriori) enumeration of frequent antecedents.
///
/// Level `k` holds the frequent itemsets of `k` non-class attributes.
/// For every frequent antecedent and every class whose joint support
/// is frequent too, a [`Candidate`] is emitted.
/// Candidates come level by level, and within a level
/// in lexicographic antecedent order and increasing class order.
///
/// # Example
/// ```no_run
/// use cmar::prelude::*;
///
/// let miner = AprioriCars::init()
///     .min_support(10.0)
///     .max_antecedent_size(4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AprioriCars {
    min_support: f64,
    max_antecedent_size: usize,
}


impl Default for AprioriCars {
    fn default() -> Self {
        Self::init()
    }
}


/// Support counts of one antecedent.
struct Counts {
    total: usize,
    per_class: Vec<usize>,
}


impl AprioriCars {
    /// Construct a new miner.
    /// By default, the parameters are set as follows;
    /// ```text
    /// min_support: DEFAULT_MIN_SUPPORT == 20.0,
    /// max_antecedent_size: DEFAULT_MAX_ANTECEDENT_SIZE == 6,
    /// ```
    pub fn init() -> Self {
        Self {
            min_support: DEFAULT_MIN_SUPPORT,
            max_antecedent_size: DEFAULT_MAX_ANTECEDENT_SIZE,
        }
    }


    /// Set the minimum support in percent of the training records.
    #[inline]
    pub fn min_support(mut self, percent: f64) -> Self {
        checker::check_percentage("min_support", percent);
        self.min_support = percent;
        self
    }


    /// Set the maximal number of attributes in an antecedent.
    #[inline]
    pub fn max_antecedent_size(mut self, size: usize) -> Self {
        assert!(size > 0, "an antecedent needs at least one attribute");
        self.max_antecedent_size = size;
        self
    }


    /// Count the support of `itemset` over `bodies`,
    /// in total and per class.
    fn count(
        itemset: &Itemset,
        bodies: &[(Itemset, usize)],
        n_classes: usize,
    ) -> Counts
    {
        let mut counts = Counts { total: 0, per_class: vec![0; n_classes] };
        for (body, class) in bodies {
            if itemset.is_subset_of(body) {
                counts.total += 1;
                counts.per_class[*class] += 1;
            }
        }
        counts
    }


    /// Join the frequent itemsets of one level into the candidates
    /// of the next one, dropping those with an infrequent subset.
    fn join(level: &[Itemset]) -> Vec<Itemset> {
        let frequent = level.iter().collect::<HashSet<_>>();

        let mut next = Vec::new();
        for (i, a) in level.iter().enumerate() {
            let prefix = &a.as_slice()[..a.len() - 1];
            for b in &level[i + 1..] {
                if &b.as_slice()[..b.len() - 1] != prefix { break; }

                let Some(last) = b.last() else { continue; };
                let joined = a.extended(last);

                let all_frequent = (0..joined.len()).all(|skip| {
                    let subset = joined.iter()
                        .enumerate()
                        .filter(|&(k, _)| k != skip)
                        .map(|(_, item)| item)
                        .collect::<Vec<_>>();
                    frequent.contains(&Itemset::from_sorted(subset))
                });
                if all_frequent { next.push(joined); }
            }
        }
        next
    }
}


impl CandidateSource for AprioriCars {
    fn generate<F>(&self, training: &Dataset, mut sink: F)
        where F: FnMut(Candidate) -> bool
    {
        let labels: &ClassLabels = training.labels();
        let n_classes = labels.len();
        let min_count = training.len() as f64 * self.min_support / 100.0;

        // Split each record into its attributes and its class index.
        let bodies = (0..training.len())
            .filter_map(|row| {
                let record = &training.records()[row];
                let class = labels.index_of(training.class_of(row))?;
                let body = record.iter()
                    .filter(|&item| !labels.contains(item))
                    .collect::<Vec<Item>>();
                Some((Itemset::from_sorted(body), class))
            })
            .collect::<Vec<_>>();

        let mut class_support = vec![0_usize; n_classes];
        for (_, class) in &bodies {
            class_support[*class] += 1;
        }
        let classes = labels.iter().collect::<Vec<ClassId>>();

        let mut level = bodies.iter()
            .flat_map(|(body, _)| body.iter())
            .collect::<BTreeSet<Item>>()
            .into_iter()
            .map(Itemset::single)
            .collect::<Vec<_>>();

        for size in 1..=self.max_antecedent_size {
            if level.is_empty() { break; }

            let counted = level.into_par_iter()
                .map(|itemset| {
                    let counts = Self::count(&itemset, &bodies, n_classes);
                    (itemset, counts)
                })
                .filter(|(_, counts)| counts.total as f64 >= min_count)
                .collect::<Vec<_>>();

            for (antecedent, counts) in &counted {
                for (k, &class) in classes.iter().enumerate() {
                    let joint = counts.per_class[k];
                    if (joint as f64) < min_count || joint == 0 { continue; }

                    let candidate = Candidate::new(
                        antecedent.clone(),
                        Itemset::single(class),
                        counts.total as f64,
                        class_support[k] as f64,
                        joint as f64,
                    );
                    if !sink(candidate) { return; }
                }
            }

            if size == self.max_antecedent_size { break; }

            let frequent = counted.into_iter()
                .map(|(itemset, _)| itemset)
                .collect::<Vec<_>>();
            level = Self::join(&frequent[..]);
        }
    }
}
