//! Provides [`CoverPruner`], the database-cover pruning of CMAR.
use fixedbitset::FixedBitSet;

use crate::itemset::Itemset;
use crate::rule_store::RuleStore;


/// The number of matching rules after which
/// a training record counts as covered, by default.
pub const DEFAULT_MIN_COVER: usize = 3;


/// Prunes a ranked rule store against the training records.
///
/// Rules are visited from the highest ranked one.
/// Each rule is matched against the training records still present;
/// every matched record has its cover count incremented,
/// and a rule that matched at least one record is kept.
/// After each rule, the records whose cover count exceeds `min_cover`
/// are removed. Pruning stops once no record is left.
///
/// The pruned store is a subsequence of the given one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoverPruner {
    min_cover: usize,
}


impl Default for CoverPruner {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_COVER)
    }
}


impl CoverPruner {
    /// Construct a new pruner.
    #[inline]
    pub fn new(min_cover: usize) -> Self {
        Self { min_cover }
    }


    /// Returns the cover count a record has to exceed to be removed.
    #[inline]
    pub fn min_cover(&self) -> usize {
        self.min_cover
    }


    /// Prune `store` against `training`, keeping the rank order.
    pub fn prune<R>(&self, mut store: RuleStore<R>, training: &[Itemset])
        -> RuleStore<R>
    {
        let n_records = training.len();
        let mut cover = vec![0_usize; n_records];

        let mut present = FixedBitSet::with_capacity(n_records);
        present.insert_range(..);

        let rules = store.take_rules();
        let mut kept = Vec::with_capacity(rules.len());

        for rule in rules {
            if present.count_ones(..) == 0 { break; }

            let mut used = false;
            for i in present.ones() {
                if rule.matches(&training[i]) {
                    cover[i] += 1;
                    used = true;
                }
            }
            if used { kept.push(rule); }

            // Removal happens after the whole pass of a rule.
            let covered = present.ones()
                .filter(|&i| cover[i] > self.min_cover)
                .collect::<Vec<_>>();
            for i in covered {
                present.set(i, false);
            }
        }

        store.with_rules(kept)
    }
}
