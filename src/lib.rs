#![warn(missing_docs)]

//!
//! A crate that provides CMAR,
//! Classification based on Multiple Association Rules.
//!
//! CMAR turns ranked classification association rules
//! (`antecedent -> class`, mined by an external frequent-itemset miner)
//! into a compact classifier in three steps.
//!
//! - Rule store
//!     Each candidate rule is tested for significance with a
//!     chi-squared test, and kept in CMAR rank order
//!     (confidence, then support, then antecedent size)
//!     unless a more general rule that ranks at least as high
//!     is already kept. See [`RuleStore`].
//!
//! - Database cover
//!     The store is pruned to the rules needed to cover
//!     every training record a few times. See [`CoverPruner`].
//!
//! - Weighted chi-squared vote
//!     A record is classified by the rules matching it;
//!     competing classes are resolved by the weighted chi-squared
//!     score of their rule groups. See [`CmarClassifier`].
//!
//! [`Evaluator`] reports the accuracy and the multi-class AUC
//! on a test set, and [`research`] runs a cross validation.

pub mod error;
pub mod itemset;
pub mod dataset;
pub mod chi_squared;
pub mod rule;
pub mod rule_store;
pub mod cover;
pub mod classifier;
pub mod evaluation;
pub mod candidate;
pub mod apriori;
pub mod cmar;
pub mod research;
pub mod prelude;

mod common;


pub use error::{CmarError, ConfigWarning, Result};
pub use itemset::{ClassId, Item, Itemset, UNCLASSIFIED};
pub use dataset::{ClassLabels, Dataset};
pub use chi_squared::{ChiSquaredTest, Contingency, SignificanceLevel};
pub use rule::{Candidate, CmarRanking, RankingPolicy, Rule};
pub use rule_store::{Insertion, RuleStore};
pub use cover::{CoverPruner, DEFAULT_MIN_COVER};
pub use classifier::{Classifier, CmarClassifier};
pub use evaluation::{EvaluationReport, Evaluator};
pub use candidate::CandidateSource;
pub use apriori::AprioriCars;
pub use cmar::{Cmar, CmarConfig, TrainingStats};
