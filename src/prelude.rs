//! Exports the standard types and traits.
//!
pub use crate::{
    // Data
    Item,
    ClassId,
    Itemset,
    ClassLabels,
    Dataset,
    UNCLASSIFIED,


    // Rules ------------------------------------
    Candidate,
    Rule,
    RankingPolicy,
    CmarRanking,
    RuleStore,
    Insertion,
    ChiSquaredTest,
    SignificanceLevel,
    CoverPruner,


    // Mining and training ----------------------
    CandidateSource,
    AprioriCars,
    Cmar,
    CmarConfig,


    // Classification ---------------------------
    Classifier,
    CmarClassifier,
    Evaluator,
    EvaluationReport,
};
