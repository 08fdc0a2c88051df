//! Provides [`Cmar`], the training procedure of
//! Classification based on Multiple Association Rules
//! by Li, Han & Pei, 2001.
use colored::Colorize;
use serde::{Serialize, Deserialize};

use crate::candidate::CandidateSource;
use crate::chi_squared::{ChiSquaredTest, SignificanceLevel};
use crate::classifier::CmarClassifier;
use crate::common::checker;
use crate::cover::{CoverPruner, DEFAULT_MIN_COVER};
use crate::dataset::Dataset;
use crate::error::{CmarError, ConfigWarning, Result};
use crate::rule_store::{Insertion, RuleStore};

use std::fmt;


/// The minimum confidence (percent) set as default.
pub const DEFAULT_MIN_CONFIDENCE: f64 = 80.0;
/// The maximal number of candidates offered to the rule store by default.
pub const DEFAULT_MAX_RULES: usize = 80_000;

const WIDTH: usize = 24;


/// The parameters of [`Cmar`].
/// Every field has a default, so a partial JSON object is accepted.
///
/// ```
/// use cmar::CmarConfig;
///
/// let config = CmarConfig::from_json(r#"{ "min_cover": 4 }"#).unwrap();
/// assert_eq!(config.min_cover, 4);
/// assert_eq!(config.significance_percent, 5.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CmarConfig {
    /// Significance level of the chi-squared test in percent.
    pub significance_percent: f64,
    /// Minimum confidence of a rule in percent.
    pub min_confidence: f64,
    /// Cover count a training record has to exceed to be removed.
    pub min_cover: usize,
    /// Maximal number of candidates offered to the rule store.
    pub max_rules: usize,
    /// Print the progress if `true`.
    pub verbose: bool,
}


impl Default for CmarConfig {
    fn default() -> Self {
        Self {
            significance_percent: SignificanceLevel::default().percentage(),
            min_confidence: DEFAULT_MIN_CONFIDENCE,
            min_cover: DEFAULT_MIN_COVER,
            max_rules: DEFAULT_MAX_RULES,
            verbose: false,
        }
    }
}


impl CmarConfig {
    /// Parse a configuration from a JSON string.
    /// The parsed values are checked with [`CmarConfig::validate`].
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }


    /// Check that every value lies in its admissible range.
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=100.0).contains(&self.min_confidence) {
            return Err(CmarError::InvalidParameter {
                name: "min_confidence",
                reason: format!(
                    "expected a percentage in [0, 100], got {}",
                    self.min_confidence,
                ),
            });
        }
        if !self.significance_percent.is_finite()
            || self.significance_percent <= 0.0
        {
            return Err(CmarError::InvalidParameter {
                name: "significance_percent",
                reason: format!(
                    "expected a positive percentage, got {}",
                    self.significance_percent,
                ),
            });
        }
        Ok(())
    }


    /// Write the configuration as a JSON string.
    pub fn to_json(&self) -> Result<String> {
        let json = serde_json::to_string_pretty(self)?;
        Ok(json)
    }
}


/// Counts of what happened to the candidates during training.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainingStats {
    /// Candidates handed over by the miner.
    pub offered: usize,
    /// Candidates below the minimum confidence.
    pub low_confidence: usize,
    /// Candidates rejected by the chi-squared test.
    pub not_significant: usize,
    /// Candidates dominated by a more general rule.
    pub dominated: usize,
    /// Candidates inserted into the rule store.
    pub inserted: usize,
    /// Rules left after pruning.
    pub pruned: usize,
}


impl fmt::Display for TrainingStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "offered {}, low confidence {}, not significant {}, \
             dominated {}, inserted {}, after pruning {}",
            self.offered,
            self.low_confidence,
            self.not_significant,
            self.dominated,
            self.inserted,
            self.pruned,
        )
    }
}


/// The CMAR training procedure.
///
/// 1. Candidates from a [`CandidateSource`] that reach the minimum
///    confidence are offered to a [`RuleStore`], which keeps the
///    significant, non-dominated ones in CMAR rank order.
/// 2. The store is pruned by database cover ([`CoverPruner`]).
/// 3. The pruned store becomes a [`CmarClassifier`].
///
/// # Example
/// ```no_run
/// use cmar::prelude::*;
///
/// # fn run(train: &Dataset, test: &Dataset) {
/// let miner = AprioriCars::init()
///     .min_support(1.0);
///
/// let classifier = Cmar::init(train)
///     .min_confidence(50.0)
///     .significance(SignificanceLevel::Five)
///     .min_cover(3)
///     .verbose(true)
///     .fit(&miner);
///
/// let report = Evaluator::new(&classifier, test).evaluate();
/// println!("{report}");
/// # }
/// ```
pub struct Cmar<'a> {
    train: &'a Dataset,
    test: ChiSquaredTest,
    min_confidence: f64,
    min_cover: usize,
    max_rules: usize,
    verbose: bool,
    warnings: Vec<ConfigWarning>,
}


impl<'a> Cmar<'a> {
    /// Initialize `Cmar` with the default parameters
    /// (see [`CmarConfig::default`]).
    pub fn init(train: &'a Dataset) -> Self {
        Self {
            train,
            test: ChiSquaredTest::default(),
            min_confidence: DEFAULT_MIN_CONFIDENCE,
            min_cover: DEFAULT_MIN_COVER,
            max_rules: DEFAULT_MAX_RULES,
            verbose: false,
            warnings: Vec::new(),
        }
    }


    /// Initialize `Cmar` from a configuration.
    /// An unknown significance level falls back to 5%
    /// and is recorded in [`Cmar::warnings`].
    pub fn from_config(train: &'a Dataset, config: &CmarConfig) -> Self {
        Self::init(train)
            .significance_percentage(config.significance_percent)
            .min_confidence(config.min_confidence)
            .min_cover(config.min_cover)
            .max_rules(config.max_rules)
            .verbose(config.verbose)
    }


    /// Set the significance level of the chi-squared test.
    /// Default is [`SignificanceLevel::Five`].
    #[inline]
    pub fn significance(mut self, level: SignificanceLevel) -> Self {
        self.test = ChiSquaredTest::new(level);
        self
    }


    /// Set the significance level as a percentage,
    /// one of `10, 5, 2.5, 1, 0.5`.
    /// Any other value selects 5% and records a warning.
    #[inline]
    pub fn significance_percentage(mut self, percent: f64) -> Self {
        let (test, warning) = ChiSquaredTest::with_percentage(percent);
        self.test = test;
        self.warnings.extend(warning);
        self
    }


    /// Set the minimum confidence in percent.
    /// Default is `80.0`.
    #[inline]
    pub fn min_confidence(mut self, percent: f64) -> Self {
        checker::check_percentage("min_confidence", percent);
        self.min_confidence = percent;
        self
    }


    /// Set the cover count a training record has to exceed
    /// to be removed during pruning.
    /// Default is `3`.
    #[inline]
    pub fn min_cover(mut self, min_cover: usize) -> Self {
        self.min_cover = min_cover;
        self
    }


    /// Set the maximal number of candidates offered to the rule store.
    /// Default is `80_000`.
    #[inline]
    pub fn max_rules(mut self, max_rules: usize) -> Self {
        self.max_rules = max_rules;
        self
    }


    /// Set the verbose parameter.
    /// If `true`, `Cmar` prints the settings and the training counts.
    /// Default is `false`.
    #[inline]
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }


    /// Returns the warnings raised while setting the parameters.
    #[inline]
    pub fn warnings(&self) -> &[ConfigWarning] {
        &self.warnings[..]
    }


    /// Offer the candidates of `source` to a new rule store.
    /// The store is not pruned yet.
    pub fn build_store<S>(&self, source: &S) -> (RuleStore, TrainingStats)
        where S: CandidateSource + ?Sized,
    {
        let n_records = self.train.len();
        let mut store = RuleStore::new(self.test);
        let mut stats = TrainingStats::default();

        let mut accepted = 0_usize;
        source.generate(self.train, |candidate| {
            if accepted >= self.max_rules { return false; }
            stats.offered += 1;

            if candidate.confidence() < self.min_confidence {
                stats.low_confidence += 1;
                return true;
            }
            accepted += 1;

            match store.insert_candidate(candidate, n_records) {
                Insertion::Inserted(_) => stats.inserted += 1,
                Insertion::NotSignificant => stats.not_significant += 1,
                Insertion::Dominated => stats.dominated += 1,
            }
            true
        });

        (store, stats)
    }


    /// Train a classifier with the candidates of `source`.
    pub fn fit<S>(&self, source: &S) -> CmarClassifier
        where S: CandidateSource + ?Sized,
    {
        self.fit_with_stats(source).0
    }


    /// Train a classifier with the candidates of `source`
    /// and return the training counts as well.
    pub fn fit_with_stats<S>(&self, source: &S)
        -> (CmarClassifier, TrainingStats)
        where S: CandidateSource + ?Sized,
    {
        if self.verbose { self.print_settings(); }

        let (store, mut stats) = self.build_store(source);

        let store = CoverPruner::new(self.min_cover)
            .prune(store, self.train.records());
        stats.pruned = store.len();

        if self.verbose { self.print_stats(&stats); }

        let classifier = CmarClassifier::new(store, self.train.len());
        (classifier, stats)
    }


    fn print_settings(&self) {
        for warning in &self.warnings {
            eprintln!("{} {warning}", "[WARNING]".bold().yellow());
        }
        println!(
            "{}\n\
            + {:<WIDTH$}{:>10}\n\
            + {:<WIDTH$}{:>10}\n\
            + {:<WIDTH$}{:>10}\n\
            + {:<WIDTH$}{:>10}\n\
            + {:<WIDTH$}{:>10}",
            "START CMAR".bold().green(),
            "Training records", self.train.len(),
            "Min. rules to cover", self.min_cover,
            "Crit. threshold val.", self.test.threshold(),
            "Min. confidence (%)", self.min_confidence,
            "Max number of CARs", self.max_rules,
        );
    }


    fn print_stats(&self, stats: &TrainingStats) {
        println!(
            "{} {}",
            "[CMAR]".bold().cyan(),
            stats.to_string().bold(),
        );
    }
}
