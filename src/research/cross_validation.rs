use rand::prelude::*;
use colored::Colorize;
use crate::Dataset;

use std::iter::Iterator;

const WIDTH: usize = 9;
/// The number of folds set as default.
pub const DEFAULT_N_FOLDS: usize = 10;

/// A struct that generates
/// pairs of training/test dataset for cross validation.
///
/// The records are cut into `n_folds` consecutive chunks
/// (after an optional shuffle);
/// the `i`'th pair tests on the `i`'th chunk and trains on the rest.
/// # Example
/// ```no_run
/// use cmar::prelude::*;
/// use cmar::research::CrossValidation;
///
/// # fn run(dataset: &Dataset) {
/// let cv = CrossValidation::new(dataset)
///     .n_folds(10)
///     .verbose(true)
///     .seed(777)
///     .shuffle();
/// let miner = AprioriCars::init().min_support(1.0);
/// for (train, test) in cv {
///     let classifier = Cmar::init(&train)
///         .min_confidence(50.0)
///         .fit(&miner);
///     let report = Evaluator::new(&classifier, &test).evaluate();
///     println!("{report}");
/// }
/// # }
/// ```
pub struct CrossValidation<'a> {
    current_fold: usize,
    n_folds: usize,
    seed: u64,
    dataset: &'a Dataset,
    ix: Vec<usize>,
    verbose: bool,
}


impl<'a> CrossValidation<'a> {
    /// Construct a new instance of `CrossValidation.`
    #[inline]
    pub fn new(dataset: &'a Dataset) -> Self {
        let ix = (0..dataset.len()).collect::<Vec<_>>();
        Self {
            current_fold: 0,
            n_folds: DEFAULT_N_FOLDS,
            seed: 1234,
            verbose: false,
            dataset,
            ix,
        }
    }


    /// Set the number of chunks the records are cut into.
    /// Default is `10`.
    #[inline]
    pub fn n_folds(mut self, n_folds: usize) -> Self {
        assert!(n_folds > 0, "`n_folds` must be positive");
        self.n_folds = n_folds;
        self
    }


    /// Set the seed of the `StdRng` used by [`CrossValidation::shuffle`].
    /// Default is `1234`.
    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }


    /// Print the fold number and the two record counts
    /// of every pair if `true`.
    /// Default is `false`.
    #[inline]
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }


    /// Permute the record order once, before the records are cut
    /// into folds. Without this call the folds follow the dataset order.
    #[inline]
    pub fn shuffle(mut self) -> Self {
        let mut rng = StdRng::seed_from_u64(self.seed);
        self.ix.shuffle(&mut rng);
        self
    }


    /// Returns the number of folds.
    #[inline]
    pub fn folds(&self) -> usize {
        self.n_folds
    }


    /// Returns the training/test dataset for `i`th fold.
    #[inline]
    fn fold_at(&self, i: usize) -> (Dataset, Dataset) {
        let n_records = self.dataset.len();
        let start = i * n_records / self.n_folds;
        let end = (i + 1) * n_records / self.n_folds;
        self.dataset.split(&self.ix, start, end)
    }
}


impl Iterator for CrossValidation<'_> {
    type Item = (Dataset, Dataset);
    fn next(&mut self) -> Option<Self::Item> {
        if self.current_fold >= self.n_folds { return None; }

        let (train, test) = self.fold_at(self.current_fold);
        self.current_fold += 1;

        if self.verbose {
            println!(
                "{} {}  {}",
                format!("[FOLD {:>3}/{}]", self.current_fold, self.n_folds)
                    .bold()
                    .red(),
                format!("train {:>WIDTH$}", train.len()).green(),
                format!("test {:>WIDTH$}", test.len()).yellow(),
            );
        }

        Some((train, test))
    }
}
