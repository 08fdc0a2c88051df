use colored::Colorize;
use serde::{Serialize, Deserialize};

use crate::candidate::CandidateSource;
use crate::cmar::{Cmar, CmarConfig};
use crate::evaluation::Evaluator;
use super::cross_validation::CrossValidation;

const WIDTH: usize = 10;
const FULL_WIDTH: usize = 4 * (WIDTH + 2);


/// The outcome of a single fold.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FoldResult {
    /// Accuracy on the test fold, in percent.
    pub accuracy: f64,
    /// Multi-class AUC on the test fold.
    pub auc: f64,
    /// Number of rules after pruning.
    pub n_rules: usize,
}


/// The outcome of a cross validation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TcvSummary {
    /// One entry per fold.
    pub folds: Vec<FoldResult>,
}


impl TcvSummary {
    fn mean_of<F>(&self, f: F) -> f64
        where F: Fn(&FoldResult) -> f64
    {
        if self.folds.is_empty() { return 0.0; }
        self.folds.iter().map(f).sum::<f64>() / self.folds.len() as f64
    }


    /// Returns the mean accuracy over the folds.
    pub fn mean_accuracy(&self) -> f64 {
        self.mean_of(|fold| fold.accuracy)
    }


    /// Returns the mean AUC over the folds.
    pub fn mean_auc(&self) -> f64 {
        self.mean_of(|fold| fold.auc)
    }


    /// Returns the mean number of rules over the folds.
    pub fn mean_rules(&self) -> f64 {
        self.mean_of(|fold| fold.n_rules as f64)
    }


    fn print(&self) {
        println!(
            "{:=>FULL_WIDTH$}\n{:>WIDTH$}  {:>WIDTH$}  {:>WIDTH$}  {:>WIDTH$}\n{:->FULL_WIDTH$}",
            "",
            "FOLD".bold().red(),
            "ACC.".bold().green(),
            "AUC".bold().yellow(),
            "RULES".bold().cyan(),
            "",
        );
        for (i, fold) in self.folds.iter().enumerate() {
            println!(
                "{:>WIDTH$}  {:>WIDTH$.2}  {:>WIDTH$.4}  {:>WIDTH$}",
                i + 1, fold.accuracy, fold.auc, fold.n_rules,
            );
        }
        println!(
            "{:->FULL_WIDTH$}\n{:>WIDTH$}  {:>WIDTH$.2}  {:>WIDTH$.4}  {:>WIDTH$.1}\n{:=>FULL_WIDTH$}",
            "",
            "MEAN".bold(),
            self.mean_accuracy(),
            self.mean_auc(),
            self.mean_rules(),
            "",
        );
    }
}


/// Train and evaluate CMAR on every fold of `cv`.
/// The candidates of each fold are mined by `source`
/// over that fold's training records.
/// With `config.verbose`, the per-fold results and their means
/// are printed at the end.
pub fn cross_validate<S>(
    cv: CrossValidation<'_>,
    config: &CmarConfig,
    source: &S,
) -> TcvSummary
    where S: CandidateSource + ?Sized,
{
    let mut summary = TcvSummary::default();
    for (train, test) in cv {
        let (classifier, stats) = Cmar::from_config(&train, config)
            .fit_with_stats(source);
        let report = Evaluator::new(&classifier, &test).evaluate();

        summary.folds.push(FoldResult {
            accuracy: report.accuracy,
            auc: report.auc,
            n_rules: stats.pruned,
        });
    }

    if config.verbose { summary.print(); }
    summary
}
