//! Provides [`Evaluator`] that measures the accuracy and the
//! multi-class AUC of a classifier on a labeled test set.
use serde::{Serialize, Deserialize};

use crate::classifier::{Classifier, CmarClassifier};
use crate::dataset::{ClassLabels, Dataset};
use crate::itemset::{ClassId, UNCLASSIFIED};

use std::fmt;


/// A one-hot table with a row per test record and a column per class.
/// Rows of unclassified records stay empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutcomeTable {
    cells: Vec<Vec<u8>>,
}


impl OutcomeTable {
    /// Construct a table of zeros.
    pub fn new(n_records: usize, n_classes: usize) -> Self {
        Self { cells: vec![vec![0_u8; n_classes]; n_records] }
    }


    /// Set the cell `(row, class)` to `1`.
    #[inline]
    pub fn mark(&mut self, row: usize, class: usize) {
        self.cells[row][class] = 1;
    }


    /// Returns the cell `(row, class)`.
    #[inline]
    pub fn get(&self, row: usize, class: usize) -> u8 {
        self.cells[row][class]
    }


    /// Returns the number of rows.
    #[inline]
    pub fn n_rows(&self) -> usize {
        self.cells.len()
    }
}


/// Returns the Mann-Whitney-Wilcoxon statistic `A(i | j)`.
///
/// The records whose true class (`signal`) is `i` are the positives,
/// those whose true class is `j` the negatives.
/// Over all positive/negative pairs it counts how often
/// the response for class `i` is higher on the positive,
/// a tie counting one half, and divides by the number of pairs.
/// If either side is empty the statistic is `0`.
pub fn mww_statistic(
    i: usize,
    j: usize,
    response: &OutcomeTable,
    signal: &OutcomeTable,
) -> f64
{
    let rows = 0..signal.n_rows();
    let positives = rows.clone()
        .filter(|&r| signal.get(r, i) == 1)
        .map(|r| response.get(r, i))
        .collect::<Vec<_>>();
    let negatives = rows
        .filter(|&r| signal.get(r, j) == 1)
        .map(|r| response.get(r, i))
        .collect::<Vec<_>>();

    if positives.is_empty() || negatives.is_empty() { return 0.0; }

    let wins = positives.iter()
        .map(|p| {
            negatives.iter()
                .map(|q| if p > q { 1.0 } else if p == q { 0.5 } else { 0.0 })
                .sum::<f64>()
        })
        .sum::<f64>();

    wins / (positives.len() * negatives.len()) as f64
}


/// Returns the multi-class AUC
/// `2 / (K (K - 1)) * sum_{i < j} (A(i | j) + A(j | i)) / 2`.
/// With fewer than two classes the AUC is `0`.
pub fn multiclass_auc(
    n_classes: usize,
    response: &OutcomeTable,
    signal: &OutcomeTable,
) -> f64
{
    if n_classes < 2 { return 0.0; }

    let mut total = 0.0;
    for i in 0..n_classes - 1 {
        for j in i + 1..n_classes {
            let mww_ij = mww_statistic(i, j, response, signal);
            let mww_ji = mww_statistic(j, i, response, signal);
            total += (mww_ij + mww_ji) / 2.0;
        }
    }

    let k = n_classes as f64;
    (2.0 / (k * (k - 1.0))) * total
}


/// The result of an evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct EvaluationReport {
    /// `100 * correct / n_records`, unclassified records included
    /// in the denominator.
    pub accuracy: f64,
    /// Multi-class area under the ROC curve.
    pub auc: f64,
    /// Records classified correctly.
    pub correct: usize,
    /// Records classified wrongly.
    pub wrong: usize,
    /// Records no rule matched.
    pub unclassified: usize,
}


impl fmt::Display for EvaluationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "accuracy {:.2}% auc {:.4} \
             (correct {}, wrong {}, unclassified {})",
            self.accuracy,
            self.auc,
            self.correct,
            self.wrong,
            self.unclassified,
        )
    }
}


/// Evaluates a trained [`CmarClassifier`] on a labeled test set.
pub struct Evaluator<'a, R> {
    classifier: &'a CmarClassifier<R>,
    test: &'a Dataset,
}


impl<'a, R> Evaluator<'a, R> {
    /// Construct a new evaluator.
    #[inline]
    pub fn new(classifier: &'a CmarClassifier<R>, test: &'a Dataset) -> Self {
        Self { classifier, test }
    }
}


impl<R> Evaluator<'_, R>
    where R: Sync,
{
    /// Classify every test record and report accuracy and AUC.
    /// An empty test set or an empty rule store gives a zero report.
    pub fn evaluate(&self) -> EvaluationReport {
        if self.test.is_empty() || self.classifier.store().is_empty() {
            return EvaluationReport::default();
        }

        let predictions = self.classifier
            .classify_all(self.test.records());

        let labels = self.test.labels();
        let (signal, response, report) = tabulate(
            labels,
            (0..self.test.len()).map(|row| self.test.class_of(row)),
            predictions,
        );

        let auc = multiclass_auc(labels.len(), &response, &signal);
        EvaluationReport { auc, ..report }
    }
}


/// Build the signal (truth) and response (prediction) tables
/// and count the outcomes.
fn tabulate<I>(
    labels: &ClassLabels,
    actual: I,
    predictions: Vec<ClassId>,
) -> (OutcomeTable, OutcomeTable, EvaluationReport)
    where I: Iterator<Item = ClassId>,
{
    let n_records = predictions.len();
    let mut signal = OutcomeTable::new(n_records, labels.len());
    let mut response = OutcomeTable::new(n_records, labels.len());
    let mut report = EvaluationReport::default();

    for (row, (actual, predicted)) in actual.zip(predictions).enumerate() {
        if predicted == UNCLASSIFIED {
            report.unclassified += 1;
            continue;
        }

        if let Some(ix) = labels.index_of(actual) {
            signal.mark(row, ix);
        }
        if let Some(ix) = labels.index_of(predicted) {
            response.mark(row, ix);
        }

        if predicted == actual {
            report.correct += 1;
        } else {
            report.wrong += 1;
        }
    }

    report.accuracy = report.correct as f64 * 100.0 / n_records as f64;
    (signal, response, report)
}

