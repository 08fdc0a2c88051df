//! Provides the chi-squared significance test of a classification rule
//! and the upper bound of its chi-squared value used by the
//! weighted chi-squared (WCS) vote.
//!
//! All routines take support **counts** as `f64`:
//! `supp_a` for the antecedent, `supp_c` for the consequent,
//! `supp_ac` for the rule and `n` for the number of training records.
use serde::{Serialize, Deserialize};

use crate::error::ConfigWarning;


/// Critical value at 10% significance (1 degree of freedom).
pub const THRESHOLD_10: f64 = 2.7055;
/// Critical value at 5% significance (1 degree of freedom).
pub const THRESHOLD_5: f64 = 3.8415;
/// Critical value at 2.5% significance (1 degree of freedom).
pub const THRESHOLD_2HALF: f64 = 5.0239;
/// Critical value at 1% significance (1 degree of freedom).
pub const THRESHOLD_1: f64 = 6.6349;
/// Critical value at 0.5% significance (1 degree of freedom).
pub const THRESHOLD_HALF: f64 = 7.8794;


/// The significance levels with a hard coded critical value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SignificanceLevel {
    /// 10%
    Ten,
    /// 5%
    #[default]
    Five,
    /// 2.5%
    TwoAndHalf,
    /// 1%
    One,
    /// 0.5%
    Half,
}


impl SignificanceLevel {
    /// Returns the level for the given percentage.
    /// A percentage other than `10, 5, 2.5, 1, 0.5` falls back to 5%,
    /// and the returned warning says so.
    pub fn from_percentage(percent: f64) -> (Self, Option<ConfigWarning>) {
        // Compare in hundredths of a percent.
        let level = match (percent * 100.0) as i64 {
            1000 => Self::Ten,
            500 => Self::Five,
            250 => Self::TwoAndHalf,
            100 => Self::One,
            50 => Self::Half,
            _ => {
                let warning = ConfigWarning::UnknownSignificance(percent);
                return (Self::Five, Some(warning));
            },
        };
        (level, None)
    }


    /// Returns the level as a percentage.
    pub fn percentage(&self) -> f64 {
        match self {
            Self::Ten => 10.0,
            Self::Five => 5.0,
            Self::TwoAndHalf => 2.5,
            Self::One => 1.0,
            Self::Half => 0.5,
        }
    }


    /// Returns the critical chi-squared value of this level.
    pub fn threshold(&self) -> f64 {
        match self {
            Self::Ten => THRESHOLD_10,
            Self::Five => THRESHOLD_5,
            Self::TwoAndHalf => THRESHOLD_2HALF,
            Self::One => THRESHOLD_1,
            Self::Half => THRESHOLD_HALF,
        }
    }
}


/// The `2 x 2` contingency table of a rule `A -> C`.
/// Cells are ordered as `(A, C)`, `(A, ¬C)`, `(¬A, C)`, `(¬A, ¬C)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contingency {
    observed: [f64; 4],
    expected: [f64; 4],
}


impl Contingency {
    /// Construct the observed and expected cell counts.
    pub fn new(supp_a: f64, supp_c: f64, supp_ac: f64, n: f64) -> Self {
        let observed = [
            supp_ac,
            supp_a - supp_ac,
            supp_c - supp_ac,
            n - supp_a - supp_c + supp_ac,
        ];

        let supp_not_a = n - supp_a;
        let supp_not_c = n - supp_c;
        let expected = [
            (supp_c * supp_a) / n,
            (supp_not_c * supp_a) / n,
            (supp_c * supp_not_a) / n,
            (supp_not_c * supp_not_a) / n,
        ];

        Self { observed, expected }
    }


    /// Returns the observed cell counts.
    #[inline]
    pub fn observed(&self) -> &[f64; 4] {
        &self.observed
    }


    /// Returns the expected cell counts.
    #[inline]
    pub fn expected(&self) -> &[f64; 4] {
        &self.expected
    }


    /// Returns `true` if some expected cell is zero (or not a number),
    /// in which case the statistic is undefined.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.expected.iter()
            .any(|&e| e.is_nan() || e <= 0.0)
    }


    /// Returns `sum_i (O_i - E_i)^2 / E_i`,
    /// or `None` if the table is degenerate.
    pub fn statistic(&self) -> Option<f64> {
        if self.is_degenerate() { return None; }

        let value = self.observed.iter()
            .zip(&self.expected)
            .map(|(o, e)| (o - e).powi(2) / e)
            .sum::<f64>();
        Some(value)
    }
}


/// Returns the chi-squared value of a rule,
/// or `None` if some expected cell is zero.
#[inline]
pub fn chi_squared(supp_a: f64, supp_c: f64, supp_ac: f64, n: f64)
    -> Option<f64>
{
    Contingency::new(supp_a, supp_c, supp_ac, n).statistic()
}


/// Returns the maximum chi-squared value that a rule with the given
/// antecedent and consequent supports can take.
/// Returns `None` if the bound is undefined,
/// e.g. a support is `0` or equals `n`.
pub fn upper_bound(supp_a: f64, supp_c: f64, n: f64) -> Option<f64> {
    if n <= 0.0 { return None; }

    let term = (supp_a.min(supp_c) - (supp_a * supp_c) / n).powi(2);

    let denominators = [
        supp_a * supp_c,
        supp_a * (n - supp_c),
        supp_c * (n - supp_a),
        (n - supp_a) * (n - supp_c),
    ];
    if denominators.iter().any(|&d| d.is_nan() || d <= 0.0) {
        return None;
    }
    let e = denominators.iter()
        .map(|d| 1.0 / d)
        .sum::<f64>();

    let bound = term * e * n;
    bound.is_finite().then_some(bound)
}


/// The chi-squared significance test at a fixed level.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ChiSquaredTest {
    level: SignificanceLevel,
}


impl ChiSquaredTest {
    /// Construct a test at the given significance level.
    #[inline]
    pub fn new(level: SignificanceLevel) -> Self {
        Self { level }
    }


    /// Construct a test from a percentage.
    /// See [`SignificanceLevel::from_percentage`].
    #[inline]
    pub fn with_percentage(percent: f64) -> (Self, Option<ConfigWarning>) {
        let (level, warning) = SignificanceLevel::from_percentage(percent);
        (Self::new(level), warning)
    }


    /// Returns the significance level.
    #[inline]
    pub fn level(&self) -> SignificanceLevel {
        self.level
    }


    /// Returns the critical value.
    #[inline]
    pub fn threshold(&self) -> f64 {
        self.level.threshold()
    }


    /// Returns `true` if the chi-squared value of the rule
    /// exceeds the critical value.
    /// A degenerate table is never significant.
    pub fn is_significant(
        &self,
        supp_a: f64,
        supp_c: f64,
        supp_ac: f64,
        n: f64,
    ) -> bool
    {
        match chi_squared(supp_a, supp_c, supp_ac, n) {
            Some(value) => value > self.threshold(),
            None => false,
        }
    }
}
