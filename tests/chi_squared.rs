use cmar::chi_squared::{
    chi_squared,
    upper_bound,
    THRESHOLD_1,
    THRESHOLD_10,
    THRESHOLD_2HALF,
    THRESHOLD_5,
    THRESHOLD_HALF,
};
use cmar::{ChiSquaredTest, ConfigWarning, Contingency, SignificanceLevel};


const EPS: f64 = 1e-9;


#[test]
fn contingency_cells_of_the_worked_example() {
    let table = Contingency::new(40.0, 50.0, 30.0, 100.0);
    assert_eq!(table.observed(), &[30.0, 10.0, 20.0, 40.0]);
    assert_eq!(table.expected(), &[20.0, 20.0, 30.0, 30.0]);

    let value = table.statistic().unwrap();
    let expected = 5.0 + 5.0 + 100.0 / 30.0 + 100.0 / 30.0;
    assert!((value - expected).abs() < EPS);
    assert!((value - 16.6667).abs() < 1e-3);

    assert!(ChiSquaredTest::default().is_significant(40.0, 50.0, 30.0, 100.0));
}


#[test]
fn independent_rule_is_not_significant() {
    let value = chi_squared(50.0, 50.0, 25.0, 100.0).unwrap();
    assert!(value.abs() < EPS);
    assert!(!ChiSquaredTest::default().is_significant(50.0, 50.0, 25.0, 100.0));
}


#[test]
fn zero_expected_cell_is_degenerate() {
    // The antecedent holds for every record.
    let table = Contingency::new(100.0, 50.0, 50.0, 100.0);
    assert!(table.is_degenerate());
    assert_eq!(table.statistic(), None);

    assert_eq!(chi_squared(0.0, 50.0, 0.0, 100.0), None);
    assert_eq!(chi_squared(10.0, 5.0, 5.0, 0.0), None);

    let test = ChiSquaredTest::new(SignificanceLevel::Ten);
    assert!(!test.is_significant(100.0, 50.0, 50.0, 100.0));
}


#[test]
fn thresholds_per_level() {
    let levels = [
        (10.0, SignificanceLevel::Ten, THRESHOLD_10),
        (5.0, SignificanceLevel::Five, THRESHOLD_5),
        (2.5, SignificanceLevel::TwoAndHalf, THRESHOLD_2HALF),
        (1.0, SignificanceLevel::One, THRESHOLD_1),
        (0.5, SignificanceLevel::Half, THRESHOLD_HALF),
    ];
    for (percent, level, threshold) in levels {
        let (parsed, warning) = SignificanceLevel::from_percentage(percent);
        assert_eq!(parsed, level);
        assert!(warning.is_none());
        assert_eq!(parsed.threshold(), threshold);
        assert_eq!(parsed.percentage(), percent);
    }
    assert_eq!(THRESHOLD_5, 3.8415);
}


#[test]
fn unknown_level_falls_back_to_five_percent() {
    let (test, warning) = ChiSquaredTest::with_percentage(7.0);
    assert_eq!(test.level(), SignificanceLevel::Five);
    assert_eq!(test.threshold(), THRESHOLD_5);
    assert_eq!(warning, Some(ConfigWarning::UnknownSignificance(7.0)));
    assert!(warning.unwrap().to_string().contains("5%"));
}


#[test]
fn threshold_decides_significance() {
    // chi^2 = 16.67 passes every level.
    for percent in [10.0, 5.0, 2.5, 1.0, 0.5] {
        let (test, _) = ChiSquaredTest::with_percentage(percent);
        assert!(test.is_significant(40.0, 50.0, 30.0, 100.0));
    }

    // A = 50, C = 50, AC = 30 over 100 records gives chi^2 = 4.
    let value = chi_squared(50.0, 50.0, 30.0, 100.0).unwrap();
    assert!((value - 4.0).abs() < EPS);
    assert!(ChiSquaredTest::new(SignificanceLevel::Five)
        .is_significant(50.0, 50.0, 30.0, 100.0));
    assert!(!ChiSquaredTest::new(SignificanceLevel::TwoAndHalf)
        .is_significant(50.0, 50.0, 30.0, 100.0));
}


#[test]
fn upper_bound_dominates_the_statistic() {
    let bound = upper_bound(40.0, 50.0, 100.0).unwrap();
    // term = (40 - 20)^2, e = 1/2000 + 1/2000 + 1/3000 + 1/3000
    let e = 2.0 / 2000.0 + 2.0 / 3000.0;
    assert!((bound - 400.0 * e * 100.0).abs() < EPS);

    for supp_ac in [20.0, 25.0, 30.0, 35.0, 40.0] {
        let value = chi_squared(40.0, 50.0, supp_ac, 100.0).unwrap();
        assert!(value <= bound + EPS);
    }

    assert_eq!(upper_bound(0.0, 50.0, 100.0), None);
    assert_eq!(upper_bound(100.0, 50.0, 100.0), None);
    assert_eq!(upper_bound(10.0, 10.0, 0.0), None);
}
