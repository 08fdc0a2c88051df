//! This file provides some common functions
//! such as the two-decimal comparison of supports and confidences.


/// Returns `true` if the two numbers agree up to two decimal places.
/// Both numbers are shifted by `0.005`, scaled by `100`,
/// and truncated before they are compared.
#[inline(always)]
pub(crate) fn similar_2dec(x: f64, y: f64) -> bool {
    scaled_2dec(x) == scaled_2dec(y)
}


#[inline(always)]
fn scaled_2dec(x: f64) -> i64 {
    ((x + 0.005) * 100.0).trunc() as i64
}


/// Returns `100 * part / whole`.
/// `0` is returned for an empty `whole`.
#[inline(always)]
pub(crate) fn percentage(part: f64, whole: f64) -> f64 {
    if whole == 0.0 { return 0.0; }
    part * 100.0 / whole
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_decimal_tolerance() {
        assert!(similar_2dec(90.0, 90.004));
        assert!(similar_2dec(85.714, 85.71));
        assert!(!similar_2dec(90.0, 90.01));
        assert!(!similar_2dec(50.0, 51.0));
    }


    #[test]
    fn percentage_of_empty_whole() {
        assert_eq!(percentage(3.0, 0.0), 0.0);
        assert_eq!(percentage(30.0, 40.0), 75.0);
    }
}
