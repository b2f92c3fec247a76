//! Testing helpers shared across the workspace.

use assert_float_eq::*;

/// Asserts that two slices are of equal length and that their elements are relatively equal to
/// within `epsilon`.
pub fn assert_slice_f64_relative(expected: &[f64], actual: &[f64], epsilon: f64) {
    assert_eq!(
        expected.len(),
        actual.len(),
        "lengths do not match: {} ≠ {}",
        expected.len(),
        actual.len()
    );
    for (&expected, &actual) in expected.iter().zip(actual) {
        if actual != expected {
            assert_float_relative_eq!(expected, actual, epsilon);
        }
    }
}

/// Asserts that the values sum to `expected` to within an absolute `tolerance`.
pub fn assert_sum_f64(expected: f64, values: &[f64], tolerance: f64) {
    let sum = values.iter().sum::<f64>();
    assert!(
        (sum - expected).abs() <= tolerance,
        "sum {sum} of {values:?} is not within {tolerance} of {expected}"
    );
}
