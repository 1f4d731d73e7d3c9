//! Testing utilities for tree-omega.
//!
//! Assertion helpers shared by unit tests, integration tests and benchmarks.
//!
//! ```
//! use tree_omega::assert_approx_eq;
//! use tree_omega::testing::DEFAULT_TOLERANCE;
//! use tree_omega::{GradStats, NoRegularization, RegularizationTerm};
//!
//! let weight = NoRegularization.calc_weight(GradStats::new(-1.0, 3.0));
//! assert_approx_eq!(weight, 1.0 / 3.0, DEFAULT_TOLERANCE);
//! ```

use crate::training::gbdt::{GradStats, RegularizationTerm};

/// Default tolerance for gain and weight comparisons.
///
/// Gains and weights are computed in `f64` from sums of O(1) values.
pub const DEFAULT_TOLERANCE: f64 = 1e-9;

/// Assert that two f64 values are approximately equal.
///
/// Uses absolute difference comparison with the given tolerance.
///
/// # Examples
///
/// ```
/// # use tree_omega::assert_approx_eq;
/// assert_approx_eq!(1.0, 1.0001, 0.001);
/// ```
///
/// # Panics
///
/// Panics if the absolute difference exceeds tolerance.
#[macro_export]
macro_rules! assert_approx_eq {
    ($left:expr, $right:expr, $tolerance:expr) => {{
        let left_val: f64 = $left;
        let right_val: f64 = $right;
        let tol: f64 = $tolerance;
        let diff = (left_val - right_val).abs();
        if !(diff <= tol) {
            panic!(
                "assertion failed: `(left ≈ right)`\n  left: `{:?}`\n right: `{:?}`\n  diff: `{:?}` > tolerance `{:?}`",
                left_val, right_val, diff, tol
            );
        }
    }};
    ($left:expr, $right:expr, $tolerance:expr, $($arg:tt)+) => {{
        let left_val: f64 = $left;
        let right_val: f64 = $right;
        let tol: f64 = $tolerance;
        let diff = (left_val - right_val).abs();
        if !(diff <= tol) {
            panic!(
                "assertion failed: `(left ≈ right)` - {}\n  left: `{:?}`\n right: `{:?}`\n  diff: `{:?}` > tolerance `{:?}`",
                format_args!($($arg)+), left_val, right_val, diff, tol
            );
        }
    }};
}

/// Assert that a term's split gain equals the sum of its children's gains.
///
/// # Panics
///
/// Panics if the relative difference exceeds `tolerance`.
pub fn assert_split_gain_additive(
    term: &dyn RegularizationTerm,
    left: GradStats,
    right: GradStats,
    tolerance: f64,
) {
    let split = term.calc_split_gain(left, right);
    let sum = term.calc_gain(left) + term.calc_gain(right);
    let scale = split.abs().max(sum.abs()).max(1.0);
    assert!(
        (split - sum).abs() <= tolerance * scale,
        "{}: split gain {split} != gain(left) + gain(right) = {sum} for left={left:?}, right={right:?}",
        term.name()
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::training::gbdt::{NoRegularization, WeightDecay};

    #[test]
    fn approx_eq_within_tolerance() {
        assert_approx_eq!(1.0, 1.0 + 1e-12, DEFAULT_TOLERANCE);
    }

    #[test]
    #[should_panic(expected = "left ≈ right")]
    fn approx_eq_outside_tolerance() {
        assert_approx_eq!(1.0, 1.1, DEFAULT_TOLERANCE);
    }

    #[test]
    #[should_panic(expected = "left ≈ right")]
    fn approx_eq_rejects_nan() {
        assert_approx_eq!(f64::NAN, 1.0, DEFAULT_TOLERANCE);
    }

    #[test]
    fn builtin_terms_are_additive() {
        let left = GradStats::new(-1.25, 0.5);
        let right = GradStats::new(2.0, 3.0);
        assert_split_gain_additive(&NoRegularization, left, right, DEFAULT_TOLERANCE);
        assert_split_gain_additive(&WeightDecay::default(), left, right, DEFAULT_TOLERANCE);
    }
}
