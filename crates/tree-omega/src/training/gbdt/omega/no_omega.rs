//! Unregularized term: the plain Newton step.

use super::{sqr, RegularizationTerm};
use crate::training::gbdt::GradStats;

/// No regularization.
///
/// - Weight: `-G / H`
/// - Gain: `G² / H`
///
/// Takes no parameters. A node with `H == 0` yields infinite or NaN results;
/// callers must not present empty nodes.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoRegularization;

impl NoRegularization {
    /// Registry name.
    pub const NAME: &'static str = "no_regularization";
}

impl RegularizationTerm for NoRegularization {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    #[inline]
    fn calc_weight(&self, stats: GradStats) -> f64 {
        -stats.sum_grad / stats.sum_hess
    }

    #[inline]
    fn calc_gain(&self, stats: GradStats) -> f64 {
        sqr(stats.sum_grad) / stats.sum_hess
    }
}
