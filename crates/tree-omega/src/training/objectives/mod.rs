//! Objective (loss) functions producing gradient pairs.
//!
//! An objective turns predictions and labels into per-sample `(grad, hess)`
//! pairs, written into a [`Gradients`] buffer. Everything downstream (node
//! statistics, regularization terms) only sees those pairs.
//!
//! # Multi-Output Support
//!
//! Data is stored in **column-major** order:
//! `[output0_row0, output0_row1, ..., output0_rowN, output1_row0, ...]`
//!
//! # Weighted Training
//!
//! Pass an empty slice `&[]` for unweighted computation.
//!
//! # Available Objectives
//!
//! - [`HingeLoss`]: SVM-style binary classification

mod classification;

pub use classification::HingeLoss;

use crate::training::Gradients;

// =============================================================================
// Helpers
// =============================================================================

/// Iterate sample weights, yielding 1.0 for every row when unweighted.
#[inline]
fn weight_iter(weights: &[f32], n_rows: usize) -> impl Iterator<Item = f32> + '_ {
    let uniform = weights.is_empty();
    (0..n_rows).map(move |i| if uniform { 1.0 } else { weights[i] })
}

/// Validate objective input sizes.
///
/// Panics with a descriptive message if inputs are inconsistent.
#[inline]
fn validate_objective_inputs(
    n_outputs: usize,
    predictions_len: usize,
    targets_len: usize,
    gradients: &Gradients,
    weights: &[f32],
) {
    let n_rows = gradients.n_samples();
    assert!(targets_len > 0, "label set cannot be empty");
    assert_eq!(
        gradients.n_outputs(),
        n_outputs,
        "gradient buffer has {} outputs, objective produces {}",
        gradients.n_outputs(),
        n_outputs
    );
    let required = n_rows * n_outputs;
    assert_eq!(
        predictions_len, required,
        "predictions.len() ({}) != n_rows * n_outputs ({})",
        predictions_len, required
    );
    assert_eq!(
        targets_len, required,
        "targets.len() ({}) != n_rows * n_outputs ({})",
        targets_len, required
    );
    assert!(
        weights.is_empty() || weights.len() == n_rows,
        "weights.len() ({}) != n_rows ({})",
        weights.len(),
        n_rows
    );
}

// =============================================================================
// Objective Trait
// =============================================================================

/// An objective (loss) function for training gradient boosted models.
///
/// # Layout
///
/// - `predictions`: `[n_outputs * n_rows]`, column-major
/// - `targets`: `[n_outputs * n_rows]`, column-major
/// - `weights`: `[n_rows]`, or empty for unweighted
///
/// `n_rows` is taken from the gradient buffer.
pub trait ObjectiveFn: Send + Sync {
    /// Number of outputs (predictions per sample).
    fn n_outputs(&self) -> usize {
        1
    }

    /// Compute gradients and hessians for the given predictions.
    ///
    /// # Panics
    ///
    /// Panics if the slice lengths do not match the buffer shape.
    fn compute_gradients(
        &self,
        predictions: &[f32],
        targets: &[f32],
        weights: &[f32],
        gradients: &mut Gradients,
    );

    /// Optimal constant prediction before any trees are added, per output.
    fn compute_base_score(&self, targets: &[f32], weights: &[f32]) -> Vec<f32>;

    /// Map raw margins to the objective's prediction space, in place.
    fn transform_predictions_inplace(&self, predictions: &mut [f32]);

    /// Name of the evaluation metric used when none is configured.
    fn default_metric(&self) -> &'static str;

    /// Name of the objective (for logging).
    fn name(&self) -> &'static str;
}
