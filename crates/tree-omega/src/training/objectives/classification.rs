//! Classification objectives.

use super::{validate_objective_inputs, weight_iter, ObjectiveFn};
use crate::training::Gradients;

// =============================================================================
// Hinge Loss
// =============================================================================

/// Hinge loss for SVM-style binary classification.
///
/// Labels above 0.5 are the positive class (+1), everything else the
/// negative class (-1), so both {0, 1} and {-1, +1} encodings work.
/// - Loss: `max(0, 1 - y * pred)`
/// - Gradient: `-w * y` if `y * pred < 1`, else `0`
/// - Hessian: `w` (constant, keeps the Newton step well-defined)
///
/// Predictions are transformed to hard class labels: `1.0` for a positive
/// margin, `0.0` otherwise.
///
/// # Example
///
/// ```
/// use tree_omega::{Gradients, HingeLoss, ObjectiveFn};
///
/// let mut gradients = Gradients::new(2, 1);
/// HingeLoss.compute_gradients(&[0.2, -3.0], &[1.0, 0.0], &[], &mut gradients);
///
/// // Inside the margin: pushed towards the label
/// assert_eq!(gradients.get(0, 0), (-1.0, 1.0));
/// // Correct with margin: no gradient
/// assert_eq!(gradients.get(1, 0), (0.0, 1.0));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct HingeLoss;

impl ObjectiveFn for HingeLoss {
    fn compute_gradients(
        &self,
        predictions: &[f32],
        targets: &[f32],
        weights: &[f32],
        gradients: &mut Gradients,
    ) {
        let n_outputs = self.n_outputs();
        validate_objective_inputs(n_outputs, predictions.len(), targets.len(), gradients, weights);
        let n_rows = gradients.n_samples();

        for out_idx in 0..n_outputs {
            let offset = out_idx * n_rows;
            let pred_slice = &predictions[offset..offset + n_rows];
            let target_slice = &targets[offset..offset + n_rows];
            let (grad_slice, hess_slice) = gradients.output_grads_hess_mut(out_idx);

            for (i, w) in weight_iter(weights, n_rows).enumerate() {
                // Convert {0, 1} to {-1, +1}
                let y = if target_slice[i] > 0.5 { 1.0 } else { -1.0 };
                let margin = y * pred_slice[i];

                grad_slice[i] = if margin < 1.0 { -w * y } else { 0.0 };
                hess_slice[i] = w;
            }
        }
    }

    fn compute_base_score(&self, _targets: &[f32], _weights: &[f32]) -> Vec<f32> {
        // Start at the decision boundary
        vec![0.0; self.n_outputs()]
    }

    fn transform_predictions_inplace(&self, predictions: &mut [f32]) {
        for p in predictions.iter_mut() {
            *p = if *p > 0.0 { 1.0 } else { 0.0 };
        }
    }

    fn default_metric(&self) -> &'static str {
        "error"
    }

    fn name(&self) -> &'static str {
        "binary:hinge"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hinge_loss_margin() {
        let obj = HingeLoss;
        let mut gradients = Gradients::new(1, 1);

        // Correctly classified with margin
        obj.compute_gradients(&[2.0], &[1.0], &[], &mut gradients);
        // margin = 1 * 2 = 2 >= 1, so grad = 0
        assert_eq!(gradients.get(0, 0), (0.0, 1.0));

        // Misclassified
        obj.compute_gradients(&[-0.5], &[1.0], &[], &mut gradients);
        // margin = 1 * -0.5 < 1, so grad = -y = -1
        assert_eq!(gradients.get(0, 0), (-1.0, 1.0));

        // Exactly on the margin counts as correct
        obj.compute_gradients(&[-1.0], &[0.0], &[], &mut gradients);
        assert_eq!(gradients.get(0, 0), (0.0, 1.0));
    }

    #[test]
    fn signed_and_binary_labels_agree() {
        let obj = HingeLoss;
        let preds = [0.3, -0.2, 1.5];
        let mut from_01 = Gradients::new(3, 1);
        let mut from_signed = Gradients::new(3, 1);

        obj.compute_gradients(&preds, &[1.0, 0.0, 0.0], &[], &mut from_01);
        obj.compute_gradients(&preds, &[1.0, -1.0, -1.0], &[], &mut from_signed);

        assert_eq!(from_01.output_grads(0), from_signed.output_grads(0));
        assert_eq!(from_01.output_grads(0), &[-1.0, 1.0, 1.0]);
    }

    #[test]
    fn weighted_gradients() {
        let obj = HingeLoss;
        let mut gradients = Gradients::new(2, 1);
        obj.compute_gradients(&[0.0, 0.0], &[1.0, 0.0], &[2.0, 0.5], &mut gradients);

        assert_eq!(gradients.get(0, 0), (-2.0, 2.0));
        assert_eq!(gradients.get(1, 0), (0.5, 0.5));
    }

    #[test]
    fn base_score_and_transform() {
        let obj = HingeLoss;
        assert_eq!(obj.compute_base_score(&[1.0, 0.0], &[]), vec![0.0]);

        let mut preds = [0.7, -0.1, 0.0, 3.0];
        obj.transform_predictions_inplace(&mut preds);
        assert_eq!(preds, [1.0, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn metadata() {
        assert_eq!(HingeLoss.name(), "binary:hinge");
        assert_eq!(HingeLoss.default_metric(), "error");
    }

    #[test]
    #[should_panic(expected = "label set cannot be empty")]
    fn empty_labels_panic() {
        let mut gradients = Gradients::new(1, 1);
        HingeLoss.compute_gradients(&[0.0], &[], &[], &mut gradients);
    }

    #[test]
    #[should_panic(expected = "predictions.len() (1) != n_rows * n_outputs (2)")]
    fn mismatched_predictions_panic() {
        let mut gradients = Gradients::new(2, 1);
        HingeLoss.compute_gradients(&[0.0], &[1.0, 0.0], &[], &mut gradients);
    }
}
