//! Structure-of-Arrays gradient buffer with column-major layout.
//!
//! Objectives write one `(grad, hess)` pair per sample and output into a
//! [`Gradients`] buffer; the tree grower then sums them per node into
//! [`GradStats`] before asking the regularization term for gains and weights.
//!
//! # Layout
//!
//! For `n_samples` samples and `n_outputs` outputs (1 for regression, K for multiclass):
//!
//! ```text
//! grads: [s0_o0, s1_o0, ..., sN_o0, s0_o1, s1_o1, ..., sN_o1, ...]
//! hess:  [s0_o0, s1_o0, ..., sN_o0, s0_o1, s1_o1, ..., sN_o1, ...]
//!        |---- output 0 ----|      |---- output 1 ----|
//! ```
//!
//! Index formula: `grads[output * n_samples + sample]`

use crate::training::gbdt::GradStats;

/// Structure-of-Arrays gradient buffer with column-major layout.
///
/// # Example
///
/// ```
/// use tree_omega::{GradStats, Gradients};
///
/// let mut buffer = Gradients::new(3, 1);
/// buffer.set(0, 0, -1.0, 1.0);
/// buffer.set(1, 0, 0.5, 1.0);
/// buffer.set(2, 0, 2.0, 0.5);
///
/// assert_eq!(buffer.sum(0, None), GradStats::new(1.5, 2.5));
/// assert_eq!(buffer.sum(0, Some(&[0, 2])), GradStats::new(1.0, 1.5));
/// ```
#[derive(Debug, Clone)]
pub struct Gradients {
    /// Gradient values (∂L/∂pred).
    grads: Vec<f32>,
    /// Hessian values (∂²L/∂pred²).
    hess: Vec<f32>,
    n_samples: usize,
    n_outputs: usize,
}

impl Gradients {
    /// Create a new gradient buffer initialized to zeros.
    ///
    /// # Panics
    ///
    /// Panics if `n_samples` or `n_outputs` is zero.
    pub fn new(n_samples: usize, n_outputs: usize) -> Self {
        assert!(n_samples > 0, "n_samples must be positive");
        assert!(n_outputs > 0, "n_outputs must be positive");

        let size = n_samples * n_outputs;
        Self {
            grads: vec![0.0; size],
            hess: vec![0.0; size],
            n_samples,
            n_outputs,
        }
    }

    /// Number of samples in the buffer.
    #[inline]
    pub fn n_samples(&self) -> usize {
        self.n_samples
    }

    /// Number of outputs per sample.
    #[inline]
    pub fn n_outputs(&self) -> usize {
        self.n_outputs
    }

    /// Total number of gradient pairs (n_samples × n_outputs).
    #[inline]
    pub fn len(&self) -> usize {
        self.grads.len()
    }

    /// Whether the buffer is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.grads.is_empty()
    }

    /// Reset all gradients and hessians to zero.
    pub fn reset(&mut self) {
        self.grads.fill(0.0);
        self.hess.fill(0.0);
    }

    /// Get gradient and hessian for a (sample, output) pair.
    #[inline]
    pub fn get(&self, sample: usize, output: usize) -> (f32, f32) {
        let idx = self.index(sample, output);
        (self.grads[idx], self.hess[idx])
    }

    /// Set gradient and hessian for a (sample, output) pair.
    #[inline]
    pub fn set(&mut self, sample: usize, output: usize, grad: f32, hess: f32) {
        let idx = self.index(sample, output);
        self.grads[idx] = grad;
        self.hess[idx] = hess;
    }

    /// Full gradient and hessian arrays, for objectives writing all outputs at once.
    #[inline]
    pub fn as_mut_slices(&mut self) -> (&mut [f32], &mut [f32]) {
        (&mut self.grads, &mut self.hess)
    }

    /// Contiguous gradient slice for one output (all samples).
    #[inline]
    pub fn output_grads(&self, output: usize) -> &[f32] {
        debug_assert!(output < self.n_outputs);
        let start = output * self.n_samples;
        &self.grads[start..start + self.n_samples]
    }

    /// Contiguous hessian slice for one output (all samples).
    #[inline]
    pub fn output_hess(&self, output: usize) -> &[f32] {
        debug_assert!(output < self.n_outputs);
        let start = output * self.n_samples;
        &self.hess[start..start + self.n_samples]
    }

    /// Mutable gradient and hessian slices for one output.
    #[inline]
    pub fn output_grads_hess_mut(&mut self, output: usize) -> (&mut [f32], &mut [f32]) {
        debug_assert!(output < self.n_outputs);
        let start = output * self.n_samples;
        let end = start + self.n_samples;
        (&mut self.grads[start..end], &mut self.hess[start..end])
    }

    /// Sum gradients and hessians of one output into [`GradStats`].
    ///
    /// `rows` selects a subset of samples (a node's partition); `None` sums
    /// all of them. Accumulation happens in `f64`.
    pub fn sum(&self, output: usize, rows: Option<&[u32]>) -> GradStats {
        let grads = self.output_grads(output);
        let hess = self.output_hess(output);

        match rows {
            None => GradStats::from_slices(grads, hess),
            Some(rows) => {
                let mut stats = GradStats::default();
                for &row in rows {
                    let row = row as usize;
                    stats.add_pair(grads[row], hess[row]);
                }
                stats
            }
        }
    }

    /// Convert (sample, output) to linear index (column-major).
    #[inline]
    fn index(&self, sample: usize, output: usize) -> usize {
        debug_assert!(sample < self.n_samples);
        debug_assert!(output < self.n_outputs);
        output * self.n_samples + sample
    }
}

// =============================================================================
// Tests
// =============================================================================
