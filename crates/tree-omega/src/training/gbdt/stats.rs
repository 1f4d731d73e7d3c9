//! Aggregated gradient statistics for a tree node.
//!
//! # Numeric Precision
//!
//! Sums are kept in `f64` even though per-sample gradients are stored as `f32`.
//! Gain computation works on differences of large sums (and the sibling
//! subtraction trick produces them directly), which loses too much precision
//! in `f32`.

use std::iter::Sum;
use std::ops::{Add, AddAssign, Sub, SubAssign};

use approx::{AbsDiffEq, RelativeEq};

/// Sum of gradients and hessians over the samples of a node or split partition.
///
/// Callers must keep `sum_hess >= 0`, which holds for any convex loss. The
/// regularization terms do not check it.
///
/// # Example
///
/// ```
/// use tree_omega::GradStats;
///
/// let mut parent = GradStats::default();
/// parent.add_pair(-1.0, 1.0);
/// parent.add_pair(3.0, 1.0);
///
/// let left = GradStats::new(-1.0, 1.0);
/// let right = parent - left;
/// assert_eq!(right, GradStats::new(3.0, 1.0));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GradStats {
    /// Sum of first-order gradients.
    pub sum_grad: f64,
    /// Sum of second-order gradients (hessians).
    pub sum_hess: f64,
}

impl GradStats {
    /// Create statistics from precomputed sums.
    #[inline]
    pub const fn new(sum_grad: f64, sum_hess: f64) -> Self {
        Self { sum_grad, sum_hess }
    }

    /// Accumulate statistics from parallel gradient and hessian slices.
    ///
    /// # Panics
    ///
    /// Panics if the slices have different lengths.
    pub fn from_slices(grads: &[f32], hess: &[f32]) -> Self {
        assert_eq!(
            grads.len(),
            hess.len(),
            "grads.len() ({}) != hess.len() ({})",
            grads.len(),
            hess.len()
        );
        grads
            .iter()
            .zip(hess)
            .fold(Self::default(), |mut acc, (&g, &h)| {
                acc.add_pair(g, h);
                acc
            })
    }

    /// Add a single gradient pair.
    #[inline]
    pub fn add_pair(&mut self, grad: f32, hess: f32) {
        self.sum_grad += grad as f64;
        self.sum_hess += hess as f64;
    }

    /// True if no hessian mass has been accumulated.
    ///
    /// Terms without an L2 smoothing component produce non-finite values for
    /// such a node.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.sum_hess == 0.0
    }
}

impl Add for GradStats {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.sum_grad + rhs.sum_grad, self.sum_hess + rhs.sum_hess)
    }
}

impl AddAssign for GradStats {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        self.sum_grad += rhs.sum_grad;
        self.sum_hess += rhs.sum_hess;
    }
}

/// Sibling statistics: `parent - child`.
impl Sub for GradStats {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.sum_grad - rhs.sum_grad, self.sum_hess - rhs.sum_hess)
    }
}

impl SubAssign for GradStats {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        self.sum_grad -= rhs.sum_grad;
        self.sum_hess -= rhs.sum_hess;
    }
}

impl Sum for GradStats {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), Add::add)
    }
}

impl AbsDiffEq for GradStats {
    type Epsilon = f64;

    fn default_epsilon() -> Self::Epsilon {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.sum_grad.abs_diff_eq(&other.sum_grad, epsilon)
            && self.sum_hess.abs_diff_eq(&other.sum_hess, epsilon)
    }
}

impl RelativeEq for GradStats {
    fn default_max_relative() -> Self::Epsilon {
        f64::default_max_relative()
    }

    fn relative_eq(
        &self,
        other: &Self,
        epsilon: Self::Epsilon,
        max_relative: Self::Epsilon,
    ) -> bool {
        self.sum_grad.relative_eq(&other.sum_grad, epsilon, max_relative)
            && self.sum_hess.relative_eq(&other.sum_hess, epsilon, max_relative)
    }
}
