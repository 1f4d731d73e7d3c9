//! Regularization ("omega") terms for tree construction.
//!
//! Training a tree minimizes a second-order Taylor expansion of the loss plus
//! a regularization term `Ω(tree)`. For a leaf with gradient sum `G` and
//! hessian sum `H` the expansion has a closed-form optimum, so a term only has
//! to say how it bends that optimum:
//!
//! ```text
//! weight = -G / (H + λ)
//! gain   = G² / (H + λ) - γ
//! ```
//!
//! # Available Terms
//!
//! | Name                | Type                 | Parameters                         |
//! |---------------------|----------------------|------------------------------------|
//! | `no_regularization` | [`NoRegularization`] | none                               |
//! | `weight_decay`      | [`WeightDecay`]      | `reg_lambda`/`lambda`, `reg_gamma`/`gamma` |
//!
//! Terms are resolved by name through an [`OmegaRegistry`], configured once
//! from a [`ParamList`], and are read-only afterwards.
//!
//! # Split Gain
//!
//! Both built-in terms compute `calc_split_gain(l, r) = calc_gain(l) + calc_gain(r)`.
//! Nothing about the parent node enters the split gain; whether a split is
//! worth taking is decided by the caller.

mod no_omega;
mod params;
mod registry;
mod weight_decay;

use std::fmt::Debug;

pub use no_omega::NoRegularization;
pub use params::{ParamError, ParamList};
pub use registry::{OmegaEntry, OmegaFactory, OmegaRegistry};
pub use weight_decay::{WeightDecay, WeightDecayParams};

use super::GradStats;

// =============================================================================
// Errors
// =============================================================================

/// Errors raised while selecting or configuring a regularization term.
///
/// All of them are configuration errors: training cannot start and retrying
/// with the same input fails the same way.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum OmegaError {
    /// No term is registered under this name.
    #[error("unknown regularization term `{name}` (known: {known})")]
    UnknownTerm { name: String, known: String },

    /// A term or alias with this name already exists.
    #[error("regularization term `{0}` is already registered")]
    DuplicateTerm(String),

    /// An alias was registered for a name that does not exist.
    #[error("cannot alias `{alias}` to unknown regularization term `{target}`")]
    UnknownAliasTarget { alias: String, target: String },

    /// A parameter value was rejected.
    #[error(transparent)]
    Param(#[from] ParamError),
}

// =============================================================================
// RegularizationTerm Trait
// =============================================================================

/// A regularization term used to score splits and leaves.
///
/// Implementations are pure functions of their arguments and of the
/// configuration applied by [`configure`](Self::configure). Since they are
/// `Send + Sync`, one configured instance can be shared across the threads
/// evaluating candidate splits.
///
/// Degenerate input (zero hessian sum with no smoothing) is not checked and
/// yields non-finite results.
pub trait RegularizationTerm: Debug + Send + Sync {
    /// Registry name of the term.
    fn name(&self) -> &'static str;

    /// Apply parameters from a shared parameter list.
    ///
    /// Keys the term does not know are ignored. On error the previous
    /// configuration is left untouched. Calling it again starts from the
    /// current configuration: parameters absent from `params` keep their
    /// values instead of reverting to defaults.
    fn configure(&mut self, _params: &ParamList) -> Result<(), OmegaError> {
        Ok(())
    }

    /// Gain obtained by splitting a node into `left` and `right`.
    ///
    /// Additive over the children unless an implementation documents otherwise.
    #[inline]
    fn calc_split_gain(&self, left: GradStats, right: GradStats) -> f64 {
        self.calc_gain(left) + self.calc_gain(right)
    }

    /// Optimal leaf value for a node with these statistics.
    fn calc_weight(&self, stats: GradStats) -> f64;

    /// Gain contributed by a node if it is kept as a leaf.
    fn calc_gain(&self, stats: GradStats) -> f64;
}

#[inline]
fn sqr(x: f64) -> f64 {
    x * x
}
