//! tree-omega: pluggable regularization terms for gradient boosted trees.
//!
//! Tree growing needs three numbers from the regularization ("omega") term of
//! the objective: the gain of a candidate split, the optimal weight of a leaf,
//! and the gain contribution of a single leaf. This crate defines that contract
//! and lets callers pick the term by name at runtime.
//!
//! # Key Types
//!
//! - [`GradStats`] - Aggregated gradient/hessian sums for a node
//! - [`RegularizationTerm`] - Trait implemented by every omega term
//! - [`OmegaRegistry`] - Name-based lookup of term factories
//! - [`TreeOmegaConfig`] - Builder-style configuration resolved through the registry
//!
//! # Example
//!
//! ```
//! use tree_omega::{GradStats, RegularizationTerm, TreeOmegaConfig};
//!
//! let config = TreeOmegaConfig::builder()
//!     .name("weight_decay")
//!     .params([("lambda", "1.0"), ("gamma", "0.5")])
//!     .build()
//!     .unwrap();
//! let term = config.build_term().unwrap();
//!
//! let stats = GradStats::new(-4.0, 2.0);
//! assert!((term.calc_weight(stats) - 4.0 / 3.0).abs() < 1e-12);
//! ```

// Re-export approx traits for users who want to compare statistics
pub use approx;

pub mod testing;
pub mod training;

// =============================================================================
// Convenience Re-exports
// =============================================================================

pub use training::gbdt::{
    GradStats, NoRegularization, OmegaError, OmegaRegistry, ParamError, ParamList,
    RegularizationTerm, TreeOmegaConfig, WeightDecay, WeightDecayParams,
};
pub use training::{Gradients, HingeLoss, ObjectiveFn};
