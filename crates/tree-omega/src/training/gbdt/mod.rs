//! Gradient boosted tree training primitives.
//!
//! The tree grower itself lives outside this crate. What it needs from here:
//!
//! - [`GradStats`]: Sums of gradients and hessians for a node or split partition
//! - [`RegularizationTerm`]: Split gain, leaf weight and leaf gain for those sums
//! - [`OmegaRegistry`]: Resolves a configured term name to a fresh instance
//! - [`TreeOmegaConfig`]: Validated configuration for the above

mod config;
pub mod omega;
mod stats;

pub use config::TreeOmegaConfig;
pub use omega::{
    NoRegularization, OmegaError, OmegaRegistry, ParamError, ParamList, RegularizationTerm,
    WeightDecay, WeightDecayParams,
};
pub use stats::GradStats;
