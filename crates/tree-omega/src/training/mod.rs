//! Training-side building blocks.
//!
//! ## Shared Infrastructure
//!
//! - [`Gradients`]: Column-major gradient/hessian storage
//! - [`ObjectiveFn`]: Trait for objectives that produce gradient pairs
//!
//! ## Tree Training
//!
//! - [`gbdt`]: Node statistics and the pluggable omega (regularization) terms
//!
//! ## Objectives
//!
//! - [`HingeLoss`]: SVM-style binary classification

pub mod gbdt;
mod gradients;
mod objectives;

pub use gradients::Gradients;
pub use objectives::{HingeLoss, ObjectiveFn};
