//! L2 weight decay with a per-leaf cost.

use log::{debug, trace};

use super::params::{check_lower_bound, parse_f64};
use super::{sqr, OmegaError, ParamError, ParamList, RegularizationTerm};
use crate::training::gbdt::GradStats;

// =============================================================================
// WeightDecayParams
// =============================================================================

/// Parameters of the [`WeightDecay`] term.
///
/// # Example
///
/// ```
/// use tree_omega::{ParamList, WeightDecayParams};
///
/// let params = ParamList::from([("lambda", "2.0"), ("max_depth", "6")]);
/// let parsed = WeightDecayParams::from_params(&params).unwrap();
/// assert_eq!(parsed.reg_lambda, 2.0);
/// assert_eq!(parsed.reg_gamma, 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeightDecayParams {
    /// L2 regularization on leaf weights. Default: 1.0. Alias: `lambda`.
    ///
    /// Shrinks leaf weights towards zero, most strongly for nodes with a small
    /// hessian sum.
    pub reg_lambda: f64,

    /// Cost of adding a leaf to the tree. Default: 0.0. Alias: `gamma`.
    pub reg_gamma: f64,
}

impl Default for WeightDecayParams {
    fn default() -> Self {
        Self {
            reg_lambda: 1.0,
            reg_gamma: 0.0,
        }
    }
}

impl WeightDecayParams {
    /// Parse from defaults, overridden by any matching keys in `params`.
    ///
    /// # Errors
    ///
    /// Returns [`ParamError`] if a value does not parse or is negative.
    pub fn from_params(params: &ParamList) -> Result<Self, ParamError> {
        Self::default().updated(params)
    }

    /// Copy of `self` with matching keys from `params` applied.
    fn updated(mut self, params: &ParamList) -> Result<Self, ParamError> {
        for (key, value) in params.iter() {
            match key {
                "reg_lambda" | "lambda" => self.reg_lambda = parse_f64(key, value)?,
                "reg_gamma" | "gamma" => self.reg_gamma = parse_f64(key, value)?,
                _ => trace!("weight_decay: ignoring parameter `{key}`"),
            }
        }
        self.validate()?;
        Ok(self)
    }

    /// Validate parameters.
    ///
    /// # Errors
    ///
    /// Returns error if any parameter is below its lower bound.
    pub fn validate(&self) -> Result<(), ParamError> {
        check_lower_bound("reg_lambda", self.reg_lambda, 0.0)?;
        check_lower_bound("reg_gamma", self.reg_gamma, 0.0)?;
        Ok(())
    }
}

// =============================================================================
// WeightDecay
// =============================================================================

/// L2 penalty on leaf weights plus a fixed cost per leaf.
///
/// - Weight: `-G / (H + λ)`
/// - Gain: `G² / (H + λ) - γ`
///
/// Split gain is the sum of both children's gains, so a split pays `γ` once
/// per new leaf. Comparing it against the unsplit parent's gain (which pays
/// `γ` once) is up to the caller.
#[derive(Debug, Clone, Default)]
pub struct WeightDecay {
    params: WeightDecayParams,
}

impl WeightDecay {
    /// Registry name.
    pub const NAME: &'static str = "weight_decay";

    /// Create a term from already validated parameters.
    ///
    /// # Errors
    ///
    /// Returns [`ParamError`] if `params` fails validation.
    pub fn new(params: WeightDecayParams) -> Result<Self, ParamError> {
        params.validate()?;
        Ok(Self { params })
    }

    /// Current parameters.
    pub fn params(&self) -> &WeightDecayParams {
        &self.params
    }
}

impl RegularizationTerm for WeightDecay {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn configure(&mut self, params: &ParamList) -> Result<(), OmegaError> {
        self.params = self.params.updated(params)?;
        debug!(
            "weight_decay configured: reg_lambda={}, reg_gamma={}",
            self.params.reg_lambda, self.params.reg_gamma
        );
        Ok(())
    }

    #[inline]
    fn calc_weight(&self, stats: GradStats) -> f64 {
        -stats.sum_grad / (stats.sum_hess + self.params.reg_lambda)
    }

    #[inline]
    fn calc_gain(&self, stats: GradStats) -> f64 {
        sqr(stats.sum_grad) / (stats.sum_hess + self.params.reg_lambda) - self.params.reg_gamma
    }
}
