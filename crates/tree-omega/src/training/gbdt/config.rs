//! Regularization term configuration with builder pattern.
//!
//! [`TreeOmegaConfig`] names the term to use for a training run and carries
//! the shared parameter list it is configured from. It uses the `bon` crate
//! for builder generation, with validation at build time.
//!
//! # Example
//!
//! ```
//! use tree_omega::TreeOmegaConfig;
//!
//! // Default: weight decay with reg_lambda = 1, reg_gamma = 0
//! let config = TreeOmegaConfig::builder().build().unwrap();
//! assert_eq!(config.name, "weight_decay");
//!
//! // Unknown term names fail at build time
//! assert!(TreeOmegaConfig::builder().name("l3").build().is_err());
//! ```

use std::sync::Arc;

use bon::Builder;

use super::omega::{OmegaError, OmegaRegistry, ParamList, RegularizationTerm, WeightDecay};

/// Configuration of the regularization term for a training run.
///
/// The term is resolved through [`OmegaRegistry::global`]. Terms registered in
/// a caller-owned registry are created with
/// [`OmegaRegistry::create_configured`] directly.
#[derive(Debug, Clone, Builder)]
#[builder(
    derive(Clone, Debug),
    finish_fn(vis = "", name = __build_internal)
)]
pub struct TreeOmegaConfig {
    /// Registry name of the term. Default: `"weight_decay"`.
    #[builder(default = WeightDecay::NAME.to_string(), into)]
    pub name: String,

    /// Parameters passed to the term. Keys it does not know are ignored,
    /// so the full training parameter list can be passed as is.
    #[builder(default, into)]
    pub params: ParamList,
}

/// Custom finishing function that validates the config.
impl<S: tree_omega_config_builder::IsComplete> TreeOmegaConfigBuilder<S> {
    /// Build and validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`OmegaError`] if:
    /// - `name` is not a registered term
    /// - the term rejects one of `params`
    pub fn build(self) -> Result<TreeOmegaConfig, OmegaError> {
        let config = self.__build_internal();
        config.validate()?;
        Ok(config)
    }
}

impl Default for TreeOmegaConfig {
    fn default() -> Self {
        Self {
            name: WeightDecay::NAME.to_string(),
            params: ParamList::new(),
        }
    }
}

impl TreeOmegaConfig {
    /// Validate by resolving and configuring the term once.
    fn validate(&self) -> Result<(), OmegaError> {
        self.build_term().map(|_| ())
    }

    /// Create the configured term, ready to share across split-evaluation threads.
    ///
    /// # Errors
    ///
    /// Same conditions as [`TreeOmegaConfigBuilder::build`].
    pub fn build_term(&self) -> Result<Arc<dyn RegularizationTerm>, OmegaError> {
        let term = OmegaRegistry::global().create_configured(&self.name, &self.params)?;
        Ok(Arc::from(term))
    }
}
