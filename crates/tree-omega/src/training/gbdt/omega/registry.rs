//! Name-based registry of regularization term factories.
//!
//! The registry is an explicit map populated by [`OmegaRegistry::with_builtins`].
//! Nothing registers itself behind the caller's back: a custom term is added by
//! calling [`OmegaRegistry::register`] on a registry the caller owns. The
//! process-wide instance returned by [`OmegaRegistry::global`] holds only the
//! built-in terms and is read-only once created.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::OnceLock;

use log::debug;

use super::{NoRegularization, OmegaError, ParamList, RegularizationTerm, WeightDecay};

/// Zero-argument constructor for a fresh, unconfigured term.
pub type OmegaFactory = Box<dyn Fn() -> Box<dyn RegularizationTerm> + Send + Sync>;

/// A registered term: its factory and a human-readable description.
pub struct OmegaEntry {
    description: &'static str,
    factory: OmegaFactory,
}

impl OmegaEntry {
    /// Description shown in documentation and error messages.
    pub fn description(&self) -> &'static str {
        self.description
    }

    /// Construct a new instance.
    pub fn create(&self) -> Box<dyn RegularizationTerm> {
        (self.factory)()
    }
}

impl fmt::Debug for OmegaEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OmegaEntry")
            .field("description", &self.description)
            .finish_non_exhaustive()
    }
}

/// Registry mapping term names to factories.
///
/// Lookup is exact and case-sensitive. Every [`create`](Self::create) call
/// returns an independent instance.
///
/// # Example
///
/// ```
/// use tree_omega::{GradStats, OmegaRegistry, ParamList, RegularizationTerm};
///
/// let registry = OmegaRegistry::global();
/// let term = registry
///     .create_configured("weight_decay", &ParamList::from([("lambda", "0")]))
///     .unwrap();
/// assert_eq!(term.calc_weight(GradStats::new(-3.0, 1.5)), 2.0);
///
/// assert!(registry.create("does_not_exist").is_err());
/// ```
#[derive(Debug, Default)]
pub struct OmegaRegistry {
    entries: BTreeMap<String, OmegaEntry>,
    aliases: BTreeMap<String, String>,
}

impl OmegaRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry holding the built-in terms.
    ///
    /// | Name                | Term                 |
    /// |---------------------|----------------------|
    /// | `no_regularization` | [`NoRegularization`] |
    /// | `no_omega`          | alias of `no_regularization` |
    /// | `weight_decay`      | [`WeightDecay`]      |
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.insert(
            NoRegularization::NAME,
            "No regularization; leaf weights are plain Newton steps",
            Box::new(|| -> Box<dyn RegularizationTerm> { Box::new(NoRegularization) }),
        );
        registry.insert(
            WeightDecay::NAME,
            "L2 penalty on leaf weights and a fixed cost per leaf",
            Box::new(|| -> Box<dyn RegularizationTerm> { Box::new(WeightDecay::default()) }),
        );
        registry
            .aliases
            .insert("no_omega".to_string(), NoRegularization::NAME.to_string());
        registry
    }

    /// Process-wide registry with the built-in terms.
    pub fn global() -> &'static OmegaRegistry {
        static GLOBAL: OnceLock<OmegaRegistry> = OnceLock::new();
        GLOBAL.get_or_init(Self::with_builtins)
    }

    /// Register a term under a unique name.
    ///
    /// # Errors
    ///
    /// Returns [`OmegaError::DuplicateTerm`] if the name is taken by a term or alias.
    pub fn register<F>(
        &mut self,
        name: impl Into<String>,
        description: &'static str,
        factory: F,
    ) -> Result<&mut Self, OmegaError>
    where
        F: Fn() -> Box<dyn RegularizationTerm> + Send + Sync + 'static,
    {
        let name = name.into();
        if self.contains(&name) {
            return Err(OmegaError::DuplicateTerm(name));
        }
        self.insert(name, description, Box::new(factory));
        Ok(self)
    }

    fn insert(&mut self, name: impl Into<String>, description: &'static str, factory: OmegaFactory) {
        self.entries
            .insert(name.into(), OmegaEntry { description, factory });
    }

    /// Make `alias` resolve to the registered term `target`.
    ///
    /// # Errors
    ///
    /// Fails if `alias` is taken or `target` is not a registered term name.
    pub fn register_alias(
        &mut self,
        alias: impl Into<String>,
        target: &str,
    ) -> Result<&mut Self, OmegaError> {
        let alias = alias.into();
        if self.contains(&alias) {
            return Err(OmegaError::DuplicateTerm(alias));
        }
        if !self.entries.contains_key(target) {
            return Err(OmegaError::UnknownAliasTarget {
                alias,
                target: target.to_string(),
            });
        }
        self.aliases.insert(alias, target.to_string());
        Ok(self)
    }

    /// Whether `name` resolves to a term.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name) || self.aliases.contains_key(name)
    }

    /// Look up an entry by name or alias.
    pub fn get(&self, name: &str) -> Option<&OmegaEntry> {
        let name = self.aliases.get(name).map_or(name, String::as_str);
        self.entries.get(name)
    }

    /// Description of a term, if registered.
    pub fn describe(&self, name: &str) -> Option<&'static str> {
        self.get(name).map(OmegaEntry::description)
    }

    /// Registered term names (aliases excluded), sorted.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Create a fresh, unconfigured term.
    ///
    /// # Errors
    ///
    /// Returns [`OmegaError::UnknownTerm`] if `name` is not registered.
    pub fn create(&self, name: &str) -> Result<Box<dyn RegularizationTerm>, OmegaError> {
        let entry = self.get(name).ok_or_else(|| OmegaError::UnknownTerm {
            name: name.to_string(),
            known: self.names().collect::<Vec<_>>().join(", "),
        })?;
        debug!("creating regularization term `{name}`");
        Ok(entry.create())
    }

    /// Create a term and configure it from `params`.
    ///
    /// # Errors
    ///
    /// Fails if the name is unknown or the term rejects a parameter.
    pub fn create_configured(
        &self,
        name: &str,
        params: &ParamList,
    ) -> Result<Box<dyn RegularizationTerm>, OmegaError> {
        let mut term = self.create(name)?;
        term.configure(params)?;
        Ok(term)
    }
}
