//! String-keyed parameter lists shared by all regularization terms.
//!
//! Training configuration arrives as an ordered list of `(key, value)` string
//! pairs that is shared by several components. Each term picks out the keys it
//! understands and parses them into its own typed parameter struct.

use std::fmt;

/// Ordered list of `(key, value)` parameter pairs.
///
/// When a key (or one of its aliases) appears more than once, the later entry
/// wins.
///
/// # Example
///
/// ```
/// use tree_omega::ParamList;
///
/// let params: ParamList = [("lambda", "2.0"), ("max_depth", "6")].into_iter().collect();
/// assert_eq!(params.len(), 2);
/// assert_eq!(params.get("lambda"), Some("2.0"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParamList(Vec<(String, String)>);

impl ParamList {
    /// Create an empty parameter list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a parameter.
    pub fn push(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.push((key.into(), value.into()));
    }

    /// Builder-style [`push`](Self::push).
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.push(key, value);
        self
    }

    /// Last value set for `key`, if any.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .rev()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Iterate over `(key, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of pairs.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the list is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ParamList {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

impl From<Vec<(String, String)>> for ParamList {
    fn from(pairs: Vec<(String, String)>) -> Self {
        Self(pairs)
    }
}

impl<K: Into<String>, V: Into<String>, const N: usize> From<[(K, V); N]> for ParamList {
    fn from(pairs: [(K, V); N]) -> Self {
        pairs.into_iter().collect()
    }
}

impl fmt::Display for ParamList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (k, v)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{k}={v}")?;
        }
        Ok(())
    }
}

// =============================================================================
// Validation Errors
// =============================================================================

/// Parameter parsing or validation error.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParamError {
    /// The value is not a number.
    #[error("invalid value `{value}` for parameter `{key}`")]
    InvalidValue { key: String, value: String },

    /// The value is below the parameter's lower bound (or NaN).
    #[error("{param} must be >= {lower_bound}, got {value}")]
    BelowLowerBound {
        param: &'static str,
        value: f64,
        lower_bound: f64,
    },
}

/// Parse a floating point parameter value.
pub(super) fn parse_f64(key: &str, value: &str) -> Result<f64, ParamError> {
    value
        .trim()
        .parse::<f64>()
        .map_err(|_| ParamError::InvalidValue {
            key: key.to_string(),
            value: value.to_string(),
        })
}

/// Reject values below `lower_bound`. NaN never satisfies the bound.
pub(super) fn check_lower_bound(
    param: &'static str,
    value: f64,
    lower_bound: f64,
) -> Result<(), ParamError> {
    if value >= lower_bound {
        Ok(())
    } else {
        Err(ParamError::BelowLowerBound {
            param,
            value,
            lower_bound,
        })
    }
}
