//! Typed hyperparameter schema and sampled parameter values.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::errors::{TuneError, TuneResult};

/// A concrete parameter value produced by a search strategy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParameterValue {
    Float(f64),
    Int(i64),
    Json(serde_json::Value),
}

impl ParameterValue {
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Float(v) => Some(*v),
            Self::Int(v) => Some(*v as f64),
            Self::Json(v) => v.as_f64(),
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Int(v) => Some(*v),
            Self::Json(v) => v.as_i64(),
            Self::Float(_) => None,
        }
    }

    pub fn as_usize(&self) -> Option<usize> {
        self.as_i64().and_then(|v| usize::try_from(v).ok())
    }
}

impl std::fmt::Display for ParameterValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Float(v) => write!(f, "{v}"),
            Self::Int(v) => write!(f, "{v}"),
            Self::Json(v) => write!(f, "{v}"),
        }
    }
}

impl From<f64> for ParameterValue {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<i64> for ParameterValue {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

/// Sampled configuration for one trial: parameter name to drawn value.
pub type SampledParams = HashMap<String, ParameterValue>;

/// The model hyperparameters eligible for search, as named typed fields.
///
/// Sampled keys are validated against this schema at merge time; there is
/// no dynamic attribute injection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HyperParams {
    /// Learning rate.
    pub lr: f64,
    /// Width of the hidden layers.
    pub hidden_dim: usize,
    /// Number of attention heads.
    pub num_heads: usize,
    /// Dropout probability.
    pub dropout: f64,
    /// Number of message-passing layers.
    pub n_layers: usize,
}

impl Default for HyperParams {
    fn default() -> Self {
        Self {
            lr: 1e-3,
            hidden_dim: 64,
            num_heads: 4,
            dropout: 0.2,
            n_layers: 2,
        }
    }
}

impl HyperParams {
    /// Functionally merge sampled values onto this base, returning a new
    /// `HyperParams`. Unknown keys and ill-typed values fail fast.
    pub fn merged(&self, overlay: &SampledParams) -> TuneResult<Self> {
        let mut out = self.clone();
        for (name, value) in overlay {
            match name.as_str() {
                "lr" => out.lr = Self::expect_f64(name, value)?,
                "hidden_dim" => out.hidden_dim = Self::expect_usize(name, value)?,
                "num_heads" => out.num_heads = Self::expect_usize(name, value)?,
                "dropout" => out.dropout = Self::expect_f64(name, value)?,
                "n_layers" => out.n_layers = Self::expect_usize(name, value)?,
                _ => {
                    return Err(TuneError::UnknownParameter { name: name.clone() });
                }
            }
        }
        Ok(out)
    }

    fn expect_f64(name: &str, value: &ParameterValue) -> TuneResult<f64> {
        value.as_f64().ok_or_else(|| TuneError::ParameterType {
            name: name.to_string(),
            expected: "float",
            got: format!("{value:?}"),
        })
    }

    fn expect_usize(name: &str, value: &ParameterValue) -> TuneResult<usize> {
        value.as_usize().ok_or_else(|| TuneError::ParameterType {
            name: name.to_string(),
            expected: "non-negative integer",
            got: format!("{value:?}"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merged_applies_known_keys() {
        let base = HyperParams::default();
        let mut overlay = SampledParams::new();
        overlay.insert("lr".into(), ParameterValue::Float(5e-3));
        overlay.insert("hidden_dim".into(), ParameterValue::Int(32));
        overlay.insert("n_layers".into(), ParameterValue::Int(3));

        let merged = base.merged(&overlay).unwrap();
        assert_eq!(merged.lr, 5e-3);
        assert_eq!(merged.hidden_dim, 32);
        assert_eq!(merged.n_layers, 3);
        // Untouched fields keep their base values
        assert_eq!(merged.num_heads, base.num_heads);
        assert_eq!(merged.dropout, base.dropout);
        // The base itself is unchanged
        assert_eq!(base.lr, 1e-3);
    }

    #[test]
    fn merged_rejects_unknown_key() {
        let base = HyperParams::default();
        let mut overlay = SampledParams::new();
        overlay.insert("weight_decay".into(), ParameterValue::Float(1e-4));

        match base.merged(&overlay) {
            Err(TuneError::UnknownParameter { name }) => assert_eq!(name, "weight_decay"),
            other => panic!("expected UnknownParameter, got {other:?}"),
        }
    }

    #[test]
    fn merged_rejects_wrong_kind() {
        let base = HyperParams::default();
        let mut overlay = SampledParams::new();
        overlay.insert("hidden_dim".into(), ParameterValue::Float(32.5));

        match base.merged(&overlay) {
            Err(TuneError::ParameterType { name, .. }) => assert_eq!(name, "hidden_dim"),
            other => panic!("expected ParameterType, got {other:?}"),
        }
    }

    #[test]
    fn merged_rejects_negative_integer() {
        let base = HyperParams::default();
        let mut overlay = SampledParams::new();
        overlay.insert("n_layers".into(), ParameterValue::Int(-2));
        assert!(base.merged(&overlay).is_err());
    }

    #[test]
    fn parameter_value_accessors() {
        assert_eq!(ParameterValue::Float(0.5).as_f64(), Some(0.5));
        assert_eq!(ParameterValue::Int(7).as_f64(), Some(7.0));
        assert_eq!(ParameterValue::Int(7).as_usize(), Some(7));
        assert_eq!(ParameterValue::Float(0.5).as_i64(), None);
    }
}
