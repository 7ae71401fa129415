//! Evaluation metrics and their reduction to a scalar objective.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::errors::{TuneError, TuneResult};

/// An evaluation result for a single split.
///
/// Training flows report either an ordered pair of scores (e.g. ROC-AUC
/// and MRR for link prediction) or a named map of scores (e.g. macro/micro
/// F1 for node classification). The variant is explicit so every shape has
/// a defined reduction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Metric {
    /// Two scores, reduced by their arithmetic mean.
    Pair(f64, f64),
    /// Named scores, reduced by the arithmetic mean of all values.
    Map(BTreeMap<String, f64>),
}

impl Metric {
    /// Collapse the metric into one comparable scalar.
    pub fn reduce(&self) -> TuneResult<f64> {
        match self {
            Self::Pair(a, b) => Ok((a + b) / 2.0),
            Self::Map(values) => {
                if values.is_empty() {
                    return Err(TuneError::EmptyMetric);
                }
                let sum: f64 = values.values().sum();
                Ok(sum / values.len() as f64)
            }
        }
    }
}

impl From<(f64, f64)> for Metric {
    fn from(pair: (f64, f64)) -> Self {
        Self::Pair(pair.0, pair.1)
    }
}
