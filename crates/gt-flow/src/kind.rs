//! Flow-kind identifiers for the built-in training pipelines.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use gt_types::FlowError;

/// Which built-in training pipeline to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlowKind {
    /// Semi-supervised node classification; reports macro/micro F1.
    NodeClassification,
    /// Link prediction; reports an (ROC-AUC, MRR) pair.
    LinkPrediction,
}

impl std::fmt::Display for FlowKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::NodeClassification => "node_classification",
            Self::LinkPrediction => "link_prediction",
        };
        write!(f, "{name}")
    }
}

impl FromStr for FlowKind {
    type Err = FlowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "node_classification" => Ok(Self::NodeClassification),
            "link_prediction" => Ok(Self::LinkPrediction),
            other => Err(FlowError::UnknownKind {
                kind: other.to_string(),
            }),
        }
    }
}
