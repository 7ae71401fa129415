//! Training-flow interface: the seam between the tuner and the pipeline
//! that actually trains and evaluates a model.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::config::ExperimentConfig;
use crate::errors::{FlowError, TuneError, TuneResult};
use crate::metric::Metric;

/// Per-split evaluation results keyed by split name ("train", "valid",
/// "test").
pub type SplitScores = BTreeMap<String, Metric>;

/// Result of one full training/evaluation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainOutput {
    /// Evaluation metric per split.
    pub metric: SplitScores,
    /// Epochs actually run (early stopping may cut training short).
    pub epochs_run: usize,
}

impl TrainOutput {
    pub fn new(metric: SplitScores, epochs_run: usize) -> Self {
        Self { metric, epochs_run }
    }

    /// Look up the metric for a named split.
    pub fn split(&self, name: &str) -> TuneResult<&Metric> {
        self.metric.get(name).ok_or_else(|| TuneError::MissingSplit {
            split: name.to_string(),
        })
    }
}

/// A training pipeline: one blocking `train` call per trial.
pub trait TrainerFlow {
    fn train(&mut self) -> Result<TrainOutput, FlowError>;
}

/// Constructs a [`TrainerFlow`] for a given trial configuration.
///
/// The tuner holds a builder rather than a flow so every trial gets a
/// fresh pipeline built from that trial's merged configuration.
pub trait FlowBuilder {
    fn build(&self, cfg: &ExperimentConfig) -> Result<Box<dyn TrainerFlow>, FlowError>;
}
