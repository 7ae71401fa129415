//! The tuner driver: wires sampled hyperparameters into training runs and
//! tracks the best configuration found.

use tracing::info;

use gt_types::{ExperimentConfig, FlowBuilder, SampledParams, TuneError, TuneResult};

use crate::space::{SpaceFn, TrialHandle};
use crate::study::{Direction, Study};

/// Trial budget used when none is configured.
pub const DEFAULT_TRIALS: usize = 3;

/// Hyperparameter optimization driver.
///
/// Holds the immutable base configuration, a flow builder, and a
/// search-space function; each trial samples a configuration, trains one
/// model with it, reduces the chosen split's metric to a scalar, and keeps
/// the best score and parameters seen so far.
pub struct AutoTuner {
    cfg: ExperimentConfig,
    flow_builder: Box<dyn FlowBuilder>,
    space: SpaceFn,
    split: Option<String>,
    n_trials: usize,
    exploration_weight: f64,
    study_seed: Option<u64>,
    best_score: Option<f64>,
    best_params: Option<SampledParams>,
}

impl AutoTuner {
    pub fn new(cfg: ExperimentConfig, flow_builder: Box<dyn FlowBuilder>, space: SpaceFn) -> Self {
        Self {
            cfg,
            flow_builder,
            space,
            split: None,
            n_trials: DEFAULT_TRIALS,
            exploration_weight: 0.3,
            study_seed: None,
            best_score: None,
            best_params: None,
        }
    }

    pub fn with_trials(mut self, n: usize) -> Self {
        self.n_trials = n;
        self
    }

    /// Which split's metric to optimize. Defaults to "test".
    pub fn with_split(mut self, split: impl Into<String>) -> Self {
        self.split = Some(split.into());
        self
    }

    pub fn with_exploration(mut self, weight: f64) -> Self {
        self.exploration_weight = weight;
        self
    }

    /// Seed the underlying study for a reproducible search.
    pub fn with_study_seed(mut self, seed: u64) -> Self {
        self.study_seed = Some(seed);
        self
    }

    pub fn best_score(&self) -> Option<f64> {
        self.best_score
    }

    pub fn best_params(&self) -> Option<&SampledParams> {
        self.best_params.as_ref()
    }

    /// Evaluate one trial: sample, merge, train, reduce, update best.
    fn objective(&mut self, trial: &mut TrialHandle) -> TuneResult<f64> {
        let sampled = (self.space)(trial);
        let hyper = self.cfg.hyper.merged(&sampled)?;
        // Fresh copy per trial; the base seed rides along so weight
        // initialization resets identically every time.
        let trial_cfg = self.cfg.for_trial(hyper);

        let mut flow = self.flow_builder.build(&trial_cfg)?;
        let output = flow.train()?;

        let split = self.split.as_deref().unwrap_or("test");
        let score = output.split(split)?.reduce()?;

        if self.best_score.map_or(true, |best| score > best) {
            self.best_score = Some(score);
            self.best_params = Some(sampled);
        }
        Ok(score)
    }

    /// Run the full search and return the best score found.
    pub fn run(&mut self) -> TuneResult<f64> {
        let mut study =
            Study::new(Direction::Maximize).with_exploration(self.exploration_weight);
        if let Some(seed) = self.study_seed {
            study = study.with_seed(seed);
        }

        let n_trials = self.n_trials;
        study.optimize(|trial| self.objective(trial), n_trials, 1)?;

        info!(
            best_params = %serde_json::to_string(&self.best_params).unwrap_or_default(),
            "best parameters found"
        );
        self.best_score
            .ok_or_else(|| TuneError::Config("no trial completed".to_string()))
    }
}
