//! Experiment configuration: an immutable base plus per-trial copies.

use serde::{Deserialize, Serialize};

use crate::hyper::HyperParams;

/// Full configuration for one training run.
///
/// The base configuration owned by the tuner is never mutated; each trial
/// gets its own copy via [`ExperimentConfig::for_trial`], so sampled values
/// can never leak between trials.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperimentConfig {
    /// Dataset identifier (e.g. "acm", "imdb").
    pub dataset: String,
    /// Model identifier (e.g. "han", "rgcn").
    pub model: String,
    /// Random seed. Weight initialization is derived from this, so every
    /// trial re-seeds from the same value.
    pub seed: u64,
    /// Upper bound on training epochs.
    pub max_epochs: usize,
    /// Early-stopping patience in epochs.
    pub patience: usize,
    /// Model hyperparameters (the searchable part of the config).
    pub hyper: HyperParams,
}

impl ExperimentConfig {
    pub fn new(dataset: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            dataset: dataset.into(),
            model: model.into(),
            seed: 0,
            max_epochs: 200,
            patience: 30,
            hyper: HyperParams::default(),
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_max_epochs(mut self, n: usize) -> Self {
        self.max_epochs = n;
        self
    }

    pub fn with_patience(mut self, n: usize) -> Self {
        self.patience = n;
        self
    }

    pub fn with_hyper(mut self, hyper: HyperParams) -> Self {
        self.hyper = hyper;
        self
    }

    /// Produce the configuration for a single trial: the base with the
    /// merged hyperparameters swapped in. The seed is carried over, so
    /// weight initialization resets identically on every trial.
    pub fn for_trial(&self, hyper: HyperParams) -> Self {
        Self {
            hyper,
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_chain() {
        let cfg = ExperimentConfig::new("acm", "han")
            .with_seed(42)
            .with_max_epochs(50)
            .with_patience(10);
        assert_eq!(cfg.dataset, "acm");
        assert_eq!(cfg.model, "han");
        assert_eq!(cfg.seed, 42);
        assert_eq!(cfg.max_epochs, 50);
        assert_eq!(cfg.patience, 10);
    }

    #[test]
    fn for_trial_keeps_base_untouched() {
        let base = ExperimentConfig::new("acm", "han").with_seed(7);
        let mut hyper = base.hyper.clone();
        hyper.lr = 1e-2;

        let trial_cfg = base.for_trial(hyper);
        assert_eq!(trial_cfg.hyper.lr, 1e-2);
        assert_eq!(trial_cfg.seed, 7);
        assert_eq!(base.hyper.lr, HyperParams::default().lr);
    }
}
