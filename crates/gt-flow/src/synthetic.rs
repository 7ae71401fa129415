//! Deterministic synthetic training flows.
//!
//! These simulate a GNN training run with a smooth, unimodal response to
//! the hyperparameters plus a small seed-derived perturbation. Everything
//! is a pure function of the trial configuration, so a fixed config always
//! trains to the same score regardless of what ran before it.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::collections::BTreeMap;
use tracing::debug;

use gt_types::{ExperimentConfig, FlowError, Metric, SplitScores, TrainOutput, TrainerFlow};

use crate::kind::FlowKind;

/// Learning rate at which the simulated model trains best.
const SWEET_SPOT_LR: f64 = 5e-3;

/// A synthetic training pipeline.
pub struct SyntheticFlow {
    cfg: ExperimentConfig,
    kind: FlowKind,
}

impl SyntheticFlow {
    pub fn new(cfg: ExperimentConfig, kind: FlowKind) -> Self {
        Self { cfg, kind }
    }

    /// Simulated model quality in [0, 1] for the configured hyperparameters.
    fn quality(&self, rng: &mut ChaCha8Rng) -> f64 {
        let h = &self.cfg.hyper;

        // Log-quadratic falloff around the sweet-spot learning rate.
        let lr_fit = (-(h.lr.ln() - SWEET_SPOT_LR.ln()).powi(2) / 2.0).exp();
        // Diminishing returns on capacity.
        let capacity = ((h.hidden_dim * h.num_heads.max(1)) as f64).ln() / 8.0;
        // Moderate dropout helps, heavy dropout hurts.
        let regularization = 1.0 - (h.dropout - 0.25).abs();
        // Each extra layer past two costs a little.
        let depth_penalty = 0.04 * h.n_layers.saturating_sub(2) as f64;

        let base = 0.45 * lr_fit + 0.25 * capacity.min(1.0) + 0.3 * regularization
            - depth_penalty;
        let noise = rng.gen_range(-0.01..0.01);
        (base + noise).clamp(0.0, 1.0)
    }

    /// Epochs until simulated convergence, bounded by `max_epochs`.
    fn epochs_to_converge(&self) -> usize {
        let speedup = (self.cfg.hyper.lr / 1e-3).max(1.0);
        let epochs = (120.0 / speedup) as usize + self.cfg.patience;
        epochs.min(self.cfg.max_epochs)
    }
}

impl TrainerFlow for SyntheticFlow {
    fn train(&mut self) -> Result<TrainOutput, FlowError> {
        if self.cfg.dataset.is_empty() {
            return Err(FlowError::Data {
                message: "no dataset configured".to_string(),
            });
        }

        // Weight initialization is derived from the config seed, so the
        // whole run is reproducible per trial.
        let mut rng = ChaCha8Rng::seed_from_u64(self.cfg.seed);
        let q = self.quality(&mut rng);
        let epochs_run = self.epochs_to_converge();

        debug!(
            kind = %self.kind,
            dataset = %self.cfg.dataset,
            quality = q,
            epochs_run,
            "synthetic training run complete"
        );

        let mut metric = SplitScores::new();
        match self.kind {
            FlowKind::NodeClassification => {
                for (split, handicap) in [("train", 0.0), ("valid", 0.04), ("test", 0.05)] {
                    let mut scores = BTreeMap::new();
                    scores.insert("macro_f1".to_string(), (q - handicap - 0.02).clamp(0.0, 1.0));
                    scores.insert("micro_f1".to_string(), (q - handicap + 0.02).clamp(0.0, 1.0));
                    metric.insert(split.to_string(), Metric::Map(scores));
                }
            }
            FlowKind::LinkPrediction => {
                for (split, handicap) in [("train", 0.0), ("valid", 0.03), ("test", 0.04)] {
                    let auc = (q - handicap + 0.05).clamp(0.0, 1.0);
                    let mrr = (q - handicap - 0.05).clamp(0.0, 1.0);
                    metric.insert(split.to_string(), Metric::Pair(auc, mrr));
                }
            }
        }

        Ok(TrainOutput::new(metric, epochs_run))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_cfg() -> ExperimentConfig {
        ExperimentConfig::new("acm", "han").with_seed(42)
    }

    #[test]
    fn training_is_deterministic_for_fixed_config() {
        let mut first = SyntheticFlow::new(sample_cfg(), FlowKind::NodeClassification);
        let mut second = SyntheticFlow::new(sample_cfg(), FlowKind::NodeClassification);
        assert_eq!(first.train().unwrap(), second.train().unwrap());
    }

    #[test]
    fn reports_all_three_splits() {
        let mut flow = SyntheticFlow::new(sample_cfg(), FlowKind::LinkPrediction);
        let output = flow.train().unwrap();
        for split in ["train", "valid", "test"] {
            assert!(output.split(split).is_ok(), "missing split {split}");
        }
    }

    #[test]
    fn link_prediction_reports_pair_metrics() {
        let mut flow = SyntheticFlow::new(sample_cfg(), FlowKind::LinkPrediction);
        let output = flow.train().unwrap();
        match output.split("test").unwrap() {
            Metric::Pair(auc, mrr) => {
                assert!((0.0..=1.0).contains(auc));
                assert!((0.0..=1.0).contains(mrr));
            }
            other => panic!("expected pair metric, got {other:?}"),
        }
    }

    #[test]
    fn node_classification_reports_f1_map() {
        let mut flow = SyntheticFlow::new(sample_cfg(), FlowKind::NodeClassification);
        let output = flow.train().unwrap();
        match output.split("test").unwrap() {
            Metric::Map(scores) => {
                assert!(scores.contains_key("macro_f1"));
                assert!(scores.contains_key("micro_f1"));
            }
            other => panic!("expected map metric, got {other:?}"),
        }
    }

    #[test]
    fn early_stopping_respects_epoch_budget() {
        let cfg = sample_cfg().with_max_epochs(20);
        let mut flow = SyntheticFlow::new(cfg, FlowKind::NodeClassification);
        let output = flow.train().unwrap();
        assert!(output.epochs_run <= 20);
    }

    #[test]
    fn empty_dataset_fails() {
        let cfg = ExperimentConfig::new("", "han");
        let mut flow = SyntheticFlow::new(cfg, FlowKind::NodeClassification);
        match flow.train() {
            Err(FlowError::Data { .. }) => (),
            other => panic!("expected Data error, got {other:?}"),
        }
    }
}
