//! Caller-facing entry point for a full hyperparameter search.

use tracing::info;

use gt_flow::{FlowKind, KindBuilder};
use gt_types::{ExperimentConfig, TuneResult};

use crate::space::default_search_space;
use crate::tuner::AutoTuner;

/// Trial budget for a full experiment run.
pub const DEFAULT_EXPERIMENT_TRIALS: usize = 100;

/// Run a full hyperparameter search for `kind` against the built-in flows
/// and return the best score found.
pub fn hpo_experiment(cfg: &ExperimentConfig, kind: FlowKind) -> TuneResult<f64> {
    let mut tuner = AutoTuner::new(
        cfg.clone(),
        Box::new(KindBuilder::new(kind)),
        default_search_space,
    )
    .with_trials(DEFAULT_EXPERIMENT_TRIALS);

    let best = tuner.run()?;
    info!(best_score = best, %kind, "hyperparameter optimization finished");
    Ok(best)
}
