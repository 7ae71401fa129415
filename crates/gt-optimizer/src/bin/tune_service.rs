use tracing_subscriber::EnvFilter;

use gt_flow::{FlowKind, KindBuilder};
use gt_optimizer::{default_search_space, AutoTuner, DEFAULT_EXPERIMENT_TRIALS};
use gt_types::ExperimentConfig;

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let dataset = env_or("GRAPHTUNE_DATASET", "acm");
    let model = env_or("GRAPHTUNE_MODEL", "han");
    let kind: FlowKind = env_or("GRAPHTUNE_FLOW", "node_classification").parse()?;
    let trials: usize = env_or("GRAPHTUNE_TRIALS", "")
        .parse()
        .unwrap_or(DEFAULT_EXPERIMENT_TRIALS);
    let seed: u64 = env_or("GRAPHTUNE_SEED", "0").parse()?;

    let cfg = ExperimentConfig::new(dataset, model).with_seed(seed);
    let mut tuner = AutoTuner::new(cfg, Box::new(KindBuilder::new(kind)), default_search_space)
        .with_trials(trials);
    let best = tuner.run()?;

    let report = serde_json::json!({
        "flow": kind.to_string(),
        "trials": trials,
        "best_score": best,
        "best_params": tuner.best_params(),
    });
    println!("{report}");

    Ok(())
}
