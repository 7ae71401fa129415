//! Flow construction keyed by flow kind.

use gt_types::{ExperimentConfig, FlowBuilder, FlowError, TrainerFlow};

use crate::kind::FlowKind;
use crate::synthetic::SyntheticFlow;

/// Build the training flow for `kind` from a trial configuration.
pub fn build_flow(
    cfg: &ExperimentConfig,
    kind: FlowKind,
) -> Result<Box<dyn TrainerFlow>, FlowError> {
    Ok(Box::new(SyntheticFlow::new(cfg.clone(), kind)))
}

/// [`FlowBuilder`] that always constructs the flow for one fixed kind.
#[derive(Debug, Clone, Copy)]
pub struct KindBuilder {
    kind: FlowKind,
}

impl KindBuilder {
    pub fn new(kind: FlowKind) -> Self {
        Self { kind }
    }
}

impl FlowBuilder for KindBuilder {
    fn build(&self, cfg: &ExperimentConfig) -> Result<Box<dyn TrainerFlow>, FlowError> {
        build_flow(cfg, self.kind)
    }
}
