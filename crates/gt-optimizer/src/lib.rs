//! # gt-optimizer
//!
//! Hyperparameter search orchestration for GraphTune.
//!
//! Provides define-by-run trial handles and search-space functions, a
//! sequential maximization study with an explore/exploit sampler, trial
//! record tracking, and the `AutoTuner` driver that wires sampled
//! hyperparameters into training runs.

mod experiment;
mod space;
mod study;
mod trial;
mod tuner;

pub use experiment::{hpo_experiment, DEFAULT_EXPERIMENT_TRIALS};
pub use space::{default_search_space, SpaceFn, TrialHandle};
pub use study::{Direction, Study};
pub use trial::{TrialRecord, TrialStatus};
pub use tuner::{AutoTuner, DEFAULT_TRIALS};
