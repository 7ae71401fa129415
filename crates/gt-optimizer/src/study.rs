//! The study: a sequential search loop with an explore/exploit sampler.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use uuid::Uuid;

use gt_types::{SampledParams, TuneError, TuneResult};

use crate::space::TrialHandle;
use crate::trial::TrialRecord;

/// Whether the objective is maximized or minimized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Maximize,
    Minimize,
}

impl Default for Direction {
    fn default() -> Self {
        Self::Maximize
    }
}

/// Drives an objective function for a fixed trial budget.
///
/// Completed trials feed their objective value back into the sampler: the
/// best trial's parameters bias future draws toward promising regions.
/// Trials always run one at a time; there is no internal parallelism.
pub struct Study {
    id: Uuid,
    direction: Direction,
    exploration_weight: f64,
    rng: ChaCha8Rng,
    records: Vec<TrialRecord>,
    best_index: Option<usize>,
}

impl Study {
    pub fn new(direction: Direction) -> Self {
        Self {
            id: Uuid::new_v4(),
            direction,
            exploration_weight: 0.3,
            rng: ChaCha8Rng::from_entropy(),
            records: Vec::new(),
            best_index: None,
        }
    }

    /// Seed the study's master RNG for a reproducible trial sequence.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = ChaCha8Rng::seed_from_u64(seed);
        self
    }

    /// Fraction of draws sampled uniformly instead of near the best trial.
    pub fn with_exploration(mut self, weight: f64) -> Self {
        self.exploration_weight = weight.clamp(0.0, 1.0);
        self
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn records(&self) -> &[TrialRecord] {
        &self.records
    }

    /// The completed trial with the best objective value, if any.
    pub fn best_record(&self) -> Option<&TrialRecord> {
        self.best_index.map(|i| &self.records[i])
    }

    /// Run `objective` for `n_trials` trials, strictly sequentially.
    ///
    /// `n_jobs` is part of the backend interface; only sequential execution
    /// is implemented, so 1 is the only meaningful value. An objective
    /// error marks the current trial failed and aborts the whole search.
    pub fn optimize<F>(&mut self, mut objective: F, n_trials: usize, n_jobs: usize) -> TuneResult<()>
    where
        F: FnMut(&mut TrialHandle) -> TuneResult<f64>,
    {
        if n_jobs == 0 {
            return Err(TuneError::Config("n_jobs must be at least 1".to_string()));
        }
        if n_jobs > 1 {
            warn!(n_jobs, "parallel trial execution is not supported, running sequentially");
        }

        for _ in 0..n_trials {
            let number = self.records.len();
            let trial_rng = ChaCha8Rng::seed_from_u64(self.rng.gen());
            let best = self
                .best_record()
                .map(|r| r.params.clone())
                .unwrap_or_else(SampledParams::new);
            let mut handle = TrialHandle::new(trial_rng, self.exploration_weight, best);

            let mut record = TrialRecord::new(self.id, number);
            record.mark_running();

            match objective(&mut handle) {
                Ok(value) => {
                    record.params = handle.into_params();
                    record.mark_completed(value);
                    debug!(trial = number, value, "trial completed");
                    self.push_completed(record, value);
                }
                Err(err) => {
                    record.params = handle.into_params();
                    record.mark_failed(err.to_string());
                    self.records.push(record);
                    return Err(err);
                }
            }
        }
        Ok(())
    }

    fn push_completed(&mut self, record: TrialRecord, value: f64) {
        let improves = match self.best_record().and_then(|r| r.value) {
            None => true,
            Some(best) => match self.direction {
                Direction::Maximize => value > best,
                Direction::Minimize => value < best,
            },
        };
        self.records.push(record);
        if improves {
            self.best_index = Some(self.records.len() - 1);
        }
    }
}
