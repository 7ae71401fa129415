//! Trial record tracking.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use gt_types::SampledParams;

/// Lifecycle state of a single trial.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrialStatus {
    Pending,
    Running,
    Completed,
    Failed,
}

/// Bookkeeping record for one trial: the sampled parameters, the objective
/// value, and lifecycle timestamps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrialRecord {
    pub id: Uuid,
    pub study_id: Uuid,
    pub number: usize,
    pub params: SampledParams,
    pub status: TrialStatus,
    pub value: Option<f64>,
    pub created_at: DateTime<Utc>,
    pub started_at: Option<DateTime<Utc>>,
    pub finished_at: Option<DateTime<Utc>>,
    pub error: Option<String>,
}

impl TrialRecord {
    pub fn new(study_id: Uuid, number: usize) -> Self {
        Self {
            id: Uuid::new_v4(),
            study_id,
            number,
            params: SampledParams::new(),
            status: TrialStatus::Pending,
            value: None,
            created_at: Utc::now(),
            started_at: None,
            finished_at: None,
            error: None,
        }
    }

    pub fn mark_running(&mut self) {
        self.status = TrialStatus::Running;
        self.started_at = Some(Utc::now());
    }

    pub fn mark_completed(&mut self, value: f64) {
        self.status = TrialStatus::Completed;
        self.finished_at = Some(Utc::now());
        self.value = Some(value);
    }

    pub fn mark_failed(&mut self, error: String) {
        self.status = TrialStatus::Failed;
        self.finished_at = Some(Utc::now());
        self.error = Some(error);
    }
}
