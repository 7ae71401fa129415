//! Trial handles and search-space functions.

use rand::Rng;
use rand_chacha::ChaCha8Rng;

use gt_types::{ParameterValue, SampledParams};

/// A search-space function: maps a trial handle to a concrete sampled
/// configuration. Must be pure given the handle's sampling state.
pub type SpaceFn = fn(&mut TrialHandle) -> SampledParams;

/// Sampling handle for one trial.
///
/// Each `suggest_*` call draws a value and records it under the parameter
/// name; suggesting the same name again returns the first draw. Sampling
/// follows an explore/exploit heuristic: with probability
/// `exploration_weight` (or always, while no best trial exists) a value is
/// drawn uniformly, otherwise the best-known value for that parameter is
/// reused or locally perturbed.
pub struct TrialHandle {
    rng: ChaCha8Rng,
    exploration_weight: f64,
    best: SampledParams,
    params: SampledParams,
}

impl TrialHandle {
    pub(crate) fn new(rng: ChaCha8Rng, exploration_weight: f64, best: SampledParams) -> Self {
        Self {
            rng,
            exploration_weight,
            best,
            params: SampledParams::new(),
        }
    }

    fn should_exploit(&mut self) -> bool {
        !self.best.is_empty() && self.rng.gen::<f64>() >= self.exploration_weight
    }

    /// Draw one of the given choices.
    pub fn suggest_categorical(&mut self, name: &str, choices: &[ParameterValue]) -> ParameterValue {
        if let Some(value) = self.params.get(name) {
            return value.clone();
        }
        let exploit = self.should_exploit();
        let value = match self.best.get(name) {
            Some(best) if exploit && choices.contains(best) => best.clone(),
            _ => choices[self.rng.gen_range(0..choices.len())].clone(),
        };
        self.params.insert(name.to_string(), value.clone());
        value
    }

    /// Draw a float uniformly from `[low, high]`.
    pub fn suggest_uniform(&mut self, name: &str, low: f64, high: f64) -> f64 {
        if let Some(value) = self.params.get(name) {
            if let Some(v) = value.as_f64() {
                return v;
            }
        }
        let exploit = self.should_exploit();
        let value = match self.best.get(name).and_then(ParameterValue::as_f64) {
            Some(best) if exploit => {
                let noise = self.rng.gen_range(-0.1..0.1) * (high - low);
                (best + noise).clamp(low, high)
            }
            _ => self.rng.gen_range(low..=high),
        };
        self.params
            .insert(name.to_string(), ParameterValue::Float(value));
        value
    }

    /// Draw an integer uniformly from `[low, high]` inclusive.
    pub fn suggest_int(&mut self, name: &str, low: i64, high: i64) -> i64 {
        if let Some(value) = self.params.get(name) {
            if let Some(v) = value.as_i64() {
                return v;
            }
        }
        let exploit = self.should_exploit();
        let value = match self.best.get(name).and_then(ParameterValue::as_i64) {
            Some(best) if exploit => {
                let delta: i64 = self.rng.gen_range(-1..=1);
                (best + delta).clamp(low, high)
            }
            _ => self.rng.gen_range(low..=high),
        };
        self.params
            .insert(name.to_string(), ParameterValue::Int(value));
        value
    }

    /// All values drawn so far.
    pub fn params(&self) -> &SampledParams {
        &self.params
    }

    pub(crate) fn into_params(self) -> SampledParams {
        self.params
    }
}

/// The default search space for GNN training runs.
pub fn default_search_space(trial: &mut TrialHandle) -> SampledParams {
    let mut params = SampledParams::new();
    params.insert(
        "lr".to_string(),
        trial.suggest_categorical(
            "lr",
            &[
                ParameterValue::Float(1e-3),
                ParameterValue::Float(5e-3),
                ParameterValue::Float(1e-2),
            ],
        ),
    );
    params.insert(
        "hidden_dim".to_string(),
        trial.suggest_categorical(
            "hidden_dim",
            &[ParameterValue::Int(32), ParameterValue::Int(64)],
        ),
    );
    params.insert(
        "num_heads".to_string(),
        trial.suggest_categorical(
            "num_heads",
            &[
                ParameterValue::Int(1),
                ParameterValue::Int(2),
                ParameterValue::Int(4),
            ],
        ),
    );
    params.insert(
        "dropout".to_string(),
        ParameterValue::Float(trial.suggest_uniform("dropout", 0.0, 0.5)),
    );
    params.insert(
        "n_layers".to_string(),
        ParameterValue::Int(trial.suggest_int("n_layers", 2, 3)),
    );
    params
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn handle_with_seed(seed: u64) -> TrialHandle {
        TrialHandle::new(ChaCha8Rng::seed_from_u64(seed), 0.3, SampledParams::new())
    }

    #[test]
    fn default_space_stays_in_bounds() {
        for seed in 0..200 {
            let mut trial = handle_with_seed(seed);
            let params = default_search_space(&mut trial);

            let lr = params["lr"].as_f64().unwrap();
            assert!([1e-3, 5e-3, 1e-2].contains(&lr), "lr out of set: {lr}");

            let hidden_dim = params["hidden_dim"].as_i64().unwrap();
            assert!([32, 64].contains(&hidden_dim));

            let num_heads = params["num_heads"].as_i64().unwrap();
            assert!([1, 2, 4].contains(&num_heads));

            let dropout = params["dropout"].as_f64().unwrap();
            assert!((0.0..=0.5).contains(&dropout), "dropout out of bounds: {dropout}");

            let n_layers = params["n_layers"].as_i64().unwrap();
            assert!(n_layers == 2 || n_layers == 3);
        }
    }

    #[test]
    fn repeated_suggestion_returns_first_draw() {
        let mut trial = handle_with_seed(5);
        let first = trial.suggest_uniform("dropout", 0.0, 0.5);
        let second = trial.suggest_uniform("dropout", 0.0, 0.5);
        assert_eq!(first, second);

        let a = trial.suggest_int("n_layers", 2, 3);
        let b = trial.suggest_int("n_layers", 2, 3);
        assert_eq!(a, b);
    }

    #[test]
    fn same_rng_state_samples_same_configuration() {
        let mut first = handle_with_seed(11);
        let mut second = handle_with_seed(11);
        assert_eq!(
            default_search_space(&mut first),
            default_search_space(&mut second)
        );
    }

    #[test]
    fn exploitation_respects_bounds() {
        let mut best = SampledParams::new();
        best.insert("dropout".to_string(), ParameterValue::Float(0.49));
        best.insert("n_layers".to_string(), ParameterValue::Int(3));

        // exploration_weight 0 forces exploitation on every draw
        for seed in 0..100 {
            let mut trial = TrialHandle::new(ChaCha8Rng::seed_from_u64(seed), 0.0, best.clone());
            let dropout = trial.suggest_uniform("dropout", 0.0, 0.5);
            assert!((0.0..=0.5).contains(&dropout));
            let n_layers = trial.suggest_int("n_layers", 2, 3);
            assert!(n_layers == 2 || n_layers == 3);
        }
    }

    #[test]
    fn exploitation_reuses_best_categorical() {
        let mut best = SampledParams::new();
        best.insert("lr".to_string(), ParameterValue::Float(5e-3));

        let mut trial = TrialHandle::new(ChaCha8Rng::seed_from_u64(1), 0.0, best);
        let lr = trial.suggest_categorical(
            "lr",
            &[
                ParameterValue::Float(1e-3),
                ParameterValue::Float(5e-3),
                ParameterValue::Float(1e-2),
            ],
        );
        assert_eq!(lr, ParameterValue::Float(5e-3));
    }
}
