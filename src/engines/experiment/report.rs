use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One point of the parameter grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Combination {
    pub mutation_rate: usize,
    pub population_size: usize,
    pub use_crossover: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrialResult {
    pub combination: Combination,
    pub trial: usize,
    pub seed: Option<u64>,
    pub best_fitness: f64,
    pub starting_average: f64,
    pub final_average: f64,
    pub evaluations: usize,
    pub steps: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CombinationSummary {
    pub combination: Combination,
    pub trials: usize,
    pub mean_best_fitness: f64,
    pub min_best_fitness: f64,
    pub max_best_fitness: f64,
    pub mean_starting_average: f64,
}

impl CombinationSummary {
    /// Summarise the trials of one combination. Returns `None` for an empty slice.
    pub fn from_trials(combination: Combination, trials: &[&TrialResult]) -> Option<Self> {
        if trials.is_empty() {
            return None;
        }
        let n = trials.len() as f64;
        let best = trials.iter().map(|t| t.best_fitness);

        Some(Self {
            combination,
            trials: trials.len(),
            mean_best_fitness: best.clone().sum::<f64>() / n,
            min_best_fitness: best.clone().fold(f64::INFINITY, f64::min),
            max_best_fitness: best.fold(f64::NEG_INFINITY, f64::max),
            mean_starting_average: trials.iter().map(|t| t.starting_average).sum::<f64>() / n,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperimentReport {
    pub generated_at: DateTime<Utc>,
    pub bin_count: u32,
    pub item_count: usize,
    pub evaluation_budget: usize,
    pub trials: Vec<TrialResult>,
    pub summaries: Vec<CombinationSummary>,
}

impl ExperimentReport {
    /// Combination with the lowest mean best fitness; earlier grid points win ties.
    pub fn best_combination(&self) -> Option<&CombinationSummary> {
        self.summaries.iter().reduce(|best, s| {
            if s.mean_best_fitness < best.mean_best_fitness {
                s
            } else {
                best
            }
        })
    }
}
