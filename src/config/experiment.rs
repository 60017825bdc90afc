use super::traits::ConfigSection;
use crate::error::BinBalanceError;
use serde::{Deserialize, Serialize};

/// Parameter grid swept by the experiment runner.
///
/// Every combination of `mutation_rates`, `population_sizes` and `crossover_modes`
/// is run `trials` times. `evaluation_budget`, when set, overrides the evolution
/// section's budget for every trial. Other settings come from the evolution section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExperimentConfig {
    pub mutation_rates: Vec<usize>,
    pub population_sizes: Vec<usize>,
    pub crossover_modes: Vec<bool>,
    pub trials: usize,
    pub evaluation_budget: Option<usize>,
    pub base_seed: Option<u64>,
    pub parallel: bool,
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        Self {
            mutation_rates: vec![0, 1, 2, 5],
            population_sizes: vec![10, 50, 100],
            crossover_modes: vec![true, false],
            trials: 5,
            evaluation_budget: None,
            base_seed: None,
            parallel: true,
        }
    }
}

impl ExperimentConfig {
    pub fn combination_count(&self) -> usize {
        self.mutation_rates.len() * self.population_sizes.len() * self.crossover_modes.len()
    }

    /// Budget each trial runs with, given the evolution section's default.
    pub fn budget_or(&self, fallback: usize) -> usize {
        self.evaluation_budget.unwrap_or(fallback)
    }
}

impl ConfigSection for ExperimentConfig {
    fn section_name() -> &'static str {
        "experiment"
    }

    fn validate(&self) -> Result<(), BinBalanceError> {
        if self.mutation_rates.is_empty()
            || self.population_sizes.is_empty()
            || self.crossover_modes.is_empty()
        {
            return Err(BinBalanceError::Configuration(
                "Experiment axes must each list at least one value".to_string()
            ));
        }
        if self.population_sizes.contains(&0) {
            return Err(BinBalanceError::Configuration(
                "Experiment population sizes must be at least 1".to_string()
            ));
        }
        if self.evaluation_budget == Some(0) {
            return Err(BinBalanceError::Configuration(
                "Experiment evaluation budget must be at least 1".to_string()
            ));
        }
        if self.trials < 1 {
            return Err(BinBalanceError::Configuration(
                "Experiment needs at least one trial".to_string()
            ));
        }
        Ok(())
    }
}
