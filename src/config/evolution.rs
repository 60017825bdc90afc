use super::traits::ConfigSection;
use crate::error::BinBalanceError;
use crate::types::{MutationGate, ReplacementPolicy};
use log::warn;
use serde::{Deserialize, Serialize};

pub const DEFAULT_EVALUATION_BUDGET: usize = 10_000;

/// Parameters of a single steady-state run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvolutionConfig {
    pub population_size: usize,
    /// Gene rewrites per mutation; `0` disables mutation under the default gate.
    pub mutation_rate: usize,
    pub use_crossover: bool,
    /// Total fitness evaluations allowed across every candidate ever created.
    pub evaluation_budget: usize,
    pub replacement: ReplacementPolicy,
    pub mutation_gate: MutationGate,
    pub seed: Option<u64>,
}

impl Default for EvolutionConfig {
    fn default() -> Self {
        Self {
            population_size: 100,
            mutation_rate: 1,
            use_crossover: true,
            evaluation_budget: DEFAULT_EVALUATION_BUDGET,
            replacement: ReplacementPolicy::AcceptOnTie,
            mutation_gate: MutationGate::WhenPositive,
            seed: None,
        }
    }
}

impl ConfigSection for EvolutionConfig {
    fn section_name() -> &'static str {
        "evolution"
    }

    fn validate(&self) -> Result<(), BinBalanceError> {
        if self.population_size < 1 {
            return Err(BinBalanceError::Configuration(
                "Population size must be at least 1".to_string()
            ));
        }
        if self.evaluation_budget < 1 {
            return Err(BinBalanceError::Configuration(
                "Evaluation budget must be at least 1".to_string()
            ));
        }
        if self.population_size < 2 {
            warn!("Population size {} leaves tournaments nothing to compare", self.population_size);
        }
        Ok(())
    }
}
