use super::report::{Combination, CombinationSummary, ExperimentReport, TrialResult};
use crate::config::{ConfigSection, EvolutionConfig, ExperimentConfig};
use crate::data::Problem;
use crate::engines::generation::{EvolutionEngine, NoopProgressCallback};
use crate::error::Result;
use crate::types::Weight;
use chrono::Utc;
use log::{debug, info};
use rayon::prelude::*;

/// Sweeps the experiment grid, one independent engine per trial.
///
/// Trials share nothing but the read-only problem, so they run on the rayon pool when
/// `parallel` is set. Results are reported in grid order either way.
pub struct ExperimentRunner<W> {
    problem: Problem<W>,
    base: EvolutionConfig,
    experiment: ExperimentConfig,
}

impl<W: Weight> ExperimentRunner<W> {
    pub fn new(problem: Problem<W>, base: EvolutionConfig, experiment: ExperimentConfig) -> Result<Self> {
        base.validate()?;
        experiment.validate()?;
        Ok(Self {
            problem,
            base,
            experiment,
        })
    }

    /// Grid points in mutation rate, population size, crossover mode order.
    pub fn combinations(&self) -> Vec<Combination> {
        let mut combinations = Vec::with_capacity(self.experiment.combination_count());
        for &mutation_rate in &self.experiment.mutation_rates {
            for &population_size in &self.experiment.population_sizes {
                for &use_crossover in &self.experiment.crossover_modes {
                    combinations.push(Combination {
                        mutation_rate,
                        population_size,
                        use_crossover,
                    });
                }
            }
        }
        combinations
    }

    pub fn run(&self) -> Result<ExperimentReport> {
        let combinations = self.combinations();
        let jobs: Vec<(usize, Combination, usize)> = combinations
            .iter()
            .enumerate()
            .flat_map(|(idx, &combination)| {
                (0..self.experiment.trials).map(move |trial| (idx, combination, trial))
            })
            .collect();

        info!(
            "Running {} trials over {} combinations ({})",
            jobs.len(),
            combinations.len(),
            if self.experiment.parallel { "parallel" } else { "sequential" }
        );

        let trials: Vec<TrialResult> = if self.experiment.parallel {
            jobs.par_iter()
                .map(|&(idx, combination, trial)| self.run_trial(idx, combination, trial))
                .collect::<Result<_>>()?
        } else {
            jobs.iter()
                .map(|&(idx, combination, trial)| self.run_trial(idx, combination, trial))
                .collect::<Result<_>>()?
        };

        let summaries = combinations
            .iter()
            .filter_map(|&combination| {
                let runs: Vec<&TrialResult> = trials
                    .iter()
                    .filter(|t| t.combination == combination)
                    .collect();
                CombinationSummary::from_trials(combination, &runs)
            })
            .collect();

        Ok(ExperimentReport {
            generated_at: Utc::now(),
            bin_count: self.problem.bin_count(),
            item_count: self.problem.item_count(),
            evaluation_budget: self.experiment.budget_or(self.base.evaluation_budget),
            trials,
            summaries,
        })
    }

    fn run_trial(&self, combination_idx: usize, combination: Combination, trial: usize) -> Result<TrialResult> {
        let seed = self
            .experiment
            .base_seed
            .map(|base| trial_seed(base, combination_idx, trial));

        let config = EvolutionConfig {
            population_size: combination.population_size,
            mutation_rate: combination.mutation_rate,
            use_crossover: combination.use_crossover,
            evaluation_budget: self.experiment.budget_or(self.base.evaluation_budget),
            seed,
            ..self.base.clone()
        };

        let mut engine = EvolutionEngine::new(config, self.problem.clone())?;
        let outcome = engine.run(&mut NoopProgressCallback)?;

        debug!(
            "Trial {} of {:?} finished with best fitness {:?}",
            trial, combination, outcome.best.fitness
        );

        Ok(TrialResult {
            combination,
            trial,
            seed,
            best_fitness: outcome.best.fitness.to_f64(),
            starting_average: outcome.starting_average,
            final_average: outcome.final_average,
            evaluations: outcome.evaluations,
            steps: outcome.steps,
        })
    }
}

/// Distinct, reproducible seed per grid point and trial.
pub fn trial_seed(base: u64, combination_idx: usize, trial: usize) -> u64 {
    let mut z = base
        ^ (combination_idx as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15)
        ^ (trial as u64).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    // splitmix64 finaliser
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}
