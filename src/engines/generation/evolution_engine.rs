use crate::config::{ConfigSection, EvolutionConfig};
use crate::data::Problem;
use crate::engines::evaluation::BinLoads;
use crate::engines::generation::{
    candidate::Candidate,
    genome::Genome,
    operators::{
        binary_tournament, select_parents, single_point_crossover, weakest_replacement,
        MIN_CROSSOVER_LENGTH,
    },
    population::{average_fitness, fittest, History, Population},
};
use crate::error::{BinBalanceError, Result};
use crate::types::Weight;
use log::{debug, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::rc::Rc;

/// Receives run progress from [`EvolutionEngine::run`].
pub trait ProgressCallback: Send {
    fn on_run_start(&mut self, population_size: usize, starting_average: f64);
    fn on_step_complete(&mut self, step: usize, evaluations: usize, best_fitness: f64);
    fn on_run_complete(&mut self, steps: usize, evaluations: usize, best_fitness: f64);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Running,
    Terminated,
}

/// The fittest allocation left in the population when the run ends.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BestSolution<W> {
    pub genes: Genome,
    pub fitness: W,
    pub bin_loads: BinLoads<W>,
}

impl<W: Weight> BestSolution<W> {
    fn from_candidate(candidate: &Candidate<W>) -> Self {
        Self {
            genes: candidate.genes().to_vec(),
            fitness: candidate.fitness(),
            bin_loads: candidate.bin_loads(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvolutionOutcome<W> {
    pub best: BestSolution<W>,
    pub starting_average: f64,
    pub final_average: f64,
    /// Evaluations consumed by the whole history, which may overshoot the budget by one step.
    pub evaluations: usize,
    pub steps: usize,
    pub accepted_offspring: usize,
}

/// Steady-state evolution driver.
///
/// Each step breeds one or two offspring and offers them to the population through
/// weakest replacement. The run stops once the evaluations performed by every candidate
/// ever created reach the configured budget.
pub struct EvolutionEngine<W, R = StdRng> {
    config: EvolutionConfig,
    problem: Problem<W>,
    rng: R,
}

impl<W: Weight> EvolutionEngine<W, StdRng> {
    /// Build an engine seeded from `config.seed`, or from entropy when unset.
    pub fn new(config: EvolutionConfig, problem: Problem<W>) -> Result<Self> {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::with_rng(config, problem, rng)
    }
}

impl<W: Weight, R: Rng> EvolutionEngine<W, R> {
    pub fn with_rng(config: EvolutionConfig, problem: Problem<W>, rng: R) -> Result<Self> {
        config.validate()?;

        if config.use_crossover && problem.item_count() < MIN_CROSSOVER_LENGTH {
            return Err(BinBalanceError::Configuration(format!(
                "Crossover needs at least {} items, problem has {}",
                MIN_CROSSOVER_LENGTH,
                problem.item_count()
            )));
        }

        Ok(Self {
            config,
            problem,
            rng,
        })
    }

    pub fn config(&self) -> &EvolutionConfig {
        &self.config
    }

    pub fn problem(&self) -> &Problem<W> {
        &self.problem
    }

    /// Run the evolution process until the evaluation budget is spent
    pub fn run<C: ProgressCallback>(&mut self, callback: &mut C) -> Result<EvolutionOutcome<W>> {
        info!(
            "Starting run: {} items into {} bins, population {}, m = {}, crossover = {}, budget = {}",
            self.problem.item_count(),
            self.problem.bin_count(),
            self.config.population_size,
            self.config.mutation_rate,
            self.config.use_crossover,
            self.config.evaluation_budget
        );

        let mut population = self.initialize_population();
        let starting_average = average_fitness(&population);
        let mut history = History::from_population(&population);
        callback.on_run_start(population.len(), starting_average);

        let mut steps = 0;
        let mut accepted_offspring = 0;

        while self.state(&history) == RunState::Running {
            accepted_offspring += if self.config.use_crossover {
                self.crossover_step(&mut population, &mut history)?
            } else {
                self.mutation_step(&mut population, &mut history)?
            };
            steps += 1;

            let best_fitness = fittest(&population)
                .map(|c| c.fitness().to_f64())
                .unwrap_or_default();
            callback.on_step_complete(steps, history.total_evaluations(), best_fitness);
        }

        let best = fittest(&population).ok_or(BinBalanceError::EmptyPopulation)?;
        let outcome = EvolutionOutcome {
            best: BestSolution::from_candidate(best),
            starting_average,
            final_average: average_fitness(&population),
            evaluations: history.total_evaluations(),
            steps,
            accepted_offspring,
        };

        callback.on_run_complete(steps, outcome.evaluations, outcome.best.fitness.to_f64());
        Ok(outcome)
    }

    /// `Terminated` once the history's summed evaluations reach the budget.
    pub fn state(&self, history: &History<W>) -> RunState {
        if history.total_evaluations() >= self.config.evaluation_budget {
            RunState::Terminated
        } else {
            RunState::Running
        }
    }

    fn initialize_population(&mut self) -> Population<W> {
        (0..self.config.population_size)
            .map(|_| Rc::new(Candidate::random(&self.problem, &mut self.rng)))
            .collect()
    }

    /// Crossover two tournament winners, mutate both children, offer each in turn.
    fn crossover_step(
        &mut self,
        population: &mut Population<W>,
        history: &mut History<W>,
    ) -> Result<usize> {
        let (mut child1, mut child2) = {
            let (parent1, parent2) = select_parents(population, &mut self.rng)?;
            single_point_crossover(parent1, parent2, &mut self.rng)?
        };

        if self.config.mutation_gate.should_mutate(self.config.mutation_rate) {
            child1.mutate(self.config.mutation_rate, &mut self.rng);
            child2.mutate(self.config.mutation_rate, &mut self.rng);
        }

        let child1 = Rc::new(child1);
        let child2 = Rc::new(child2);
        history.record(Rc::clone(&child1));
        history.record(Rc::clone(&child2));

        let mut accepted = 0;
        for child in [child1, child2] {
            let fitness = child.fitness();
            if weakest_replacement(population, child, self.config.replacement)?.is_replaced() {
                debug!("Offspring with fitness {:?} joined the population", fitness);
                accepted += 1;
            }
        }
        Ok(accepted)
    }

    /// Mutate a fresh copy of one tournament winner and offer it.
    fn mutation_step(
        &mut self,
        population: &mut Population<W>,
        history: &mut History<W>,
    ) -> Result<usize> {
        let mut child = {
            let parent = binary_tournament(population, &mut self.rng)?;
            parent.offspring(parent.genes().to_vec())?
        };

        if self.config.mutation_gate.should_mutate(self.config.mutation_rate) {
            child.mutate(self.config.mutation_rate, &mut self.rng);
        }

        let child = Rc::new(child);
        history.record(Rc::clone(&child));

        let fitness = child.fitness();
        if weakest_replacement(population, child, self.config.replacement)?.is_replaced() {
            debug!("Offspring with fitness {:?} joined the population", fitness);
            Ok(1)
        } else {
            Ok(0)
        }
    }
}
