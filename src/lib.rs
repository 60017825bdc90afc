//! Steady-state genetic search for balancing weighted items across a fixed number of bins.
//!
//! A candidate assigns every item to a bin; its fitness is the heaviest bin's load minus
//! the lightest occupied bin's load, lower being better. [`EvolutionEngine`] breeds
//! candidates with binary tournaments, single-point crossover and random gene rewrites,
//! keeps the population fixed through weakest replacement, and stops once the fitness
//! evaluations of every candidate it ever created reach the budget.
//!
//! ```no_run
//! use binbalance::{EvolutionConfig, EvolutionEngine, NoopProgressCallback, Problem};
//!
//! let weights: Vec<u64> = (1..=500).map(|k| 2 * k).collect();
//! let problem = Problem::new(10, weights)?;
//! let config = EvolutionConfig { seed: Some(7), ..EvolutionConfig::default() };
//!
//! let outcome = EvolutionEngine::new(config, problem)?.run(&mut NoopProgressCallback)?;
//! println!("best imbalance {} (started at {:.1})", outcome.best.fitness, outcome.starting_average);
//! # Ok::<(), binbalance::BinBalanceError>(())
//! ```

pub mod config;
pub mod data;
pub mod engines;
pub mod error;
pub mod types;

pub use config::{AppConfig, ConfigManager, EvolutionConfig, ExperimentConfig, ProblemConfig};
pub use data::{ItemSet, Problem};
pub use engines::experiment::{ExperimentReport, ExperimentRunner};
pub use engines::generation::{
    Candidate, ConsoleProgressCallback, EvolutionEngine, EvolutionOutcome, NoopProgressCallback,
    ProgressCallback,
};
pub use error::{BinBalanceError, Result};
pub use types::{BinId, MutationGate, ReplacementPolicy, Weight};
