pub mod candidate;
pub mod evolution_engine;
pub mod genome;
pub mod operators;
pub mod population;
pub mod progress;

pub use candidate::Candidate;
pub use evolution_engine::{
    BestSolution, EvolutionEngine, EvolutionOutcome, ProgressCallback, RunState,
};
pub use genome::Genome;
pub use operators::{
    binary_tournament, crossover_at, crossover_points, select_parents, single_point_crossover,
    weakest_replacement, Replacement,
};
pub use population::{History, Population};
pub use progress::{ConsoleProgressCallback, NoopProgressCallback};
