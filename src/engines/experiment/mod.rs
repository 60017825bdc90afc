pub mod report;
pub mod runner;

pub use report::{Combination, CombinationSummary, ExperimentReport, TrialResult};
pub use runner::ExperimentRunner;
