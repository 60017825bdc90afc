pub mod traits;
pub mod evolution;
pub mod problem;
pub mod experiment;
pub mod manager;

pub use manager::{ConfigManager, AppConfig};
pub use evolution::EvolutionConfig;
pub use problem::ProblemConfig;
pub use experiment::ExperimentConfig;
pub use traits::ConfigSection;
