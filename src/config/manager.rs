use super::{
    evolution::EvolutionConfig,
    experiment::ExperimentConfig,
    problem::ProblemConfig,
    traits::ConfigSection,
};
use crate::error::BinBalanceError;
use config::{Config, Environment, File, FileFormat};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Prefix for environment overrides, e.g. `BINBALANCE__EVOLUTION__POPULATION_SIZE=50`.
pub const ENV_PREFIX: &str = "BINBALANCE";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub problem: ProblemConfig,
    pub evolution: EvolutionConfig,
    pub experiment: ExperimentConfig,
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), BinBalanceError> {
        self.problem.validate()?;
        self.evolution.validate()?;
        self.experiment.validate()?;

        let wants_crossover =
            self.evolution.use_crossover || self.experiment.crossover_modes.contains(&true);
        if wants_crossover && !self.problem.supports_crossover() {
            return Err(BinBalanceError::Configuration(format!(
                "Crossover needs at least 4 items, item set has {}",
                self.problem.item_set.len()
            )));
        }
        Ok(())
    }
}

pub struct ConfigManager {
    config: AppConfig,
}

impl ConfigManager {
    pub fn new() -> Self {
        Self {
            config: AppConfig::default(),
        }
    }

    /// Layer an optional TOML file and then `BINBALANCE__*` environment variables over the defaults.
    pub fn load(&mut self, path: Option<&Path>) -> Result<(), BinBalanceError> {
        self.load_with_env(path, Environment::with_prefix(ENV_PREFIX))
    }

    pub fn load_from_file<P: AsRef<Path>>(&mut self, path: P) -> Result<(), BinBalanceError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .map_err(|e| BinBalanceError::Configuration(format!("Failed to read config: {}", e)))?;

        let config: AppConfig = toml::from_str(&contents)
            .map_err(|e| BinBalanceError::Configuration(format!("Failed to parse config: {}", e)))?;

        config.validate()?;
        info!("Loaded configuration from {}", path.display());
        self.config = config;
        Ok(())
    }

    /// Same as [`ConfigManager::load`] with a caller-built environment source.
    pub fn load_with_env(
        &mut self,
        path: Option<&Path>,
        env: Environment,
    ) -> Result<(), BinBalanceError> {
        // Missing keys fall back to `Default` through `#[serde(default)]` on every section.
        let mut builder = Config::builder();
        if let Some(path) = path {
            debug!("Reading configuration file {}", path.display());
            builder = builder.add_source(File::from(path).format(FileFormat::Toml));
        }

        let config: AppConfig = builder
            .add_source(
                env.prefix_separator("__")
                    .separator("__")
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("experiment.mutation_rates")
                    .with_list_parse_key("experiment.population_sizes")
                    .with_list_parse_key("experiment.crossover_modes"),
            )
            .build()?
            .try_deserialize()?;

        config.validate()?;
        self.config = config;
        Ok(())
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), BinBalanceError> {
        let toml_str = toml::to_string_pretty(&self.config)?;
        std::fs::write(path, toml_str)?;
        Ok(())
    }

    pub fn get(&self) -> &AppConfig {
        &self.config
    }

    pub fn update<F>(&mut self, f: F) -> Result<(), BinBalanceError>
    where
        F: FnOnce(&mut AppConfig),
    {
        let mut candidate = self.config.clone();
        f(&mut candidate);
        candidate.validate()?;
        self.config = candidate;
        Ok(())
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}
