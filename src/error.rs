use thiserror::Error;

#[derive(Error, Debug)]
pub enum BinBalanceError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Invalid chromosome: {0}")]
    InvalidChromosome(String),

    #[error("Cannot select from an empty population")]
    EmptyPopulation,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serde error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("Config load error: {0}")]
    ConfigLoad(#[from] config::ConfigError),
}

pub type Result<T> = std::result::Result<T, BinBalanceError>;
