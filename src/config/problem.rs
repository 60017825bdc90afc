use super::traits::ConfigSection;
use crate::data::{ItemSet, Problem};
use crate::engines::generation::operators::MIN_CROSSOVER_LENGTH;
use crate::error::BinBalanceError;
use crate::types::BinId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProblemConfig {
    pub bin_count: BinId,
    pub item_set: ItemSet,
}

impl Default for ProblemConfig {
    fn default() -> Self {
        Self {
            bin_count: 10,
            item_set: ItemSet::default(),
        }
    }
}

impl ProblemConfig {
    pub fn build(&self) -> Result<Problem<f64>, BinBalanceError> {
        self.validate()?;
        Problem::new(self.bin_count, self.item_set.generate())
    }

    pub fn supports_crossover(&self) -> bool {
        self.item_set.len() >= MIN_CROSSOVER_LENGTH
    }
}

impl ConfigSection for ProblemConfig {
    fn section_name() -> &'static str {
        "problem"
    }

    fn validate(&self) -> Result<(), BinBalanceError> {
        if self.bin_count < 1 {
            return Err(BinBalanceError::Configuration(
                "Bin count must be at least 1".to_string()
            ));
        }
        self.item_set.validate()
    }
}
