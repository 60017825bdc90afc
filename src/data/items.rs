use crate::error::{BinBalanceError, Result};
use serde::{Deserialize, Serialize};

/// Item-list recipes used to build demo and experiment instances.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ItemSet {
    /// `factor * k` for `k` in `1..=count`, e.g. `[2, 4, 6, ..., 1000]`.
    Linear { count: usize, factor: f64 },
    /// `factor * k^2` for `k` in `1..=count`, e.g. `[2, 8, 18, ..., 500000]`.
    Quadratic { count: usize, factor: f64 },
    /// A literal weight list.
    Explicit { weights: Vec<f64> },
}

impl Default for ItemSet {
    fn default() -> Self {
        ItemSet::Linear {
            count: 500,
            factor: 2.0,
        }
    }
}

impl ItemSet {
    pub fn generate(&self) -> Vec<f64> {
        match self {
            ItemSet::Linear { count, factor } => {
                (1..=*count).map(|k| factor * k as f64).collect()
            }
            ItemSet::Quadratic { count, factor } => {
                (1..=*count).map(|k| factor * (k * k) as f64).collect()
            }
            ItemSet::Explicit { weights } => weights.clone(),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            ItemSet::Linear { count, .. } | ItemSet::Quadratic { count, .. } => *count,
            ItemSet::Explicit { weights } => weights.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn validate(&self) -> Result<()> {
        if self.is_empty() {
            return Err(BinBalanceError::Configuration(
                "Item set must contain at least one item".to_string(),
            ));
        }
        match self {
            ItemSet::Linear { factor, .. } | ItemSet::Quadratic { factor, .. } => {
                if !(*factor >= 0.0) || !factor.is_finite() {
                    return Err(BinBalanceError::Configuration(
                        "Item factor must be a finite non-negative number".to_string(),
                    ));
                }
            }
            ItemSet::Explicit { weights } => {
                if weights.iter().any(|w| !(*w >= 0.0) || !w.is_finite()) {
                    return Err(BinBalanceError::Configuration(
                        "Explicit weights must be finite and non-negative".to_string(),
                    ));
                }
            }
        }
        Ok(())
    }
}
