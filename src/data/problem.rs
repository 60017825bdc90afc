use crate::error::{BinBalanceError, Result};
use crate::types::{BinId, Weight};
use std::sync::Arc;

/// A load-balancing instance: a fixed number of bins and the weights to spread over them.
///
/// The weight list is shared by every candidate built for this problem, so cloning a
/// `Problem` is cheap.
#[derive(Debug, Clone)]
pub struct Problem<W> {
    bin_count: BinId,
    weights: Arc<[W]>,
}

impl<W: Weight> Problem<W> {
    pub fn new(bin_count: BinId, weights: impl Into<Arc<[W]>>) -> Result<Self> {
        let weights = weights.into();

        if bin_count < 1 {
            return Err(BinBalanceError::Configuration(
                "Bin count must be at least 1".to_string(),
            ));
        }
        if weights.is_empty() {
            return Err(BinBalanceError::Configuration(
                "Item list must not be empty".to_string(),
            ));
        }
        // `!(w >= 0)` also catches NaN for float weights.
        if let Some((idx, w)) = weights
            .iter()
            .enumerate()
            .find(|(_, w)| !(**w >= W::default()))
        {
            return Err(BinBalanceError::Configuration(format!(
                "Item {} has invalid weight {:?}; weights must be non-negative",
                idx, w
            )));
        }

        if weights
            .iter()
            .try_fold(W::default(), |acc, &w| acc.checked_add(w))
            .is_none()
        {
            return Err(BinBalanceError::Configuration(
                "Total item weight overflows the weight type; use a wider type".to_string(),
            ));
        }

        Ok(Self { bin_count, weights })
    }

    pub fn bin_count(&self) -> BinId {
        self.bin_count
    }

    pub fn weights(&self) -> &Arc<[W]> {
        &self.weights
    }

    pub fn item_count(&self) -> usize {
        self.weights.len()
    }

    pub fn total_weight(&self) -> W {
        self.weights.iter().fold(W::default(), |acc, &w| acc + w)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_empty_items() {
        let result = Problem::<u32>::new(3, Vec::new());
        assert!(matches!(result, Err(BinBalanceError::Configuration(_))));
    }

    #[test]
    fn test_rejects_zero_bins() {
        let result = Problem::new(0, vec![1u32, 2, 3]);
        assert!(matches!(result, Err(BinBalanceError::Configuration(_))));
    }

    #[test]
    fn test_rejects_negative_and_nan_weights() {
        assert!(Problem::new(2, vec![1.0, -0.5]).is_err());
        assert!(Problem::new(2, vec![1.0, f64::NAN]).is_err());
        assert!(Problem::new(2, vec![-1i64, 4]).is_err());
    }

    #[test]
    fn test_rejects_total_weight_overflow() {
        let result = Problem::new(2, vec![u32::MAX, 1]);
        assert!(matches!(result, Err(BinBalanceError::Configuration(_))));
        assert!(Problem::new(2, vec![f64::MAX, f64::MAX]).is_err());

        let problem = Problem::new(2, vec![u32::MAX - 1, 1]).unwrap();
        assert_eq!(problem.total_weight(), u32::MAX);
    }

    #[test]
    fn test_accepts_zero_weight_items() {
        let problem = Problem::new(2, vec![0u64, 0, 5]).unwrap();
        assert_eq!(problem.item_count(), 3);
        assert_eq!(problem.total_weight(), 5);
    }
}
