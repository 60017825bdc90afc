use crate::types::{BinId, Weight};
use std::collections::BTreeMap;

/// Totals of the occupied bins only, as `(bin_id, load)` in ascending bin order.
///
/// Bins without items never appear, so the size is bounded by the item count, not by
/// `bin_count`.
pub type BinLoads<W> = Vec<(BinId, W)>;

/// Accumulate each occupied bin's total weight for an item-to-bin assignment.
///
/// Genes outside `[1, bin_count]` are a caller bug and are skipped.
pub fn bin_loads<W: Weight>(genes: &[BinId], weights: &[W], bin_count: BinId) -> BinLoads<W> {
    let mut loads: BTreeMap<BinId, W> = BTreeMap::new();

    for (&gene, &weight) in genes.iter().zip(weights) {
        if gene < 1 || gene > bin_count {
            debug_assert!(false, "gene {} outside [1, {}]", gene, bin_count);
            continue;
        }
        loads
            .entry(gene)
            .and_modify(|load| *load = *load + weight)
            .or_insert(weight);
    }

    loads.into_iter().collect()
}

/// Heaviest occupied bin minus lightest occupied bin.
///
/// Returns `None` when no bin is occupied.
pub fn imbalance<W: Weight>(loads: &[(BinId, W)]) -> Option<W> {
    let mut occupied = loads.iter().map(|&(_, load)| load);
    let first = occupied.next()?;

    let (min, max) = occupied.fold((first, first), |(min, max), load| {
        (
            if load < min { load } else { min },
            if load > max { load } else { max },
        )
    });

    Some(max - min)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bin_loads_accumulate() {
        let loads = bin_loads(&[1, 2, 2, 1], &[3u32, 4, 5, 6], 3);
        assert_eq!(loads, vec![(1, 9), (2, 9)]);
    }

    #[test]
    fn test_imbalance_skips_empty_bins() {
        // Bin 3 is empty and must not pull the minimum down to zero.
        let loads = bin_loads(&[1, 2, 2], &[10u32, 3, 4], 3);
        assert_eq!(loads.len(), 2);
        assert_eq!(imbalance(&loads), Some(3));
    }

    #[test]
    fn test_single_occupied_bin_is_balanced() {
        let loads = bin_loads(&[2, 2, 2], &[1.5f64, 2.5, 3.0], 4);
        assert_eq!(loads, vec![(2, 7.0)]);
        assert_eq!(imbalance(&loads), Some(0.0));
    }

    #[test]
    fn test_no_occupied_bins() {
        let loads: BinLoads<u32> = Vec::new();
        assert_eq!(imbalance(&loads), None);
    }

    #[test]
    fn test_loads_sized_by_items_not_bins() {
        let genes = [u32::MAX, 1, u32::MAX - 1, u32::MAX];
        let loads = bin_loads(&genes, &[1u64, 2, 3, 4], u32::MAX);
        assert_eq!(loads, vec![(1, 2), (u32::MAX - 1, 3), (u32::MAX, 5)]);
        assert_eq!(imbalance(&loads), Some(3));
    }
}
