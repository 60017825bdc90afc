/// Genome representation for the load-balancing search
///
/// A genome is one gene per item, in item order. Gene `k` holds the 1-indexed bin
/// that item `k` is assigned to, so every value lies in `[1, bin_count]`:
///
/// ```
/// use binbalance::engines::generation::Genome;
///
/// // items 0 and 3 in bin 1, item 1 in bin 2, item 2 in bin 3
/// let genome: Genome = vec![1, 2, 3, 1];
/// assert_eq!(genome.len(), 4);
/// ```
///
/// Keeping the encoding flat makes crossover a slice splice and mutation a single
/// indexed write, and every genome of the right length decodes to a valid allocation.
pub type Genome = Vec<crate::types::BinId>;
