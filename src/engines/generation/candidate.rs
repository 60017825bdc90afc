use crate::data::Problem;
use crate::engines::evaluation::{bin_loads, imbalance, BinLoads};
use crate::engines::generation::genome::Genome;
use crate::engines::generation::operators::{mutate_genes, random_genome};
use crate::error::{BinBalanceError, Result};
use crate::types::{BinId, Weight};
use rand::Rng;
use std::sync::Arc;

/// One candidate allocation together with its cached fitness.
///
/// Fitness is recomputed every time the genes change, so the value returned by
/// [`Candidate::fitness`] always matches [`Candidate::genes`]. Each evaluation bumps
/// `evaluation_count`, which the engine sums across its history to enforce the
/// evaluation budget.
///
/// `Candidate` is not `Clone`: a copy would carry the source candidate's
/// evaluation count. Use [`Candidate::offspring`] to start a fresh candidate from
/// existing genes.
#[derive(Debug)]
pub struct Candidate<W> {
    genes: Genome,
    weights: Arc<[W]>,
    bin_count: BinId,
    fitness: W,
    evaluation_count: usize,
}

impl<W: Weight> Candidate<W> {
    /// Create a candidate with uniformly random bin assignments.
    pub fn random<R: Rng>(problem: &Problem<W>, rng: &mut R) -> Self {
        let genes = random_genome(problem.item_count(), problem.bin_count(), rng);
        Self::evaluated(Arc::clone(problem.weights()), problem.bin_count(), genes)
    }

    /// Create a candidate from an explicit gene sequence.
    pub fn with_genes(problem: &Problem<W>, genes: Genome) -> Result<Self> {
        validate_genes(&genes, problem.item_count(), problem.bin_count())?;
        Ok(Self::evaluated(
            Arc::clone(problem.weights()),
            problem.bin_count(),
            genes,
        ))
    }

    /// Create from explicit genes when given, otherwise at random.
    pub fn create<R: Rng>(problem: &Problem<W>, genes: Option<Genome>, rng: &mut R) -> Result<Self> {
        match genes {
            Some(genes) => Self::with_genes(problem, genes),
            None => Ok(Self::random(problem, rng)),
        }
    }

    /// Start a new candidate for the same problem from the given genes.
    pub fn offspring(&self, genes: Genome) -> Result<Self> {
        validate_genes(&genes, self.weights.len(), self.bin_count)?;
        Ok(Self::evaluated(Arc::clone(&self.weights), self.bin_count, genes))
    }

    fn evaluated(weights: Arc<[W]>, bin_count: BinId, genes: Genome) -> Self {
        let mut candidate = Self {
            genes,
            weights,
            bin_count,
            fitness: W::default(),
            evaluation_count: 0,
        };
        candidate.evaluate();
        candidate
    }

    /// Recompute fitness from the current genes and count the evaluation.
    pub fn evaluate(&mut self) -> W {
        self.evaluation_count += 1;

        let loads = bin_loads(&self.genes, &self.weights, self.bin_count);
        // A `Problem` never has zero items, so at least one bin is occupied.
        self.fitness = imbalance(&loads).unwrap_or_default();
        self.fitness
    }

    /// Run `m` random gene rewrites, then re-evaluate exactly once.
    pub fn mutate<R: Rng>(&mut self, m: usize, rng: &mut R) {
        mutate_genes(&mut self.genes, m, self.bin_count, rng);
        self.evaluate();
    }

    pub fn genes(&self) -> &[BinId] {
        &self.genes
    }

    pub fn fitness(&self) -> W {
        self.fitness
    }

    pub fn evaluation_count(&self) -> usize {
        self.evaluation_count
    }

    pub fn bin_count(&self) -> BinId {
        self.bin_count
    }

    pub fn weights(&self) -> &Arc<[W]> {
        &self.weights
    }

    pub fn bin_loads(&self) -> BinLoads<W> {
        bin_loads(&self.genes, &self.weights, self.bin_count)
    }

    pub(crate) fn shares_problem_with(&self, other: &Self) -> bool {
        self.bin_count == other.bin_count && Arc::ptr_eq(&self.weights, &other.weights)
    }
}

fn validate_genes(genes: &[BinId], item_count: usize, bin_count: BinId) -> Result<()> {
    if genes.len() != item_count {
        return Err(BinBalanceError::InvalidChromosome(format!(
            "expected {} genes, got {}",
            item_count,
            genes.len()
        )));
    }
    if let Some((idx, gene)) = genes
        .iter()
        .enumerate()
        .find(|(_, &g)| g < 1 || g > bin_count)
    {
        return Err(BinBalanceError::InvalidChromosome(format!(
            "gene {} assigns bin {} outside [1, {}]",
            idx, gene, bin_count
        )));
    }
    Ok(())
}
