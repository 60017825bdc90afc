use crate::engines::generation::{
    candidate::Candidate,
    genome::Genome,
    population::{weakest_index, Population},
};
use crate::error::{BinBalanceError, Result};
use crate::types::{BinId, ReplacementPolicy, Weight};
use log::trace;
use rand::Rng;
use std::rc::Rc;

/// Shortest chromosome single-point crossover accepts.
pub const MIN_CROSSOVER_LENGTH: usize = 4;

/// Generate a random genome with every gene drawn uniformly from `[1, bin_count]`
pub fn random_genome<R: Rng>(length: usize, bin_count: BinId, rng: &mut R) -> Genome {
    (0..length).map(|_| rng.gen_range(1..=bin_count)).collect()
}

/// Mutation: `m` independent trials, each rewriting one random gene with a fresh bin id.
///
/// A trial may redraw the value already present, so the genome is not guaranteed to change.
pub fn mutate_genes<R: Rng>(genome: &mut [BinId], m: usize, bin_count: BinId, rng: &mut R) {
    if genome.is_empty() {
        return;
    }
    for _ in 0..m {
        let idx = rng.gen_range(0..genome.len());
        genome[idx] = rng.gen_range(1..=bin_count);
    }
}

/// Binary tournament: draw two candidates with replacement, keep the lower fitness.
///
/// On equal fitness the first draw wins. With a single-member population both draws
/// land on the same candidate.
pub fn binary_tournament<'a, W: Weight, R: Rng>(
    population: &'a [Rc<Candidate<W>>],
    rng: &mut R,
) -> Result<&'a Rc<Candidate<W>>> {
    if population.is_empty() {
        return Err(BinBalanceError::EmptyPopulation);
    }

    let first = &population[rng.gen_range(0..population.len())];
    let second = &population[rng.gen_range(0..population.len())];

    if second.fitness() < first.fitness() {
        Ok(second)
    } else {
        Ok(first)
    }
}

/// Two independent binary tournaments. Both may return the same candidate.
pub fn select_parents<'a, W: Weight, R: Rng>(
    population: &'a [Rc<Candidate<W>>],
    rng: &mut R,
) -> Result<(&'a Rc<Candidate<W>>, &'a Rc<Candidate<W>>)> {
    let parent1 = binary_tournament(population, rng)?;
    let parent2 = binary_tournament(population, rng)?;
    Ok((parent1, parent2))
}

/// Splice two gene sequences at `point`: the head of one with the tail of the other.
pub fn crossover_genes(parent1: &[BinId], parent2: &[BinId], point: usize) -> (Genome, Genome) {
    let mut child1 = Vec::with_capacity(parent1.len());
    child1.extend_from_slice(&parent1[..point]);
    child1.extend_from_slice(&parent2[point..]);

    let mut child2 = Vec::with_capacity(parent2.len());
    child2.extend_from_slice(&parent2[..point]);
    child2.extend_from_slice(&parent1[point..]);

    (child1, child2)
}

/// Single-point crossover at a random point in `1..len-2` (see [`crossover_points`]).
///
/// Both children are new candidates and are evaluated once on construction.
pub fn single_point_crossover<W: Weight, R: Rng>(
    parent1: &Candidate<W>,
    parent2: &Candidate<W>,
    rng: &mut R,
) -> Result<(Candidate<W>, Candidate<W>)> {
    let len = check_crossover_parents(parent1, parent2)?;
    let point = rng.gen_range(crossover_points(len));
    trace!("Crossover at point {} of {}", point, len);
    crossover_at(parent1, parent2, point)
}

/// Points `single_point_crossover` draws from for a chromosome of `len` genes.
pub fn crossover_points(len: usize) -> std::ops::Range<usize> {
    1..len.saturating_sub(2)
}

/// Single-point crossover at a caller-chosen point from [`crossover_points`].
pub fn crossover_at<W: Weight>(
    parent1: &Candidate<W>,
    parent2: &Candidate<W>,
    point: usize,
) -> Result<(Candidate<W>, Candidate<W>)> {
    let len = check_crossover_parents(parent1, parent2)?;
    let points = crossover_points(len);
    if !points.contains(&point) {
        return Err(BinBalanceError::InvalidChromosome(format!(
            "crossover point {} must lie in {}..{}",
            point, points.start, points.end
        )));
    }

    let (genes1, genes2) = crossover_genes(parent1.genes(), parent2.genes(), point);
    Ok((parent1.offspring(genes1)?, parent1.offspring(genes2)?))
}

fn check_crossover_parents<W: Weight>(parent1: &Candidate<W>, parent2: &Candidate<W>) -> Result<usize> {
    if !parent1.shares_problem_with(parent2) || parent1.genes().len() != parent2.genes().len() {
        return Err(BinBalanceError::InvalidChromosome(
            "parents belong to different problems".to_string(),
        ));
    }

    let len = parent1.genes().len();
    if len < MIN_CROSSOVER_LENGTH {
        return Err(BinBalanceError::InvalidChromosome(format!(
            "single-point crossover needs at least {} genes, got {}",
            MIN_CROSSOVER_LENGTH, len
        )));
    }
    Ok(len)
}

/// Result of offering a newcomer to the population.
#[derive(Debug)]
pub enum Replacement<W> {
    /// The newcomer took the place of this candidate.
    Replaced(Rc<Candidate<W>>),
    /// The newcomer was worse than every member and was left out.
    Rejected,
}

impl<W> Replacement<W> {
    pub fn is_replaced(&self) -> bool {
        matches!(self, Replacement::Replaced(_))
    }
}

/// Weakest replacement: the newcomer displaces the worst member if `policy` accepts it.
///
/// The worst member is the first one with maximal fitness. On acceptance it is removed
/// and the newcomer appended, so the population size never changes.
pub fn weakest_replacement<W: Weight>(
    population: &mut Population<W>,
    new_candidate: Rc<Candidate<W>>,
    policy: ReplacementPolicy,
) -> Result<Replacement<W>> {
    let worst_idx = weakest_index(population).ok_or(BinBalanceError::EmptyPopulation)?;

    if policy.accepts(new_candidate.fitness(), population[worst_idx].fitness()) {
        let removed = population.remove(worst_idx);
        population.push(new_candidate);
        Ok(Replacement::Replaced(removed))
    } else {
        Ok(Replacement::Rejected)
    }
}
