use crate::engines::generation::candidate::Candidate;
use crate::types::Weight;
use std::rc::Rc;

/// The live, fixed-size set of candidates the engine breeds from.
pub type Population<W> = Vec<Rc<Candidate<W>>>;

/// Every candidate created during a run, kept only to account for the evaluation budget.
#[derive(Debug)]
pub struct History<W> {
    candidates: Vec<Rc<Candidate<W>>>,
}

impl<W: Weight> History<W> {
    pub fn new() -> Self {
        Self {
            candidates: Vec::new(),
        }
    }

    pub fn from_population(population: &[Rc<Candidate<W>>]) -> Self {
        Self {
            candidates: population.to_vec(),
        }
    }

    pub fn record(&mut self, candidate: Rc<Candidate<W>>) {
        self.candidates.push(candidate);
    }

    /// Sum of evaluations performed by every recorded candidate.
    pub fn total_evaluations(&self) -> usize {
        self.candidates.iter().map(|c| c.evaluation_count()).sum()
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }
}

impl<W: Weight> Default for History<W> {
    fn default() -> Self {
        Self::new()
    }
}

/// Mean fitness of a population, `0.0` when empty.
pub fn average_fitness<W: Weight>(population: &[Rc<Candidate<W>>]) -> f64 {
    if population.is_empty() {
        return 0.0;
    }
    population.iter().map(|c| c.fitness().to_f64()).sum::<f64>() / population.len() as f64
}

/// Lowest-fitness candidate; the first one encountered wins ties.
pub fn fittest<W: Weight>(population: &[Rc<Candidate<W>>]) -> Option<&Rc<Candidate<W>>> {
    population.iter().reduce(|best, c| {
        if c.fitness() < best.fitness() {
            c
        } else {
            best
        }
    })
}

/// Index of the highest-fitness candidate; the first one encountered wins ties.
pub fn weakest_index<W: Weight>(population: &[Rc<Candidate<W>>]) -> Option<usize> {
    let mut iter = population.iter().enumerate();
    let (mut worst_idx, first) = iter.next()?;
    let mut worst_fitness = first.fitness();

    for (idx, candidate) in iter {
        if candidate.fitness() > worst_fitness {
            worst_idx = idx;
            worst_fitness = candidate.fitness();
        }
    }

    Some(worst_idx)
}
