pub mod evaluation;
pub mod experiment;
pub mod generation;
