//! Splicing donor genes into recipient genomes.

pub mod insertion;

pub use insertion::{Composite, InsertionSite, RandomInsertionEngine, splice};
