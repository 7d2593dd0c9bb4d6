//! # HGT simulation core
//!
//! Produces mutant copies of donor genes at a target identity and splices
//! donors into recipient genomes between terminator flanks.
//!
//! - [`evolution`]: mutation budget, codon operators and the sequence engine
//! - [`transfer`]: multi-point random insertion
//! - [`simulation`]: configuration, input files and the seeded batch engine

pub mod base;
pub mod codon;
pub mod errors;
pub mod evolution;
pub mod prelude;
pub mod sampling;
pub mod simulation;
pub mod transfer;

pub use base::{Nucleotide, Sequence, SequenceRecord};
