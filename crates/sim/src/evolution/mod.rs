//! Evolution module providing mutation budgets, codon operators, and the
//! whole-sequence mutation engine.
//!
//! - **Budget**: identity to base pairs, base pairs to per-class codon counts
//! - **Mutator**: one-codon edits for each mutation class
//! - **Engine**: draws codons and applies the classes to a gene

pub mod budget;
pub mod engine;
pub mod mutator;

pub use budget::{ClassCounts, RatioSpec, allocate, mutation_budget};
pub use engine::{EditRecord, MutationOutcome, PROMOTED_CODONS, SequenceMutationEngine};
pub use mutator::{CodonMutator, MutationClass};
