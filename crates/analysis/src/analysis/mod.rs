//! Realized identity of mutants against their originals.
//!
//! Mutation only substitutes bases, so an original and its mutant always
//! have the same length and identity is positional: the share of equal
//! positions, at nucleotide level and on the translated proteins.

pub mod identity;
pub mod utils;

pub use identity::{
    AnalysisError, IdentityRow, IdentitySummary, compare, compare_collections, identity_table, summarize_batch,
};
