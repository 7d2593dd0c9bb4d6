//! Codons and the genetic code.
//!
//! The code table is plain data: one static instance, [`STANDARD`], is
//! shared by every engine and never mutated.

#[allow(clippy::module_inception)]
mod codon;
mod table;

pub use codon::Codon;
pub use table::{CodonTable, STANDARD};
