//! Base types for sequence representation.
//!
//! Nucleotides, immutable sequences with a codon-split view, and named
//! sequence records.

mod nucleotide;
mod record;
mod sequence;

pub use nucleotide::Nucleotide;
pub use record::SequenceRecord;
pub use sequence::Sequence;
