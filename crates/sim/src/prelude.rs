//! Commonly used imports for convenience.
//!
//! # Example
//!
//! ```
//! use hgtsim_sim::prelude::*;
//! use std::str::FromStr;
//!
//! let seq = Sequence::from_str("ATGAAATAA").unwrap();
//! assert_eq!(STANDARD.translate_sequence(&seq), "MK*");
//! ```

pub use crate::base::{Nucleotide, Sequence, SequenceRecord};
pub use crate::codon::{Codon, CodonTable, STANDARD};
pub use crate::errors;
pub use crate::evolution::{
    ClassCounts, CodonMutator, EditRecord, MutationClass, MutationOutcome, RatioSpec,
    SequenceMutationEngine,
};
pub use crate::simulation::{Configuration, InsertSource, Simulation, TransferProfile};
pub use crate::transfer::{Composite, InsertionSite, RandomInsertionEngine};
