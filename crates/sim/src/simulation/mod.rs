//! Batch pipeline around the two engines.
//!
//! - `configs`: the serializable [`Configuration`] of a run
//! - `sequence`: FASTA input and output
//! - `profile`: which donors go into which recipient
//! - `engine`: the seeded [`Simulation`] running both stages over batches
//! - `report`: text of the mutation report

pub mod configs;
pub mod engine;
pub mod profile;
pub mod report;
pub mod sequence;

pub use configs::{
    Configuration, DEFAULT_EXTENSION, DEFAULT_TERMINATOR, InsertSource, MutationConfig,
    TransferConfig,
};
pub use engine::{DonorMutation, MutationBatch, RecipientTransfer, Simulation};
pub use profile::{TransferEntry, TransferProfile};
pub use report::{mutation_report, summary_block};
pub use sequence::{
    parse_fasta, parse_fasta_str, read_recipient, recipient_path, write_fasta, write_fasta_file,
};
