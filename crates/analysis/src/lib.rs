//! Identity measurements between original donors and their mutants.

pub mod analysis;

pub use analysis::{
    AnalysisError, IdentityRow, IdentitySummary, compare_collections, identity_table, summarize_batch,
};
