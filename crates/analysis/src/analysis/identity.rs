//! Identity table for `simulation_report.txt`.

use super::utils::positional_identity;
use hgtsim_sim::base::{Sequence, SequenceRecord};
use hgtsim_sim::codon::STANDARD;
use hgtsim_sim::simulation::MutationBatch;
use serde::Serialize;
use std::collections::HashMap;
use std::fmt::{self, Write};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AnalysisError {
    #[error("Original and mutant lengths differ ({original} vs {mutant})")]
    LengthMismatch { original: usize, mutant: usize },
    #[error("No mutant found for sequence '{0}'")]
    MissingMutant(String),
}

/// Realized identity of one mutant, in percent.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IdentitySummary {
    pub id: String,
    pub nucleotide: f64,
    pub amino_acid: f64,
}

/// One row of the identity table.
#[derive(Debug, Clone, PartialEq)]
pub enum IdentityRow {
    Compared(IdentitySummary),
    /// Donor whose mutation failed; holds its id.
    Failed(String),
}

impl fmt::Display for IdentityRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Compared(s) => write!(f, "{}\t{:.1}\t{:.1}", s.id, s.nucleotide, s.amino_acid),
            Self::Failed(id) => write!(f, "{id}: mutation failed"),
        }
    }
}

impl From<IdentitySummary> for IdentityRow {
    fn from(summary: IdentitySummary) -> Self {
        Self::Compared(summary)
    }
}

/// Compare `mutant` against `original` at nucleotide and protein level.
pub fn compare(original: &SequenceRecord, mutant: &Sequence) -> Result<IdentitySummary, AnalysisError> {
    let nucleotide = positional_identity(original.sequence.as_slice(), mutant.as_slice())?;
    let original_aa: Vec<char> = STANDARD.translate_sequence(&original.sequence).chars().collect();
    let mutant_aa: Vec<char> = STANDARD.translate_sequence(mutant).chars().collect();
    let amino_acid = positional_identity(&original_aa, &mutant_aa)?;
    Ok(IdentitySummary {
        id: original.id.clone(),
        nucleotide,
        amino_acid,
    })
}

/// One row per donor, in input order.
pub fn summarize_batch(batch: &MutationBatch) -> Result<Vec<IdentityRow>, AnalysisError> {
    batch
        .donors
        .iter()
        .map(|donor| match &donor.result {
            Ok(outcome) => compare(&donor.original, &outcome.mutant).map(IdentityRow::Compared),
            Err(_) => Ok(IdentityRow::Failed(donor.original.id.clone())),
        })
        .collect()
}

/// Pair originals with mutants by id.
///
/// # Errors
/// `MissingMutant` for an original without a mutant of the same id.
pub fn compare_collections(
    originals: &[SequenceRecord],
    mutants: &[SequenceRecord],
) -> Result<Vec<IdentitySummary>, AnalysisError> {
    let by_id: HashMap<&str, &Sequence> = mutants.iter().map(|m| (m.id.as_str(), &m.sequence)).collect();
    originals
        .iter()
        .map(|original| {
            let mutant = by_id
                .get(original.id.as_str())
                .ok_or_else(|| AnalysisError::MissingMutant(original.id.clone()))?;
            compare(original, mutant)
        })
        .collect()
}

/// Tab separated table with a header and one decimal per value.
pub fn identity_table(rows: &[IdentityRow]) -> String {
    let mut out = String::from("Sequence\tIden_nc\tIden_aa\n");
    for row in rows {
        let _ = writeln!(out, "{row}");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use hgtsim_sim::evolution::RatioSpec;
    use hgtsim_sim::simulation::{Configuration, Simulation};
    use std::str::FromStr;

    fn record(id: &str, s: &str) -> SequenceRecord {
        SequenceRecord::new(id, Sequence::from_str(s).unwrap())
    }

    #[test]
    fn test_compare_synonymous_change() {
        // AAA -> AAG keeps Lys
        let original = record("g", "ATGAAACCCTAA");
        let mutant = Sequence::from_str("ATGAAGCCCTAA").unwrap();
        let summary = compare(&original, &mutant).unwrap();
        assert!((summary.nucleotide - 100.0 * 11.0 / 12.0).abs() < 1e-9);
        assert_eq!(summary.amino_acid, 100.0);
    }

    #[test]
    fn test_compare_length_mismatch() {
        let original = record("g", "ATGAAATAA");
        let mutant = Sequence::from_str("ATGTAA").unwrap();
        assert_eq!(
            compare(&original, &mutant).unwrap_err(),
            AnalysisError::LengthMismatch {
                original: 9,
                mutant: 6
            }
        );
    }

    #[test]
    fn test_compare_collections_by_id() {
        let originals = vec![record("a", "ATGAAATAA"), record("b", "ATGCCCTAA")];
        let mutants = vec![record("b", "ATGCCGTAA"), record("a", "ATGAAATAA")];
        let summaries = compare_collections(&originals, &mutants).unwrap();
        assert_eq!(summaries[0].id, "a");
        assert_eq!(summaries[0].nucleotide, 100.0);
        assert_eq!(summaries[1].id, "b");

        let err = compare_collections(&originals, &mutants[..1]).unwrap_err();
        assert_eq!(err, AnalysisError::MissingMutant("a".to_string()));
    }

    #[test]
    fn test_identity_table_format() {
        let table = identity_table(&[
            IdentitySummary {
                id: "geneA".to_string(),
                nucleotide: 90.0,
                amino_acid: 83.33333,
            }
            .into(),
            IdentityRow::Failed("geneB".to_string()),
        ]);
        assert_eq!(
            table,
            "Sequence\tIden_nc\tIden_aa\ngeneA\t90.0\t83.3\ngeneB: mutation failed\n"
        );
    }

    #[test]
    fn test_batch_identity_matches_target() {
        let gene = format!("ATG{}TAA", "GCTGAACGTTTC".repeat(25));
        let donors = vec![record("g1", &gene)];
        let mut sim = Simulation::new(Configuration::new(90, RatioSpec::default()).with_seed(3));
        let batch = sim.mutate_donors(&donors).unwrap();
        let rows = summarize_batch(&batch).unwrap();
        let IdentityRow::Compared(summary) = &rows[0] else {
            panic!("expected a compared row, got {:?}", rows[0]);
        };
        // 306 bp, 30 bp edited
        assert!((summary.nucleotide - 100.0 * 276.0 / 306.0).abs() < 1e-9);
        assert!(summary.amino_acid <= 100.0);
    }

    #[test]
    fn test_failed_donor_keeps_its_row() {
        // Four codons leave two interior ones; 50% identity asks for more
        let donors = vec![
            record("tiny", "ATGAAACCCTAA"),
            record("long", &format!("ATG{}TAA", "GCT".repeat(30))),
        ];
        let mut sim = Simulation::new(Configuration::new(50, RatioSpec::default()).with_seed(8));
        let batch = sim.mutate_donors(&donors).unwrap();
        let rows = summarize_batch(&batch).unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0], IdentityRow::Failed("tiny".to_string()));
        assert!(matches!(&rows[1], IdentityRow::Compared(s) if s.id == "long"));
        assert!(identity_table(&rows).contains("\ntiny: mutation failed\n"));
    }
}
