//! Whole-sequence mutation towards a target identity.
//!
//! The engine splits a donor gene into codons, converts the target identity
//! into a base-pair budget, allocates that budget across the four mutation
//! classes and draws distinct interior codons for each class. The first and
//! last codons are never drawn, and any partial codon at the end is carried
//! over unchanged.
//!
//! Codons equal to `ATG` or `TGG` have no synonym one base away, so when one
//! lands in the same-sense group it is moved to the non-synonymous group.
//! Both classes cost one base, so the budget is unchanged.

use super::budget::{ClassCounts, RatioSpec, allocate, mutation_budget};
use super::mutator::{CodonMutator, MutationClass};
use crate::base::Sequence;
use crate::codon::{Codon, CodonTable};
use crate::errors::MutationError;
use crate::sampling::sample_distinct;
use log::debug;
use rand::Rng;
use serde::Serialize;
use std::fmt;

/// Codons that are moved out of the same-sense group before mutation.
pub const PROMOTED_CODONS: [Codon; 2] = {
    use crate::base::Nucleotide::{A, G, T};
    [Codon::new(A, T, G), Codon::new(T, G, G)]
};

/// One applied codon edit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EditRecord {
    pub sequence_id: String,
    pub class: MutationClass,
    /// 0-based codon index
    pub codon_index: usize,
    /// 1-based first base of the codon
    pub start: usize,
    /// 1-based last base of the codon
    pub end: usize,
    pub original: Codon,
    pub original_aa: char,
    pub mutated: Codon,
    pub mutated_aa: char,
}

impl fmt::Display for EditRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\t{}\t{}-{}bp\t{}({})\t{}({})",
            self.sequence_id,
            self.class.label(),
            self.start,
            self.end,
            self.original,
            self.original_aa,
            self.mutated,
            self.mutated_aa
        )
    }
}

/// Result of mutating one sequence.
#[derive(Debug, Clone)]
pub struct MutationOutcome {
    pub mutant: Sequence,
    /// Edits in application order: same-sense, non-synonymous, two-base,
    /// three-base; within a class, in draw order.
    pub edits: Vec<EditRecord>,
    /// Base-pair budget derived from length and identity.
    pub budget: usize,
    /// Counts as returned by the allocator.
    pub allocated: ClassCounts,
    /// Counts actually applied, after promotion of ATG/TGG.
    pub applied: ClassCounts,
}

/// Produces divergent copies of sequences at a target identity.
#[derive(Debug, Clone)]
pub struct SequenceMutationEngine<'a> {
    mutator: CodonMutator<'a>,
    target_identity: u8,
    ratio: RatioSpec,
}

impl<'a> SequenceMutationEngine<'a> {
    /// # Errors
    /// `InvalidIdentity` above 100, `DegenerateRatio` for an all-zero ratio.
    pub fn new(
        table: &'a CodonTable,
        target_identity: u8,
        ratio: RatioSpec,
    ) -> Result<Self, MutationError> {
        if target_identity > 100 {
            return Err(MutationError::InvalidIdentity(target_identity));
        }
        if ratio.is_degenerate() {
            return Err(MutationError::DegenerateRatio);
        }
        Ok(Self {
            mutator: CodonMutator::new(table),
            target_identity,
            ratio,
        })
    }

    pub fn target_identity(&self) -> u8 {
        self.target_identity
    }

    pub fn ratio(&self) -> RatioSpec {
        self.ratio
    }

    /// Mutate `sequence`, labelling edits with `sequence_id`.
    ///
    /// # Errors
    /// `InsufficientCodons` when the interior codon pool is smaller than the
    /// number of codons to edit; mutator errors for exhausted candidate sets.
    pub fn mutate<R: Rng + ?Sized>(
        &self,
        sequence_id: &str,
        sequence: &Sequence,
        rng: &mut R,
    ) -> Result<MutationOutcome, MutationError> {
        let mut codons: Vec<Codon> = sequence.codons().collect();
        let budget = mutation_budget(sequence.len(), self.target_identity)?;
        let allocated = allocate(budget, &self.ratio)?;
        let requested = allocated.total_codons();

        let interior = 1..codons.len().saturating_sub(1);
        let available = interior.len();
        let drawn = sample_distinct(rng, interior, requested).ok_or(
            MutationError::InsufficientCodons {
                requested,
                available,
            },
        )?;

        let groups = self.partition(&codons, &drawn, &allocated);
        let applied = ClassCounts {
            same_sense: groups[0].len(),
            non_synonymous: groups[1].len(),
            two_base: groups[2].len(),
            three_base: groups[3].len(),
        };
        debug!(
            "{sequence_id}: {} bp, budget {budget}, allocated {allocated:?}, applied {applied:?}",
            sequence.len()
        );

        let table = self.mutator.table();
        let mut edits = Vec::with_capacity(requested);
        for (class, indices) in MutationClass::ALL.into_iter().zip(groups.iter()) {
            for &idx in indices {
                let original = codons[idx];
                let mutated = self.mutator.mutate(class, original, rng)?;
                codons[idx] = mutated;
                edits.push(EditRecord {
                    sequence_id: sequence_id.to_string(),
                    class,
                    codon_index: idx,
                    start: 3 * idx + 1,
                    end: 3 * idx + 3,
                    original,
                    original_aa: table.translate(original),
                    mutated,
                    mutated_aa: table.translate(mutated),
                });
            }
        }

        Ok(MutationOutcome {
            mutant: Sequence::from_codons(&codons, sequence.trailing()),
            edits,
            budget,
            allocated,
            applied,
        })
    }

    /// Cut the drawn indices into the four class groups in draw order, then
    /// move promoted codons from same-sense to the end of non-synonymous.
    fn partition(&self, codons: &[Codon], drawn: &[usize], counts: &ClassCounts) -> [Vec<usize>; 4] {
        let (same_sense, rest) = drawn.split_at(counts.same_sense);
        let (non_synonymous, rest) = rest.split_at(counts.non_synonymous);
        let (two_base, three_base) = rest.split_at(counts.two_base);

        let (promoted, kept): (Vec<usize>, Vec<usize>) = same_sense
            .iter()
            .partition(|&&idx| PROMOTED_CODONS.contains(&codons[idx]));
        let mut non_synonymous = non_synonymous.to_vec();
        non_synonymous.extend(promoted);

        [kept, non_synonymous, two_base.to_vec(), three_base.to_vec()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codon::STANDARD;
    use rand::SeedableRng;
    use rand_xoshiro::Xoshiro256PlusPlus;
    use std::collections::HashSet;
    use std::str::FromStr;

    fn random_gene(rng: &mut Xoshiro256PlusPlus, codons: usize) -> Sequence {
        let bases: Vec<_> = (0..codons * 3)
            .map(|_| crate::base::Nucleotide::ALL[rng.random_range(0..4)])
            .collect();
        Sequence::from_nucleotides(bases)
    }

    #[test]
    fn test_edits_respect_budget_and_distances() {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(42);
        let gene = random_gene(&mut rng, 400);
        let engine = SequenceMutationEngine::new(&STANDARD, 90, RatioSpec::new(1, 0, 1, 1)).unwrap();
        let outcome = engine.mutate("gene1", &gene, &mut rng).unwrap();

        assert_eq!(outcome.budget, 120);
        assert_eq!(outcome.applied.total_bases(), 120);
        assert_eq!(outcome.allocated.total_bases(), 120);
        assert_eq!(outcome.edits.len(), outcome.applied.total_codons());
        assert_eq!(outcome.mutant.len(), gene.len());

        let differing = gene
            .as_slice()
            .iter()
            .zip(outcome.mutant.as_slice())
            .filter(|(a, b)| a != b)
            .count();
        assert_eq!(differing, 120);

        for edit in &outcome.edits {
            assert_eq!(edit.original.hamming(edit.mutated), edit.class.base_cost());
            assert_eq!(edit.end - edit.start, 2);
            assert_eq!(edit.start, edit.codon_index * 3 + 1);
        }
    }

    #[test]
    fn test_codon_indices_unique_and_interior() {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(5);
        let gene = random_gene(&mut rng, 60);
        let engine = SequenceMutationEngine::new(&STANDARD, 70, RatioSpec::new(2, 1, 1, 1)).unwrap();
        let outcome = engine.mutate("g", &gene, &mut rng).unwrap();

        let seen: HashSet<usize> = outcome.edits.iter().map(|e| e.codon_index).collect();
        assert_eq!(seen.len(), outcome.edits.len());
        assert!(!seen.contains(&0));
        assert!(!seen.contains(&59));
        // Boundary codons are untouched
        assert_eq!(&outcome.mutant.as_slice()[..3], &gene.as_slice()[..3]);
        assert_eq!(&outcome.mutant.as_slice()[177..], &gene.as_slice()[177..]);
    }

    #[test]
    fn test_start_and_tryptophan_are_promoted() {
        // Every interior codon is ATG or TGG, so no same-sense edit can survive
        let gene = Sequence::from_str(&format!("GCT{}GCT", "ATGTGG".repeat(20))).unwrap();
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(8);
        let engine = SequenceMutationEngine::new(&STANDARD, 90, RatioSpec::new(1, 0, 0, 0)).unwrap();
        let outcome = engine.mutate("met", &gene, &mut rng).unwrap();

        assert_eq!(outcome.allocated.same_sense, 12);
        assert_eq!(outcome.applied.same_sense, 0);
        assert_eq!(outcome.applied.non_synonymous, 12);
        assert!(outcome.edits.iter().all(|e| e.class == MutationClass::NonSynonymous));
        assert!(outcome.edits.iter().all(|e| e.original_aa != e.mutated_aa));
    }

    #[test]
    fn test_trailing_bases_kept() {
        let gene = Sequence::from_str(&format!("ATG{}TAAGC", "GCTGAA".repeat(10))).unwrap();
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(1);
        let engine = SequenceMutationEngine::new(&STANDARD, 80, RatioSpec::default()).unwrap();
        let outcome = engine.mutate("tail", &gene, &mut rng).unwrap();
        assert_eq!(outcome.mutant.len(), gene.len());
        assert_eq!(outcome.mutant.trailing(), gene.trailing());
        assert!(outcome.mutant.to_string().ends_with("TAAGC"));
    }

    #[test]
    fn test_identity_100_is_a_copy() {
        let gene = Sequence::from_str("ATGAAACCCGGGTTTTAA").unwrap();
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(1);
        let engine = SequenceMutationEngine::new(&STANDARD, 100, RatioSpec::default()).unwrap();
        let outcome = engine.mutate("same", &gene, &mut rng).unwrap();
        assert_eq!(outcome.mutant, gene);
        assert!(outcome.edits.is_empty());
    }

    #[test]
    fn test_insufficient_codons() {
        // 5 codons, 3 interior; 40% divergence of 15 bp asks for 6 codons
        let gene = Sequence::from_str("ATGAAACCCGGGTAA").unwrap();
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(1);
        let engine = SequenceMutationEngine::new(&STANDARD, 60, RatioSpec::new(1, 0, 0, 0)).unwrap();
        assert_eq!(
            engine.mutate("short", &gene, &mut rng).unwrap_err(),
            MutationError::InsufficientCodons {
                requested: 6,
                available: 3
            }
        );
    }

    #[test]
    fn test_constructor_validation() {
        assert_eq!(
            SequenceMutationEngine::new(&STANDARD, 101, RatioSpec::default()).unwrap_err(),
            MutationError::InvalidIdentity(101)
        );
        assert_eq!(
            SequenceMutationEngine::new(&STANDARD, 90, RatioSpec::new(0, 0, 0, 0)).unwrap_err(),
            MutationError::DegenerateRatio
        );
    }

    #[test]
    fn test_same_seed_same_mutant() {
        let gene = random_gene(&mut Xoshiro256PlusPlus::seed_from_u64(77), 200);
        let engine = SequenceMutationEngine::new(&STANDARD, 85, RatioSpec::new(1, 1, 1, 1)).unwrap();
        let a = engine
            .mutate("g", &gene, &mut Xoshiro256PlusPlus::seed_from_u64(3))
            .unwrap();
        let b = engine
            .mutate("g", &gene, &mut Xoshiro256PlusPlus::seed_from_u64(3))
            .unwrap();
        assert_eq!(a.mutant, b.mutant);
        assert_eq!(a.edits, b.edits);
    }

    #[test]
    fn test_edit_record_line_format() {
        let edit = EditRecord {
            sequence_id: "geneA".to_string(),
            class: MutationClass::SameSense,
            codon_index: 4,
            start: 13,
            end: 15,
            original: Codon::from_str("AAA").unwrap(),
            original_aa: 'K',
            mutated: Codon::from_str("AAG").unwrap(),
            mutated_aa: 'K',
        };
        assert_eq!(
            edit.to_string(),
            "geneA\tOne point mutation (same-sense)\t13-15bp\tAAA(K)\tAAG(K)"
        );
    }
}
