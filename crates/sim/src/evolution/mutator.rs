//! Single-codon mutation operators.
//!
//! Each [`MutationClass`] picks a replacement codon uniformly at random from
//! a candidate set defined against the code table:
//!
//! | class | candidates |
//! |---|---|
//! | same-sense | synonyms of the codon exactly one base away |
//! | non-synonymous | ordinary codons one base away, minus synonyms |
//! | two-base | ordinary codons exactly two bases away |
//! | three-base | ordinary codons exactly three bases away |
//!
//! "Ordinary" means a member of the table's candidate pool, which leaves out
//! stops and start-like codons. Same-sense replacements are drawn from the
//! whole synonym family, so e.g. `CTT` may become `CTG`.

use crate::codon::{Codon, CodonTable};
use crate::errors::MutationError;
use rand::Rng;
use rand::seq::IndexedRandom;
use serde::{Deserialize, Serialize};

/// The four kinds of codon edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MutationClass {
    SameSense,
    NonSynonymous,
    TwoBase,
    ThreeBase,
}

impl MutationClass {
    /// Application order used by the sequence engine.
    pub const ALL: [MutationClass; 4] = [
        Self::SameSense,
        Self::NonSynonymous,
        Self::TwoBase,
        Self::ThreeBase,
    ];

    /// Number of bases a mutation of this class changes.
    pub const fn base_cost(self) -> usize {
        match self {
            Self::SameSense | Self::NonSynonymous => 1,
            Self::TwoBase => 2,
            Self::ThreeBase => 3,
        }
    }

    /// Label used in the simulation report.
    pub const fn label(self) -> &'static str {
        match self {
            Self::SameSense => "One point mutation (same-sense)",
            Self::NonSynonymous => "One point mutation (non-same-sense)",
            Self::TwoBase => "Two points mutation",
            Self::ThreeBase => "Three points mutation",
        }
    }
}

/// Applies one mutation class to one codon.
///
/// The mutator never sees positions: keeping two classes off the same codon
/// is the caller's job, done by handing each class a disjoint set of codon
/// indices.
#[derive(Debug, Clone, Copy)]
pub struct CodonMutator<'a> {
    table: &'a CodonTable,
}

impl<'a> CodonMutator<'a> {
    pub fn new(table: &'a CodonTable) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &'a CodonTable {
        self.table
    }

    /// Replacement candidates for `codon` under `class`, in codon index order.
    pub fn candidates(&self, class: MutationClass, codon: Codon) -> Vec<Codon> {
        match class {
            MutationClass::SameSense => self
                .table
                .synonyms_of(codon)
                .into_iter()
                .filter(|&c| c.hamming(codon) == 1)
                .collect(),
            MutationClass::NonSynonymous => self
                .table
                .candidates()
                .filter(|&c| c.hamming(codon) == 1 && !self.table.is_synonymous(c, codon))
                .collect(),
            MutationClass::TwoBase => self.at_distance(codon, 2),
            MutationClass::ThreeBase => self.at_distance(codon, 3),
        }
    }

    fn at_distance(&self, codon: Codon, distance: usize) -> Vec<Codon> {
        self.table
            .candidates()
            .filter(|&c| c.hamming(codon) == distance)
            .collect()
    }

    /// Mutate `codon` under `class`.
    ///
    /// # Errors
    /// `NoSynonymAvailable` for a same-sense request on a codon without a
    /// one-base synonym (ATG, TGG), `NoCandidateAvailable` when any other
    /// class has an empty candidate set.
    pub fn mutate<R: Rng + ?Sized>(
        &self,
        class: MutationClass,
        codon: Codon,
        rng: &mut R,
    ) -> Result<Codon, MutationError> {
        let candidates = self.candidates(class, codon);
        match candidates.choose(rng) {
            Some(&picked) => Ok(picked),
            None if class == MutationClass::SameSense => {
                Err(MutationError::NoSynonymAvailable(codon))
            }
            None => Err(MutationError::NoCandidateAvailable { codon, class }),
        }
    }

    pub fn same_sense<R: Rng + ?Sized>(&self, codon: Codon, rng: &mut R) -> Result<Codon, MutationError> {
        self.mutate(MutationClass::SameSense, codon, rng)
    }

    pub fn non_synonymous<R: Rng + ?Sized>(
        &self,
        codon: Codon,
        rng: &mut R,
    ) -> Result<Codon, MutationError> {
        self.mutate(MutationClass::NonSynonymous, codon, rng)
    }

    pub fn two_base<R: Rng + ?Sized>(&self, codon: Codon, rng: &mut R) -> Result<Codon, MutationError> {
        self.mutate(MutationClass::TwoBase, codon, rng)
    }

    pub fn three_base<R: Rng + ?Sized>(&self, codon: Codon, rng: &mut R) -> Result<Codon, MutationError> {
        self.mutate(MutationClass::ThreeBase, codon, rng)
    }
}
