use super::Codon;
use crate::base::Sequence;
use crate::errors::MutationError;
use std::str::FromStr;

/// Standard genetic code (NCBI table 1) indexed by [`Codon::index`].
#[rustfmt::skip]
const STANDARD_CODE: [u8; 64] = [
    b'K', b'N', b'K', b'N',  // AA*
    b'T', b'T', b'T', b'T',  // AC*
    b'R', b'S', b'R', b'S',  // AG*
    b'I', b'I', b'M', b'I',  // AT*
    b'Q', b'H', b'Q', b'H',  // CA*
    b'P', b'P', b'P', b'P',  // CC*
    b'R', b'R', b'R', b'R',  // CG*
    b'L', b'L', b'L', b'L',  // CT*
    b'E', b'D', b'E', b'D',  // GA*
    b'A', b'A', b'A', b'A',  // GC*
    b'G', b'G', b'G', b'G',  // GG*
    b'V', b'V', b'V', b'V',  // GT*
    b'*', b'Y', b'*', b'Y',  // TA*
    b'S', b'S', b'S', b'S',  // TC*
    b'*', b'C', b'W', b'C',  // TG*
    b'L', b'F', b'L', b'F',  // TT*
];

/// Indices never offered as replacements: the start-like codons ATG, CTG,
/// TTG and the stops TAA, TAG, TGA. The 58 remaining codons form the
/// ordinary pool.
const NON_CANDIDATE_INDICES: [usize; 6] = [14, 30, 62, 48, 50, 56];

/// The process-wide standard table.
pub static STANDARD: CodonTable = CodonTable::standard();

/// Codon to amino-acid lookup plus the pool of codons that may be written
/// into a sequence by a mutation.
///
/// Synonymous families are the groups of codons sharing an amino-acid
/// symbol; the three stops form one family.
#[derive(Debug, Clone)]
pub struct CodonTable {
    amino_acids: [u8; 64],
    candidates: [bool; 64],
}

impl CodonTable {
    pub const fn standard() -> Self {
        let mut candidates = [true; 64];
        let mut i = 0;
        while i < NON_CANDIDATE_INDICES.len() {
            candidates[NON_CANDIDATE_INDICES[i]] = false;
            i += 1;
        }
        Self {
            amino_acids: STANDARD_CODE,
            candidates,
        }
    }

    /// Copy of this table with `codons` removed from the replacement pool.
    pub fn without_candidates(mut self, codons: &[Codon]) -> Self {
        for codon in codons {
            self.candidates[codon.index()] = false;
        }
        self
    }

    /// Amino-acid symbol for `codon` (`*` for stops).
    #[inline]
    pub fn translate(&self, codon: Codon) -> char {
        self.amino_acids[codon.index()] as char
    }

    /// Translate codon text, failing with `UnknownCodon` for anything that
    /// is not three symbols from {A,C,G,T}.
    pub fn translate_str(&self, codon: &str) -> Result<char, MutationError> {
        Codon::from_str(codon).map(|c| self.translate(c))
    }

    /// Every other codon in the same synonymous family.
    pub fn synonyms_of(&self, codon: Codon) -> Vec<Codon> {
        let aa = self.amino_acids[codon.index()];
        Codon::all()
            .filter(|&other| other != codon && self.amino_acids[other.index()] == aa)
            .collect()
    }

    #[inline]
    pub fn is_synonymous(&self, a: Codon, b: Codon) -> bool {
        self.amino_acids[a.index()] == self.amino_acids[b.index()]
    }

    /// Whether `codon` is an ordinary codon that may be used as a replacement.
    #[inline]
    pub fn is_candidate(&self, codon: Codon) -> bool {
        self.candidates[codon.index()]
    }

    pub fn candidates(&self) -> impl Iterator<Item = Codon> + '_ {
        Codon::all().filter(|&c| self.is_candidate(c))
    }

    /// Translate every full codon of `sequence`; trailing bases are ignored.
    pub fn translate_sequence(&self, sequence: &Sequence) -> String {
        sequence.codons().map(|c| self.translate(c)).collect()
    }
}

impl Default for CodonTable {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn codon(s: &str) -> Codon {
        Codon::from_str(s).unwrap()
    }

    #[test]
    fn test_translate_known_codons() {
        assert_eq!(STANDARD.translate(codon("ATG")), 'M');
        assert_eq!(STANDARD.translate(codon("TGG")), 'W');
        assert_eq!(STANDARD.translate(codon("AAA")), 'K');
        assert_eq!(STANDARD.translate(codon("GCT")), 'A');
        assert_eq!(STANDARD.translate(codon("TGA")), '*');
        assert_eq!(STANDARD.translate(codon("AGT")), 'S');
    }

    #[test]
    fn test_translate_str_errors() {
        assert_eq!(STANDARD.translate_str("ttc"), Ok('F'));
        assert_eq!(
            STANDARD.translate_str("TTX"),
            Err(MutationError::UnknownCodon("TTX".to_string()))
        );
        assert!(STANDARD.translate_str("TT").is_err());
    }

    #[test]
    fn test_family_sizes() {
        let size = |s: &str| STANDARD.synonyms_of(codon(s)).len() + 1;
        assert_eq!(size("ATG"), 1);
        assert_eq!(size("TGG"), 1);
        assert_eq!(size("AAA"), 2);
        assert_eq!(size("ATT"), 3);
        assert_eq!(size("GCT"), 4);
        assert_eq!(size("CTT"), 6);
        assert_eq!(size("AGC"), 6);
        assert_eq!(size("TAA"), 3);
    }

    #[test]
    fn test_synonyms_exclude_self() {
        let syn = STANDARD.synonyms_of(codon("AAA"));
        assert_eq!(syn, vec![codon("AAG")]);
        assert!(STANDARD.synonyms_of(codon("ATG")).is_empty());
    }

    #[test]
    fn test_candidate_pool() {
        assert_eq!(STANDARD.candidates().count(), 58);
        for excluded in ["ATG", "CTG", "TTG", "TAA", "TAG", "TGA"] {
            assert!(!STANDARD.is_candidate(codon(excluded)), "{excluded}");
        }
        assert!(STANDARD.is_candidate(codon("GTG")));
        assert!(STANDARD.is_candidate(codon("TGG")));
    }

    #[test]
    fn test_without_candidates() {
        let table = CodonTable::standard().without_candidates(&[codon("AAG"), codon("GCT")]);
        assert_eq!(table.candidates().count(), 56);
        assert!(!table.is_candidate(codon("AAG")));
        // Translation is untouched
        assert_eq!(table.translate(codon("AAG")), 'K');
    }

    #[test]
    fn test_translate_sequence_ignores_partial_codon() {
        let seq = Sequence::from_str("ATGAAATGATT").unwrap();
        assert_eq!(STANDARD.translate_sequence(&seq), "MK*");
    }
}
