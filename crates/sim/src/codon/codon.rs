use crate::base::Nucleotide;
use crate::errors::MutationError;
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Three nucleotides read at a 3-aligned offset; the unit of mutation.
///
/// Codons index the 64-entry code tables as `first * 16 + second * 4 + third`
/// with A=0, C=1, G=2, T=3.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Codon([Nucleotide; 3]);

impl Codon {
    pub const fn new(first: Nucleotide, second: Nucleotide, third: Nucleotide) -> Self {
        Self([first, second, third])
    }

    /// Build the codon with table index `idx` (0..64).
    pub fn from_index(idx: usize) -> Option<Self> {
        if idx >= 64 {
            return None;
        }
        Some(Self([
            Nucleotide::from_index((idx >> 4) as u8)?,
            Nucleotide::from_index(((idx >> 2) & 3) as u8)?,
            Nucleotide::from_index((idx & 3) as u8)?,
        ]))
    }

    #[inline]
    pub const fn index(self) -> usize {
        let [a, b, c] = self.0;
        (a.to_index() as usize) * 16 + (b.to_index() as usize) * 4 + c.to_index() as usize
    }

    #[inline]
    pub fn bases(&self) -> &[Nucleotide; 3] {
        &self.0
    }

    /// Positional Hamming distance (0 to 3).
    #[inline]
    pub fn hamming(self, other: Codon) -> usize {
        self.0
            .iter()
            .zip(other.0.iter())
            .filter(|(a, b)| a != b)
            .count()
    }

    /// All 64 codons in index order.
    pub fn all() -> impl Iterator<Item = Codon> {
        (0..64).filter_map(Codon::from_index)
    }
}

impl FromStr for Codon {
    type Err = MutationError;

    /// Parse three symbols from {A,C,G,T}, case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let unknown = || MutationError::UnknownCodon(s.to_string());
        let bytes = s.as_bytes();
        if bytes.len() != 3 {
            return Err(unknown());
        }
        let base = |b: u8| Nucleotide::from_ascii(b).ok_or_else(unknown);
        Ok(Self([base(bytes[0])?, base(bytes[1])?, base(bytes[2])?]))
    }
}

impl fmt::Display for Codon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c] = self.0;
        write!(f, "{a}{b}{c}")
    }
}

impl Serialize for Codon {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn codon(s: &str) -> Codon {
        Codon::from_str(s).unwrap()
    }

    #[test]
    fn test_index_round_trip() {
        for idx in 0..64 {
            let c = Codon::from_index(idx).unwrap();
            assert_eq!(c.index(), idx);
        }
        assert!(Codon::from_index(64).is_none());
        assert_eq!(Codon::all().count(), 64);
    }

    #[test]
    fn test_index_layout() {
        assert_eq!(codon("AAA").index(), 0);
        assert_eq!(codon("ATG").index(), 14);
        assert_eq!(codon("TTT").index(), 63);
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(codon("atg"), codon("ATG"));
        assert_eq!(codon("aTg").to_string(), "ATG");
    }

    #[test]
    fn test_parse_rejects_bad_length_and_symbols() {
        assert_eq!(
            Codon::from_str("AT"),
            Err(MutationError::UnknownCodon("AT".to_string()))
        );
        assert!(Codon::from_str("ATGC").is_err());
        assert!(Codon::from_str("AUG").is_err());
        assert!(Codon::from_str("ANG").is_err());
        assert!(Codon::from_str("").is_err());
    }

    #[test]
    fn test_hamming_is_positional() {
        assert_eq!(codon("AAA").hamming(codon("AAA")), 0);
        assert_eq!(codon("AAA").hamming(codon("AAG")), 1);
        assert_eq!(codon("AAA").hamming(codon("GAG")), 2);
        assert_eq!(codon("AAA").hamming(codon("CTG")), 3);
        // Rotation is not an alignment match
        assert_eq!(codon("ACG").hamming(codon("CGA")), 3);
    }

    #[test]
    fn test_serializes_as_text() {
        let json = serde_json::to_string(&codon("GCT")).unwrap();
        assert_eq!(json, "\"GCT\"");
    }
}
