use super::Nucleotide;
use crate::codon::Codon;
use crate::errors::InvalidSequence;
use std::fmt;
use std::str::FromStr;

/// Immutable nucleotide sequence.
///
/// A `Sequence` is never edited in place: the mutation and insertion engines
/// read one and produce a new one. Its length need not be a multiple of
/// three; the codon view ([`Sequence::codons`]) stops at the last full codon
/// and the leftover bases are available through [`Sequence::trailing`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Sequence(Vec<Nucleotide>);

impl Sequence {
    /// Create a `Sequence` from a vector of `Nucleotide`s.
    ///
    /// ```rust
    /// # use hgtsim_sim::base::{Nucleotide, Sequence};
    /// let seq = Sequence::from_nucleotides(vec![Nucleotide::A, Nucleotide::T, Nucleotide::G]);
    /// assert_eq!(seq.to_string(), "ATG");
    /// ```
    pub fn from_nucleotides(nucleotides: Vec<Nucleotide>) -> Self {
        Self(nucleotides)
    }

    /// Reassemble a sequence from full codons followed by the trailing bases.
    pub fn from_codons(codons: &[Codon], trailing: &[Nucleotide]) -> Self {
        let mut data = Vec::with_capacity(codons.len() * 3 + trailing.len());
        for codon in codons {
            data.extend_from_slice(codon.bases());
        }
        data.extend_from_slice(trailing);
        Self(data)
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[inline]
    pub fn as_slice(&self) -> &[Nucleotide] {
        &self.0
    }

    /// Number of complete codons.
    #[inline]
    pub fn codon_count(&self) -> usize {
        self.0.len() / 3
    }

    /// Iterate over the non-overlapping codons at offsets 0, 3, 6, ...
    pub fn codons(&self) -> impl ExactSizeIterator<Item = Codon> + '_ {
        self.0
            .chunks_exact(3)
            .map(|chunk| Codon::new(chunk[0], chunk[1], chunk[2]))
    }

    /// Bases after the last complete codon (zero, one or two of them).
    #[inline]
    pub fn trailing(&self) -> &[Nucleotide] {
        &self.0[self.codon_count() * 3..]
    }
}

impl From<Vec<Nucleotide>> for Sequence {
    fn from(nucleotides: Vec<Nucleotide>) -> Self {
        Self(nucleotides)
    }
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text: String = self.0.iter().map(|n| n.to_char()).collect();
        f.write_str(&text)
    }
}

impl FromStr for Sequence {
    type Err = InvalidSequence;

    /// Parse text such as `"ACGT"` (any case) into a `Sequence`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.chars()
            .enumerate()
            .map(|(position, c)| {
                u8::try_from(c)
                    .ok()
                    .and_then(Nucleotide::from_ascii)
                    .ok_or(InvalidSequence::InvalidChar { position, found: c })
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequence_from_str_lowercase() {
        let seq = Sequence::from_str("acgt").unwrap();
        assert_eq!(seq.len(), 4);
        assert_eq!(seq.to_string(), "ACGT");
    }

    #[test]
    fn test_sequence_from_str_reports_position() {
        let err = Sequence::from_str("ACNT").unwrap_err();
        assert_eq!(
            err,
            InvalidSequence::InvalidChar {
                position: 2,
                found: 'N'
            }
        );
        assert!(Sequence::from_str("AC\u{e9}").is_err());
    }

    #[test]
    fn test_empty_sequence() {
        let seq = Sequence::from_str("").unwrap();
        assert!(seq.is_empty());
        assert_eq!(seq.codon_count(), 0);
        assert!(seq.trailing().is_empty());
    }

    #[test]
    fn test_codon_view_leaves_partial_codon() {
        let seq = Sequence::from_str("ATGAAACC").unwrap();
        let codons: Vec<String> = seq.codons().map(|c| c.to_string()).collect();
        assert_eq!(codons, vec!["ATG", "AAA"]);
        assert_eq!(seq.trailing(), &[Nucleotide::C, Nucleotide::C]);
    }

    #[test]
    fn test_from_codons_reassembles_original() {
        let seq = Sequence::from_str("ATGGCCTTTA").unwrap();
        let codons: Vec<Codon> = seq.codons().collect();
        let rebuilt = Sequence::from_codons(&codons, seq.trailing());
        assert_eq!(rebuilt, seq);
    }
}
