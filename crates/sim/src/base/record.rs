use super::Sequence;

/// A named sequence, as read from one FASTA entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequenceRecord {
    /// Identifier (first word of the FASTA header)
    pub id: String,
    pub sequence: Sequence,
}

impl SequenceRecord {
    pub fn new(id: impl Into<String>, sequence: Sequence) -> Self {
        Self {
            id: id.into(),
            sequence,
        }
    }
}
