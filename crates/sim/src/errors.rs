use std::error;
use std::fmt;

use crate::codon::Codon;
use crate::evolution::MutationClass;

/// Error returned when attempting to convert an invalid byte/character into
/// a `Nucleotide`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidNucleotide(pub u8);

impl fmt::Display for InvalidNucleotide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid nucleotide byte: {} ('{}')", self.0, self.0 as char)
    }
}

impl error::Error for InvalidNucleotide {}

/// Error type for failures when parsing a `Sequence`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidSequence {
    /// A character was not recognized as one of A, C, G, T (any case).
    InvalidChar { position: usize, found: char },
}

impl fmt::Display for InvalidSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidChar { position, found } => {
                write!(f, "Invalid character '{found}' at position {position}")
            }
        }
    }
}

impl error::Error for InvalidSequence {}

/// Errors raised while turning a donor gene into its mutant copy.
///
/// Every variant is a deterministic structural failure for the sequence
/// being processed; batch callers record it against the sequence id and
/// move on to the next one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MutationError {
    /// Codon text was not three symbols from {A,C,G,T}.
    UnknownCodon(String),
    /// The ratio has zero unit cost, so no allocation step exists.
    DegenerateRatio,
    /// No synonym of the codon lies exactly one base away.
    NoSynonymAvailable(Codon),
    /// The candidate pool for a class is empty for this codon.
    NoCandidateAvailable { codon: Codon, class: MutationClass },
    /// More codons were requested than the interior pool holds.
    InsufficientCodons { requested: usize, available: usize },
    /// Target identity outside 0..=100.
    InvalidIdentity(u8),
}

impl fmt::Display for MutationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownCodon(text) => write!(f, "Unknown codon '{text}'"),
            Self::DegenerateRatio => {
                write!(f, "Degenerate mutation ratio: at least one component must be non-zero")
            }
            Self::NoSynonymAvailable(codon) => {
                write!(f, "No synonymous codon one base away from {codon}")
            }
            Self::NoCandidateAvailable { codon, class } => {
                write!(f, "No candidate codon for {} of {codon}", class.label())
            }
            Self::InsufficientCodons {
                requested,
                available,
            } => write!(
                f,
                "Insufficient codons: {requested} requested but only {available} interior codons available"
            ),
            Self::InvalidIdentity(identity) => {
                write!(f, "Invalid target identity: {identity} (must be between 0 and 100)")
            }
        }
    }
}

impl error::Error for MutationError {}

/// Errors raised while splicing donors into a recipient sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InsertionError {
    /// Not enough distinct interior offsets for the donors.
    TooManyInsertions { donors: usize, recipient_len: usize },
    /// Explicit offsets were not strictly increasing interior positions,
    /// or their count did not match the donor count.
    InvalidOffsets(String),
}

impl fmt::Display for InsertionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooManyInsertions {
                donors,
                recipient_len,
            } => write!(
                f,
                "Too many insertions: {donors} donors for a recipient of length {recipient_len}"
            ),
            Self::InvalidOffsets(msg) => write!(f, "Invalid insertion offsets: {msg}"),
        }
    }
}

impl error::Error for InsertionError {}

/// Error returned when a mutation ratio string such as `1-0-1-1` is malformed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RatioParseError(pub String);

impl fmt::Display for RatioParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Invalid mutation ratio '{}': expected four non-negative integers such as 1-0-1-1",
            self.0
        )
    }
}

impl error::Error for RatioParseError {}

/// Errors reading donor collections, recipients, profiles or configuration.
#[derive(Debug)]
pub enum InputError {
    /// IO error
    Io(std::io::Error),
    /// Parse error
    Parse(String),
    /// Validation error
    Validation(String),
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "IO error: {e}"),
            Self::Parse(msg) => write!(f, "Parse error: {msg}"),
            Self::Validation(msg) => write!(f, "Validation error: {msg}"),
        }
    }
}

impl error::Error for InputError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for InputError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for InputError {
    fn from(e: serde_json::Error) -> Self {
        Self::Parse(format!("JSON error: {e}"))
    }
}

/// Errors raised while building the composite genome for one recipient.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransferError {
    /// The profile names a recipient that was not supplied.
    MissingRecipient(String),
    /// The insertion engine rejected the request.
    Insertion(InsertionError),
}

impl fmt::Display for TransferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingRecipient(id) => write!(f, "Recipient '{id}' not found"),
            Self::Insertion(e) => write!(f, "Insertion failed: {e}"),
        }
    }
}

impl error::Error for TransferError {}

impl From<InsertionError> for TransferError {
    fn from(e: InsertionError) -> Self {
        Self::Insertion(e)
    }
}
