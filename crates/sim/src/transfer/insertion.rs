//! Multi-point random insertion.
//!
//! `k` donors are placed at `k` distinct interior offsets of the recipient.
//! The offsets are sorted, so the i-th donor always lands at the i-th
//! smallest offset and the recipient is cut into `k + 1` non-empty segments:
//!
//! ```text
//! seg0 | term donor0 term | seg1 | term donor1 term | ... | segk
//! ```

use crate::base::{Nucleotide, Sequence, SequenceRecord};
use crate::errors::InsertionError;
use crate::sampling::sample_distinct;
use log::debug;
use rand::Rng;
use serde::Serialize;

/// Where one donor ended up inside a composite.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InsertionSite {
    pub donor_id: String,
    /// Cut position in the original recipient.
    pub offset: usize,
    /// 0-based start of the donor body in the composite, terminators excluded.
    pub start: usize,
    /// 0-based exclusive end of the donor body in the composite.
    pub end: usize,
}

/// A recipient with donors spliced in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Composite {
    pub sequence: Sequence,
    /// Sites in ascending offset order, which is also donor input order.
    pub sites: Vec<InsertionSite>,
}

/// Inserts donors at random interior offsets, flanked by a terminator.
#[derive(Debug, Clone)]
pub struct RandomInsertionEngine {
    terminator: Sequence,
}

impl RandomInsertionEngine {
    pub fn new(terminator: Sequence) -> Self {
        Self { terminator }
    }

    pub fn terminator(&self) -> &Sequence {
        &self.terminator
    }

    /// Splice `donors` into `recipient` at freshly drawn offsets.
    ///
    /// # Errors
    /// `TooManyInsertions` when `donors.len() >= recipient.len()`.
    pub fn insert<R: Rng + ?Sized>(
        &self,
        recipient: &Sequence,
        donors: &[&SequenceRecord],
        rng: &mut R,
    ) -> Result<Composite, InsertionError> {
        let too_many = InsertionError::TooManyInsertions {
            donors: donors.len(),
            recipient_len: recipient.len(),
        };
        let mut offsets = sample_distinct(rng, 1..recipient.len(), donors.len()).ok_or(too_many)?;
        offsets.sort_unstable();
        debug!("insertion offsets {offsets:?}");
        splice(recipient, donors, &offsets, &self.terminator)
    }
}

/// Deterministic splice at explicit offsets.
///
/// # Errors
/// `InvalidOffsets` unless there is one offset per donor and the offsets
/// are strictly increasing within `1..recipient.len()`.
pub fn splice(
    recipient: &Sequence,
    donors: &[&SequenceRecord],
    offsets: &[usize],
    terminator: &Sequence,
) -> Result<Composite, InsertionError> {
    if offsets.len() != donors.len() {
        return Err(InsertionError::InvalidOffsets(format!(
            "{} offsets for {} donors",
            offsets.len(),
            donors.len()
        )));
    }
    let len = recipient.len();
    let mut previous = 0;
    for &offset in offsets {
        if offset <= previous || offset >= len {
            return Err(InsertionError::InvalidOffsets(format!(
                "offset {offset} is not strictly increasing inside 1..{len}"
            )));
        }
        previous = offset;
    }

    let recipient = recipient.as_slice();
    let terminator = terminator.as_slice();
    let extra: usize = donors
        .iter()
        .map(|d| d.sequence.len() + 2 * terminator.len())
        .sum();
    let mut bases: Vec<Nucleotide> = Vec::with_capacity(len + extra);
    let mut sites = Vec::with_capacity(donors.len());

    let mut cut = 0;
    for (donor, &offset) in donors.iter().zip(offsets) {
        bases.extend_from_slice(&recipient[cut..offset]);
        bases.extend_from_slice(terminator);
        let start = bases.len();
        bases.extend_from_slice(donor.sequence.as_slice());
        sites.push(InsertionSite {
            donor_id: donor.id.clone(),
            offset,
            start,
            end: bases.len(),
        });
        bases.extend_from_slice(terminator);
        cut = offset;
    }
    bases.extend_from_slice(&recipient[cut..]);

    Ok(Composite {
        sequence: Sequence::from_nucleotides(bases),
        sites,
    })
}
