//! Text of the mutation part of `simulation_report.txt`.
//!
//! Per donor, a header naming it, a summary block and one line per applied
//! edit:
//!
//! ```text
//!
//! geneA:
//! One point mutation (same-sense):	5
//! One point mutation (non-same-sense):	0
//! Two points mutation:	1
//! Three points mutation:	1
//! Length of input sequence (bp): 100
//! Mutation types ratio:	1-0-1-1	(One (same-sense) : One (non-same-sense) : Two : Three)
//! Total mutations (bp):	5 + 0 + (2 x 1) + (3 x 1) = 10
//! geneA	One point mutation (same-sense)	13-15bp	AAA(K)	AAG(K)
//! ```

use crate::evolution::{MutationClass, MutationOutcome, RatioSpec};
use crate::simulation::MutationBatch;
use std::fmt::Write;

/// Summary block for one donor; counts are those actually applied.
pub fn summary_block(outcome: &MutationOutcome, input_len: usize, ratio: &RatioSpec) -> String {
    let counts = &outcome.applied;
    let mut out = String::new();
    let per_class = [
        counts.same_sense,
        counts.non_synonymous,
        counts.two_base,
        counts.three_base,
    ];
    for (class, n) in MutationClass::ALL.into_iter().zip(per_class) {
        let _ = writeln!(out, "{}:\t{n}", class.label());
    }
    let _ = writeln!(out, "Length of input sequence (bp): {input_len}");
    let _ = writeln!(
        out,
        "Mutation types ratio:\t{ratio}\t(One (same-sense) : One (non-same-sense) : Two : Three)"
    );
    let _ = writeln!(
        out,
        "Total mutations (bp):\t{} + {} + (2 x {}) + (3 x {}) = {}",
        counts.same_sense,
        counts.non_synonymous,
        counts.two_base,
        counts.three_base,
        counts.total_bases()
    );
    out
}

/// Summary blocks and edit lines for every donor, in input order.
///
/// Every section opens with an `<id>:` line, so donors without edits are
/// still named. Failed donors get a single `Mutation failed: <error>` line.
pub fn mutation_report(batch: &MutationBatch, ratio: &RatioSpec) -> String {
    let mut out = String::new();
    for donor in &batch.donors {
        let _ = writeln!(out, "\n{}:", donor.original.id);
        match &donor.result {
            Ok(outcome) => {
                out.push_str(&summary_block(outcome, donor.original.sequence.len(), ratio));
                for edit in &outcome.edits {
                    let _ = writeln!(out, "{edit}");
                }
            }
            Err(e) => {
                let _ = writeln!(out, "Mutation failed: {e}");
            }
        }
        out.push('\n');
    }
    out
}
