//! Utility functions for analysis module

use crate::analysis::AnalysisError;

/// Count positions at which `a` and `b` differ.
///
/// Both slices must have the same length.
#[inline]
pub fn mismatches<T: PartialEq>(a: &[T], b: &[T]) -> Result<usize, AnalysisError> {
    if a.len() != b.len() {
        return Err(AnalysisError::LengthMismatch {
            original: a.len(),
            mutant: b.len(),
        });
    }
    Ok(a.iter().zip(b).filter(|(x, y)| x != y).count())
}

/// Percent of equal positions; two empty slices are identical.
pub fn positional_identity<T: PartialEq>(a: &[T], b: &[T]) -> Result<f64, AnalysisError> {
    let diff = mismatches(a, b)?;
    if a.is_empty() {
        return Ok(100.0);
    }
    Ok(100.0 * (a.len() - diff) as f64 / a.len() as f64)
}
