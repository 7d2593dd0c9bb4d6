//! Converting a target identity and a mutation-type ratio into per-class
//! codon counts.
//!
//! The allocator works in base pairs. Each class has a fixed base cost
//! (same-sense 1, non-synonymous 1, two-base 2, three-base 3) and the counts
//! it returns always spend the budget exactly:
//!
//! ```text
//! n0 * 1 + n1 * 1 + n2 * 2 + n3 * 3 == budget
//! ```
//!
//! The same-sense class is the remainder sink. Whatever the integer
//! division of the budget by the ratio's unit cost leaves over, together
//! with the nominal same-sense share itself, is assigned to same-sense
//! edits. A ratio of `0-1-1-1` can therefore still yield same-sense edits.

use crate::errors::{MutationError, RatioParseError};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Relative proportions of the four mutation classes, written `r0-r1-r2-r3`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RatioSpec {
    pub same_sense: u32,
    pub non_synonymous: u32,
    pub two_base: u32,
    pub three_base: u32,
}

impl RatioSpec {
    pub const fn new(same_sense: u32, non_synonymous: u32, two_base: u32, three_base: u32) -> Self {
        Self {
            same_sense,
            non_synonymous,
            two_base,
            three_base,
        }
    }

    /// Base pairs spent by one multiple of the ratio.
    pub const fn unit_cost(&self) -> u64 {
        self.same_sense as u64
            + self.non_synonymous as u64
            + 2 * self.two_base as u64
            + 3 * self.three_base as u64
    }

    pub const fn is_degenerate(&self) -> bool {
        self.unit_cost() == 0
    }
}

impl Default for RatioSpec {
    fn default() -> Self {
        Self::new(1, 0, 1, 1)
    }
}

impl fmt::Display for RatioSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}-{}-{}-{}",
            self.same_sense, self.non_synonymous, self.two_base, self.three_base
        )
    }
}

impl FromStr for RatioSpec {
    type Err = RatioParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<u32> = s
            .trim()
            .split('-')
            .map(|p| p.trim().parse::<u32>())
            .collect::<Result<_, _>>()
            .map_err(|_| RatioParseError(s.to_string()))?;
        match parts.as_slice() {
            &[r0, r1, r2, r3] => Ok(Self::new(r0, r1, r2, r3)),
            _ => Err(RatioParseError(s.to_string())),
        }
    }
}

impl Serialize for RatioSpec {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for RatioSpec {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}

/// Number of codons assigned to each mutation class.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ClassCounts {
    pub same_sense: usize,
    pub non_synonymous: usize,
    pub two_base: usize,
    pub three_base: usize,
}

impl ClassCounts {
    /// Codons touched.
    pub fn total_codons(&self) -> usize {
        self.same_sense + self.non_synonymous + self.two_base + self.three_base
    }

    /// Bases edited, weighting each class by its base cost.
    pub fn total_bases(&self) -> usize {
        self.same_sense + self.non_synonymous + 2 * self.two_base + 3 * self.three_base
    }
}

/// Base pairs to edit so that `length` bases end up at `target_identity`
/// percent identity: `floor(length * (100 - target_identity) / 100)`.
pub fn mutation_budget(length: usize, target_identity: u8) -> Result<usize, MutationError> {
    if target_identity > 100 {
        return Err(MutationError::InvalidIdentity(target_identity));
    }
    Ok(length * (100 - target_identity as usize) / 100)
}

/// Split `total_budget` base pairs across the four classes.
///
/// # Errors
/// `DegenerateRatio` when every ratio component is zero.
pub fn allocate(total_budget: usize, ratio: &RatioSpec) -> Result<ClassCounts, MutationError> {
    let unit_cost = ratio.unit_cost();
    if unit_cost == 0 {
        return Err(MutationError::DegenerateRatio);
    }
    let steps = (total_budget as u64 / unit_cost) as usize;

    let non_synonymous = ratio.non_synonymous as usize * steps;
    let two_base = ratio.two_base as usize * steps;
    let three_base = ratio.three_base as usize * steps;
    // Never underflows: the three terms spend at most steps * unit_cost <= budget.
    let same_sense = total_budget - non_synonymous - two_base * 2 - three_base * 3;

    Ok(ClassCounts {
        same_sense,
        non_synonymous,
        two_base,
        three_base,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_ratio_scenario() {
        // unit cost 6, one step, remainder 5 goes to same-sense
        let counts = allocate(10, &RatioSpec::new(1, 0, 1, 1)).unwrap();
        assert_eq!(
            counts,
            ClassCounts {
                same_sense: 5,
                non_synonymous: 0,
                two_base: 1,
                three_base: 1
            }
        );
        assert_eq!(counts.total_bases(), 10);
        assert_eq!(counts.total_codons(), 7);
    }

    #[test]
    fn test_budget_below_unit_cost_is_all_same_sense() {
        let counts = allocate(4, &RatioSpec::new(0, 2, 3, 4)).unwrap();
        assert_eq!(counts.same_sense, 4);
        assert_eq!(counts.non_synonymous + counts.two_base + counts.three_base, 0);
    }

    #[test]
    fn test_zero_budget() {
        let counts = allocate(0, &RatioSpec::default()).unwrap();
        assert_eq!(counts, ClassCounts::default());
    }

    #[test]
    fn test_degenerate_ratio() {
        assert_eq!(
            allocate(10, &RatioSpec::new(0, 0, 0, 0)),
            Err(MutationError::DegenerateRatio)
        );
    }

    #[test]
    fn test_conservation_over_grid() {
        let ratios = [
            RatioSpec::new(1, 0, 1, 1),
            RatioSpec::new(0, 1, 0, 0),
            RatioSpec::new(0, 0, 0, 1),
            RatioSpec::new(3, 2, 1, 0),
            RatioSpec::new(0, 5, 7, 11),
            RatioSpec::new(9, 0, 0, 0),
        ];
        for ratio in &ratios {
            for budget in 0..500 {
                let counts = allocate(budget, ratio).unwrap();
                assert_eq!(counts.total_bases(), budget, "ratio {ratio} budget {budget}");
            }
        }
    }

    #[test]
    fn test_mutation_budget_floors() {
        assert_eq!(mutation_budget(1000, 90).unwrap(), 100);
        assert_eq!(mutation_budget(999, 90).unwrap(), 99);
        assert_eq!(mutation_budget(15, 90).unwrap(), 1);
        assert_eq!(mutation_budget(9, 90).unwrap(), 0);
        assert_eq!(mutation_budget(300, 100).unwrap(), 0);
        assert_eq!(mutation_budget(300, 0).unwrap(), 300);
        assert_eq!(
            mutation_budget(300, 101),
            Err(MutationError::InvalidIdentity(101))
        );
    }

    #[test]
    fn test_ratio_parse_and_display() {
        let ratio: RatioSpec = "2-1-0-3".parse().unwrap();
        assert_eq!(ratio, RatioSpec::new(2, 1, 0, 3));
        assert_eq!(ratio.to_string(), "2-1-0-3");
        assert_eq!(ratio.unit_cost(), 2 + 1 + 9);
    }

    #[test]
    fn test_ratio_parse_rejects_malformed() {
        for bad in ["1-0-1", "1-0-1-1-1", "a-0-1-1", "-1-0-1-1", "", "1--1-1"] {
            assert!(bad.parse::<RatioSpec>().is_err(), "{bad:?}");
        }
    }

    #[test]
    fn test_ratio_serde_as_string() {
        let json = serde_json::to_string(&RatioSpec::new(1, 0, 1, 1)).unwrap();
        assert_eq!(json, "\"1-0-1-1\"");
        let back: RatioSpec = serde_json::from_str("\"0-1-2-3\"").unwrap();
        assert_eq!(back, RatioSpec::new(0, 1, 2, 3));
        assert!(serde_json::from_str::<RatioSpec>("\"nope\"").is_err());
    }
}
