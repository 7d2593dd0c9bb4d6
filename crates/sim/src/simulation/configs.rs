//! Simulation configuration.
//!
//! A [`Configuration`] fully describes a run apart from its input files. It
//! is written next to the outputs, with the seed that was actually used, so
//! any run can be repeated from that file.

use crate::base::Sequence;
use crate::errors::InputError;
use crate::evolution::RatioSpec;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::str::FromStr;

/// Terminator placed before and after every inserted donor.
pub const DEFAULT_TERMINATOR: &str = "TAGATGAGTGATTAGTTAGTTA";
/// Extension of recipient genome files.
pub const DEFAULT_EXTENSION: &str = "fna";

/// The master configuration struct.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Configuration {
    pub mutation: MutationConfig,
    #[serde(default)]
    pub transfer: TransferConfig,
    /// Optional RNG seed for reproducibility
    #[serde(default)]
    pub seed: Option<u64>,
}

/// Mutation stage parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MutationConfig {
    /// Target identity in percent
    pub identity: u8,
    #[serde(default)]
    pub ratio: RatioSpec,
}

/// Which version of a donor gets inserted into recipients.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum InsertSource {
    #[default]
    Mutant,
    Original,
}

/// Insertion stage parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferConfig {
    #[serde(default = "default_terminator")]
    pub terminator: String,
    #[serde(default)]
    pub source: InsertSource,
    #[serde(default = "default_extension")]
    pub extension: String,
}

fn default_terminator() -> String {
    DEFAULT_TERMINATOR.to_string()
}

fn default_extension() -> String {
    DEFAULT_EXTENSION.to_string()
}

impl Default for TransferConfig {
    fn default() -> Self {
        Self {
            terminator: default_terminator(),
            source: InsertSource::default(),
            extension: default_extension(),
        }
    }
}

impl TransferConfig {
    /// Parsed terminator.
    pub fn terminator_sequence(&self) -> Result<Sequence, InputError> {
        Sequence::from_str(&self.terminator)
            .map_err(|e| InputError::Validation(format!("Terminator: {e}")))
    }
}

impl Configuration {
    pub fn new(identity: u8, ratio: RatioSpec) -> Self {
        Self {
            mutation: MutationConfig { identity, ratio },
            transfer: TransferConfig::default(),
            seed: None,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Load and validate a JSON configuration file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, InputError> {
        let text = fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json_string(&self) -> Result<String, InputError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check identity range, ratio, terminator and extension.
    pub fn validate(&self) -> Result<(), InputError> {
        if self.mutation.identity > 100 {
            return Err(InputError::Validation(format!(
                "Identity must be between 0 and 100, got {}",
                self.mutation.identity
            )));
        }
        if self.mutation.ratio.is_degenerate() {
            return Err(InputError::Validation(format!(
                "Mutation ratio {} has no non-zero component",
                self.mutation.ratio
            )));
        }
        self.transfer.terminator_sequence()?;
        if self.transfer.extension.is_empty() {
            return Err(InputError::Validation(
                "Recipient file extension must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_minimal_json_gets_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, r#"{{"mutation": {{"identity": 80}}}}"#).unwrap();
        let config = Configuration::from_json_file(file.path()).unwrap();
        assert_eq!(config.mutation.identity, 80);
        assert_eq!(config.mutation.ratio, RatioSpec::new(1, 0, 1, 1));
        assert_eq!(config.transfer.terminator, DEFAULT_TERMINATOR);
        assert_eq!(config.transfer.extension, "fna");
        assert_eq!(config.transfer.source, InsertSource::Mutant);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_json_round_trip_keeps_seed() {
        let config = Configuration::new(75, RatioSpec::new(0, 1, 2, 3)).with_seed(99);
        let json = config.to_json_string().unwrap();
        assert!(json.contains("\"0-1-2-3\""));
        let back: Configuration = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut config = Configuration::new(101, RatioSpec::default());
        assert!(config.validate().is_err());

        config.mutation.identity = 90;
        config.mutation.ratio = RatioSpec::new(0, 0, 0, 0);
        assert!(config.validate().is_err());

        config.mutation.ratio = RatioSpec::default();
        config.transfer.terminator = "TAGN".to_string();
        assert!(config.validate().is_err());

        config.transfer.terminator = DEFAULT_TERMINATOR.to_string();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_bad_ratio_in_json_is_parse_error() {
        let err = serde_json::from_str::<Configuration>(
            r#"{"mutation": {"identity": 80, "ratio": "1-1"}}"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("1-1"));
    }
}
