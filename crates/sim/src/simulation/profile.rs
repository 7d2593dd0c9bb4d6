//! Transfer profiles: which donors go into which recipient.
//!
//! One line per recipient, comma separated, recipient id first:
//!
//! ```text
//! genome_1,geneA,geneC
//! genome_2,geneB
//! genome_3
//! ```

use crate::errors::InputError;
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use std::str::FromStr;

/// One profile line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferEntry {
    pub recipient: String,
    pub donors: Vec<String>,
}

/// Parsed transfer profile, in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransferProfile {
    entries: Vec<TransferEntry>,
}

impl TransferProfile {
    pub fn new(entries: Vec<TransferEntry>) -> Self {
        Self { entries }
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, InputError> {
        fs::read_to_string(path)?.parse()
    }

    pub fn entries(&self) -> &[TransferEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromStr for TransferProfile {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut entries = Vec::new();
        let mut recipients = HashSet::new();

        for (line_no, line) in s.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let mut fields = line.split(',').map(str::trim);
            let recipient = fields.next().unwrap_or_default();
            if recipient.is_empty() {
                return Err(InputError::Parse(format!(
                    "Profile line {}: missing recipient id",
                    line_no + 1
                )));
            }
            if !recipients.insert(recipient.to_string()) {
                return Err(InputError::Parse(format!(
                    "Profile line {}: recipient '{recipient}' listed twice",
                    line_no + 1
                )));
            }
            let donors = fields
                .filter(|f| !f.is_empty())
                .map(str::to_string)
                .collect();
            entries.push(TransferEntry {
                recipient: recipient.to_string(),
                donors,
            });
        }

        Ok(Self { entries })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_profile() {
        let profile: TransferProfile = "g1,a,b\n\n g2 , c \ng3\n".parse().unwrap();
        assert_eq!(profile.len(), 3);
        assert_eq!(profile.entries()[0].recipient, "g1");
        assert_eq!(profile.entries()[0].donors, vec!["a", "b"]);
        assert_eq!(profile.entries()[1].recipient, "g2");
        assert_eq!(profile.entries()[1].donors, vec!["c"]);
        assert!(profile.entries()[2].donors.is_empty());
    }

    #[test]
    fn test_trailing_comma_ignored() {
        let profile: TransferProfile = "g1,a,\r\n".parse().unwrap();
        assert_eq!(profile.entries()[0].donors, vec!["a"]);
    }

    #[test]
    fn test_duplicate_recipient_rejected() {
        let err = "g1,a\ng1,b\n".parse::<TransferProfile>().unwrap_err();
        assert!(err.to_string().contains("listed twice"));
    }

    #[test]
    fn test_missing_recipient_rejected() {
        assert!(",a,b\n".parse::<TransferProfile>().is_err());
    }

    #[test]
    fn test_empty_profile() {
        let profile: TransferProfile = "\n\n".parse().unwrap();
        assert!(profile.is_empty());
    }
}
