//! Reading and writing sequences in FASTA format.
//!
//! Donor collections are multi-record FASTA files; recipients are single
//! genomes stored one per file as `<folder>/<id>.<extension>`. Only the first
//! word of a header is kept as the record id.

use crate::base::{Sequence, SequenceRecord};
use crate::errors::InputError;
use std::collections::HashSet;
use std::fs::{self, File};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Residues per line in written FASTA files.
pub const FASTA_LINE_WIDTH: usize = 60;

/// Parse a FASTA file into records.
///
/// # Example
///
/// ```text
/// >geneA some description
/// ATGAAA
/// CCCTAA
/// >geneB
/// ATGGGGTGA
/// ```
pub fn parse_fasta(path: impl AsRef<Path>) -> Result<Vec<SequenceRecord>, InputError> {
    let file = File::open(path)?;
    parse_fasta_reader(BufReader::new(file))
}

/// Parse FASTA text held in memory.
pub fn parse_fasta_str(input: &str) -> Result<Vec<SequenceRecord>, InputError> {
    parse_fasta_reader(input.as_bytes())
}

fn parse_fasta_reader(reader: impl BufRead) -> Result<Vec<SequenceRecord>, InputError> {
    let mut records = Vec::new();
    let mut seen = HashSet::new();
    let mut current_id: Option<String> = None;
    let mut current_seq = String::new();

    for line in reader.lines() {
        let line = line?;
        let line = line.trim();

        if line.is_empty() {
            continue;
        }

        if let Some(header) = line.strip_prefix('>') {
            if let Some(id) = current_id.take() {
                records.push(finish_record(id, &current_seq)?);
                current_seq.clear();
            }

            let id = header
                .split_whitespace()
                .next()
                .ok_or_else(|| InputError::Parse("Empty FASTA header".to_string()))?;
            if !seen.insert(id.to_string()) {
                return Err(InputError::Validation(format!(
                    "Duplicate sequence id '{id}'"
                )));
            }
            current_id = Some(id.to_string());
        } else if current_id.is_some() {
            current_seq.push_str(line);
        } else {
            return Err(InputError::Parse(
                "Sequence data before the first FASTA header".to_string(),
            ));
        }
    }

    if let Some(id) = current_id {
        records.push(finish_record(id, &current_seq)?);
    }

    if records.is_empty() {
        return Err(InputError::Parse(
            "No sequences found in FASTA input".to_string(),
        ));
    }

    Ok(records)
}

fn finish_record(id: String, text: &str) -> Result<SequenceRecord, InputError> {
    if text.is_empty() {
        return Err(InputError::Validation(format!("Sequence '{id}' is empty")));
    }
    let sequence = Sequence::from_str(text)
        .map_err(|e| InputError::Validation(format!("Sequence '{id}': {e}")))?;
    Ok(SequenceRecord::new(id, sequence))
}

/// Path of the genome file for `id` inside `folder`.
pub fn recipient_path(folder: impl AsRef<Path>, id: &str, extension: &str) -> PathBuf {
    folder.as_ref().join(format!("{id}.{extension}"))
}

/// Read the recipient genome `<folder>/<id>.<extension>`.
///
/// The first record of the file is used and renamed to `id`.
pub fn read_recipient(
    folder: impl AsRef<Path>,
    id: &str,
    extension: &str,
) -> Result<SequenceRecord, InputError> {
    let path = recipient_path(folder, id, extension);
    let mut records = parse_fasta(&path)?;
    let first = records.swap_remove(0);
    Ok(SequenceRecord::new(id, first.sequence))
}

/// Write `entries` as FASTA, wrapping residues at [`FASTA_LINE_WIDTH`].
pub fn write_fasta<W, I, S, T>(writer: W, entries: I) -> Result<(), InputError>
where
    W: Write,
    I: IntoIterator<Item = (S, T)>,
    S: AsRef<str>,
    T: AsRef<str>,
{
    let mut writer = BufWriter::new(writer);
    for (id, residues) in entries {
        writeln!(writer, ">{}", id.as_ref())?;
        let residues = residues.as_ref().as_bytes();
        for line in residues.chunks(FASTA_LINE_WIDTH) {
            writer.write_all(line)?;
            writer.write_all(b"\n")?;
        }
    }
    writer.flush()?;
    Ok(())
}

/// Create (or truncate) `path` and write `entries` to it.
pub fn write_fasta_file<I, S, T>(path: impl AsRef<Path>, entries: I) -> Result<(), InputError>
where
    I: IntoIterator<Item = (S, T)>,
    S: AsRef<str>,
    T: AsRef<str>,
{
    if let Some(parent) = path.as_ref().parent() {
        fs::create_dir_all(parent)?;
    }
    write_fasta(File::create(path)?, entries)
}
