use anyhow::{Context, Result, bail};
use hgtsim_analysis::{identity_table, summarize_batch};
use hgtsim_sim::base::SequenceRecord;
use hgtsim_sim::codon::STANDARD;
use hgtsim_sim::evolution::RatioSpec;
use hgtsim_sim::simulation::{
    Configuration, MutationBatch, RecipientTransfer, TransferProfile, mutation_report,
    read_recipient, write_fasta_file,
};
use indicatif::{ProgressBar, ProgressStyle};
use log::warn;
use serde_json::json;
use std::fs;
use std::path::Path;

use crate::args::{MutationArgs, TransferArgs};
use crate::defaults;

/// Remove `folder` if it exists, then create it empty.
pub fn prepare_output_folder(folder: &Path) -> Result<()> {
    if folder.is_dir() {
        fs::remove_dir_all(folder)
            .with_context(|| format!("Failed to remove {}", folder.display()))?;
    }
    fs::create_dir_all(folder).with_context(|| format!("Failed to create {}", folder.display()))
}

pub fn progress_bar(len: usize, show: bool) -> Result<Option<ProgressBar>> {
    if !show {
        return Ok(None);
    }
    let pb = ProgressBar::new(len as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta}) {msg}")?
            .progress_chars("#>-"),
    );
    Ok(Some(pb))
}

/// Load `--config` if given, then apply the mutation flags and seed.
pub fn resolve_config(
    mutation: &MutationArgs,
    config_path: Option<&Path>,
    seed: Option<u64>,
) -> Result<Configuration> {
    let mut config = match config_path {
        Some(path) => Configuration::from_json_file(path)
            .with_context(|| format!("Failed to load configuration {}", path.display()))?,
        None => {
            let Some(identity) = mutation.identity else {
                bail!("--identity is required unless --config is given");
            };
            Configuration::new(identity, RatioSpec::default())
        }
    };
    if let Some(identity) = mutation.identity {
        config.mutation.identity = identity;
    }
    if let Some(ratio) = mutation.ratio {
        config.mutation.ratio = ratio;
    }
    if seed.is_some() {
        config.seed = seed;
    }
    Ok(config)
}

/// Apply `--extension` and `--terminator` on top of `config`.
pub fn apply_transfer_args(config: &mut Configuration, args: &TransferArgs) {
    if let Some(extension) = &args.extension {
        config.transfer.extension = extension.clone();
    }
    if let Some(terminator) = &args.terminator {
        config.transfer.terminator = terminator.to_uppercase();
    }
}

pub fn write_config(folder: &Path, config: &Configuration) -> Result<()> {
    let path = folder.join(defaults::CONFIG_FILE);
    fs::write(&path, config.to_json_string()?)
        .with_context(|| format!("Failed to write {}", path.display()))
}

/// Write translated inputs, mutants and the simulation report.
pub fn write_mutation_outputs(folder: &Path, batch: &MutationBatch, config: &Configuration) -> Result<()> {
    let originals_aa = batch.donors.iter().map(|d| {
        (
            format!("{}_aa", d.original.id),
            STANDARD.translate_sequence(&d.original.sequence),
        )
    });
    write_fasta_file(folder.join(defaults::INPUT_AA_FILE), originals_aa)?;

    let mutants = batch.mutant_records();
    write_fasta_file(
        folder.join(defaults::MUTANT_NC_FILE),
        mutants.iter().map(|m| (m.id.clone(), m.sequence.to_string())),
    )?;
    write_fasta_file(
        folder.join(defaults::MUTANT_AA_FILE),
        mutants
            .iter()
            .map(|m| (format!("{}_aa", m.id), STANDARD.translate_sequence(&m.sequence))),
    )?;

    let rows = summarize_batch(batch).context("Failed to compute identities")?;
    let report = format!(
        "{}\n{}",
        identity_table(&rows),
        mutation_report(batch, &config.mutation.ratio)
    );
    let path = folder.join(defaults::REPORT_FILE);
    fs::write(&path, report).with_context(|| format!("Failed to write {}", path.display()))
}

/// Read the genome of every recipient in `profile`.
///
/// Unreadable recipients are logged and left out; the transfer stage then
/// reports them as missing.
pub fn read_recipients(profile: &TransferProfile, folder: &Path, extension: &str) -> Vec<SequenceRecord> {
    profile
        .entries()
        .iter()
        .filter_map(|entry| match read_recipient(folder, &entry.recipient, extension) {
            Ok(record) => Some(record),
            Err(e) => {
                warn!("Cannot read recipient '{}': {e}", entry.recipient);
                None
            }
        })
        .collect()
}

/// Write composite genomes and the insertion-site manifest.
pub fn write_transfer_outputs(
    folder: &Path,
    transfers: &[RecipientTransfer],
    extension: &str,
) -> Result<()> {
    let genomes = folder.join(defaults::GENOMES_FOLDER);
    fs::create_dir_all(&genomes)
        .with_context(|| format!("Failed to create {}", genomes.display()))?;

    let mut manifest = Vec::with_capacity(transfers.len());
    for transfer in transfers {
        match &transfer.result {
            Ok(composite) => {
                write_fasta_file(
                    genomes.join(format!("{}.{extension}", transfer.recipient)),
                    [(transfer.recipient.as_str(), composite.sequence.to_string())],
                )?;
                manifest.push(json!({
                    "recipient": transfer.recipient,
                    "length": composite.sequence.len(),
                    "sites": composite.sites,
                    "missing": transfer.missing,
                }));
            }
            Err(e) => manifest.push(json!({
                "recipient": transfer.recipient,
                "error": e.to_string(),
                "missing": transfer.missing,
            })),
        }
    }

    let path = folder.join(defaults::SITES_FILE);
    fs::write(&path, serde_json::to_string_pretty(&manifest)?)
        .with_context(|| format!("Failed to write {}", path.display()))
}
