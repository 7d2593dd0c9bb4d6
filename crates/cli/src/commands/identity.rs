use anyhow::{Context, Result};
use hgtsim_analysis::{IdentityRow, compare_collections, identity_table};
use hgtsim_sim::simulation::parse_fasta;
use std::path::Path;

pub fn show_identity(original: &Path, mutant: &Path) -> Result<()> {
    let originals = parse_fasta(original)
        .with_context(|| format!("Failed to read {}", original.display()))?;
    let mutants =
        parse_fasta(mutant).with_context(|| format!("Failed to read {}", mutant.display()))?;
    let rows: Vec<IdentityRow> = compare_collections(&originals, &mutants)?
        .into_iter()
        .map(IdentityRow::from)
        .collect();
    print!("{}", identity_table(&rows));
    Ok(())
}
