use anyhow::{Context, Result};
use hgtsim_sim::base::SequenceRecord;
use hgtsim_sim::simulation::{
    Configuration, InsertSource, RecipientTransfer, Simulation, TransferProfile, parse_fasta,
};
use std::path::Path;

use crate::args::{InsertArgs, OutputArgs, TransferArgs};
use crate::defaults;
use crate::printing::{print_transfer_parameters, print_transfer_summary};
use crate::utils::{
    apply_transfer_args, prepare_output_folder, progress_bar, read_recipients, write_config,
    write_transfer_outputs,
};

pub fn insert_donors(args: &InsertArgs) -> Result<()> {
    println!("🧬 HgtSIM - Inserting Genes");
    println!("============================================");

    // No mutation stage; identity 100 records that the genes are inserted as given.
    let mut config = Configuration::new(100, Default::default());
    config.seed = args.output.seed;
    config.transfer.source = InsertSource::Original;
    apply_transfer_args(&mut config, &args.transfer);
    config.validate()?;

    let donors = parse_fasta(&args.genes)
        .with_context(|| format!("Failed to read genes {}", args.genes.display()))?;
    let profile = TransferProfile::from_file(&args.transfer.profile).with_context(|| {
        format!("Failed to read transfer profile {}", args.transfer.profile.display())
    })?;

    let mut sim = Simulation::new(config);
    let folder = args.output.output_dir.join(defaults::INSERT_FOLDER);
    let resolved = sim.resolved_config();
    print_transfer_parameters(&resolved);

    prepare_output_folder(&folder)?;
    let transfers = run_transfer(&mut sim, &profile, &donors, &args.transfer, &args.output, &folder)?;
    print_transfer_summary(&transfers);

    write_config(&folder, &resolved)?;
    println!("\n✓ Results written to {}", folder.display());
    Ok(())
}

/// Read recipients, insert `donors` and write the composites under `folder`.
pub fn run_transfer(
    sim: &mut Simulation,
    profile: &TransferProfile,
    donors: &[SequenceRecord],
    transfer: &TransferArgs,
    output: &OutputArgs,
    folder: &Path,
) -> Result<Vec<RecipientTransfer>> {
    let extension = sim.config().transfer.extension.clone();
    let recipients = read_recipients(profile, &transfer.recipients, &extension);
    println!(
        "\n📂 Loaded {}/{} recipient genomes",
        recipients.len(),
        profile.len()
    );

    let pb = progress_bar(profile.len(), output.progress)?;
    let transfers = sim.transfer_all_with(profile, donors, &recipients, || {
        if let Some(pb) = &pb {
            pb.inc(1);
        }
    })?;
    if let Some(pb) = pb {
        pb.finish_with_message("Done");
    }

    write_transfer_outputs(folder, &transfers, &extension)?;
    Ok(transfers)
}
