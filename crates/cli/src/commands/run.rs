use anyhow::{Context, Result};
use hgtsim_sim::simulation::{InsertSource, Simulation, TransferProfile};

use crate::args::RunArgs;
use crate::commands::insert::run_transfer;
use crate::commands::mutate::{output_folder, run_mutation};
use crate::printing::{
    print_mutation_parameters, print_mutation_summary, print_transfer_parameters,
    print_transfer_summary,
};
use crate::utils::{
    apply_transfer_args, prepare_output_folder, resolve_config, write_config,
    write_mutation_outputs,
};

pub fn run_pipeline(args: &RunArgs) -> Result<()> {
    println!("🧬 HgtSIM - Running Simulation");
    println!("============================================");

    let mut config = resolve_config(&args.mutation, args.config.as_deref(), args.output.seed)?;
    apply_transfer_args(&mut config, &args.transfer);
    if args.insert_original {
        config.transfer.source = InsertSource::Original;
    }
    config.validate()?;

    let profile = TransferProfile::from_file(&args.transfer.profile).with_context(|| {
        format!("Failed to read transfer profile {}", args.transfer.profile.display())
    })?;

    let mut sim = Simulation::new(config);
    let folder = output_folder(&args.output, &sim);
    let resolved = sim.resolved_config();
    print_mutation_parameters(&resolved);
    print_transfer_parameters(&resolved);

    prepare_output_folder(&folder)?;

    let batch = run_mutation(&mut sim, &args.mutation, &args.output)?;
    write_mutation_outputs(&folder, &batch, sim.config())?;
    print_mutation_summary(&batch);

    let donors = batch.insertion_donors(sim.config().transfer.source);
    let transfers = run_transfer(&mut sim, &profile, &donors, &args.transfer, &args.output, &folder)?;
    print_transfer_summary(&transfers);

    write_config(&folder, &resolved)?;
    println!("\n✓ Results written to {}", folder.display());
    Ok(())
}
