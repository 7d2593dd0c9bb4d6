use anyhow::{Context, Result};
use hgtsim_sim::simulation::{MutationBatch, Simulation, parse_fasta};
use std::path::PathBuf;

use crate::args::{MutateArgs, MutationArgs, OutputArgs};
use crate::printing::{print_mutation_parameters, print_mutation_summary};
use crate::utils::{
    prepare_output_folder, progress_bar, resolve_config, write_config, write_mutation_outputs,
};

pub fn mutate_donors(args: &MutateArgs) -> Result<()> {
    println!("🧬 HgtSIM - Mutating Donor Genes");
    println!("============================================");

    let config = resolve_config(&args.mutation, args.config.as_deref(), args.output.seed)?;
    config.validate()?;

    let mut sim = Simulation::new(config);
    let folder = output_folder(&args.output, &sim);
    print_mutation_parameters(&sim.resolved_config());

    prepare_output_folder(&folder)?;
    let batch = run_mutation(&mut sim, &args.mutation, &args.output)?;
    write_mutation_outputs(&folder, &batch, sim.config())?;
    write_config(&folder, &sim.resolved_config())?;

    print_mutation_summary(&batch);
    println!("\n✓ Results written to {}", folder.display());
    Ok(())
}

/// `outputs_<identity>_<ratio>` under the output directory.
pub fn output_folder(output: &OutputArgs, sim: &Simulation) -> PathBuf {
    let mutation = sim.config().mutation;
    output
        .output_dir
        .join(format!("outputs_{}_{}", mutation.identity, mutation.ratio))
}

/// Read the donor genes and mutate them, with an optional progress bar.
pub fn run_mutation(
    sim: &mut Simulation,
    mutation: &MutationArgs,
    output: &OutputArgs,
) -> Result<MutationBatch> {
    let donors = parse_fasta(&mutation.genes)
        .with_context(|| format!("Failed to read donor genes {}", mutation.genes.display()))?;
    println!("\n📂 Loaded {} donor genes", donors.len());

    let pb = progress_bar(donors.len(), output.progress)?;
    let batch = sim.mutate_donors_with(&donors, || {
        if let Some(pb) = &pb {
            pb.inc(1);
        }
    })?;
    if let Some(pb) = pb {
        pb.finish_with_message("Done");
    }
    Ok(batch)
}
