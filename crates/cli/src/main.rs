mod args;
mod commands;
mod defaults;
mod printing;
mod utils;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use args::{InsertArgs, MutateArgs, RunArgs};
use commands::{identity, insert, mutate, run};

/// HgtSIM: simulate horizontal gene transfer
///
/// Mutates donor genes to a target identity, then inserts them at random
/// positions into recipient genomes, flanked by a transcription terminator.
#[derive(Parser, Debug)]
#[command(name = "hgtsim")]
#[command(author, version, about = "Simulates divergence and horizontal transfer of genes", long_about = None)]
struct Cli {
    /// Number of threads to use for parallel processing
    ///
    /// If not specified, defaults to the number of logical CPUs.
    #[arg(long, global = true)]
    threads: Option<usize>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the full pipeline: mutate donors, then insert them into recipients.
    Run(Box<RunArgs>),

    /// Mutate donors only and write mutants plus the simulation report.
    Mutate(MutateArgs),

    /// Insert the given sequences unchanged into recipients.
    Insert(InsertArgs),

    /// Print the identity table of mutants against their originals.
    Identity {
        /// Original sequences (multi-FASTA)
        #[arg(long)]
        original: PathBuf,

        /// Mutant sequences (multi-FASTA, same ids as the originals)
        #[arg(long)]
        mutant: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    if let Some(threads) = cli.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()?;
    }

    match cli.command {
        Commands::Run(args) => run::run_pipeline(&args)?,
        Commands::Mutate(args) => mutate::mutate_donors(&args)?,
        Commands::Insert(args) => insert::insert_donors(&args)?,
        Commands::Identity { original, mutant } => identity::show_identity(&original, &mutant)?,
    }

    Ok(())
}
