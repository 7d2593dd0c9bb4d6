use clap::Args;
use hgtsim_sim::evolution::RatioSpec;
use std::path::PathBuf;

use crate::defaults;

/// Mutation stage options.
#[derive(Args, Debug)]
pub struct MutationArgs {
    /// Genes to transfer (multi-FASTA)
    #[arg(short = 't', long = "transfers")]
    pub genes: PathBuf,

    /// Identity between input and mutant sequences, in percent
    ///
    /// Required unless given by --config.
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(0..=100))]
    pub identity: Option<u8>,

    /// Ratio of mutation types: same-sense, non-same-sense, two-base, three-base
    ///
    /// Defaults to 1-0-1-1.
    #[arg(short, long)]
    pub ratio: Option<RatioSpec>,
}

/// Insertion stage options.
#[derive(Args, Debug)]
pub struct TransferArgs {
    /// Transfer profile: one line per recipient, `recipient,donor1,donor2,...`
    #[arg(short = 'd', long)]
    pub profile: PathBuf,

    /// Folder holding recipient genomes as `<id>.<extension>`
    ///
    /// Genomes must contain only A, C, G, T (any case); a genome with N or
    /// other ambiguity codes is skipped and gets no composite.
    #[arg(short = 'f', long)]
    pub recipients: PathBuf,

    /// Extension of recipient genome files (default: fna)
    #[arg(short = 'x', long)]
    pub extension: Option<String>,

    /// Transcription terminator flanking every insertion
    #[arg(short = 's', long)]
    pub terminator: Option<String>,
}

/// Options shared by every command that writes results.
#[derive(Args, Debug)]
pub struct OutputArgs {
    /// Directory in which the output folder is created
    #[arg(short, long, default_value = defaults::OUTPUT_DIR)]
    pub output_dir: PathBuf,

    /// Random seed (default: drawn from entropy and recorded in config.json)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Show progress bars
    #[arg(long)]
    pub progress: bool,
}

#[derive(Args, Debug)]
pub struct RunArgs {
    #[command(flatten)]
    pub mutation: MutationArgs,

    #[command(flatten)]
    pub transfer: TransferArgs,

    /// Insert the original donors instead of their mutants
    #[arg(long)]
    pub insert_original: bool,

    /// JSON configuration file; command-line flags override its values
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Args, Debug)]
pub struct MutateArgs {
    #[command(flatten)]
    pub mutation: MutationArgs,

    /// JSON configuration file; command-line flags override its values
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Args, Debug)]
pub struct InsertArgs {
    /// Sequences to insert (multi-FASTA)
    #[arg(short = 't', long = "transfers")]
    pub genes: PathBuf,

    #[command(flatten)]
    pub transfer: TransferArgs,

    #[command(flatten)]
    pub output: OutputArgs,
}
