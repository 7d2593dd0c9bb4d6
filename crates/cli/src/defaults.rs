//! Shared default values for command-line arguments.

pub const OUTPUT_DIR: &str = ".";

/// Folder created by the `insert` command under the output directory.
pub const INSERT_FOLDER: &str = "outputs_insert";

pub const GENOMES_FOLDER: &str = "Genomes_with_transfers";
pub const CONFIG_FILE: &str = "config.json";
pub const REPORT_FILE: &str = "simulation_report.txt";
pub const SITES_FILE: &str = "insertion_sites.json";
pub const INPUT_AA_FILE: &str = "input_sequence_aa.fasta";
pub const MUTANT_NC_FILE: &str = "input_sequence_mutant_nc.fasta";
pub const MUTANT_AA_FILE: &str = "input_sequence_mutant_aa.fasta";
