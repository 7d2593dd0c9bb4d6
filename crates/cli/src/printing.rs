use hgtsim_sim::simulation::{Configuration, InsertSource, MutationBatch, RecipientTransfer};

pub fn print_mutation_parameters(config: &Configuration) {
    println!("\n⚡ Mutation Parameters");
    println!("  • Target Identity: {}% [-i, --identity]", config.mutation.identity);
    println!(
        "  • Mutation Types Ratio: {} (same-sense : non-same-sense : two : three) [-r, --ratio]",
        config.mutation.ratio
    );
    match config.seed {
        Some(seed) => println!("  • Random Seed: {seed} [--seed]"),
        None => println!("  • Random Seed: Random [--seed]"),
    }
}

pub fn print_transfer_parameters(config: &Configuration) {
    println!("\n🔀 Transfer Parameters");
    println!(
        "  • Terminator: {} ({} bp) [-s, --terminator]",
        config.transfer.terminator,
        config.transfer.terminator.len()
    );
    println!(
        "  • Recipient Extension: .{} [-x, --extension]",
        config.transfer.extension
    );
    let source = match config.transfer.source {
        InsertSource::Mutant => "Mutant donors",
        InsertSource::Original => "Original donors [--insert-original]",
    };
    println!("  • Inserted Sequences: {source}");
}

pub fn print_mutation_summary(batch: &MutationBatch) {
    let total = batch.donors.len();
    let failed: Vec<_> = batch.failures().collect();
    println!("\n🧬 Mutation Results");
    println!("  • Mutated: {}/{total}", total - failed.len());
    for (id, e) in failed {
        println!("  ⚠️  {id}: {e}");
    }
}

pub fn print_transfer_summary(transfers: &[RecipientTransfer]) {
    let ok = transfers.iter().filter(|t| t.result.is_ok()).count();
    println!("\n📦 Transfer Results");
    println!("  • Composite Genomes: {ok}/{}", transfers.len());
    for transfer in transfers {
        if let Err(e) = &transfer.result {
            println!("  ⚠️  {}: {e}", transfer.recipient);
        }
        if !transfer.missing.is_empty() {
            println!(
                "  ⚠️  {}: missing donors {}",
                transfer.recipient,
                transfer.missing.join(", ")
            );
        }
    }
}
