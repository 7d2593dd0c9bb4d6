//! Seeded batch engine for the mutation and transfer stages.
//!
//! Every donor and every recipient is an independent item. The master RNG
//! hands out one `u64` seed per item, in input order, before any work
//! starts; items then run in parallel on their own `Xoshiro256PlusPlus`.
//! Output for a given seed is therefore the same for any thread count.
//!
//! A failing item never aborts the batch. Its error is kept next to its id
//! and the remaining items carry on.

use crate::base::{Sequence, SequenceRecord};
use crate::codon::STANDARD;
use crate::errors::{InputError, MutationError, TransferError};
use crate::evolution::{MutationOutcome, SequenceMutationEngine};
use crate::simulation::{Configuration, InsertSource, TransferEntry, TransferProfile};
use crate::transfer::{Composite, RandomInsertionEngine};
use log::{debug, warn};
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;
use rayon::prelude::*;
use std::collections::{HashMap, HashSet};

/// Mutation result for one donor.
#[derive(Debug, Clone)]
pub struct DonorMutation {
    pub original: SequenceRecord,
    pub result: Result<MutationOutcome, MutationError>,
}

/// Mutation results for a donor collection, in input order.
#[derive(Debug, Clone, Default)]
pub struct MutationBatch {
    pub donors: Vec<DonorMutation>,
}

impl MutationBatch {
    /// Donors whose mutation succeeded, with their outcomes.
    pub fn succeeded(&self) -> impl Iterator<Item = (&SequenceRecord, &MutationOutcome)> {
        self.donors
            .iter()
            .filter_map(|d| d.result.as_ref().ok().map(|o| (&d.original, o)))
    }

    /// Ids and errors of donors whose mutation failed.
    pub fn failures(&self) -> impl Iterator<Item = (&str, &MutationError)> {
        self.donors
            .iter()
            .filter_map(|d| d.result.as_ref().err().map(|e| (d.original.id.as_str(), e)))
    }

    /// Mutant sequences under their original ids; failed donors are absent.
    pub fn mutant_records(&self) -> Vec<SequenceRecord> {
        self.succeeded()
            .map(|(original, outcome)| SequenceRecord::new(original.id.clone(), outcome.mutant.clone()))
            .collect()
    }

    /// Sequences to insert for the given source.
    pub fn insertion_donors(&self, source: InsertSource) -> Vec<SequenceRecord> {
        match source {
            InsertSource::Mutant => self.mutant_records(),
            InsertSource::Original => self.donors.iter().map(|d| d.original.clone()).collect(),
        }
    }
}

/// Transfer result for one recipient.
#[derive(Debug, Clone)]
pub struct RecipientTransfer {
    pub recipient: String,
    /// Donor ids from the profile that were not available.
    pub missing: Vec<String>,
    pub result: Result<Composite, TransferError>,
}

/// Runs the mutation and transfer stages with reproducible randomness.
#[derive(Debug)]
pub struct Simulation {
    config: Configuration,
    seed: u64,
    rng: Xoshiro256PlusPlus,
}

impl Simulation {
    /// Create a simulation from a configuration.
    ///
    /// Without a configured seed one is drawn from entropy; it is available
    /// through [`Simulation::seed`] and [`Simulation::resolved_config`].
    pub fn new(config: Configuration) -> Self {
        let seed = config.seed.unwrap_or_else(|| rand::rng().random());
        Self {
            config,
            seed,
            rng: Xoshiro256PlusPlus::seed_from_u64(seed),
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn config(&self) -> &Configuration {
        &self.config
    }

    /// The configuration with the seed actually in use filled in.
    pub fn resolved_config(&self) -> Configuration {
        self.config.clone().with_seed(self.seed)
    }

    fn item_seeds(&mut self, count: usize) -> Vec<u64> {
        (0..count).map(|_| self.rng.random()).collect()
    }

    /// Mutate every donor towards the configured identity.
    ///
    /// # Errors
    /// Only an invalid identity or ratio fails the call; per-donor failures
    /// are recorded in the returned batch.
    pub fn mutate_donors(&mut self, donors: &[SequenceRecord]) -> Result<MutationBatch, MutationError> {
        self.mutate_donors_with(donors, || {})
    }

    /// As [`Simulation::mutate_donors`], calling `on_done` after each donor.
    pub fn mutate_donors_with<F>(
        &mut self,
        donors: &[SequenceRecord],
        on_done: F,
    ) -> Result<MutationBatch, MutationError>
    where
        F: Fn() + Sync,
    {
        let mutation = self.config.mutation;
        let engine = SequenceMutationEngine::new(&STANDARD, mutation.identity, mutation.ratio)?;
        let seeds = self.item_seeds(donors.len());

        let donors: Vec<DonorMutation> = donors
            .par_iter()
            .zip(seeds.par_iter())
            .map(|(record, &seed)| {
                let mut local_rng = Xoshiro256PlusPlus::seed_from_u64(seed);
                let result = engine.mutate(&record.id, &record.sequence, &mut local_rng);
                if let Err(e) = &result {
                    warn!("Mutation of '{}' failed: {e}", record.id);
                }
                on_done();
                DonorMutation {
                    original: record.clone(),
                    result,
                }
            })
            .collect();

        Ok(MutationBatch { donors })
    }

    /// Build one composite per profile line.
    ///
    /// `donors` is the pool to insert from; its order decides insertion
    /// order within a recipient. Recipients absent from `recipients` fail
    /// with [`TransferError::MissingRecipient`].
    ///
    /// # Errors
    /// Fails only for an invalid terminator.
    pub fn transfer_all(
        &mut self,
        profile: &TransferProfile,
        donors: &[SequenceRecord],
        recipients: &[SequenceRecord],
    ) -> Result<Vec<RecipientTransfer>, InputError> {
        self.transfer_all_with(profile, donors, recipients, || {})
    }

    /// As [`Simulation::transfer_all`], calling `on_done` after each recipient.
    pub fn transfer_all_with<F>(
        &mut self,
        profile: &TransferProfile,
        donors: &[SequenceRecord],
        recipients: &[SequenceRecord],
        on_done: F,
    ) -> Result<Vec<RecipientTransfer>, InputError>
    where
        F: Fn() + Sync,
    {
        let engine = RandomInsertionEngine::new(self.config.transfer.terminator_sequence()?);
        let recipients: HashMap<&str, &Sequence> = recipients
            .iter()
            .map(|r| (r.id.as_str(), &r.sequence))
            .collect();
        let seeds = self.item_seeds(profile.len());

        let transfers: Vec<RecipientTransfer> = profile
            .entries()
            .par_iter()
            .zip(seeds.par_iter())
            .map(|(entry, &seed)| {
                let mut local_rng = Xoshiro256PlusPlus::seed_from_u64(seed);
                let recipient = recipients.get(entry.recipient.as_str()).copied();
                let transfer = transfer_entry(&engine, entry, donors, recipient, &mut local_rng);
                on_done();
                transfer
            })
            .collect();

        Ok(transfers)
    }
}

fn transfer_entry<R: Rng + ?Sized>(
    engine: &RandomInsertionEngine,
    entry: &TransferEntry,
    donors: &[SequenceRecord],
    recipient: Option<&Sequence>,
    rng: &mut R,
) -> RecipientTransfer {
    let wanted: HashSet<&str> = entry.donors.iter().map(String::as_str).collect();
    let selected: Vec<&SequenceRecord> = donors
        .iter()
        .filter(|d| wanted.contains(d.id.as_str()))
        .collect();
    let available: HashSet<&str> = selected.iter().map(|d| d.id.as_str()).collect();
    let missing: Vec<String> = entry
        .donors
        .iter()
        .filter(|id| !available.contains(id.as_str()))
        .cloned()
        .collect();
    for id in &missing {
        warn!("Donor '{id}' for recipient '{}' not available", entry.recipient);
    }

    let result = match recipient {
        None => Err(TransferError::MissingRecipient(entry.recipient.clone())),
        Some(sequence) => engine
            .insert(sequence, &selected, rng)
            .map_err(TransferError::from),
    };
    match &result {
        Ok(composite) => debug!(
            "{}: {} donors inserted, {} bp",
            entry.recipient,
            composite.sites.len(),
            composite.sequence.len()
        ),
        Err(e) => warn!("Transfer into '{}' failed: {e}", entry.recipient),
    }

    RecipientTransfer {
        recipient: entry.recipient.clone(),
        missing,
        result,
    }
}
