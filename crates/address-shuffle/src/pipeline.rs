//! End-to-end run: generate, reassign, write.
//!
//! A single `ChaCha8Rng` is created per run and borrowed by the generator and
//! then the shuffler, so a seed reproduces the whole run. Without a seed a
//! fresh one is drawn and logged, which lets any run be replayed.

use camino::Utf8PathBuf;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::info;

use crate::csv_output::write_csv;
use crate::error::RunError;
use crate::generator::generate_records;
use crate::shuffle::{reassign, retained_addresses};
use crate::validation::RunConfig;

/// What a completed run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    /// Number of rows written.
    pub records: usize,
    /// Number of records that kept their original address.
    pub retained: usize,
    /// Seed the run used, supplied or drawn.
    pub seed: u64,
    /// File the rows were written to.
    pub output_file: Utf8PathBuf,
}

/// Runs the full pipeline for a validated configuration.
///
/// # Errors
///
/// Returns [`RunError::Write`] if the output file cannot be written.
/// Generation and reassignment do not fail.
pub fn run(config: &RunConfig) -> Result<RunSummary, RunError> {
    info!(
        city = %config.city,
        num_records = config.num_records.get(),
        output_file = %config.output_file,
        "starting address reassignment"
    );

    let seed = config.seed.map_or_else(
        || {
            let drawn = random_seed();
            info!(seed = drawn, "no seed supplied; drew one for this run");
            drawn
        },
        |supplied| {
            info!(seed = supplied, "using supplied seed");
            supplied
        },
    );
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    let generated = generate_records(&mut rng, config.num_records, &config.city);
    let reassigned = reassign(&mut rng, &generated);
    let retained = retained_addresses(&generated, &reassigned);
    info!(
        retained,
        records = reassigned.len(),
        "records that kept their original address"
    );

    write_csv(&reassigned, &config.output_file)?;
    info!("address reassignment completed successfully");

    Ok(RunSummary {
        records: reassigned.len(),
        retained,
        seed,
        output_file: config.output_file.clone(),
    })
}

fn random_seed() -> u64 {
    rand::rng().random()
}
