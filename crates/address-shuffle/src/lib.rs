//! Synthetic name and address records with shuffled address assignment.
//!
//! This crate generates believable (name, address) pairs for a target city,
//! reassigns the address column among the records with a uniform random
//! permutation, and writes the result to CSV. It demonstrates breaking the
//! name–address linkage of a toy dataset; it makes no anonymization
//! guarantees.
//!
//! # Overview
//!
//! The pipeline runs in four sequential stages:
//!
//! - Input validation of the command-line values
//! - Deterministic record generation from an explicit RNG handle
//! - Address reassignment using the same RNG handle
//! - CSV serialization with an atomic replace of the target file
//!
//! # Example
//!
//! ```
//! use std::num::NonZeroUsize;
//!
//! use address_shuffle::{City, generate_records, reassign};
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//!
//! let city = City::new("Paris").expect("valid city");
//! let count = NonZeroUsize::new(3).expect("non-zero");
//! let mut rng = ChaCha8Rng::seed_from_u64(42);
//!
//! let dataset = generate_records(&mut rng, count, &city);
//! let reassigned = reassign(&mut rng, &dataset);
//!
//! assert_eq!(reassigned.len(), 3);
//! assert!(reassigned.iter().all(|record| city.is_in(&record.address)));
//! ```

mod atomic_io;
pub mod cli;
mod csv_output;
mod error;
mod generator;
pub mod logging;
mod pipeline;
mod record;
mod shuffle;
mod validation;

pub use csv_output::write_csv;
pub use error::{RunError, ValidationError, WriteError};
pub use generator::generate_records;
pub use pipeline::{RunSummary, run};
pub use record::{City, Dataset, Record};
pub use shuffle::{reassign, retained_addresses};
pub use validation::{RawArgs, RunConfig, validate};
