//! Command-line parsing and dispatch.
//!
//! The binary delegates to these functions so the whole flow, from raw
//! arguments to the written file, can be exercised in tests without spawning
//! a process. Values are parsed as text here and checked by
//! [`crate::validate`].

use std::any::Any;
use std::ffi::OsString;
use std::panic::{self, AssertUnwindSafe};

use clap::Parser;
use clap::error::ErrorKind;
use tracing::error;

use crate::error::{RunError, ValidationError};
use crate::pipeline::{RunSummary, run};
use crate::validation::{RawArgs, RunConfig, validate};

/// Generate synthetic name/address records for a city, shuffle the address
/// assignment, and write the result to CSV.
#[derive(Debug, Parser)]
#[command(name = "address-shuffle", version, about, long_about = None)]
struct Cli {
    /// City every generated address must mention.
    #[arg(long = "city", value_name = "CITY", allow_hyphen_values = true)]
    city: String,

    /// Number of records to generate and reassign.
    #[arg(long = "num_records", value_name = "N", allow_hyphen_values = true)]
    num_records: String,

    /// CSV file to write; replaced if it exists.
    #[arg(long = "output_file", value_name = "PATH")]
    output_file: String,

    /// Seed for the random source, for reproducible output.
    #[arg(long = "seed", value_name = "SEED", allow_hyphen_values = true)]
    seed: Option<String>,
}

impl From<Cli> for RawArgs {
    fn from(cli: Cli) -> Self {
        Self {
            city: cli.city,
            num_records: cli.num_records,
            output_file: cli.output_file,
            seed: cli.seed,
        }
    }
}

/// Outcome of parsing command-line arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseOutcome {
    /// Print this help or version text and exit successfully.
    Help(String),
    /// Continue with the validated configuration.
    Config(RunConfig),
}

/// Outcome of a complete command-line invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliOutcome {
    /// Help or version text to print.
    Help(String),
    /// The pipeline ran and wrote its output.
    Completed(RunSummary),
}

/// Parses and validates command-line arguments.
///
/// The first item is the program name, as in [`std::env::args_os`].
///
/// # Errors
///
/// Returns [`ValidationError::Arguments`] when a required flag or a flag
/// value is missing or a flag is unknown, and the matching
/// [`ValidationError`] variant when a value fails validation.
///
/// # Example
///
/// ```
/// use address_shuffle::cli::{ParseOutcome, parse_args};
///
/// let args = [
///     "address-shuffle",
///     "--city",
///     "Paris",
///     "--num_records",
///     "3",
///     "--output_file",
///     "out.csv",
/// ];
///
/// let ParseOutcome::Config(config) = parse_args(args).expect("parse args") else {
///     panic!("expected a configuration");
/// };
/// assert_eq!(config.city.as_str(), "Paris");
/// ```
pub fn parse_args<I, T>(args: I) -> Result<ParseOutcome, ValidationError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    match Cli::try_parse_from(args) {
        Ok(cli) => validate(cli.into()).map(ParseOutcome::Config),
        Err(err) => match err.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                Ok(ParseOutcome::Help(err.render().to_string()))
            }
            _ => Err(ValidationError::Arguments {
                message: err.render().to_string().trim_end().to_owned(),
            }),
        },
    }
}

/// Parses the arguments and, unless help was requested, runs the pipeline.
///
/// Failures are logged at error level before they are returned. A panic
/// inside the pipeline is caught and reported as [`RunError::Unexpected`].
///
/// # Errors
///
/// Returns [`RunError`] for validation, write, or unexpected failures.
pub fn run_cli<I, T>(args: I) -> Result<CliOutcome, RunError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let result = dispatch(args);
    if let Err(err) = &result {
        error!(error = %err, "address reassignment failed");
    }
    result
}

fn dispatch<I, T>(args: I) -> Result<CliOutcome, RunError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    match parse_args(args)? {
        ParseOutcome::Help(text) => Ok(CliOutcome::Help(text)),
        ParseOutcome::Config(config) => {
            catch_unexpected(|| run(&config)).map(CliOutcome::Completed)
        }
    }
}

/// Runs `f`, converting a panic into [`RunError::Unexpected`].
fn catch_unexpected<F, T>(f: F) -> Result<T, RunError>
where
    F: FnOnce() -> Result<T, RunError>,
{
    panic::catch_unwind(AssertUnwindSafe(f)).unwrap_or_else(|payload| {
        Err(RunError::Unexpected {
            message: panic_message(payload.as_ref()),
        })
    })
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    payload
        .downcast_ref::<&str>()
        .map(|message| (*message).to_owned())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "panic with a non-string payload".to_owned())
}
