//! Address reassignment CLI.
//!
//! This binary builds the log subscriber and delegates to
//! `address_shuffle::cli`, keeping the behaviour testable without spawning a
//! process. Every failure exits with code 1.

use std::env;
use std::io::{self, Write};
use std::process::ExitCode;

use address_shuffle::cli::{CliOutcome, run_cli};
use address_shuffle::logging;

fn main() -> ExitCode {
    let subscriber = logging::subscriber();
    tracing::subscriber::with_default(subscriber, || match run_cli(env::args_os()) {
        Ok(CliOutcome::Help(text)) => {
            write_help(&text);
            ExitCode::SUCCESS
        }
        Ok(CliOutcome::Completed(_)) => ExitCode::SUCCESS,
        Err(err) => ExitCode::from(err.exit_code()),
    })
}

fn write_help(text: &str) {
    if let Err(err) = io::stdout().lock().write_all(text.as_bytes()) {
        drop(err);
    }
}
