//! Error types for the address-shuffle crate.
//!
//! Each stage owns a semantic error enum built with `thiserror`. Lower stages
//! return their own error unchanged and [`RunError`] aggregates them for the
//! binary, which is the only place errors become exit codes.

use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors raised while checking command-line input.
///
/// A validation failure aborts the run before any records are generated.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The argument parser rejected the command line.
    #[error("{message}")]
    Arguments {
        /// Rendered parser diagnostic.
        message: String,
    },

    /// The city is empty or whitespace-only.
    ///
    /// This is stricter than an emptiness check: `"   "` is rejected as well
    /// as `""`.
    #[error("city must be a non-empty string")]
    EmptyCity,

    /// The record count is not an integer.
    #[error("invalid number for --num_records: '{value}' ({message})")]
    InvalidRecordCount {
        /// Raw value supplied for the flag.
        value: String,
        /// Parser error message.
        message: String,
    },

    /// The record count is zero or negative.
    #[error("number of records must be a positive integer, got {value}")]
    NonPositiveRecordCount {
        /// Parsed value that was rejected.
        value: i64,
    },

    /// The output path is empty.
    #[error("output file must be a non-empty string")]
    EmptyOutputPath,

    /// The output path does not end in a file name, for example `out/..`,
    /// `out.csv/`, or `out/.`.
    #[error("output file '{path}' must name a file")]
    OutputPathNotFile {
        /// Path that was rejected.
        path: Utf8PathBuf,
    },

    /// The seed is not an integer.
    #[error("invalid number for --seed: '{value}' ({message})")]
    InvalidSeed {
        /// Raw value supplied for the flag.
        value: String,
        /// Parser error message.
        message: String,
    },
}

/// Errors raised while writing the CSV output.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("failed to write output file at '{path}': {message}")]
pub struct WriteError {
    /// Path that could not be written.
    pub path: Utf8PathBuf,
    /// Description of the underlying I/O or serialization failure.
    pub message: String,
}

/// Errors surfaced by a complete run.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RunError {
    /// The input failed validation.
    #[error("input validation error: {source}")]
    Validation {
        /// Underlying validation error.
        #[from]
        #[source]
        source: ValidationError,
    },

    /// The output file could not be written.
    #[error("{source}")]
    Write {
        /// Underlying write error.
        #[from]
        #[source]
        source: WriteError,
    },

    /// Generation or shuffling failed in a way no stage reports as an error.
    #[error("an unexpected error occurred: {message}")]
    Unexpected {
        /// Diagnostic describing the failure.
        message: String,
    },
}

impl RunError {
    /// Process exit code for this failure.
    ///
    /// Every failure is terminal and maps to `1`.
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Validation { .. } | Self::Write { .. } | Self::Unexpected { .. } => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[test]
    fn write_error_formats_path_and_cause() {
        let err = WriteError {
            path: Utf8PathBuf::from("/missing/out.csv"),
            message: "No such file or directory (os error 2)".to_owned(),
        };
        assert_eq!(
            err.to_string(),
            "failed to write output file at '/missing/out.csv': No such file or directory (os error 2)"
        );
    }

    #[test]
    fn validation_error_record_count_formats_correctly() {
        let err = ValidationError::NonPositiveRecordCount { value: -3 };
        assert_eq!(
            err.to_string(),
            "number of records must be a positive integer, got -3"
        );
    }

    #[test]
    fn validation_error_seed_formats_correctly() {
        let err = ValidationError::InvalidSeed {
            value: "abc".to_owned(),
            message: "invalid digit found in string".to_owned(),
        };
        assert_eq!(
            err.to_string(),
            "invalid number for --seed: 'abc' (invalid digit found in string)"
        );
    }

    #[test]
    fn run_error_wraps_validation_errors() {
        let err = RunError::from(ValidationError::EmptyCity);
        assert_eq!(
            err.to_string(),
            "input validation error: city must be a non-empty string"
        );
    }

    #[rstest]
    #[case(RunError::from(ValidationError::EmptyOutputPath))]
    #[case(RunError::from(WriteError {
        path: Utf8PathBuf::from("out.csv"),
        message: "denied".to_owned(),
    }))]
    #[case(RunError::Unexpected { message: "boom".to_owned() })]
    fn every_failure_exits_with_one(#[case] err: RunError) {
        assert_eq!(err.exit_code(), 1);
    }
}
