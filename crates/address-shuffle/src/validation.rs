//! Input validation for the command-line values.
//!
//! The argument parser hands over every value as raw text so that the checks
//! below own the type and range rules. A negative record count, for example,
//! reaches [`validate`] and is reported as such instead of being mistaken for
//! a flag.
//!
//! # Validation Rules
//!
//! - City: non-empty, not whitespace-only
//! - Record count: an integer greater than zero
//! - Output file: non-empty and ending in a file name, so neither a trailing
//!   separator nor a trailing `.` component
//! - Seed (optional): any integer that fits in 64 bits, signed or unsigned

use std::fmt;
use std::num::NonZeroUsize;
use std::str::FromStr;

use camino::Utf8PathBuf;

use crate::atomic_io::names_a_file;
use crate::error::ValidationError;
use crate::record::City;

/// Unchecked command-line values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawArgs {
    /// Value of `--city`.
    pub city: String,
    /// Value of `--num_records`.
    pub num_records: String,
    /// Value of `--output_file`.
    pub output_file: String,
    /// Value of `--seed`, if supplied.
    pub seed: Option<String>,
}

/// Validated configuration for a single run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    /// City every generated address must mention.
    pub city: City,
    /// Number of records to generate.
    pub num_records: NonZeroUsize,
    /// Destination CSV path; replaced if it exists.
    pub output_file: Utf8PathBuf,
    /// Seed for the random source, if reproducible output was requested.
    pub seed: Option<u64>,
}

/// Checks raw command-line values and converts them into a [`RunConfig`].
///
/// # Errors
///
/// Returns the first [`ValidationError`] found, checking the city, record
/// count, output file, and seed in that order.
///
/// # Example
///
/// ```
/// use address_shuffle::{RawArgs, validate};
///
/// let raw = RawArgs {
///     city: "Paris".to_owned(),
///     num_records: "3".to_owned(),
///     output_file: "out.csv".to_owned(),
///     seed: Some("42".to_owned()),
/// };
///
/// let config = validate(raw).expect("valid input");
/// assert_eq!(config.num_records.get(), 3);
/// assert_eq!(config.seed, Some(42));
/// ```
pub fn validate(raw: RawArgs) -> Result<RunConfig, ValidationError> {
    let city = City::new(raw.city)?;
    let num_records = parse_record_count(&raw.num_records)?;
    let output_file = parse_output_file(raw.output_file)?;
    let seed = raw.seed.as_deref().map(parse_seed).transpose()?;

    Ok(RunConfig {
        city,
        num_records,
        output_file,
        seed,
    })
}

fn parse_record_count(value: &str) -> Result<NonZeroUsize, ValidationError> {
    let parsed: i64 = parse_number(value).map_err(|message| {
        ValidationError::InvalidRecordCount {
            value: value.to_owned(),
            message,
        }
    })?;
    if parsed <= 0 {
        return Err(ValidationError::NonPositiveRecordCount { value: parsed });
    }
    usize::try_from(parsed)
        .ok()
        .and_then(NonZeroUsize::new)
        .ok_or_else(|| ValidationError::InvalidRecordCount {
            value: value.to_owned(),
            message: "number too large for this platform".to_owned(),
        })
}

fn parse_output_file(value: String) -> Result<Utf8PathBuf, ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::EmptyOutputPath);
    }
    let path = Utf8PathBuf::from(value);
    if !names_a_file(&path) {
        return Err(ValidationError::OutputPathNotFile { path });
    }
    Ok(path)
}

/// Parses a seed, reinterpreting negative values bit-for-bit as `u64`.
fn parse_seed(value: &str) -> Result<u64, ValidationError> {
    parse_number::<u64>(value)
        .or_else(|_| parse_number::<i64>(value).map(i64::cast_unsigned))
        .map_err(|message| ValidationError::InvalidSeed {
            value: value.to_owned(),
            message,
        })
}

fn parse_number<T>(value: &str) -> Result<T, String>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    value.trim().parse::<T>().map_err(|err| err.to_string())
}

#[cfg(test)]
mod tests {
    //! Covers the accept and reject rules for each command-line value.

    use rstest::{fixture, rstest};

    use super::*;

    #[fixture]
    fn raw() -> RawArgs {
        RawArgs {
            city: "Paris".to_owned(),
            num_records: "3".to_owned(),
            output_file: "out.csv".to_owned(),
            seed: None,
        }
    }

    #[rstest]
    fn accepts_valid_input(raw: RawArgs) {
        let config = validate(raw).expect("valid input");

        assert_eq!(config.city.as_str(), "Paris");
        assert_eq!(config.num_records.get(), 3);
        assert_eq!(config.output_file, Utf8PathBuf::from("out.csv"));
        assert_eq!(config.seed, None);
    }

    #[rstest]
    #[case("")]
    #[case("  ")]
    fn rejects_empty_city(raw: RawArgs, #[case] city: &str) {
        let input = RawArgs {
            city: city.to_owned(),
            ..raw
        };
        assert_eq!(validate(input), Err(ValidationError::EmptyCity));
    }

    #[rstest]
    #[case("0", 0)]
    #[case("-1", -1)]
    #[case("-250", -250)]
    fn rejects_non_positive_record_counts(
        raw: RawArgs,
        #[case] count: &str,
        #[case] expected: i64,
    ) {
        let input = RawArgs {
            num_records: count.to_owned(),
            ..raw
        };
        assert_eq!(
            validate(input),
            Err(ValidationError::NonPositiveRecordCount { value: expected })
        );
    }

    #[rstest]
    #[case("three")]
    #[case("2.5")]
    #[case("")]
    fn rejects_non_integer_record_counts(raw: RawArgs, #[case] count: &str) {
        let input = RawArgs {
            num_records: count.to_owned(),
            ..raw
        };
        let Err(ValidationError::InvalidRecordCount { value, .. }) = validate(input) else {
            panic!("expected invalid record count error");
        };
        assert_eq!(value, count);
    }

    #[rstest]
    fn rejects_empty_output_file(raw: RawArgs) {
        let input = RawArgs {
            output_file: String::new(),
            ..raw
        };
        assert_eq!(validate(input), Err(ValidationError::EmptyOutputPath));
    }

    #[rstest]
    #[case("out/..")]
    #[case("/")]
    #[case(".")]
    #[case("o2.csv/")]
    #[case("foo/.")]
    #[case("foo/./")]
    fn rejects_output_paths_without_file_name(raw: RawArgs, #[case] path: &str) {
        let input = RawArgs {
            output_file: path.to_owned(),
            ..raw
        };
        assert_eq!(
            validate(input),
            Err(ValidationError::OutputPathNotFile {
                path: Utf8PathBuf::from(path),
            })
        );
    }

    #[rstest]
    #[case("42", 42)]
    #[case(" 7 ", 7)]
    #[case("18446744073709551615", u64::MAX)]
    #[case("-1", u64::MAX)]
    fn accepts_integer_seeds(raw: RawArgs, #[case] seed: &str, #[case] expected: u64) {
        let input = RawArgs {
            seed: Some(seed.to_owned()),
            ..raw
        };
        let config = validate(input).expect("valid seed");
        assert_eq!(config.seed, Some(expected));
    }

    #[rstest]
    #[case("abc")]
    #[case("4.2")]
    #[case("99999999999999999999")]
    fn rejects_non_integer_seeds(raw: RawArgs, #[case] seed: &str) {
        let input = RawArgs {
            seed: Some(seed.to_owned()),
            ..raw
        };
        let Err(ValidationError::InvalidSeed { value, .. }) = validate(input) else {
            panic!("expected invalid seed error");
        };
        assert_eq!(value, seed);
    }

    #[rstest]
    fn city_is_checked_before_record_count(raw: RawArgs) {
        let input = RawArgs {
            city: String::new(),
            num_records: "0".to_owned(),
            ..raw
        };
        assert_eq!(validate(input), Err(ValidationError::EmptyCity));
    }
}
