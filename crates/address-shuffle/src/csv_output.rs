//! CSV serialization of a dataset.

use camino::Utf8Path;
use csv::{QuoteStyle, Terminator, WriterBuilder};
use tracing::{error, info};

use crate::atomic_io::write_atomic;
use crate::error::WriteError;
use crate::record::Dataset;

/// Column names written as the first row.
const HEADER: [&str; 2] = ["Name", "Address"];

/// Writes `dataset` to `path` as CSV, replacing any existing file.
///
/// The output has a `Name,Address` header followed by one row per record in
/// order. Fields containing commas, quotes, or line breaks are wrapped in
/// double quotes. Rows end with `\n` on every platform.
///
/// # Errors
///
/// Returns [`WriteError`] if the file cannot be created, written, or
/// renamed into place. The error is logged before it is returned.
///
/// # Example
///
/// ```
/// use address_shuffle::{Dataset, Record, write_csv};
/// use camino::Utf8PathBuf;
///
/// let dir = Utf8PathBuf::from("target").join("address-shuffle-doc");
/// std::fs::create_dir_all(&dir).expect("create dir");
/// let path = dir.join("people.csv");
///
/// let dataset = Dataset::from_records(vec![Record::new("Ada", "1 Elm Street, Paris")]);
/// write_csv(&dataset, &path).expect("write csv");
///
/// let contents = std::fs::read_to_string(&path).expect("read csv");
/// assert_eq!(contents, "Name,Address\nAda,\"1 Elm Street, Paris\"\n");
/// ```
pub fn write_csv(dataset: &Dataset, path: &Utf8Path) -> Result<(), WriteError> {
    let result = write_atomic(path, |out| {
        let mut writer = WriterBuilder::new()
            .has_headers(false)
            .quote_style(QuoteStyle::Necessary)
            .terminator(Terminator::Any(b'\n'))
            .from_writer(out);

        writer
            .write_record(HEADER)
            .map_err(|err| err.to_string())?;
        for record in dataset {
            writer.serialize(record).map_err(|err| err.to_string())?;
        }
        writer.flush().map_err(|err| err.to_string())
    });

    match &result {
        Ok(()) => info!(path = %path, rows = dataset.len(), "data written to output file"),
        Err(err) => error!(path = %path, error = %err.message, "error writing output file"),
    }
    result
}
