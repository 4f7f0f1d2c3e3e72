//! Shared filesystem helpers for address-shuffle tests.

use std::io;
use std::sync::atomic::{AtomicUsize, Ordering};

use address_shuffle::{Dataset, Record};
use camino::{Utf8Path, Utf8PathBuf};
use cap_std::ambient_authority;
use cap_std::fs::Dir;

/// Create a unique temp file path under `target/address-shuffle-tests`.
///
/// # Errors
///
/// Returns any filesystem errors encountered while creating the temp directory.
pub fn unique_temp_path(prefix: &str, file_name: &str) -> io::Result<Utf8PathBuf> {
    static TEMP_COUNTER: AtomicUsize = AtomicUsize::new(0);
    let counter = TEMP_COUNTER.fetch_add(1, Ordering::Relaxed);
    let process_id = std::process::id();
    let dir_name = format!("{prefix}-{process_id}-{counter}");
    let dir = Utf8PathBuf::from("target")
        .join("address-shuffle-tests")
        .join(dir_name);
    let root = Dir::open_ambient_dir(".", ambient_authority())?;
    root.create_dir_all(&dir)?;
    Ok(dir.join(file_name))
}

/// A path whose parent directory does not exist.
pub fn missing_dir_path(file_name: &str) -> Utf8PathBuf {
    Utf8PathBuf::from("target")
        .join("address-shuffle-tests")
        .join(format!("missing-{}", std::process::id()))
        .join("does-not-exist")
        .join(file_name)
}

/// Read a CSV file written by the tool back into a dataset.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or a row does not parse.
pub fn read_csv(path: &Utf8Path) -> Result<Dataset, csv::Error> {
    let mut reader = csv::Reader::from_path(path)?;
    let records = reader
        .deserialize::<Record>()
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Dataset::from_records(records))
}

/// Read the header row of a CSV file.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or the header is malformed.
pub fn read_header(path: &Utf8Path) -> Result<Vec<String>, csv::Error> {
    let mut reader = csv::Reader::from_path(path)?;
    Ok(reader.headers()?.iter().map(str::to_owned).collect())
}
