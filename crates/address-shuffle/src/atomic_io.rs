//! Atomic file replacement.
//!
//! Output is streamed into a hidden temporary file next to the target, then
//! flushed, synced, and renamed over it. A failed write never leaves a
//! truncated target behind, and the temporary file is removed on failure.

use std::io::{self, BufWriter, Write};
use std::path::is_separator;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use camino::Utf8Path;
use cap_std::ambient_authority;
use cap_std::fs::{Dir, File, OpenOptions};

use crate::error::WriteError;

static TEMP_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Replaces the file at `path` with whatever `fill` writes.
///
/// The parent directory is opened as a capability handle; a bare file name
/// resolves against the current directory. `fill` reports failures as a
/// message, which is wrapped into a [`WriteError`] for `path`.
///
/// # Errors
///
/// Returns [`WriteError`] if the parent directory cannot be opened, the
/// temporary file cannot be created or written, `fill` fails, or the rename
/// fails.
pub(crate) fn write_atomic<F>(path: &Utf8Path, fill: F) -> Result<(), WriteError>
where
    F: FnOnce(&mut BufWriter<File>) -> Result<(), String>,
{
    let Some(file_name) = path.file_name().filter(|_| names_a_file(path)) else {
        return Err(write_error(path, "output path must name a file"));
    };
    let parent = path
        .parent()
        .filter(|dir| !dir.as_str().is_empty())
        .unwrap_or_else(|| Utf8Path::new("."));
    let dir = Dir::open_ambient_dir(parent, ambient_authority())
        .map_err(|err| write_error(path, &err.to_string()))?;

    let tmp_name = temp_name(file_name);
    if let Err(err) = write_to_temp_file(&dir, &tmp_name, fill) {
        remove_temp_file(&dir, &tmp_name);
        return Err(write_error(path, &err));
    }
    if let Err(err) = rename_temp_to_target(&dir, &tmp_name, file_name) {
        remove_temp_file(&dir, &tmp_name);
        return Err(write_error(path, &err.to_string()));
    }
    sync_parent_directory(&dir);

    Ok(())
}

/// Reports whether `path` ends in a file name as written.
///
/// `Utf8Path::file_name` skips trailing separators and `.` components, so
/// `out.csv/` and `out/.` are checked on the raw text as well.
pub(crate) fn names_a_file(path: &Utf8Path) -> bool {
    let text = path.as_str();
    let ends_in_separator = text.chars().next_back().is_some_and(is_separator);
    let ends_in_current_dir = text.strip_suffix('.').is_some_and(|rest| {
        rest.is_empty() || rest.chars().next_back().is_some_and(is_separator)
    });
    !ends_in_separator && !ends_in_current_dir && path.file_name().is_some()
}

fn temp_name(file_name: &str) -> String {
    let counter = TEMP_COUNTER.fetch_add(1, Ordering::Relaxed);
    let suffix = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |elapsed| elapsed.as_nanos());
    format!(
        ".{}.tmp.{}.{}.{}",
        file_name,
        std::process::id(),
        suffix,
        counter
    )
}

fn write_to_temp_file<F>(dir: &Dir, tmp_name: &str, fill: F) -> Result<(), String>
where
    F: FnOnce(&mut BufWriter<File>) -> Result<(), String>,
{
    let mut options = OpenOptions::new();
    options.write(true).create_new(true);
    let file = dir
        .open_with(tmp_name, &options)
        .map_err(|err| err.to_string())?;

    let mut out = BufWriter::new(file);
    fill(&mut out)?;
    out.flush().map_err(|err| err.to_string())?;
    let synced = out
        .into_inner()
        .map_err(|err| err.error().to_string())?;
    synced.sync_all().map_err(|err| err.to_string())
}

#[cfg(windows)]
fn rename_temp_to_target(dir: &Dir, tmp_name: &str, target_name: &str) -> io::Result<()> {
    // Windows rename fails if the target exists, so remove it first.
    match dir.remove_file(target_name) {
        Ok(()) => {}
        Err(err) if err.kind() == io::ErrorKind::NotFound => {}
        Err(err) => return Err(err),
    }
    dir.rename(tmp_name, dir, target_name)
}

#[cfg(not(windows))]
fn rename_temp_to_target(dir: &Dir, tmp_name: &str, target_name: &str) -> io::Result<()> {
    dir.rename(tmp_name, dir, target_name)
}

fn remove_temp_file(dir: &Dir, tmp_name: &str) {
    // Best-effort cleanup; the original failure is what gets reported.
    if dir.remove_file(tmp_name).is_err() {
        // Ignore cleanup failures.
    }
}

fn sync_parent_directory(parent: &Dir) {
    // Best-effort directory sync; ignore failures.
    if parent.open(".").and_then(|dir| dir.sync_all()).is_err() {
        // Ignore sync failures.
    }
}

fn write_error(path: &Utf8Path, message: &str) -> WriteError {
    WriteError {
        path: path.to_path_buf(),
        message: message.to_owned(),
    }
}
