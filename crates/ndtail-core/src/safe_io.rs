//! Atomic output writes.
//!
//! The extractor materializes its whole window before writing, then hands it
//! to [`atomic_write_json()`]. The bytes land in a sibling temp file which is
//! fsynced and renamed over the target, so the output path holds either the
//! previous contents or the complete new array, never a truncated one.

use serde::Serialize;
use std::ffi::OsString;
use std::fs::{self, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Atomically write `value` as pretty-printed JSON.
///
/// Uses serde_json's pretty printer: two-space indent, non-ASCII written as
/// literal UTF-8, no trailing newline.
///
/// # Errors
///
/// Returns an error if serialization fails or if [`atomic_write()`] does.
pub fn atomic_write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> io::Result<()> {
    let json = serde_json::to_vec_pretty(value)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    atomic_write(path, &json)
}

/// Atomically write bytes to a file.
///
/// Creates missing parent directories. The temp file is named after the
/// target with a `.tmp` suffix appended (`out.json` → `out.json.tmp`).
///
/// The temp path is reserved for this writer: any existing file there is
/// truncated and replaced, then renamed away or removed. This also clears a
/// leftover from a previously killed run.
///
/// # Errors
///
/// Returns an error if the temp file cannot be created, written, synced, or
/// renamed. A failed rename removes the temp file before returning.
pub fn atomic_write(path: &Path, contents: &[u8]) -> io::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }

    let tmp_path = tmp_path_for(path);

    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(&tmp_path)?;

    {
        let mut writer = BufWriter::new(&mut file);
        writer.write_all(contents)?;
        writer.flush()?;
    }

    file.sync_all()?;
    drop(file);

    if let Err(e) = fs::rename(&tmp_path, path) {
        let _ = fs::remove_file(&tmp_path);
        return Err(e);
    }

    Ok(())
}

fn tmp_path_for(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_else(|| OsString::from("output"));
    name.push(".tmp");
    path.with_file_name(name)
}
