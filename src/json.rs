// Whole-file JSON array operations

use eyre::{Context, Result};
use fs2::FileExt;
use serde::{Serialize, de::DeserializeOwned};
use std::fs::{self, File, OpenOptions};
use std::io::{Read, Write};
use std::path::Path;
use tracing::{debug, info};

/// Read every element of a JSON array file
///
/// A missing file, or one that holds only whitespace, is an empty array.
/// Anything else that does not parse is an error.
pub fn read_json_array<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    if !path.exists() {
        debug!(file = ?path, "JSON file does not exist yet");
        return Ok(Vec::new());
    }

    let mut file = File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
    FileExt::lock_shared(&file).context("Failed to acquire shared file lock")?;

    let mut content = String::new();
    file.read_to_string(&mut content)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    if content.trim().is_empty() {
        debug!(file = ?path, "JSON file is empty");
        return Ok(Vec::new());
    }

    let records: Vec<T> =
        serde_json::from_str(&content).with_context(|| format!("Failed to parse JSON in {}", path.display()))?;

    info!(file = ?path, count = records.len(), "Loaded records from JSON");

    Ok(records)
}

/// Overwrite a file with the JSON array of `records`
///
/// Non-ASCII text is written as-is. Parent directories are created as needed.
pub fn write_json_array<T: Serialize>(path: &Path, records: &[T]) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }

    let json = serde_json::to_string_pretty(records).context("Failed to serialize records")?;

    let mut file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(false)
        .open(path)
        .with_context(|| format!("Failed to open {} for writing", path.display()))?;

    // Truncate only while holding the lock
    file.lock_exclusive().context("Failed to acquire file lock")?;
    file.set_len(0)?;
    file.write_all(json.as_bytes())?;
    file.write_all(b"\n")?;
    file.sync_all()?;

    info!(file = ?path, count = records.len(), "Wrote records to JSON");

    // Lock is released when file is dropped
    Ok(())
}
