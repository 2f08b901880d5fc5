//! Small filesystem helpers shared by the orchestrator, ledger, and watcher.

use std::collections::HashSet;
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::Path;

/// Create a directory (and any missing parents) if it does not already exist.
pub fn ensure_dir(path: &Path) -> io::Result<()> {
    std::fs::create_dir_all(path)
}

/// Delete a file if it exists; absent files are not an error.
pub fn remove_file_if_present(path: &Path) -> io::Result<()> {
    match std::fs::remove_file(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e),
    }
}

/// Append `content` plus a trailing newline, creating the file if absent.
pub fn append_line(path: &Path, content: &str) -> io::Result<()> {
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    writeln!(file, "{content}")
}

/// Snapshot the entry names of a directory.
///
/// The watcher diffs two snapshots to detect files that appeared between
/// them, so only names matter, not metadata.
pub fn snapshot_dir(path: &Path) -> io::Result<HashSet<String>> {
    let mut names = HashSet::new();
    for entry in std::fs::read_dir(path)? {
        let entry = entry?;
        names.insert(entry.file_name().to_string_lossy().into_owned());
    }
    Ok(names)
}
