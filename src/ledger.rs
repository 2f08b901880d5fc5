//! Append-only ledger of downloaded URLs.
//!
//! One line per successful download, formatted `<url> -> <filename>`. The
//! file is never truncated or rewritten; it persists across runs and defines
//! the skip-set. Membership is an exact match on the URL field of each line
//! (a URL that happens to be a prefix of a recorded one is not a hit).

use std::io;
use std::path::PathBuf;

use crate::fsutil;

/// Separator between the URL and filename fields of a ledger line.
const SEPARATOR: &str = " -> ";

/// Errors raised by ledger access.
#[derive(Debug, thiserror::Error)]
pub enum LedgerError {
    #[error("failed to read ledger {path}: {source}")]
    Read { path: PathBuf, source: io::Error },
    #[error("failed to append to ledger {path}: {source}")]
    Append { path: PathBuf, source: io::Error },
}

/// Handle on the ledger file. The file itself may not exist yet; it is
/// created on the first `record`.
pub struct Ledger {
    path: PathBuf,
}

impl Ledger {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Whether `url` was recorded by a previous successful download.
    ///
    /// An absent ledger file means nothing has been downloaded yet.
    pub fn contains(&self, url: &str) -> Result<bool, LedgerError> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(false),
            Err(e) => {
                return Err(LedgerError::Read {
                    path: self.path.clone(),
                    source: e,
                })
            }
        };

        let found = content.lines().any(|line| {
            let recorded = line.split_once(SEPARATOR).map_or(line, |(first, _)| first);
            recorded.trim() == url
        });
        Ok(found)
    }

    /// Record a successful download. Appends exactly one line.
    pub fn record(&self, url: &str, filename: &str) -> Result<(), LedgerError> {
        fsutil::append_line(&self.path, &format!("{url}{SEPARATOR}{filename}")).map_err(|e| {
            LedgerError::Append {
                path: self.path.clone(),
                source: e,
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ledger_in(dir: &tempfile::TempDir) -> Ledger {
        Ledger::new(dir.path().join("downloaded.txt"))
    }

    #[test]
    fn test_absent_file_contains_nothing() {
        let tmp = tempfile::tempdir().unwrap();
        let ledger = ledger_in(&tmp);
        assert!(!ledger.contains("https://example.com/a.pdf").unwrap());
    }

    #[test]
    fn test_record_then_contains() {
        let tmp = tempfile::tempdir().unwrap();
        let ledger = ledger_in(&tmp);
        ledger
            .record("https://example.com/helpdesk/attachments/100/manual.pdf", "manual.pdf")
            .unwrap();
        assert!(ledger
            .contains("https://example.com/helpdesk/attachments/100/manual.pdf")
            .unwrap());
        assert!(!ledger
            .contains("https://example.com/helpdesk/attachments/101/other.pdf")
            .unwrap());
    }

    #[test]
    fn test_line_format_is_stable() {
        let tmp = tempfile::tempdir().unwrap();
        let ledger = ledger_in(&tmp);
        ledger.record("https://example.com/a.pdf", "a.pdf").unwrap();
        let content = std::fs::read_to_string(tmp.path().join("downloaded.txt")).unwrap();
        assert_eq!(content, "https://example.com/a.pdf -> a.pdf\n");
    }

    #[test]
    fn test_membership_is_exact_not_substring() {
        let tmp = tempfile::tempdir().unwrap();
        let ledger = ledger_in(&tmp);
        ledger
            .record("https://example.com/attachments/1005/manual.pdf", "manual.pdf")
            .unwrap();
        // A URL that is a prefix of a recorded one must not count as seen.
        assert!(!ledger
            .contains("https://example.com/attachments/100")
            .unwrap());
        // Nor must a URL that merely appears inside the filename field.
        assert!(!ledger.contains("manual.pdf").unwrap());
    }

    #[test]
    fn test_reads_ledgers_written_by_older_runs() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("downloaded.txt");
        std::fs::write(&path, "https://example.com/x.zip -> x.zip\n").unwrap();
        let ledger = Ledger::new(path);
        assert!(ledger.contains("https://example.com/x.zip").unwrap());
    }
}
