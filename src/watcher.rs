//! Download watcher — navigate to an attachment URL and poll the download
//! directory until a new, fully-written file appears or the budget runs out.
//!
//! The browser seam exposes no HTTP status, so a dead URL cannot fail fast;
//! it simply exhausts the timeout and is reported as `TimedOut`. The decision
//! logic is a pure function of two directory snapshots so it tests without
//! Chromium.

use std::collections::HashSet;
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use tokio::time::Instant;

use crate::fsutil;
use crate::renderer::PageDriver;

/// Suffixes Chrome gives files that are still being written.
const IN_PROGRESS_SUFFIXES: [&str; 2] = [".crdownload", ".tmp"];

/// Timing knobs for the watch loop. Defaults match the production site;
/// tests shrink them.
#[derive(Debug, Clone)]
pub struct WatchSettings {
    /// Grace period after navigation before polling starts, letting the
    /// browser register the download.
    pub settle: Duration,
    /// Interval between directory polls.
    pub poll_interval: Duration,
    /// Total budget from the first poll; exceeded means `TimedOut`.
    pub timeout: Duration,
}

impl Default for WatchSettings {
    fn default() -> Self {
        Self {
            settle: Duration::from_secs(5),
            poll_interval: Duration::from_secs(10),
            timeout: Duration::from_secs(60),
        }
    }
}

/// Outcome of watching one attachment URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DownloadOutcome {
    /// A new file finished downloading; carries its name within the
    /// download directory.
    Completed(String),
    /// Nothing qualifying appeared within the budget.
    TimedOut,
}

/// Decide whether a completed download is visible in `current` relative to
/// `baseline`.
///
/// Returns a newly appeared entry only when no new entry still carries an
/// in-progress suffix: a partial download means the batch is not settled yet,
/// so keep waiting. With several new entries the pick is arbitrary; each
/// navigation normally produces at most one file.
pub fn completed_entry(
    baseline: &HashSet<String>,
    current: &HashSet<String>,
) -> Option<String> {
    let new: Vec<&String> = current.difference(baseline).collect();
    if new.is_empty() {
        return None;
    }
    if new
        .iter()
        .any(|name| IN_PROGRESS_SUFFIXES.iter().any(|s| name.ends_with(s)))
    {
        return None;
    }
    new.into_iter().next().cloned()
}

/// Trigger a download of `url` via the browser and watch `download_dir` for
/// the resulting file.
pub async fn watch_download(
    driver: &mut dyn PageDriver,
    url: &str,
    download_dir: &Path,
    settings: &WatchSettings,
) -> Result<DownloadOutcome> {
    let baseline = fsutil::snapshot_dir(download_dir).with_context(|| {
        format!("failed to list download directory {}", download_dir.display())
    })?;

    driver.navigate_expecting_download(url).await?;
    tokio::time::sleep(settings.settle).await;

    let started = Instant::now();
    loop {
        if started.elapsed() > settings.timeout {
            tracing::debug!("watch timed out for {url}");
            return Ok(DownloadOutcome::TimedOut);
        }

        let current = fsutil::snapshot_dir(download_dir).with_context(|| {
            format!("failed to list download directory {}", download_dir.display())
        })?;
        if let Some(name) = completed_entry(&baseline, &current) {
            return Ok(DownloadOutcome::Completed(name));
        }

        tokio::time::sleep(settings.poll_interval).await;
    }
}
