//! Default command — render the article list, extract attachment links, and
//! download whatever the ledger has not seen yet.

use std::path::Path;

use anyhow::{Context, Result};

use crate::config;
use crate::extract;
use crate::fsutil;
use crate::ledger::Ledger;
use crate::renderer::{BrowserSession, PageDriver};
use crate::watcher::{self, DownloadOutcome, WatchSettings};

/// Run one full harvest in the current working directory.
pub async fn run() -> Result<()> {
    let cwd = std::env::current_dir().context("failed to resolve working directory")?;
    let assets_dir = cwd.join(config::ASSETS_DIR);
    let dump_path = cwd.join(config::DUMP_FILE);
    let ledger = Ledger::new(cwd.join(config::LEDGER_FILE));

    // The dump is per-run scratch; a leftover from a previous run would
    // resurface stale attachment links.
    fsutil::remove_file_if_present(&dump_path)
        .with_context(|| format!("failed to remove stale dump {}", dump_path.display()))?;
    fsutil::ensure_dir(&assets_dir)
        .with_context(|| format!("failed to create {}", assets_dir.display()))?;

    let mut session = BrowserSession::launch(&assets_dir).await?;
    let result = harvest(
        &mut session,
        &assets_dir,
        &dump_path,
        &ledger,
        &WatchSettings::default(),
    )
    .await;
    // Teardown runs on success and failure alike before the error surfaces.
    session.shutdown().await;
    result
}

/// The orchestration sequence, separated from session lifecycle so tests can
/// substitute a scripted driver.
pub async fn harvest(
    driver: &mut dyn PageDriver,
    assets_dir: &Path,
    dump_path: &Path,
    ledger: &Ledger,
    settings: &WatchSettings,
) -> Result<()> {
    for article in config::ARTICLE_URLS {
        tracing::info!("rendering {article}");
        driver.navigate(article).await?;
        let html = driver.page_html().await?;
        fsutil::append_line(dump_path, &html)
            .with_context(|| format!("failed to append to {}", dump_path.display()))?;
    }

    let dump = std::fs::read_to_string(dump_path)
        .with_context(|| format!("failed to read dump {}", dump_path.display()))?;
    let urls = extract::extract_attachment_urls(
        &dump,
        config::SITE_ORIGIN,
        config::ATTACHMENT_MARKER_CLASS,
        config::ATTACHMENT_PATH_PREFIX,
    )?;
    println!("found {} attachment link(s)", urls.len());

    for url in &urls {
        if ledger.contains(url)? {
            println!("[SKIP] already downloaded: {url}");
            continue;
        }

        match watcher::watch_download(driver, url, assets_dir, settings).await? {
            DownloadOutcome::Completed(name) => {
                ledger.record(url, &name)?;
                println!("[SUCCESS] downloaded {name} from {url}");
            }
            DownloadOutcome::TimedOut => {
                // Not recorded, so the next run retries it.
                println!("[FAILURE] no file arrived within the timeout for {url}");
            }
        }
    }

    Ok(())
}
