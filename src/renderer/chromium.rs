//! Chromium session via chromiumoxide, configured for silent file downloads.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{anyhow, bail, Context, Result};
use async_trait::async_trait;
use chromiumoxide::browser::{Browser, BrowserConfig};
use chromiumoxide::cdp::browser_protocol::browser::{
    SetDownloadBehaviorBehavior, SetDownloadBehaviorParams,
};
use chromiumoxide::cdp::browser_protocol::network::EnableParams as NetworkEnableParams;
use chromiumoxide::cdp::browser_protocol::performance::EnableParams as PerformanceEnableParams;
use chromiumoxide::page::Page;
use futures::StreamExt;

use super::PageDriver;

/// How long a single navigation may take before it is abandoned.
const NAVIGATION_TIMEOUT: Duration = Duration::from_secs(30);

/// Find the Chromium binary path.
pub fn find_chromium() -> Option<PathBuf> {
    // 1. KBGRAB_CHROMIUM_PATH env
    if let Ok(p) = std::env::var("KBGRAB_CHROMIUM_PATH") {
        let path = PathBuf::from(&p);
        if path.exists() {
            return Some(path);
        }
    }

    // 2. ~/.kbgrab/chromium/
    if let Some(home) = dirs::home_dir() {
        let candidates = [
            home.join(".kbgrab/chromium/chrome-linux64/chrome"),
            home.join(".kbgrab/chromium/chrome"),
        ];
        for c in candidates {
            if c.exists() {
                return Some(c);
            }
        }
    }

    // 3. System PATH
    for name in ["google-chrome", "chromium", "chromium-browser"] {
        if let Ok(path) = which::which(name) {
            return Some(path);
        }
    }

    // 4. Common macOS location
    if cfg!(target_os = "macos") {
        let common = PathBuf::from("/Applications/Google Chrome.app/Contents/MacOS/Google Chrome");
        if common.exists() {
            return Some(common);
        }
    }

    None
}

/// One headless Chromium process plus the page everything runs in.
///
/// The caller owns the lifecycle: `launch` once per run, `shutdown` on every
/// exit path.
pub struct BrowserSession {
    browser: Browser,
    page: Page,
}

impl BrowserSession {
    /// Launch headless Chromium set up to save downloads into `download_dir`
    /// without prompting. The directory must already exist.
    pub async fn launch(download_dir: &Path) -> Result<Self> {
        let chrome_path = find_chromium()
            .context("Chromium not found. Install google-chrome or chromium, or set KBGRAB_CHROMIUM_PATH.")?;

        // Chrome wants an absolute download path.
        let download_path = download_dir
            .canonicalize()
            .with_context(|| format!("download directory missing: {}", download_dir.display()))?;

        let config = BrowserConfig::builder()
            .chrome_executable(chrome_path)
            .arg("--headless=new")
            .arg("--disable-gpu")
            .arg("--no-sandbox")
            .arg("--disable-dev-shm-usage")
            .build()
            .map_err(|e| anyhow!("failed to build browser config: {e}"))?;

        let (browser, mut handler) = Browser::launch(config)
            .await
            .context("failed to launch Chromium")?;

        // Drain CDP events for the life of the session. Network and
        // performance events land here too; nothing consumes them yet.
        tokio::spawn(async move {
            while let Some(event) = handler.next().await {
                let _ = event;
            }
        });

        let page = browser
            .new_page("about:blank")
            .await
            .context("failed to create page")?;

        let download_behavior = SetDownloadBehaviorParams::builder()
            .behavior(SetDownloadBehaviorBehavior::Allow)
            .download_path(download_path.to_string_lossy().into_owned())
            .build()
            .map_err(|e| anyhow!("failed to build download behavior params: {e}"))?;
        browser
            .execute(download_behavior)
            .await
            .context("failed to configure download behavior")?;

        // Full-verbosity network/performance event collection.
        page.execute(NetworkEnableParams::default())
            .await
            .context("failed to enable network events")?;
        page.execute(PerformanceEnableParams::default())
            .await
            .context("failed to enable performance events")?;

        tracing::info!(
            "browser session ready, downloads -> {}",
            download_path.display()
        );
        Ok(Self { browser, page })
    }

    /// Terminate the browser process. Errors during teardown are logged, not
    /// propagated; by this point the run's outcome is already decided.
    pub async fn shutdown(mut self) {
        if let Err(e) = self.browser.close().await {
            tracing::warn!("browser close failed: {e}");
        }
        if let Err(e) = self.browser.wait().await {
            tracing::warn!("browser wait failed: {e}");
        }
    }
}

#[async_trait]
impl PageDriver for BrowserSession {
    async fn navigate(&mut self, url: &str) -> Result<()> {
        let result = tokio::time::timeout(NAVIGATION_TIMEOUT, self.page.goto(url)).await;
        match result {
            Ok(Ok(_)) => {
                let _ = self.page.wait_for_navigation().await;
                Ok(())
            }
            Ok(Err(e)) => bail!("navigation to {url} failed: {e}"),
            Err(_) => bail!(
                "navigation to {url} timed out after {}s",
                NAVIGATION_TIMEOUT.as_secs()
            ),
        }
    }

    async fn navigate_expecting_download(&mut self, url: &str) -> Result<()> {
        let result = tokio::time::timeout(NAVIGATION_TIMEOUT, self.page.goto(url)).await;
        match result {
            Ok(Ok(_)) => {}
            // A download-triggering navigation aborts with net::ERR_ABORTED;
            // the file still lands in the download directory.
            Ok(Err(e)) => tracing::debug!("navigation to {url} interrupted: {e}"),
            Err(_) => tracing::debug!("navigation to {url} still pending; polling anyway"),
        }
        Ok(())
    }

    async fn page_html(&self) -> Result<String> {
        let result = self
            .page
            .evaluate("document.documentElement.outerHTML")
            .await
            .context("failed to get page HTML")?;

        let html: String = result
            .into_value()
            .map_err(|e| anyhow!("failed to convert HTML result: {e:?}"))?;
        Ok(html)
    }
}
