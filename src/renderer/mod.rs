//! Browser abstraction for page rendering and download-triggering navigation.
//!
//! `PageDriver` is the seam the harvester and download watcher program
//! against; the real implementation is Chromium via chromiumoxide.

pub mod chromium;

use anyhow::Result;
use async_trait::async_trait;

pub use chromium::{find_chromium, BrowserSession};

/// A live browser page the harvester can steer.
#[async_trait]
pub trait PageDriver: Send {
    /// Navigate to a URL and block until the browser reports the page loaded.
    async fn navigate(&mut self, url: &str) -> Result<()>;

    /// Navigate to a URL that is expected to trigger a file download rather
    /// than render a document. Navigation errors are tolerated: the browser
    /// aborts such navigations with net::ERR_ABORTED while the download
    /// proceeds in the background.
    async fn navigate_expecting_download(&mut self, url: &str) -> Result<()>;

    /// Rendered markup of the current page, after client-side scripts ran.
    async fn page_html(&self) -> Result<String>;
}
