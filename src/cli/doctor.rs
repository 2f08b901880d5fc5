//! Environment readiness check.

use anyhow::Result;

use crate::config;
use crate::renderer::find_chromium;

/// Check Chromium availability and the working-directory layout.
pub async fn run() -> Result<()> {
    println!("kbgrab doctor");
    println!("=============");
    println!();

    let os = std::env::consts::OS;
    let arch = std::env::consts::ARCH;
    println!("OS:   {os}");
    println!("Arch: {arch}");
    println!();

    let chromium = find_chromium();
    match &chromium {
        Some(path) => println!("[OK] Chromium found: {}", path.display()),
        None => println!(
            "[!!] Chromium NOT found. Install google-chrome or chromium, or set KBGRAB_CHROMIUM_PATH."
        ),
    }

    let cwd = std::env::current_dir()?;
    let assets = cwd.join(config::ASSETS_DIR);
    if assets.is_dir() {
        println!("[OK] Download directory exists: {}", assets.display());
    } else {
        println!(
            "[--] Download directory will be created on first run: {}",
            assets.display()
        );
    }

    let ledger = cwd.join(config::LEDGER_FILE);
    if ledger.is_file() {
        let recorded = std::fs::read_to_string(&ledger)
            .map(|c| c.lines().count())
            .unwrap_or(0);
        println!("[OK] Ledger present with {recorded} recorded download(s)");
    } else {
        println!("[--] No ledger yet; every attachment is eligible for download");
    }

    println!();
    if chromium.is_some() {
        println!("Status: READY");
    } else {
        println!("Status: NOT READY");
    }
    Ok(())
}
