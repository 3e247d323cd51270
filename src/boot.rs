use log::{error, info, warn};
use std::fs;
use std::path::Path;
use std::process;

use crate::blog::loader::PostSource;
use crate::config::SiteConfig;

/// Static assets the pages link to
const EXPECTED_STATIC: &[&str] = &["css/site.css"];

/// Outcome of the start-up checks.
#[derive(Debug, Default, PartialEq)]
pub struct BootReport {
    pub warnings: u32,
    pub errors: u32,
}

/// Run all boot checks. Call this before Rocket launches.
/// Creates the static directory if missing, warns about missing assets or
/// a missing local post collection, and aborts on errors.
pub fn run(config: &SiteConfig) {
    info!("Boot check starting...");

    let report = check(config);

    if report.errors > 0 {
        error!(
            "Boot check FAILED: {} error(s), {} warning(s). Aborting.",
            report.errors, report.warnings
        );
        process::exit(1);
    }

    if report.warnings > 0 {
        warn!(
            "Boot check passed with {} warning(s). Some features may not work correctly.",
            report.warnings
        );
    } else {
        info!("Boot check passed. All systems go.");
    }
}

pub fn check(config: &SiteConfig) -> BootReport {
    let mut report = BootReport::default();

    // ── 1. Static directory ────────────────────────────
    let static_dir = Path::new(&config.static_dir);
    if !static_dir.exists() {
        match fs::create_dir_all(static_dir) {
            Ok(_) => info!("  Created directory: {}", config.static_dir),
            Err(e) => {
                error!("  FAILED to create directory {}: {}", config.static_dir, e);
                report.errors += 1;
            }
        }
    }

    // ── 2. Static assets ───────────────────────────────
    for file in EXPECTED_STATIC {
        if !static_dir.join(file).exists() {
            warn!("  Missing static asset: {}/{} (pages will be unstyled)", config.static_dir, file);
            report.warnings += 1;
        }
    }

    // ── 3. Post collection ─────────────────────────────
    match PostSource::parse(&config.posts_source) {
        Ok(PostSource::File(path)) => {
            if !path.exists() {
                warn!(
                    "  Post collection {} not found (the blog will show its error state)",
                    path.display()
                );
                report.warnings += 1;
            }
        }
        Ok(PostSource::Remote(url)) => info!("  Posts will be fetched from {}", url),
        Err(e) => {
            error!("  {}", e);
            report.errors += 1;
        }
    }

    // ── 4. Rocket.toml exists ──────────────────────────
    if !Path::new("Rocket.toml").exists() {
        warn!("  Rocket.toml not found, using default server config");
        report.warnings += 1;
    }

    report
}
