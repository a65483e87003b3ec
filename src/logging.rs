// src/logging.rs
// =============================================================================
// Sets up `tracing` output for the binary.
//
// - Default level: info for this crate, warn for everything else
// - --verbose: debug for this crate (shows per-page link counts)
// - RUST_LOG still works and is applied on top
// - --log-file: also write plain (no colors) logs to a file
// =============================================================================

use anyhow::Result;
use std::fs;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

fn env_filter(verbose: bool) -> Result<EnvFilter> {
    let level = if verbose { "debug" } else { "info" };

    Ok(EnvFilter::from_default_env()
        .add_directive(format!("sitemap_crawler={}", level).parse()?)
        .add_directive("tower_http=info".parse()?)
        .add_directive("warn".parse()?))
}

/// Installs the global subscriber; call once at startup
pub fn init_logging(verbose: bool, log_file: Option<&Path>) -> Result<()> {
    let filter = env_filter(verbose)?;

    // Logs go to stderr so `--json` output on stdout stays clean
    let stderr_layer = fmt::layer().with_target(true).with_writer(std::io::stderr);

    let file_layer = match log_file {
        Some(path) => {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            let file = fs::File::create(path)?;
            Some(
                fmt::layer()
                    .with_target(true)
                    .with_ansi(false)
                    .with_writer(Mutex::new(file)),
            )
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init()?;

    Ok(())
}
