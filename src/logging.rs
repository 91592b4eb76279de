//! File logging for report runs.
//!
//! Every run truncates its log file. `RUST_LOG` takes precedence over the
//! level chosen from the command line.

use anyhow::Context;
use std::fs::File;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

use crate::shared::Result;

pub const DEFAULT_LOG_FILE: &str = "_project_inventory_license_audit_report.log";

/// Level used when `RUST_LOG` is not set.
pub fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "debug"
    } else {
        "info"
    }
}

/// Installs the global subscriber writing plain-text events to `path`.
pub fn init_logging(path: &Path, verbose: bool) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to install logger: {}", e))?;

    Ok(())
}
