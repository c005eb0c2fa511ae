use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::Result;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the tracing filter, e.g. `culturesphere_core=debug`.
pub const LOG_ENV: &str = "CULTURESPHERE_LOG";

/// Send tracing output to a log file; the terminal belongs to the UI.
///
/// Returns the path being written to.
pub fn init() -> Result<PathBuf> {
    let dir = dirs::cache_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("culturesphere");
    fs::create_dir_all(&dir)?;
    let path = dir.join("culturesphere.log");

    let file = OpenOptions::new().create(true).append(true).open(&path)?;

    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();

    Ok(path)
}
