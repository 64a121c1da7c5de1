//! Diagnostic log output.
//!
//! The terminal belongs to the UI while it runs, so tracing output only goes
//! anywhere when a log file is requested with `--log`.

use std::fs::{File, OpenOptions};
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Environment variable holding the tracing filter directives.
pub const LOG_FILTER_ENV: &str = "PULSECHAT_LOG";
const DEFAULT_FILTER: &str = "info";

/// Installs a global subscriber that appends formatted events to `path`.
pub fn init_file_logging(path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let file = open_log_file(path)?;
    let filter = EnvFilter::try_from_env(LOG_FILTER_ENV)
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_ansi(false)
                .with_writer(Mutex::new(file)),
        )
        .try_init()?;

    tracing::info!(path = %path.display(), "diagnostic logging enabled");
    Ok(())
}

fn open_log_file(path: &Path) -> Result<File, Box<dyn std::error::Error>> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    Ok(file)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    fn log_file_is_created_with_missing_parents() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("pulsechat.log");
        let mut file = open_log_file(&path).unwrap();
        writeln!(file, "first").unwrap();
        assert!(path.exists());
    }

    #[test]
    fn log_file_is_appended_not_truncated() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("pulsechat.log");
        std::fs::write(&path, "existing\n").unwrap();

        let mut file = open_log_file(&path).unwrap();
        writeln!(file, "more").unwrap();
        drop(file);

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "existing\nmore\n");
    }
}
