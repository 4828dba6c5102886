//! Diagnostic logging to disk.
//!
//! The terminal belongs to the UI, so `tracing` output goes to a daily log
//! file instead. When logging is disabled no subscriber is installed and
//! every event is dropped. Files are named `folio_<date>.log` and stored in
//! the configured log directory (default: `~/.local/share/folio/logs/`).

use crate::config::LoggingConfig;
use anyhow::{Context, Result};
use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Expand a leading `~` to the home directory.
pub fn expand_log_dir(log_dir: &str) -> PathBuf {
    match log_dir.strip_prefix("~/") {
        Some(rest) => match dirs::home_dir() {
            Some(home) => home.join(rest),
            None => PathBuf::from(log_dir),
        },
        None => PathBuf::from(log_dir),
    }
}

pub fn log_file_name(date: chrono::NaiveDate) -> String {
    format!("folio_{}.log", date.format("%Y-%m-%d"))
}

/// Install the file subscriber. Returns the log file path, or `None` when
/// logging is disabled.
pub fn init(config: &LoggingConfig) -> Result<Option<PathBuf>> {
    if !config.enabled {
        return Ok(None);
    }

    let log_dir = expand_log_dir(&config.log_dir);
    let path = log_dir.join(log_file_name(chrono::Local::now().date_naive()));
    let file = open_log_file(&log_dir, &path)?;

    let filter = EnvFilter::try_new(&config.level)
        .with_context(|| format!("Invalid log level: {}", config.level))?;

    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .with_env_filter(filter)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to install logger: {}", e))?;

    tracing::info!(path = %path.display(), "logging started");
    Ok(Some(path))
}

fn open_log_file(log_dir: &Path, path: &Path) -> Result<fs::File> {
    fs::create_dir_all(log_dir)
        .with_context(|| format!("Failed to create log directory {}", log_dir.display()))?;
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_home() {
        if let Some(home) = dirs::home_dir() {
            assert_eq!(expand_log_dir("~/logs"), home.join("logs"));
        }
        assert_eq!(expand_log_dir("/var/log/folio"), PathBuf::from("/var/log/folio"));
        assert_eq!(expand_log_dir("relative"), PathBuf::from("relative"));
    }

    #[test]
    fn test_log_file_name() {
        let date = chrono::NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
        assert_eq!(log_file_name(date), "folio_2024-03-09.log");
    }

    #[test]
    fn test_disabled_installs_nothing() {
        let config = LoggingConfig::default();
        assert!(!config.enabled);
        assert_eq!(init(&config).unwrap(), None);
    }

    #[test]
    fn test_open_log_file_creates_directory() {
        let dir = std::env::temp_dir().join(format!("folio-log-test-{}", std::process::id()));
        let path = dir.join("nested").join("folio.log");
        let parent = path.parent().unwrap().to_path_buf();
        assert!(open_log_file(&parent, &path).is_ok());
        assert!(path.exists());
        let _ = fs::remove_dir_all(&dir);
    }
}
