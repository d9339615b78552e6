//! Subscriber setup. Library crates only emit `tracing` events; which subscriber
//! receives them is decided here, once per process.
use std::env;
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

use crate::args::DEFAULT_LOG_LEVEL;

/// `<output>/<MM_DD_YYYY>_log.log`
pub fn log_file_path(output: &Path, day: NaiveDate) -> PathBuf {
    output.join(format!("{}_log.log", day.format("%m_%d_%Y")))
}

///
/// Send all log records of this run to a fresh log file in the output directory.
///
/// # Returns
/// - path of the log file
///
pub fn init_run_log(output: &Path, level: &str) -> Result<PathBuf> {
    let path = log_file_path(output, Local::now().date_naive());
    // a log from an earlier run on the same day is replaced
    let file = File::create(&path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;

    fmt()
        .with_env_filter(env_filter(level))
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init()
        .ok();

    info!("created log file for the gnomAD frequency run");
    info!("initializing run...");
    info!("run started by {}", current_user());
    Ok(path)
}

/// Log to stderr, for commands that don't produce an output directory.
pub fn init_stderr_log(level: &str) {
    fmt()
        .with_env_filter(env_filter(level))
        .with_target(false)
        .with_writer(io::stderr)
        .try_init()
        .ok();
}

fn env_filter(level: &str) -> EnvFilter {
    EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL))
}

fn current_user() -> String {
    env::var("USER")
        .or_else(|_| env::var("USERNAME"))
        .unwrap_or_else(|_| "unknown".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    fn test_log_file_name() {
        let day = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        assert_eq!(
            log_file_path(Path::new("/tmp/run"), day),
            PathBuf::from("/tmp/run/03_05_2024_log.log")
        );
    }

    #[rstest]
    fn test_run_log_replaces_previous_file() {
        let tempdir = tempfile::tempdir().unwrap();
        let stale = log_file_path(tempdir.path(), Local::now().date_naive());
        std::fs::write(&stale, "stale run\n").unwrap();

        let path = init_run_log(tempdir.path(), "info").unwrap();

        assert_eq!(path, stale);
        let text = std::fs::read_to_string(&path).unwrap();
        assert!(!text.contains("stale run"));
    }
}
