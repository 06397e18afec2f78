//! Logging setup for the application.
//!
//! Installs a global tracing subscriber that writes to stdout and to a
//! per-launch log file under `.heartcheck/logs`. Old launch logs are pruned
//! so the directory stays bounded.

use std::{
    fs::{self, OpenOptions},
    path::{Path, PathBuf},
    sync::OnceLock,
    time::SystemTime,
};

use time::{OffsetDateTime, UtcOffset, format_description::FormatItem, macros::format_description};
use tracing_appender::{non_blocking::WorkerGuard, rolling};
use tracing_subscriber::{EnvFilter, Registry, fmt, prelude::*};

use crate::app_dirs;

/// Maximum number of launch logs kept on disk.
const MAX_LOG_FILES: usize = 10;
const LOG_FILE_PREFIX: &str = "heartcheck";
const DEFAULT_FILTER: &str = "info";

static LOG_GUARD: OnceLock<WorkerGuard> = OnceLock::new();

/// Errors that may occur while initializing logging.
#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    /// The application directory could not be prepared.
    #[error("Log directory unavailable: {0}")]
    AppDir(#[from] app_dirs::AppDirError),
    /// Failed to enumerate existing log files for pruning.
    #[error("Failed to read log directory {path}: {source}")]
    ReadDir {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Failed to remove an obsolete log file.
    #[error("Failed to remove old log file {path}: {source}")]
    RemoveFile {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Failed to create the log file for this launch.
    #[error("Failed to create log file at {path}: {source}")]
    CreateLogFile {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Failed to format a timestamp for the log filename.
    #[error("Failed to format log filename time: {0}")]
    FormatTime(time::error::Format),
    /// Failed to set the global tracing subscriber.
    #[error("Failed to install global tracing subscriber: {0}")]
    SetGlobal(tracing::subscriber::SetGlobalDefaultError),
}

/// Initialize tracing to write to stdout and a per-launch log file.
///
/// Subsequent calls are no-ops. Failures are returned so callers can keep
/// running without file logging.
pub fn init() -> Result<(), LoggingError> {
    if LOG_GUARD.get().is_some() {
        return Ok(());
    }

    let log_dir = app_dirs::logs_dir()?;
    let log_file_name = log_file_name(now_local_or_utc())?;
    let log_path = log_dir.join(&log_file_name);
    create_log_file(&log_path)?;
    prune_old_logs(&log_dir, MAX_LOG_FILES)?;

    let (file_writer, guard) =
        tracing_appender::non_blocking(rolling::never(&log_dir, &log_file_name));
    let timer = local_timer();
    let subscriber = Registry::default()
        .with(env_filter())
        .with(
            fmt::layer()
                .with_timer(timer.clone())
                .with_writer(std::io::stdout),
        )
        .with(
            fmt::layer()
                .with_ansi(false)
                .with_timer(timer)
                .with_writer(file_writer),
        );
    tracing::subscriber::set_global_default(subscriber).map_err(LoggingError::SetGlobal)?;
    let _ = LOG_GUARD.set(guard);

    tracing::info!("Logging initialized; log file at {}", log_path.display());
    Ok(())
}

fn create_log_file(path: &Path) -> Result<(), LoggingError> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map(|_| ())
        .map_err(|source| LoggingError::CreateLogFile {
            path: path.to_path_buf(),
            source,
        })
}

/// Remove the oldest `.log` files until at most `max_files` remain.
fn prune_old_logs(dir: &Path, max_files: usize) -> Result<(), LoggingError> {
    let mut logs = fs::read_dir(dir)
        .map_err(|source| LoggingError::ReadDir {
            path: dir.to_path_buf(),
            source,
        })?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.is_file())
        .filter(|path| path.extension().and_then(|ext| ext.to_str()) == Some("log"))
        .map(|path| {
            let modified = fs::metadata(&path)
                .and_then(|meta| meta.modified())
                .unwrap_or(SystemTime::UNIX_EPOCH);
            (modified, path)
        })
        .collect::<Vec<_>>();
    if logs.len() <= max_files {
        return Ok(());
    }

    logs.sort_by_key(|(modified, _)| *modified);
    let excess = logs.len() - max_files;
    for (_, path) in logs.drain(..excess) {
        fs::remove_file(&path).map_err(|source| LoggingError::RemoveFile { path, source })?;
    }
    Ok(())
}

fn log_file_name(now: OffsetDateTime) -> Result<String, LoggingError> {
    const NAME_FORMAT: &[FormatItem<'_>] =
        format_description!("[year]-[month]-[day]_[hour]-[minute]-[second]");
    let stamp = now.format(NAME_FORMAT).map_err(LoggingError::FormatTime)?;
    Ok(format!("{LOG_FILE_PREFIX}_{stamp}.log"))
}

fn local_timer() -> fmt::time::OffsetTime<time::format_description::BorrowedFormatItem<'static>> {
    const DISPLAY_FORMAT: &[FormatItem<'static>] =
        format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");
    let offset = UtcOffset::current_local_offset().unwrap_or(UtcOffset::UTC);
    fmt::time::OffsetTime::new(offset, DISPLAY_FORMAT.into())
}

fn now_local_or_utc() -> OffsetDateTime {
    OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc())
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{thread, time::Duration};
    use tempfile::tempdir;

    fn count_logs(dir: &Path) -> usize {
        fs::read_dir(dir)
            .unwrap()
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.path().extension().and_then(|ext| ext.to_str()) == Some("log"))
            .count()
    }

    #[test]
    fn log_filename_has_timestamp_and_prefix() {
        let fixed = OffsetDateTime::from_unix_timestamp(1_700_000_000).unwrap();
        let name = log_file_name(fixed).unwrap();
        assert_eq!(name, "heartcheck_2023-11-14_22-13-20.log");
    }

    #[test]
    fn prune_keeps_newest_logs_and_ignores_other_files() {
        let dir = tempdir().unwrap();
        for idx in 0..12 {
            create_log_file(&dir.path().join(format!("heartcheck_{idx}.log"))).unwrap();
            thread::sleep(Duration::from_millis(10));
        }
        fs::write(dir.path().join("notes.txt"), "keep me").unwrap();

        prune_old_logs(dir.path(), 10).unwrap();

        assert_eq!(count_logs(dir.path()), 10);
        assert!(!dir.path().join("heartcheck_0.log").exists());
        assert!(!dir.path().join("heartcheck_1.log").exists());
        assert!(dir.path().join("heartcheck_11.log").exists());
        assert!(dir.path().join("notes.txt").exists());
    }

    #[test]
    fn prune_is_noop_under_limit() {
        let dir = tempdir().unwrap();
        for idx in 0..3 {
            create_log_file(&dir.path().join(format!("heartcheck_{idx}.log"))).unwrap();
        }
        prune_old_logs(dir.path(), 10).unwrap();
        assert_eq!(count_logs(dir.path()), 3);
    }
}
