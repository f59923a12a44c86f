//! Log setup.
//!
//! The TUI draws on stdout, so its logs go to a file. Subcommands that only
//! print log to stderr, and to a file only when `--log-file` names one.
//! `RUST_LOG` takes precedence over the configured level when set.

use crate::config::LogLevel;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use tracing_subscriber::filter::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::Layer;

static INIT_GUARD: OnceLock<()> = OnceLock::new();

fn env_filter(level: LogLevel) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(level.to_level_filter().into())
        .from_env_lossy()
}

/// The file to log to: an explicit `--log-file` always, the configured file
/// only for the TUI
pub fn log_path(explicit: Option<&Path>, configured: &str, tui_mode: bool) -> Option<PathBuf> {
    match explicit {
        Some(path) => Some(path.to_path_buf()),
        None if tui_mode => Some(PathBuf::from(configured)),
        None => None,
    }
}

fn stderr_only(level: LogLevel) {
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(env_filter(level))
        .try_init();
}

/// Install the global subscriber. Calling this more than once is a no-op.
pub fn init(log_file: Option<&Path>, level: LogLevel, tui_mode: bool) {
    if INIT_GUARD.set(()).is_err() {
        return;
    }

    let Some(log_file) = log_file else {
        if !tui_mode {
            stderr_only(level);
        }
        return;
    };

    let maybe_log_file = std::fs::OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(log_file);

    match maybe_log_file {
        Ok(file) => {
            let file_layer = tracing_subscriber::fmt::layer()
                .with_writer(file)
                .with_target(true)
                .with_ansi(false)
                .with_filter(env_filter(level));

            if tui_mode {
                let _ = tracing_subscriber::registry().with(file_layer).try_init();
            } else {
                let stderr_layer = tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_filter(env_filter(level));
                let _ = tracing_subscriber::registry()
                    .with(file_layer)
                    .with(stderr_layer)
                    .try_init();
            }
        }
        Err(_) if tui_mode => {
            // Nowhere safe to write while the alternate screen is up
        }
        Err(_) => stderr_only(level),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_LOG_FILE;

    #[test]
    fn test_tui_logs_to_configured_file() {
        assert_eq!(
            log_path(None, DEFAULT_LOG_FILE, true),
            Some(PathBuf::from(DEFAULT_LOG_FILE))
        );
    }

    #[test]
    fn test_print_only_commands_skip_default_file() {
        assert_eq!(log_path(None, DEFAULT_LOG_FILE, false), None);
    }

    #[test]
    fn test_explicit_log_file_always_wins() {
        let path = Path::new("/tmp/studio.log");
        assert_eq!(log_path(Some(path), DEFAULT_LOG_FILE, false), Some(path.to_path_buf()));
        assert_eq!(log_path(Some(path), DEFAULT_LOG_FILE, true), Some(path.to_path_buf()));
    }
}
