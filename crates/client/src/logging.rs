use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::config::ClientConfig;

/// Platform log directory for rogue.
///
/// - macOS: `~/Library/Caches/rogue/logs`
/// - Linux: `~/.cache/rogue/logs` (or `$XDG_CACHE_HOME/rogue/logs`)
/// - Windows: `%LOCALAPPDATA%\rogue\logs`
/// - Fallback: `/tmp/rogue/logs`
pub fn log_dir() -> PathBuf {
    directories::ProjectDirs::from("", "", "rogue")
        .map(|dirs| dirs.cache_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("/tmp/rogue"))
        .join("logs")
}

/// Installs the global subscriber: every event goes to
/// `<log dir>/<session>/client.log`, and to stderr so the player sees the game.
///
/// The returned guard flushes the file writer on drop; keep it alive for the
/// whole session.
pub fn setup_logging(config: &ClientConfig) -> Result<WorkerGuard> {
    let root = config.log_dir.clone().unwrap_or_else(log_dir);
    let session_id = config.session_id.clone().unwrap_or_else(|| {
        let timestamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_secs())
            .unwrap_or_default();
        format!("session_{}", timestamp)
    });

    let session_log_dir = root.join(&session_id);
    std::fs::create_dir_all(&session_log_dir).with_context(|| {
        format!(
            "Failed to create log directory: {}",
            session_log_dir.display()
        )
    })?;

    let file_appender = tracing_appender::rolling::never(&session_log_dir, "client.log");
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false);

    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .with(stderr_layer)
        .try_init()
        .context("Failed to install tracing subscriber")?;

    tracing::info!("Logging initialized: session={}", session_id);
    tracing::info!("Log file: {}", log_file(&session_log_dir).display());

    Ok(guard)
}

fn log_file(session_log_dir: &Path) -> PathBuf {
    session_log_dir.join("client.log")
}
