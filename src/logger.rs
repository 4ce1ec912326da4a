//! Logging setup
//!
//! The terminal is in raw mode while the UI runs, so log records go to a file
//! through `fern`. A copy of every record is also kept in a [`LogBuffer`] so the
//! debug overlay can show recent activity without leaving the UI.

use crate::config::LoggingConfig;
use anyhow::{Context, Result};
use chrono::Local;
use std::sync::{Arc, Mutex};

/// Maximum number of records retained in memory
const LOG_BUFFER_CAPACITY: usize = 500;

/// Shared in-memory log buffer that can be used across the application
#[derive(Clone)]
pub struct LogBuffer {
    logs: Arc<Mutex<Vec<String>>>,
}

impl LogBuffer {
    pub fn new() -> Self {
        Self {
            logs: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Add a log entry
    pub fn push(&self, message: String) {
        if let Ok(mut logs) = self.logs.lock() {
            if logs.len() >= LOG_BUFFER_CAPACITY {
                logs.remove(0);
            }
            logs.push(message);
        }
    }

    /// Get all logs, newest first
    pub fn get_logs(&self) -> Vec<String> {
        if let Ok(logs) = self.logs.lock() {
            logs.iter().rev().cloned().collect()
        } else {
            Vec::new()
        }
    }

    /// Clear all logs
    pub fn clear(&self) {
        if let Ok(mut logs) = self.logs.lock() {
            logs.clear();
        }
    }
}

impl Default for LogBuffer {
    fn default() -> Self {
        Self::new()
    }
}

/// Install the global logger.
///
/// Returns the in-memory buffer fed by the dispatcher. When logging is
/// disabled nothing is installed and the buffer stays empty.
pub fn init(config: &LoggingConfig) -> Result<LogBuffer> {
    let buffer = LogBuffer::new();
    if !config.enabled {
        return Ok(buffer);
    }

    let path = config.resolve_file()?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
    }
    let file = fern::log_file(&path).with_context(|| format!("Failed to open log file: {}", path.display()))?;

    let sink = buffer.clone();
    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} {:<5} {}] {}",
                Local::now().format("%H:%M:%S%.3f"),
                record.level(),
                record.target(),
                message
            ))
        })
        .level(config.level_filter()?)
        .chain(file)
        .chain(fern::Output::call(move |record| sink.push(record.args().to_string())))
        .apply()
        .context("Failed to install logger")?;

    log::info!("Logging to {}", path.display());
    Ok(buffer)
}
