//! Custom logging module.
//!
//! The terminal belongs to the UI, so log records are formatted into a
//! bounded in-memory buffer that the log panel renders.

use crate::error::{AppError, AppResult};
use log::{Level, LevelFilter, Log, Metadata, Record};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// Maximum number of entries kept for display.
///
pub const MAX_ENTRIES: usize = 500;

/// Records from this crate pass at the configured level; everything else
/// only at warn and above.
const CRATE_TARGET: &str = "todo_tui";

/// Shared buffer of formatted log entries, oldest first.
///
pub type LogBuffer = Arc<Mutex<VecDeque<String>>>;

/// Format a log record into a string for display
///
pub fn format_log(record: &Record) -> String {
    let timestamp = chrono::Utc::now().format("%Y-%m-%d %H:%M:%S%.3f");
    let level_str = match record.level() {
        Level::Error => "ERROR",
        Level::Warn => "WARN",
        Level::Info => "INFO",
        Level::Debug => "DEBUG",
        Level::Trace => "TRACE",
    };
    format!("{} {} {}", timestamp, level_str, record.args())
}

/// Logger that captures formatted records into a `LogBuffer`.
///
pub struct BufferLogger {
    entries: LogBuffer,
    level: LevelFilter,
}

impl BufferLogger {
    pub fn new(level: LevelFilter) -> Self {
        BufferLogger {
            entries: LogBuffer::default(),
            level,
        }
    }

    /// Return a handle to the captured entries.
    ///
    pub fn entries(&self) -> LogBuffer {
        Arc::clone(&self.entries)
    }
}

impl Log for BufferLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        if metadata.target().starts_with(CRATE_TARGET) {
            metadata.level() <= self.level
        } else {
            metadata.level() <= Level::Warn
        }
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        // A poisoned buffer only loses diagnostics.
        if let Ok(mut entries) = self.entries.lock() {
            if entries.len() == MAX_ENTRIES {
                entries.pop_front();
            }
            entries.push_back(format_log(record));
        }
    }

    fn flush(&self) {}
}

/// Install the buffer logger as the global logger and return its buffer.
///
pub fn init(level: LevelFilter) -> AppResult<LogBuffer> {
    let logger = BufferLogger::new(level);
    let entries = logger.entries();
    log::set_boxed_logger(Box::new(logger)).map_err(|e| AppError::Logger(e.to_string()))?;
    log::set_max_level(level.max(LevelFilter::Warn));
    Ok(entries)
}
