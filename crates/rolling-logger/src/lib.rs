//! Rolling Logger
//!
//! `log` backend that keeps the most recent records in a circular buffer
//! and forwards each one to the browser console (stderr off-wasm).

use std::collections::VecDeque;
use std::fmt;
use std::sync::{Mutex, OnceLock};

use chrono::{DateTime, Local};
use log::{Level, LevelFilter, Log, Metadata, Record};
use thiserror::Error;

/// Records kept by the global logger before the oldest is evicted
pub const DEFAULT_CAPACITY: usize = 200;

static LOGGER: OnceLock<RollingLogger> = OnceLock::new();

#[derive(Debug, Error)]
pub enum LoggerError {
    #[error("logger already initialized")]
    AlreadyInitialized,
    #[error("logger not initialized")]
    NotInitialized,
    #[error(transparent)]
    SetLogger(#[from] log::SetLoggerError),
}

/// One captured record
#[derive(Debug, Clone)]
pub struct LogEntry {
    pub timestamp: DateTime<Local>,
    pub level: Level,
    pub target: String,
    pub message: String,
}

impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {:<5} {}: {}",
            self.timestamp.format("%H:%M:%S%.3f"),
            self.level,
            self.target,
            self.message
        )
    }
}

pub struct RollingLogger {
    app_name: String,
    level: LevelFilter,
    capacity: usize,
    buffer: Mutex<VecDeque<LogEntry>>,
}

impl RollingLogger {
    pub fn new(app_name: &str, level: LevelFilter) -> Self {
        Self::with_capacity(app_name, level, DEFAULT_CAPACITY)
    }

    pub fn with_capacity(app_name: &str, level: LevelFilter, capacity: usize) -> Self {
        Self {
            app_name: app_name.to_string(),
            level,
            capacity: capacity.max(1),
            buffer: Mutex::new(VecDeque::with_capacity(capacity.max(1))),
        }
    }

    pub fn level(&self) -> LevelFilter {
        self.level
    }

    /// Newest `n` entries, oldest first
    pub fn recent(&self, n: usize) -> Vec<LogEntry> {
        let buffer = self.buffer.lock().unwrap_or_else(|e| e.into_inner());
        let skip = buffer.len().saturating_sub(n);
        buffer.iter().skip(skip).cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.buffer.lock().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn push(&self, entry: LogEntry) {
        let mut buffer = self.buffer.lock().unwrap_or_else(|e| e.into_inner());
        if buffer.len() == self.capacity {
            buffer.pop_front();
        }
        buffer.push_back(entry);
    }

    fn emit(&self, entry: &LogEntry) {
        let line = format!("[{}] {}", self.app_name, entry);

        #[cfg(target_arch = "wasm32")]
        {
            let line = wasm_bindgen::JsValue::from(line);
            match entry.level {
                Level::Error => web_sys::console::error_1(&line),
                Level::Warn => web_sys::console::warn_1(&line),
                Level::Info => web_sys::console::info_1(&line),
                Level::Debug | Level::Trace => web_sys::console::debug_1(&line),
            }
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            eprintln!("{}", line);
        }
    }
}

impl Log for RollingLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let entry = LogEntry {
            timestamp: Local::now(),
            level: record.level(),
            target: record.target().to_string(),
            message: record.args().to_string(),
        };
        self.emit(&entry);
        self.push(entry);
    }

    fn flush(&self) {}
}

/// Install the global logger. Call once, before the first log record.
pub fn init_logger(app_name: &str, level: LevelFilter) -> Result<(), LoggerError> {
    LOGGER
        .set(RollingLogger::new(app_name, level))
        .map_err(|_| LoggerError::AlreadyInitialized)?;
    let logger = LOGGER.get().ok_or(LoggerError::NotInitialized)?;
    log::set_logger(logger)?;
    log::set_max_level(level);
    Ok(())
}

/// Newest `n` entries captured by the global logger
pub fn recent(n: usize) -> Vec<LogEntry> {
    LOGGER.get().map(|logger| logger.recent(n)).unwrap_or_default()
}

pub fn info(msg: &str) -> Result<(), LoggerError> {
    write_global(Level::Info, msg)
}

pub fn error(msg: &str) -> Result<(), LoggerError> {
    write_global(Level::Error, msg)
}

fn write_global(level: Level, msg: &str) -> Result<(), LoggerError> {
    let logger = LOGGER.get().ok_or(LoggerError::NotInitialized)?;
    logger.log(
        &Record::builder()
            .level(level)
            .target(&logger.app_name)
            .args(format_args!("{}", msg))
            .build(),
    );
    Ok(())
}
