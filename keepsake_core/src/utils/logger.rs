use crate::utils::error::KeepsakeResult;
use chrono::{DateTime, Utc};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use std::sync::{Arc, Mutex, OnceLock};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Info,
    Debug,
    Warn,
    Error,
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogLevel::Info => write!(f, "INFO"),
            LogLevel::Debug => write!(f, "DEBUG"),
            LogLevel::Warn => write!(f, "WARN"),
            LogLevel::Error => write!(f, "ERROR"),
        }
    }
}

/// File logger writing timestamped lines to `.keepsake/logs/latest.log`.
#[derive(Clone)]
pub struct Logger {
    file_handle: Arc<Mutex<Option<std::fs::File>>>,
}

impl Logger {
    pub fn new() -> KeepsakeResult<Self> {
        let logs_dir = PathBuf::from(".keepsake").join("logs");
        fs::create_dir_all(&logs_dir)?;

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(logs_dir.join("latest.log"))?;

        Ok(Self {
            file_handle: Arc::new(Mutex::new(Some(file))),
        })
    }

    pub fn log(&self, level: LogLevel, message: &str) {
        let timestamp: DateTime<Utc> = Utc::now();
        let line = format!(
            "[{}] [{}] {}\n",
            timestamp.format("%Y-%m-%d %H:%M:%S%.3f UTC"),
            level,
            message
        );

        if let Ok(mut guard) = self.file_handle.lock() {
            if let Some(ref mut file) = *guard {
                let _ = file.write_all(line.as_bytes());
                let _ = file.flush();
            }
        }
    }

    pub fn info(&self, message: &str) {
        self.log(LogLevel::Info, message);
    }

    pub fn debug(&self, message: &str) {
        self.log(LogLevel::Debug, message);
    }

    pub fn warn(&self, message: &str) {
        self.log(LogLevel::Warn, message);
    }

    pub fn error(&self, message: &str) {
        self.log(LogLevel::Error, message);
    }
}

static GLOBAL_LOGGER: OnceLock<Logger> = OnceLock::new();

pub fn init_global_logger() -> KeepsakeResult<()> {
    let logger = Logger::new()?;
    let _ = GLOBAL_LOGGER.set(logger);
    Ok(())
}

pub fn get_global_logger() -> Option<&'static Logger> {
    GLOBAL_LOGGER.get()
}

pub fn log(level: LogLevel, message: &str) {
    if let Some(logger) = get_global_logger() {
        logger.log(level, message);
    }
}

pub fn info(message: &str) {
    log(LogLevel::Info, message);
}

pub fn warn(message: &str) {
    log(LogLevel::Warn, message);
}

pub fn error(message: &str) {
    log(LogLevel::Error, message);
}
