//! File-backed `log` sink.
//!
//! Stdout is the drawing surface, so log records go to a file named by
//! `HOLO_LOG`. Nothing is logged when the variable is unset.

use anyhow::Context;
use log::{LevelFilter, Log, Metadata, Record};
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;
use std::sync::Mutex;

pub const LOG_PATH_VAR: &str = "HOLO_LOG";
pub const LOG_LEVEL_VAR: &str = "HOLO_LOG_LEVEL";

pub struct FileLogger {
    file: Mutex<File>,
    level: LevelFilter,
}

impl FileLogger {
    pub fn open(path: &Path, level: LevelFilter) -> std::io::Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self {
            file: Mutex::new(file),
            level,
        })
    }
}

impl Log for FileLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }
        if let Ok(mut file) = self.file.lock() {
            let _ = writeln!(
                file,
                "{} {:<5} {}: {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                record.level(),
                record.target(),
                record.args()
            );
        }
    }

    fn flush(&self) {
        if let Ok(mut file) = self.file.lock() {
            let _ = file.flush();
        }
    }
}

/// Parse a level name, falling back to `Info`
pub fn parse_level(value: Option<&str>) -> LevelFilter {
    value
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(LevelFilter::Info)
}

/// Install the file logger if `HOLO_LOG` is set. Returns whether it was installed.
pub fn init_from_env() -> anyhow::Result<bool> {
    let Some(path) = std::env::var_os(LOG_PATH_VAR) else {
        return Ok(false);
    };
    let level = parse_level(std::env::var(LOG_LEVEL_VAR).ok().as_deref());
    let logger = FileLogger::open(Path::new(&path), level)
        .with_context(|| format!("cannot open log file {}", Path::new(&path).display()))?;
    log::set_boxed_logger(Box::new(logger)).context("logger already installed")?;
    log::set_max_level(level);
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use log::Level;

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level(None), LevelFilter::Info);
        assert_eq!(parse_level(Some("debug")), LevelFilter::Debug);
        assert_eq!(parse_level(Some(" WARN ")), LevelFilter::Warn);
        assert_eq!(parse_level(Some("chatty")), LevelFilter::Info);
    }

    #[test]
    fn test_writes_enabled_records() {
        let path = std::env::temp_dir().join(format!("holo-log-test-{}.log", std::process::id()));
        let _ = std::fs::remove_file(&path);
        let logger = FileLogger::open(&path, LevelFilter::Info).unwrap();

        logger.log(
            &Record::builder()
                .level(Level::Info)
                .target("holo")
                .args(format_args!("resized to {}x{}", 80, 23))
                .build(),
        );
        logger.log(
            &Record::builder()
                .level(Level::Debug)
                .target("holo")
                .args(format_args!("hidden"))
                .build(),
        );
        logger.flush();

        let contents = std::fs::read_to_string(&path).unwrap();
        let _ = std::fs::remove_file(&path);
        assert!(contents.contains("INFO  holo: resized to 80x23"));
        assert!(!contents.contains("hidden"));
    }
}
