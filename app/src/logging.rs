//! FILENAME: app/src/logging.rs
// PURPOSE: Unified logging for the application.
// CONTEXT: Installs a `log::Log` backend that writes sequence-numbered lines
// (seq|level|target|message) to stderr and, optionally, a log file. The
// sequence counter is shared so interleaved writers stay sortable.

use log::{Level, LevelFilter, Metadata, Record};
use once_cell::sync::Lazy;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

/// Global sequence counter for log lines.
static LOG_SEQ: AtomicU64 = AtomicU64::new(0);

/// Optional file sink, attached after init.
static LOG_FILE: Lazy<Mutex<Option<File>>> = Lazy::new(|| Mutex::new(None));

static LOGGER: DashboardLogger = DashboardLogger;

/// Get next sequence number.
pub fn next_seq() -> u64 {
    LOG_SEQ.fetch_add(1, Ordering::SeqCst) + 1
}

fn level_letter(level: Level) -> &'static str {
    match level {
        Level::Error => "E",
        Level::Warn => "W",
        Level::Info => "I",
        Level::Debug => "D",
        Level::Trace => "T",
    }
}

struct DashboardLogger;

impl log::Log for DashboardLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format!(
            "{}|{}|{}|{}",
            next_seq(),
            level_letter(record.level()),
            record.target(),
            record.args()
        );

        if let Ok(mut guard) = LOG_FILE.lock() {
            if let Some(ref mut file) = *guard {
                if writeln!(file, "{}", line).is_ok() {
                    let _ = file.flush();
                }
            }
        }
        eprintln!("{}", line);
    }

    fn flush(&self) {
        if let Ok(mut guard) = LOG_FILE.lock() {
            if let Some(ref mut file) = *guard {
                let _ = file.flush();
            }
        }
    }
}

/// Install the logger. Safe to call once per process; a second call reports
/// the error instead of panicking.
pub fn init_logging(level: LevelFilter) -> Result<(), String> {
    log::set_logger(&LOGGER).map_err(|e| format!("logger already set: {}", e))?;
    log::set_max_level(level);
    Ok(())
}

/// Attach (or replace) the file sink. The file is truncated.
pub fn attach_log_file(path: &Path) -> Result<(), String> {
    let file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)
        .map_err(|e| format!("failed to open log file {:?}: {}", path, e))?;

    let mut guard = LOG_FILE.lock().map_err(|e| format!("lock error: {}", e))?;
    *guard = Some(file);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequence_is_monotonic() {
        let a = next_seq();
        let b = next_seq();
        assert!(b > a);
    }

    #[test]
    fn test_level_letters() {
        assert_eq!(level_letter(Level::Info), "I");
        assert_eq!(level_letter(Level::Error), "E");
    }
}
