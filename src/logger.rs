//! In-memory `log` sink. The terminal owns stdout, so log lines go to a
//! bounded ring that the UI draws as a message panel.

use crate::constants::LOG_BUFFER_CAPACITY;
use log::{Level, LevelFilter, Log, Metadata, Record};
use std::collections::VecDeque;
use std::sync::Mutex;

pub struct LogBuffer {
    lines: Mutex<VecDeque<String>>,
    capacity: usize,
}

static LOGGER: LogBuffer = LogBuffer::new(LOG_BUFFER_CAPACITY);

impl LogBuffer {
    pub const fn new(capacity: usize) -> Self {
        Self {
            lines: Mutex::new(VecDeque::new()),
            capacity,
        }
    }

    /// Most recent lines, oldest first.
    pub fn lines(&self) -> Vec<String> {
        match self.lines.lock() {
            Ok(lines) => lines.iter().cloned().collect(),
            Err(_) => Vec::new(),
        }
    }

    pub fn clear(&self) {
        if let Ok(mut lines) = self.lines.lock() {
            lines.clear();
        }
    }

    fn push(&self, line: String) {
        if self.capacity == 0 {
            return;
        }
        if let Ok(mut lines) = self.lines.lock() {
            while lines.len() >= self.capacity {
                lines.pop_front();
            }
            lines.push_back(line);
        }
    }
}

impl Log for LogBuffer {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = match record.level() {
            Level::Info => record.args().to_string(),
            level => format!("[{}] {}", level, record.args()),
        };
        self.push(line);
    }

    fn flush(&self) {}
}

/// Installs the global buffer. Calling it twice keeps the first install
/// and only updates the level.
pub fn init(debug: bool) -> &'static LogBuffer {
    let _ = log::set_logger(&LOGGER);
    log::set_max_level(if debug {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    });
    &LOGGER
}
