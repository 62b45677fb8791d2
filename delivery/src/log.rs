//! Log sink capability
//!
//! The planner never writes logs directly; it reports to a [`DeliveryLog`].
//! [`TracingLog`] forwards to `tracing` and is what the binary uses.
//! [`RecordingLog`] keeps records in memory for assertions.

use std::sync::{Mutex, MutexGuard, PoisonError};

use serde::{Deserialize, Serialize};
use tracing::{error, info};

/// Destination for planner log messages
pub trait DeliveryLog {
    fn info(&self, message: &str);
    fn error(&self, message: &str, trace: Option<&str>);
}

impl<L: DeliveryLog + ?Sized> DeliveryLog for &L {
    fn info(&self, message: &str) {
        (**self).info(message)
    }

    fn error(&self, message: &str, trace: Option<&str>) {
        (**self).error(message, trace)
    }
}

/// Forwards to the global `tracing` subscriber
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLog;

impl DeliveryLog for TracingLog {
    fn info(&self, message: &str) {
        info!(target: "pizzabot", "{message}");
    }

    fn error(&self, message: &str, trace: Option<&str>) {
        match trace {
            Some(trace) => error!(target: "pizzabot", trace = %trace, "{message}"),
            None => error!(target: "pizzabot", "{message}"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogLevel {
    Info,
    Error,
}

/// A single captured log call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogRecord {
    pub level: LogLevel,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trace: Option<String>,
}

/// In-memory sink
#[derive(Debug, Default)]
pub struct RecordingLog {
    records: Mutex<Vec<LogRecord>>,
}

impl RecordingLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything logged so far
    pub fn records(&self) -> Vec<LogRecord> {
        self.lock().clone()
    }

    pub fn messages(&self, level: LogLevel) -> Vec<String> {
        self.records()
            .into_iter()
            .filter(|r| r.level == level)
            .map(|r| r.message)
            .collect()
    }

    fn push(&self, record: LogRecord) {
        self.lock().push(record);
    }

    /// Records stay readable after a panic while the lock was held.
    fn lock(&self) -> MutexGuard<'_, Vec<LogRecord>> {
        self.records.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl DeliveryLog for RecordingLog {
    fn info(&self, message: &str) {
        self.push(LogRecord {
            level: LogLevel::Info,
            message: message.to_string(),
            trace: None,
        });
    }

    fn error(&self, message: &str, trace: Option<&str>) {
        self.push(LogRecord {
            level: LogLevel::Error,
            message: message.to_string(),
            trace: trace.map(String::from),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::sync::Arc;

    #[test]
    fn test_recording_log_keeps_order_and_levels() {
        let log = RecordingLog::new();
        log.info("first");
        log.error("second", Some("trace"));
        log.info("third");

        let records = log.records();
        assert_eq!(records.len(), 3);
        assert_eq!(records[1].level, LogLevel::Error);
        assert_eq!(records[1].trace.as_deref(), Some("trace"));
        assert_eq!(log.messages(LogLevel::Info), vec!["first", "third"]);
    }

    #[test]
    fn test_reference_forwards() {
        let log = RecordingLog::new();
        let by_ref: &dyn DeliveryLog = &log;
        by_ref.info("hello");
        (&log).error("oops", None);
        assert_eq!(log.messages(LogLevel::Info), vec!["hello"]);
        assert_eq!(log.messages(LogLevel::Error), vec!["oops"]);
    }

    #[test]
    fn test_recording_log_survives_poisoned_lock() {
        let log = RecordingLog::new();
        log.info("before");

        let poisoned = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let _guard = log.records.lock().unwrap();
            panic!("panic while holding the record lock");
        }));
        assert!(poisoned.is_err());
        assert!(log.records.is_poisoned());

        log.error("after", None);
        assert_eq!(log.messages(LogLevel::Info), vec!["before"]);
        assert_eq!(log.messages(LogLevel::Error), vec!["after"]);
    }

    /// Shared buffer the fmt subscriber writes into.
    #[derive(Clone, Default)]
    struct CapturedOutput(Arc<Mutex<Vec<u8>>>);

    impl Write for CapturedOutput {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    impl CapturedOutput {
        fn contents(&self) -> String {
            String::from_utf8_lossy(&self.0.lock().unwrap_or_else(PoisonError::into_inner))
                .into_owned()
        }
    }

    #[test]
    fn test_tracing_log_emits_events() {
        let output = CapturedOutput::default();
        let writer = output.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_ansi(false)
            .with_max_level(tracing::Level::INFO)
            .with_writer(move || writer.clone())
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            TracingLog.info("Grid dimensions are: 5x5");
            TracingLog.error("y-coord exceeds grid size", Some("CoordinateOutOfBounds"));
        });

        let contents = output.contents();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 2, "captured: {contents}");
        assert!(lines[0].contains("INFO"));
        assert!(lines[0].contains("pizzabot"));
        assert!(lines[0].contains("Grid dimensions are: 5x5"));
        assert!(lines[1].contains("ERROR"));
        assert!(lines[1].contains("y-coord exceeds grid size"));
        assert!(lines[1].contains("trace=CoordinateOutOfBounds"));
    }
}
