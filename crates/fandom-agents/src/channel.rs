//! Logging channels that receive motive log records.
//!
//! Hosts may pass any `Fn(LogRecord) + Send + Sync` closure, or use one of
//! the channels here.

use std::sync::Mutex;

use fandom_types::LogRecord;
use tracing::info;

/// Sink for structured log records.
pub trait LoggingChannel: Send + Sync {
    /// Deliver one record.
    fn log(&self, record: LogRecord);
}

impl<F> LoggingChannel for F
where
    F: Fn(LogRecord) + Send + Sync,
{
    fn log(&self, record: LogRecord) {
        self(record);
    }
}

/// Forwards records to `tracing` at info level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingChannel;

impl LoggingChannel for TracingChannel {
    fn log(&self, record: LogRecord) {
        info!(key = %record.key, value = %record.value, "motive log record");
    }
}

/// Keeps every record in memory, in arrival order.
#[derive(Debug, Default)]
pub struct RecordingChannel {
    records: Mutex<Vec<LogRecord>>,
}

impl RecordingChannel {
    /// Create an empty channel.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the records received so far.
    pub fn records(&self) -> Vec<LogRecord> {
        let Ok(guard) = self.records.lock() else {
            return Vec::new(); // poisoned mutex -- nothing trustworthy to return
        };
        guard.clone()
    }

    /// Number of records received so far.
    pub fn len(&self) -> usize {
        self.records.lock().map_or(0, |guard| guard.len())
    }

    /// Whether no record has been received.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl LoggingChannel for RecordingChannel {
    fn log(&self, record: LogRecord) {
        let Ok(mut guard) = self.records.lock() else {
            return;
        };
        guard.push(record);
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    #[test]
    fn recording_channel_keeps_order() {
        let channel = RecordingChannel::new();
        assert!(channel.is_empty());
        channel.log(LogRecord::reward(1.0));
        channel.log(LogRecord::reward(2.0));
        let values: Vec<Option<f64>> = channel.records().iter().map(LogRecord::as_f64).collect();
        assert_eq!(values, vec![Some(1.0), Some(2.0)]);
        assert_eq!(channel.len(), 2);
    }

    #[test]
    fn closures_are_channels() {
        let seen = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&seen);
        let channel = move |_record: LogRecord| {
            counter.fetch_add(1, Ordering::SeqCst);
        };
        channel.log(LogRecord::reward(0.0));
        LoggingChannel::log(&channel, LogRecord::reward(0.0));
        assert_eq!(seen.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn tracing_channel_accepts_records() {
        TracingChannel.log(LogRecord::reward(5.0));
    }
}
