// Logging module - In-memory log capture for TUI display
//
// This module provides a custom tracing layer that captures log events
// in memory so the interactive view can show them without writing through
// the alternate screen. It also owns subscriber initialization for both
// the interactive and one-shot modes.

use crate::config::{LogRotation, LoggingConfig};
use chrono::{DateTime, Utc};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tracing::{Level, Metadata, Subscriber};
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

/// Maximum number of log entries to keep in memory
const MAX_LOG_ENTRIES: usize = 500;

/// A single log entry captured from tracing
#[derive(Debug, Clone)]
pub struct LogEntry {
    pub timestamp: DateTime<Utc>,
    pub level: LogLevel,
    /// The tracing target (module path)
    pub target: String,
    pub message: String,
}

/// Log level for display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<&Level> for LogLevel {
    fn from(level: &Level) -> Self {
        match *level {
            Level::ERROR => LogLevel::Error,
            Level::WARN => LogLevel::Warn,
            Level::INFO => LogLevel::Info,
            Level::DEBUG => LogLevel::Debug,
            Level::TRACE => LogLevel::Trace,
        }
    }
}

impl LogLevel {
    /// Get the display string for this log level
    pub fn as_str(&self) -> &str {
        match self {
            LogLevel::Error => "ERROR",
            LogLevel::Warn => "WARN",
            LogLevel::Info => "INFO",
            LogLevel::Debug => "DEBUG",
            LogLevel::Trace => "TRACE",
        }
    }
}

/// In-memory log buffer with bounded size (ring buffer)
#[derive(Clone)]
pub struct LogBuffer {
    entries: Arc<Mutex<VecDeque<LogEntry>>>,
}

impl LogBuffer {
    /// Create a new log buffer
    pub fn new() -> Self {
        Self {
            entries: Arc::new(Mutex::new(VecDeque::with_capacity(MAX_LOG_ENTRIES))),
        }
    }

    /// Add a log entry to the buffer
    /// If the buffer is full, removes the oldest entry
    pub fn add(&self, entry: LogEntry) {
        let mut entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        if entries.len() >= MAX_LOG_ENTRIES {
            entries.pop_front();
        }
        entries.push_back(entry);
    }

    /// The most recent `n` entries, oldest first
    pub fn latest(&self, n: usize) -> Vec<LogEntry> {
        let entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        let skip = entries.len().saturating_sub(n);
        entries.iter().skip(skip).cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.entries.lock().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for LogBuffer {
    fn default() -> Self {
        Self::new()
    }
}

/// Custom tracing layer that captures logs to a buffer
pub struct TuiLogLayer {
    buffer: LogBuffer,
}

impl TuiLogLayer {
    /// Create a new TUI log layer with a log buffer
    pub fn new(buffer: LogBuffer) -> Self {
        Self { buffer }
    }
}

impl<S> Layer<S> for TuiLogLayer
where
    S: Subscriber,
{
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();

        // Extract the message using a visitor
        let mut message = String::new();
        let mut visitor = MessageVisitor(&mut message);
        event.record(&mut visitor);

        self.buffer.add(LogEntry {
            timestamp: Utc::now(),
            level: LogLevel::from(metadata.level()),
            target: metadata.target().to_string(),
            message,
        });
    }

    fn enabled(&self, _metadata: &Metadata<'_>, _ctx: Context<'_, S>) -> bool {
        // Enable all log levels - filtering happens at subscriber level
        true
    }
}

/// Visitor to extract the message from a tracing event
struct MessageVisitor<'a>(&'a mut String);

impl<'a> tracing::field::Visit for MessageVisitor<'a> {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            *self.0 = format!("{:?}", value);
        } else {
            // Structured fields are appended as key=value after the message
            if !self.0.is_empty() {
                self.0.push(' ');
            }
            self.0.push_str(&format!("{}={:?}", field.name(), value));
        }
    }

    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        if field.name() == "message" {
            *self.0 = value.to_string();
        } else {
            self.record_debug(field, &value);
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Subscriber initialization
// ─────────────────────────────────────────────────────────────────────────────

/// Where console-bound log output goes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogSink {
    /// Capture into the in-memory buffer (interactive view owns the screen)
    Buffer,
    /// Human-readable lines on stderr (stdout carries rendered output)
    Stderr,
}

/// Initialize tracing
///
/// Precedence: RUST_LOG env var > config file > default "info".
/// Returns the file writer guard, which must stay alive for logs to flush.
pub fn init(
    config: &LoggingConfig,
    sink: LogSink,
    buffer: &LogBuffer,
) -> Option<tracing_appender::non_blocking::WorkerGuard> {
    let default_filter = format!("crumbtrail={}", config.level_name());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into());

    let console = match sink {
        LogSink::Buffer => TuiLogLayer::new(buffer.clone()).boxed(),
        LogSink::Stderr => tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .boxed(),
    };

    if !config.file_enabled {
        tracing_subscriber::registry()
            .with(filter)
            .with(console)
            .init();
        return None;
    }

    if let Err(e) = std::fs::create_dir_all(&config.file_dir) {
        eprintln!(
            "Warning: Could not create log directory {:?}: {}",
            config.file_dir, e
        );
        // Fall back to non-file logging
        tracing_subscriber::registry()
            .with(filter)
            .with(console)
            .init();
        return None;
    }

    let file_appender = match config.file_rotation {
        LogRotation::Hourly => {
            tracing_appender::rolling::hourly(&config.file_dir, &config.file_prefix)
        }
        LogRotation::Daily => tracing_appender::rolling::daily(&config.file_dir, &config.file_prefix),
        LogRotation::Never => tracing_appender::rolling::never(&config.file_dir, &config.file_prefix),
    };

    // Wrap in non-blocking writer (writes happen in background thread)
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    // File layer uses JSON format for structured log parsing
    tracing_subscriber::registry()
        .with(filter)
        .with(console)
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_writer(non_blocking)
                .with_ansi(false),
        )
        .init();

    Some(guard)
}
