//! Log sinks
//!
//! A sink is where sanitized text finally goes. The adapter needs exactly two
//! things from it: whether it wants a given severity, and a way to hand it a
//! record. Whatever the sink does with a failure is surfaced through its own
//! `Error` type.
//!
//! Bundled sinks:
//! - `WriterSink` - platform-style lines on any `io::Write` (stderr by default)
//! - `TracingSink` - forwards into the `tracing` dispatcher
//! - `MemorySink` - captures records in memory

use super::Severity;
use crate::constants::TIMESTAMP_FORMAT;
use parking_lot::Mutex;
use std::convert::Infallible;
use std::io::{self, Write};

/// Downstream log backend
pub trait Sink: Send + Sync {
    /// Failure reported by `accept`
    type Error;

    /// Hand over one sanitized record
    fn accept(&self, severity: Severity, tag: &str, text: &str) -> Result<(), Self::Error>;

    /// Whether the sink wants records of `severity` at all
    fn is_acceptable(&self, severity: Severity) -> bool;

    /// Flush buffered output, if any
    fn flush(&self) {}
}

// =============================================================================
// Writer
// =============================================================================

/// Writes `HH:MM:SS.mmm L/tag: text` lines
///
/// Multi-line text gets the prefix repeated on every line, the way platform
/// log viewers show it.
pub struct WriterSink<W> {
    writer: Mutex<W>,
    min_level: Severity,
}

impl<W: Write + Send> WriterSink<W> {
    pub fn new(writer: W, min_level: Severity) -> Self {
        Self {
            writer: Mutex::new(writer),
            min_level,
        }
    }

    /// Consume the sink and return the writer
    pub fn into_inner(self) -> W {
        self.writer.into_inner()
    }

    fn write_record(
        writer: &mut W,
        timestamp: &str,
        severity: Severity,
        tag: &str,
        text: &str,
    ) -> io::Result<()> {
        for line in text.split('\n') {
            writeln!(writer, "{} {}/{}: {}", timestamp, severity.letter(), tag, line)?;
        }
        Ok(())
    }
}

impl WriterSink<io::Stderr> {
    /// Sink on the process's stderr
    pub fn stderr(min_level: Severity) -> Self {
        Self::new(io::stderr(), min_level)
    }
}

impl<W: Write + Send> Sink for WriterSink<W> {
    type Error = io::Error;

    fn accept(&self, severity: Severity, tag: &str, text: &str) -> io::Result<()> {
        let timestamp = chrono::Local::now().format(TIMESTAMP_FORMAT).to_string();
        let mut writer = self.writer.lock();
        Self::write_record(&mut *writer, &timestamp, severity, tag, text)
    }

    fn is_acceptable(&self, severity: Severity) -> bool {
        severity >= self.min_level
    }

    fn flush(&self) {
        let _ = self.writer.lock().flush();
    }
}

// =============================================================================
// Tracing
// =============================================================================

/// Forwards records as `tracing` events
///
/// The tag is attached as a `tag` field. Acceptance follows the global max
/// level of the installed subscriber.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl Sink for TracingSink {
    type Error = Infallible;

    fn accept(&self, severity: Severity, tag: &str, text: &str) -> Result<(), Infallible> {
        match severity {
            Severity::Trace => tracing::trace!(tag = tag, "{}", text),
            Severity::Debug => tracing::debug!(tag = tag, "{}", text),
            Severity::Info => tracing::info!(tag = tag, "{}", text),
            Severity::Warn => tracing::warn!(tag = tag, "{}", text),
            Severity::Error => tracing::error!(tag = tag, "{}", text),
        }
        Ok(())
    }

    fn is_acceptable(&self, severity: Severity) -> bool {
        let level: tracing::Level = severity.into();
        level <= tracing::level_filters::LevelFilter::current()
    }
}

// =============================================================================
// Memory
// =============================================================================

/// One record as received by a `MemorySink`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Captured {
    pub severity: Severity,
    pub tag: String,
    pub text: String,
}

/// Captures every accepted record
#[derive(Debug)]
pub struct MemorySink {
    records: Mutex<Vec<Captured>>,
    min_level: Severity,
}

impl MemorySink {
    pub fn new(min_level: Severity) -> Self {
        Self {
            records: Mutex::new(Vec::new()),
            min_level,
        }
    }

    /// Copy of everything received so far
    pub fn records(&self) -> Vec<Captured> {
        self.records.lock().clone()
    }

    /// Number of records received
    pub fn len(&self) -> usize {
        self.records.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.lock().is_empty()
    }

    /// Drain captured records
    pub fn take(&self) -> Vec<Captured> {
        std::mem::take(&mut *self.records.lock())
    }
}

impl Default for MemorySink {
    fn default() -> Self {
        Self::new(Severity::Trace)
    }
}

impl Sink for MemorySink {
    type Error = Infallible;

    fn accept(&self, severity: Severity, tag: &str, text: &str) -> Result<(), Infallible> {
        self.records.lock().push(Captured {
            severity,
            tag: tag.to_string(),
            text: text.to_string(),
        });
        Ok(())
    }

    fn is_acceptable(&self, severity: Severity) -> bool {
        severity >= self.min_level
    }
}

impl<S: Sink + ?Sized> Sink for &S {
    type Error = S::Error;

    fn accept(&self, severity: Severity, tag: &str, text: &str) -> Result<(), Self::Error> {
        (**self).accept(severity, tag, text)
    }

    fn is_acceptable(&self, severity: Severity) -> bool {
        (**self).is_acceptable(severity)
    }

    fn flush(&self) {
        (**self).flush()
    }
}

impl<S: Sink + ?Sized> Sink for std::sync::Arc<S> {
    type Error = S::Error;

    fn accept(&self, severity: Severity, tag: &str, text: &str) -> Result<(), Self::Error> {
        (**self).accept(severity, tag, text)
    }

    fn is_acceptable(&self, severity: Severity) -> bool {
        (**self).is_acceptable(severity)
    }

    fn flush(&self) {
        (**self).flush()
    }
}
