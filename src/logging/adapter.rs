//! Gate → render → sanitize → sink
//!
//! `SinkAdapter` ties the pipeline together in front of one sink. It also
//! implements `log::Log`, so crates logging through the `log` facade reach the
//! sink with the same gating and cleanup.

use super::gate;
use super::sanitize::sanitize;
use super::sink::Sink;
use super::trace::{render_trace, ErrorTrace};
use super::{LogRecord, Severity};
use crate::constants::{DEFAULT_TAG, MAX_TAG_LEN, TAG_TRUNCATION_MARKER};
use crate::error::{AdapterError, Result};
use std::fmt;

/// Pipeline in front of a single sink
pub struct SinkAdapter<S> {
    sink: S,
    tag: String,
}

impl<S: Sink> SinkAdapter<S> {
    /// Create an adapter; `tag` is used by the call-site helpers
    pub fn new(sink: S, tag: impl AsRef<str>) -> Self {
        Self {
            sink,
            tag: tag_for(tag.as_ref()),
        }
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Gate decision for `severity` against this adapter's sink
    pub fn is_enabled(&self, severity: Severity) -> bool {
        gate::should_emit(severity, |s| self.sink.is_acceptable(s))
    }

    /// Gate, render, sanitize and forward one record
    ///
    /// Suppressed records return `Ok(())` without touching the sink. Otherwise
    /// the sink's result is returned as is.
    pub fn emit(&self, record: &LogRecord<'_>) -> std::result::Result<(), S::Error> {
        if !self.is_enabled(record.severity) {
            return Ok(());
        }
        let text = compose(record.message, record.error);
        self.sink.accept(record.severity, record.tag, &text)
    }

    // === Call-site helpers ===

    pub fn trace(&self, message: &str) -> std::result::Result<(), S::Error> {
        self.emit(&LogRecord::new(Severity::Trace, &self.tag, message))
    }

    pub fn debug(&self, message: &str) -> std::result::Result<(), S::Error> {
        self.emit(&LogRecord::new(Severity::Debug, &self.tag, message))
    }

    pub fn info(&self, message: &str) -> std::result::Result<(), S::Error> {
        self.emit(&LogRecord::new(Severity::Info, &self.tag, message))
    }

    pub fn warn(&self, message: &str) -> std::result::Result<(), S::Error> {
        self.emit(&LogRecord::new(Severity::Warn, &self.tag, message))
    }

    pub fn error(&self, message: &str) -> std::result::Result<(), S::Error> {
        self.emit(&LogRecord::new(Severity::Error, &self.tag, message))
    }

    /// Emit `message` with `error`'s trace appended
    pub fn log_error(
        &self,
        severity: Severity,
        message: &str,
        error: &ErrorTrace,
    ) -> std::result::Result<(), S::Error> {
        self.emit(&LogRecord::new(severity, &self.tag, message).with_error(error))
    }
}

/// Message plus rendered trace, sanitized
fn compose(message: &str, error: Option<&ErrorTrace>) -> String {
    match error {
        Some(error) => {
            let mut body = String::with_capacity(message.len() + 64);
            body.push_str(message);
            body.push('\n');
            body.push_str(&render_trace(error));
            sanitize(&body)
        }
        None => sanitize(message),
    }
}

/// Derive a platform tag from a logger name
///
/// Names that fit are kept. Longer names are reduced to their last `::` or
/// `.` segment, and cut with a trailing `*` if that is still too long.
pub fn tag_for(name: &str) -> String {
    let name = name.trim();
    if name.is_empty() {
        return DEFAULT_TAG.to_string();
    }
    if name.chars().count() <= MAX_TAG_LEN {
        return name.to_string();
    }

    let last = name
        .rsplit("::")
        .next()
        .and_then(|s| s.rsplit('.').next())
        .filter(|s| !s.is_empty())
        .unwrap_or(name);
    if last.chars().count() <= MAX_TAG_LEN {
        return last.to_string();
    }

    let mut tag: String = last.chars().take(MAX_TAG_LEN - 1).collect();
    tag.push(TAG_TRUNCATION_MARKER);
    tag
}

// =============================================================================
// `log` facade
// =============================================================================

impl<S> log::Log for SinkAdapter<S>
where
    S: Sink,
    S::Error: fmt::Display,
{
    fn enabled(&self, metadata: &log::Metadata<'_>) -> bool {
        self.is_enabled(metadata.level().into())
    }

    fn log(&self, record: &log::Record<'_>) {
        let severity = Severity::from(record.level());
        if !self.is_enabled(severity) {
            return;
        }
        let tag = tag_for(record.target());
        let text = compose(&record.args().to_string(), None);
        if let Err(e) = self.sink.accept(severity, &tag, &text) {
            tracing::warn!("Sink rejected record from {}: {}", tag, e);
        }
    }

    fn flush(&self) {
        self.sink.flush();
    }
}

/// Install `adapter` as the global `log` logger
///
/// The facade's max level is opened fully; filtering stays with the gate.
pub fn install<S>(adapter: SinkAdapter<S>) -> Result<()>
where
    S: Sink + 'static,
    S::Error: fmt::Display,
{
    log::set_boxed_logger(Box::new(adapter)).map_err(|e| AdapterError::LoggerInstall {
        reason: e.to_string(),
    })?;
    log::set_max_level(log::LevelFilter::Trace);
    Ok(())
}
