//! Log record
//!
//! A borrowed view of one log call: built at the call site, consumed by
//! `SinkAdapter::emit`, never stored.

use super::trace::ErrorTrace;
use super::Severity;

/// One log call
#[derive(Debug, Clone, Copy)]
pub struct LogRecord<'a> {
    pub severity: Severity,
    pub tag: &'a str,
    pub message: &'a str,
    pub error: Option<&'a ErrorTrace>,
}

impl<'a> LogRecord<'a> {
    /// Record without an attached error
    pub fn new(severity: Severity, tag: &'a str, message: &'a str) -> Self {
        Self {
            severity,
            tag,
            message,
            error: None,
        }
    }

    /// Attach an error to be rendered after the message
    pub fn with_error(mut self, error: &'a ErrorTrace) -> Self {
        self.error = Some(error);
        self
    }
}
