//! sinkgate - gating and sanitizing log adapter
//!
//! Sits between log calls and a fragile platform sink:
//! - a process-wide debug override forces every record through, otherwise the
//!   sink's own threshold decides
//! - attached errors are rendered with their whole cause chain
//! - final text has control chars and blank-line runs removed, so sinks that
//!   drop or garble such messages receive them intact

pub mod config;
pub mod constants;
pub mod error;
pub mod logging;

pub use error::{AdapterError, Result};
pub use logging::{
    gate, render_trace, sanitize, tag_for, ErrorTrace, LogRecord, Severity, Sink, SinkAdapter,
};
