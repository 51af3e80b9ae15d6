//! Error traces
//!
//! `ErrorTrace` is an owned snapshot of an error and its cause chain, and
//! `render_trace` prints it in the usual exception-dump shape:
//!
//! ```text
//! Timeout: no reply
//! at session::poll
//! Caused by: ConnectionReset
//! at socket::read
//! ```
//!
//! Every error is rendered the same way. Nothing is filtered by kind.

use crate::constants::{CAUSED_BY_PREFIX, MAX_CAUSE_DEPTH};

/// Snapshot of an error with its frames and cause chain
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorTrace {
    /// Error type label (e.g. `"io::Error"`)
    pub kind: Option<String>,
    pub message: Option<String>,
    /// Stack frame descriptions, innermost first
    pub frames: Vec<String>,
    pub cause: Option<Box<ErrorTrace>>,
}

impl ErrorTrace {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = Some(kind.into());
        self
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn with_frame(mut self, frame: impl Into<String>) -> Self {
        self.frames.push(frame.into());
        self
    }

    pub fn with_frames<I, F>(mut self, frames: I) -> Self
    where
        I: IntoIterator<Item = F>,
        F: Into<String>,
    {
        self.frames.extend(frames.into_iter().map(Into::into));
        self
    }

    pub fn caused_by(mut self, cause: ErrorTrace) -> Self {
        self.cause = Some(Box::new(cause));
        self
    }

    /// Snapshot a `std::error::Error` and its `source()` chain
    ///
    /// Each link becomes a message-only trace. At most `MAX_CAUSE_DEPTH`
    /// links are kept.
    pub fn from_error(error: &(dyn std::error::Error + 'static)) -> Self {
        let mut links = Vec::new();
        let mut current = Some(error);
        while let Some(err) = current {
            if links.len() == MAX_CAUSE_DEPTH {
                break;
            }
            links.push(ErrorTrace::new().with_message(err.to_string()));
            current = err.source();
        }
        Self::link(links)
    }

    /// Build a chain from outermost-first links
    fn link(links: Vec<ErrorTrace>) -> Self {
        links
            .into_iter()
            .rev()
            .reduce(|cause, outer| outer.caused_by(cause))
            .unwrap_or_default()
    }

    /// The error itself followed by each cause, outermost first
    pub fn chain(&self) -> Chain<'_> {
        Chain { next: Some(self) }
    }

    /// Heading line: `kind: message`, either part alone, or empty
    pub fn description(&self) -> String {
        match (&self.kind, &self.message) {
            (Some(kind), Some(message)) => format!("{}: {}", kind, message),
            (Some(kind), None) => kind.clone(),
            (None, Some(message)) => message.clone(),
            (None, None) => String::new(),
        }
    }
}

impl From<&anyhow::Error> for ErrorTrace {
    /// Snapshot an `anyhow` chain; a captured backtrace becomes the frames of
    /// the outermost error.
    fn from(error: &anyhow::Error) -> Self {
        let mut links: Vec<ErrorTrace> = error
            .chain()
            .take(MAX_CAUSE_DEPTH)
            .map(|err| ErrorTrace::new().with_message(err.to_string()))
            .collect();

        let backtrace = error.backtrace();
        if backtrace.status() == std::backtrace::BacktraceStatus::Captured {
            if let Some(outer) = links.first_mut() {
                outer.frames = backtrace
                    .to_string()
                    .lines()
                    .map(str::trim)
                    .filter(|line| !line.is_empty())
                    .map(String::from)
                    .collect();
            }
        }

        Self::link(links)
    }
}

/// Iterator over a trace's cause chain
pub struct Chain<'a> {
    next: Option<&'a ErrorTrace>,
}

impl<'a> Iterator for Chain<'a> {
    type Item = &'a ErrorTrace;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.cause.as_deref();
        Some(current)
    }
}

/// Render a trace as multi-line text (no trailing newline)
pub fn render_trace(error: &ErrorTrace) -> String {
    let mut lines: Vec<String> = Vec::new();
    for (depth, link) in error.chain().enumerate() {
        if depth == 0 {
            lines.push(link.description());
        } else {
            lines.push(format!("{}{}", CAUSED_BY_PREFIX, link.description()));
        }
        lines.extend(link.frames.iter().cloned());
    }
    lines.join("\n")
}
