//! Gating and sanitizing log pipeline
//!
//! - `gate` - emit/suppress decision with the process-wide debug override
//! - `trace` - error + cause chain snapshot and rendering
//! - `sanitize` - control-char and blank-line cleanup for lossy sinks
//! - `adapter` - `SinkAdapter` tying the three together, plus the `log` bridge
//! - `sink` - the `Sink` trait and bundled sinks

pub mod adapter;
pub mod gate;
pub mod level;
pub mod record;
pub mod sanitize;
pub mod sink;
pub mod trace;

pub use adapter::{install, tag_for, SinkAdapter};
pub use level::{ParseSeverityError, Severity};
pub use record::LogRecord;
pub use sanitize::sanitize;
pub use sink::{Captured, MemorySink, Sink, TracingSink, WriterSink};
pub use trace::{render_trace, ErrorTrace};

/// Initialize internal tracing for the adapter's own diagnostics
///
/// Call early in main() before any logging occurs.
/// Set `verbose` to true for debug-level output.
pub fn init_tracing(verbose: bool) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let level = if verbose { "debug" } else { "warn" };

    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_file(false)
                .compact(),
        )
        .with(tracing_subscriber::EnvFilter::new(level))
        .try_init();
}
