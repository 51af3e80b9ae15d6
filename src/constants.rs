//! Crate-wide constants
//!
//! Centralized constants to avoid duplication and ensure consistency.

// =============================================================================
// Tags
// =============================================================================

/// Longest tag the platform log accepts
pub const MAX_TAG_LEN: usize = 23;

/// Tag used when a logger has no usable name
pub const DEFAULT_TAG: &str = "sinkgate";

/// Marker appended to a tag that had to be cut
pub const TAG_TRUNCATION_MARKER: char = '*';

// =============================================================================
// Traces
// =============================================================================

/// Maximum cause links collected when converting a foreign error chain
///
/// `source()` is user code; a buggy implementation can return a chain that
/// never ends. Links past this depth are dropped.
pub const MAX_CAUSE_DEPTH: usize = 64;

/// Prefix of the line introducing each cause in a rendered trace
pub const CAUSED_BY_PREFIX: &str = "Caused by: ";

// =============================================================================
// Output
// =============================================================================

/// Timestamp format of the bundled writer sink (HH:MM:SS.mmm)
pub const TIMESTAMP_FORMAT: &str = "%H:%M:%S%.3f";
