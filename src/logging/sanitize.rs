//! Message sanitizing for lossy sinks
//!
//! Some platform log viewers drop a whole message if it contains any
//! character below U+0020, and render runs of blank lines incorrectly.
//! `sanitize` rewrites text so both cases cannot occur:
//! - a `\n` directly after another `\n` is dropped
//! - any other char below U+0020 becomes a single space
//!
//! The result is then trimmed of the spaces and newlines left at either end.
//! Other whitespace (U+00A0, U+3000, ...) is content and stays.

/// Sanitize `text` for emission
///
/// Output never contains `"\n\n"` or a control char other than `\n`, is never
/// longer than the input (in chars), and is a fixed point: sanitizing it again
/// returns it unchanged.
pub fn sanitize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut last_was_newline = false;

    for c in text.chars() {
        if c == '\n' && last_was_newline {
            // collapse
        } else if c >= ' ' || c == '\n' {
            out.push(c);
        } else {
            out.push(' ');
        }
        last_was_newline = c == '\n';
    }

    // Only ' ' and '\n' remain at or below U+0020 after the scan
    let trimmed = out.trim_matches(|c: char| c == ' ' || c == '\n');
    if trimmed.len() == out.len() {
        out
    } else {
        trimmed.to_string()
    }
}
