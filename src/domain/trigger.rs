//! AI trigger detection.
//!
//! Pure string logic, deliberately decoupled from any I/O so it is trivially
//! unit-testable.

/// The literal, case-sensitive substring that requests an AI reply.
pub const TRIGGER_MARKER: &str = "@ai";

/// Check whether `text` requests an AI reply.
///
/// Returns `Some(prompt)` when the marker is present, where `prompt` is the
/// text with the first occurrence of the marker removed and surrounding
/// whitespace trimmed. Additional markers are left in place; only presence
/// matters.
pub fn detect(text: &str) -> Option<String> {
    if !text.contains(TRIGGER_MARKER) {
        return None;
    }
    Some(text.replacen(TRIGGER_MARKER, "", 1).trim().to_string())
}
