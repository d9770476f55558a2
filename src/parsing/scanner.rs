//! Header scanner.
//!
//! Finds every header occurrence in a transcript. Matching is purely
//! lexical, left to right and non-overlapping: a header pasted inside a
//! message body is indistinguishable from a real one and starts a new
//! segment. That ambiguity belongs to the export format and is kept.

use super::HeaderStyle;

/// One header occurrence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderMatch<'a> {
    /// Byte offset of the first header character.
    pub start: usize,
    /// Byte offset one past the trailing `"- "`.
    pub end: usize,
    /// The header text, e.g. `"15/01/24, 9:05 pm - "`.
    pub text: &'a str,
}

/// Returns all headers of `style` in transcript order.
///
/// # Example
///
/// ```rust
/// use chatscan::parsing::{HeaderStyle, scan_headers};
///
/// let text = "15/01/24, 9:05 pm - Alice: Hi\n15/01/24, 9:06 pm - Bob: Hey\n";
/// let headers = scan_headers(text, HeaderStyle::TwelveHour);
///
/// assert_eq!(headers.len(), 2);
/// assert_eq!(headers[1].text, "15/01/24, 9:06 pm - ");
/// ```
pub fn scan_headers(text: &str, style: HeaderStyle) -> Vec<HeaderMatch<'_>> {
    style
        .regex()
        .find_iter(text)
        .map(|m| HeaderMatch {
            start: m.start(),
            end: m.end(),
            text: m.as_str(),
        })
        .collect()
}
