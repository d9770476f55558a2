//! Segment splitter.

use super::scanner::HeaderMatch;

/// A transcript chunk between two header matches.
///
/// Borrowed from the transcript and consumed immediately by the date
/// parser and author extractor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawSegment<'a> {
    /// Header text including the trailing `"- "`.
    pub header: &'a str,
    /// Everything up to the next header, or to the end of the transcript.
    pub body: &'a str,
    /// Byte offset of the header in the transcript.
    pub offset: usize,
}

/// Splitter output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segments<'a> {
    pub segments: Vec<RawSegment<'a>>,
    /// Text before the first header. The whole input when no header matched.
    pub dropped_prefix: &'a str,
}

impl<'a> Segments<'a> {
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

/// Cuts `text` into one segment per header.
///
/// `headers` must come from [`scan_headers`](super::scan_headers) over the
/// same `text`: sorted, non-overlapping, in bounds.
///
/// # Example
///
/// ```rust
/// use chatscan::parsing::{HeaderStyle, scan_headers, split_segments};
///
/// let text = "junk\n15/01/24, 9:05 pm - Alice: Hi\n15/01/24, 9:06 pm - Bob: Hey\n";
/// let headers = scan_headers(text, HeaderStyle::TwelveHour);
/// let split = split_segments(text, &headers);
///
/// assert_eq!(split.dropped_prefix, "junk\n");
/// assert_eq!(split.segments[0].body, "Alice: Hi\n");
/// assert_eq!(split.segments[1].body, "Bob: Hey\n");
/// ```
pub fn split_segments<'a>(text: &'a str, headers: &[HeaderMatch<'a>]) -> Segments<'a> {
    let Some(first) = headers.first() else {
        return Segments {
            segments: Vec::new(),
            dropped_prefix: text,
        };
    };

    let segments = headers
        .iter()
        .enumerate()
        .map(|(i, header)| {
            let body_end = headers.get(i + 1).map_or(text.len(), |next| next.start);
            RawSegment {
                header: header.text,
                body: &text[header.end..body_end],
                offset: header.start,
            }
        })
        .collect();

    Segments {
        segments,
        dropped_prefix: &text[..first.start],
    }
}
