//! The assembled, immutable event sequence.

use std::collections::HashSet;

use serde::Serialize;

use crate::core::filter::{Selector, View};
use crate::error::TimestampError;
use crate::event::ChatEvent;
use crate::parsing::HeaderStyle;

/// A per-line problem found while assembling a transcript.
///
/// Issues never abort a parse. They are collected next to the events so
/// callers can report, e.g., "3 events could not be dated".
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ParseIssue {
    /// Non-empty input without a single header.
    UnrecognizedFormat,
    /// The header of event `index` matched lexically but is not a real instant.
    UnparsableTimestamp { index: usize, error: TimestampError },
    /// The body of event `index` is empty or whitespace-only.
    MalformedSegment { index: usize },
}

impl std::fmt::Display for ParseIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseIssue::UnrecognizedFormat => write!(f, "no transcript header found"),
            ParseIssue::UnparsableTimestamp { index, error } => {
                write!(f, "event {index}: {error}")
            }
            ParseIssue::MalformedSegment { index } => write!(f, "event {index}: empty message body"),
        }
    }
}

/// Ordered chat events of one transcript plus parse diagnostics.
///
/// Events are in transcript order and never change after assembly. Queries
/// borrow a [`View`] instead of filtering in place.
///
/// # Example
///
/// ```rust
/// use chatscan::parse_transcript;
///
/// let transcript = parse_transcript(
///     "15/01/24, 9:05 pm - Alice: Hi\n31/04/24, 9:06 pm - Bob: Hey\n",
/// );
///
/// assert_eq!(transcript.len(), 2);
/// assert_eq!(transcript.undated_count(), 1);
/// assert_eq!(transcript.authors(), vec!["Alice", "Bob"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Transcript {
    events: Vec<ChatEvent>,
    issues: Vec<ParseIssue>,
    dropped_prefix: usize,
    style: HeaderStyle,
}

impl Transcript {
    pub(crate) fn new(
        events: Vec<ChatEvent>,
        issues: Vec<ParseIssue>,
        dropped_prefix: usize,
        style: HeaderStyle,
    ) -> Self {
        Self {
            events,
            issues,
            dropped_prefix,
            style,
        }
    }

    /// All events in transcript order.
    pub fn events(&self) -> &[ChatEvent] {
        &self.events
    }

    /// Diagnostics in the order they were found.
    pub fn issues(&self) -> &[ParseIssue] {
        &self.issues
    }

    /// Bytes of text before the first header that were not parsed.
    pub fn dropped_prefix(&self) -> usize {
        self.dropped_prefix
    }

    /// The header convention used.
    pub fn header_style(&self) -> HeaderStyle {
        self.style
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Returns `true` if non-empty input contained no header.
    pub fn is_unrecognized(&self) -> bool {
        self.issues
            .iter()
            .any(|issue| matches!(issue, ParseIssue::UnrecognizedFormat))
    }

    /// Number of events whose header could not be dated.
    pub fn undated_count(&self) -> usize {
        self.events.iter().filter(|e| e.calendar().is_none()).count()
    }

    /// Number of events without an author.
    pub fn system_notice_count(&self) -> usize {
        self.events.iter().filter(|e| e.is_system_notice()).count()
    }

    /// Distinct authors in order of first appearance, system notices excluded.
    pub fn authors(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.events
            .iter()
            .filter(|e| !e.is_system_notice())
            .map(ChatEvent::user)
            .filter(|name| seen.insert(*name))
            .collect()
    }

    /// Returns the events selected by `selector`, in order.
    pub fn view(&self, selector: &Selector) -> View<'_> {
        selector.apply(&self.events)
    }

    /// Consumes the transcript, returning the events.
    pub fn into_events(self) -> Vec<ChatEvent> {
        self.events
    }
}

impl<'a> IntoIterator for &'a Transcript {
    type Item = &'a ChatEvent;
    type IntoIter = std::slice::Iter<'a, ChatEvent>;

    fn into_iter(self) -> Self::IntoIter {
        self.events.iter()
    }
}

#[cfg(test)]
mod tests {
    use crate::parse_transcript;

    use super::*;

    #[test]
    fn test_authors_first_appearance() {
        let t = parse_transcript(
            "15/01/24, 9:05 pm - Bob: 1\n15/01/24, 9:06 pm - Alice added Carol\n\
             15/01/24, 9:07 pm - Alice: 2\n15/01/24, 9:08 pm - Bob: 3\n",
        );
        assert_eq!(t.authors(), vec!["Bob", "Alice"]);
        assert_eq!(t.system_notice_count(), 1);
    }

    #[test]
    fn test_unrecognized() {
        let t = parse_transcript("hello world\n");
        assert!(t.is_empty());
        assert!(t.is_unrecognized());
        assert_eq!(t.dropped_prefix(), 12);
    }

    #[test]
    fn test_empty_input_has_no_issues() {
        let t = parse_transcript("");
        assert!(t.is_empty());
        assert!(t.issues().is_empty());
    }

    #[test]
    fn test_issue_display() {
        let issue = ParseIssue::MalformedSegment { index: 3 };
        assert_eq!(issue.to_string(), "event 3: empty message body");
    }

    #[test]
    fn test_iterate_by_ref() {
        let t = parse_transcript("15/01/24, 9:05 pm - Bob: 1\n15/01/24, 9:06 pm - Bob: 2\n");
        let texts: Vec<&str> = (&t).into_iter().map(ChatEvent::text).collect();
        assert_eq!(texts, vec!["1\n", "2\n"]);
    }
}
