//! Transcript parser.
//!
//! [`TranscriptParser`] is the single entry point turning an export into a
//! [`Transcript`]. The whole buffer is parsed in one pass; nothing is shared
//! between calls, so separate transcripts can be parsed concurrently.
//!
//! # Example
//!
//! ```rust,no_run
//! use chatscan::TranscriptParser;
//! use std::path::Path;
//!
//! let parser = TranscriptParser::new();
//! let transcript = parser.parse(Path::new("chat.txt"))?;
//!
//! for event in transcript.events() {
//!     println!("{}: {}", event.user(), event.text().trim_end());
//! }
//! # Ok::<(), chatscan::ChatscanError>(())
//! ```

use std::fs;
use std::path::Path;

use tracing::{debug, warn};

use crate::config::TranscriptConfig;
use crate::error::{ChatscanError, Result};
use crate::event::{ChatEvent, EventTime};
use crate::parsing::{
    HeaderStyle, enrich, extract_author, is_blank, parse_header, scan_headers, split_segments,
};
use crate::transcript::{ParseIssue, Transcript};

/// Parser for exported chat transcripts.
///
/// # Example
///
/// ```rust
/// use chatscan::TranscriptParser;
///
/// let parser = TranscriptParser::new();
/// let transcript = parser.parse_str("15/01/24, 9:05 pm - Alice: Hello\n");
/// assert_eq!(transcript.events()[0].user(), "Alice");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct TranscriptParser {
    config: TranscriptConfig,
}

impl TranscriptParser {
    /// Creates a new parser with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a parser with custom configuration.
    pub fn with_config(config: TranscriptConfig) -> Self {
        Self { config }
    }

    /// Returns the current configuration.
    pub fn config(&self) -> &TranscriptConfig {
        &self.config
    }

    /// Reads and parses a transcript file.
    ///
    /// # Errors
    ///
    /// Returns [`ChatscanError::Io`] if the file cannot be read and
    /// [`ChatscanError::Utf8`] if it is not UTF-8 text.
    pub fn parse(&self, path: &Path) -> Result<Transcript> {
        let bytes = fs::read(path)?;
        let text = std::str::from_utf8(&bytes)
            .map_err(|e| ChatscanError::transcript_utf8(e, Some(path.to_path_buf())))?;
        Ok(self.parse_str(text))
    }

    /// Reads and parses a transcript file (convenience method accepting &str path).
    pub fn parse_file(&self, path: &str) -> Result<Transcript> {
        self.parse(Path::new(path))
    }

    /// Decodes and parses an in-memory buffer.
    ///
    /// A leading UTF-8 byte-order mark is ignored.
    pub fn parse_bytes(&self, bytes: &[u8]) -> Result<Transcript> {
        let text =
            std::str::from_utf8(bytes).map_err(|e| ChatscanError::transcript_utf8(e, None))?;
        Ok(self.parse_str(text))
    }

    /// Parses transcript text. Never fails: per-line problems are reported
    /// through [`Transcript::issues`].
    pub fn parse_str(&self, text: &str) -> Transcript {
        let text = text.strip_prefix('\u{feff}').unwrap_or(text);
        let style = self.config.resolve_style(text);
        assemble(text, style)
    }
}

/// Parses `text` with the default 12-hour convention.
///
/// # Example
///
/// ```rust
/// let transcript = chatscan::parse_transcript("15/01/24, 9:05 pm - Alice: Hello\n");
/// assert_eq!(transcript.len(), 1);
/// ```
pub fn parse_transcript(text: &str) -> Transcript {
    TranscriptParser::new().parse_str(text)
}

fn assemble(text: &str, style: HeaderStyle) -> Transcript {
    let headers = scan_headers(text, style);
    let split = split_segments(text, &headers);

    debug!(
        style = %style,
        segments = split.len(),
        dropped_prefix = split.dropped_prefix.len(),
        "split transcript"
    );

    let mut issues = Vec::new();

    if split.is_empty() {
        if !text.trim().is_empty() {
            warn!(bytes = text.len(), "no transcript header found");
            issues.push(ParseIssue::UnrecognizedFormat);
        }
        return Transcript::new(Vec::new(), issues, split.dropped_prefix.len(), style);
    }

    let mut events = Vec::with_capacity(split.len());

    for (index, segment) in split.segments.iter().enumerate() {
        let time = match parse_header(segment.header, style) {
            Ok(timestamp) => EventTime::Dated(enrich(timestamp)),
            Err(error) => {
                issues.push(ParseIssue::UnparsableTimestamp {
                    index,
                    error: error.clone(),
                });
                EventTime::Undated(error)
            }
        };

        if is_blank(segment.body) {
            issues.push(ParseIssue::MalformedSegment { index });
        }

        let (author, body_text) = extract_author(segment.body);

        events.push(ChatEvent {
            author,
            text: body_text.to_string(),
            time,
        });
    }

    let transcript = Transcript::new(events, issues, split.dropped_prefix.len(), style);

    let undated = transcript.undated_count();
    if undated > 0 {
        warn!(undated, total = transcript.len(), "events could not be dated");
    }
    debug!(
        events = transcript.len(),
        issues = transcript.issues().len(),
        "assembled transcript"
    );

    transcript
}
