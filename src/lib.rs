//! # chatscan
//!
//! A Rust library for parsing exported WhatsApp chat transcripts into typed
//! events and analyzing them.
//!
//! ## Overview
//!
//! A transcript is one plain-text file in which every message starts with a
//! header such as `15/01/24, 9:05 pm - `. chatscan:
//! - splits the text into one event per header (multi-line messages stay
//!   whole, text before the first header is skipped)
//! - separates the author from the message, marking system notices
//! - dates every event and derives calendar fields for aggregation, keeping
//!   events whose date does not exist instead of aborting
//!
//! On top of the parsed [`Transcript`] the [`core`] module computes chat
//! statistics, timelines, activity maps, word and emoji frequency, search
//! and sensitive-word flags.
//!
//! ## Quick Start
//!
//! ```rust
//! use chatscan::prelude::*;
//!
//! let transcript = parse_transcript(
//!     "15/01/24, 9:05 pm - Alice: Hello\n15/01/24, 9:06 pm - Bob: Hi\nhow are you?\n",
//! );
//!
//! assert_eq!(transcript.len(), 2);
//! assert_eq!(transcript.events()[1].text(), "Hi\nhow are you?\n");
//!
//! let view = transcript.view(&Selector::overall());
//! assert_eq!(fetch_stats(&view).messages, 2);
//! ```
//!
//! ## Reading Files
//!
//! ```rust,no_run
//! use chatscan::prelude::*;
//! use std::path::Path;
//!
//! fn main() -> Result<()> {
//!     let parser = TranscriptParser::with_config(
//!         TranscriptConfig::new().with_auto_detect(true),
//!     );
//!     let transcript = parser.parse(Path::new("chat.txt"))?;
//!
//!     let view = transcript.view(&Selector::user("Alice"));
//!     write_json(&view, "alice.json", &OutputConfig::full())?;
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Module Structure
//!
//! - [`parser`] - [`TranscriptParser`] and [`parse_transcript`]
//! - [`parsing`] - the individual stages (header scan, split, date, author, calendar)
//! - [`transcript`] - [`Transcript`] and [`ParseIssue`]
//! - [`event`] - [`ChatEvent`], [`Author`](event::Author), [`HourBucket`](event::HourBucket)
//! - [`config`] - [`TranscriptConfig`](config::TranscriptConfig), [`AnalysisConfig`](config::AnalysisConfig)
//! - [`core`] - analysis and output writers
//! - [`format`] - [`OutputFormat`](format::OutputFormat) and format dispatch
//! - [`cli`] - CLI argument types (`cli` feature)
//! - [`error`] - [`ChatscanError`], [`Result`]
//! - [`prelude`] - Convenient re-exports

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod event;
pub mod format;
pub mod parser;
pub mod parsing;
pub mod transcript;

// Re-export the main types at the crate root for convenience
pub use error::{ChatscanError, Result};
pub use event::ChatEvent;
pub use parser::{TranscriptParser, parse_transcript};
pub use transcript::{ParseIssue, Transcript};

/// Convenient re-exports for common usage.
///
/// Import everything you need with a single line:
///
/// ```rust
/// use chatscan::prelude::*;
/// ```
pub mod prelude {
    // Events and transcript
    pub use crate::event::{Author, ChatEvent, EventTime, HourBucket};
    pub use crate::transcript::{ParseIssue, Transcript};

    // Error types
    pub use crate::error::{ChatscanError, Result};

    // Parsing
    pub use crate::config::{AnalysisConfig, TranscriptConfig};
    pub use crate::parser::{TranscriptParser, parse_transcript};
    pub use crate::parsing::HeaderStyle;

    // Analysis
    pub use crate::core::{
        Flagger, OutputConfig, Selector, View, WordList, activity_heatmap, culprit,
        daily_timeline, emoji_counts, fetch_stats, month_activity, monthly_timeline,
        most_busy_users, most_common_words, search, weekday_activity,
    };

    // Output (file writers and string converters)
    #[cfg(feature = "csv-output")]
    pub use crate::core::output::{to_csv, write_csv};
    #[cfg(feature = "json-output")]
    pub use crate::core::output::{to_json, to_jsonl, write_json, write_jsonl};
    pub use crate::format::OutputFormat;
}
