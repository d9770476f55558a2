//! Analysis over an assembled transcript.
//!
//! This module contains:
//! - [`filter`] - [`Selector`] and the borrowed [`View`] every query reads
//! - [`stats`] - headline counts and author rankings
//! - [`timeline`] - monthly/daily timelines, activity maps and the heatmap
//! - [`words`] - word lists, word frequency, cloud corpus and emoji counts
//! - [`flagger`] - message search and sensitive-word flagging
//! - [`output`] - event table writers (CSV, JSON, JSONL)
//!
//! All functions are pure: they borrow a view and return owned results.
//!
//! # Quick Start
//!
//! ```rust
//! use chatscan::core::{Selector, fetch_stats, monthly_timeline};
//! use chatscan::parse_transcript;
//!
//! let transcript = parse_transcript("15/01/24, 9:05 pm - Alice: Hello\n");
//! let view = transcript.view(&Selector::user("Alice"));
//!
//! assert_eq!(fetch_stats(&view).messages, 1);
//! assert_eq!(monthly_timeline(&view)[0].label, "January-2024");
//! ```

pub mod filter;
pub mod flagger;
pub mod output;
pub mod stats;
pub mod timeline;
pub mod words;

// Re-export main types for convenience
pub use filter::{Selector, View};
pub use flagger::{Flag, Flagger, culprit, search};
pub use output::OutputConfig;
pub use stats::{BusyUsers, Summary, fetch_stats, most_busy_users};
pub use timeline::{
    Heatmap, activity_heatmap, daily_timeline, month_activity, monthly_timeline, weekday_activity,
};
pub use words::{WordList, cloud_corpus, emoji_counts, most_common_words};

// Conditionally re-export output writers
#[cfg(feature = "csv-output")]
pub use output::{to_csv, write_csv};
#[cfg(feature = "json-output")]
pub use output::{to_json, to_jsonl, write_json, write_jsonl};
