//! Event table writers.
//!
//! This module provides writers for different output formats:
//! - [`write_csv`] / [`to_csv`] - CSV with semicolon delimiter - requires `csv-output` feature
//! - [`write_json`] / [`to_json`] - pretty JSON array - requires `json-output` feature
//! - [`write_jsonl`] / [`to_jsonl`] - JSON Lines, one event per line - requires `json-output` feature
//!
//! Every writer emits one row per event of a [`View`](crate::core::filter::View),
//! in transcript order. Columns:
//!
//! | Column | Config | Content |
//! |--------|--------|---------|
//! | `user` | always | author or `group_notification` |
//! | `message` | always | text, verbatim |
//! | `date` | always | `YYYY-MM-DD HH:MM:SS`, empty when undated |
//! | `year` .. `period` | [`with_calendar`](OutputConfig::with_calendar) | derived calendar fields |
//! | `error` | [`with_errors`](OutputConfig::with_errors) | dating failure of undated events |
//!
//! # Example
//!
//! ```rust,no_run
//! # #[cfg(all(feature = "csv-output", feature = "json-output"))]
//! # fn main() -> chatscan::Result<()> {
//! use chatscan::core::filter::Selector;
//! use chatscan::core::output::{OutputConfig, to_csv, write_json};
//! use chatscan::parse_transcript;
//!
//! let transcript = parse_transcript("15/01/24, 9:05 pm - Alice: Hello\n");
//! let view = transcript.view(&Selector::overall());
//! let config = OutputConfig::new().with_calendar();
//!
//! write_json(&view, "events.json", &config)?;
//! let csv_string = to_csv(&view, &config)?;
//! # Ok(())
//! # }
//! # #[cfg(not(all(feature = "csv-output", feature = "json-output")))]
//! # fn main() {}
//! ```

use serde::Serialize;

use crate::event::ChatEvent;

#[cfg(feature = "csv-output")]
mod csv_writer;
#[cfg(feature = "json-output")]
mod json_writer;
#[cfg(feature = "json-output")]
mod jsonl_writer;

#[cfg(feature = "csv-output")]
pub use csv_writer::{to_csv, write_csv};
#[cfg(feature = "json-output")]
pub use json_writer::{to_json, write_json};
#[cfg(feature = "json-output")]
pub use jsonl_writer::{to_jsonl, write_jsonl};

/// Which optional columns the writers emit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OutputConfig {
    /// Emit derived calendar columns
    pub include_calendar: bool,
    /// Emit the dating failure of undated events
    pub include_errors: bool,
}

impl OutputConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every column.
    pub fn full() -> Self {
        Self {
            include_calendar: true,
            include_errors: true,
        }
    }

    #[must_use]
    pub fn with_calendar(mut self) -> Self {
        self.include_calendar = true;
        self
    }

    #[must_use]
    pub fn with_errors(mut self) -> Self {
        self.include_errors = true;
        self
    }
}

/// Derived calendar columns of one row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalendarColumns {
    pub year: i32,
    pub month_num: u32,
    pub month: &'static str,
    pub day: u32,
    pub day_name: &'static str,
    pub hour: u32,
    pub minute: u32,
    /// Hour bucket label, e.g. `"21-22"`.
    pub period: &'static str,
}

/// One output row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EventRow<'a> {
    pub user: &'a str,
    pub message: &'a str,
    pub date: Option<String>,
    #[serde(flatten)]
    pub calendar: Option<CalendarColumns>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<'a> EventRow<'a> {
    pub fn new(event: &'a ChatEvent, config: &OutputConfig) -> Self {
        let calendar = event.calendar();

        Self {
            user: event.user(),
            message: &event.text,
            date: calendar.map(|c| c.timestamp.format("%Y-%m-%d %H:%M:%S").to_string()),
            calendar: calendar
                .filter(|_| config.include_calendar)
                .map(|c| CalendarColumns {
                    year: c.year,
                    month_num: c.month_num,
                    month: c.month,
                    day: c.day,
                    day_name: c.weekday_name,
                    hour: c.hour,
                    minute: c.minute,
                    period: c.hour_bucket.label(),
                }),
            error: event
                .timestamp_error()
                .filter(|_| config.include_errors)
                .map(ToString::to_string),
        }
    }
}
