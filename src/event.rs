//! Typed chat events produced by the transcript parser.
//!
//! A [`ChatEvent`] is one transcript line-group: the header's calendar
//! instant, the author (or the system-notice sentinel) and the message text
//! exactly as found in the export, trailing newline included.
//!
//! # Examples
//!
//! ```
//! use chatscan::parse_transcript;
//! use chatscan::event::Author;
//!
//! let transcript = parse_transcript("15/01/24, 9:05 pm - Alice: Hello\n");
//! let event = &transcript.events()[0];
//!
//! assert_eq!(event.author, Author::user("Alice"));
//! assert_eq!(event.text, "Hello\n");
//! assert_eq!(event.calendar().unwrap().hour_bucket.label(), "21-22");
//! ```

use std::fmt;

use chrono::{NaiveDate, NaiveDateTime, Timelike, Weekday};
use serde::{Serialize, Serializer};

use crate::error::TimestampError;

/// Author label used for entries without a `"Name: "` prefix.
pub const SYSTEM_NOTICE: &str = "group_notification";

/// Body of a message whose attachment was not exported.
///
/// The trailing newline is part of the marker: equality checks against it
/// must see the text byte-for-byte as it appeared in the transcript.
pub const MEDIA_OMITTED: &str = "<Media omitted>\n";

/// Who wrote an event.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Author {
    /// A chat participant, named by the text before the first `": "`.
    User(String),
    /// Joins, leaves, encryption notices and anything else without an author.
    System,
}

impl Author {
    /// Creates a participant author.
    pub fn user(name: impl Into<String>) -> Self {
        Author::User(name.into())
    }

    /// Returns the author name, or [`SYSTEM_NOTICE`] for system notices.
    pub fn as_str(&self) -> &str {
        match self {
            Author::User(name) => name,
            Author::System => SYSTEM_NOTICE,
        }
    }

    /// Returns `true` for the system-notice sentinel.
    pub fn is_system(&self) -> bool {
        matches!(self, Author::System)
    }
}

impl fmt::Display for Author {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Author {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

const HOUR_BUCKET_LABELS: [&str; 24] = [
    "00-1", "1-2", "2-3", "3-4", "4-5", "5-6", "6-7", "7-8", "8-9", "9-10", "10-11", "11-12",
    "12-13", "13-14", "14-15", "15-16", "16-17", "17-18", "18-19", "19-20", "20-21", "21-22",
    "22-23", "23-00",
];

/// One-hour time-of-day slot used for activity heatmaps.
///
/// Labels are `"{h}-{h+1}"` except for the two wrap cases: hour 0 is
/// `"00-1"` and hour 23 is `"23-00"`.
///
/// ```
/// use chatscan::event::HourBucket;
///
/// assert_eq!(HourBucket::from_hour(0).unwrap().label(), "00-1");
/// assert_eq!(HourBucket::from_hour(12).unwrap().label(), "12-13");
/// assert_eq!(HourBucket::from_hour(23).unwrap().label(), "23-00");
/// assert!(HourBucket::from_hour(24).is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HourBucket(u8);

impl HourBucket {
    /// Returns the bucket for an hour in `0..24`.
    pub fn from_hour(hour: u32) -> Option<Self> {
        u8::try_from(hour).ok().filter(|h| *h < 24).map(HourBucket)
    }

    /// Returns the bucket containing a time of day.
    pub fn of(time: &impl Timelike) -> Self {
        HourBucket(time.hour() as u8)
    }

    /// Starting hour of the bucket.
    pub fn hour(self) -> u32 {
        u32::from(self.0)
    }

    /// The fixed two-endpoint label.
    pub fn label(self) -> &'static str {
        HOUR_BUCKET_LABELS[usize::from(self.0)]
    }

    /// All 24 buckets in time-of-day order.
    pub fn all() -> impl Iterator<Item = HourBucket> {
        (0u8..24).map(HourBucket)
    }
}

impl fmt::Display for HourBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for HourBucket {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

/// Calendar fields derived once from a successfully parsed header.
///
/// Month and weekday names are English regardless of locale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Calendar {
    /// The header instant, minute precision.
    pub timestamp: NaiveDateTime,
    pub date: NaiveDate,
    pub year: i32,
    /// English month name, e.g. `"January"`.
    pub month: &'static str,
    pub month_num: u32,
    pub day: u32,
    #[serde(skip)]
    pub weekday: Weekday,
    /// English weekday name, e.g. `"Monday"`.
    pub weekday_name: &'static str,
    pub hour: u32,
    pub minute: u32,
    pub hour_bucket: HourBucket,
}

/// The dating outcome of an event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EventTime {
    /// The header parsed; every derived field is populated.
    Dated(Calendar),
    /// The header matched lexically but is not a real instant. Every
    /// derived field reads as absent for this event.
    Undated(TimestampError),
}

/// One transcript entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatEvent {
    /// Participant name or the system-notice sentinel.
    pub author: Author,

    /// Message body after the author prefix, verbatim.
    ///
    /// Multi-line messages keep their inner newlines and the trailing
    /// newline that precedes the next header.
    pub text: String,

    /// Parsed header with derived calendar fields, or the parse failure.
    pub time: EventTime,
}

impl ChatEvent {
    /// Returns the author label (name or `group_notification`).
    pub fn user(&self) -> &str {
        self.author.as_str()
    }

    /// Returns the message text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the derived calendar fields when the header parsed.
    pub fn calendar(&self) -> Option<&Calendar> {
        match &self.time {
            EventTime::Dated(calendar) => Some(calendar),
            EventTime::Undated(_) => None,
        }
    }

    /// Returns the header instant when the header parsed.
    pub fn timestamp(&self) -> Option<NaiveDateTime> {
        self.calendar().map(|c| c.timestamp)
    }

    /// Returns the dating failure for undated events.
    pub fn timestamp_error(&self) -> Option<&TimestampError> {
        match &self.time {
            EventTime::Dated(_) => None,
            EventTime::Undated(err) => Some(err),
        }
    }

    /// Returns `true` if this entry has no author.
    pub fn is_system_notice(&self) -> bool {
        self.author.is_system()
    }

    /// Returns `true` if the text is exactly [`MEDIA_OMITTED`].
    pub fn is_media_omitted(&self) -> bool {
        self.text == MEDIA_OMITTED
    }
}
