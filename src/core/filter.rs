//! Select events by author and date range.
//!
//! This module provides [`Selector`] for defining query scope and [`View`],
//! the borrowed, ordered subset of a transcript every analysis reads.
//!
//! # Selector Scope
//!
//! | Scope | Constructor | Description |
//! |-------|-------------|-------------|
//! | Everyone | [`overall`](Selector::overall) | All events |
//! | One author | [`user`](Selector::user) | Events whose author label matches exactly |
//! | Date from | [`with_date_from`](Selector::with_date_from) | Events on or after date |
//! | Date to | [`with_date_to`](Selector::with_date_to) | Events on or before date |
//!
//! # Examples
//!
//! ```
//! use chatscan::core::filter::Selector;
//! use chatscan::parse_transcript;
//!
//! # fn main() -> chatscan::Result<()> {
//! let transcript = parse_transcript(
//!     "01/01/24, 9:00 am - Alice: Old\n\
//!      15/06/24, 9:00 am - Alice: New\n\
//!      15/06/24, 9:01 am - Bob: Hi\n",
//! );
//!
//! let selector = Selector::user("Alice").with_date_from("2024-06-01")?;
//! let view = transcript.view(&selector);
//!
//! assert_eq!(view.len(), 1);
//! assert_eq!(view.events()[0].text, "New\n");
//! # Ok(())
//! # }
//! ```
//!
//! # Behavior Notes
//!
//! - Author matching is exact; `group_notification` selects system notices
//! - Undated events are **excluded** when a date range is active
//! - Criteria are combined with AND logic

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::ChatscanError;
use crate::event::{Calendar, ChatEvent};

/// Label selecting every author.
pub const OVERALL: &str = "Overall";

/// Query scope: one author or everyone, optionally narrowed by date.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selector {
    /// Include only events with this author label.
    pub user: Option<String>,

    /// Include only events on or after this date.
    pub from: Option<NaiveDate>,

    /// Include only events on or before this date.
    pub to: Option<NaiveDate>,
}

impl Selector {
    /// Selects every event.
    pub fn overall() -> Self {
        Self::default()
    }

    /// Selects the events of one author.
    pub fn user(name: impl Into<String>) -> Self {
        Self {
            user: Some(name.into()),
            ..Self::default()
        }
    }

    /// Builds a selector from a picker label, where [`OVERALL`] means everyone.
    pub fn from_choice(choice: &str) -> Self {
        if choice == OVERALL {
            Self::overall()
        } else {
            Self::user(choice)
        }
    }

    /// Sets the start date (inclusive). Date format: `YYYY-MM-DD`.
    ///
    /// # Errors
    ///
    /// Returns [`ChatscanError::InvalidDate`] if the format is invalid.
    pub fn with_date_from(mut self, date_str: &str) -> Result<Self, ChatscanError> {
        self.from = Some(parse_date(date_str)?);
        Ok(self)
    }

    /// Sets the end date (inclusive). Date format: `YYYY-MM-DD`.
    ///
    /// # Errors
    ///
    /// Returns [`ChatscanError::InvalidDate`] if the format is invalid.
    pub fn with_date_to(mut self, date_str: &str) -> Result<Self, ChatscanError> {
        self.to = Some(parse_date(date_str)?);
        Ok(self)
    }

    /// Sets the start date directly.
    #[must_use]
    pub fn with_from(mut self, date: NaiveDate) -> Self {
        self.from = Some(date);
        self
    }

    /// Sets the end date directly.
    #[must_use]
    pub fn with_to(mut self, date: NaiveDate) -> Self {
        self.to = Some(date);
        self
    }

    /// Returns `true` if a date range is active.
    pub fn has_date_filter(&self) -> bool {
        self.from.is_some() || self.to.is_some()
    }

    /// Returns `true` if `event` is in scope.
    pub fn matches(&self, event: &ChatEvent) -> bool {
        if let Some(ref user) = self.user {
            if event.user() != user {
                return false;
            }
        }

        if self.has_date_filter() {
            let Some(calendar) = event.calendar() else {
                return false;
            };
            if self.from.is_some_and(|from| calendar.date < from) {
                return false;
            }
            if self.to.is_some_and(|to| calendar.date > to) {
                return false;
            }
        }

        true
    }

    /// Borrows the matching events, in order.
    pub fn apply<'a>(&self, events: &'a [ChatEvent]) -> View<'a> {
        View {
            events: events.iter().filter(|e| self.matches(e)).collect(),
        }
    }
}

fn parse_date(date_str: &str) -> Result<NaiveDate, ChatscanError> {
    NaiveDate::parse_from_str(date_str, "%Y-%m-%d").map_err(|_| ChatscanError::invalid_date(date_str))
}

/// Read-only, ordered subset of a transcript.
///
/// Each query gets its own view; the transcript is never filtered in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct View<'a> {
    events: Vec<&'a ChatEvent>,
}

impl<'a> View<'a> {
    /// Wraps every event of a slice.
    pub fn all(events: &'a [ChatEvent]) -> Self {
        Self {
            events: events.iter().collect(),
        }
    }

    pub fn events(&self) -> &[&'a ChatEvent] {
        &self.events
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a ChatEvent> + '_ {
        self.events.iter().copied()
    }

    /// Dated events with their calendar fields.
    pub fn dated(&self) -> impl Iterator<Item = (&'a ChatEvent, &'a Calendar)> + '_ {
        self.iter().filter_map(|e| e.calendar().map(|c| (e, c)))
    }

    /// Authored events whose text is not the media marker.
    pub fn authored_text(&self) -> impl Iterator<Item = &'a ChatEvent> + '_ {
        self.iter()
            .filter(|e| !e.is_system_notice() && !e.is_media_omitted())
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl<'a> FromIterator<&'a ChatEvent> for View<'a> {
    fn from_iter<I: IntoIterator<Item = &'a ChatEvent>>(iter: I) -> Self {
        Self {
            events: iter.into_iter().collect(),
        }
    }
}
