//! Message search and sensitive-word flagging.
//!
//! # Example
//!
//! ```rust
//! use chatscan::core::filter::Selector;
//! use chatscan::core::flagger::{Flagger, culprit};
//! use chatscan::core::words::WordList;
//! use chatscan::parse_transcript;
//!
//! # fn main() -> chatscan::Result<()> {
//! let t = parse_transcript(
//!     "15/01/24, 9:05 pm - Alice: send the UPI now\n\
//!      15/01/24, 9:06 pm - Bob: ok\n\
//!      15/01/24, 9:07 pm - Alice: cash works too\n",
//! );
//!
//! let flagger = Flagger::new(&WordList::parse("upi\ncash\n"))?;
//! let flags = flagger.flag(&t.view(&Selector::overall()));
//!
//! assert_eq!(flags.len(), 2);
//! assert_eq!(flags[0].word, "UPI");
//! assert_eq!(culprit(&flags), Some("Alice"));
//! # Ok(())
//! # }
//! ```

use regex::{Regex, RegexBuilder};
use serde::Serialize;

use super::filter::View;
use super::stats::rank_by_count;
use super::words::WordList;
use crate::error::Result;
use crate::event::ChatEvent;

/// A message containing a listed word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Flag {
    /// Position of the event in the view.
    pub index: usize,
    /// Author label.
    pub author: String,
    /// Full message text.
    pub text: String,
    /// The first listed word found, as written in the message.
    pub word: String,
}

/// Matcher compiled once from a word list.
///
/// Words match case-insensitively on word boundaries; multi-word phrases
/// match as written. The leftmost match in a message wins.
#[derive(Debug, Clone)]
pub struct Flagger {
    pattern: Option<Regex>,
}

impl Flagger {
    /// Compiles `words` into one alternation.
    ///
    /// An empty list builds a flagger that never matches.
    ///
    /// # Errors
    ///
    /// Returns [`ChatscanError::Pattern`](crate::ChatscanError::Pattern) if
    /// the alternation exceeds the regex size limit.
    pub fn new(words: &WordList) -> Result<Self> {
        if words.is_empty() {
            return Ok(Self { pattern: None });
        }

        let alternation = words.iter().map(regex::escape).collect::<Vec<_>>().join("|");
        let pattern = RegexBuilder::new(&format!(r"\b(?:{alternation})\b"))
            .case_insensitive(true)
            .build()?;

        Ok(Self {
            pattern: Some(pattern),
        })
    }

    /// Returns the first listed word in `text`.
    pub fn first_match<'t>(&self, text: &'t str) -> Option<&'t str> {
        self.pattern
            .as_ref()
            .and_then(|re| re.find(text))
            .map(|m| m.as_str())
    }

    /// Flags every event of the view containing a listed word, in order.
    pub fn flag(&self, view: &View<'_>) -> Vec<Flag> {
        if self.pattern.is_none() {
            return Vec::new();
        }

        view.iter()
            .enumerate()
            .filter_map(|(index, event)| {
                self.first_match(&event.text).map(|word| Flag {
                    index,
                    author: event.user().to_string(),
                    text: event.text.clone(),
                    word: word.to_string(),
                })
            })
            .collect()
    }
}

/// Author with the most flags, earliest flagged on ties.
pub fn culprit(flags: &[Flag]) -> Option<&str> {
    rank_by_count(flags.iter().map(|f| f.author.as_str()))
        .first()
        .map(|(author, _)| *author)
}

/// Events whose text contains `term`, ignoring case.
///
/// An empty term matches nothing.
pub fn search<'a>(view: &View<'a>, term: &str) -> Vec<&'a ChatEvent> {
    if term.is_empty() {
        return Vec::new();
    }
    let needle = term.to_lowercase();
    view.iter()
        .filter(|e| e.text.to_lowercase().contains(&needle))
        .collect()
}
