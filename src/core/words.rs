//! Word lists, word frequency and emoji counts.
//!
//! A [`WordList`] is loaded once and handed to the functions that need it;
//! nothing here re-reads files per call.
//!
//! # Example
//!
//! ```rust
//! use chatscan::core::filter::Selector;
//! use chatscan::core::words::{WordList, most_common_words};
//! use chatscan::parse_transcript;
//!
//! let stop_words = WordList::parse("the\na\n");
//! let t = parse_transcript(
//!     "15/01/24, 9:05 pm - Alice: the cat\n15/01/24, 9:06 pm - Bob: a Cat\n",
//! );
//!
//! let common = most_common_words(&t.view(&Selector::overall()), &stop_words, 20);
//! assert_eq!(common, vec![("cat".to_string(), 2)]);
//! ```

use std::collections::HashSet;
use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

use super::filter::View;
use super::stats::rank_by_count;
use crate::error::Result;

static EMOJI: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\p{Extended_Pictographic}").unwrap());

#[rustfmt::skip]
const SENSITIVE_DEFAULTS: &[&str] = &[
    // narcotics
    "cocaine", "heroin", "marijuana", "weed", "ganja", "mdma", "ecstasy", "meth",
    "brown sugar", "molly", "acid", "lsd", "shrooms", "pot", "grass", "blunt", "kush",
    "joint", "stash", "hash", "dope", "bhang", "420", "charras", "party stuff", "stuff",
    // payments
    "payment", "deposit", "upi", "transfer", "amount", "cash", "money", "bank",
    "bitcoin", "btc", "crypto", "ethereum", "tether", "monero", "wallet",
    // meet-ups
    "meet at", "pickup", "drop", "location", "delivery", "send location", "parcel",
    "come alone", "don’t tell anyone", "delivery time", "gift", "drop point", "pickup point",
    // violence
    "kill", "murder", "attack", "revenge", "gun", "weapon", "target", "bomb", "blast",
    "pistol", "ak47", "mafia", "terror", "jihad", "extort", "threat", "ransom",
    // cyber-fraud
    "otp", "pin", "password", "phishing", "scam", "fraud", "hacked", "dark web",
    "spyware", "ransomware", "breach", "credit card", "debit card", "bank account",
];

/// An immutable set of lower-cased words or phrases.
///
/// Entries are trimmed and lower-cased; blanks and duplicates are dropped and
/// the first-seen order is kept.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordList {
    words: Vec<String>,
    set: HashSet<String>,
}

impl WordList {
    /// Builds a list from individual entries.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut list = Self::default();
        for word in words {
            let word = word.as_ref().trim().to_lowercase();
            if !word.is_empty() && list.set.insert(word.clone()) {
                list.words.push(word);
            }
        }
        list
    }

    /// Parses newline-delimited text.
    pub fn parse(text: &str) -> Self {
        Self::from_words(text.lines())
    }

    /// Reads a newline-delimited file.
    ///
    /// # Errors
    ///
    /// Returns [`ChatscanError::Io`](crate::ChatscanError::Io) if the file
    /// cannot be read as UTF-8 text.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Ok(Self::parse(&text))
    }

    /// Built-in vocabulary covering narcotics, payments, meet-ups,
    /// violence and cyber-fraud.
    pub fn sensitive_defaults() -> Self {
        Self::from_words(SENSITIVE_DEFAULTS)
    }

    /// Returns `true` if `word` (already lower-cased) is listed.
    pub fn contains(&self, word: &str) -> bool {
        self.set.contains(word)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Lower-cased tokens of authored, non-media messages minus stop words.
fn content_words<'v, 'a: 'v>(
    view: &'v View<'a>,
    stop_words: &'v WordList,
) -> impl Iterator<Item = String> + 'v {
    view.authored_text().flat_map(move |event| {
        event
            .text
            .to_lowercase()
            .split_whitespace()
            .filter(|w| !stop_words.contains(w))
            .map(str::to_string)
            .collect::<Vec<_>>()
    })
}

/// Ranks content words by frequency, top `n`. Ties keep first-occurrence
/// order. System notices and media placeholders are ignored.
pub fn most_common_words(view: &View<'_>, stop_words: &WordList, n: usize) -> Vec<(String, usize)> {
    let mut ranked = rank_by_count(content_words(view, stop_words));
    ranked.truncate(n);
    ranked
}

/// Joins content words with single spaces, the input of a word-cloud
/// renderer.
pub fn cloud_corpus(view: &View<'_>, stop_words: &WordList) -> String {
    content_words(view, stop_words).collect::<Vec<_>>().join(" ")
}

/// Counts pictographic emoji, most used first. Ties keep first-occurrence
/// order.
///
/// ```rust
/// use chatscan::core::filter::Selector;
/// use chatscan::core::words::emoji_counts;
/// use chatscan::parse_transcript;
///
/// let t = parse_transcript("15/01/24, 9:05 pm - Alice: 😂 ok 🎉😂\n");
/// let counts = emoji_counts(&t.view(&Selector::overall()));
///
/// assert_eq!(counts, vec![("😂".to_string(), 2), ("🎉".to_string(), 1)]);
/// ```
pub fn emoji_counts(view: &View<'_>) -> Vec<(String, usize)> {
    let found = view
        .iter()
        .flat_map(|event| EMOJI.find_iter(&event.text).map(|m| m.as_str()));
    rank_by_count(found)
        .into_iter()
        .map(|(emoji, count)| (emoji.to_string(), count))
        .collect()
}
