//! Message counts and author rankings.
//!
//! # Example
//!
//! ```rust
//! use chatscan::core::filter::Selector;
//! use chatscan::core::stats::{fetch_stats, most_busy_users};
//! use chatscan::parse_transcript;
//!
//! let transcript = parse_transcript(
//!     "15/01/24, 9:05 pm - Alice: see https://example.com\n\
//!      15/01/24, 9:06 pm - Bob: <Media omitted>\n\
//!      15/01/24, 9:07 pm - Alice: ok\n",
//! );
//! let view = transcript.view(&Selector::overall());
//!
//! let summary = fetch_stats(&view);
//! assert_eq!(summary.messages, 3);
//! assert_eq!(summary.media, 1);
//! assert_eq!(summary.links, 1);
//!
//! let busy = most_busy_users(&view, 5);
//! assert_eq!(busy.top[0].user, "Alice");
//! assert_eq!(busy.shares[0].percent, 66.67);
//! ```

use std::collections::HashMap;
use std::hash::Hash;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use super::filter::View;

static URL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?i)\b(?:https?://|www\.)[^\s<>"]+"#).unwrap());

/// Headline counts of a view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    /// Events, system notices and undated events included.
    pub messages: usize,
    /// Whitespace-separated tokens across all texts.
    pub words: usize,
    /// Events whose text is exactly the media marker.
    pub media: usize,
    /// URLs found in texts.
    pub links: usize,
}

/// Counts messages, words, media placeholders and links.
pub fn fetch_stats(view: &View<'_>) -> Summary {
    view.iter().fold(Summary::default(), |mut acc, event| {
        acc.messages += 1;
        acc.words += event.text.split_whitespace().count();
        acc.media += usize::from(event.is_media_omitted());
        acc.links += URL.find_iter(&event.text).count();
        acc
    })
}

/// Message count of one author.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserCount {
    pub user: String,
    pub count: usize,
}

/// Share of one author in a view.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserShare {
    pub user: String,
    pub count: usize,
    /// Percentage of the view, rounded to two decimals.
    pub percent: f64,
}

/// Author ranking of a view.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BusyUsers {
    /// The `n` most active authors.
    pub top: Vec<UserCount>,
    /// Every author with their share.
    pub shares: Vec<UserShare>,
}

/// Ranks authors by message count.
///
/// System notices count as the `group_notification` author. Ties keep
/// the order of first appearance.
pub fn most_busy_users(view: &View<'_>, n: usize) -> BusyUsers {
    let total = view.len();
    let ranked = rank_by_count(view.iter().map(|e| e.user()));

    let shares: Vec<UserShare> = ranked
        .iter()
        .map(|&(user, count)| UserShare {
            user: user.to_string(),
            count,
            percent: percentage(count, total),
        })
        .collect();

    let top = ranked
        .into_iter()
        .take(n)
        .map(|(user, count)| UserCount {
            user: user.to_string(),
            count,
        })
        .collect();

    BusyUsers { top, shares }
}

fn percentage(count: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    let raw = count as f64 / total as f64 * 100.0;
    (raw * 100.0).round() / 100.0
}

/// Counts keys and orders them by count descending.
///
/// Sorting is stable, so equal counts keep first-appearance order.
pub fn rank_by_count<K, I>(keys: I) -> Vec<(K, usize)>
where
    K: Eq + Hash + Clone,
    I: IntoIterator<Item = K>,
{
    let mut index: HashMap<K, usize> = HashMap::new();
    let mut counts: Vec<(K, usize)> = Vec::new();

    for key in keys {
        if let Some(&i) = index.get(&key) {
            counts[i].1 += 1;
        } else {
            index.insert(key.clone(), counts.len());
            counts.push((key, 1));
        }
    }

    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}
