//! Header conventions for WhatsApp transcript exports.
//!
//! Every line-group of an export starts with a header such as
//! `15/01/24, 9:05 pm - `. Two conventions of the same family are known:
//! the 12-hour one (the default, and the only one used unless asked for)
//! and a 24-hour variant without the meridiem.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// How many leading lines [`HeaderStyle::detect`] samples.
const DETECT_SAMPLE_LINES: usize = 20;

static TWELVE_HOUR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(HeaderStyle::TwelveHour.pattern()).unwrap());

static TWENTY_FOUR_HOUR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(HeaderStyle::TwentyFourHour.pattern()).unwrap());

/// Header convention of a transcript.
///
/// # Example
///
/// ```rust
/// use chatscan::parsing::HeaderStyle;
///
/// let text = "15/01/24, 9:05 pm - Alice: Hi\n15/01/24, 9:06 pm - Bob: Hey\n";
/// assert_eq!(HeaderStyle::detect(text), Some(HeaderStyle::TwelveHour));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HeaderStyle {
    /// `DD/MM/YY, H:MM am - ` (meridiem case-insensitive)
    #[default]
    TwelveHour,
    /// `DD/MM/YY, HH:MM - `
    TwentyFourHour,
}

impl HeaderStyle {
    /// Returns the lexical header pattern.
    ///
    /// Digits are ASCII only. `\s` also accepts the narrow no-break space
    /// newer exports put before the meridiem.
    pub fn pattern(self) -> &'static str {
        match self {
            // 15/01/24, 9:05 pm -
            HeaderStyle::TwelveHour => {
                r"[0-9]{2}/[0-9]{2}/[0-9]{2},\s[0-9]{1,2}:[0-9]{2}\s(?i:[ap]m)\s-\s"
            }
            // 15/01/24, 21:05 -
            HeaderStyle::TwentyFourHour => r"[0-9]{2}/[0-9]{2}/[0-9]{2},\s[0-9]{1,2}:[0-9]{2}\s-\s",
        }
    }

    /// Returns the compiled header pattern.
    pub fn regex(self) -> &'static Regex {
        match self {
            HeaderStyle::TwelveHour => &*TWELVE_HOUR,
            HeaderStyle::TwentyFourHour => &*TWENTY_FOUR_HOUR,
        }
    }

    /// Returns the chrono format for a normalized header (single spaces,
    /// trailing ` - ` removed).
    pub fn date_parse_format(self) -> &'static str {
        match self {
            HeaderStyle::TwelveHour => "%d/%m/%y, %I:%M %p",
            HeaderStyle::TwentyFourHour => "%d/%m/%y, %H:%M",
        }
    }

    /// Returns all known conventions.
    pub fn all() -> &'static [HeaderStyle] {
        &[HeaderStyle::TwelveHour, HeaderStyle::TwentyFourHour]
    }

    /// Returns `true` if `line` starts with a header of this style.
    pub fn starts_line(self, line: &str) -> bool {
        self.regex().find(line).is_some_and(|m| m.start() == 0)
    }

    /// Guesses the convention from the first lines of a transcript.
    ///
    /// Returns the style matching the most line starts, preferring
    /// [`TwelveHour`](HeaderStyle::TwelveHour) on ties, or `None` if no
    /// sampled line starts with a header.
    pub fn detect(text: &str) -> Option<HeaderStyle> {
        let mut scores = [0usize; 2];

        for line in text.lines().take(DETECT_SAMPLE_LINES) {
            for (i, style) in HeaderStyle::all().iter().enumerate() {
                if style.starts_line(line) {
                    scores[i] += 1;
                }
            }
        }

        let max_score = *scores.iter().max()?;
        if max_score == 0 {
            return None;
        }

        let winner_idx = scores.iter().position(|&s| s == max_score)?;
        Some(HeaderStyle::all()[winner_idx])
    }
}

impl std::fmt::Display for HeaderStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HeaderStyle::TwelveHour => write!(f, "12-hour"),
            HeaderStyle::TwentyFourHour => write!(f, "24-hour"),
        }
    }
}
