//! Command-line interface definition using clap.
//!
//! This module defines:
//! - [`Args`] - CLI argument structure (for use with clap)
//! - [`OutputFormat`] - Output format options, convertible to
//!   [`format::OutputFormat`](crate::format::OutputFormat)
//!
//! `Args` also knows how to turn itself into library configuration, so the
//! binary stays a thin report printer.

use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::config::{AnalysisConfig, TranscriptConfig};
use crate::core::filter::Selector;
use crate::error::Result;
use crate::parsing::HeaderStyle;

/// Default output path; its extension follows `--format`.
pub const DEFAULT_OUTPUT: &str = "chat_events.csv";

/// Analyze an exported WhatsApp chat: statistics, timelines, activity maps,
/// word frequency and sensitive-word flags.
#[derive(Parser, Debug, Clone)]
#[command(name = "chatscan")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    chatscan chat.txt
    chatscan chat.txt --user Alice --after 2024-01-01
    chatscan chat.txt --stop-words stop_hinglish.txt --top 10
    chatscan chat.txt --bad-words bad_words.txt --sensitive
    chatscan chat.txt -f jsonl -o events.jsonl
    chatscan chat.txt --twenty-four-hour")]
pub struct Args {
    /// Path to the exported transcript
    pub input: String,

    /// Path to the event table
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    pub output: String,

    /// Event table format
    #[arg(short, long, value_enum, default_value = "csv")]
    pub format: OutputFormat,

    /// Analyze one author only ("Overall" for everyone)
    #[arg(long, value_name = "NAME")]
    pub user: Option<String>,

    /// Keep events on or after this date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub after: Option<String>,

    /// Keep events on or before this date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub before: Option<String>,

    /// Newline-delimited stop-word list
    #[arg(long, value_name = "FILE")]
    pub stop_words: Option<String>,

    /// Newline-delimited word list to flag (repeatable)
    #[arg(long, value_name = "FILE")]
    pub bad_words: Vec<String>,

    /// Also flag the built-in sensitive vocabulary
    #[arg(long)]
    pub sensitive: bool,

    /// List messages containing this text (case-insensitive)
    #[arg(long, value_name = "TERM")]
    pub search: Option<String>,

    /// Number of entries in ranked lists
    #[arg(long, value_name = "N")]
    pub top: Option<usize>,

    /// Transcript uses 24-hour headers (`15/01/24, 21:05 - `)
    #[arg(long, conflicts_with = "auto_detect")]
    pub twenty_four_hour: bool,

    /// Guess the header convention from the first lines
    #[arg(long)]
    pub auto_detect: bool,

    /// Verbose logging (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// Parser configuration for the selected header convention.
    pub fn transcript_config(&self) -> TranscriptConfig {
        let style = if self.twenty_four_hour {
            HeaderStyle::TwentyFourHour
        } else {
            HeaderStyle::TwelveHour
        };
        TranscriptConfig::new()
            .with_header_style(style)
            .with_auto_detect(self.auto_detect)
    }

    /// Ranking sizes, `--top` overriding both.
    pub fn analysis_config(&self) -> AnalysisConfig {
        match self.top {
            Some(n) => AnalysisConfig::new().with_top_users(n).with_top_words(n),
            None => AnalysisConfig::new(),
        }
    }

    /// Query scope from `--user`, `--after` and `--before`.
    pub fn selector(&self) -> Result<Selector> {
        let mut selector = self
            .user
            .as_deref()
            .map_or_else(Selector::overall, Selector::from_choice);
        if let Some(ref after) = self.after {
            selector = selector.with_date_from(after)?;
        }
        if let Some(ref before) = self.before {
            selector = selector.with_date_to(before)?;
        }
        Ok(selector)
    }

    /// Output path, with the extension following `--format` when the
    /// default path is used.
    pub fn output_path(&self) -> String {
        if self.output != DEFAULT_OUTPUT {
            return self.output.clone();
        }
        let lib_format: crate::format::OutputFormat = self.format.into();
        format!("chat_events.{}", lib_format.extension())
    }

    /// `tracing` filter directive for `-v` occurrences.
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "debug",
            _ => "trace",
        }
    }
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// CSV with semicolon delimiter (default)
    #[default]
    Csv,

    /// JSON array of events
    Json,

    /// JSON Lines - one JSON object per line
    #[value(alias = "ndjson")]
    Jsonl,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        crate::format::OutputFormat::from(*self).fmt(f)
    }
}

// Conversion to library format type
impl From<OutputFormat> for crate::format::OutputFormat {
    fn from(format: OutputFormat) -> crate::format::OutputFormat {
        match format {
            OutputFormat::Csv => crate::format::OutputFormat::Csv,
            OutputFormat::Json => crate::format::OutputFormat::Json,
            OutputFormat::Jsonl => crate::format::OutputFormat::Jsonl,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(extra: &[&str]) -> Args {
        let mut argv = vec!["chatscan", "chat.txt"];
        argv.extend_from_slice(extra);
        Args::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_defaults() {
        let a = args(&[]);
        assert_eq!(a.output, DEFAULT_OUTPUT);
        assert_eq!(a.format, OutputFormat::Csv);
        assert_eq!(a.transcript_config(), TranscriptConfig::default());
        assert_eq!(a.analysis_config(), AnalysisConfig::default());
        assert_eq!(a.selector().unwrap(), Selector::overall());
        assert_eq!(a.log_level(), "warn");
    }

    #[test]
    fn test_output_path_follows_format() {
        assert_eq!(args(&["-f", "jsonl"]).output_path(), "chat_events.jsonl");
        assert_eq!(args(&["-f", "json", "-o", "x.out"]).output_path(), "x.out");
    }

    #[test]
    fn test_selector_from_args() {
        let a = args(&["--user", "Alice", "--after", "2024-01-01"]);
        let selector = a.selector().unwrap();
        assert_eq!(selector.user.as_deref(), Some("Alice"));
        assert!(selector.from.is_some());

        assert_eq!(args(&["--user", "Overall"]).selector().unwrap(), Selector::overall());
        assert!(args(&["--before", "yesterday"]).selector().is_err());
    }

    #[test]
    fn test_header_flags() {
        let a = args(&["--twenty-four-hour"]);
        assert_eq!(a.transcript_config().header_style, HeaderStyle::TwentyFourHour);

        let a = args(&["--auto-detect"]);
        assert!(a.transcript_config().auto_detect);

        assert!(
            Args::try_parse_from(["chatscan", "chat.txt", "--twenty-four-hour", "--auto-detect"])
                .is_err()
        );
    }

    #[test]
    fn test_repeatable_bad_words_and_verbosity() {
        let a = args(&["--bad-words", "a.txt", "--bad-words", "b.txt", "-vv", "--top", "3"]);
        assert_eq!(a.bad_words, vec!["a.txt", "b.txt"]);
        assert_eq!(a.log_level(), "trace");
        assert_eq!(a.analysis_config().top_users, 3);
    }

    #[test]
    fn test_format_display() {
        assert_eq!(OutputFormat::Jsonl.to_string(), "JSONL");
    }
}
