//! Configuration types for parsing and analysis.
//!
//! This module provides plain configuration structs for library usage,
//! without any CLI framework dependencies.
//!
//! - [`TranscriptConfig`] - header convention used by the parser
//! - [`AnalysisConfig`] - result sizes for ranked statistics
//!
//! # Example
//!
//! ```rust
//! use chatscan::TranscriptParser;
//! use chatscan::config::TranscriptConfig;
//! use chatscan::parsing::HeaderStyle;
//!
//! let config = TranscriptConfig::new().with_header_style(HeaderStyle::TwentyFourHour);
//! let parser = TranscriptParser::with_config(config);
//! ```

use serde::{Deserialize, Serialize};

use crate::parsing::HeaderStyle;

/// Configuration for transcript parsing.
///
/// By default only the 12-hour header convention is recognized. With
/// `auto_detect` the parser samples the first lines and picks whichever
/// convention fits best, falling back to `header_style` when none does.
///
/// # Example
///
/// ```rust
/// use chatscan::config::TranscriptConfig;
///
/// let config = TranscriptConfig::new().with_auto_detect(true);
/// assert!(config.auto_detect);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranscriptConfig {
    /// Header convention (default: 12-hour)
    pub header_style: HeaderStyle,

    /// Guess the convention from the transcript (default: false)
    pub auto_detect: bool,
}

impl TranscriptConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the header convention.
    #[must_use]
    pub fn with_header_style(mut self, style: HeaderStyle) -> Self {
        self.header_style = style;
        self
    }

    /// Enables or disables convention detection.
    #[must_use]
    pub fn with_auto_detect(mut self, enabled: bool) -> Self {
        self.auto_detect = enabled;
        self
    }

    /// Returns the convention to use for `text`.
    pub fn resolve_style(&self, text: &str) -> HeaderStyle {
        if self.auto_detect {
            HeaderStyle::detect(text).unwrap_or(self.header_style)
        } else {
            self.header_style
        }
    }
}

/// Sizes of ranked analysis results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Number of authors in the busy-users ranking (default: 5)
    pub top_users: usize,

    /// Number of entries in the common-words ranking (default: 20)
    pub top_words: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            top_users: 5,
            top_words: 20,
        }
    }
}

impl AnalysisConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the busy-users ranking size.
    #[must_use]
    pub fn with_top_users(mut self, n: usize) -> Self {
        self.top_users = n;
        self
    }

    /// Sets the common-words ranking size.
    #[must_use]
    pub fn with_top_words(mut self, n: usize) -> Self {
        self.top_words = n;
        self
    }
}
