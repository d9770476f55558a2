//! Output format selection.
//!
//! Library-level format types without CLI dependencies, so callers can pick
//! a writer from a name or file extension.
//!
//! # Example
//!
//! ```rust
//! # #[cfg(all(feature = "csv-output", feature = "json-output"))]
//! # fn example() -> chatscan::Result<()> {
//! use chatscan::core::filter::Selector;
//! use chatscan::core::output::OutputConfig;
//! use chatscan::format::{OutputFormat, write_to_format};
//! use chatscan::parse_transcript;
//!
//! let transcript = parse_transcript("15/01/24, 9:05 pm - Alice: Hello\n");
//! let view = transcript.view(&Selector::overall());
//!
//! // Pick the format from the extension
//! let format = OutputFormat::from_path("events.jsonl")?;
//! write_to_format(&view, "events.jsonl", format, &OutputConfig::full())?;
//! # Ok(())
//! # }
//! ```

use serde::{Deserialize, Serialize};

use crate::core::filter::View;
use crate::core::output::OutputConfig;
use crate::error::ChatscanError;

/// Output format of the event table.
///
/// # Example
///
/// ```rust
/// use chatscan::format::OutputFormat;
/// use std::str::FromStr;
///
/// let format = OutputFormat::from_str("jsonl").unwrap();
/// assert_eq!(format, OutputFormat::Jsonl);
/// assert_eq!(format.extension(), "jsonl");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum OutputFormat {
    /// CSV with semicolon delimiter (default)
    #[default]
    Csv,

    /// Pretty-printed JSON array
    Json,

    /// JSON Lines - one JSON object per line (also known as NDJSON)
    Jsonl,
}

/// Names accepted on the command line and as file extensions.
const NAMES: [(&str, OutputFormat); 4] = [
    ("csv", OutputFormat::Csv),
    ("json", OutputFormat::Json),
    ("jsonl", OutputFormat::Jsonl),
    ("ndjson", OutputFormat::Jsonl),
];

impl OutputFormat {
    /// Every writer the crate ships, in menu order.
    pub const ALL: [OutputFormat; 3] = [Self::Csv, Self::Json, Self::Jsonl];

    /// File extension without the dot.
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Json => "json",
            Self::Jsonl => "jsonl",
        }
    }

    /// Returns the MIME type for this format.
    ///
    /// ```rust
    /// use chatscan::format::OutputFormat;
    ///
    /// assert_eq!(OutputFormat::Json.mime_type(), "application/json");
    /// ```
    pub fn mime_type(&self) -> &'static str {
        match self {
            Self::Csv => "text/csv",
            Self::Json => "application/json",
            Self::Jsonl => "application/x-ndjson",
        }
    }

    /// Case-insensitive lookup in the name table.
    fn from_name(name: &str) -> Option<Self> {
        NAMES
            .iter()
            .find(|(known, _)| known.eq_ignore_ascii_case(name))
            .map(|&(_, format)| format)
    }

    fn known_names() -> String {
        NAMES.map(|(name, _)| name).join(", ")
    }

    /// Picks the writer matching the extension of `path`.
    pub fn from_path(path: &str) -> Result<Self, ChatscanError> {
        let ext = std::path::Path::new(path)
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or_default();

        Self::from_name(ext).ok_or_else(|| {
            ChatscanError::invalid_format(
                "output",
                format!(
                    "cannot infer a writer from extension '.{ext}' (known: {})",
                    Self::known_names()
                ),
            )
        })
    }

    fn feature(self) -> &'static str {
        match self {
            Self::Csv => "csv-output",
            Self::Json | Self::Jsonl => "json-output",
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.extension().to_uppercase())
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
            .ok_or_else(|| format!("no writer named '{s}' (known: {})", Self::known_names()))
    }
}

/// Writes the event table to a file in the specified format.
///
/// # Errors
///
/// Returns an error if:
/// - The required feature for the format is not enabled
/// - The file cannot be written
#[allow(unused_variables)]
pub fn write_to_format(
    view: &View<'_>,
    path: &str,
    format: OutputFormat,
    config: &OutputConfig,
) -> Result<(), ChatscanError> {
    match format {
        #[cfg(feature = "csv-output")]
        OutputFormat::Csv => crate::core::output::write_csv(view, path, config),
        #[cfg(feature = "json-output")]
        OutputFormat::Json => crate::core::output::write_json(view, path, config),
        #[cfg(feature = "json-output")]
        OutputFormat::Jsonl => crate::core::output::write_jsonl(view, path, config),
        #[allow(unreachable_patterns)]
        _ => Err(feature_disabled(format)),
    }
}

/// Converts the event table to a string in the specified format.
#[allow(unused_variables)]
pub fn to_format_string(
    view: &View<'_>,
    format: OutputFormat,
    config: &OutputConfig,
) -> Result<String, ChatscanError> {
    match format {
        #[cfg(feature = "csv-output")]
        OutputFormat::Csv => crate::core::output::to_csv(view, config),
        #[cfg(feature = "json-output")]
        OutputFormat::Json => crate::core::output::to_json(view, config),
        #[cfg(feature = "json-output")]
        OutputFormat::Jsonl => crate::core::output::to_jsonl(view, config),
        #[allow(unreachable_patterns)]
        _ => Err(feature_disabled(format)),
    }
}

#[allow(dead_code)]
fn feature_disabled(format: OutputFormat) -> ChatscanError {
    ChatscanError::invalid_format(
        "output",
        format!("{format} writer is compiled out; enable the '{}' feature", format.feature()),
    )
}
