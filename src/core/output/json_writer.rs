//! JSON output writer.

use std::fs::File;
use std::io::Write;

use super::{EventRow, OutputConfig};
use crate::core::filter::View;
use crate::error::Result;

/// Writes events to a JSON file as an array.
///
/// # Format
/// ```json
/// [
///   {"user": "Alice", "message": "Hello\n", "date": "2024-01-15 21:05:00"},
///   {"user": "group_notification", "message": "Bob left\n", "date": null}
/// ]
/// ```
pub fn write_json(view: &View<'_>, output_path: &str, config: &OutputConfig) -> Result<()> {
    let json = to_json(view, config)?;
    let mut file = File::create(output_path)?;
    file.write_all(json.as_bytes())?;
    Ok(())
}

/// Converts events to a JSON array string.
///
/// Same format as [`write_json`], returned instead of written to a file.
pub fn to_json(view: &View<'_>, config: &OutputConfig) -> Result<String> {
    let rows: Vec<EventRow<'_>> = view.iter().map(|e| EventRow::new(e, config)).collect();
    Ok(serde_json::to_string_pretty(&rows)?)
}
