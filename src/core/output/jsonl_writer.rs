//! JSON Lines (JSONL) output writer.
//!
//! One event per line keeps the file greppable and lets downstream tools
//! load events one at a time.

use std::fs::File;
use std::io::{BufWriter, Write};

use super::{EventRow, OutputConfig};
use crate::core::filter::View;
use crate::error::Result;

/// Writes events to JSONL (JSON Lines) format.
///
/// Each line is a valid JSON object:
/// ```jsonl
/// {"user":"Alice","message":"Hello\n","date":"2024-01-15 21:05:00"}
/// {"user":"Bob","message":"Hi\n","date":"2024-01-15 21:06:00"}
/// ```
pub fn write_jsonl(view: &View<'_>, output_path: &str, config: &OutputConfig) -> Result<()> {
    let file = File::create(output_path)?;
    let mut writer = BufWriter::new(file);
    write_lines(view, &mut writer, config)?;
    writer.flush()?;
    Ok(())
}

/// Converts events to a JSONL string.
pub fn to_jsonl(view: &View<'_>, config: &OutputConfig) -> Result<String> {
    let mut buffer = Vec::new();
    write_lines(view, &mut buffer, config)?;
    Ok(String::from_utf8(buffer)?)
}

fn write_lines<W: Write>(view: &View<'_>, sink: &mut W, config: &OutputConfig) -> Result<()> {
    for event in view.iter() {
        let line = serde_json::to_string(&EventRow::new(event, config))?;
        writeln!(sink, "{line}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::filter::Selector;
    use crate::parse_transcript;
    use std::io::{BufRead, BufReader};
    use tempfile::NamedTempFile;

    #[test]
    fn test_write_jsonl_basic() {
        let t = parse_transcript("15/01/24, 9:05 pm - Alice: Hello\n15/01/24, 9:06 pm - Bob: Hi\n");

        let temp_file = NamedTempFile::new().unwrap();
        let path = temp_file.path().to_str().unwrap();

        write_jsonl(&t.view(&Selector::overall()), path, &OutputConfig::new()).unwrap();

        let file = std::fs::File::open(path).unwrap();
        let lines: Vec<String> = BufReader::new(file).lines().map(|l| l.unwrap()).collect();
        assert_eq!(lines.len(), 2);

        let first: serde_json::Value = serde_json::from_str(&lines[0]).unwrap();
        assert_eq!(first["user"], "Alice");
        assert_eq!(first["message"], "Hello\n");

        let second: serde_json::Value = serde_json::from_str(&lines[1]).unwrap();
        assert_eq!(second["user"], "Bob");
    }

    #[test]
    fn test_to_jsonl_multiline_message_stays_on_one_line() {
        let t = parse_transcript("15/01/24, 9:05 pm - Alice: line one\nline two\n");
        let jsonl = to_jsonl(&t.view(&Selector::overall()), &OutputConfig::full()).unwrap();

        assert_eq!(jsonl.lines().count(), 1);
        let parsed: serde_json::Value = serde_json::from_str(jsonl.trim()).unwrap();
        assert_eq!(parsed["message"], "line one\nline two\n");
        assert_eq!(parsed["period"], "21-22");
        assert!(!jsonl.contains('['));
    }

    #[test]
    fn test_to_jsonl_empty() {
        let t = parse_transcript("");
        assert_eq!(
            to_jsonl(&t.view(&Selector::overall()), &OutputConfig::new()).unwrap(),
            ""
        );
    }
}
