//! CSV output writer.

use std::fs::File;
use std::io::Write;

use super::{EventRow, OutputConfig};
use crate::core::filter::View;
use crate::error::Result;

/// Writes events to CSV with semicolon delimiter.
///
/// # Format
/// - Delimiter: `;`
/// - Columns: Depends on OutputConfig
///   - Basic: `user`, `message`, `date`
///   - With calendar: `year`, `month_num`, `month`, `day`, `day_name`,
///     `hour`, `minute`, `period` appended
///   - With errors: `error` appended
/// - Undated events leave date and calendar cells empty
/// - Encoding: UTF-8
pub fn write_csv(view: &View<'_>, output_path: &str, config: &OutputConfig) -> Result<()> {
    let file = File::create(output_path)?;
    write_records(view, file, config)
}

/// Converts events to a CSV string.
///
/// Same format as [`write_csv`], returned instead of written to a file.
pub fn to_csv(view: &View<'_>, config: &OutputConfig) -> Result<String> {
    let mut buffer = Vec::new();
    write_records(view, &mut buffer, config)?;
    Ok(String::from_utf8(buffer)?)
}

fn write_records<W: Write>(view: &View<'_>, sink: W, config: &OutputConfig) -> Result<()> {
    let mut writer = csv::WriterBuilder::new().delimiter(b';').from_writer(sink);

    writer.write_record(build_header(config))?;

    for event in view.iter() {
        let row = EventRow::new(event, config);
        writer.write_record(build_record(&row, config))?;
    }

    writer.flush()?;
    Ok(())
}

/// Build CSV header based on output configuration.
fn build_header(config: &OutputConfig) -> Vec<&'static str> {
    let mut header = vec!["user", "message", "date"];

    if config.include_calendar {
        header.extend([
            "year", "month_num", "month", "day", "day_name", "hour", "minute", "period",
        ]);
    }
    if config.include_errors {
        header.push("error");
    }

    header
}

/// Build CSV record for a single row.
fn build_record(row: &EventRow<'_>, config: &OutputConfig) -> Vec<String> {
    let mut record = vec![
        row.user.to_string(),
        row.message.to_string(),
        row.date.clone().unwrap_or_default(),
    ];

    if config.include_calendar {
        match &row.calendar {
            Some(c) => record.extend([
                c.year.to_string(),
                c.month_num.to_string(),
                c.month.to_string(),
                c.day.to_string(),
                c.day_name.to_string(),
                c.hour.to_string(),
                c.minute.to_string(),
                c.period.to_string(),
            ]),
            None => record.extend(std::iter::repeat_n(String::new(), 8)),
        }
    }
    if config.include_errors {
        record.push(row.error.clone().unwrap_or_default());
    }

    record
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::filter::Selector;
    use crate::parse_transcript;
    use tempfile::NamedTempFile;

    #[test]
    fn test_write_csv_basic() {
        let t = parse_transcript("15/01/24, 9:05 pm - Alice: Hello\n15/01/24, 9:06 pm - Bob: Hi there\n");

        let temp_file = NamedTempFile::new().unwrap();
        let path = temp_file.path().to_str().unwrap();

        write_csv(&t.view(&Selector::overall()), path, &OutputConfig::new()).unwrap();

        let content = std::fs::read_to_string(path).unwrap();
        assert!(content.starts_with("user;message;date\n"));
        assert!(content.contains("Alice;\"Hello\n\";2024-01-15 21:05:00"));
        assert!(content.contains("Bob;\"Hi there\n\";2024-01-15 21:06:00"));
    }

    #[test]
    fn test_to_csv_full_columns() {
        let t = parse_transcript("15/01/24, 9:05 pm - Alice: Hello\n31/04/24, 9:06 pm - Bob: Hi\n");
        let csv = to_csv(&t.view(&Selector::overall()), &OutputConfig::full()).unwrap();

        let mut reader = csv::ReaderBuilder::new()
            .delimiter(b';')
            .from_reader(csv.as_bytes());
        let headers = reader.headers().unwrap().clone();
        assert_eq!(headers.len(), 12);
        assert_eq!(&headers[10], "period");

        let records: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
        assert_eq!(&records[0][7], "Monday");
        assert_eq!(&records[0][10], "21-22");
        assert_eq!(&records[0][11], "");
        assert_eq!(&records[1][2], "");
        assert_eq!(&records[1][3], "");
        assert!(records[1][11].contains("31/04/24"));
    }
}
