//! Header date parser.

use chrono::NaiveDateTime;

use super::HeaderStyle;
use crate::error::TimestampError;

/// Parses one header into its calendar instant.
///
/// Whitespace runs (including the narrow no-break space some exports put
/// before the meridiem) collapse to one ASCII space and the trailing `-`
/// separator is removed before handing the text to chrono. Failure is a
/// value, never a panic.
///
/// # Example
///
/// ```rust
/// use chatscan::parsing::{HeaderStyle, parse_header};
/// use chrono::Timelike;
///
/// let ts = parse_header("15/01/24, 9:05 pm - ", HeaderStyle::TwelveHour).unwrap();
/// assert_eq!(ts.hour(), 21);
///
/// let err = parse_header("31/04/24, 9:05 pm - ", HeaderStyle::TwelveHour).unwrap_err();
/// assert_eq!(err.header, "31/04/24, 9:05 pm - ");
/// ```
pub fn parse_header(header: &str, style: HeaderStyle) -> Result<NaiveDateTime, TimestampError> {
    let normalized = normalize(header);
    NaiveDateTime::parse_from_str(&normalized, style.date_parse_format())
        .map_err(|e| TimestampError::new(header, e.to_string()))
}

fn normalize(header: &str) -> String {
    let joined = header.split_whitespace().collect::<Vec<_>>().join(" ");
    match joined.strip_suffix(" -") {
        Some(stripped) => stripped.to_string(),
        None => joined,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn test_normalize() {
        assert_eq!(normalize("15/01/24, 9:05 pm - "), "15/01/24, 9:05 pm");
        assert_eq!(normalize("15/01/24,  9:05\u{202f}PM - "), "15/01/24, 9:05 PM");
    }

    #[test]
    fn test_parse_twelve_hour() {
        let ts = parse_header("15/01/24, 9:05 pm - ", HeaderStyle::TwelveHour).unwrap();
        assert_eq!((ts.year(), ts.month(), ts.day()), (2024, 1, 15));
        assert_eq!((ts.hour(), ts.minute()), (21, 5));
    }

    #[test]
    fn test_parse_midnight_and_noon() {
        let midnight = parse_header("01/02/23, 12:00 am - ", HeaderStyle::TwelveHour).unwrap();
        assert_eq!(midnight.hour(), 0);

        let noon = parse_header("01/02/23, 12:30 pm - ", HeaderStyle::TwelveHour).unwrap();
        assert_eq!(noon.hour(), 12);
    }

    #[test]
    fn test_parse_uppercase_meridiem() {
        let ts = parse_header("15/01/24, 10:30 AM - ", HeaderStyle::TwelveHour).unwrap();
        assert_eq!(ts.hour(), 10);
    }

    #[test]
    fn test_parse_twenty_four_hour() {
        let ts = parse_header("15/01/24, 21:05 - ", HeaderStyle::TwentyFourHour).unwrap();
        assert_eq!((ts.hour(), ts.minute()), (21, 5));
    }

    #[test]
    fn test_impossible_date_is_error() {
        let err = parse_header("31/04/24, 10:00 am - ", HeaderStyle::TwelveHour).unwrap_err();
        assert_eq!(err.header, "31/04/24, 10:00 am - ");
        assert!(!err.reason.is_empty());

        assert!(parse_header("32/13/99, 5:99 pm - ", HeaderStyle::TwelveHour).is_err());
        assert!(parse_header("29/02/23, 1:00 pm - ", HeaderStyle::TwelveHour).is_err());
    }

    #[test]
    fn test_hour_out_of_twelve_hour_range() {
        assert!(parse_header("15/01/24, 13:05 pm - ", HeaderStyle::TwelveHour).is_err());
        assert!(parse_header("15/01/24, 0:05 am - ", HeaderStyle::TwelveHour).is_err());
    }

    #[test]
    fn test_leap_day() {
        assert!(parse_header("29/02/24, 1:00 pm - ", HeaderStyle::TwelveHour).is_ok());
    }
}
