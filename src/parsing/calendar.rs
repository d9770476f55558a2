//! Derived calendar fields.

use chrono::{Datelike, NaiveDateTime, Timelike, Weekday};

use crate::event::{Calendar, HourBucket};

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

const WEEKDAY_NAMES: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// English name of a month number in `1..=12`.
pub fn month_name(month: u32) -> Option<&'static str> {
    let idx = usize::try_from(month.checked_sub(1)?).ok()?;
    MONTH_NAMES.get(idx).copied()
}

/// English name of a weekday.
pub fn weekday_name(weekday: Weekday) -> &'static str {
    WEEKDAY_NAMES[weekday.num_days_from_monday() as usize]
}

/// Computes every derived field of a dated event.
///
/// ```rust
/// use chatscan::parsing::{HeaderStyle, enrich, parse_header};
///
/// let ts = parse_header("01/01/24, 11:59 pm - ", HeaderStyle::TwelveHour).unwrap();
/// let cal = enrich(ts);
///
/// assert_eq!(cal.month, "January");
/// assert_eq!(cal.weekday_name, "Monday");
/// assert_eq!(cal.hour_bucket.label(), "23-00");
/// ```
pub fn enrich(timestamp: NaiveDateTime) -> Calendar {
    let date = timestamp.date();
    let weekday = date.weekday();

    Calendar {
        timestamp,
        date,
        year: date.year(),
        month: MONTH_NAMES[date.month0() as usize],
        month_num: date.month(),
        day: date.day(),
        weekday,
        weekday_name: weekday_name(weekday),
        hour: timestamp.hour(),
        minute: timestamp.minute(),
        hour_bucket: HourBucket::of(&timestamp),
    }
}
