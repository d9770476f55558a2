//! Timelines and activity maps.
//!
//! Every function here reads only dated events; undated events have no
//! place on a calendar axis and are skipped.

use std::collections::BTreeMap;

use chrono::{NaiveDate, Weekday};
use serde::Serialize;

use super::filter::View;
use crate::event::HourBucket;
use crate::parsing::{month_name, weekday_name};

/// Message count of one calendar month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthlyPoint {
    pub year: i32,
    pub month_num: u32,
    pub month: &'static str,
    /// `"{Month}-{year}"`, e.g. `"January-2024"`.
    pub label: String,
    pub count: usize,
}

/// Message count of one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DailyPoint {
    pub date: NaiveDate,
    pub count: usize,
}

/// Counts messages per month, oldest first. Months without messages are
/// absent.
///
/// ```rust
/// use chatscan::core::filter::Selector;
/// use chatscan::core::timeline::monthly_timeline;
/// use chatscan::parse_transcript;
///
/// let t = parse_transcript(
///     "15/02/24, 9:05 pm - A: x\n15/01/24, 9:05 pm - B: y\n20/01/24, 9:05 pm - A: z\n",
/// );
/// let timeline = monthly_timeline(&t.view(&Selector::overall()));
///
/// assert_eq!(timeline[0].label, "January-2024");
/// assert_eq!(timeline[0].count, 2);
/// assert_eq!(timeline[1].label, "February-2024");
/// ```
pub fn monthly_timeline(view: &View<'_>) -> Vec<MonthlyPoint> {
    let mut months: BTreeMap<(i32, u32), usize> = BTreeMap::new();
    for (_, cal) in view.dated() {
        *months.entry((cal.year, cal.month_num)).or_default() += 1;
    }

    months
        .into_iter()
        .map(|((year, month_num), count)| {
            let month = month_name(month_num).unwrap_or_default();
            MonthlyPoint {
                year,
                month_num,
                month,
                label: format!("{month}-{year}"),
                count,
            }
        })
        .collect()
}

/// Counts messages per calendar date, oldest first.
pub fn daily_timeline(view: &View<'_>) -> Vec<DailyPoint> {
    let mut days: BTreeMap<NaiveDate, usize> = BTreeMap::new();
    for (_, cal) in view.dated() {
        *days.entry(cal.date).or_default() += 1;
    }

    days.into_iter()
        .map(|(date, count)| DailyPoint { date, count })
        .collect()
}

/// Counts messages per weekday name, busiest first. Ties follow
/// Monday..Sunday; weekdays without messages are absent.
pub fn weekday_activity(view: &View<'_>) -> Vec<(&'static str, usize)> {
    let mut counts = [0usize; 7];
    for (_, cal) in view.dated() {
        counts[cal.weekday.num_days_from_monday() as usize] += 1;
    }

    let mut ranked: Vec<(&'static str, usize)> = WEEKDAYS
        .iter()
        .zip(counts)
        .filter(|(_, count)| *count > 0)
        .map(|(day, count)| (weekday_name(*day), count))
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked
}

/// Counts messages per month name across years, busiest first. Ties follow
/// January..December; months without messages are absent.
pub fn month_activity(view: &View<'_>) -> Vec<(&'static str, usize)> {
    let mut counts = [0usize; 12];
    for (_, cal) in view.dated() {
        counts[cal.month_num as usize - 1] += 1;
    }

    let mut ranked: Vec<(&'static str, usize)> = (1u32..=12)
        .zip(counts)
        .filter(|(_, count)| *count > 0)
        .filter_map(|(m, count)| month_name(m).map(|name| (name, count)))
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked
}

const WEEKDAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// Weekday by hour-bucket message counts.
///
/// Rows run Monday..Sunday, columns `00-1`..`23-00`. Empty cells are zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Heatmap {
    cells: [[usize; 24]; 7],
}

impl Heatmap {
    /// Count of one cell.
    pub fn get(&self, weekday: Weekday, bucket: HourBucket) -> usize {
        self.cells[weekday.num_days_from_monday() as usize][bucket.hour() as usize]
    }

    /// Counts of one weekday, in bucket order.
    pub fn row(&self, weekday: Weekday) -> &[usize; 24] {
        &self.cells[weekday.num_days_from_monday() as usize]
    }

    /// Rows paired with their weekday names, Monday first.
    pub fn rows(&self) -> impl Iterator<Item = (&'static str, &[usize; 24])> + '_ {
        WEEKDAYS
            .iter()
            .map(move |day| (weekday_name(*day), self.row(*day)))
    }

    /// Sum of all cells.
    pub fn total(&self) -> usize {
        self.cells.iter().flatten().sum()
    }

    /// The busiest cell, earliest on ties. `None` when empty.
    pub fn peak(&self) -> Option<(Weekday, HourBucket, usize)> {
        let mut best: Option<(Weekday, HourBucket, usize)> = None;
        for day in WEEKDAYS {
            for bucket in HourBucket::all() {
                let count = self.get(day, bucket);
                if count > 0 && best.is_none_or(|(_, _, c)| count > c) {
                    best = Some((day, bucket, count));
                }
            }
        }
        best
    }
}

/// Builds the weekday by hour-bucket grid.
pub fn activity_heatmap(view: &View<'_>) -> Heatmap {
    let mut heatmap = Heatmap::default();
    for (_, cal) in view.dated() {
        let day = cal.weekday.num_days_from_monday() as usize;
        heatmap.cells[day][cal.hour_bucket.hour() as usize] += 1;
    }
    heatmap
}
