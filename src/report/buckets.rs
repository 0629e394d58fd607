use std::collections::HashMap;

use chrono::{DateTime, Days, NaiveDate, Utc};

use serde::Serialize;

use crate::model::{Registration, View};

/// Length of the dashboard activity series, in days
pub const TRAILING_WINDOW_DAYS: usize = 30;

/// Records that can be counted per calendar day
pub trait Timestamped {
    fn timestamp(&self) -> DateTime<Utc>;
}

impl Timestamped for View {
    fn timestamp(&self) -> DateTime<Utc> {
        self.created_at
    }
}

impl Timestamped for Registration {
    fn timestamp(&self) -> DateTime<Utc> {
        self.created_at
    }
}

/// Number of records on a single day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DayCount {
    pub date: NaiveDate,
    pub count: u64,
}

/// The trailing window ending at `anchor`, oldest day first
pub fn trailing_window(anchor: NaiveDate) -> Vec<NaiveDate> {
    let start = anchor
        .checked_sub_days(Days::new(TRAILING_WINDOW_DAYS as u64 - 1))
        .unwrap_or(NaiveDate::MIN);

    start.iter_days().take(TRAILING_WINDOW_DAYS).collect()
}

/// Count records per UTC calendar day over the trailing window ending at `anchor`.
///
/// Always yields one entry per day of the window, zero-count days included.
/// Records outside of the window are ignored.
pub fn bucket_by_day<T: Timestamped>(records: &[T], anchor: NaiveDate) -> Vec<DayCount> {
    let mut counts: HashMap<NaiveDate, u64> = HashMap::new();
    for record in records {
        *counts.entry(record.timestamp().date_naive()).or_default() += 1;
    }

    trailing_window(anchor)
        .into_iter()
        .map(|date| DayCount {
            date,
            count: counts.get(&date).copied().unwrap_or(0),
        })
        .collect()
}

/// Views and registrations of a single day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DailyActivity {
    pub date: NaiveDate,
    pub views: u64,
    pub registrations: u64,
}

/// Combined views/registrations series over the trailing window
pub fn daily_activity(
    views: &[View],
    registrations: &[Registration],
    anchor: NaiveDate,
) -> Vec<DailyActivity> {
    bucket_by_day(views, anchor)
        .into_iter()
        .zip(bucket_by_day(registrations, anchor))
        .map(|(views, registrations)| DailyActivity {
            date: views.date,
            views: views.count,
            registrations: registrations.count,
        })
        .collect()
}
