use chrono::{Datelike, Days, Months, NaiveDate};

use serde::Serialize;

use crate::domain::{MonthSelection, Navigation};
use crate::error::{Error, Result};

/// First day of the month containing `date`
pub fn month_start(date: NaiveDate) -> NaiveDate {
    date - Days::new(u64::from(date.day0()))
}

/// Last day of the month containing `date`
pub fn month_end(date: NaiveDate) -> NaiveDate {
    month_start(date)
        .checked_add_months(Months::new(1))
        .and_then(|next| next.pred_opt())
        .unwrap_or(NaiveDate::MAX)
}

/// Dates of every cell of a month calendar.
///
/// The grid spans whole Monday-started weeks, from the week holding the first
/// day of the month through the week holding its last day, so it includes the
/// leading and trailing days of the neighbouring months.
pub fn month_grid(reference: NaiveDate) -> Vec<NaiveDate> {
    let first = month_start(reference);
    let last = month_end(reference);

    let start = first - Days::new(u64::from(first.weekday().num_days_from_monday()));
    let end = last + Days::new(u64::from(6 - last.weekday().num_days_from_monday()));

    start.iter_days().take_while(|day| *day <= end).collect()
}

/// A single day cell of a month calendar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CalendarCell {
    pub date: NaiveDate,
    /// `false` for the padding days of the neighbouring months
    pub in_reference_month: bool,
    pub is_today: bool,
}

/// Month grid with the per-cell flags the calendar needs
pub fn calendar_cells(reference: NaiveDate, today: NaiveDate) -> Vec<CalendarCell> {
    month_grid(reference)
        .into_iter()
        .map(|date| CalendarCell {
            date,
            in_reference_month: date.year() == reference.year() && date.month() == reference.month(),
            is_today: date == today,
        })
        .collect()
}

/// Shift a date by exactly one calendar month, clamping the day to the target month
pub fn shift_month(reference: NaiveDate, navigation: Navigation) -> Option<NaiveDate> {
    match navigation {
        Navigation::Next => reference.checked_add_months(Months::new(1)),
        Navigation::Previous => reference.checked_sub_months(Months::new(1)),
    }
}

/// Months the public calendar may show: the current month through `horizon` months ahead
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationWindow {
    earliest: NaiveDate,
    latest: NaiveDate,
}

impl NavigationWindow {
    pub fn new(today: NaiveDate, horizon_months: u32) -> Self {
        let earliest = month_start(today);
        let latest = earliest
            .checked_add_months(Months::new(horizon_months))
            .unwrap_or(NaiveDate::MAX);

        Self { earliest, latest }
    }
    /// Start of the first navigable month
    pub fn earliest(&self) -> NaiveDate {
        self.earliest
    }
    /// Start of the last navigable month
    pub fn latest(&self) -> NaiveDate {
        self.latest
    }
    /// Whether the month containing `date` is navigable
    pub fn contains(&self, date: NaiveDate) -> bool {
        let start = month_start(date);
        self.earliest <= start && start <= self.latest
    }
    /// Apply a navigation command, refusing to leave the window
    pub fn navigate(&self, reference: NaiveDate, navigation: Navigation) -> Result<NaiveDate> {
        let candidate = shift_month(reference, navigation)
            .ok_or_else(|| Error::NavigationOutOfRange(reference.to_string()))?;

        if !self.contains(candidate) {
            return Err(Error::NavigationOutOfRange(
                MonthSelection::of(candidate).to_string(),
            ));
        }
        Ok(candidate)
    }

    pub fn can_navigate(&self, reference: NaiveDate, navigation: Navigation) -> bool {
        self.navigate(reference, navigation).is_ok()
    }
}

/// Entry of the month selector
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthOption {
    pub value: MonthSelection,
    pub label: String,
    pub start: NaiveDate,
}

/// `count` consecutive months starting with the current one
pub fn month_options(today: NaiveDate, count: u32) -> Vec<MonthOption> {
    let first = month_start(today);

    (0..count)
        .filter_map(|offset| first.checked_add_months(Months::new(offset)))
        .map(|start| {
            let value = if start == first {
                MonthSelection::Current
            } else {
                MonthSelection::Month(start)
            };
            MonthOption {
                value,
                label: month_label(start),
                start,
            }
        })
        .collect()
}

/// Calendar header text, e.g. `April 2025`
pub fn month_label(date: NaiveDate) -> String {
    date.format("%B %Y").to_string()
}
