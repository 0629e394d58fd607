use chrono::NaiveDate;

use serde::Serialize;

use crate::domain::{AreaSelector, MonthSelection, Navigation};
use crate::error::{Error, Result};
use crate::model::Event;

use super::calendar::{
    calendar_cells, month_label, month_options, month_start, CalendarCell, MonthOption,
    NavigationWindow,
};
use super::filter::{events_on, filter_by_area};

/// Day cell of the calendar with the events happening on it
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalendarDay {
    #[serde(flatten)]
    pub cell: CalendarCell,
    pub events: Vec<Event>,
}

/// Public calendar view-model
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalendarView {
    /// Displayed month
    pub month: MonthSelection,
    pub label: String,
    pub area: AreaSelector,
    pub days: Vec<CalendarDay>,
    pub can_go_previous: bool,
    pub can_go_next: bool,
    /// Entries of the month selector
    pub months: Vec<MonthOption>,
}

/// Work out which date to render from the selected month and an optional
/// navigation command applied on top of it
pub fn resolve_reference(
    selection: &MonthSelection,
    navigation: Option<Navigation>,
    today: NaiveDate,
    window: &NavigationWindow,
) -> Result<NaiveDate> {
    let reference = selection.reference_date(today);
    if !window.contains(reference) {
        return Err(Error::NavigationOutOfRange(selection.to_string()));
    }

    match navigation {
        Some(navigation) => window.navigate(reference, navigation),
        None => Ok(reference),
    }
}

impl CalendarView {
    pub fn build(
        events: &[Event],
        reference: NaiveDate,
        today: NaiveDate,
        area: AreaSelector,
        window: &NavigationWindow,
        month_count: u32,
    ) -> Self {
        let filtered = filter_by_area(events, &area);

        let days = calendar_cells(reference, today)
            .into_iter()
            .map(|cell| CalendarDay {
                events: events_on(&filtered, cell.date).into_iter().cloned().collect(),
                cell,
            })
            .collect();

        let month = if month_start(reference) == month_start(today) {
            MonthSelection::Current
        } else {
            MonthSelection::of(reference)
        };

        Self {
            month,
            label: month_label(reference),
            area,
            days,
            can_go_previous: window.can_navigate(reference, Navigation::Previous),
            can_go_next: window.can_navigate(reference, Navigation::Next),
            months: month_options(today, month_count),
        }
    }
}
