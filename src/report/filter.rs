use chrono::NaiveDate;

use crate::domain::{AreaSelector, SearchQuery};
use crate::model::Event;

/// Events passing the calendar area filter, in their original order.
///
/// Matching is done on the event's area ID. `AreaSelector::All` keeps every event.
pub fn filter_by_area<'a>(events: &'a [Event], selector: &AreaSelector) -> Vec<&'a Event> {
    events
        .iter()
        .filter(|event| selector.matches(event.area_id))
        .collect()
}

/// Events falling on a single calendar day
pub fn events_on<'e>(events: &[&'e Event], day: NaiveDate) -> Vec<&'e Event> {
    events
        .iter()
        .copied()
        .filter(|event| event.date == day)
        .collect()
}

/// Case-insensitive search over name, location, description and area name
pub fn search<'a>(events: &'a [Event], query: &SearchQuery) -> Vec<&'a Event> {
    if query.is_blank() {
        return Vec::new();
    }
    let needle = query.as_ref();

    events
        .iter()
        .filter(|event| {
            let contains = |text: &str| text.to_lowercase().contains(needle);

            contains(&event.name)
                || contains(&event.location)
                || event.description.as_deref().map_or(false, contains)
                || event.area.as_ref().map_or(false, |area| contains(&area.name))
        })
        .collect()
}
